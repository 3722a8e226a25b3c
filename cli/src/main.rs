//! Headless front-end: loads a pattern file, runs it for some generations,
//! prints the result, and optionally saves it.

#![warn(missing_docs)]

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;

use cgol_core::prelude::*;

mod config;

use config::Config;

const USAGE: &str = "usage: cgol <pattern-file> [generations] [output-file]";

/// Positional command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    input: PathBuf,
    generations: usize,
    output: Option<PathBuf>,
}
impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let input = args.next().context(USAGE)?.into();
        let generations = match args.next() {
            Some(s) => s
                .parse()
                .with_context(|| format!("Invalid generation count {:?}", s))?,
            None => 1,
        };
        let output = args.next().map(PathBuf::from);
        if args.next().is_some() {
            bail!(USAGE);
        }
        Ok(Self {
            input,
            generations,
            output,
        })
    }
}

fn main() -> Result<()> {
    let config = Config::default();
    simple_logger::init_with_level(config.log_level)?;
    info!("Starting cgol v{} ...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse(std::env::args().skip(1))?;
    run(&config, &args)
}

fn run(config: &Config, args: &Args) -> Result<()> {
    let pattern = read_file(&args.input)
        .with_context(|| format!("Error while loading {}", args.input.display()))?;
    info!(
        "Loaded {}x{} pattern from {}",
        pattern.width(),
        pattern.height(),
        args.input.display(),
    );

    let sim_config = config.sim.fitting(pattern.width(), pattern.height());
    let mut sim = Simulation::from_config(&sim_config).context("Error while creating grid")?;
    sim.load_pattern(&pattern)
        .context("Error while placing pattern")?;

    for _ in 0..args.generations {
        let population = sim.step_forward().population();
        debug!("Generation {}: population {}", sim.tick(), population);
    }
    print!("{}", sim.current());

    if let Some(output) = &args.output {
        match sim.current().bounding_box() {
            Ok(minimal) => {
                write_file(output, &minimal)
                    .with_context(|| format!("Error while saving {}", output.display()))?;
                info!("Saved generation {} to {}", sim.tick(), output.display());
            }
            Err(GridError::EmptyPattern) => {
                warn!("Pattern died out; not saving {}", output.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Result<Args> {
        Args::parse(strs.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            Args {
                input: "glider.rle".into(),
                generations: 1,
                output: None,
            },
            args(&["glider.rle"]).unwrap(),
        );
        assert_eq!(
            Args {
                input: "glider.rle".into(),
                generations: 12,
                output: Some("out.life".into()),
            },
            args(&["glider.rle", "12", "out.life"]).unwrap(),
        );
        assert!(args(&[]).is_err());
        assert!(args(&["glider.rle", "-3"]).is_err());
        assert!(args(&["a.rle", "1", "b.rle", "c.rle"]).is_err());
    }

    #[test]
    fn test_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("blinker.txt");
        let output = dir.path().join("blinker.rle");
        std::fs::write(&input, "OOO\n").unwrap();

        let config = Config::default();
        let args = Args {
            input,
            generations: 3,
            output: Some(output.clone()),
        };
        run(&config, &args).unwrap();
        assert_eq!(
            "x = 1, y = 3\no$o$o$!",
            std::fs::read_to_string(&output).unwrap()
        );

        // Nothing is saved once the pattern dies.
        let lonely = dir.path().join("lonely.life");
        let output = dir.path().join("lonely_out.life");
        std::fs::write(&lonely, "#Life 1.06\n0 0\n").unwrap();
        let args = Args {
            input: lonely,
            generations: 1,
            output: Some(output.clone()),
        };
        run(&config, &args).unwrap();
        assert!(!output.exists());
    }
}
