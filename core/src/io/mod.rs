//! Formats for exporting/importing patterns.
//!
//! Every format is a plain value type that can be `parse()`d from a string and
//! printed with `to_string()`, and converts to/from a [`Grid`] via
//! [`SerializablePattern`]. [`CaFormat`] picks a format by file extension and
//! [`read_file()`]/[`write_file()`] handle the files themselves.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub mod life106;
pub mod plaintext;
pub mod rle;

use crate::grid::Grid;
pub use life106::{Life106, Life106Error, Life106Result};
pub use plaintext::{Plaintext, PlaintextError, PlaintextResult};
pub use rle::{Rle, RleError, RleResult};

/// Result type returned by fallible file/format routines.
pub type CaFormatResult<T> = Result<T, CaFormatError>;

/// Format that a pattern can be exported to or imported from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CaFormat {
    /// Golly-style [run-length encoding](https://conwaylife.com/wiki/Run_Length_Encoded).
    Rle,
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) grid of `.` and `O`.
    Plaintext,
    /// [Life 1.06](https://conwaylife.com/wiki/Life_1.06) list of coordinates.
    Life106,
}
impl fmt::Display for CaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaFormat::Rle => write!(f, "RLE"),
            CaFormat::Plaintext => write!(f, "Plaintext"),
            CaFormat::Life106 => write!(f, "Life 1.06"),
        }
    }
}
impl CaFormat {
    /// Returns the file extensions recognized for this format, in lowercase.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            CaFormat::Rle => &["rle"],
            CaFormat::Plaintext => &["txt", "text"],
            CaFormat::Life106 => &["life", "lif"],
        }
    }

    /// Returns the format associated with a file extension (without the dot).
    pub fn from_extension(extension: &str) -> CaFormatResult<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "rle" => Ok(CaFormat::Rle),
            "txt" | "text" => Ok(CaFormat::Plaintext),
            "life" | "lif" => Ok(CaFormat::Life106),
            _ => Err(CaFormatError::UnsupportedFormat(extension.to_owned())),
        }
    }
    /// Returns the format associated with a file name.
    pub fn from_path(path: impl AsRef<Path>) -> CaFormatResult<Self> {
        Self::from_extension(&extension_of(path)?)
    }

    /// Reads a whole pattern from `reader`.
    pub fn decode(self, mut reader: impl Read) -> CaFormatResult<Grid> {
        let mut s = String::new();
        reader.read_to_string(&mut s)?;
        import_grid_from_string(&s, self)
    }
    /// Writes `grid` to `writer`, covering the whole grid including any dead
    /// border. Use [`Grid::bounding_box()`] first to trim it.
    pub fn encode(self, grid: &Grid, mut writer: impl Write) -> CaFormatResult<()> {
        writer.write_all(export_grid_to_string(grid, self).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Error produced during pattern export/import.
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum CaFormatError {
    #[error("file name {0:?} has no extension")]
    NoExtension(PathBuf),
    #[error("unsupported file format {0:?}")]
    UnsupportedFormat(String),
    #[error("failed to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("RLE error: {0}")]
    Rle(#[from] RleError),
    #[error("Plaintext error: {0}")]
    Plaintext(#[from] PlaintextError),
    #[error("Life 1.06 error: {0}")]
    Life106(#[from] Life106Error),
}

/// Trait for string representations of patterns.
///
/// The error returned from these methods is the same one that `from_str()`
/// returns.
pub trait SerializablePattern: FromStr + fmt::Display {
    /// Converts a grid into this format, covering the whole grid.
    fn from_grid(grid: &Grid) -> Self;
    /// Converts the pattern into a grid.
    fn to_grid(&self) -> Result<Grid, Self::Err>;

    /// Deserializes a grid.
    fn from_string_to_grid(s: &str) -> Result<Grid, Self::Err> {
        s.parse::<Self>()?.to_grid()
    }
    /// Serializes a grid.
    fn from_grid_to_string(grid: &Grid) -> String {
        Self::from_grid(grid).to_string()
    }
}

/// Exports a grid to a string using a particular format.
pub fn export_grid_to_string(grid: &Grid, format: CaFormat) -> String {
    match format {
        CaFormat::Rle => Rle::from_grid_to_string(grid),
        CaFormat::Plaintext => Plaintext::from_grid_to_string(grid),
        CaFormat::Life106 => Life106::from_grid_to_string(grid),
    }
}
/// Imports a grid from a string using a particular format.
pub fn import_grid_from_string(s: &str, format: CaFormat) -> CaFormatResult<Grid> {
    match format {
        CaFormat::Rle => Ok(Rle::from_string_to_grid(s)?),
        CaFormat::Plaintext => Ok(Plaintext::from_string_to_grid(s)?),
        CaFormat::Life106 => Ok(Life106::from_string_to_grid(s)?),
    }
}

/// Returns the lowercase text after the last `.` in the file name, which is
/// empty if the name ends with `.`.
pub fn extension_of(path: impl AsRef<Path>) -> CaFormatResult<String> {
    let path = path.as_ref();
    let no_extension = || CaFormatError::NoExtension(path.to_owned());
    let file_name = path.file_name().ok_or_else(no_extension)?.to_string_lossy();
    let i = file_name.rfind('.').ok_or_else(no_extension)?;
    Ok(file_name[i + 1..].to_ascii_lowercase())
}

/// Reads a pattern from a file, choosing the format by file extension.
pub fn read_file(path: impl AsRef<Path>) -> CaFormatResult<Grid> {
    let path = path.as_ref();
    let format = CaFormat::from_path(path)?;
    let file = File::open(path).map_err(|source| CaFormatError::FileOpen {
        path: path.to_owned(),
        source,
    })?;
    format.decode(BufReader::new(file))
}

/// Writes a pattern to a file, choosing the format by file extension. The file
/// is not created if the extension is not supported.
pub fn write_file(path: impl AsRef<Path>, grid: &Grid) -> CaFormatResult<()> {
    let path = path.as_ref();
    let format = CaFormat::from_path(path)?;
    let file = File::create(path).map_err(|source| CaFormatError::FileOpen {
        path: path.to_owned(),
        source,
    })?;
    format.encode(grid, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider() -> Grid {
        let mut ret = Grid::new(3, 3).unwrap();
        for &(x, y) in &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            ret.set_cell(x, y, true).unwrap();
        }
        ret
    }

    #[test]
    fn test_extension_of() {
        assert_eq!("rle", extension_of("glider.rle").unwrap());
        assert_eq!("life", extension_of("dir/Gun.LIFE").unwrap());
        assert_eq!("txt", extension_of("a.b.c.TxT").unwrap());
        assert!(matches!(
            extension_of("README"),
            Err(CaFormatError::NoExtension(_))
        ));
        assert_eq!("", extension_of("trailing.").unwrap());
        assert!(matches!(
            CaFormat::from_path("trailing."),
            Err(CaFormatError::UnsupportedFormat(ext)) if ext.is_empty()
        ));
    }

    #[test]
    fn test_ca_format_from_extension() {
        assert_eq!(CaFormat::Rle, CaFormat::from_extension("rle").unwrap());
        assert_eq!(CaFormat::Plaintext, CaFormat::from_extension("txt").unwrap());
        assert_eq!(CaFormat::Plaintext, CaFormat::from_extension("text").unwrap());
        assert_eq!(CaFormat::Life106, CaFormat::from_extension("life").unwrap());
        assert_eq!(CaFormat::Life106, CaFormat::from_extension("LIF").unwrap());
        assert!(matches!(
            CaFormat::from_extension("mc"),
            Err(CaFormatError::UnsupportedFormat(ext)) if ext == "mc"
        ));
        for &format in &[CaFormat::Rle, CaFormat::Plaintext, CaFormat::Life106] {
            for ext in format.extensions() {
                assert_eq!(format, CaFormat::from_extension(ext).unwrap());
            }
        }
    }

    #[test]
    fn test_decode_encode_streams() {
        for &format in &[CaFormat::Rle, CaFormat::Plaintext, CaFormat::Life106] {
            let mut buf = vec![];
            format.encode(&glider(), &mut buf).unwrap();
            assert_eq!(glider(), format.decode(&buf[..]).unwrap(), "{}", format);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        for name in &["g.rle", "g.txt", "g.text", "g.life", "g.lif"] {
            let path = dir.path().join(name);
            write_file(&path, &glider()).unwrap();
            assert_eq!(glider(), read_file(&path).unwrap(), "{}", name);
        }
    }

    #[test]
    fn test_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.rle");
        assert!(matches!(
            read_file(&missing),
            Err(CaFormatError::FileOpen { path, .. }) if path == missing
        ));

        let unsupported = dir.path().join("glider.mc");
        assert!(matches!(
            write_file(&unsupported, &glider()),
            Err(CaFormatError::UnsupportedFormat(_))
        ));
        assert!(!unsupported.exists());

        let bad_dir = dir.path().join("no_such_dir").join("glider.rle");
        assert!(matches!(
            write_file(&bad_dir, &glider()),
            Err(CaFormatError::FileOpen { .. })
        ));

        let garbage = dir.path().join("garbage.rle");
        std::fs::write(&garbage, "x = 3, y = 3\nbo$3q!").unwrap();
        assert!(matches!(
            read_file(&garbage),
            Err(CaFormatError::Rle(RleError::InvalidToken('q')))
        ));
    }
}
