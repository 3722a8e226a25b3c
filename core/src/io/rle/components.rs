use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use super::*;

/// RLE contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rle {
    /// Size and rule.
    pub(super) header: RleHeader,
    /// RLE runs, up to and including the first `!` if there is one.
    pub(super) runs: Vec<RleRun>,
    /// Comment lines before the header, each starting with `#`.
    pub(super) comments: String,
}
impl Rle {
    /// Returns the header.
    pub fn header(&self) -> &RleHeader {
        &self.header
    }
    /// Returns the runs.
    pub fn runs(&self) -> &[RleRun] {
        &self.runs
    }

    /// Returns the name of the rule.
    pub fn rule(&self) -> Option<&str> {
        self.header.rule.as_deref()
    }
    /// Sets the rule name.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_rule(mut self, rule: Option<impl ToString>) -> Self {
        self.header.rule = rule.map(|r| r.to_string());
        self
    }

    /// Returns the comments.
    pub fn comments(&self) -> &str {
        &self.comments
    }
    /// Sets the comments. Lines that do not start with `#` are written with a
    /// `#C` prefix.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_comments(mut self, comments: impl ToString) -> Self {
        self.comments = comments.to_string();
        self
    }

    /// Returns true if the pattern ends with `!`.
    pub fn is_terminated(&self) -> bool {
        matches!(
            self.runs.last(),
            Some(RleRun {
                item: RleItem::End,
                ..
            })
        )
    }
}
impl fmt::Display for Rle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for comment_line in self.comments.trim_end().lines() {
            if !comment_line.starts_with('#') {
                write!(f, "#C ")?;
            }
            writeln!(f, "{}", comment_line)?;
        }
        writeln!(f, "{}", self.header)?;
        // The whole body goes on one line.
        for run in &self.runs {
            write!(f, "{}", run)?;
        }
        Ok(())
    }
}
impl FromStr for Rle {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        let mut header = None;
        let mut comments = String::new();
        let mut runs = vec![];

        let mut lines = s.lines();
        for line in &mut lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            } else if line.starts_with('#') {
                comments.push_str(line);
                comments.push('\n');
            } else {
                header = Some(line.parse()?);
                break;
            }
        }
        let header = header.ok_or(RleError::MalformedHeader)?;

        // Runs may continue across line breaks, but not across spaces within a
        // line.
        let body: String = lines.map(str::trim).collect();
        for run in RLE_RUN_REGEX.find_iter(&body) {
            let run: RleRun = run.as_str().parse()?;
            runs.push(run);
            if run.item == RleItem::End {
                break;
            }
        }

        Ok(Self {
            header,
            runs,
            comments,
        })
    }
}

/// RLE header contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RleHeader {
    /// Pattern width.
    pub width: usize,
    /// Pattern height.
    pub height: usize,
    /// Automaton rule, which is kept but not interpreted.
    pub rule: Option<String>,
}
impl fmt::Display for RleHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {}, y = {}", self.width, self.height)?;
        if let Some(rule) = &self.rule {
            write!(f, ", rule = {}", rule)?;
        }
        Ok(())
    }
}
impl FromStr for RleHeader {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        let mut width = None;
        let mut height = None;
        let mut rule = None;

        // Parse comma-separated parameters.
        for param in s.split(',') {
            // Each parameter consists of `name = value`.
            if let Some((key, value)) = param.splitn(2, '=').map(str::trim).collect_tuple() {
                if key.contains('x') {
                    width = Some(parse_rle_size(value)?);
                } else if key.contains('y') {
                    height = Some(parse_rle_size(value)?);
                } else if key.contains("rule") {
                    rule = Some(value.to_owned());
                }
                // Ignore unknown parameters.
            }
        }

        Ok(Self {
            width: width.ok_or(RleError::MalformedHeader)?,
            height: height.ok_or(RleError::MalformedHeader)?,
            rule,
        })
    }
}

fn parse_rle_size(s: &str) -> RleResult<usize> {
    match s.parse::<usize>() {
        Ok(0) => Err(RleError::InvalidSize),
        Ok(size) => Ok(size),
        Err(_) => Err(RleError::MalformedHeader),
    }
}

/// Run of repeated items in an RLE.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RleRun {
    /// Number of repetitions, always at least 1.
    pub count: usize,
    /// Repeated item.
    pub item: RleItem,
}
impl From<RleItem> for RleRun {
    fn from(item: RleItem) -> Self {
        Self { count: 1, item }
    }
}
impl FromStr for RleRun {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        let end_of_count = s
            .find(|ch: char| !ch.is_ascii_digit())
            .ok_or(RleError::InvalidItem)?;

        let count: usize = if end_of_count != 0 {
            s[..end_of_count]
                .parse()
                .map_err(|_| RleError::InvalidCount)?
        } else {
            1
        };
        if count == 0 {
            return Err(RleError::InvalidCount);
        }
        let item = s[end_of_count..].parse()?;

        Ok(Self { count, item })
    }
}
impl fmt::Display for RleRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count > 1 {
            write!(f, "{}", self.count)?;
        }
        if self.count > 0 {
            write!(f, "{}", self.item)?;
        }
        Ok(())
    }
}

/// Single "content item" that may be repeated in an RLE pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RleItem {
    /// Cell state.
    Cell(bool),
    /// End of the current row.
    NextRow,
    /// End of the whole RLE.
    End,
}
impl FromStr for RleItem {
    type Err = RleError;

    fn from_str(s: &str) -> RleResult<Self> {
        let (ch,) = s.chars().collect_tuple().ok_or(RleError::InvalidItem)?;
        match ch {
            'b' => Ok(Self::Cell(false)),
            'o' => Ok(Self::Cell(true)),
            '$' => Ok(Self::NextRow),
            '!' => Ok(Self::End),
            _ => Err(RleError::InvalidToken(ch)),
        }
    }
}
impl fmt::Display for RleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(false) => write!(f, "b"),
            Self::Cell(true) => write!(f, "o"),
            Self::NextRow => write!(f, "$"),
            Self::End => write!(f, "!"),
        }
    }
}
