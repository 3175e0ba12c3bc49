//! Status line output
//!
//! Every run produces an ordered list of leveled status lines. INFO lines
//! go to stdout, ERROR lines to stderr.

use colored::*;
use std::fmt;
use std::io::{self, Write};

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

/// One line of run output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub level: Level,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Render with a coloured label, honouring the global colour override
    pub fn render(&self) -> String {
        let label = match self.level {
            Level::Info => self.level.label().green(),
            Level::Error => self.level.label().red().bold(),
        };
        format!("{label}: {}", self.text)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.label(), self.text)
    }
}

/// Write lines in order, routing each by level
pub fn write_lines<O: Write, E: Write>(
    lines: &[StatusLine],
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    for line in lines {
        if line.is_error() {
            writeln!(err, "{}", line.render())?;
        } else {
            writeln!(out, "{}", line.render())?;
        }
    }
    out.flush()?;
    err.flush()
}
