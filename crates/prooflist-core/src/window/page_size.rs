//! Page size: a concrete count or the "all" sentinel

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use thiserror::Error;

/// Number of items per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSize {
    Count(NonZeroUsize),
    /// Show everything on one page
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid page size '{0}': expected a positive number or 'all'")]
pub struct ParsePageSizeError(pub String);

impl PageSize {
    /// A concrete size, `None` for 0
    #[must_use]
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self::Count)
    }

    /// Interpret the raw select value, where `-1` means all
    #[must_use]
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            -1 => Some(Self::All),
            n if n > 0 => usize::try_from(n).ok().and_then(Self::new),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_raw(self) -> i64 {
        match self {
            Self::Count(n) => i64::try_from(n.get()).unwrap_or(i64::MAX),
            Self::All => -1,
        }
    }

    /// The concrete count, `None` under All
    #[must_use]
    pub fn count(self) -> Option<usize> {
        match self {
            Self::Count(n) => Some(n.get()),
            Self::All => None,
        }
    }

    #[must_use]
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for PageSize {
    type Err = ParsePageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(Self::from_raw)
            .ok_or_else(|| ParsePageSizeError(s.to_string()))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::All => write!(f, "all"),
        }
    }
}
