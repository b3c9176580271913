//! Strongly-typed value objects used by the search pipeline.
//!
//! These wrappers enforce basic invariants (positive page numbers, positive
//! page sizes) so that once a value reaches the pagination layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided number is zero or negative.
    #[error("value must be greater than zero")]
    NonPositive,
    /// Provided text is not a base-10 integer.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Macro to generate lightweight newtypes for positive counters.
macro_rules! positive_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(u32);

        impl $name {
            /// Creates a new value ensuring it is greater than zero.
            pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositive)
                }
            }

            /// Returns the raw `u32` backing this value.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.starts_with('-') && trimmed[1..].parse::<u64>().is_ok() {
                    return Err(TypeConstraintError::NonPositive);
                }
                let value = trimmed
                    .parse::<u32>()
                    .map_err(|_| TypeConstraintError::InvalidNumber(s.to_string()))?;
                Self::new(value)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                i64::from(value.0)
            }
        }
    };
}

positive_newtype!(PageNumber, "One-based page number requested by a caller.");
positive_newtype!(PageSize, "Number of articles requested per upstream page.");

impl PageNumber {
    /// The page shown when the caller does not ask for one.
    pub const FIRST: PageNumber = PageNumber(1);
}

impl PageSize {
    /// Page size used when none is configured.
    pub const DEFAULT: PageSize = PageSize(20);
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}
