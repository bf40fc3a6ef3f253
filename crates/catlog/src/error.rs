//! crates/catlog/src/error.rs
//! Errors raised while parsing flag tokens.

use std::fmt;

use thiserror::Error;

/// The flag set a token was parsed for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlagKind {
    /// A [`Category`](crate::Category) token.
    Category,
    /// A [`PrefixMode`](crate::PrefixMode) token.
    PrefixField,
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::PrefixField => "prefix field",
        })
    }
}

/// Error returned when a configuration token names no known flag.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown {kind}: {token:?}")]
pub struct ParseFlagsError {
    kind: FlagKind,
    token: String,
}

impl ParseFlagsError {
    pub(crate) fn new(kind: FlagKind, token: &str) -> Self {
        Self {
            kind,
            token: token.to_owned(),
        }
    }

    /// Returns which flag set the token was parsed for.
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        self.kind
    }

    /// Returns the offending token, trimmed.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
