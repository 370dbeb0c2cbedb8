//! Error taxonomy of the almanac.

use thiserror::Error;

/// Errors surfaced by almanac queries.
///
/// Scoring functions never fail; they clamp. Only symbol parsing, profile
/// parsing, the lunar provider and configuration loading can fail.
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// A Can or Chi name that is not one of the 10 stems or 12 branches.
    #[error("unrecognised Can/Chi symbol: {symbol:?}")]
    InvalidSymbol { symbol: String },

    /// A birth profile field that cannot be parsed.
    #[error("malformed profile field {field}: {value:?}")]
    MalformedProfile { field: &'static str, value: String },

    /// The lunar date provider could not answer.
    #[error("lunar date provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    /// A Gregorian triple that names no real day.
    #[error("invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AlmanacError {
    pub(crate) fn invalid_symbol(symbol: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            symbol: symbol.into(),
        }
    }

    /// Wraps a provider failure of any displayable kind.
    pub fn provider(reason: impl std::fmt::Display) -> Self {
        Self::ProviderUnavailable {
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = AlmanacError> = std::result::Result<T, E>;
