//! Error types for time zone resolution.

use core::fmt;

use crate::civil::CivilDateTime;

/// The error type produced by resolver construction and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TzError {
    /// The requested identifier matched neither a zone nor an alias.
    UnknownZone(String),
    /// No compiled period covers the queried instant.
    OutOfRange {
        instant: CivilDateTime,
        zone: &'static str,
    },
}

impl fmt::Display for TzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownZone(id) => {
                write!(f, "unknown time zone identifier: {id:?}")
            }
            Self::OutOfRange { instant, zone } => {
                write!(f, "instant {instant} is outside the data range of zone {zone}")
            }
        }
    }
}

impl std::error::Error for TzError {}

/// The `tzresolve` result type.
pub type TzResult<T> = Result<T, TzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_inputs() {
        let err = TzError::UnknownZone("Mars/Olympus".into());
        assert_eq!(err.to_string(), "unknown time zone identifier: \"Mars/Olympus\"");

        let err = TzError::OutOfRange {
            instant: CivilDateTime::from_ymd(9999, 6, 1),
            zone: "Etc/UTC",
        };
        assert!(err.to_string().contains("9999-06-01 00:00:00"));
        assert!(err.to_string().contains("Etc/UTC"));
    }
}
