//! DrawError - Errors raised at the configuration boundary
//!
//! The draw engine itself never fails (too few teams is a structural
//! no-op, not an error); these variants exist for strict callers that
//! validate a configuration instead of clamping it, and for parsing
//! series-format strings off the wire.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("unknown series format: {0}")]
    UnknownFormat(String),

    #[error("participant count {0} outside {1}..={2}")]
    ParticipantCount(u32, u32, u32),

    #[error("group count {0} outside {1}..={2}")]
    GroupCount(u32, u32, u32),

    #[error("promotion per group {0} outside {1}..={2}")]
    PromotionPerGroup(u32, u32, u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DrawError::UnknownFormat("bo7".to_string());
        assert_eq!(err.to_string(), "unknown series format: bo7");

        let err = DrawError::GroupCount(12, 2, 8);
        assert_eq!(err.to_string(), "group count 12 outside 2..=8");
    }
}
