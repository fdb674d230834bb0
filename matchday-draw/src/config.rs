//! Configuration types for the draw engine
//!
//! Level 4 - Utilities and configuration
//!
//! The setup panel clamps values with [`DrawConfig::clamped`] before
//! every engine call; non-interactive callers (import, API payloads)
//! use [`DrawConfig::validate`] to reject instead of clamp. The engine
//! itself assumes it only ever sees in-range values.

use matchday_core::{DrawError, SeriesFormat};
use serde::{Deserialize, Serialize};

/// Smallest roster a knockout draw is offered for
pub const MIN_PARTICIPANTS: u32 = 4;
/// Largest roster the setup panel allows
pub const MAX_PARTICIPANTS: u32 = 32;
/// Fewer than two groups is no group stage at all
pub const MIN_GROUPS: u32 = 2;
/// Group labels stop at 'H'
pub const MAX_GROUPS: u32 = 8;
/// At least the group winner advances
pub const MIN_PROMOTED: u32 = 1;
/// At most four teams advance per group
pub const MAX_PROMOTED: u32 = 4;

/// Series format per bracket stage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Format for every round before the semi-finals
    pub base: SeriesFormat,
    /// Format for the semi-final round (when the bracket has one)
    pub semifinal: SeriesFormat,
    /// Format for the final
    #[serde(rename = "final")]
    pub finals: SeriesFormat,
}

impl FormatOptions {
    /// Set the base-round format
    pub fn with_base(mut self, format: SeriesFormat) -> Self {
        self.base = format;
        self
    }

    /// Set the semi-final format
    pub fn with_semifinal(mut self, format: SeriesFormat) -> Self {
        self.semifinal = format;
        self
    }

    /// Set the final format
    pub fn with_finals(mut self, format: SeriesFormat) -> Self {
        self.finals = format;
        self
    }
}

/// Draw configuration as held by the setup panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawConfig {
    /// Number of participating teams
    pub participant_count: u32,
    /// Whether a group stage precedes the knockout bracket
    pub use_group_stage: bool,
    /// Number of groups when the group stage is on
    pub group_count: u32,
    /// Teams promoted from each group into the bracket
    pub promotion_per_group: u32,
    /// Series format per stage
    pub formats: FormatOptions,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            participant_count: 8,
            use_group_stage: false,
            group_count: MIN_GROUPS,
            promotion_per_group: 2,
            formats: FormatOptions::default(),
        }
    }
}

impl DrawConfig {
    /// Create a config with a group stage enabled
    pub fn with_groups(group_count: u32, promotion_per_group: u32) -> Self {
        Self {
            use_group_stage: true,
            group_count,
            promotion_per_group,
            ..Default::default()
        }
    }

    /// Set the participant count
    pub fn with_participants(mut self, count: u32) -> Self {
        self.participant_count = count;
        self
    }

    /// Set the per-stage formats
    pub fn with_formats(mut self, formats: FormatOptions) -> Self {
        self.formats = formats;
        self
    }

    /// Clamp every numeric field into its valid range.
    ///
    /// Applied by the setup panel on each keystroke, so a half-typed
    /// "3" on the way to "32" still yields a buildable configuration.
    pub fn clamped(mut self) -> Self {
        self.participant_count = self.participant_count.clamp(MIN_PARTICIPANTS, MAX_PARTICIPANTS);
        self.group_count = self.group_count.clamp(MIN_GROUPS, MAX_GROUPS);
        self.promotion_per_group = self.promotion_per_group.clamp(MIN_PROMOTED, MAX_PROMOTED);
        self
    }

    /// Strict range check for non-interactive callers
    pub fn validate(&self) -> Result<(), DrawError> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&self.participant_count) {
            return Err(DrawError::ParticipantCount(
                self.participant_count,
                MIN_PARTICIPANTS,
                MAX_PARTICIPANTS,
            ));
        }
        if self.use_group_stage {
            if !(MIN_GROUPS..=MAX_GROUPS).contains(&self.group_count) {
                return Err(DrawError::GroupCount(self.group_count, MIN_GROUPS, MAX_GROUPS));
            }
            if !(MIN_PROMOTED..=MAX_PROMOTED).contains(&self.promotion_per_group) {
                return Err(DrawError::PromotionPerGroup(
                    self.promotion_per_group,
                    MIN_PROMOTED,
                    MAX_PROMOTED,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DrawConfig::default();
        assert_eq!(config.participant_count, 8);
        assert!(!config.use_group_stage);
        assert_eq!(config.formats.base, SeriesFormat::Single);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_groups() {
        let config = DrawConfig::with_groups(4, 2);
        assert!(config.use_group_stage);
        assert_eq!(config.group_count, 4);
        assert_eq!(config.promotion_per_group, 2);
    }

    #[test]
    fn test_clamped() {
        let config = DrawConfig {
            participant_count: 100,
            use_group_stage: true,
            group_count: 1,
            promotion_per_group: 9,
            formats: FormatOptions::default(),
        }
        .clamped();

        assert_eq!(config.participant_count, MAX_PARTICIPANTS);
        assert_eq!(config.group_count, MIN_GROUPS);
        assert_eq!(config.promotion_per_group, MAX_PROMOTED);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = DrawConfig::default().with_participants(3);
        assert!(matches!(
            config.validate(),
            Err(DrawError::ParticipantCount(3, _, _))
        ));

        let config = DrawConfig::with_groups(9, 2);
        assert!(matches!(config.validate(), Err(DrawError::GroupCount(9, _, _))));
    }

    #[test]
    fn test_validate_ignores_group_fields_when_disabled() {
        // Stale group settings are harmless while the stage is off
        let config = DrawConfig {
            group_count: 99,
            promotion_per_group: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_options_builder() {
        let formats = FormatOptions::default()
            .with_base(SeriesFormat::Single)
            .with_semifinal(SeriesFormat::TwoLeg)
            .with_finals(SeriesFormat::BestOf5);
        assert_eq!(formats.semifinal, SeriesFormat::TwoLeg);
        assert_eq!(formats.finals, SeriesFormat::BestOf5);
    }

    #[test]
    fn test_config_serde_shape() {
        let json = serde_json::to_value(DrawConfig::default()).unwrap();
        assert_eq!(json["participantCount"], 8);
        assert_eq!(json["formats"]["final"], "single");
    }
}
