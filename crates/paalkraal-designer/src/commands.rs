//! Designer commands
//!
//! Every user action reaches the designer as one of these values. The
//! presentation layer builds them; [`DesignerState::execute`] applies them.
//!
//! [`DesignerState::execute`]: crate::DesignerState::execute

use crate::segment::SegmentKind;
use paalkraal_settings::FenceSettings;
use std::fmt;

/// Turn choices offered by the section toolbar. Any finite angle is
/// accepted; these are just the common ones.
pub const TURN_PRESETS: [f64; 5] = [-90.0, -45.0, 0.0, 45.0, 90.0];

#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    /// Add a section at the end of the run
    Append(SegmentKind),
    /// Choose the turn used by the next appended section
    SetPendingTurn(f64),
    /// Drop the last section
    RemoveLast,
    /// Clear the design and the pending turn
    Reset,
    /// Replace the settings
    UpdateSettings(FenceSettings),
}

impl DesignerCommand {
    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Append(SegmentKind::Gate) => "Add Gate",
            Self::Append(SegmentKind::Standard(_)) => "Add Section",
            Self::SetPendingTurn(_) => "Set Turn",
            Self::RemoveLast => "Undo Last",
            Self::Reset => "Reset All",
            Self::UpdateSettings(_) => "Update Settings",
        }
    }
}

impl fmt::Display for DesignerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append(kind) => write!(f, "{} ({})", self.name(), kind),
            Self::SetPendingTurn(deg) => write!(f, "{} ({}°)", self.name(), deg),
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paalkraal_core::PoleLength;

    #[test]
    fn test_command_display() {
        assert_eq!(
            DesignerCommand::Append(SegmentKind::Standard(PoleLength::M2_4)).to_string(),
            "Add Section (2.4m pole)"
        );
        assert_eq!(DesignerCommand::Append(SegmentKind::Gate).to_string(), "Add Gate (gate)");
        assert_eq!(DesignerCommand::SetPendingTurn(-45.0).to_string(), "Set Turn (-45°)");
        assert_eq!(DesignerCommand::RemoveLast.to_string(), "Undo Last");
    }

    #[test]
    fn test_turn_presets_are_symmetric() {
        for turn in TURN_PRESETS {
            assert!(TURN_PRESETS.contains(&-turn));
        }
    }
}
