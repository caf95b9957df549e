use super::DesignerState;
use crate::error::{DesignerError, DesignerResult};
use paalkraal_settings::FenceSettings;
use tracing::warn;

impl DesignerState {
    /// Selects the turn for the next appended section.
    pub fn set_pending_turn(&mut self, degrees: f64) -> DesignerResult<()> {
        if !degrees.is_finite() {
            warn!("Ignoring non-finite turn angle {}", degrees);
            return Err(DesignerError::NonFiniteTurn(degrees));
        }
        self.pending_turn = degrees;
        self.notify();
        Ok(())
    }

    /// Replaces the settings after validating them.
    ///
    /// Existing sections are resized when the joint overlap changed.
    pub fn update_settings(&mut self, settings: FenceSettings) -> DesignerResult<()> {
        if let Err(e) = settings.validate() {
            warn!("Rejected settings update: {}", e);
            return Err(e.into());
        }
        self.design.apply_settings(settings);
        self.notify();
        Ok(())
    }
}
