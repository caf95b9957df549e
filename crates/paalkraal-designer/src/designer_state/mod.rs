//! Designer state manager for UI integration.
//!
//! Owns the fence design and the pending turn selection, applies user
//! commands, and hands fresh snapshots to whoever renders them.
//!
//! Split into submodules:
//! - `sections`: append, remove-last, reset
//! - `settings`: settings replacement and turn selection
//! - `snapshot`: derived geometry and materials for presentation

mod sections;
mod settings;
mod snapshot;

pub use snapshot::DesignSnapshot;

use crate::commands::DesignerCommand;
use crate::design::FenceDesign;
use crate::error::DesignerResult;
use paalkraal_settings::FenceSettings;
use tracing::debug;

type SnapshotListener = Box<dyn Fn(&DesignSnapshot)>;

/// Designer state for UI integration
///
/// Single-threaded: every command runs to completion and listeners see the
/// resulting snapshot before the next command is accepted.
pub struct DesignerState {
    design: FenceDesign,
    pending_turn: f64,
    listeners: Vec<SnapshotListener>,
}

impl DesignerState {
    /// Creates a new, empty designer with the given settings.
    pub fn new(settings: FenceSettings) -> Self {
        Self {
            design: FenceDesign::new(settings),
            pending_turn: 0.0,
            listeners: Vec::new(),
        }
    }

    pub fn design(&self) -> &FenceDesign {
        &self.design
    }

    pub fn settings(&self) -> &FenceSettings {
        self.design.settings()
    }

    /// Turn in degrees that the next appended section will use.
    pub fn pending_turn(&self) -> f64 {
        self.pending_turn
    }

    /// Register a callback invoked with a fresh snapshot after every change.
    pub fn on_design_changed<F>(&mut self, callback: F)
    where
        F: Fn(&DesignSnapshot) + 'static,
    {
        self.listeners.push(Box::new(callback));
    }

    /// Apply a command and return the resulting snapshot.
    ///
    /// A rejected command leaves the state untouched.
    pub fn execute(&mut self, command: DesignerCommand) -> DesignerResult<DesignSnapshot> {
        debug!("Executing {}", command);
        match command {
            DesignerCommand::Append(kind) => {
                self.append(kind);
            }
            DesignerCommand::SetPendingTurn(degrees) => self.set_pending_turn(degrees)?,
            DesignerCommand::RemoveLast => {
                self.remove_last();
            }
            DesignerCommand::Reset => self.reset(),
            DesignerCommand::UpdateSettings(settings) => self.update_settings(settings)?,
        }
        Ok(self.snapshot())
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(FenceSettings::default())
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("design", &self.design)
            .field("pending_turn", &self.pending_turn)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
