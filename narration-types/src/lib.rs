//! # narration-types
//!
//! Shared value types for chapter narration: audio markers, marker ids,
//! the global and per-verse narration state tables, and the transition
//! requests that drive them. No behaviour lives here beyond the tables
//! themselves; see `narration-core` for the placement model and the
//! state machine.

mod error;
pub mod marker;
pub mod state;
mod transition;

pub use error::StateError;
pub use marker::{
    AudioCue, AudioMarker, MarkerCategory, MarkerKind, PlacementType,
};
pub use state::*;
pub use transition::NarrationStateTransition;

/// Unique identifier for a marker item within one placement session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct MarkerId(u32);

impl MarkerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
