use thiserror::Error;

use crate::{NarrationStateType, VerseItemState};

/// Illegal moves through the narration state tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("illegal narration transition from {from:?} to {to:?}")]
    IllegalNarrationTransition {
        from: NarrationStateType,
        to: NarrationStateType,
    },

    #[error("illegal verse transition from {from:?} to {to:?}")]
    IllegalVerseTransition {
        from: VerseItemState,
        to: VerseItemState,
    },

    /// The verse is mid-recording or mid-playback and has no disabled form.
    #[error("verse state {0:?} cannot be disabled")]
    CannotDisable(VerseItemState),
}
