use narration_types::{MarkerKind, NarrationStateTransition, StateError};
use thiserror::Error;

/// Failure of a single narration transition. The machine keeps its last
/// committed state when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrationError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("{request:?} needs a verse index")]
    VerseIndexRequired { request: NarrationStateTransition },

    #[error("verse index {index} out of range for {len} verses")]
    VerseIndexOutOfRange { index: usize, len: usize },

    /// Play-all was requested while a recording sits paused.
    #[error("cannot play all verses while verse {verse} is recording-paused")]
    PlayAllWhileRecordingPaused { verse: usize },

    #[error("{request:?} refused while verse {verse} is recording-paused")]
    OtherVerseRecordingPaused {
        request: NarrationStateTransition,
        verse: usize,
    },
}

#[derive(Debug, Error)]
pub enum MarkerError {
    #[error("{0:?} markers cannot drive placement")]
    UnsupportedPlacementType(MarkerKind),

    #[error("invalid verse label {0:?}")]
    InvalidLabel(String),

    #[error("marker store: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("store rejected update: {0}")]
    Rejected(String),
}
