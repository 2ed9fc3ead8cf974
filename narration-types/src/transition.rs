use serde::{Deserialize, Serialize};

/// A request to move the narration workflow forward.
///
/// Requests that act on one verse are paired with a verse index by the
/// caller; the rest ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NarrationStateTransition {
    Record,
    PauseRecording,
    ResumeRecording,
    Next,
    RecordAgain,
    PauseRecordAgain,
    ResumeRecordAgain,
    Save,
    PlayAudio,
    PauseAudioPlayback,
    PausePlaybackWhileModifyingAudio,
    SaveFinished,
    MoveMarker,
    PlaceMarker,
    PlaceMarkerWhileModifyingAudio,
}

impl NarrationStateTransition {
    /// Whether the request addresses a single verse and cannot run without one.
    pub fn requires_verse(self) -> bool {
        matches!(
            self,
            Self::Record
                | Self::PauseRecording
                | Self::ResumeRecording
                | Self::Next
                | Self::RecordAgain
                | Self::PauseRecordAgain
                | Self::ResumeRecordAgain
        )
    }
}
