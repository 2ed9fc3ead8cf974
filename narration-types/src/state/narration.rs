use serde::{Deserialize, Serialize};

use crate::StateError;

/// Workflow-wide narration state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NarrationStateType {
    #[default]
    IdleEmpty,
    IdleInProgress,
    IdleFinished,
    Recording,
    RecordingPaused,
    RecordingAgain,
    RecordingAgainPaused,
    Playing,
    ModifyingAudioFile,
    MovingMarker,
}

impl NarrationStateType {
    pub fn valid_transitions(self) -> &'static [NarrationStateType] {
        use NarrationStateType::*;
        match self {
            IdleEmpty => &[Recording, IdleInProgress, IdleFinished],
            IdleInProgress => &[
                Recording,
                RecordingAgain,
                Playing,
                IdleEmpty,
                ModifyingAudioFile,
                MovingMarker,
            ],
            IdleFinished => &[
                RecordingAgain,
                Playing,
                IdleEmpty,
                IdleInProgress,
                ModifyingAudioFile,
                MovingMarker,
            ],
            Recording => &[Recording, RecordingPaused, IdleInProgress, ModifyingAudioFile],
            RecordingPaused => &[
                Recording,
                RecordingAgain,
                Playing,
                IdleInProgress,
                ModifyingAudioFile,
            ],
            RecordingAgain => &[RecordingAgainPaused, IdleInProgress, ModifyingAudioFile],
            RecordingAgainPaused => &[RecordingAgain, IdleInProgress, ModifyingAudioFile],
            Playing => &[
                RecordingPaused,
                IdleInProgress,
                IdleFinished,
                ModifyingAudioFile,
            ],
            ModifyingAudioFile => &[
                RecordingAgain,
                Playing,
                IdleInProgress,
                IdleFinished,
                ModifyingAudioFile,
                MovingMarker,
            ],
            MovingMarker => &[IdleInProgress, IdleFinished, ModifyingAudioFile],
        }
    }

    pub fn can_change_to(self, target: NarrationStateType) -> bool {
        self.valid_transitions().contains(&target)
    }

    pub fn change_state(self, target: NarrationStateType) -> Result<Self, StateError> {
        if self.can_change_to(target) {
            Ok(target)
        } else {
            Err(StateError::IllegalNarrationTransition {
                from: self,
                to: target,
            })
        }
    }

    /// Any recording in progress, paused or not.
    pub fn is_recording(self) -> bool {
        matches!(
            self,
            Self::Recording
                | Self::RecordingPaused
                | Self::RecordingAgain
                | Self::RecordingAgainPaused
        )
    }
}
