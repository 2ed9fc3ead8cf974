use serde::{Deserialize, Serialize};

use crate::StateError;

/// State of a single verse row in the narration view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerseItemState {
    #[default]
    BeginRecording,
    Record,
    RecordDisabled,
    RecordActive,
    RecordingPaused,
    PlayingWhileRecordingPaused,
    Playing,
    RecordAgain,
    RecordAgainDisabled,
    RecordAgainActive,
    RecordAgainPaused,
}

impl VerseItemState {
    pub fn valid_transitions(self) -> &'static [VerseItemState] {
        use VerseItemState::*;
        match self {
            BeginRecording => &[Record, RecordDisabled],
            Record => &[Record, RecordActive, RecordDisabled],
            RecordDisabled => &[Record, RecordActive],
            RecordActive => &[RecordingPaused, RecordAgain, RecordAgainDisabled],
            RecordingPaused => &[
                RecordActive,
                RecordAgain,
                RecordAgainDisabled,
                PlayingWhileRecordingPaused,
            ],
            PlayingWhileRecordingPaused => &[RecordingPaused],
            Playing => &[Record, RecordAgain],
            RecordAgain => &[RecordAgainActive, RecordAgainDisabled, Playing],
            RecordAgainDisabled => &[RecordAgain],
            RecordAgainActive => &[RecordAgainPaused, RecordAgain],
            RecordAgainPaused => &[RecordAgainActive, RecordAgain, RecordAgainDisabled],
        }
    }

    pub fn can_change_to(self, target: VerseItemState) -> bool {
        self.valid_transitions().contains(&target)
    }

    pub fn change_state(self, target: VerseItemState) -> Result<Self, StateError> {
        if self.can_change_to(target) {
            Ok(target)
        } else {
            Err(StateError::IllegalVerseTransition {
                from: self,
                to: target,
            })
        }
    }

    /// The greyed-out form of this state, if it has one. Disabled states
    /// project onto themselves.
    pub fn disabled(self) -> Option<VerseItemState> {
        use VerseItemState::*;
        match self {
            BeginRecording | Record | RecordDisabled | RecordingPaused => Some(RecordDisabled),
            RecordAgain | RecordAgainDisabled | RecordAgainActive => Some(RecordAgainDisabled),
            RecordActive | PlayingWhileRecordingPaused | Playing | RecordAgainPaused => None,
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, Self::RecordDisabled | Self::RecordAgainDisabled)
    }

    /// Anything past the point of first recording.
    pub fn has_recording(self) -> bool {
        !matches!(self, Self::BeginRecording | Self::Record | Self::RecordDisabled)
    }

    pub fn is_active_recording(self) -> bool {
        matches!(
            self,
            Self::RecordActive
                | Self::RecordAgainActive
                | Self::RecordingPaused
                | Self::RecordAgainPaused
        )
    }

    /// Recorded and not being re-recorded.
    pub fn is_recorded(self) -> bool {
        matches!(self, Self::RecordAgain | Self::RecordAgainDisabled)
    }
}
