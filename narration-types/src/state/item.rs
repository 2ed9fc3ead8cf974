use serde::{Deserialize, Serialize};

use super::{NarrationStateType, VerseItemState};

/// What a verse row may offer, derived from its own state and the
/// workflow-wide state. Recomputed after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarratableItem {
    pub verse_state: VerseItemState,
    pub is_play_option_enabled: bool,
    pub is_edit_verse_option_enabled: bool,
    pub is_record_again_option_enabled: bool,
}

impl NarratableItem {
    pub fn project(verse_state: VerseItemState, global: NarrationStateType) -> Self {
        use NarrationStateType as G;

        let is_recording = global == G::Recording;
        let is_recording_paused = global == G::RecordingPaused;
        let is_recording_again = global == G::RecordingAgain;
        let is_record_again_paused = global == G::RecordingAgainPaused;
        let is_playing = global == G::Playing;
        let is_modifying_audio = global == G::ModifyingAudioFile;

        let has_recording = matches!(
            verse_state,
            VerseItemState::RecordAgainPaused
                | VerseItemState::RecordingPaused
                | VerseItemState::RecordAgain
        );
        let is_verse_recording_paused = verse_state == VerseItemState::RecordingPaused;
        let is_another_verse_recording_paused = is_recording_paused && !is_verse_recording_paused;

        let busy = is_recording || is_recording_again || is_record_again_paused || is_playing;

        NarratableItem {
            verse_state,
            is_play_option_enabled: has_recording && !(busy || is_another_verse_recording_paused),
            is_edit_verse_option_enabled: has_recording
                && !(busy || is_recording_paused || is_modifying_audio),
            is_record_again_option_enabled: has_recording
                && !(busy || is_verse_recording_paused),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_verse_is_fully_interactive_when_idle() {
        let item = NarratableItem::project(VerseItemState::RecordAgain, NarrationStateType::IdleFinished);
        assert!(item.is_play_option_enabled);
        assert!(item.is_edit_verse_option_enabled);
        assert!(item.is_record_again_option_enabled);
    }

    #[test]
    fn paused_verse_can_play_but_not_edit() {
        let item = NarratableItem::project(
            VerseItemState::RecordingPaused,
            NarrationStateType::RecordingPaused,
        );
        assert!(item.is_play_option_enabled);
        assert!(!item.is_edit_verse_option_enabled);
        assert!(!item.is_record_again_option_enabled);
    }

    #[test]
    fn other_verses_lock_while_one_is_paused() {
        let item = NarratableItem::project(
            VerseItemState::RecordAgain,
            NarrationStateType::RecordingPaused,
        );
        assert!(!item.is_play_option_enabled);
        assert!(!item.is_edit_verse_option_enabled);
        assert!(item.is_record_again_option_enabled);
    }

    #[test]
    fn modifying_audio_only_blocks_editing() {
        let item = NarratableItem::project(
            VerseItemState::RecordAgain,
            NarrationStateType::ModifyingAudioFile,
        );
        assert!(item.is_play_option_enabled);
        assert!(!item.is_edit_verse_option_enabled);
        assert!(item.is_record_again_option_enabled);
    }

    #[test]
    fn unrecorded_verse_offers_nothing() {
        let item = NarratableItem::project(VerseItemState::Record, NarrationStateType::IdleInProgress);
        assert!(!item.is_play_option_enabled);
        assert!(!item.is_edit_verse_option_enabled);
        assert!(!item.is_record_again_option_enabled);
    }
}
