//! Global narration transitions.
//!
//! [`apply`] runs one request against the verse contexts and returns the
//! new global state. It may leave `contexts` half-edited on error; the
//! machine only ever hands it a scratch copy.

use narration_types::{NarrationStateTransition, NarrationStateType, VerseItemState};

use super::verse_actions as verse;
use super::VerseStateContext;
use crate::error::NarrationError;

pub(super) fn apply(
    request: NarrationStateTransition,
    current: NarrationStateType,
    contexts: &mut [VerseStateContext],
    verse_index: Option<usize>,
) -> Result<NarrationStateType, NarrationError> {
    use NarrationStateTransition as T;
    use NarrationStateType as G;

    if let Some(index) = verse_index {
        if index >= contexts.len() {
            return Err(NarrationError::VerseIndexOutOfRange {
                index,
                len: contexts.len(),
            });
        }
    }
    let required = || verse_index.ok_or(NarrationError::VerseIndexRequired { request });

    let target = match request {
        T::Record => {
            let index = exclusive(request, contexts, required()?)?;
            verse::record(contexts, index)?;
            G::Recording
        }
        T::PauseRecording => {
            verse::pause_recording(contexts, required()?)?;
            G::RecordingPaused
        }
        T::ResumeRecording => {
            let index = exclusive(request, contexts, required()?)?;
            verse::resume_recording(contexts, index)?;
            G::Recording
        }
        T::Next => {
            let index = exclusive(request, contexts, required()?)?;
            // next() finishes the verse instead of carrying the take over,
            // so nothing is left recording afterwards.
            verse::next(contexts, index)?;
            G::IdleInProgress
        }
        T::RecordAgain => {
            let index = required()?;
            verse::complete_paused_recording(contexts)?;
            verse::record_again(contexts, index)?;
            G::RecordingAgain
        }
        T::PauseRecordAgain => {
            verse::pause_record_again(contexts, required()?)?;
            G::RecordingAgainPaused
        }
        T::ResumeRecordAgain => {
            verse::resume_record_again(contexts, required()?)?;
            G::RecordingAgain
        }
        T::Save => {
            if let Some(index) = verse_index {
                verse::save(contexts, index)?;
            }
            if contexts
                .iter()
                .all(|c| c.state() == VerseItemState::RecordAgain)
            {
                G::ModifyingAudioFile
            } else {
                G::IdleInProgress
            }
        }
        T::SaveFinished => {
            let target = save_finished_target(contexts);
            // Completion notice; arriving in the state it would produce is fine.
            if target == current {
                return Ok(current);
            }
            target
        }
        T::PlayAudio => {
            match verse_index {
                Some(index) => {
                    let index = exclusive(request, contexts, index)?;
                    verse::play(contexts, index)?;
                }
                None => {
                    if let Some(paused) = paused_recording(contexts) {
                        return Err(NarrationError::PlayAllWhileRecordingPaused { verse: paused });
                    }
                    verse::disable_all(contexts)?;
                }
            }
            G::Playing
        }
        T::PauseAudioPlayback => {
            let target = paused_playback_target(contexts);
            pause_or_restore(contexts)?;
            target
        }
        T::PausePlaybackWhileModifyingAudio => {
            pause_or_restore(contexts)?;
            G::ModifyingAudioFile
        }
        T::MoveMarker => G::MovingMarker,
        T::PlaceMarker => {
            if contexts.iter().any(|c| {
                matches!(
                    c.state(),
                    VerseItemState::RecordDisabled | VerseItemState::Record
                )
            }) {
                G::IdleInProgress
            } else {
                G::IdleFinished
            }
        }
        T::PlaceMarkerWhileModifyingAudio => G::ModifyingAudioFile,
    };

    Ok(current.change_state(target)?)
}

fn paused_recording(contexts: &[VerseStateContext]) -> Option<usize> {
    contexts
        .iter()
        .position(|c| c.resolved_state() == VerseItemState::RecordingPaused)
}

/// A parked recording must be resumed or re-recorded before another verse
/// can record or play.
fn exclusive(
    request: NarrationStateTransition,
    contexts: &[VerseStateContext],
    index: usize,
) -> Result<usize, NarrationError> {
    match paused_recording(contexts) {
        Some(paused) if paused != index => Err(NarrationError::OtherVerseRecordingPaused {
            request,
            verse: paused,
        }),
        _ => Ok(index),
    }
}

fn save_finished_target(contexts: &[VerseStateContext]) -> NarrationStateType {
    let re_recording = contexts
        .iter()
        .any(|c| c.state() == VerseItemState::RecordAgainActive);
    let re_record_paused = contexts
        .iter()
        .any(|c| c.state() == VerseItemState::RecordAgainPaused);
    let all_recorded = contexts.iter().all(|c| c.state().is_recorded());

    if all_recorded && !re_recording && !re_record_paused {
        NarrationStateType::IdleFinished
    } else if re_recording {
        NarrationStateType::RecordingAgain
    } else {
        NarrationStateType::RecordingAgainPaused
    }
}

/// Decided before any verse is touched: pausing rewrites the states it
/// depends on.
fn paused_playback_target(contexts: &[VerseStateContext]) -> NarrationStateType {
    let playing_while_paused =
        |c: &VerseStateContext| c.state() == VerseItemState::PlayingWhileRecordingPaused;

    if contexts.iter().any(playing_while_paused) {
        NarrationStateType::RecordingPaused
    } else if !contexts
        .iter()
        .any(|c| c.state() == VerseItemState::RecordDisabled)
        && !contexts.last().is_some_and(playing_while_paused)
    {
        NarrationStateType::IdleFinished
    } else {
        NarrationStateType::IdleInProgress
    }
}

fn pause_or_restore(contexts: &mut [VerseStateContext]) -> Result<(), NarrationError> {
    let playing = contexts.iter().position(|c| {
        matches!(
            c.state(),
            VerseItemState::Playing | VerseItemState::PlayingWhileRecordingPaused
        )
    });
    match playing {
        Some(index) => verse::pause_playback(contexts, index)?,
        None => verse::restore_all(contexts),
    }
    Ok(())
}
