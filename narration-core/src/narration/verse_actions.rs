//! Per-verse halves of the narration transitions.
//!
//! Each function edits the verse contexts only; the global state is
//! decided by the caller in `actions`. Indices are checked by the caller.

use narration_types::{StateError, VerseItemState};

use super::VerseStateContext;
use VerseItemState::*;

type VerseResult = Result<(), StateError>;

pub(super) fn record(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    disable_all(&mut contexts[..index])?;
    activate(&mut contexts[index], RecordActive)?;
    promote_next(contexts, index)?;
    disable_all(&mut contexts[index + 1..])
}

pub(super) fn pause_recording(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    for ctx in &mut contexts[..index] {
        restore_recorded(ctx)?;
    }
    contexts[index].change_state(RecordingPaused)
}

pub(super) fn resume_recording(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    record(contexts, index)
}

/// Finish verse `index` and open the following one for recording.
pub(super) fn next(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    contexts[index].change_state(RecordAgain)?;
    for (i, ctx) in contexts.iter_mut().enumerate() {
        if i != index {
            restore_recorded(ctx)?;
        }
    }
    promote_next(contexts, index)
}

pub(super) fn record_again(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    disable_others(contexts, index)?;
    activate(&mut contexts[index], RecordAgainActive)
}

pub(super) fn pause_record_again(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    contexts[index].change_state(RecordAgainPaused)
}

pub(super) fn resume_record_again(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    disable_others(contexts, index)?;
    activate(&mut contexts[index], RecordAgainActive)
}

pub(super) fn save(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    for ctx in &mut contexts[..index] {
        restore_recorded(ctx)?;
    }
    activate(&mut contexts[index], RecordAgain)?;
    for ctx in &mut contexts[index + 1..] {
        ctx.restore();
    }
    Ok(())
}

pub(super) fn play(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    let target = if contexts[index].resolved_state() == RecordingPaused {
        PlayingWhileRecordingPaused
    } else {
        Playing
    };
    activate(&mut contexts[index], target)?;
    disable_others(contexts, index)
}

pub(super) fn pause_playback(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    if contexts[index].state() == PlayingWhileRecordingPaused {
        contexts[index].change_state(RecordingPaused)?;
        for ctx in &mut contexts[..index] {
            restore_recorded(ctx)?;
        }
    } else {
        contexts[index].change_state(RecordAgain)?;
        for (i, ctx) in contexts.iter_mut().enumerate() {
            if i != index {
                ctx.restore();
            }
        }
    }
    Ok(())
}

/// Treat a parked recording as finished before something else takes over.
pub(super) fn complete_paused_recording(contexts: &mut [VerseStateContext]) -> VerseResult {
    if let Some(index) = contexts.iter().position(|c| c.state() == RecordingPaused) {
        contexts[index].change_state(RecordAgain)?;
        promote_next(contexts, index)?;
    }
    Ok(())
}

pub(super) fn disable_all(contexts: &mut [VerseStateContext]) -> VerseResult {
    for ctx in contexts {
        ctx.disable()?;
    }
    Ok(())
}

pub(super) fn restore_all(contexts: &mut [VerseStateContext]) {
    for ctx in contexts {
        ctx.restore();
    }
}

fn disable_others(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    for (i, ctx) in contexts.iter_mut().enumerate() {
        if i != index {
            ctx.disable()?;
        }
    }
    Ok(())
}

fn activate(ctx: &mut VerseStateContext, target: VerseItemState) -> VerseResult {
    ctx.restore();
    ctx.change_state(target)
}

/// Open the verse after `index` for recording unless it already has audio.
fn promote_next(contexts: &mut [VerseStateContext], index: usize) -> VerseResult {
    match contexts.get_mut(index + 1) {
        Some(next) if !next.resolved_state().has_recording() => next.change_state(Record),
        _ => Ok(()),
    }
}

fn restore_recorded(ctx: &mut VerseStateContext) -> VerseResult {
    ctx.restore();
    if ctx.state() == RecordAgainDisabled {
        ctx.change_state(RecordAgain)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contexts(states: &[VerseItemState]) -> Vec<VerseStateContext> {
        states.iter().copied().map(VerseStateContext::new).collect()
    }

    fn states(contexts: &[VerseStateContext]) -> Vec<VerseItemState> {
        contexts.iter().map(VerseStateContext::state).collect()
    }

    #[test]
    fn test_record_greys_out_neighbours() {
        let mut verses = contexts(&[RecordAgain, Record, RecordDisabled]);
        record(&mut verses, 1).unwrap();
        assert_eq!(states(&verses), vec![RecordAgainDisabled, RecordActive, RecordDisabled]);
        assert_eq!(verses[2].temporarily_disabled_state(), Some(Record));
    }

    #[test]
    fn test_record_skips_promoting_recorded_verse() {
        let mut verses = contexts(&[Record, RecordAgain]);
        record(&mut verses, 0).unwrap();
        assert_eq!(states(&verses), vec![RecordActive, RecordAgainDisabled]);
        assert_eq!(verses[1].temporarily_disabled_state(), Some(RecordAgain));
    }

    #[test]
    fn test_pause_reenables_earlier_verses() {
        let mut verses = contexts(&[RecordAgain, Record, RecordDisabled]);
        record(&mut verses, 1).unwrap();
        pause_recording(&mut verses, 1).unwrap();
        assert_eq!(states(&verses), vec![RecordAgain, RecordingPaused, RecordDisabled]);
    }

    #[test]
    fn test_next_finishes_and_opens_following() {
        let mut verses = contexts(&[Record, RecordDisabled, RecordDisabled]);
        record(&mut verses, 0).unwrap();
        next(&mut verses, 0).unwrap();
        assert_eq!(states(&verses), vec![RecordAgain, Record, RecordDisabled]);
        assert!(verses.iter().all(|c| c.temporarily_disabled_state().is_none()));
    }

    #[test]
    fn test_play_while_paused_and_back() {
        let mut verses = contexts(&[Record, RecordDisabled]);
        record(&mut verses, 0).unwrap();
        pause_recording(&mut verses, 0).unwrap();
        play(&mut verses, 0).unwrap();
        assert_eq!(verses[0].state(), PlayingWhileRecordingPaused);

        pause_playback(&mut verses, 0).unwrap();
        assert_eq!(states(&verses), vec![RecordingPaused, RecordDisabled]);
    }

    #[test]
    fn test_complete_paused_recording_promotes_next() {
        let mut verses = contexts(&[Record, RecordDisabled]);
        record(&mut verses, 0).unwrap();
        pause_recording(&mut verses, 0).unwrap();
        complete_paused_recording(&mut verses).unwrap();
        assert_eq!(states(&verses), vec![RecordAgain, Record]);
    }

    #[test]
    fn test_disable_all_stops_at_active_verse() {
        let mut verses = contexts(&[RecordAgain, RecordAgainPaused]);
        assert_eq!(
            disable_all(&mut verses),
            Err(StateError::CannotDisable(RecordAgainPaused))
        );
    }
}
