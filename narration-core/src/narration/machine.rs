use crossbeam_channel::{Receiver, Sender};
use narration_types::{
    AudioMarker, NarratableItem, NarrationStateTransition, NarrationStateType, VerseItemState,
};

use super::{actions, VerseStateContext};
use crate::error::NarrationError;

/// Drives one chapter's narration session.
///
/// Owns one [`VerseStateContext`] per chapter marker and the global
/// [`NarrationStateType`]. Every committed change is pushed to all
/// subscribers before the call returns; a failed request leaves both the
/// verses and the global state exactly as they were.
pub struct NarrationStateMachine {
    verse_markers: Vec<AudioMarker>,
    verse_contexts: Vec<VerseStateContext>,
    current: NarrationStateType,
    subscribers: Vec<Sender<NarrationStateType>>,
}

impl NarrationStateMachine {
    pub fn new(verse_markers: Vec<AudioMarker>) -> Self {
        let verse_contexts = vec![VerseStateContext::default(); verse_markers.len()];
        Self {
            verse_markers,
            verse_contexts,
            current: NarrationStateType::default(),
            subscribers: Vec::new(),
        }
    }

    /// Receive every global state change. The current state is delivered
    /// immediately.
    pub fn subscribe(&mut self) -> Receiver<NarrationStateType> {
        let (tx, rx) = crossbeam_channel::unbounded();
        // rx is alive, so this cannot fail
        let _ = tx.send(self.current);
        self.subscribers.push(tx);
        rx
    }

    /// Reset to a chapter where `active[i]` says whether verse `i` already
    /// has a recording. Missing flags count as unrecorded.
    pub fn initialize(&mut self, active: &[bool]) {
        for (i, ctx) in self.verse_contexts.iter_mut().enumerate() {
            let state = if active.get(i).copied().unwrap_or(false) {
                VerseItemState::RecordAgain
            } else {
                VerseItemState::RecordDisabled
            };
            *ctx = VerseStateContext::new(state);
        }
        if let Some(first_open) = self
            .verse_contexts
            .iter_mut()
            .find(|c| c.state() == VerseItemState::RecordDisabled)
        {
            *first_open = VerseStateContext::new(VerseItemState::Record);
        }

        let recorded = self
            .verse_contexts
            .iter()
            .filter(|c| c.state() == VerseItemState::RecordAgain)
            .count();
        self.current = if recorded == 0 {
            NarrationStateType::IdleEmpty
        } else if recorded == self.verse_contexts.len() {
            NarrationStateType::IdleFinished
        } else {
            NarrationStateType::IdleInProgress
        };

        log::debug!(
            target: "narration",
            "initialized {} verses ({} recorded): {:?}",
            self.verse_contexts.len(),
            recorded,
            self.current
        );
        self.publish();
    }

    /// Apply `request`, optionally aimed at one verse, and return the
    /// refreshed verse projections.
    pub fn transition(
        &mut self,
        request: NarrationStateTransition,
        verse_index: Option<usize>,
    ) -> Result<Vec<NarratableItem>, NarrationError> {
        let mut scratch = self.verse_contexts.clone();
        match actions::apply(request, self.current, &mut scratch, verse_index) {
            Ok(next) => {
                log::debug!(
                    target: "narration",
                    "{:?} (verse {:?}): {:?} -> {:?}",
                    request,
                    verse_index,
                    self.current,
                    next
                );
                self.verse_contexts = scratch;
                self.current = next;
                self.publish();
                Ok(self.verse_item_states())
            }
            Err(e) => {
                log::error!(
                    target: "narration",
                    "{:?} (verse {:?}) rejected in {:?}: {}",
                    request,
                    verse_index,
                    self.current,
                    e
                );
                Err(e)
            }
        }
    }

    pub fn narration_context(&self) -> NarrationStateType {
        self.current
    }

    pub fn verse_item_states(&self) -> Vec<NarratableItem> {
        self.verse_contexts
            .iter()
            .map(|c| NarratableItem::project(c.state(), self.current))
            .collect()
    }

    pub fn verse_contexts(&self) -> &[VerseStateContext] {
        &self.verse_contexts
    }

    pub fn verse_markers(&self) -> &[AudioMarker] {
        &self.verse_markers
    }

    fn publish(&mut self) {
        let state = self.current;
        self.subscribers.retain(|tx| match tx.send(state) {
            Ok(()) => true,
            Err(_) => {
                log::warn!(target: "narration", "state subscriber disconnected, dropping it");
                false
            }
        });
    }
}
