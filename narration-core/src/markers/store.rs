use narration_types::{AudioMarker, MarkerKind};

use crate::error::StoreError;

/// Where a recording's markers live between sessions.
///
/// Mutations land in a working set; nothing is durable until [`update`]
/// succeeds.
///
/// [`update`]: AudioMarkerStore::update
pub trait AudioMarkerStore {
    fn markers(&self, kind: MarkerKind) -> Vec<AudioMarker>;
    fn clear_markers(&mut self, kind: MarkerKind);
    fn add_marker(&mut self, marker: AudioMarker);
    fn update(&mut self) -> Result<(), StoreError>;
    /// End-of-audio bound.
    fn total_frames(&self) -> u32;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryMarkerStore {
    working: Vec<AudioMarker>,
    committed: Vec<AudioMarker>,
    total_frames: u32,
}

impl InMemoryMarkerStore {
    pub fn new(total_frames: u32) -> Self {
        Self {
            total_frames,
            ..Self::default()
        }
    }

    /// A store that already holds `markers` as committed state.
    pub fn with_markers(total_frames: u32, markers: Vec<AudioMarker>) -> Self {
        Self {
            working: markers.clone(),
            committed: markers,
            total_frames,
        }
    }

    pub fn committed(&self) -> &[AudioMarker] {
        &self.committed
    }
}

impl AudioMarkerStore for InMemoryMarkerStore {
    fn markers(&self, kind: MarkerKind) -> Vec<AudioMarker> {
        self.working
            .iter()
            .filter(|m| m.kind() == kind)
            .cloned()
            .collect()
    }

    fn clear_markers(&mut self, kind: MarkerKind) {
        self.working.retain(|m| m.kind() != kind);
    }

    fn add_marker(&mut self, marker: AudioMarker) {
        self.working.push(marker);
    }

    fn update(&mut self) -> Result<(), StoreError> {
        self.committed = self.working.clone();
        Ok(())
    }

    fn total_frames(&self) -> u32 {
        self.total_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_set_is_not_committed_until_update() {
        let mut store = InMemoryMarkerStore::new(48_000);
        store.add_marker(AudioMarker::verse(1, 10));
        store.add_marker(AudioMarker::chapter(1, 0));
        assert_eq!(store.markers(MarkerKind::Verse).len(), 1);
        assert!(store.committed().is_empty());

        store.update().unwrap();
        assert_eq!(store.committed().len(), 2);

        store.clear_markers(MarkerKind::Verse);
        assert!(store.markers(MarkerKind::Verse).is_empty());
        assert_eq!(store.markers(MarkerKind::Chapter).len(), 1);
        assert_eq!(store.committed().len(), 2);
    }
}
