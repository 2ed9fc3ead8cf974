use narration_types::{AudioMarker, MarkerId, MarkerKind, PlacementType};

use super::{AudioMarkerStore, MarkerIdAllocator, MarkerItem, MarkerOp};
use crate::error::MarkerError;
use crate::history::UndoLog;

/// Tunables for a placement session; see `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSettings {
    /// Frames added to the following marker when seeking backwards.
    pub seek_epsilon: u32,
    /// Chunk budget when the template lists no chunk markers.
    pub chunk_total: usize,
    pub history_depth: usize,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            seek_epsilon: 15_000,
            chunk_total: 500,
            history_depth: 1000,
        }
    }
}

/// Marker placement for one take.
///
/// `markers` is the template every session must eventually account for;
/// `marker_items` holds only what has been placed, kept in frame order.
/// After every edit the k-th placed item takes the k-th template label, so
/// dragging a marker past its neighbour swaps their labels instead of
/// breaking verse order.
pub struct MarkerPlacementModel<S> {
    primary: PlacementType,
    store: S,
    ids: MarkerIdAllocator,
    markers: Vec<AudioMarker>,
    marker_items: Vec<MarkerItem>,
    history: UndoLog<MarkerOp>,
    settings: MarkerSettings,
}

impl<S: AudioMarkerStore> MarkerPlacementModel<S> {
    /// Build a session driven by `primary` markers, reconciling `reserved`
    /// against whatever `store` already holds.
    pub fn new(
        primary: MarkerKind,
        store: S,
        reserved: &[AudioMarker],
        ids: MarkerIdAllocator,
        settings: MarkerSettings,
    ) -> Result<Self, MarkerError> {
        let primary =
            PlacementType::try_from(primary).map_err(MarkerError::UnsupportedPlacementType)?;

        let mut model = Self {
            primary,
            store,
            ids,
            markers: Vec::new(),
            marker_items: Vec::new(),
            history: UndoLog::new(settings.history_depth),
            settings,
        };
        model.load_markers_from_audio(reserved);
        Ok(model)
    }

    fn load_markers_from_audio(&mut self, reserved: &[AudioMarker]) {
        let mut items = Vec::new();
        for kind in [MarkerKind::Book, MarkerKind::Chapter] {
            if let Some(marker) = self.store.markers(kind).into_iter().next() {
                items.push(MarkerItem::new(marker, true, self.ids.next_id()));
            }
        }
        for marker in self.store.markers(self.primary.kind()) {
            items.push(MarkerItem::new(marker, true, self.ids.next_id()));
        }

        match self.primary {
            PlacementType::Verse => {
                for marker in reserved {
                    let present = items
                        .iter()
                        .any(|i| i.marker.kind() == marker.kind() && i.label() == marker.label());
                    if !present {
                        items.push(MarkerItem::new(marker.clone(), false, self.ids.next_id()));
                    }
                }
                items.sort_by_key(|i| i.marker.sort());
            }
            PlacementType::Chunk => {
                let budget = match reserved.iter().filter(|m| m.kind() == MarkerKind::Chunk).count() {
                    0 => self.settings.chunk_total,
                    n => n,
                };
                let placed = items
                    .iter()
                    .filter(|i| i.marker.kind() == MarkerKind::Chunk)
                    .count();
                for number in placed + 1..=budget {
                    let marker = AudioMarker::chunk(number as u32, 0);
                    items.push(MarkerItem::new(marker, false, self.ids.next_id()));
                }
            }
        }

        self.markers = items.iter().map(|i| i.marker.clone()).collect();
        items.retain(|i| i.placed);
        items.sort_by_key(MarkerItem::frame);
        for item in &items {
            self.history.record(MarkerOp::Add(item.clone()));
        }
        self.marker_items = items;

        log::debug!(
            target: "markers",
            "loaded {:?} session: {} placed of {} template markers",
            self.primary,
            self.marker_items.len(),
            self.markers.len()
        );
    }

    /// Place the next template marker at `location`. Does nothing once the
    /// template is exhausted.
    pub fn add_marker(&mut self, location: u32) {
        let index = self
            .marker_items
            .iter()
            .position(|i| !i.placed)
            .unwrap_or(self.marker_items.len());
        let Some(template) = self.markers.get(index) else {
            return;
        };
        let item = MarkerItem::new(template.with_location(location), true, self.ids.next_id());
        self.history.execute(MarkerOp::Add(item), &mut self.marker_items);
        self.refresh_markers();
    }

    pub fn delete_marker(&mut self, id: MarkerId) {
        if self.placed_markers_count() == 0 {
            return;
        }
        let Some(item) = self.marker_items.iter().find(|i| i.id == id).cloned() else {
            return;
        };
        self.history.execute(MarkerOp::Delete(item), &mut self.marker_items);
        self.refresh_markers();
    }

    pub fn move_marker(&mut self, id: MarkerId, start: u32, end: u32) {
        if !self.marker_items.iter().any(|i| i.id == id) {
            return;
        }
        self.history.execute(
            MarkerOp::Move {
                id,
                from: start,
                to: end,
            },
            &mut self.marker_items,
        );
        self.refresh_markers();
    }

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.marker_items) {
            self.refresh_markers();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.marker_items) {
            self.refresh_markers();
        }
    }

    pub fn has_dirty_markers(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the placed items wholesale, e.g. when restoring a snapshot.
    pub fn load_markers(&mut self, items: Vec<MarkerItem>) {
        self.marker_items = items;
        self.refresh_markers();
    }

    fn refresh_markers(&mut self) {
        self.marker_items.sort_by_key(MarkerItem::frame);
        for (item, template) in self.marker_items.iter_mut().zip(&self.markers) {
            item.marker = template.with_location(item.frame());
        }
    }

    /// Frame of the last placed marker at or before `location`, else 0.
    pub fn seek_current(&self, location: u32) -> u32 {
        self.placed_frames()
            .rev()
            .find(|&frame| frame <= location)
            .unwrap_or(0)
    }

    /// Frame of the first placed marker after `location`, else the end of
    /// the audio.
    pub fn seek_next(&self, location: u32) -> u32 {
        self.placed_frames()
            .find(|&frame| frame > location)
            .unwrap_or_else(|| self.store.total_frames())
    }

    /// Frame of the marker before `location`. A cursor that has only just
    /// passed a marker (within `seek_epsilon`) lands on the one before it.
    pub fn seek_previous(&self, location: u32) -> u32 {
        let frames: Vec<u32> = self.placed_frames().collect();
        for pair in frames.windows(2) {
            if location < pair[1].saturating_add(self.settings.seek_epsilon) {
                return pair[0];
            }
        }
        frames.last().copied().unwrap_or(0)
    }

    fn placed_frames(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.marker_items
            .iter()
            .filter(|i| i.placed)
            .map(MarkerItem::frame)
    }

    /// Persist placed markers through the store.
    ///
    /// Book, chapter and primary-kind markers are replaced as a unit. If the
    /// store's commit fails, its working set is put back the way it was and
    /// the error is returned; nothing is retried.
    pub fn write_markers(&mut self) -> Result<(), MarkerError> {
        let primary = self.primary.kind();
        let kinds = [MarkerKind::Book, MarkerKind::Chapter, primary];

        let previous: Vec<AudioMarker> = kinds
            .iter()
            .flat_map(|&kind| self.store.markers(kind))
            .collect();

        for kind in kinds {
            self.store.clear_markers(kind);
        }
        let mut written = 0;
        for item in self.marker_items.iter().filter(|i| i.placed) {
            if is_persisted(primary, item.marker.kind()) {
                self.store.add_marker(item.marker.clone());
                written += 1;
            }
        }

        if let Err(e) = self.store.update() {
            log::error!(target: "markers", "marker write failed, keeping previous markers: {}", e);
            for kind in kinds {
                self.store.clear_markers(kind);
            }
            for marker in previous {
                self.store.add_marker(marker);
            }
            return Err(e.into());
        }

        log::debug!(target: "markers", "wrote {} {:?} session markers", written, self.primary);
        Ok(())
    }

    pub fn marker_items(&self) -> &[MarkerItem] {
        &self.marker_items
    }

    pub fn markers(&self) -> &[AudioMarker] {
        &self.markers
    }

    pub fn marker_total(&self) -> usize {
        self.markers.len()
    }

    pub fn placed_markers_count(&self) -> usize {
        self.marker_items.iter().filter(|i| i.placed).count()
    }

    pub fn primary_type(&self) -> PlacementType {
        self.primary
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn is_persisted(primary: MarkerKind, kind: MarkerKind) -> bool {
    matches!(kind, MarkerKind::Book | MarkerKind::Chapter) || kind == primary
}
