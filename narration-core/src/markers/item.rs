use narration_types::{AudioCue, AudioMarker, MarkerId};
use serde::{Deserialize, Serialize};

/// A template slot as the editor sees it. The id survives relabelling and
/// relocation; the marker value does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerItem {
    pub marker: AudioMarker,
    pub placed: bool,
    pub id: MarkerId,
}

impl MarkerItem {
    pub fn new(marker: AudioMarker, placed: bool, id: MarkerId) -> Self {
        Self { marker, placed, id }
    }

    pub fn frame(&self) -> u32 {
        self.marker.location()
    }

    pub fn label(&self) -> String {
        self.marker.label()
    }

    pub fn to_cue(&self) -> AudioCue {
        self.marker.to_cue()
    }
}

/// Hands out marker ids for one placement session.
#[derive(Debug, Clone, Default)]
pub struct MarkerIdAllocator {
    next: u32,
}

impl MarkerIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> MarkerId {
        let id = MarkerId::new(self.next);
        self.next += 1;
        id
    }
}
