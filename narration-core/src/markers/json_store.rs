use std::fs;
use std::path::{Path, PathBuf};

use narration_types::{AudioMarker, MarkerKind};
use serde::{Deserialize, Serialize};

use super::AudioMarkerStore;
use crate::error::StoreError;

#[derive(Serialize, Deserialize)]
struct MarkerFile {
    total_frames: u32,
    markers: Vec<AudioMarker>,
}

/// Markers kept in a JSON sidecar next to the recording.
///
/// `update` writes a temporary file and renames it over the sidecar, so a
/// crash mid-write leaves the previous contents intact.
pub struct JsonMarkerStore {
    path: PathBuf,
    total_frames: u32,
    working: Vec<AudioMarker>,
}

impl JsonMarkerStore {
    /// Open `path`, loading any markers already saved there. The recording's
    /// length is authoritative over whatever the sidecar remembers.
    pub fn open(path: impl Into<PathBuf>, total_frames: u32) -> Result<Self, StoreError> {
        let path = path.into();
        let working = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: MarkerFile = serde_json::from_str(&contents)?;
            file.markers
        } else {
            Vec::new()
        };
        log::debug!(target: "markers", "opened {} with {} markers", path.display(), working.len());
        Ok(Self {
            path,
            total_frames,
            working,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl AudioMarkerStore for JsonMarkerStore {
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
        let file = MarkerFile {
            total_frames: self.total_frames,
            markers: self.working.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let staging = self.staging_path();
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        log::debug!(target: "markers", "wrote {} markers to {}", file.markers.len(), self.path.display());
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
    fn update_persists_and_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("take.markers.json");

        let mut store = JsonMarkerStore::open(&path, 96_000).unwrap();
        assert!(store.markers(MarkerKind::Verse).is_empty());
        store.add_marker(AudioMarker::book("jhn", 0));
        store.add_marker(AudioMarker::verse(1, 1200));
        store.add_marker(AudioMarker::verse_range(2, 3, 5400));
        store.update().unwrap();
        assert!(!dir.path().join("take.markers.json.tmp").exists());

        let reopened = JsonMarkerStore::open(&path, 96_000).unwrap();
        let verses = reopened.markers(MarkerKind::Verse);
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[1].label(), "2-3");
        assert_eq!(reopened.markers(MarkerKind::Book)[0].label(), "jhn");
        assert_eq!(reopened.total_frames(), 96_000);
    }

    #[test]
    fn pending_changes_are_not_written_without_update() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("take.markers.json");

        let mut store = JsonMarkerStore::open(&path, 10).unwrap();
        store.add_marker(AudioMarker::chunk(1, 4));
        store.update().unwrap();
        store.clear_markers(MarkerKind::Chunk);

        let reopened = JsonMarkerStore::open(&path, 10).unwrap();
        assert_eq!(reopened.markers(MarkerKind::Chunk).len(), 1);
    }

    #[test]
    fn corrupt_sidecar_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonMarkerStore::open(&path, 0),
            Err(StoreError::Serialize(_))
        ));
    }
}
