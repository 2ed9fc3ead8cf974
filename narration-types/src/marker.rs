//! Audio markers: labelled frame positions inside a chapter recording.
//!
//! A marker's kind decides its label, the cue string written into the audio
//! file, and where it sorts relative to markers of other kinds.

use serde::{Deserialize, Serialize};

const BOOK_SORT: u64 = 0;
const CHAPTER_SORT_BASE: u64 = 1_000;
const VERSE_SORT_BASE: u64 = 10_000;
const CHUNK_SORT_BASE: u64 = 100_000;
const UNKNOWN_SORT_BASE: u64 = 100_000_000;

/// Discriminant of an [`AudioMarker`], used to address one kind in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Book,
    Chapter,
    Verse,
    Chunk,
    Unknown,
}

/// Kinds a placement session may be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementType {
    Verse,
    Chunk,
}

impl PlacementType {
    pub fn kind(self) -> MarkerKind {
        match self {
            PlacementType::Verse => MarkerKind::Verse,
            PlacementType::Chunk => MarkerKind::Chunk,
        }
    }
}

impl TryFrom<MarkerKind> for PlacementType {
    type Error = MarkerKind;

    fn try_from(kind: MarkerKind) -> Result<Self, Self::Error> {
        match kind {
            MarkerKind::Verse => Ok(PlacementType::Verse),
            MarkerKind::Chunk => Ok(PlacementType::Chunk),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    Title,
    Content,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioMarker {
    #[serde(rename = "book_marker")]
    Book { slug: String, location: u32 },
    #[serde(rename = "chapter_marker")]
    Chapter { number: u32, location: u32 },
    #[serde(rename = "verse_marker")]
    Verse { start: u32, end: u32, location: u32 },
    #[serde(rename = "chunk_marker")]
    Chunk { number: u32, location: u32 },
    #[serde(rename = "unknown_marker")]
    Unknown { label: String, location: u32 },
}

impl AudioMarker {
    pub fn book(slug: impl Into<String>, location: u32) -> Self {
        AudioMarker::Book {
            slug: slug.into(),
            location,
        }
    }

    pub fn chapter(number: u32, location: u32) -> Self {
        AudioMarker::Chapter { number, location }
    }

    /// A single verse, `start == end`.
    pub fn verse(number: u32, location: u32) -> Self {
        AudioMarker::Verse {
            start: number,
            end: number,
            location,
        }
    }

    pub fn verse_range(start: u32, end: u32, location: u32) -> Self {
        AudioMarker::Verse {
            start,
            end,
            location,
        }
    }

    pub fn chunk(number: u32, location: u32) -> Self {
        AudioMarker::Chunk { number, location }
    }

    pub fn kind(&self) -> MarkerKind {
        match self {
            AudioMarker::Book { .. } => MarkerKind::Book,
            AudioMarker::Chapter { .. } => MarkerKind::Chapter,
            AudioMarker::Verse { .. } => MarkerKind::Verse,
            AudioMarker::Chunk { .. } => MarkerKind::Chunk,
            AudioMarker::Unknown { .. } => MarkerKind::Unknown,
        }
    }

    /// Frame offset of the marker in the recording.
    pub fn location(&self) -> u32 {
        match self {
            AudioMarker::Book { location, .. }
            | AudioMarker::Chapter { location, .. }
            | AudioMarker::Verse { location, .. }
            | AudioMarker::Chunk { location, .. }
            | AudioMarker::Unknown { location, .. } => *location,
        }
    }

    pub fn label(&self) -> String {
        match self {
            AudioMarker::Book { slug, .. } => slug.clone(),
            AudioMarker::Chapter { number, .. } | AudioMarker::Chunk { number, .. } => {
                number.to_string()
            }
            AudioMarker::Verse { start, end, .. } => {
                if start == end {
                    start.to_string()
                } else {
                    format!("{}-{}", start, end)
                }
            }
            AudioMarker::Unknown { label, .. } => label.clone(),
        }
    }

    /// Label as written into the recording's cue chunk.
    pub fn formatted_label(&self) -> String {
        match self {
            AudioMarker::Book { .. } => format!("orature-book-{}", self.label()),
            AudioMarker::Chapter { .. } => format!("orature-chapter-{}", self.label()),
            AudioMarker::Verse { .. } => format!("orature-vm-{}", self.label()),
            AudioMarker::Chunk { .. } => format!("orature-chunk-{}", self.label()),
            AudioMarker::Unknown { label, .. } => label.clone(),
        }
    }

    /// Orders markers book first, then chapter, verses, chunks and
    /// finally unrecognised cues by position.
    pub fn sort(&self) -> u64 {
        match self {
            AudioMarker::Book { .. } => BOOK_SORT,
            AudioMarker::Chapter { number, .. } => CHAPTER_SORT_BASE + u64::from(*number),
            AudioMarker::Verse { start, .. } => VERSE_SORT_BASE + u64::from(*start),
            AudioMarker::Chunk { number, .. } => CHUNK_SORT_BASE + u64::from(*number),
            AudioMarker::Unknown { location, .. } => UNKNOWN_SORT_BASE + u64::from(*location),
        }
    }

    pub fn category(&self) -> MarkerCategory {
        match self {
            AudioMarker::Book { .. } | AudioMarker::Chapter { .. } => MarkerCategory::Title,
            AudioMarker::Verse { .. } | AudioMarker::Chunk { .. } => MarkerCategory::Content,
            AudioMarker::Unknown { .. } => MarkerCategory::Unknown,
        }
    }

    /// Same marker, relocated.
    pub fn with_location(&self, location: u32) -> Self {
        let mut moved = self.clone();
        match &mut moved {
            AudioMarker::Book { location: l, .. }
            | AudioMarker::Chapter { location: l, .. }
            | AudioMarker::Verse { location: l, .. }
            | AudioMarker::Chunk { location: l, .. }
            | AudioMarker::Unknown { location: l, .. } => *l = location,
        }
        moved
    }

    pub fn to_cue(&self) -> AudioCue {
        AudioCue {
            location: self.location(),
            label: self.formatted_label(),
        }
    }
}

/// A raw cue point as stored in the audio container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioCue {
    pub location: u32,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_label_collapses_single_verse() {
        assert_eq!(AudioMarker::verse(3, 0).label(), "3");
        assert_eq!(AudioMarker::verse_range(4, 6, 0).label(), "4-6");
        assert_eq!(
            AudioMarker::verse_range(4, 6, 0).formatted_label(),
            "orature-vm-4-6"
        );
    }

    #[test]
    fn formatted_labels_carry_kind_prefix() {
        assert_eq!(AudioMarker::book("gen", 0).formatted_label(), "orature-book-gen");
        assert_eq!(AudioMarker::chapter(2, 0).formatted_label(), "orature-chapter-2");
        assert_eq!(AudioMarker::chunk(7, 0).formatted_label(), "orature-chunk-7");
        let unknown = AudioMarker::Unknown {
            label: "cue-x".into(),
            location: 5,
        };
        assert_eq!(unknown.formatted_label(), "cue-x");
    }

    #[test]
    fn sort_keys_order_kinds() {
        let mut markers = vec![
            AudioMarker::chunk(1, 0),
            AudioMarker::verse(2, 0),
            AudioMarker::Unknown {
                label: "x".into(),
                location: 3,
            },
            AudioMarker::chapter(1, 0),
            AudioMarker::verse(1, 0),
            AudioMarker::book("gen", 0),
        ];
        markers.sort_by_key(AudioMarker::sort);
        let kinds: Vec<MarkerKind> = markers.iter().map(AudioMarker::kind).collect();
        assert_eq!(
            kinds,
            vec![
                MarkerKind::Book,
                MarkerKind::Chapter,
                MarkerKind::Verse,
                MarkerKind::Verse,
                MarkerKind::Chunk,
                MarkerKind::Unknown,
            ]
        );
        assert_eq!(markers[2].label(), "1");
    }

    #[test]
    fn with_location_keeps_identity() {
        let marker = AudioMarker::verse_range(1, 2, 100);
        let moved = marker.with_location(900);
        assert_eq!(moved.location(), 900);
        assert_eq!(moved.label(), marker.label());
        assert_eq!(marker.location(), 100);
    }

    #[test]
    fn category_follows_kind() {
        assert_eq!(AudioMarker::book("gen", 0).category(), MarkerCategory::Title);
        assert_eq!(AudioMarker::chapter(1, 0).category(), MarkerCategory::Title);
        assert_eq!(AudioMarker::verse(1, 0).category(), MarkerCategory::Content);
        assert_eq!(AudioMarker::chunk(1, 0).category(), MarkerCategory::Content);
        let unknown = AudioMarker::Unknown {
            label: "x".into(),
            location: 0,
        };
        assert_eq!(unknown.category(), MarkerCategory::Unknown);
    }

    #[test]
    fn placement_type_rejects_title_kinds() {
        assert_eq!(PlacementType::try_from(MarkerKind::Verse), Ok(PlacementType::Verse));
        assert_eq!(PlacementType::try_from(MarkerKind::Book), Err(MarkerKind::Book));
    }

    #[test]
    fn marker_serializes_with_type_tag() {
        let json = serde_json::to_string(&AudioMarker::chunk(3, 44)).unwrap();
        assert!(json.contains("\"type\":\"chunk_marker\""));
        let back: AudioMarker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AudioMarker::chunk(3, 44));
    }
}
