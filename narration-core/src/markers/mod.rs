//! Marker placement: the template, the placed items, undoable edits and
//! the stores that persist them.

mod item;
mod json_store;
mod label;
mod model;
mod ops;
mod store;

pub use item::{MarkerIdAllocator, MarkerItem};
pub use json_store::JsonMarkerStore;
pub use label::{chunk_template, parse_verse_label, verse_template};
pub use model::{MarkerPlacementModel, MarkerSettings};
pub use ops::MarkerOp;
pub use store::{AudioMarkerStore, InMemoryMarkerStore};
