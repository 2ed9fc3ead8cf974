//! Narration state tables.
//!
//! [`NarrationStateType`] is the workflow-wide state; [`VerseItemState`] is
//! the state of one verse row. Both expose the legal moves out of each
//! state; nothing else in the workspace is allowed to bypass them.

mod item;
mod narration;
mod verse;

pub use item::NarratableItem;
pub use narration::NarrationStateType;
pub use verse::VerseItemState;
