//! Narration workflow: per-verse contexts, the transitions between them,
//! and the machine that ties them to the global state.

mod actions;
mod context;
mod machine;
mod verse_actions;


pub use context::VerseStateContext;
pub use machine::NarrationStateMachine;
