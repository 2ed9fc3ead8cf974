//! # narration-core
//!
//! Session logic for recording a chapter verse by verse: placing and
//! editing audio markers, and the narration state machine that decides
//! which recording and playback controls each verse offers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use narration_core::config::Config;
//! use narration_core::markers::{InMemoryMarkerStore, MarkerIdAllocator, MarkerPlacementModel};
//! use narration_core::narration::NarrationStateMachine;
//! use narration_types::{AudioMarker, MarkerKind, NarrationStateTransition};
//!
//! let config = Config::load();
//! let chapter: Vec<AudioMarker> = (1..=3).map(|v| AudioMarker::verse(v, 0)).collect();
//!
//! // 1. Narration: one verse context per chapter marker
//! let mut narration = NarrationStateMachine::new(chapter.clone());
//! let states = narration.subscribe();
//! narration.initialize(&[false, false, false]);
//! narration.transition(NarrationStateTransition::Record, Some(0))?;
//!
//! // 2. Markers: reconcile the chapter template against the take's store
//! let store = InMemoryMarkerStore::new(48_000 * 60);
//! let mut markers = MarkerPlacementModel::new(
//!     MarkerKind::Verse,
//!     store,
//!     &chapter,
//!     MarkerIdAllocator::new(),
//!     config.marker_settings(),
//! )?;
//! markers.add_marker(12_000);
//! markers.write_markers()?;
//! ```
//!
//! ## Module Overview
//!
//! - [`markers`] — `MarkerPlacementModel`, marker items and ids, undoable
//!   marker edits, the `AudioMarkerStore` trait with in-memory and JSON stores
//! - [`narration`] — `NarrationStateMachine` and `VerseStateContext`
//! - [`history`] — generic two-stack undo log
//! - [`config`] — TOML configuration (embedded defaults + user override)

pub mod config;
mod error;
pub mod history;
pub mod markers;
pub mod narration;

pub use error::{MarkerError, NarrationError, StoreError};
