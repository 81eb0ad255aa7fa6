//! # seogen common library
//!
//! Shared code for the seogen crates:
//! - Error type and result alias
//! - Configuration file resolution, TOML loading, logging setup
//! - Entity kind vocabulary
//! - Progress events and the broadcast event bus
//! - Human-readable duration formatting

pub mod config;
pub mod error;
pub mod events;
pub mod human_time;
pub mod kinds;

pub use error::{Error, Result};
pub use events::{EventBus, GenerationEvent, ProgressObserver, ProgressSnapshot};
pub use kinds::EntityKind;
