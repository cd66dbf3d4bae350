//! Scorebook-State: game persistence for Scorebook
//!
//! This crate owns the storage contract the scoring engine depends on and
//! two backends for it.
//!
//! ## Layer 0 - Data/Persistence
//!
//! Focus: atomic dual writes (at-bat + game situation) and append/remove-last
//! ordering of at-bat events.
//!
//! ## Key Components
//!
//! - `GameStore`: the async storage trait
//! - `GameRecord`, `AtBatRecord`, `PitchingAppearanceRecord`: persisted rows
//! - `MemoryGameStore`: in-memory fake (see `fakes`)
//! - `JsonFileStore`: single-document JSON backend with atomic replace

mod book;
mod error;
pub mod fakes;
pub mod json_store;
pub mod storage_traits;

pub use error::StorageError;
pub use json_store::JsonFileStore;
pub use storage_traits::{
    AppearanceId, AtBatId, AtBatRecord, GameId, GameRecord, GameStatus, GameStore,
    PitchingAppearanceRecord, PlayerId, StorageResult,
};
