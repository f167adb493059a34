//! Nullable infrastructure for deterministic testing.
//!
//! Every external dependency of the ops layer (clock, storage, member
//! roster, asset catalog) is abstracted behind a trait; this crate provides
//! implementations that return deterministic values, can be controlled
//! programmatically, and never touch the filesystem or network.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod assets;
pub mod clock;
pub mod roster;
pub mod store;

pub use assets::NullAssets;
pub use clock::NullClock;
pub use roster::NullRoster;
pub use store::MemStore;
