//! Test helpers shared across Culinify crates.

pub mod generator;
pub mod identity;
pub mod store;

pub use generator::{FailingGenerator, StubGenerator};
pub use identity::{session_for, StubIdentity};
pub use store::{FailingStore, RecordingStore};
