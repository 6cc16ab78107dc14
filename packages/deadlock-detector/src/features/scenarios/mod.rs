//! Snapshot sources
//!
//! - `catalog`: fixed example snapshots (one safe, two deadlocked)
//! - `random`: bounded random snapshots
//!
//! Every source yields a plain `Snapshot`; nothing here bypasses `analyze`.

mod catalog;
mod random;

pub use catalog::{preset, ScenarioKind};
pub use random::RandomScenarioGenerator;
