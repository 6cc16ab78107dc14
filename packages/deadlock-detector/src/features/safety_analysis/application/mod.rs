pub mod detect_deadlock;

pub use detect_deadlock::*;
