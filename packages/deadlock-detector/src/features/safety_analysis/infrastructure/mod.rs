pub mod error;
pub mod safety_analyzer; // Work/finish fixpoint simulation

pub use error::*;
pub use safety_analyzer::*;
