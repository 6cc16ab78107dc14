pub mod safety_analyzer_port;

pub use safety_analyzer_port::*;
