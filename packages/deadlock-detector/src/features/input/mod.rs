//! Form input normalization
//!
//! The analyzer is strict about dimensions. Everything lenient happens here:
//! free-text cells are parsed with [`parse_lenient`] (blank or garbage → 0)
//! and the grid is padded or cut to exactly n×m before a `Snapshot` is built.
//! The only things this layer refuses are missing dimensions and counts
//! above `MAX_DIMENSION`.

mod error;
mod form;
mod lenient;

pub use error::InputError;
pub use form::{ensure_within_limits, FormInput};
pub use lenient::{parse_lenient, parse_matrix_text, parse_vector_text};
