//! Interop helpers.

mod matrix;

pub use matrix::column_vector_from_col;
