//! Input and output handling for the `sgl1d` executables.

pub mod inp;
pub mod output;
