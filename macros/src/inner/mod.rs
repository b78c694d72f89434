//! Macros used by the crate itself to generate its fixed vocabularies.

pub mod slots;
