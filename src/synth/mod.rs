//! # Code Synthesis
//!
//! Renders a [`CapabilityModel`](crate::CapabilityModel) into the per-type
//! source, and owns the static template sources emitted once per pass.
//!
//! ```text
//! synth/
//! ├── features.rs  - LanguageVersion -> LanguageFeatures (helper visibility)
//! ├── templates.rs - namespace-parameterized static sources and names
//! ├── render.rs    - Synthesizer: per-slot accessor selection and rendering
//! └── writer.rs    - indented line writer
//! ```
//!
//! Rendering is deterministic: the same model, features and configuration
//! always produce byte-identical text, so hosts may cache or diff it.

mod features;
mod render;
mod templates;
mod writer;

pub use features::{LanguageFeatures, LanguageVersion};
pub use render::{render, AccessorStrategy, Synthesizer};
pub use templates::Templates;
