//! # Generator Pipeline
//!
//! Drives one compilation pass end to end.
//!
//! ```text
//!   CandidateDeclaration[]
//!          │
//!          ▼  Discovery::discover      (syntactic: attribute name contains the marker)
//!   candidates
//!          │
//!          ▼  Discovery::is_marked     (semantic: resolved full name equals the marker)
//!          ▼  Extractor::extract       (unsupported types drop out here)
//!   CapabilityModel
//!          │
//!          ▼  Synthesizer::render
//!   GeneratedSource { hint_name, text, encoding, digest }
//! ```
//!
//! The marker attribute and capability interface sources come from
//! [`Generator::post_initialization_sources`] and are independent of input.
//! Failures are reported per type as [`Diagnostic`]s; one bad type never
//! stops the others.

mod discovery;
mod generator;
mod output;

pub use discovery::{CandidateDeclaration, Discovery};
pub use generator::Generator;
pub use output::{file_name_hint, Diagnostic, GeneratedSource, GeneratorOutput, TextEncoding};
