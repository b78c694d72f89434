//! # xaml-di
//!
//! Source generator that lets XAML-activated types be resolved through an
//! application's dependency-injection container.
//!
//! **Capability-driven code generation for WinUI applications.**
//!
//! ## Architecture
//!
//! A type opts in with the `XamlMetadataServiceProvider` marker attribute.
//! The generator inspects what the type already offers (a `Host` property,
//! its own implementations of the capability interface) and emits a
//! companion partial class that fills in the rest.
//!
//! ### 1. Capabilities
//! Each method of the capability interface is a *slot*. Per slot the type's
//! implementation is classified as missing, explicit, or implicit with a
//! matched or mismatched accessibility.
//!
//! ```text
//! TypeDescriptor -> resolve (host oracle) -> ImplementationStatus per slot
//! ```
//!
//! ### 2. Accessor Selection
//! The synthesizer picks one strategy per slot, in priority order:
//!
//! ```text
//! Explicit                                -> call through an interface cast
//! ImplicitMatched                         -> call the member directly
//! otherwise, Host property present        -> derive from Host
//! otherwise                               -> throw NotImplementedException
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Foundations                                             |
//! |  - Error, GeneratorConfig, TypeDescriptor (host-supplied facts)   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Extraction                                   |
//! |  - CapabilitySlot, ImplementationLookup, Extractor                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Synthesis                                               |
//! |  - Templates, LanguageFeatures, Synthesizer                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Pipeline                                                |
//! |  - Discovery, Generator, GeneratedSource, Diagnostic              |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use xaml_di::prelude::*;
//!
//! let app = TypeDescriptor::builder("Contoso.Desktop", "App")
//!     .member(MemberInfo::property(
//!         "Host",
//!         "Microsoft.Extensions.Hosting.IHost",
//!         Accessibility::Public,
//!     ))
//!     .attribute(AttributeRef::resolved(
//!         "XamlMetadataServiceProvider",
//!         "WinUI.DependencyInjection.XamlMetadataServiceProviderAttribute",
//!     ))
//!     .build();
//!
//! let generator = Generator::default();
//! let output = generator.execute(
//!     &[CandidateDeclaration::new("App.xaml.cs", app)],
//!     LanguageVersion::CSHARP_12,
//!     &DeclaredImplementations,
//! );
//!
//! let source = output.source("App.xaml.XamlMetadataServiceProvider.g.cs").unwrap();
//! assert!(source.text().contains("partial class App"));
//! ```

// =============================================================================
// Layer 0: Foundations
// =============================================================================
pub mod config;
pub mod descriptor;
pub mod error;

// =============================================================================
// Layer 1: Capability Extraction
// =============================================================================
pub mod capability;

// =============================================================================
// Layer 2: Synthesis
// =============================================================================
pub mod synth;

// =============================================================================
// Layer 3: Pipeline
// =============================================================================
pub mod pipeline;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{
    extract, CapabilityModel, CapabilitySlot, DeclaredImplementations, Extractor, FixedImplementations,
    ImplementationLookup, ImplementationStatus, ResolvedImplementation,
};
pub use config::GeneratorConfig;
pub use descriptor::{
    Accessibility, AttributeRef, InterfaceMethodRef, InterfaceRef, MemberInfo, MemberKind, TypeDescriptor,
    TypeDescriptorBuilder,
};
pub use error::{Error, Result};
pub use pipeline::{
    CandidateDeclaration, Diagnostic, Discovery, GeneratedSource, Generator, GeneratorOutput, TextEncoding,
};
pub use synth::{render, AccessorStrategy, LanguageFeatures, LanguageVersion, Synthesizer, Templates};

/// Common items for driving the generator.
pub mod prelude {
    pub use crate::capability::{
        CapabilityModel, CapabilitySlot, DeclaredImplementations, FixedImplementations, ImplementationLookup,
        ImplementationStatus, ResolvedImplementation,
    };
    pub use crate::config::GeneratorConfig;
    pub use crate::descriptor::{
        Accessibility, AttributeRef, InterfaceMethodRef, InterfaceRef, MemberInfo, TypeDescriptor,
    };
    pub use crate::pipeline::{CandidateDeclaration, GeneratedSource, Generator, GeneratorOutput, TextEncoding};
    pub use crate::synth::{LanguageFeatures, LanguageVersion};
}
