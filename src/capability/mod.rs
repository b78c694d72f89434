//! # Capability Extraction
//!
//! Turns a [`TypeDescriptor`](crate::TypeDescriptor) into a
//! [`CapabilityModel`]: what the type offers the generated code.
//!
//! ```text
//! TypeDescriptor ──extract──> CapabilityModel
//!        │                        ├── has_host_property
//!        │                        └── method_status: slot -> ImplementationStatus
//!        └──resolve (per interface method, host oracle)──┘
//! ```
//!
//! ## Classification
//!
//! | Host oracle says           | First declared same-named method | Status               |
//! |----------------------------|----------------------------------|----------------------|
//! | no implementation          | -                                | `NotImplemented`     |
//! | explicit implementation    | -                                | `Explicit`           |
//! | implicit implementation    | accessibility == declared        | `ImplicitMatched`    |
//! | implicit implementation    | missing or accessibility differs | `ImplicitMismatched` |

mod extract;
mod model;
mod resolve;

pub use extract::{extract, Extractor};
pub use model::CapabilityModel;
pub use resolve::{
    resolve, DeclaredImplementations, FixedImplementations, ImplementationLookup, ResolvedImplementation,
};

macros::capability_slots! {
    /// Method slots of the capability interface.
    ///
    /// Extractor and synthesizer share this vocabulary; a status key outside
    /// it is a contract violation.
    pub enum CapabilitySlot {
        /// Returns the XAML metadata provider generated for the application.
        GetAppProvider,
        /// Resolves a service instance for a requested type.
        GetRequiredService,
    }

    impl CapabilityModel -> ImplementationStatus;
}

/// How a capability-interface method is implemented by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImplementationStatus {
    NotImplemented,
    /// Implemented by an ordinary member whose accessibility differs from
    /// the interface's declaration; the generated code must not call it.
    ImplicitMismatched,
    ImplicitMatched,
    /// Interface-qualified implementation, callable through the interface.
    Explicit,
}

impl ImplementationStatus {
    /// The generated code may delegate to the type's own implementation.
    pub const fn is_implemented(self) -> bool {
        matches!(self, ImplementationStatus::ImplicitMatched | ImplementationStatus::Explicit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_vocabulary() {
        assert_eq!(CapabilitySlot::ALL.len(), 2);
        assert_eq!(CapabilitySlot::GetAppProvider.method_name(), "GetAppProvider");
        assert_eq!(
            CapabilitySlot::from_method_name("GetRequiredService"),
            Some(CapabilitySlot::GetRequiredService)
        );
        assert_eq!(CapabilitySlot::from_method_name("getRequiredService"), None);
        assert_eq!(CapabilitySlot::GetRequiredService.to_string(), "GetRequiredService");
    }

    #[test]
    fn test_is_implemented() {
        assert!(!ImplementationStatus::NotImplemented.is_implemented());
        assert!(!ImplementationStatus::ImplicitMismatched.is_implemented());
        assert!(ImplementationStatus::ImplicitMatched.is_implemented());
        assert!(ImplementationStatus::Explicit.is_implemented());
    }
}
