use std::collections::BTreeMap;

use super::{CapabilitySlot, ImplementationStatus};

/// Immutable summary of what a candidate type supports.
///
/// A missing `method_status` entry means [`ImplementationStatus::NotImplemented`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityModel {
    namespace: String,
    class_name: String,
    full_name: String,
    generated_namespace: String,
    has_host_property: bool,
    method_status: BTreeMap<String, ImplementationStatus>,
}

impl CapabilityModel {
    /// Assemble a model directly, bypassing extraction.
    ///
    /// Keys of `method_status` are not checked here; the synthesizer rejects
    /// keys outside the [`CapabilitySlot`] vocabulary.
    pub fn from_parts(
        namespace: impl Into<String>,
        class_name: impl Into<String>,
        full_name: impl Into<String>,
        generated_namespace: impl Into<String>,
        has_host_property: bool,
        method_status: BTreeMap<String, ImplementationStatus>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
            full_name: full_name.into(),
            generated_namespace: generated_namespace.into(),
            has_host_property,
            method_status,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Namespace holding the XAML compiler's metadata provider for this type.
    pub fn generated_namespace(&self) -> &str {
        &self.generated_namespace
    }

    pub fn has_host_property(&self) -> bool {
        self.has_host_property
    }

    pub fn method_status(&self) -> &BTreeMap<String, ImplementationStatus> {
        &self.method_status
    }

    /// Status of `slot`. Per-slot shorthands such as
    /// `get_app_provider_status()` are generated alongside [`CapabilitySlot`].
    pub fn status(&self, slot: CapabilitySlot) -> ImplementationStatus {
        self.method_status
            .get(slot.method_name())
            .copied()
            .unwrap_or(ImplementationStatus::NotImplemented)
    }

    /// At least one slot is served by the type's own implementation.
    pub fn has_service_provider_interface(&self) -> bool {
        CapabilitySlot::ALL.iter().any(|&slot| self.status(slot).is_implemented())
    }
}
