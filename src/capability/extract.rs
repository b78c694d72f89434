use std::collections::BTreeMap;

use crate::config::GeneratorConfig;
use crate::descriptor::{Accessibility, TypeDescriptor};

use super::resolve::{resolve, ImplementationLookup};
use super::CapabilityModel;

/// Builds [`CapabilityModel`]s using the configured names.
#[derive(Debug, Clone)]
pub struct Extractor {
    interface_full_name: String,
    host_property: String,
    host_type: String,
    type_info_suffix: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl Extractor {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            interface_full_name: config.templates().capability_interface_full_name(),
            host_property: config.host_property.clone(),
            host_type: config.host_type.clone(),
            type_info_suffix: config.type_info_suffix.clone(),
        }
    }

    /// Fully qualified name of the capability interface looked for.
    pub fn interface_full_name(&self) -> &str {
        &self.interface_full_name
    }

    /// Extract the capability model, or `None` for types outside any
    /// namespace, which are not supported.
    pub fn extract<L>(&self, descriptor: &TypeDescriptor, lookup: &L) -> Option<CapabilityModel>
    where
        L: ImplementationLookup + ?Sized,
    {
        if descriptor.namespace().is_empty() {
            tracing::trace!(class = descriptor.class_name(), "skipping type in the global namespace");
            return None;
        }

        let has_host_property = self.has_host_property(descriptor);
        let method_status = match descriptor.find_interface(&self.interface_full_name) {
            Some(interface) => resolve(descriptor, interface, lookup),
            None => BTreeMap::new(),
        };

        tracing::debug!(
            type_name = descriptor.full_name(),
            has_host_property,
            statuses = ?method_status,
            "extracted capability model"
        );

        Some(CapabilityModel::from_parts(
            descriptor.namespace(),
            descriptor.class_name(),
            descriptor.full_name(),
            self.generated_namespace(descriptor),
            has_host_property,
            method_status,
        ))
    }

    /// A property with the configured name and type, visible at least
    /// assembly-wide.
    pub fn has_host_property(&self, descriptor: &TypeDescriptor) -> bool {
        descriptor.properties().any(|p| {
            p.name == self.host_property
                && p.declared_type.as_deref() == Some(self.host_type.as_str())
                && p.accessibility >= Accessibility::Internal
        })
    }

    /// `{namespace}.{last segment}{suffix}`, the namespace the XAML compiler
    /// emits its metadata provider into.
    pub fn generated_namespace(&self, descriptor: &TypeDescriptor) -> String {
        format!(
            "{}.{}{}",
            descriptor.namespace(),
            descriptor.namespace_segment(),
            self.type_info_suffix
        )
    }
}

/// [`Extractor::extract`] with the default configuration.
pub fn extract<L>(descriptor: &TypeDescriptor, lookup: &L) -> Option<CapabilityModel>
where
    L: ImplementationLookup + ?Sized,
{
    Extractor::default().extract(descriptor, lookup)
}
