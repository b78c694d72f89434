use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::descriptor::TypeDescriptor;
use crate::synth::Templates;

use super::output::TextEncoding;

/// A type declaration the host offers to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDeclaration {
    /// File that declares the type; names the generated source.
    pub source_path: PathBuf,
    #[serde(default)]
    pub encoding: TextEncoding,
    pub descriptor: TypeDescriptor,
}

impl CandidateDeclaration {
    pub fn new(source_path: impl Into<PathBuf>, descriptor: TypeDescriptor) -> Self {
        Self {
            source_path: source_path.into(),
            encoding: TextEncoding::default(),
            descriptor,
        }
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Marker-attribute matching.
///
/// The syntactic check is a case-sensitive substring match of the written
/// attribute name against the marker name without its `Attribute` suffix, so
/// `XamlMetadataServiceProvider`, `XamlMetadataServiceProviderAttribute` and
/// `WinUI.DependencyInjection.XamlMetadataServiceProvider` all qualify. The
/// semantic check requires the host-resolved full name to be exactly the
/// marker's.
#[derive(Debug, Clone)]
pub struct Discovery {
    base_name: &'static str,
    full_name: String,
}

impl Discovery {
    pub fn new(templates: &Templates) -> Self {
        Self {
            base_name: templates.marker_base_name(),
            full_name: templates.marker_attribute_full_name(),
        }
    }

    pub fn is_candidate(&self, ty: &TypeDescriptor) -> bool {
        ty.attributes().iter().any(|a| a.name.contains(self.base_name))
    }

    pub fn is_marked(&self, ty: &TypeDescriptor) -> bool {
        ty.attributes()
            .iter()
            .any(|a| a.full_name.as_deref() == Some(self.full_name.as_str()))
    }

    /// Declarations passing the syntactic check, in input order. Duplicates
    /// are kept.
    pub fn discover<'a>(&self, declarations: &'a [CandidateDeclaration]) -> Vec<&'a CandidateDeclaration> {
        declarations
            .iter()
            .filter(|d| self.is_candidate(&d.descriptor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::AttributeRef;

    fn discovery() -> Discovery {
        Discovery::new(&Templates::new("WinUI.DependencyInjection"))
    }

    fn with_attribute(attribute: AttributeRef) -> TypeDescriptor {
        TypeDescriptor::builder("App", "App").attribute(attribute).build()
    }

    #[test]
    fn test_syntactic_forms() {
        let d = discovery();
        for written in [
            "XamlMetadataServiceProvider",
            "XamlMetadataServiceProviderAttribute",
            "WinUI.DependencyInjection.XamlMetadataServiceProvider",
        ] {
            assert!(d.is_candidate(&with_attribute(AttributeRef::unresolved(written))), "{}", written);
        }
        assert!(!d.is_candidate(&with_attribute(AttributeRef::unresolved("xamlMetadataServiceProvider"))));
        assert!(!d.is_candidate(&with_attribute(AttributeRef::unresolved("Serializable"))));
    }

    #[test]
    fn test_semantic_check_needs_exact_full_name() {
        let d = discovery();
        let marked = with_attribute(AttributeRef::resolved(
            "XamlMetadataServiceProvider",
            "WinUI.DependencyInjection.XamlMetadataServiceProviderAttribute",
        ));
        let lookalike = with_attribute(AttributeRef::resolved(
            "XamlMetadataServiceProvider",
            "Other.XamlMetadataServiceProviderAttribute",
        ));
        let unresolved = with_attribute(AttributeRef::unresolved("XamlMetadataServiceProvider"));
        assert!(d.is_marked(&marked));
        assert!(!d.is_marked(&lookalike));
        assert!(!d.is_marked(&unresolved));
    }
}
