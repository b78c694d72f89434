//! Static template sources and the fixed names they define.
//!
//! Everything here is parameterized only by the namespace the marker
//! attribute and the capability interface are emitted into, plus the tool
//! version stamped into `GeneratedCode` attributes.

use crate::capability::CapabilitySlot;

/// Namespace-parameterized template configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    namespace: String,
    version: String,
}

impl Templates {
    pub const MARKER_ATTRIBUTE: &'static str = "XamlMetadataServiceProviderAttribute";
    pub const CAPABILITY_INTERFACE: &'static str = "IXamlMetadataServiceProvider";
    pub const GENERATOR: &'static str = "XamlMetadataServiceProviderGenerator";
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
    pub const DEBUGGER_NON_USER_CODE: &'static str = "[global::System.Diagnostics.DebuggerNonUserCodeAttribute()]";
    pub const METADATA_PROVIDER: &'static str = "global::Microsoft.UI.Xaml.Markup.IXamlMetadataProvider";
    pub const XAML_TYPE: &'static str = "global::Microsoft.UI.Xaml.Markup.IXamlType";
    pub const XAML_MEMBER: &'static str = "global::Microsoft.UI.Xaml.Markup.IXamlMember";
    pub const XMLNS_DEFINITION: &'static str = "global::Microsoft.UI.Xaml.Markup.XmlnsDefinition";

    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            version: Self::VERSION.to_owned(),
        }
    }

    /// Stamp a different tool version into generated sources.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn marker_attribute_full_name(&self) -> String {
        format!("{}.{}", self.namespace, Self::MARKER_ATTRIBUTE)
    }

    /// Attribute name as usually written at the use site (`Attribute` suffix dropped).
    pub fn marker_base_name(&self) -> &'static str {
        Self::MARKER_ATTRIBUTE
            .strip_suffix("Attribute")
            .unwrap_or(Self::MARKER_ATTRIBUTE)
    }

    pub fn capability_interface_full_name(&self) -> String {
        format!("{}.{}", self.namespace, Self::CAPABILITY_INTERFACE)
    }

    pub fn generated_code_attribute(&self) -> String {
        format!(
            "[global::System.CodeDom.Compiler.GeneratedCodeAttribute(\"{}.{}\", \"{}\")]",
            self.namespace,
            Self::GENERATOR,
            self.version
        )
    }

    pub fn marker_attribute_hint(&self) -> String {
        format!("{}.g.cs", Self::MARKER_ATTRIBUTE)
    }

    pub fn capability_interface_hint(&self) -> String {
        format!("{}.g.cs", Self::CAPABILITY_INTERFACE)
    }

    /// Definition of the marker attribute.
    pub fn marker_attribute_source(&self) -> String {
        format!(
            r#"// <auto-generated/>

using System;

namespace {namespace}
{{
    /// <summary>
    /// Generates a XAML metadata provider for the annotated application class that activates
    /// XAML types through the application's service provider.
    /// </summary>
    {generated_code}
    [AttributeUsage(AttributeTargets.Class, AllowMultiple = false, Inherited = false)]
    internal sealed class {name} : Attribute
    {{
    }}
}}
"#,
            namespace = self.namespace,
            generated_code = self.generated_code_attribute(),
            name = Self::MARKER_ATTRIBUTE,
        )
    }

    /// Definition of the capability interface with its throwing default bodies.
    pub fn capability_interface_source(&self) -> String {
        format!(
            r#"// <auto-generated/>

using System;

namespace {namespace}
{{
    /// <summary>
    /// Lets the application supply its own service resolution or metadata provider.
    /// </summary>
    /// <remarks>
    /// The generator detects which methods are implemented, implicitly or explicitly. Implement
    /// {get_required_service} to resolve services from a custom container. Implement {get_app_provider}
    /// when the XAML compiler's _AppProvider member is renamed; it is only reachable through
    /// reflection because the XAML compiler runs after this generator.
    /// </remarks>
    {generated_code}
    internal interface {name}
    {{
        object {get_required_service}(Type type) => throw new NotImplementedException();

        {provider} {get_app_provider}() => throw new NotImplementedException();
    }}
}}
"#,
            namespace = self.namespace,
            generated_code = self.generated_code_attribute(),
            name = Self::CAPABILITY_INTERFACE,
            provider = Self::METADATA_PROVIDER,
            get_required_service = CapabilitySlot::GetRequiredService.method_name(),
            get_app_provider = CapabilitySlot::GetAppProvider.method_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let t = Templates::new("WinUI.DependencyInjection");
        assert_eq!(t.marker_base_name(), "XamlMetadataServiceProvider");
        assert_eq!(
            t.marker_attribute_full_name(),
            "WinUI.DependencyInjection.XamlMetadataServiceProviderAttribute"
        );
        assert_eq!(
            t.capability_interface_full_name(),
            "WinUI.DependencyInjection.IXamlMetadataServiceProvider"
        );
    }

    #[test]
    fn test_sources_use_namespace() {
        let t = Templates::new("Acme.DI").with_version("9.9.9");
        let attr = t.marker_attribute_source();
        assert!(attr.contains("namespace Acme.DI\n{"));
        assert!(attr.contains("internal sealed class XamlMetadataServiceProviderAttribute : Attribute"));
        assert!(attr.contains("(\"Acme.DI.XamlMetadataServiceProviderGenerator\", \"9.9.9\")"));

        let iface = t.capability_interface_source();
        assert!(iface.contains("internal interface IXamlMetadataServiceProvider"));
        assert!(iface.contains("object GetRequiredService(Type type) => throw new NotImplementedException();"));
        assert!(iface.contains(
            "global::Microsoft.UI.Xaml.Markup.IXamlMetadataProvider GetAppProvider() => throw new NotImplementedException();"
        ));
        assert!(iface.contains("_AppProvider member"));
    }
}
