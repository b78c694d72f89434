//! Conditional rendering of the per-type source.
//!
//! Each capability slot picks its accessor body independently:
//!
//! ```text
//! Explicit          -> call through an interface cast
//! ImplicitMatched   -> call the type's own method
//! otherwise + Host  -> fallback (reflection / service locator on Host.Services)
//! otherwise         -> throwing stub
//! ```

use core::fmt;

use crate::capability::{CapabilityModel, CapabilitySlot, ImplementationStatus};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};

use super::features::LanguageFeatures;
use super::templates::Templates;
use super::writer::SourceWriter;

const SERVICE_LOCATOR: &str = "global::Microsoft.Extensions.DependencyInjection.ServiceProviderServiceExtensions";
const SYSTEM_TYPE: &str = "global::System.Type";
const ACTIVATOR_DELEGATE: &str = "global::System.Func<global::System.Type, object>";
const BINDING_FLAGS: &str = "global::System.Reflection.BindingFlags";
/// Type the XAML compiler emits into the generated namespace.
const XAML_METADATA_PROVIDER_TYPE: &str = "XamlMetaDataProvider";

/// How a slot's accessor is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorStrategy {
    /// The type implements the slot explicitly; call through the interface.
    ThroughInterface,
    /// The type implements the slot implicitly with matching accessibility.
    Direct,
    /// No usable implementation, but the type exposes a host property.
    HostFallback,
    /// Nothing to delegate to; the accessor throws when used.
    NotImplemented,
}

impl AccessorStrategy {
    pub fn select(model: &CapabilityModel, slot: CapabilitySlot) -> Self {
        match model.status(slot) {
            ImplementationStatus::Explicit => AccessorStrategy::ThroughInterface,
            ImplementationStatus::ImplicitMatched => AccessorStrategy::Direct,
            ImplementationStatus::NotImplemented | ImplementationStatus::ImplicitMismatched => {
                if model.has_host_property() {
                    AccessorStrategy::HostFallback
                } else {
                    AccessorStrategy::NotImplemented
                }
            }
        }
    }
}

/// Renders [`CapabilityModel`]s into source text.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    templates: Templates,
    host_property: String,
    app_provider_member: String,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl Synthesizer {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            templates: config.templates(),
            host_property: config.host_property.clone(),
            app_provider_member: config.app_provider_member.clone(),
        }
    }

    pub fn with_templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Render the generated source for one model.
    ///
    /// Fails only when the model carries a status for a method outside the
    /// [`CapabilitySlot`] vocabulary. Output is a pure function of the
    /// arguments and the synthesizer's configuration.
    pub fn render(&self, model: &CapabilityModel, features: LanguageFeatures) -> Result<String> {
        if let Some(unknown) = model
            .method_status()
            .keys()
            .find(|key| CapabilitySlot::from_method_name(key).is_none())
        {
            return Err(Error::UnknownCapabilitySlot {
                type_name: model.full_name().to_owned(),
                slot: unknown.clone(),
            });
        }

        let mut w = SourceWriter::new();
        self.write_source(&mut w, model, features)?;
        let text = w.finish();

        tracing::trace!(type_name = model.full_name(), bytes = text.len(), "rendered capability source");
        Ok(text)
    }

    fn write_source(&self, w: &mut SourceWriter, model: &CapabilityModel, features: LanguageFeatures) -> fmt::Result {
        let names = HelperNames::for_model(model);

        w.line("// <auto-generated/>")?;
        w.line("#nullable enable")?;
        w.blank();
        w.line(format_args!("namespace {}", model.namespace()))?;
        w.open()?;

        self.write_partial_class(w, model, &names)?;
        w.blank();
        self.write_provider_helper(w, features, &names)?;
        w.blank();
        self.write_xaml_type_helper(w, features, &names)?;

        w.close()
    }

    fn write_partial_class(&self, w: &mut SourceWriter, model: &CapabilityModel, names: &HelperNames) -> fmt::Result {
        let provider = Templates::METADATA_PROVIDER;

        w.line(self.templates.generated_code_attribute())?;
        w.line(Templates::DEBUGGER_NON_USER_CODE)?;
        w.line(format_args!("partial class {}", model.class_name()))?;
        w.open()?;

        w.line(format_args!("private {}? __xamlMetadataServiceProvider;", provider))?;
        w.blank();
        w.line("/// <summary>")?;
        w.line("/// XAML metadata provider that activates XAML types through the service provider.")?;
        w.line("/// </summary>")?;
        w.line(format_args!(
            "internal {} XamlMetadataServiceProvider => __xamlMetadataServiceProvider ??= new {}(__GetAppProvider(), __GetRequiredService);",
            provider, names.provider
        ))?;
        w.blank();

        w.line(format_args!("private {} __GetAppProvider()", provider))?;
        w.open()?;
        self.write_app_provider_body(w, model)?;
        w.close()?;
        w.blank();

        w.line(format_args!("private object __GetRequiredService({} type)", SYSTEM_TYPE))?;
        w.open()?;
        self.write_required_service_body(w, model)?;
        w.close()?;

        w.close()
    }

    fn write_app_provider_body(&self, w: &mut SourceWriter, model: &CapabilityModel) -> fmt::Result {
        let slot = CapabilitySlot::GetAppProvider;
        match AccessorStrategy::select(model, slot) {
            AccessorStrategy::ThroughInterface => w.line(format_args!(
                "return ((global::{})this).{}();",
                self.templates.capability_interface_full_name(),
                slot
            )),
            AccessorStrategy::Direct => w.line(format_args!("return this.{}();", slot)),
            AccessorStrategy::HostFallback => {
                let member = csharp_string(&self.app_provider_member);
                w.line(format_args!(
                    "const {flags} flags = {flags}.NonPublic | {flags}.Instance;",
                    flags = BINDING_FLAGS
                ))?;
                w.line(format_args!("var type = typeof(global::{});", model.full_name()))?;
                w.line(format_args!(
                    "var provider = type.GetProperty({member}, flags)?.GetValue(this) ?? type.GetField({member}, flags)?.GetValue(this);",
                    member = member
                ))?;
                let message = csharp_string(&format!(
                    "'{}' has no '{}' member holding a '{}.{}'.",
                    model.full_name(),
                    self.app_provider_member,
                    model.generated_namespace(),
                    XAML_METADATA_PROVIDER_TYPE
                ));
                w.line(format_args!(
                    "return provider as {} ?? throw new global::System.InvalidOperationException({});",
                    Templates::METADATA_PROVIDER,
                    message
                ))
            }
            AccessorStrategy::NotImplemented => self.write_not_implemented(w, model, slot),
        }
    }

    fn write_required_service_body(&self, w: &mut SourceWriter, model: &CapabilityModel) -> fmt::Result {
        let slot = CapabilitySlot::GetRequiredService;
        match AccessorStrategy::select(model, slot) {
            AccessorStrategy::ThroughInterface => w.line(format_args!(
                "return ((global::{})this).{}(type);",
                self.templates.capability_interface_full_name(),
                slot
            )),
            AccessorStrategy::Direct => w.line(format_args!("return this.{}(type);", slot)),
            AccessorStrategy::HostFallback => w.line(format_args!(
                "return {}.GetRequiredService(this.{}.Services, type);",
                SERVICE_LOCATOR, self.host_property
            )),
            AccessorStrategy::NotImplemented => self.write_not_implemented(w, model, slot),
        }
    }

    fn write_not_implemented(&self, w: &mut SourceWriter, model: &CapabilityModel, slot: CapabilitySlot) -> fmt::Result {
        let message = csharp_string(&format!(
            "'{}' does not implement '{}.{}' and has no usable '{}' property.",
            model.full_name(),
            self.templates.capability_interface_full_name(),
            slot,
            self.host_property
        ));
        w.line(format_args!("throw new global::System.NotImplementedException({});", message))
    }

    fn write_provider_helper(&self, w: &mut SourceWriter, features: LanguageFeatures, names: &HelperNames) -> fmt::Result {
        let provider = Templates::METADATA_PROVIDER;
        let xaml_type = Templates::XAML_TYPE;

        w.line(self.templates.generated_code_attribute())?;
        w.line(Templates::DEBUGGER_NON_USER_CODE)?;
        w.line(format_args!(
            "{} sealed class {} : {}",
            features.helper_visibility(),
            names.provider,
            provider
        ))?;
        w.open()?;
        w.line(format_args!("private readonly {} _provider;", provider))?;
        w.line(format_args!("private readonly {} _getRequiredService;", ACTIVATOR_DELEGATE))?;
        w.blank();
        w.line(format_args!(
            "public {}({} provider, {} getRequiredService)",
            names.provider, provider, ACTIVATOR_DELEGATE
        ))?;
        w.open()?;
        w.line("_provider = provider;")?;
        w.line("_getRequiredService = getRequiredService;")?;
        w.close()?;
        w.blank();
        w.line(format_args!(
            "public {} GetXamlType({} type) => Wrap(_provider.GetXamlType(type));",
            xaml_type, SYSTEM_TYPE
        ))?;
        w.blank();
        w.line(format_args!(
            "public {} GetXamlType(string fullName) => Wrap(_provider.GetXamlType(fullName));",
            xaml_type
        ))?;
        w.blank();
        w.line(format_args!(
            "public {}[] GetXmlnsDefinitions() => _provider.GetXmlnsDefinitions();",
            Templates::XMLNS_DEFINITION
        ))?;
        w.blank();
        w.line(format_args!(
            "private {t} Wrap({t}? type) => type is null ? null! : new {}(type, _getRequiredService);",
            names.xaml_type,
            t = xaml_type
        ))?;
        w.close()
    }

    fn write_xaml_type_helper(&self, w: &mut SourceWriter, features: LanguageFeatures, names: &HelperNames) -> fmt::Result {
        let xaml_type = Templates::XAML_TYPE;

        w.line(self.templates.generated_code_attribute())?;
        w.line(Templates::DEBUGGER_NON_USER_CODE)?;
        w.line(format_args!(
            "{} sealed class {} : {}",
            features.helper_visibility(),
            names.xaml_type,
            xaml_type
        ))?;
        w.open()?;
        w.line(format_args!("private readonly {} _type;", xaml_type))?;
        w.line(format_args!("private readonly {} _getRequiredService;", ACTIVATOR_DELEGATE))?;
        w.blank();
        w.line(format_args!(
            "public {}({} type, {} getRequiredService)",
            names.xaml_type, xaml_type, ACTIVATOR_DELEGATE
        ))?;
        w.open()?;
        w.line("_type = type;")?;
        w.line("_getRequiredService = getRequiredService;")?;
        w.close()?;
        w.blank();

        for (ty, name) in XAML_TYPE_PROPERTIES {
            w.line(format_args!("public {} {} => _type.{};", ty, name, name))?;
        }
        w.blank();

        // Activation is the one member that does not delegate to the wrapped type.
        w.line("public object ActivateInstance() => _getRequiredService(_type.UnderlyingType);")?;
        w.line("public void AddToMap(object instance, object key, object value) => _type.AddToMap(instance, key, value);")?;
        w.line("public void AddToVector(object instance, object value) => _type.AddToVector(instance, value);")?;
        w.line("public object CreateFromString(string value) => _type.CreateFromString(value);")?;
        w.line(format_args!(
            "public {} GetMember(string name) => _type.GetMember(name);",
            Templates::XAML_MEMBER
        ))?;
        w.line("public void RunInitializer() => _type.RunInitializer();")?;
        w.close()
    }
}

/// [`Synthesizer::render`] with the default configuration.
pub fn render(model: &CapabilityModel, features: LanguageFeatures) -> Result<String> {
    Synthesizer::default().render(model, features)
}

/// `IXamlType` properties forwarded unchanged by the wrapper.
const XAML_TYPE_PROPERTIES: &[(&str, &str)] = &[
    (Templates::XAML_TYPE, "BaseType"),
    (Templates::XAML_TYPE, "BoxedType"),
    (Templates::XAML_MEMBER, "ContentProperty"),
    ("string", "FullName"),
    ("bool", "IsArray"),
    ("bool", "IsBindable"),
    ("bool", "IsCollection"),
    ("bool", "IsConstructible"),
    ("bool", "IsDictionary"),
    ("bool", "IsMarkupExtension"),
    (Templates::XAML_TYPE, "ItemType"),
    (Templates::XAML_TYPE, "KeyType"),
    (SYSTEM_TYPE, "UnderlyingType"),
];

/// Helper type names, prefixed with the class name so `internal` helpers of
/// two annotated types in one namespace never collide.
struct HelperNames {
    provider: String,
    xaml_type: String,
}

impl HelperNames {
    fn for_model(model: &CapabilityModel) -> Self {
        Self {
            provider: format!("{}XamlMetadataServiceProvider", model.class_name()),
            xaml_type: format!("{}ServiceXamlType", model.class_name()),
        }
    }
}

/// Quote `s` as a regular string literal.
fn csharp_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn model(host: bool, status: &[(&str, ImplementationStatus)]) -> CapabilityModel {
        CapabilityModel::from_parts(
            "App",
            "MainApp",
            "App.MainApp",
            "App.App_XamlTypeInfo",
            host,
            status.iter().map(|(k, v)| (k.to_string(), *v)).collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_strategy_table() {
        use ImplementationStatus::*;
        let slot = CapabilitySlot::GetRequiredService;
        let cases = [
            (Explicit, false, AccessorStrategy::ThroughInterface),
            (Explicit, true, AccessorStrategy::ThroughInterface),
            (ImplicitMatched, true, AccessorStrategy::Direct),
            (ImplicitMismatched, true, AccessorStrategy::HostFallback),
            (ImplicitMismatched, false, AccessorStrategy::NotImplemented),
            (NotImplemented, true, AccessorStrategy::HostFallback),
            (NotImplemented, false, AccessorStrategy::NotImplemented),
        ];
        for (status, host, expected) in cases {
            let m = model(host, &[("GetRequiredService", status)]);
            assert_eq!(AccessorStrategy::select(&m, slot), expected, "{:?} host={}", status, host);
        }
    }

    #[test]
    fn test_csharp_string_escapes() {
        assert_eq!(csharp_string(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        let m = model(false, &[("GetLogger", ImplementationStatus::ImplicitMatched)]);
        let err = render(&m, LanguageFeatures::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownCapabilitySlot { ref slot, ref type_name } if slot == "GetLogger" && type_name == "App.MainApp"
        ));
    }
}
