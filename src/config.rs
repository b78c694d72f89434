//! # Generator Configuration
//!
//! Every name the generator matches against or emits lives here, so a host
//! with a different hosting stack or namespace can retarget the generator
//! without touching the templates.
//!
//! ```toml
//! namespace = "WinUI.DependencyInjection"
//! host_property = "Host"
//! host_type = "Microsoft.Extensions.Hosting.IHost"
//! type_info_suffix = "_XamlTypeInfo"
//! app_provider_member = "_AppProvider"
//! file_suffix = ".XamlMetadataServiceProvider.g.cs"
//! ```
//!
//! Missing keys fall back to the defaults above; unknown keys are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::synth::Templates;

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Namespace of the marker attribute and the capability interface.
    pub namespace: String,
    /// Name of the property exposing the application host.
    pub host_property: String,
    /// Fully qualified type the host property must have.
    pub host_type: String,
    /// Suffix of the namespace the XAML compiler puts its type info in.
    pub type_info_suffix: String,
    /// Private member the XAML compiler generates for the metadata provider.
    pub app_provider_member: String,
    /// Appended to the source file stem to form the generated file name.
    pub file_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "WinUI.DependencyInjection".to_owned(),
            host_property: "Host".to_owned(),
            host_type: "Microsoft.Extensions.Hosting.IHost".to_owned(),
            type_info_suffix: "_XamlTypeInfo".to_owned(),
            app_provider_member: "_AppProvider".to_owned(),
            file_suffix: ".XamlMetadataServiceProvider.g.cs".to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), namespace = %config.namespace, "loaded generator config");
        Ok(config)
    }

    /// Check that every value can be spliced into generated source.
    pub fn validate(&self) -> Result<()> {
        if !is_qualified_name(&self.namespace) {
            return Err(invalid("namespace", &self.namespace, "a dotted identifier"));
        }
        if !is_identifier(&self.host_property) {
            return Err(invalid("host_property", &self.host_property, "an identifier"));
        }
        if !is_qualified_name(&self.host_type) {
            return Err(invalid("host_type", &self.host_type, "a dotted identifier"));
        }
        if !self.type_info_suffix.chars().all(is_identifier_char) {
            return Err(invalid("type_info_suffix", &self.type_info_suffix, "identifier characters"));
        }
        if !is_identifier(&self.app_provider_member) {
            return Err(invalid("app_provider_member", &self.app_provider_member, "an identifier"));
        }
        if self.file_suffix.is_empty() || self.file_suffix.contains(['/', '\\']) {
            return Err(invalid("file_suffix", &self.file_suffix, "a non-empty file name suffix"));
        }
        Ok(())
    }

    /// Templates parameterized by this configuration's namespace.
    pub fn templates(&self) -> Templates {
        Templates::new(&self.namespace)
    }
}

fn invalid(key: &'static str, value: &str, expected: &str) -> Error {
    Error::InvalidConfig {
        key,
        reason: format!("`{}` is not {}", value, expected),
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_identifier(s: &str) -> bool {
    match s.chars().next() {
        Some(first) if first.is_alphabetic() || first == '_' => s.chars().all(is_identifier_char),
        _ => false,
    }
}

fn is_qualified_name(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rules() {
        assert!(is_identifier("Host"));
        assert!(is_identifier("_AppProvider"));
        assert!(!is_identifier("1Host"));
        assert!(!is_identifier(""));
        assert!(is_qualified_name("Microsoft.Extensions.Hosting.IHost"));
        assert!(!is_qualified_name("Microsoft..IHost"));
        assert!(!is_qualified_name("Microsoft.IHost."));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }
}
