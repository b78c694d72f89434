//! Configuration loading and descriptor interchange.

mod common;

use std::io::Write;

use common::*;
use pretty_assertions::assert_eq;
use xaml_di::prelude::*;
use xaml_di::Error;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "namespace = \"Contoso.Hosting\"").unwrap();
    writeln!(file, "host_property = \"AppHost\"").unwrap();
    writeln!(file, "host_type = \"Contoso.Hosting.IAppHost\"").unwrap();

    let config = GeneratorConfig::from_path(file.path()).unwrap();
    assert_eq!(
        config,
        GeneratorConfig {
            namespace: "Contoso.Hosting".to_owned(),
            host_property: "AppHost".to_owned(),
            host_type: "Contoso.Hosting.IAppHost".to_owned(),
            ..GeneratorConfig::default()
        }
    );

    let ty = TypeDescriptor::builder("App", "MainApp")
        .member(MemberInfo::property("AppHost", "Contoso.Hosting.IAppHost", Accessibility::Internal))
        .attribute(AttributeRef::resolved(
            "XamlMetadataServiceProvider",
            "Contoso.Hosting.XamlMetadataServiceProviderAttribute",
        ))
        .build();
    let output = Generator::new(config).unwrap().execute(
        &[CandidateDeclaration::new("App.xaml.cs", ty)],
        LanguageVersion::CSHARP_12,
        &DeclaredImplementations,
    );
    assert_eq!(output.sources.len(), 1);
    assert!(output.sources[0].text().contains("(this.AppHost.Services, type);"));
}

#[test]
fn test_empty_file_is_default() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert_eq!(GeneratorConfig::from_path(file.path()).unwrap(), GeneratorConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xaml-di.toml");
    match GeneratorConfig::from_path(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = GeneratorConfig::from_toml_str("namespace = \"A\"\nhost = \"Host\"\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{:?}", err);
}

#[test]
fn test_unusable_values_are_rejected() {
    for (text, key) in [
        ("namespace = \"\"", "namespace"),
        ("namespace = \"Contoso..Hosting\"", "namespace"),
        ("host_property = \"\"", "host_property"),
        ("host_type = \"Microsoft Extensions\"", "host_type"),
        ("type_info_suffix = \"-Info\"", "type_info_suffix"),
        ("app_provider_member = \"1st\"", "app_provider_member"),
        ("file_suffix = \"\"", "file_suffix"),
        ("file_suffix = \"/gen.cs\"", "file_suffix"),
    ] {
        match GeneratorConfig::from_toml_str(text) {
            Err(Error::InvalidConfig { key: reported, .. }) => assert_eq!(reported, key, "{}", text),
            other => panic!("{}: expected invalid `{}`, got {:?}", text, key, other),
        }
    }
}

#[test]
fn test_descriptor_from_toml() {
    let text = r#"
source_path = "App.xaml.cs"
encoding = "utf8-bom"

[descriptor]
namespace = "App"
class_name = "MainApp"
full_name = "App.MainApp"

[[descriptor.declared_members]]
name = "GetRequiredService"
kind = "method"
accessibility = "private"
explicit_interface = "WinUI.DependencyInjection.IXamlMetadataServiceProvider"

[[descriptor.implemented_interfaces]]
full_name = "WinUI.DependencyInjection.IXamlMetadataServiceProvider"
methods = [{ name = "GetRequiredService" }, { name = "GetAppProvider" }]

[[descriptor.attributes]]
name = "XamlMetadataServiceProvider"
full_name = "WinUI.DependencyInjection.XamlMetadataServiceProviderAttribute"
"#;
    let declaration: CandidateDeclaration = toml::from_str(text).unwrap();

    assert_eq!(declaration.encoding, TextEncoding::Utf8Bom);
    assert_eq!(declaration.descriptor, explicit_service_app());

    let output = Generator::default().execute(&[declaration], LanguageVersion::CSHARP_12, &DeclaredImplementations);
    assert_eq!(output.sources.len(), 1);
    assert_eq!(output.sources[0].encoding(), TextEncoding::Utf8Bom);
}

#[test]
fn test_language_version_strings() {
    for (text, expected) in [
        ("10", LanguageVersion::CSHARP_10),
        ("CSharp11", LanguageVersion::CSHARP_11),
        ("7.3", LanguageVersion::CSHARP_7_3),
        ("latest", LanguageVersion::LATEST),
    ] {
        assert_eq!(text.parse::<LanguageVersion>().unwrap(), expected, "{}", text);
    }
    assert!(matches!("C#11".parse::<LanguageVersion>(), Err(Error::InvalidLanguageVersion(_))));
    assert!(matches!("0".parse::<LanguageVersion>(), Err(Error::InvalidLanguageVersion(_))));
}
