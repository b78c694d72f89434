//! Descriptor fixtures shared by the integration tests.

#![allow(dead_code)]

use xaml_di::prelude::*;

pub const CAPABILITY_INTERFACE: &str = "WinUI.DependencyInjection.IXamlMetadataServiceProvider";
pub const MARKER: &str = "WinUI.DependencyInjection.XamlMetadataServiceProviderAttribute";
pub const HOST_TYPE: &str = "Microsoft.Extensions.Hosting.IHost";

pub fn marker() -> AttributeRef {
    AttributeRef::resolved("XamlMetadataServiceProvider", MARKER)
}

/// The capability interface as the host reports it: both methods public.
/// `default_bodies` mirrors the interface as emitted, where both methods
/// throw by default.
pub fn capability_interface(default_bodies: bool) -> InterfaceRef {
    let method = |name: &str| {
        let m = InterfaceMethodRef::public(name);
        if default_bodies { m.with_default_body() } else { m }
    };
    InterfaceRef::new(CAPABILITY_INTERFACE)
        .with_method(method("GetRequiredService"))
        .with_method(method("GetAppProvider"))
}

pub fn host_property(accessibility: Accessibility) -> MemberInfo {
    MemberInfo::property("Host", HOST_TYPE, accessibility)
}

/// `App.MainApp` implementing only `GetRequiredService`, explicitly.
pub fn explicit_service_app() -> TypeDescriptor {
    TypeDescriptor::builder("App", "MainApp")
        .member(MemberInfo::explicit_method(CAPABILITY_INTERFACE, "GetRequiredService"))
        .interface(capability_interface(false))
        .attribute(marker())
        .build()
}

/// `Contoso.Desktop.App` with a public `Host` and no capability interface.
pub fn hosted_app() -> TypeDescriptor {
    TypeDescriptor::builder("Contoso.Desktop", "App")
        .member(host_property(Accessibility::Public))
        .attribute(marker())
        .build()
}
