//! # Type Descriptors
//!
//! Normalized, host-independent snapshot of a candidate type: its namespace,
//! declared members, implemented interfaces and attributes.
//!
//! A host adapter builds one [`TypeDescriptor`] per candidate per pass, either
//! with [`TypeDescriptorBuilder`] or by deserializing it from data. Nothing in
//! the capability pipeline ever sees a host compiler type.
//!
//! ```text
//! TypeDescriptor
//!   +-- declared_members        (declaration order)   MemberInfo*
//!   +-- implemented_interfaces  (keyed by full name)  InterfaceRef*
//!   |                                                   +-- InterfaceMethodRef*
//!   +-- attributes                                    AttributeRef*
//! ```

mod builder;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use builder::TypeDescriptorBuilder;

// =============================================================================
// Accessibility
// =============================================================================

/// Declared accessibility, ordered from most to least restrictive.
///
/// `PrivateProtected` (protected *and* internal) sits between `Private` and
/// `Protected`, matching the host compiler's ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    Private,
    PrivateProtected,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
}

impl Accessibility {
    /// Source keyword(s) for this accessibility.
    pub const fn keyword(self) -> &'static str {
        match self {
            Accessibility::Private => "private",
            Accessibility::PrivateProtected => "private protected",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::Public => "public",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// Members
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    Property,
    Method,
}

/// A member declared directly on the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub name: String,
    pub kind: MemberKind,
    pub accessibility: Accessibility,
    /// Property type or method return type, as a fully qualified display string.
    #[serde(default)]
    pub declared_type: Option<String>,
    /// Interface this member explicitly implements, if interface-qualified.
    #[serde(default)]
    pub explicit_interface: Option<String>,
}

impl MemberInfo {
    pub fn property(name: impl Into<String>, declared_type: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
            accessibility,
            declared_type: Some(declared_type.into()),
            explicit_interface: None,
        }
    }

    pub fn method(name: impl Into<String>, accessibility: Accessibility) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
            accessibility,
            declared_type: None,
            explicit_interface: None,
        }
    }

    /// An interface-qualified method. Explicit implementations are private.
    pub fn explicit_method(interface: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            explicit_interface: Some(interface.into()),
            ..Self::method(name, Accessibility::Private)
        }
    }

    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }

    pub fn is_property(&self) -> bool {
        self.kind == MemberKind::Property
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit_interface.is_some()
    }

    /// Name under which the member is found by ordinary lookup.
    ///
    /// Explicit implementations are only reachable qualified by their
    /// interface, so `GetAppProvider` implemented explicitly for `N.I` is
    /// looked up as `N.I.GetAppProvider`.
    pub fn lookup_name(&self) -> String {
        match &self.explicit_interface {
            Some(interface) => format!("{}.{}", interface, self.name),
            None => self.name.clone(),
        }
    }
}

// =============================================================================
// Interfaces
// =============================================================================

/// A method declared by an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceMethodRef {
    pub name: String,
    /// Accessibility the interface declares for the method; supplied by the
    /// host, never derived.
    #[serde(default = "default_interface_accessibility")]
    pub declared_accessibility: Accessibility,
    /// The interface ships a default body for the method.
    #[serde(default)]
    pub has_default_body: bool,
}

fn default_interface_accessibility() -> Accessibility {
    Accessibility::Public
}

impl InterfaceMethodRef {
    pub fn new(name: impl Into<String>, declared_accessibility: Accessibility) -> Self {
        Self {
            name: name.into(),
            declared_accessibility,
            has_default_body: false,
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Accessibility::Public)
    }

    pub fn with_default_body(mut self) -> Self {
        self.has_default_body = true;
        self
    }
}

/// An interface the type implements, directly or through a base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRef {
    pub full_name: String,
    #[serde(default)]
    pub methods: Vec<InterfaceMethodRef>,
}

impl InterfaceRef {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: InterfaceMethodRef) -> Self {
        self.methods.push(method);
        self
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// An attribute applied to the type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRef {
    /// Name as written at the use site, e.g. `XamlMetadataServiceProvider`.
    pub name: String,
    /// Fully qualified attribute class, when the host could bind it.
    #[serde(default)]
    pub full_name: Option<String>,
}

impl AttributeRef {
    /// An attribute the host could not bind.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
        }
    }

    pub fn resolved(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: Some(full_name.into()),
        }
    }
}

// =============================================================================
// TypeDescriptor
// =============================================================================

/// Immutable description of one candidate type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    namespace: String,
    class_name: String,
    full_name: String,
    #[serde(default)]
    declared_members: Vec<MemberInfo>,
    #[serde(default)]
    implemented_interfaces: Vec<InterfaceRef>,
    #[serde(default)]
    attributes: Vec<AttributeRef>,
}

impl TypeDescriptor {
    pub fn builder(namespace: impl Into<String>, class_name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(namespace, class_name)
    }

    /// Containing namespace without surrounding whitespace; empty for types
    /// in the global namespace.
    pub fn namespace(&self) -> &str {
        self.namespace.trim()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn declared_members(&self) -> &[MemberInfo] {
        &self.declared_members
    }

    pub fn implemented_interfaces(&self) -> &[InterfaceRef] {
        &self.implemented_interfaces
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        &self.attributes
    }

    /// Last segment of the namespace (`B` for `A.B`).
    pub fn namespace_segment(&self) -> &str {
        self.namespace().rsplit('.').next().unwrap_or_default()
    }

    pub fn properties(&self) -> impl Iterator<Item = &MemberInfo> {
        self.declared_members.iter().filter(|m| m.is_property())
    }

    pub fn methods(&self) -> impl Iterator<Item = &MemberInfo> {
        self.declared_members.iter().filter(|m| m.is_method())
    }

    /// First implemented interface with the given full name.
    pub fn find_interface(&self, full_name: &str) -> Option<&InterfaceRef> {
        self.implemented_interfaces.iter().find(|i| i.full_name == full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility_order() {
        use Accessibility::*;
        assert!(Private < PrivateProtected);
        assert!(PrivateProtected < Protected);
        assert!(Protected < Internal);
        assert!(Internal < ProtectedInternal);
        assert!(ProtectedInternal < Public);
    }

    #[test]
    fn test_lookup_name() {
        let implicit = MemberInfo::method("GetAppProvider", Accessibility::Public);
        let explicit = MemberInfo::explicit_method("N.IFoo", "GetAppProvider");
        assert_eq!(implicit.lookup_name(), "GetAppProvider");
        assert_eq!(explicit.lookup_name(), "N.IFoo.GetAppProvider");
        assert_eq!(explicit.accessibility, Accessibility::Private);
    }

    #[test]
    fn test_namespace_segment() {
        let ty = TypeDescriptor::builder("MyApp.Shell", "App").build();
        assert_eq!(ty.namespace_segment(), "Shell");
        let ty = TypeDescriptor::builder("App", "App").build();
        assert_eq!(ty.namespace_segment(), "App");
    }

    #[test]
    fn test_padded_namespace_is_trimmed() {
        let ty = TypeDescriptor::builder(" Contoso.Shell ", "App").build();
        assert_eq!(ty.namespace(), "Contoso.Shell");
        assert_eq!(ty.full_name(), "Contoso.Shell.App");

        let ty: TypeDescriptor = toml::from_str(
            "namespace = \" App \"\nclass_name = \"MainApp\"\nfull_name = \"App.MainApp\"\n",
        )
        .unwrap();
        assert_eq!(ty.namespace(), "App");
        assert_eq!(ty.namespace_segment(), "App");

        let ty = TypeDescriptor::builder("  ", "App").build();
        assert_eq!(ty.namespace(), "");
        assert_eq!(ty.full_name(), "App");
    }

    #[test]
    fn test_builder_keeps_member_order() {
        let ty = TypeDescriptor::builder("App", "MainApp")
            .member(MemberInfo::property("Host", "Microsoft.Extensions.Hosting.IHost", Accessibility::Public))
            .members([
                MemberInfo::method("GetAppProvider", Accessibility::Public),
                MemberInfo::explicit_method("N.IFoo", "GetRequiredService"),
            ])
            .build();
        let names: Vec<&str> = ty.declared_members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Host", "GetAppProvider", "GetRequiredService"]);
        assert_eq!(ty.properties().count(), 1);
        assert_eq!(ty.methods().count(), 2);
    }

    #[test]
    fn test_builder_ignores_repeated_interface() {
        let ty = TypeDescriptor::builder("App", "MainApp")
            .interface(InterfaceRef::new("N.IFoo").with_method(InterfaceMethodRef::public("First")))
            .interface(InterfaceRef::new("N.IFoo").with_method(InterfaceMethodRef::public("Second")))
            .interface(InterfaceRef::new("N.IBar"))
            .build();
        assert_eq!(ty.implemented_interfaces().len(), 2);
        let foo = ty.find_interface("N.IFoo").unwrap();
        assert_eq!(foo.methods.len(), 1);
        assert_eq!(foo.methods[0].name, "First");
    }
}
