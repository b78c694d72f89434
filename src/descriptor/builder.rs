use super::{AttributeRef, InterfaceRef, MemberInfo, TypeDescriptor};

/// Incremental construction of a [`TypeDescriptor`].
///
/// Members keep the order they are added in; that order is the declaration
/// order conformance resolution relies on.
#[derive(Debug, Clone)]
pub struct TypeDescriptorBuilder {
    namespace: String,
    class_name: String,
    full_name: Option<String>,
    declared_members: Vec<MemberInfo>,
    implemented_interfaces: Vec<InterfaceRef>,
    attributes: Vec<AttributeRef>,
}

impl TypeDescriptorBuilder {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
            full_name: None,
            declared_members: Vec::new(),
            implemented_interfaces: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Override the display name (nested types, generic arity).
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn member(mut self, member: MemberInfo) -> Self {
        self.declared_members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = MemberInfo>) -> Self {
        self.declared_members.extend(members);
        self
    }

    /// Add an implemented interface. A second interface with the same full
    /// name is ignored.
    pub fn interface(mut self, interface: InterfaceRef) -> Self {
        if !self.implemented_interfaces.iter().any(|i| i.full_name == interface.full_name) {
            self.implemented_interfaces.push(interface);
        }
        self
    }

    pub fn attribute(mut self, attribute: AttributeRef) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The namespace is trimmed; a blank one means the global namespace.
    pub fn build(self) -> TypeDescriptor {
        let namespace = self.namespace.trim().to_owned();
        let full_name = self.full_name.unwrap_or_else(|| {
            if namespace.is_empty() {
                self.class_name.clone()
            } else {
                format!("{}.{}", namespace, self.class_name)
            }
        });
        TypeDescriptor {
            namespace,
            class_name: self.class_name,
            full_name,
            declared_members: self.declared_members,
            implemented_interfaces: self.implemented_interfaces,
            attributes: self.attributes,
        }
    }
}
