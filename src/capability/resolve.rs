//! Interface conformance resolution.

use std::collections::BTreeMap;

use crate::descriptor::{Accessibility, InterfaceMethodRef, InterfaceRef, MemberInfo, TypeDescriptor};

use super::ImplementationStatus;

/// What the host found implementing an interface method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedImplementation {
    pub accessibility: Accessibility,
    /// Interface-qualified implementation.
    pub is_explicit: bool,
}

impl ResolvedImplementation {
    pub const fn implicit(accessibility: Accessibility) -> Self {
        Self { accessibility, is_explicit: false }
    }

    pub const fn explicit(accessibility: Accessibility) -> Self {
        Self { accessibility, is_explicit: true }
    }
}

/// Host capability answering "which member implements this interface method".
///
/// Called concurrently for distinct candidates when candidates are processed
/// in parallel, so host implementations must not rely on call order.
pub trait ImplementationLookup {
    fn find_implementation(
        &self,
        ty: &TypeDescriptor,
        interface: &InterfaceRef,
        method: &InterfaceMethodRef,
    ) -> Option<ResolvedImplementation>;
}

impl<F> ImplementationLookup for F
where
    F: Fn(&TypeDescriptor, &InterfaceRef, &InterfaceMethodRef) -> Option<ResolvedImplementation>,
{
    fn find_implementation(
        &self,
        ty: &TypeDescriptor,
        interface: &InterfaceRef,
        method: &InterfaceMethodRef,
    ) -> Option<ResolvedImplementation> {
        self(ty, interface, method)
    }
}

/// Answers from the descriptor's own members.
///
/// Approximates the host's binding rules for hand-built descriptors:
/// an interface-qualified member for the interface wins, then the first
/// public method with the same name, then the interface's default body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredImplementations;

impl ImplementationLookup for DeclaredImplementations {
    fn find_implementation(
        &self,
        ty: &TypeDescriptor,
        interface: &InterfaceRef,
        method: &InterfaceMethodRef,
    ) -> Option<ResolvedImplementation> {
        let explicit = ty.methods().find(|m| {
            m.name == method.name && m.explicit_interface.as_deref() == Some(interface.full_name.as_str())
        });
        if let Some(member) = explicit {
            return Some(ResolvedImplementation::explicit(member.accessibility));
        }

        let implicit = ty
            .methods()
            .find(|m| !m.is_explicit() && m.name == method.name && m.accessibility == Accessibility::Public);
        if let Some(member) = implicit {
            return Some(ResolvedImplementation::implicit(member.accessibility));
        }

        method
            .has_default_body
            .then(|| ResolvedImplementation::implicit(method.declared_accessibility))
    }
}

/// Fixed answers keyed by interface method name, independent of the type.
#[derive(Debug, Clone, Default)]
pub struct FixedImplementations {
    answers: BTreeMap<String, ResolvedImplementation>,
}

impl FixedImplementations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, method: impl Into<String>, resolved: ResolvedImplementation) -> Self {
        self.answers.insert(method.into(), resolved);
        self
    }
}

impl ImplementationLookup for FixedImplementations {
    fn find_implementation(
        &self,
        _ty: &TypeDescriptor,
        _interface: &InterfaceRef,
        method: &InterfaceMethodRef,
    ) -> Option<ResolvedImplementation> {
        self.answers.get(&method.name).copied()
    }
}

/// Classify every method of `interface` for `descriptor`.
///
/// Methods without an implementation are left out of the map. If the
/// interface lists a name twice, the first classification is kept.
pub fn resolve<L>(
    descriptor: &TypeDescriptor,
    interface: &InterfaceRef,
    lookup: &L,
) -> BTreeMap<String, ImplementationStatus>
where
    L: ImplementationLookup + ?Sized,
{
    let declared = declared_by_name(descriptor);

    interface.methods.iter().fold(BTreeMap::new(), |mut statuses, method| {
        if statuses.contains_key(&method.name) {
            return statuses;
        }
        let resolved = lookup.find_implementation(descriptor, interface, method);
        if let Some(status) = classify(method, resolved, &declared) {
            statuses.insert(method.name.clone(), status);
        }
        statuses
    })
}

/// First declared method per lookup name; later duplicates are ignored.
fn declared_by_name(descriptor: &TypeDescriptor) -> BTreeMap<String, &MemberInfo> {
    descriptor.methods().fold(BTreeMap::new(), |mut map, member| {
        map.entry(member.lookup_name()).or_insert(member);
        map
    })
}

fn classify(
    method: &InterfaceMethodRef,
    resolved: Option<ResolvedImplementation>,
    declared: &BTreeMap<String, &MemberInfo>,
) -> Option<ImplementationStatus> {
    let resolved = resolved?;
    if resolved.is_explicit {
        return Some(ImplementationStatus::Explicit);
    }
    let matched = declared
        .get(&method.name)
        .is_some_and(|member| member.accessibility == method.declared_accessibility);
    Some(if matched {
        ImplementationStatus::ImplicitMatched
    } else {
        ImplementationStatus::ImplicitMismatched
    })
}
