//! Procedural macros for the xaml-di source generator
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `capability_slots!` | enum declaration | Fixed method-slot vocabulary |
//!
//! ## Example
//!
//! ```ignore
//! macros::capability_slots! {
//!     /// Method slots of the capability interface.
//!     pub enum CapabilitySlot {
//!         GetAppProvider,
//!         GetRequiredService,
//!     }
//!
//!     impl CapabilityModel -> ImplementationStatus;
//! }
//!
//! assert_eq!(CapabilitySlot::GetAppProvider.method_name(), "GetAppProvider");
//! assert_eq!(CapabilitySlot::from_method_name("Nope"), None);
//! let implemented = model.is_get_required_service_implemented();
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod inner;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Declare the capability slot vocabulary.
///
/// Generates the enum plus `ALL`, `method_name`, `from_method_name` and a
/// `Display` impl. A slot may override its method name with `Slot = "Name"`.
/// A trailing `impl Model -> Status;` adds `<slot>_status()` and
/// `is_<slot>_implemented()` to `Model`, delegating to its `status(slot)`.
/// Duplicate method names and empty vocabularies are rejected at compile time.
#[proc_macro]
pub fn capability_slots(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::slots::SlotsInput);
    inner::slots::expand_capability_slots(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
