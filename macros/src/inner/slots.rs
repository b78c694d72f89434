//! Capability slot vocabulary generation.
//!
//! Single source of truth for the method slots of the capability interface.
//! The extractor keys its status map by method name and the renderer maps
//! those names back to slots, so both sides must come from the same list.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, Attribute, Ident, LitStr, Token, Visibility};

/// One slot: `/// docs` `Ident` with an optional `= "MethodName"` override.
pub struct SlotDecl {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    pub method: Option<LitStr>,
}

impl Parse for SlotDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident: Ident = input.parse()?;
        let method = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(SlotDecl { attrs, ident, method })
    }
}

impl SlotDecl {
    fn method_name(&self) -> String {
        match &self.method {
            Some(lit) => lit.value(),
            None => self.ident.to_string(),
        }
    }
}

/// Trailing `impl Model -> Status;` clause requesting per-slot accessors on
/// `Model`, which must provide `fn status(&self, Name) -> Status`.
pub struct AccessorTarget {
    pub model: Ident,
    pub status: Ident,
}

impl Parse for AccessorTarget {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<Token![impl]>()?;
        let model: Ident = input.parse()?;
        input.parse::<Token![->]>()?;
        let status: Ident = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(AccessorTarget { model, status })
    }
}

/// `pub enum Name { SlotA, SlotB = "Other", }` with an optional
/// `impl Model -> Status;` after it.
pub struct SlotsInput {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub slots: Punctuated<SlotDecl, Token![,]>,
    pub accessors: Option<AccessorTarget>,
}

impl Parse for SlotsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![enum]>()?;
        let name: Ident = input.parse()?;
        let content;
        braced!(content in input);
        let slots = content.parse_terminated(SlotDecl::parse, Token![,])?;
        let accessors = if input.is_empty() { None } else { Some(input.parse()?) };
        Ok(SlotsInput { attrs, vis, name, slots, accessors })
    }
}

pub fn expand_capability_slots(input: SlotsInput) -> syn::Result<TokenStream> {
    if input.slots.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.name,
            "capability slot vocabulary must declare at least one slot",
        ));
    }

    let mut seen: Vec<String> = Vec::new();
    for slot in &input.slots {
        let method = slot.method_name();
        if method.is_empty() {
            return Err(syn::Error::new_spanned(&slot.ident, "slot method name must not be empty"));
        }
        if seen.contains(&method) {
            return Err(syn::Error::new_spanned(
                &slot.ident,
                format!("duplicate capability slot method `{}`", method),
            ));
        }
        seen.push(method);
    }

    let SlotsInput { attrs, vis, name, slots, accessors } = &input;
    let idents: Vec<&Ident> = slots.iter().map(|s| &s.ident).collect();
    let slot_attrs: Vec<&Vec<Attribute>> = slots.iter().map(|s| &s.attrs).collect();
    let methods: Vec<LitStr> = slots
        .iter()
        .map(|s| LitStr::new(&s.method_name(), s.ident.span()))
        .collect();
    let accessor_impl = accessors.as_ref().map(|target| expand_accessors(name, &idents, target));

    Ok(quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #vis enum #name {
            #(
                #(#slot_attrs)*
                #idents,
            )*
        }

        impl #name {
            /// Every slot, in declaration order.
            pub const ALL: &'static [#name] = &[#(#name::#idents),*];

            /// Name of the interface method backing this slot.
            pub const fn method_name(self) -> &'static str {
                match self {
                    #(#name::#idents => #methods,)*
                }
            }

            /// Map an interface method name back to its slot.
            pub fn from_method_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#methods => ::core::option::Option::Some(#name::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.method_name())
            }
        }

        #accessor_impl
    })
}

/// `<slot>_status()` and `is_<slot>_implemented()` for every slot.
fn expand_accessors(name: &Ident, idents: &[&Ident], target: &AccessorTarget) -> TokenStream {
    let AccessorTarget { model, status } = target;
    let methods = idents.iter().map(|ident| {
        let snake = to_snake(&ident.to_string());
        let status_fn = format_ident!("{}_status", snake, span = ident.span());
        let implemented_fn = format_ident!("is_{}_implemented", snake, span = ident.span());
        let status_doc = format!("Status of the `{}` slot.", ident);
        let implemented_doc = format!("`{}` is implicitly matched or explicit.", ident);
        quote! {
            #[doc = #status_doc]
            pub fn #status_fn(&self) -> #status {
                self.status(#name::#ident)
            }

            #[doc = #implemented_doc]
            pub fn #implemented_fn(&self) -> bool {
                self.status(#name::#ident).is_implemented()
            }
        }
    });
    quote! {
        impl #model {
            #(#methods)*
        }
    }
}

/// `GetAppProvider` -> `get_app_provider`, `XAMLHost` -> `xaml_host`.
fn to_snake(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower)) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}
