//! Code generation for the `AttrBool` derive.
//!
//! Readers keep the field name (`fn visible(&self)`), writers get a `set_`
//! prefix. A `force` declaration types its reader as `bool`; everything
//! else moves `attr_bool::Value`.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::DeriveInput;

use super::parse::FieldDecl;

pub(crate) fn build_impl(input: &DeriveInput, decls: &[FieldDecl]) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut methods = Vec::new();
    let mut names = Vec::new();
    for decl in decls {
        if decl.role.wants_reader() {
            methods.push(build_reader(decl));
            names.push(format!("{}?", decl.ident));
        }
        if decl.role.wants_writer() {
            methods.push(build_writer(decl));
            names.push(format!("{}=", decl.ident));
        }
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*

            /// Names of the accessor methods generated by `AttrBool`, in
            /// declaration order.
            pub const ATTR_BOOL_METHODS: &'static [&'static str] = &[#(#names),*];
        }
    }
}

fn visibility(decl: &FieldDecl) -> TokenStream {
    decl.vis
        .as_ref()
        .map_or_else(|| quote!(pub), ToTokens::to_token_stream)
}

fn build_reader(decl: &FieldDecl) -> TokenStream {
    let name = &decl.ident;
    let vis = visibility(decl);
    let doc = format!("Reads the `{name}` attribute.");

    let body = if let Some(path) = &decl.get_with {
        if decl.force {
            quote! { ::attr_bool::Value::is_truthy(&#path(self)) }
        } else {
            quote! { #path(self) }
        }
    } else if let Some(default) = &decl.default {
        if decl.force {
            quote! {
                match self.#name.get() {
                    Some(value) => value.is_truthy(),
                    None => ::attr_bool::Value::from(#default).is_truthy(),
                }
            }
        } else {
            quote! {
                match self.#name.get() {
                    Some(value) => value.clone(),
                    None => ::attr_bool::Value::from(#default),
                }
            }
        }
    } else if decl.force {
        quote! { self.#name.get().is_some_and(::attr_bool::Value::is_truthy) }
    } else {
        quote! { self.#name.get().cloned().unwrap_or(::attr_bool::Value::Nil) }
    };

    if decl.force {
        quote! {
            #[doc = #doc]
            #vis fn #name(&self) -> bool { #body }
        }
    } else {
        quote! {
            #[doc = #doc]
            #vis fn #name(&self) -> ::attr_bool::Value { #body }
        }
    }
}

fn build_writer(decl: &FieldDecl) -> TokenStream {
    let name = &decl.ident;
    let set_ident = format_ident!("set_{}", name);
    let vis = visibility(decl);
    let doc = format!("Writes the `{name}` attribute and returns what was stored.");

    if let Some(path) = &decl.set_with {
        let incoming = if decl.force {
            quote! { ::attr_bool::Value::to_bool(&value.into()) }
        } else {
            quote! { value.into() }
        };
        quote! {
            #[doc = #doc]
            #vis fn #set_ident(
                &mut self,
                value: impl ::core::convert::Into<::attr_bool::Value>,
            ) -> ::attr_bool::Value {
                #path(self, #incoming)
            }
        }
    } else if decl.force {
        quote! {
            #[doc = #doc]
            #vis fn #set_ident(
                &mut self,
                value: impl ::core::convert::Into<::attr_bool::Value>,
            ) -> bool {
                self.#name
                    .assign(::attr_bool::Value::to_bool(&value.into()))
                    .is_truthy()
            }
        }
    } else {
        quote! {
            #[doc = #doc]
            #vis fn #set_ident(
                &mut self,
                value: impl ::core::convert::Into<::attr_bool::Value>,
            ) -> ::attr_bool::Value {
                self.#name.assign(value.into())
            }
        }
    }
}
