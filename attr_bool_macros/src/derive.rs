//! Expansion entry for the `AttrBool` derive.

pub(crate) mod build;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let decls = parse::parse_input(input)?;
    Ok(build::build_impl(input, &decls))
}
