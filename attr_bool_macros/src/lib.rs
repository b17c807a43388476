//! Procedural macros for `attr_bool`.
//!
//! The [`AttrBool`] derive turns `#[attr_bool(...)]` field attributes into
//! inherent accessor methods over `attr_bool::Slot` fields. Deriving is the
//! explicit, per-type opt-in for the declaration vocabulary; malformed
//! declarations are rejected while the type definition is being compiled,
//! never at the first call of a generated method.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro generating boolean-flavoured accessors for `Slot` fields.
///
/// Field attribute keys:
///
/// - `accessor` / `reader` / `writer`: exactly one role per field.
/// - `force`: coerce every value passing through the generated methods to
///   strict `true`/`false`.
/// - `default = <expr>`: reader fallback while the slot has never been
///   assigned; any expression convertible into `attr_bool::Value`. Not
///   allowed together with `writer`.
/// - `get_with = "path"` / `set_with = "path"`: custom accessor logic,
///   invoked with `&self` (readers) or `&mut self` and the incoming value
///   (writers) instead of touching the backing slot.
/// - `vis = "pub(crate)"`: visibility of the generated methods; defaults
///   to `pub`, the empty string makes them private.
///
/// The generated impl also carries an `ATTR_BOOL_METHODS` const listing
/// the produced method names in declaration order.
#[proc_macro_derive(AttrBool, attributes(attr_bool))]
pub fn derive_attr_bool(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
