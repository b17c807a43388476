//! Parsing of `#[attr_bool(...)]` field attributes.
//!
//! Each annotated field becomes one [`FieldDecl`]: a role, the optional
//! behaviour keys, and the field identifier the generated methods are
//! named after. Unknown keys are rejected: the declaration vocabulary is a
//! closed set, and a typo that silently dropped a method would defer the
//! failure to the first missing call.

use syn::{Data, DeriveInput, Expr, Fields, LitStr, Path, Type, Visibility};

/// Which accessor halves a field declaration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldRole {
    Accessor,
    Reader,
    Writer,
}

impl FieldRole {
    pub(crate) fn wants_reader(self) -> bool {
        matches!(self, FieldRole::Accessor | FieldRole::Reader)
    }

    pub(crate) fn wants_writer(self) -> bool {
        matches!(self, FieldRole::Accessor | FieldRole::Writer)
    }
}

/// One parsed `#[attr_bool(...)]` field declaration.
#[derive(Debug)]
pub(crate) struct FieldDecl {
    pub(crate) ident: syn::Ident,
    pub(crate) role: FieldRole,
    pub(crate) force: bool,
    pub(crate) default: Option<Expr>,
    pub(crate) get_with: Option<Path>,
    pub(crate) set_with: Option<Path>,
    pub(crate) vis: Option<Visibility>,
}

/// Gathers the annotated fields of the user-provided struct.
///
/// Input shape is validated eagerly so expansion can fail fast: the derive
/// only accepts structs with named fields, and every annotated field must
/// use `attr_bool::Slot` storage.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<Vec<FieldDecl>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &data.struct_token,
                    "AttrBool requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "AttrBool can only be derived for structs",
            ));
        }
    };

    let mut decls = Vec::new();
    for field in fields {
        if let Some(decl) = parse_field(field)? {
            decls.push(decl);
        }
    }
    Ok(decls)
}

fn parse_field(field: &syn::Field) -> syn::Result<Option<FieldDecl>> {
    if !field.attrs.iter().any(|a| a.path().is_ident("attr_bool")) {
        return Ok(None);
    }

    ensure_slot_type(&field.ty)?;

    let ident = field.ident.clone().expect("named field");
    let mut role: Option<FieldRole> = None;
    let mut force = false;
    let mut default: Option<Expr> = None;
    let mut get_with: Option<Path> = None;
    let mut set_with: Option<Path> = None;
    let mut vis: Option<Visibility> = None;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("attr_bool")) {
        attr.parse_nested_meta(|meta| {
            if let Some(parsed) = role_key(&meta.path) {
                if role.replace(parsed).is_some() {
                    return Err(meta.error("conflicting attr_bool roles"));
                }
                Ok(())
            } else if meta.path.is_ident("force") {
                force = true;
                Ok(())
            } else if meta.path.is_ident("default") {
                default = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("get_with") {
                let s: LitStr = meta.value()?.parse()?;
                get_with = Some(s.parse()?);
                Ok(())
            } else if meta.path.is_ident("set_with") {
                let s: LitStr = meta.value()?.parse()?;
                set_with = Some(s.parse()?);
                Ok(())
            } else if meta.path.is_ident("vis") {
                let s: LitStr = meta.value()?.parse()?;
                vis = Some(s.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown attr_bool attribute"))
            }
        })?;
    }

    let Some(role) = role else {
        return Err(syn::Error::new_spanned(
            &ident,
            "attr_bool needs a role: accessor, reader, or writer",
        ));
    };
    if role == FieldRole::Writer && default.is_some() {
        return Err(syn::Error::new_spanned(
            &ident,
            "default value not allowed for writer",
        ));
    }
    if role == FieldRole::Writer && get_with.is_some() {
        return Err(syn::Error::new_spanned(
            &ident,
            "get_with not allowed for a writer-only attribute",
        ));
    }
    if role == FieldRole::Reader && set_with.is_some() {
        return Err(syn::Error::new_spanned(
            &ident,
            "set_with not allowed for a reader-only attribute",
        ));
    }

    Ok(Some(FieldDecl {
        ident,
        role,
        force,
        default,
        get_with,
        set_with,
        vis,
    }))
}

fn role_key(path: &syn::Path) -> Option<FieldRole> {
    if path.is_ident("accessor") {
        Some(FieldRole::Accessor)
    } else if path.is_ident("reader") {
        Some(FieldRole::Reader)
    } else if path.is_ident("writer") {
        Some(FieldRole::Writer)
    } else {
        None
    }
}

/// Annotated fields must be backed by `attr_bool::Slot` storage.
///
/// The check is shallow, matching the final path segment, so aliased and
/// fully-qualified forms like `attr_bool::Slot` both pass.
fn ensure_slot_type(ty: &Type) -> syn::Result<()> {
    if let Type::Path(p) = ty
        && p.path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Slot")
    {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        ty,
        "attr_bool fields must use `attr_bool::Slot` storage",
    ))
}
