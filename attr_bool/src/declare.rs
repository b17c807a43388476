//! Declaration requests and the synthesis of accessor methods.
//!
//! A [`Declaration`] is built from one of six entry points (accessor,
//! reader, writer, and their strict-boolean variants), optionally given a
//! default value or custom callbacks, and applied to a mutable
//! [`ClassDef`]. Every validation happens while the declaration is being
//! applied; the call either attaches its full method set or attaches
//! nothing.

use std::sync::Arc;

use crate::class::{ClassDef, Instance, Method, MethodBody, MethodName, ReaderFn, WriterFn};
use crate::error::AttrBoolError;
use crate::ident;
use crate::slot::SlotHandle;
use crate::value::Value;

/// One positional argument of a declaration.
///
/// Leading arguments name the attributes being declared; a single trailing
/// non-name argument is treated as a positional default. Strings convert
/// to names, everything else to defaults, so call sites can mix them:
///
/// ```rust
/// use attr_bool::DeclArg;
///
/// let args = [DeclArg::from("volume"), DeclArg::from(11)];
/// assert!(matches!(&args[0], DeclArg::Name(n) if n == "volume"));
/// ```
#[derive(Debug, Clone)]
pub enum DeclArg {
    /// An attribute name.
    Name(String),
    /// A trailing default value.
    Default(Value),
}

impl From<&str> for DeclArg {
    fn from(name: &str) -> Self {
        DeclArg::Name(name.to_owned())
    }
}

impl From<String> for DeclArg {
    fn from(name: String) -> Self {
        DeclArg::Name(name)
    }
}

impl From<bool> for DeclArg {
    fn from(value: bool) -> Self {
        DeclArg::Default(Value::Bool(value))
    }
}

impl From<i32> for DeclArg {
    fn from(value: i32) -> Self {
        DeclArg::Default(Value::from(value))
    }
}

impl From<i64> for DeclArg {
    fn from(value: i64) -> Self {
        DeclArg::Default(Value::Int(value))
    }
}

impl From<f64> for DeclArg {
    fn from(value: f64) -> Self {
        DeclArg::Default(Value::Float(value))
    }
}

impl From<Value> for DeclArg {
    fn from(value: Value) -> Self {
        DeclArg::Default(value)
    }
}

/// Which accessor halves a declaration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Readers only.
    Reader,
    /// Writers only.
    Writer,
    /// Readers and writers.
    Both,
}

impl Role {
    const fn wants_reader(self) -> bool {
        matches!(self, Role::Reader | Role::Both)
    }

    const fn wants_writer(self) -> bool {
        matches!(self, Role::Writer | Role::Both)
    }
}

/// A single accessor declaration: attribute names plus behaviour options.
///
/// ```rust
/// use attr_bool::{ClassDef, Declaration, Instance, Value};
///
/// let mut class = ClassDef::new("Lamp");
/// class.enable_attr_bool();
/// let names = Declaration::bool_accessor(["lit"]).apply_to(&mut class)?;
/// assert_eq!(names.len(), 2);
/// assert_eq!(names[0].to_string(), "lit?");
///
/// let class = class.seal();
/// let mut lamp = Instance::new(&class);
/// assert_eq!(lamp.read("lit")?, Value::Bool(false));
/// lamp.write("lit", 7)?;
/// assert_eq!(lamp.read("lit")?, Value::Bool(true));
/// # Ok::<(), attr_bool::AttrBoolError>(())
/// ```
pub struct Declaration {
    role: Role,
    force_bool: bool,
    args: Vec<DeclArg>,
    default: Option<Value>,
    reader: Option<ReaderFn>,
    writer: Option<WriterFn>,
}

impl Declaration {
    fn new<I>(role: Role, force_bool: bool, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DeclArg>,
    {
        Self {
            role,
            force_bool,
            args: args.into_iter().map(Into::into).collect(),
            default: None,
            reader: None,
            writer: None,
        }
    }

    /// Declares a reader and a writer per name.
    pub fn accessor<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DeclArg>,
    {
        Self::new(Role::Both, false, args)
    }

    /// Declares a reader per name.
    pub fn reader<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DeclArg>,
    {
        Self::new(Role::Reader, false, args)
    }

    /// Declares a writer per name.
    pub fn writer<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DeclArg>,
    {
        Self::new(Role::Writer, false, args)
    }

    /// Declares a reader and a writer per name, coercing every value that
    /// passes through them to strict `true`/`false`.
    pub fn bool_accessor<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DeclArg>,
    {
        Self::new(Role::Both, true, args)
    }

    /// Strict-boolean variant of [`Declaration::reader`].
    pub fn bool_reader<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DeclArg>,
    {
        Self::new(Role::Reader, true, args)
    }

    /// Strict-boolean variant of [`Declaration::writer`].
    pub fn bool_writer<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DeclArg>,
    {
        Self::new(Role::Writer, true, args)
    }

    /// Value generated readers fall back to while the backing slot has
    /// never been assigned.
    ///
    /// Takes precedence over a positional trailing default if a call site
    /// somehow supplies both. Strict-boolean declarations coerce the
    /// default once, when the declaration is applied.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Replaces the generated reader with a callback invoked on the
    /// receiving instance. The backing slot is no longer consulted.
    #[must_use]
    pub fn read_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&Instance) -> Value + Send + Sync + 'static,
    {
        self.reader = Some(Arc::new(f));
        self
    }

    /// Replaces the generated writer with a callback invoked on the
    /// receiving instance with the incoming value.
    #[must_use]
    pub fn write_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Instance, Value) -> Value + Send + Sync + 'static,
    {
        self.writer = Some(Arc::new(f));
        self
    }

    /// Validates the declaration and attaches its methods to `class`.
    ///
    /// Returns the produced method names, readers first and then writers,
    /// each group in declaration order, so a caller can apply a visibility
    /// modifier to exactly the methods just produced.
    ///
    /// # Errors
    ///
    /// - [`AttrBoolError::CapabilityNotAvailable`] when `class` never
    ///   enabled declarations.
    /// - [`AttrBoolError::InvalidIdentifier`] when a name is not a valid
    ///   attribute-name root.
    /// - [`AttrBoolError::InvalidArgument`] when options conflict, e.g. a
    ///   default supplied to a writer-only declaration.
    /// - [`AttrBoolError::MissingBackingSlot`] when a generated accessor
    ///   cannot resolve its backing slot.
    ///
    /// No method is attached unless every check passes.
    pub fn apply_to(self, class: &mut ClassDef) -> Result<Vec<MethodName>, AttrBoolError> {
        if !class.attr_bool_enabled() {
            return Err(AttrBoolError::CapabilityNotAvailable {
                class: class.name().to_owned(),
            });
        }

        let Self {
            role,
            force_bool,
            args,
            default,
            reader,
            writer,
        } = self;

        let (names, positional) = split_args(args)?;
        for name in &names {
            ident::ensure_valid_name(name)?;
        }
        check_role_conflicts(role, default.is_some() || positional.is_some(), &reader, &writer)?;

        // Named option wins over a positional trailing value.
        let mut default = default.or(positional);
        if force_bool {
            default = default.map(|v| v.to_bool());
        }

        let mut methods = Vec::new();
        let mut produced = Vec::new();
        if role.wants_reader() {
            for name in &names {
                let method_name = MethodName::reader(name);
                produced.push(method_name.clone());
                methods.push(Method {
                    name: method_name,
                    body: MethodBody::Reader(build_reader(
                        name,
                        reader.as_ref(),
                        default.as_ref(),
                        force_bool,
                    )?),
                });
            }
        }
        if role.wants_writer() {
            for name in &names {
                let method_name = MethodName::writer(name);
                produced.push(method_name.clone());
                methods.push(Method {
                    name: method_name,
                    body: MethodBody::Writer(build_writer(name, writer.as_ref(), force_bool)?),
                });
            }
        }

        class.attach(methods);
        Ok(produced)
    }
}

fn check_role_conflicts(
    role: Role,
    has_default: bool,
    reader: &Option<ReaderFn>,
    writer: &Option<WriterFn>,
) -> Result<(), AttrBoolError> {
    if role == Role::Writer && has_default {
        return Err(invalid_argument("default value not allowed for writer"));
    }
    if role == Role::Writer && reader.is_some() {
        return Err(invalid_argument(
            "reader callback not allowed for writer-only declaration",
        ));
    }
    if role == Role::Reader && writer.is_some() {
        return Err(invalid_argument(
            "writer callback not allowed for reader-only declaration",
        ));
    }
    Ok(())
}

fn invalid_argument(message: &str) -> AttrBoolError {
    AttrBoolError::InvalidArgument {
        message: message.to_owned(),
    }
}

/// Splits the positional argument list into attribute names and an
/// optional trailing default.
fn split_args(args: Vec<DeclArg>) -> Result<(Vec<String>, Option<Value>), AttrBoolError> {
    let last = args.len().saturating_sub(1);
    let mut names = Vec::new();
    let mut positional = None;
    for (i, arg) in args.into_iter().enumerate() {
        match arg {
            DeclArg::Name(name) => names.push(name),
            DeclArg::Default(value) if i == last => positional = Some(value),
            DeclArg::Default(_) => {
                return Err(invalid_argument(
                    "attribute names must precede the default value",
                ));
            }
        }
    }
    if names.is_empty() {
        return Err(invalid_argument("at least one attribute name is required"));
    }
    Ok((names, positional))
}

fn build_reader(
    name: &str,
    callback: Option<&ReaderFn>,
    default: Option<&Value>,
    force_bool: bool,
) -> Result<ReaderFn, AttrBoolError> {
    if let Some(callback) = callback {
        let callback = Arc::clone(callback);
        return Ok(if force_bool {
            Arc::new(move |instance| callback(instance).to_bool())
        } else {
            callback
        });
    }

    let handle = SlotHandle::resolve(name)?;
    if let Some(default) = default {
        let default = default.clone();
        Ok(Arc::new(move |instance| {
            if instance.slots().is_set(handle.name()) {
                let value = instance.slots().fetch(handle.name());
                if force_bool { value.to_bool() } else { value }
            } else {
                default.clone()
            }
        }))
    } else {
        Ok(Arc::new(move |instance| {
            let value = instance.slots().fetch(handle.name());
            if force_bool { value.to_bool() } else { value }
        }))
    }
}

fn build_writer(
    name: &str,
    callback: Option<&WriterFn>,
    force_bool: bool,
) -> Result<WriterFn, AttrBoolError> {
    if let Some(callback) = callback {
        let callback = Arc::clone(callback);
        return Ok(if force_bool {
            Arc::new(move |instance, value| callback(instance, value.to_bool()))
        } else {
            callback
        });
    }

    let handle = SlotHandle::resolve(name)?;
    Ok(Arc::new(move |instance, value| {
        let stored = if force_bool { value.to_bool() } else { value };
        instance.slots_mut().set(handle.name(), stored)
    }))
}
