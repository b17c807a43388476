//! Dynamic classes that own synthesized accessor methods.
//!
//! Declarations are applied while a [`ClassDef`] is still mutable. Sealing
//! the class freezes its method set, after which any number of
//! [`Instance`]s can dispatch the generated readers and writers by name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::AttrBoolError;
use crate::slot::Slots;
use crate::value::Value;

/// Body of a synthesized reader, invoked with the receiving instance.
pub type ReaderFn = Arc<dyn Fn(&Instance) -> Value + Send + Sync>;

/// Body of a synthesized writer, invoked with the receiving instance and
/// the incoming value.
pub type WriterFn = Arc<dyn Fn(&mut Instance, Value) -> Value + Send + Sync>;

/// Which half of an accessor a synthesized method implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// A `name?` predicate reader.
    Reader,
    /// A `name=` writer.
    Writer,
}

/// Name of a synthesized method: the attribute root plus its role marker.
///
/// Renders as `root?` for readers and `root=` for writers, matching the
/// names a declaration returns for visibility chaining.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodName {
    root: String,
    kind: MethodKind,
}

impl MethodName {
    pub(crate) fn reader(root: &str) -> Self {
        Self {
            root: root.to_owned(),
            kind: MethodKind::Reader,
        }
    }

    pub(crate) fn writer(root: &str) -> Self {
        Self {
            root: root.to_owned(),
            kind: MethodKind::Writer,
        }
    }

    /// The attribute root the method was declared for.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Reader or writer.
    #[must_use]
    pub const fn kind(&self) -> MethodKind {
        self.kind
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MethodKind::Reader => write!(f, "{}?", self.root),
            MethodKind::Writer => write!(f, "{}=", self.root),
        }
    }
}

pub(crate) enum MethodBody {
    Reader(ReaderFn),
    Writer(WriterFn),
}

pub(crate) struct Method {
    pub(crate) name: MethodName,
    pub(crate) body: MethodBody,
}

/// A dynamic class: a named owner for synthesized accessor methods.
///
/// Classes start without the declaration capability; it must be enabled
/// explicitly with [`ClassDef::enable_attr_bool`] and is inherited by
/// subclasses. Methods attached to a class live as long as the class.
pub struct ClassDef {
    name: String,
    attr_bool_enabled: bool,
    parent: Option<Arc<ClassDef>>,
    methods: Vec<Method>,
    index: HashMap<MethodName, usize>,
}

impl ClassDef {
    /// Creates a class. The declaration operations are not yet enabled.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attr_bool_enabled: false,
            parent: None,
            methods: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a subclass of a sealed class.
    ///
    /// Method lookup falls back to the parent chain, and the declaration
    /// capability is inherited without re-enabling.
    #[must_use]
    pub fn subclass(name: impl Into<String>, parent: &Arc<ClassDef>) -> Self {
        Self {
            name: name.into(),
            attr_bool_enabled: parent.attr_bool_enabled,
            parent: Some(Arc::clone(parent)),
            methods: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Enables the six declaration operations on this class. Idempotent.
    pub fn enable_attr_bool(&mut self) {
        self.attr_bool_enabled = true;
    }

    /// Whether declarations may be applied to this class.
    #[must_use]
    pub const fn attr_bool_enabled(&self) -> bool {
        self.attr_bool_enabled
    }

    /// The class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Freezes the class so instances can be created from it.
    #[must_use]
    pub fn seal(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// `true` when the method is defined on this class or a superclass.
    #[must_use]
    pub fn defines(&self, name: &MethodName) -> bool {
        self.find(name).is_some()
    }

    /// Ordered names of every method defined directly on this class.
    #[must_use]
    pub fn method_names(&self) -> Vec<MethodName> {
        self.methods.iter().map(|m| m.name.clone()).collect()
    }

    fn find(&self, name: &MethodName) -> Option<&Method> {
        match self.index.get(name) {
            Some(&i) => self.methods.get(i),
            None => self.parent.as_deref().and_then(|p| p.find(name)),
        }
    }

    /// Attaches a fully validated method set. Redeclaring a name replaces
    /// the previous method, as the original declaration forms do.
    pub(crate) fn attach(&mut self, methods: Vec<Method>) {
        let attached: Vec<String> = methods.iter().map(|m| m.name.to_string()).collect();
        for method in methods {
            if let Some(&i) = self.index.get(&method.name) {
                self.methods[i] = method;
            } else {
                self.index.insert(method.name.clone(), self.methods.len());
                self.methods.push(method);
            }
        }
        debug!(class = %self.name, methods = ?attached, "attached attribute methods");
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDef")
            .field("name", &self.name)
            .field("attr_bool_enabled", &self.attr_bool_enabled)
            .field("methods", &self.method_names())
            .finish_non_exhaustive()
    }
}

/// An instance of a sealed [`ClassDef`].
///
/// Holds the per-instance backing slots and dispatches reads and writes to
/// the methods its class (or a superclass) declared.
#[derive(Debug, Clone)]
pub struct Instance {
    class: Arc<ClassDef>,
    slots: Slots,
}

impl Instance {
    /// Creates an instance with every slot unset.
    #[must_use]
    pub fn new(class: &Arc<ClassDef>) -> Self {
        Self {
            class: Arc::clone(class),
            slots: Slots::new(),
        }
    }

    /// The instance's class.
    #[must_use]
    pub fn class(&self) -> &Arc<ClassDef> {
        &self.class
    }

    /// Read access to the backing slots, for custom reader callbacks.
    #[must_use]
    pub const fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Write access to the backing slots, for custom writer callbacks.
    pub fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }

    /// Invokes the reader declared for `name` (the attribute root, without
    /// the `?` marker).
    ///
    /// # Errors
    ///
    /// Returns [`AttrBoolError::UnknownMethod`] when no reader was declared
    /// for `name` on the class or any superclass.
    pub fn read(&self, name: &str) -> Result<Value, AttrBoolError> {
        let method = MethodName::reader(name);
        let f = match self.class.find(&method) {
            Some(Method {
                body: MethodBody::Reader(f),
                ..
            }) => Arc::clone(f),
            _ => return Err(self.unknown(&method)),
        };
        Ok(f(self))
    }

    /// Invokes the writer declared for `name` (the attribute root, without
    /// the `=` marker) and returns the value as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AttrBoolError::UnknownMethod`] when no writer was declared
    /// for `name` on the class or any superclass.
    pub fn write(&mut self, name: &str, value: impl Into<Value>) -> Result<Value, AttrBoolError> {
        let method = MethodName::writer(name);
        let f = match self.class.find(&method) {
            Some(Method {
                body: MethodBody::Writer(f),
                ..
            }) => Arc::clone(f),
            _ => return Err(self.unknown(&method)),
        };
        Ok(f(self, value.into()))
    }

    fn unknown(&self, method: &MethodName) -> AttrBoolError {
        AttrBoolError::UnknownMethod {
            class: self.class.name().to_owned(),
            method: method.to_string(),
        }
    }
}
