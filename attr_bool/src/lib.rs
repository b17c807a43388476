//! Boolean-flavoured attribute declarations.
//!
//! This crate lets an author declare predicate-style accessors (readers,
//! writers, or both) with optional default values, optional strict
//! `true`/`false` coercion, and optional custom logic, on two surfaces:
//!
//! - **Runtime declarations** on a dynamic [`ClassDef`]: a [`Declaration`]
//!   validates its arguments, synthesizes named reader/writer closures, and
//!   attaches them atomically. Instances dispatch the generated methods by
//!   name. Classes opt in explicitly with [`ClassDef::enable_attr_bool`];
//!   subclasses inherit the capability.
//! - **Compile-time declarations** through [`AttrBool`], a derive macro
//!   that generates statically typed accessors over [`Slot`] fields. The
//!   actual implementation of the derive lives in the companion
//!   `attr_bool_macros` crate.
//!
//! Truthiness is strict throughout: only [`Value::Nil`] and `false` are
//! falsy, so `0` and `""` coerce to `true`.
//!
//! ```rust
//! use attr_bool::{AttrBool, Slot, Value};
//!
//! #[derive(Default, AttrBool)]
//! struct Widget {
//!     #[attr_bool(accessor, force)]
//!     visible: Slot,
//!     #[attr_bool(accessor, default = 5)]
//!     volume: Slot,
//! }
//!
//! let mut widget = Widget::default();
//! assert!(!widget.visible());
//! widget.set_visible(7);
//! assert!(widget.visible());
//!
//! assert_eq!(widget.volume(), Value::Int(5));
//! widget.set_volume(9);
//! assert_eq!(widget.volume(), Value::Int(9));
//! ```
//!
//! The same declaration applied at runtime:
//!
//! ```rust
//! use attr_bool::{ClassDef, Declaration, Instance, Value};
//!
//! let mut class = ClassDef::new("Widget");
//! class.enable_attr_bool();
//! let names = Declaration::bool_accessor(["visible"]).apply_to(&mut class)?;
//! assert_eq!(names.iter().map(ToString::to_string).collect::<Vec<_>>(),
//!            ["visible?", "visible="]);
//!
//! let class = class.seal();
//! let mut widget = Instance::new(&class);
//! assert_eq!(widget.read("visible")?, Value::Bool(false));
//! widget.write("visible", 7)?;
//! assert_eq!(widget.read("visible")?, Value::Bool(true));
//! # Ok::<(), attr_bool::AttrBoolError>(())
//! ```

pub use attr_bool_macros::AttrBool;

mod class;
mod declare;
mod error;
mod ident;
mod slot;
mod value;

pub use class::{ClassDef, Instance, MethodKind, MethodName, ReaderFn, WriterFn};
pub use declare::{DeclArg, Declaration, Role};
pub use error::AttrBoolError;
pub use ident::is_valid_name;
pub use slot::{Slot, SlotHandle, Slots};
pub use value::Value;
