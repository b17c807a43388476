//! Backing storage for generated accessors.
//!
//! Both storage shapes keep "never assigned" distinguishable from
//! "assigned a value equal to the default": [`Slot`] wraps its value in an
//! `Option`, and [`Slots`] treats key absence as the unset state. Reading
//! an unset attribute yields [`Value::Nil`] without marking the slot as
//! assigned.

use std::collections::HashMap;

use crate::error::AttrBoolError;
use crate::ident;
use crate::value::Value;

/// A single tri-state backing cell.
///
/// Used as the field type behind `#[derive(AttrBool)]` accessors. A fresh
/// slot reports [`Slot::is_set`] as `false` until the first assignment,
/// even if the assigned value equals whatever default the accessor falls
/// back to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot(Option<Value>);

impl Slot {
    /// Creates an unset slot.
    #[must_use]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Returns `true` once the slot has been assigned at least once.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Current value, or `None` when the slot was never assigned.
    #[must_use]
    pub const fn get(&self) -> Option<&Value> {
        self.0.as_ref()
    }

    /// Stores `value` and returns a copy of what was stored.
    pub fn assign(&mut self, value: Value) -> Value {
        self.0 = Some(value.clone());
        value
    }
}

/// Validated address of a named backing slot.
///
/// Generated accessors resolve their slot address once, while the
/// declaration is being evaluated, so a malformed address is rejected
/// before any method attaches rather than at the first read months later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotHandle(String);

impl SlotHandle {
    /// Forces resolution of the slot address for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AttrBoolError::MissingBackingSlot`] when `name` cannot
    /// address a slot.
    pub fn resolve(name: &str) -> Result<Self, AttrBoolError> {
        if ident::is_valid_name(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(AttrBoolError::MissingBackingSlot {
                name: name.to_owned(),
            })
        }
    }

    /// The slot address.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Named per-instance storage for dynamically declared attributes.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    values: HashMap<String, Value>,
}

impl Slots {
    /// Creates an empty store; every slot starts unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once `name` has been assigned at least once.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Current value of `name`, or `None` when never assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Raw read: the stored value, or [`Value::Nil`] when never assigned.
    ///
    /// Fetching does not mark the slot as assigned.
    #[must_use]
    pub fn fetch(&self, name: &str) -> Value {
        self.values.get(name).cloned().unwrap_or(Value::Nil)
    }

    /// Stores `value` under `name` and returns a copy of what was stored.
    pub fn set(&mut self, name: &str, value: Value) -> Value {
        self.values.insert(name.to_owned(), value.clone());
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_slot_is_unset_not_nil_valued() {
        let slot = Slot::new();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn assigning_nil_still_marks_the_slot_set() {
        let mut slot = Slot::new();
        slot.assign(Value::Nil);
        assert!(slot.is_set());
        assert_eq!(slot.get(), Some(&Value::Nil));
    }

    #[test]
    fn store_distinguishes_unset_from_explicit_assignment() {
        let mut slots = Slots::new();
        assert!(!slots.is_set("ready"));
        assert_eq!(slots.fetch("ready"), Value::Nil);
        assert!(!slots.is_set("ready"));

        slots.set("ready", Value::Bool(false));
        assert!(slots.is_set("ready"));
        assert_eq!(slots.get("ready"), Some(&Value::Bool(false)));
        assert_eq!(slots.fetch("ready"), Value::Bool(false));
    }

    #[test]
    fn handles_resolve_only_for_addressable_names() {
        assert!(SlotHandle::resolve("ready").is_ok());
        let err = SlotHandle::resolve("bad name").unwrap_err();
        assert!(matches!(
            err,
            AttrBoolError::MissingBackingSlot { name } if name == "bad name"
        ));
    }
}
