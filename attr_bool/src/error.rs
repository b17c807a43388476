//! Error types produced by attribute declaration and dispatch.

use thiserror::Error;

/// Errors raised while declaring boolean attributes or dispatching the
/// methods they produce.
///
/// Declaration errors surface synchronously, before any method is attached.
/// A declaration either attaches its full method set or attaches nothing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttrBoolError {
    /// A declared name is not a valid attribute-name root.
    #[error("invalid attribute name '{name}'")]
    InvalidIdentifier {
        /// The offending name as supplied.
        name: String,
    },

    /// Mutually exclusive declaration options were combined.
    #[error("invalid declaration: {message}")]
    InvalidArgument {
        /// Description of the conflict.
        message: String,
    },

    /// A declaration was applied to a class that never enabled the
    /// declaration operations.
    #[error("'{class}' has not enabled boolean attribute declarations")]
    CapabilityNotAvailable {
        /// Name of the class the declaration targeted.
        class: String,
    },

    /// A generated accessor could not resolve its backing slot at
    /// declaration time.
    #[error("no backing slot for '{name}'")]
    MissingBackingSlot {
        /// The slot address that failed to resolve.
        name: String,
    },

    /// A read or write targeted a method that was never declared.
    #[error("'{class}' has no method '{method}'")]
    UnknownMethod {
        /// Name of the receiving class.
        class: String,
        /// The method name as dispatched.
        method: String,
    },
}
