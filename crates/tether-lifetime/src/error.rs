// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::object::RawHandle;

/// Registry operation that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifetimeOp {
    /// [`LifetimeRegistry::register`](crate::LifetimeRegistry::register).
    Register,
    /// [`LifetimeRegistry::unregister`](crate::LifetimeRegistry::unregister).
    Unregister,
}

impl fmt::Display for LifetimeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => f.write_str("register"),
            Self::Unregister => f.write_str("unregister"),
        }
    }
}

/// Errors raised by the tracking registry and the leak check.
///
/// These signal programming defects, not transient conditions. They are
/// never retried; once raised, the bookkeeping for that handle is suspect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifetimeError {
    /// A null handle was passed to the registry.
    #[error("[LIFETIME_INVALID_ARGUMENT] {op} called with a null handle")]
    InvalidArgument {
        /// Operation that rejected the input.
        op: LifetimeOp,
    },
    /// Double register, or unregister without a matching register.
    #[error("[LIFETIME_CORRUPTION] {op} of {type_name} at {handle}: {reason}")]
    LifecycleCorruption {
        /// Operation that detected the corruption.
        op: LifetimeOp,
        /// Wrapper type of the offending object.
        type_name: &'static str,
        /// Native handle of the offending object.
        handle: RawHandle,
        /// Human-readable cause.
        reason: &'static str,
    },
    /// Live user-owned objects remained when a leak check ran under
    /// [`LeakPolicy::Fail`](crate::config::LeakPolicy::Fail).
    #[error("[LIFETIME_LEAKED] {count} user-owned object(s) still live")]
    Leaked {
        /// Number of live objects found.
        count: usize,
    },
}
