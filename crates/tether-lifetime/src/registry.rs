// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Registry of live user-owned wrapper objects.
//!
//! # Locking
//!
//! [`TrackingRegistry`] holds one mutex over the tracked set. It covers the
//! insert in `register`, the remove in `unregister` and the copy in
//! `snapshot`, and nothing else: logging and error construction happen after
//! the guard is dropped, and no registry call is made while it is held.
//!
//! A poisoned lock is recovered rather than propagated. Every critical
//! section is a single map operation, so a panic elsewhere cannot leave the
//! set half-updated.

use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::{debug, error};

use crate::error::{LifetimeError, LifetimeOp};
use crate::object::{ObjectRef, RawHandle};

/// Bookkeeping for user-owned wrapper objects.
///
/// Gating on ownership happens above this trait, in
/// [`LifetimeGate`](crate::LifetimeGate); implementations never look at
/// ownership.
pub trait LifetimeRegistry: Send + Sync {
    /// Starts tracking `obj`.
    ///
    /// # Errors
    ///
    /// [`LifetimeError::InvalidArgument`] on a null handle and
    /// [`LifetimeError::LifecycleCorruption`] if the handle is already
    /// tracked. A failed call leaves the tracked set unchanged.
    fn register(&self, obj: ObjectRef) -> Result<(), LifetimeError>;

    /// Stops tracking `obj`.
    ///
    /// # Errors
    ///
    /// [`LifetimeError::InvalidArgument`] on a null handle and
    /// [`LifetimeError::LifecycleCorruption`] if `obj` is not tracked, or its
    /// handle is tracked under a different type name. A failed call leaves
    /// the tracked set unchanged.
    fn unregister(&self, obj: ObjectRef) -> Result<(), LifetimeError>;

    /// Point-in-time copy of every tracked object, sorted by handle.
    fn snapshot(&self) -> Vec<ObjectRef>;

    /// Number of tracked objects.
    fn len(&self) -> usize;

    /// `true` when nothing is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutex-guarded registry that detects double-register and unmatched
/// unregister.
#[derive(Debug, Default)]
pub struct TrackingRegistry {
    live: Mutex<FxHashMap<RawHandle, &'static str>>,
}

impl TrackingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<RawHandle, &'static str>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn corruption(op: LifetimeOp, obj: ObjectRef, reason: &'static str) -> LifetimeError {
        error!(
            %op,
            handle = %obj.handle(),
            type_name = obj.type_name(),
            reason,
            "lifecycle corruption"
        );
        LifetimeError::LifecycleCorruption {
            op,
            type_name: obj.type_name(),
            handle: obj.handle(),
            reason,
        }
    }
}

impl LifetimeRegistry for TrackingRegistry {
    fn register(&self, obj: ObjectRef) -> Result<(), LifetimeError> {
        if obj.is_null() {
            return Err(LifetimeError::InvalidArgument {
                op: LifetimeOp::Register,
            });
        }
        let inserted = match self.lock().entry(obj.handle()) {
            Entry::Vacant(slot) => {
                slot.insert(obj.type_name());
                true
            }
            Entry::Occupied(_) => false,
        };
        if !inserted {
            return Err(Self::corruption(
                LifetimeOp::Register,
                obj,
                "object is already registered",
            ));
        }
        debug!(handle = %obj.handle(), type_name = obj.type_name(), "registered");
        Ok(())
    }

    fn unregister(&self, obj: ObjectRef) -> Result<(), LifetimeError> {
        if obj.is_null() {
            return Err(LifetimeError::InvalidArgument {
                op: LifetimeOp::Unregister,
            });
        }
        // Identity is the (handle, type) pair; a handle tracked under another
        // wrapper type stays tracked.
        let rejected = match self.lock().entry(obj.handle()) {
            Entry::Occupied(slot) if *slot.get() == obj.type_name() => {
                slot.remove();
                None
            }
            Entry::Occupied(_) => Some("object is registered under a different type"),
            Entry::Vacant(_) => Some("object was never registered or is already unregistered"),
        };
        if let Some(reason) = rejected {
            return Err(Self::corruption(LifetimeOp::Unregister, obj, reason));
        }
        debug!(handle = %obj.handle(), type_name = obj.type_name(), "unregistered");
        Ok(())
    }

    fn snapshot(&self) -> Vec<ObjectRef> {
        let mut out: Vec<ObjectRef> = self
            .lock()
            .iter()
            .map(|(&handle, &type_name)| ObjectRef::new(handle, type_name))
            .collect();
        // Hash order is not stable across runs.
        out.sort_unstable_by_key(ObjectRef::handle);
        out
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Registry used when instrumentation is compiled out.
///
/// Every call is a no-op: no lock, no allocation, no error, not even for a
/// null handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistry;

impl NoopRegistry {
    /// Creates the no-op registry.
    pub const fn new() -> Self {
        Self
    }
}

impl LifetimeRegistry for NoopRegistry {
    #[inline]
    fn register(&self, _obj: ObjectRef) -> Result<(), LifetimeError> {
        Ok(())
    }

    #[inline]
    fn unregister(&self, _obj: ObjectRef) -> Result<(), LifetimeError> {
        Ok(())
    }

    #[inline]
    fn snapshot(&self) -> Vec<ObjectRef> {
        Vec::new()
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }
}
