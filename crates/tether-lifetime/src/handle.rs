// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::{debug, error};

use crate::error::LifetimeError;
use crate::object::{ObjectRef, WrapperObject};
use crate::ownership::{LifetimeGate, OwnerId, Ownership};
use crate::registry::LifetimeRegistry;

/// RAII wrapper state for one native resource.
///
/// Construction runs the gate's `on_construct`; [`dispose`](Self::dispose)
/// runs `on_dispose` and reports its result. A handle dropped without an
/// explicit `dispose` is released in `Drop`, where errors can only be logged.
///
/// This type does not free the native resource; it only does the
/// bookkeeping that must accompany the release.
#[derive(Debug)]
pub struct TrackedHandle<'r, R: LifetimeRegistry + ?Sized> {
    gate: LifetimeGate<'r, R>,
    object: ObjectRef,
    ownership: Ownership,
    live: bool,
}

impl<'r, R: LifetimeRegistry + ?Sized> TrackedHandle<'r, R> {
    /// Wraps `object` with the given ownership and records construction.
    ///
    /// # Errors
    ///
    /// Whatever the registry reports for an unowned object; nothing is
    /// constructed in that case.
    pub fn new(
        registry: &'r R,
        object: ObjectRef,
        ownership: Ownership,
    ) -> Result<Self, LifetimeError> {
        let mut handle = Self {
            gate: LifetimeGate::new(registry),
            object,
            ownership,
            live: false,
        };
        handle.gate.on_construct(&handle)?;
        handle.live = true;
        Ok(handle)
    }

    /// Wraps a user-owned object.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn unowned(registry: &'r R, object: ObjectRef) -> Result<Self, LifetimeError> {
        Self::new(registry, object, Ownership::Unowned)
    }

    /// Wraps an object whose lifetime belongs to `owner`.
    ///
    /// # Errors
    ///
    /// None in practice: the gate never consults the registry for owned
    /// objects.
    pub fn owned_by(
        registry: &'r R,
        object: ObjectRef,
        owner: OwnerId,
    ) -> Result<Self, LifetimeError> {
        Self::new(registry, object, Ownership::OwnedBy(owner))
    }

    /// Hands the object to an owning aggregate.
    ///
    /// A user-owned object leaves the registry here, since the owner now
    /// releases it. Re-adopting an engine-owned object just changes owner.
    ///
    /// # Errors
    ///
    /// Whatever the registry reports when releasing the object. The handle
    /// is then treated as released and `Drop` does not release it again.
    pub fn adopt(&mut self, owner: OwnerId) -> Result<(), LifetimeError> {
        if let Err(err) = self.gate.on_dispose(&*self) {
            self.live = false;
            return Err(err);
        }
        debug!(object = %self.object, %owner, "adopted");
        self.ownership = Ownership::OwnedBy(owner);
        Ok(())
    }

    /// Records disposal and consumes the handle.
    ///
    /// # Errors
    ///
    /// Whatever the registry reports when releasing an unowned object.
    pub fn dispose(mut self) -> Result<(), LifetimeError> {
        self.live = false;
        self.gate.on_dispose(&self)
    }
}

impl<R: LifetimeRegistry + ?Sized> WrapperObject for TrackedHandle<'_, R> {
    fn object_ref(&self) -> ObjectRef {
        self.object
    }

    fn ownership(&self) -> Ownership {
        self.ownership
    }
}

impl<R: LifetimeRegistry + ?Sized> Drop for TrackedHandle<'_, R> {
    fn drop(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        if let Err(err) = self.gate.on_dispose(&*self) {
            error!(object = %self.object, %err, "release on drop failed");
        }
    }
}
