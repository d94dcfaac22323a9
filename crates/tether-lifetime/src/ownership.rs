// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ownership classification and the gate in front of the registry.

use core::fmt;

use crate::error::LifetimeError;
use crate::object::WrapperObject;
use crate::registry::LifetimeRegistry;

/// Identity of an owning aggregate (compound shape, world, body, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Wraps a raw owner id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw owner id.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.0)
    }
}

/// Who releases a wrapper's native resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ownership {
    /// User-owned: caller code constructs and disposes the wrapper, and the
    /// registry tracks it.
    #[default]
    Unowned,
    /// Engine-owned: the named aggregate is responsible for the resource, so
    /// the registry stays out of it.
    OwnedBy(OwnerId),
}

impl Ownership {
    /// `true` for [`Ownership::Unowned`].
    pub const fn is_user_owned(self) -> bool {
        matches!(self, Self::Unowned)
    }

    /// Owner of an engine-owned wrapper.
    pub const fn owner(self) -> Option<OwnerId> {
        match self {
            Self::Unowned => None,
            Self::OwnedBy(owner) => Some(owner),
        }
    }
}

/// Classifies a wrapper. Stateless; reads only the wrapper's own ownership.
pub fn classify<W: WrapperObject + ?Sized>(obj: &W) -> Ownership {
    obj.ownership()
}

/// Applies [`classify`] in front of a registry.
///
/// User-owned wrappers are forwarded; engine-owned wrappers are a no-op that
/// always succeeds, whichever registry is active.
#[derive(Debug)]
pub struct LifetimeGate<'r, R: ?Sized> {
    registry: &'r R,
}

impl<R: ?Sized> Clone for LifetimeGate<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for LifetimeGate<'_, R> {}

impl<'r, R: LifetimeRegistry + ?Sized> LifetimeGate<'r, R> {
    /// Creates a gate over `registry`.
    pub const fn new(registry: &'r R) -> Self {
        Self { registry }
    }

    /// Registry behind the gate.
    pub const fn registry(&self) -> &'r R {
        self.registry
    }

    /// Call when a wrapper is constructed.
    ///
    /// # Errors
    ///
    /// The registry's `register` error for an unowned wrapper.
    pub fn on_construct<W: WrapperObject + ?Sized>(&self, obj: &W) -> Result<(), LifetimeError> {
        match classify(obj) {
            Ownership::Unowned => self.registry.register(obj.object_ref()),
            Ownership::OwnedBy(_) => Ok(()),
        }
    }

    /// Call when a wrapper is disposed.
    ///
    /// # Errors
    ///
    /// The registry's `unregister` error for an unowned wrapper.
    pub fn on_dispose<W: WrapperObject + ?Sized>(&self, obj: &W) -> Result<(), LifetimeError> {
        match classify(obj) {
            Ownership::Unowned => self.registry.unregister(obj.object_ref()),
            Ownership::OwnedBy(_) => Ok(()),
        }
    }
}
