// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::ownership::Ownership;

/// Address of a native resource, used as the wrapper's identity.
///
/// Only the address is kept; it is never dereferenced. Zero is the null
/// handle.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RawHandle(usize);

impl RawHandle {
    /// The null handle.
    pub const NULL: Self = Self(0);

    /// Wraps a raw address.
    pub const fn from_addr(addr: usize) -> Self {
        Self(addr)
    }

    /// Takes the address of a native pointer.
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr.addr())
    }

    /// The raw address.
    pub const fn addr(self) -> usize {
        self.0
    }

    /// `true` for the null handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawHandle({:#x})", self.0)
    }
}

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Identity of one wrapper object as seen by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    handle: RawHandle,
    type_name: &'static str,
}

impl ObjectRef {
    /// Creates a reference from a handle and a wrapper type name.
    pub const fn new(handle: RawHandle, type_name: &'static str) -> Self {
        Self { handle, type_name }
    }

    /// Creates a reference named after the Rust type `T`.
    pub fn of<T: ?Sized>(handle: RawHandle) -> Self {
        Self::new(handle, core::any::type_name::<T>())
    }

    /// Native handle.
    pub const fn handle(&self) -> RawHandle {
        self.handle
    }

    /// Wrapper type name, used in corruption and leak reports.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `true` when the handle is null.
    pub const fn is_null(&self) -> bool {
        self.handle.is_null()
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.type_name, self.handle)
    }
}

/// A managed proxy for one native resource.
pub trait WrapperObject {
    /// Identity handed to the registry.
    fn object_ref(&self) -> ObjectRef;

    /// Who is responsible for releasing the native resource.
    fn ownership(&self) -> Ownership;
}
