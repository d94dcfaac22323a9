// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lifetime bookkeeping for wrapper objects that front native physics
//! resources.
//!
//! Every wrapper around a native handle is either **user-owned** (the caller
//! constructs and disposes it) or **engine-owned** (an owning aggregate, such
//! as a compound shape or a world, releases it). Only user-owned wrappers are
//! tracked: the [`LifetimeGate`] classifies each wrapper at construction and
//! disposal and forwards user-owned ones to a [`LifetimeRegistry`].
//!
//! The registry catches two programmer errors deterministically:
//!
//! - registering a handle that is already live (double construction);
//! - unregistering a handle that was never registered (double release).
//!
//! # Instrumentation
//!
//! [`ActiveRegistry`] is [`TrackingRegistry`] when `debug_assertions` is set or
//! the `object_tracking` feature is enabled, and [`NoopRegistry`] otherwise.
//! The `untracked` feature forces the no-op registry everywhere. The no-op
//! registry never fails, even on null handles; callers must not rely on error
//! signaling from it.
//!
//! Process-wide state is opt-in: call [`global::init`] once at startup. Tests
//! and embedders can construct their own registries instead.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

#[cfg(all(feature = "object_tracking", feature = "untracked"))]
compile_error!("features `object_tracking` and `untracked` are mutually exclusive");

/// Leak-check configuration loaded from JSON.
pub mod config;
mod error;
/// Process-wide registry with an explicit initialization point.
pub mod global;
mod handle;
mod instrumentation;
/// Shutdown leak detection.
pub mod leak;
mod object;
mod ownership;
mod registry;

pub use error::{LifetimeError, LifetimeOp};
pub use handle::TrackedHandle;
pub use instrumentation::{ActiveRegistry, INSTRUMENTATION_ENABLED};
pub use object::{ObjectRef, RawHandle, WrapperObject};
pub use ownership::{classify, LifetimeGate, OwnerId, Ownership};
pub use registry::{LifetimeRegistry, NoopRegistry, TrackingRegistry};
