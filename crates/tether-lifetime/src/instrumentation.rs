// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Build-time selection between the tracking and no-op registries. Nothing
// here branches at runtime; the alias is resolved by cfg alone.

#[cfg(all(
    any(debug_assertions, feature = "object_tracking"),
    not(feature = "untracked")
))]
mod active {
    pub type ActiveRegistry = crate::registry::TrackingRegistry;
    pub const ENABLED: bool = true;
}

#[cfg(not(all(
    any(debug_assertions, feature = "object_tracking"),
    not(feature = "untracked")
)))]
mod active {
    pub type ActiveRegistry = crate::registry::NoopRegistry;
    pub const ENABLED: bool = false;
}

/// Registry selected for this build: [`TrackingRegistry`](crate::TrackingRegistry)
/// when instrumentation is enabled, [`NoopRegistry`](crate::NoopRegistry)
/// otherwise.
pub type ActiveRegistry = active::ActiveRegistry;

/// `true` when [`ActiveRegistry`] is the tracking registry.
pub const INSTRUMENTATION_ENABLED: bool = active::ENABLED;
