// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::sync::OnceLock;

use tracing::info;

use crate::instrumentation::{ActiveRegistry, INSTRUMENTATION_ENABLED};
use crate::ownership::LifetimeGate;

static REGISTRY: OnceLock<ActiveRegistry> = OnceLock::new();

/// Initializes the process-wide registry and returns it.
///
/// Idempotent: later calls return the instance created by the first one.
/// Call once during startup, before any wrapper is constructed.
pub fn init() -> &'static ActiveRegistry {
    REGISTRY.get_or_init(|| {
        info!(
            instrumented = INSTRUMENTATION_ENABLED,
            "object lifetime registry initialized"
        );
        ActiveRegistry::default()
    })
}

/// The process-wide registry, or `None` before [`init`] has run.
///
/// There is no implicit default instance.
pub fn get() -> Option<&'static ActiveRegistry> {
    REGISTRY.get()
}

/// Gate over the process-wide registry, or `None` before [`init`] has run.
pub fn gate() -> Option<LifetimeGate<'static, ActiveRegistry>> {
    get().map(LifetimeGate::new)
}
