// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;

use tracing::warn;

use crate::config::{LeakCheckConfig, LeakPolicy};
use crate::error::LifetimeError;
use crate::object::ObjectRef;
use crate::registry::LifetimeRegistry;

/// Live user-owned objects found by [`check`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeakReport {
    /// Total number of live objects.
    pub total: usize,
    /// Live count per wrapper type, sorted by type name.
    pub by_type: Vec<(&'static str, usize)>,
    /// First objects by handle order, capped at `max_reported`.
    pub objects: Vec<ObjectRef>,
}

impl LeakReport {
    /// `true` when nothing leaked.
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

/// Snapshots `registry` and reports whatever is still live.
///
/// Run after the teardown that should have released every user-owned
/// wrapper. With the no-op registry the report is always clean.
///
/// # Errors
///
/// [`LifetimeError::Leaked`] when objects are live and the policy is
/// [`LeakPolicy::Fail`].
pub fn check<R: LifetimeRegistry + ?Sized>(
    registry: &R,
    config: &LeakCheckConfig,
) -> Result<LeakReport, LifetimeError> {
    let mut live = registry.snapshot();
    let total = live.len();

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for obj in &live {
        *counts.entry(obj.type_name()).or_default() += 1;
    }
    live.truncate(config.max_reported);

    let report = LeakReport {
        total,
        by_type: counts.into_iter().collect(),
        objects: live,
    };
    if report.is_clean() || config.policy == LeakPolicy::Ignore {
        return Ok(report);
    }

    for (type_name, count) in &report.by_type {
        warn!(type_name, count, "leaked user-owned objects");
    }
    for obj in &report.objects {
        warn!(object = %obj, "still live");
    }
    if config.policy == LeakPolicy::Fail {
        return Err(LifetimeError::Leaked { count: total });
    }
    Ok(report)
}
