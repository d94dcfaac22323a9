// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use tether_lifetime::config::{LeakCheckConfig, LeakPolicy};
use tether_lifetime::leak;
use tether_lifetime::{
    LifetimeError, LifetimeRegistry, NoopRegistry, ObjectRef, RawHandle, TrackingRegistry,
};

fn obj(addr: usize, type_name: &'static str) -> ObjectRef {
    ObjectRef::new(RawHandle::from_addr(addr), type_name)
}

#[test]
fn clean_teardown_yields_clean_report() {
    let registry = TrackingRegistry::new();
    registry.register(obj(0x10, "RigidBody")).unwrap();
    registry.unregister(obj(0x10, "RigidBody")).unwrap();
    let cfg = LeakCheckConfig {
        policy: LeakPolicy::Fail,
        max_reported: 8,
    };
    let report = leak::check(&registry, &cfg).unwrap();
    assert!(report.is_clean());
}

#[test]
fn leaks_are_grouped_by_type_and_capped() {
    let registry = TrackingRegistry::new();
    registry.register(obj(0x30, "RigidBody")).unwrap();
    registry.register(obj(0x10, "SphereShape")).unwrap();
    registry.register(obj(0x20, "RigidBody")).unwrap();
    let cfg = LeakCheckConfig {
        policy: LeakPolicy::Warn,
        max_reported: 2,
    };
    let report = leak::check(&registry, &cfg).unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.by_type, vec![("RigidBody", 2), ("SphereShape", 1)]);
    assert_eq!(
        report.objects,
        vec![obj(0x10, "SphereShape"), obj(0x20, "RigidBody")]
    );
    // The check only reads.
    assert_eq!(registry.len(), 3);
}

#[test]
fn fail_policy_turns_leaks_into_errors() {
    let registry = TrackingRegistry::new();
    registry.register(obj(0x10, "RigidBody")).unwrap();
    let cfg = LeakCheckConfig::from_json_slice(br#"{"policy":"fail"}"#).unwrap();
    assert_eq!(
        leak::check(&registry, &cfg),
        Err(LifetimeError::Leaked { count: 1 })
    );
}

#[test]
fn ignore_policy_still_reports() {
    let registry = TrackingRegistry::new();
    registry.register(obj(0x10, "RigidBody")).unwrap();
    let cfg = LeakCheckConfig {
        policy: LeakPolicy::Ignore,
        max_reported: 0,
    };
    let report = leak::check(&registry, &cfg).unwrap();
    assert_eq!(report.total, 1);
    assert!(report.objects.is_empty());
}

#[test]
fn noop_registry_never_leaks() {
    let registry = NoopRegistry::new();
    registry.register(obj(0x10, "RigidBody")).unwrap();
    let cfg = LeakCheckConfig {
        policy: LeakPolicy::Fail,
        ..LeakCheckConfig::default()
    };
    assert!(leak::check(&registry, &cfg).unwrap().is_clean());
}
