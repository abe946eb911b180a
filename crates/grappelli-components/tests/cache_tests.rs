//! Integration tests for the process-wide type metadata cache

use grappelli_components::{
	Component, ComponentFactory, ComponentReflect, ComponentType, DependencySlot, Injected,
	Markup, Render, TypeMetadataCache,
};
use grappelli_di::ServiceRegistry;
use serial_test::serial;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Telemetry;

static SCANS: AtomicUsize = AtomicUsize::new(0);

/// Hand-written registration so the scan itself is observable.
#[derive(Default)]
struct Observed {
	telemetry: Injected<Telemetry>,
}

impl Render for Observed {
	fn render(&self) -> Markup {
		Markup::new()
	}
}

impl ComponentReflect for Observed {
	fn dependency_slots() -> Vec<DependencySlot> {
		SCANS.fetch_add(1, Ordering::SeqCst);
		vec![DependencySlot::of::<Self, Telemetry>(
			"telemetry",
			|component, value| {
				component.telemetry = value;
			},
		)]
	}
}

impl Component for Observed {
	fn component_type(&self) -> ComponentType {
		ComponentType::of::<Self>()
	}
}

fn services() -> ServiceRegistry {
	let services = ServiceRegistry::new();
	services.register(Telemetry);
	services
}

#[test]
#[serial]
fn repeated_instantiation_scans_once() {
	TypeMetadataCache::global().clear();
	let services = services();
	let factory = ComponentFactory::default();
	let before = SCANS.load(Ordering::SeqCst);

	for _ in 0..3 {
		factory
			.instantiate(&services, ComponentType::of::<Observed>(), None)
			.unwrap();
	}

	assert_eq!(SCANS.load(Ordering::SeqCst), before + 1);
}

#[test]
#[serial]
fn clear_retriggers_the_scan_for_a_seen_type() {
	TypeMetadataCache::global().clear();
	let services = services();
	let factory = ComponentFactory::default();

	factory
		.instantiate(&services, ComponentType::of::<Observed>(), None)
		.unwrap();
	let before = SCANS.load(Ordering::SeqCst);

	TypeMetadataCache::global().clear();
	assert!(TypeMetadataCache::global().is_empty());

	factory
		.instantiate(&services, ComponentType::of::<Observed>(), None)
		.unwrap();
	assert_eq!(SCANS.load(Ordering::SeqCst), before + 1);
}

#[test]
#[serial]
fn default_factories_share_the_global_cache() {
	TypeMetadataCache::global().clear();
	let services = services();

	let first_factory = ComponentFactory::default();
	first_factory
		.instantiate(&services, ComponentType::of::<Observed>(), None)
		.unwrap();
	let after_first = SCANS.load(Ordering::SeqCst);

	// A second factory reuses the entry the first one filled.
	let second_factory = ComponentFactory::default();
	second_factory
		.instantiate(&services, ComponentType::of::<Observed>(), None)
		.unwrap();
	assert_eq!(SCANS.load(Ordering::SeqCst), after_first);

	assert_eq!(first_factory.cache().len(), second_factory.cache().len());
}

#[test]
#[serial]
fn failed_injection_caches_no_poisoned_state() {
	TypeMetadataCache::global().clear();
	let empty_services = ServiceRegistry::new();
	let factory = ComponentFactory::default();

	// First attempt fails: Telemetry is not registered.
	factory
		.instantiate(&empty_services, ComponentType::of::<Observed>(), None)
		.unwrap_err();

	// Fixing the registration makes the next call succeed without clearing.
	let services = services();
	let instance = factory
		.instantiate(&services, ComponentType::of::<Observed>(), None)
		.unwrap();
	let observed = instance.downcast_ref::<Observed>().unwrap();
	assert!(observed.telemetry.is_bound());
}
