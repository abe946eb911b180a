//! Integration tests for the `#[component]` attribute macro

use grappelli_components::{
	Component, ComponentFactory, ComponentReflect, ComponentType, Injected, InteractiveServer,
	InteractiveWasm, Markup, Render, component,
};
use grappelli_di::{ServiceLocator, ServiceLocatorExt, ServiceRegistry, ServiceScope};
use std::any::TypeId;
use std::sync::Arc;

struct First;

struct Second;

#[component]
#[derive(Default)]
struct Ordered {
	#[inject]
	first: Injected<First>,
	title: String,
	#[inject]
	second: Injected<Second>,
}

impl Render for Ordered {
	fn render(&self) -> Markup {
		Markup::text(&self.title)
	}
}

#[component(render_mode = InteractiveWasm)]
#[derive(Default)]
struct Island;

impl Render for Island {
	fn render(&self) -> Markup {
		Markup::raw("<island/>")
	}
}

#[component]
#[derive(Default)]
struct Bare;

impl Render for Bare {
	fn render(&self) -> Markup {
		Markup::new()
	}
}

#[test]
fn slots_follow_declaration_order_and_skip_unmarked_fields() {
	let slots = Ordered::dependency_slots();

	assert_eq!(slots.len(), 2);
	assert_eq!(slots[0].name(), "first");
	assert_eq!(slots[0].service_id(), TypeId::of::<First>());
	assert_eq!(slots[1].name(), "second");
	assert_eq!(slots[1].service_id(), TypeId::of::<Second>());
}

#[test]
fn render_mode_argument_declares_the_type_mode() {
	let mode = Island::declared_render_mode().unwrap();
	assert_eq!(mode.name(), "interactive-wasm");
}

#[test]
fn without_the_argument_no_mode_is_declared() {
	assert!(Ordered::declared_render_mode().is_none());
	assert!(Bare::declared_render_mode().is_none());
}

#[test]
fn unit_structs_are_valid_components() {
	assert!(Bare::dependency_slots().is_empty());

	let services = ServiceRegistry::new();
	let factory = ComponentFactory::default();
	let instance = factory
		.instantiate(&services, ComponentType::of::<Bare>(), None)
		.unwrap();
	assert!(instance.is::<Bare>());
}

#[test]
fn generated_component_type_matches_the_descriptor() {
	let instance = Ordered {
		title: "t".to_string(),
		..Ordered::default()
	};
	assert_eq!(instance.component_type(), ComponentType::of::<Ordered>());
	assert!(instance.component_type().name().contains("Ordered"));
}

#[test]
fn injection_resolves_through_a_request_scope() {
	let app = Arc::new(ServiceRegistry::new());
	app.register(First);
	app.register(Second);

	let scope = ServiceScope::new(Arc::clone(&app) as Arc<dyn ServiceLocator>);
	let request_first = Arc::new(First);
	scope.register_arc(Arc::clone(&request_first));

	let factory = ComponentFactory::default();
	let instance = factory
		.instantiate(&scope, ComponentType::of::<Ordered>(), None)
		.unwrap();

	let ordered = instance.downcast_ref::<Ordered>().unwrap();
	// The request-scoped First shadows the application-wide one; Second
	// falls through to the application registry.
	assert!(Arc::ptr_eq(&request_first, ordered.first.as_arc().unwrap()));
	assert!(Arc::ptr_eq(
		&app.get::<Second>().unwrap(),
		ordered.second.as_arc().unwrap()
	));
}

#[test]
fn unbound_slots_on_hand_built_instances_report_their_state() {
	let ordered = Ordered::default();
	assert!(!ordered.first.is_bound());
	assert!(!ordered.second.is_bound());
}

// InteractiveServer is exercised here so the declared-mode path of the
// default (pass-through) resolver is covered end to end.
#[component(render_mode = InteractiveServer)]
#[derive(Default)]
struct ServerPanel {
	#[inject]
	first: Injected<First>,
}

impl Render for ServerPanel {
	fn render(&self) -> Markup {
		Markup::raw("<panel/>")
	}
}

#[test]
fn declared_mode_with_default_resolver_still_activates_and_injects() {
	let services = ServiceRegistry::new();
	services.register(First);

	let factory = ComponentFactory::default();
	let instance = factory
		.instantiate(&services, ComponentType::of::<ServerPanel>(), None)
		.unwrap();

	let panel = instance.downcast_ref::<ServerPanel>().unwrap();
	assert!(panel.first.is_bound());
}
