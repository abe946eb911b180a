//! Render modes and the render mode resolver seam

use crate::activator::ComponentActivator;
use crate::component::Component;
use crate::reflect::ComponentType;
use std::any::Any;
use std::fmt;

/// Tag describing where a component should execute.
///
/// A render mode can be declared on the component type (through the
/// `#[component]` attribute) or supplied by the caller at the use site; the
/// two sources are independent and either may be absent. The tag itself is
/// opaque to the factory; only the [`RenderModeResolver`] interprets it.
pub trait RenderMode: Any + Send + Sync + fmt::Debug {
	/// Stable name used in diagnostics.
	fn name(&self) -> &'static str;
}

/// Interactive rendering on the server over a persistent connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveServer;

impl RenderMode for InteractiveServer {
	fn name(&self) -> &'static str {
		"interactive-server"
	}
}

/// Interactive rendering in the browser via WebAssembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveWasm;

impl RenderMode for InteractiveWasm {
	fn name(&self) -> &'static str {
		"interactive-wasm"
	}
}

/// Let the host pick between server and WebAssembly rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveAuto;

impl RenderMode for InteractiveAuto {
	fn name(&self) -> &'static str {
		"interactive-auto"
	}
}

/// Resolves a component instance when a render mode is in play.
///
/// The resolver is only consulted when at least one of the type-declared and
/// call-site render modes is present; the mode-less hot path activates the
/// component directly. A resolver is free to return an instance of a
/// *different* concrete type than the one requested (a platform-specific
/// wrapper, a placeholder for client-rendered content, ...); the factory
/// detects the substitution and injects against the actual type.
pub trait RenderModeResolver: Send + Sync {
	/// Produces the instance to use for `component_type` under the given
	/// render modes.
	///
	/// Returning `None` is reported to the factory caller as a
	/// configuration error.
	fn resolve_component(
		&self,
		component_type: ComponentType,
		activator: &dyn ComponentActivator,
		type_render_mode: Option<&'static dyn RenderMode>,
		call_site_render_mode: Option<&dyn RenderMode>,
	) -> Option<Box<dyn Component>>;
}

/// Resolver for single-process server hosts.
///
/// Treats every render mode as server-interactive: the requested type is
/// activated as-is and the mode tags are ignored. Hosts that support client
/// or auto modes install their own resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerRenderModeResolver;

impl RenderModeResolver for ServerRenderModeResolver {
	fn resolve_component(
		&self,
		component_type: ComponentType,
		activator: &dyn ComponentActivator,
		_type_render_mode: Option<&'static dyn RenderMode>,
		_call_site_render_mode: Option<&dyn RenderMode>,
	) -> Option<Box<dyn Component>> {
		activator.create(component_type)
	}
}
