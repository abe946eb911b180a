//! Procedural macros for grappelli-components

mod component;
mod crate_paths;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Marks a struct as a component and registers its capabilities.
///
/// Fields marked `#[inject]` become dependency slots, in declaration order;
/// they must have type `Injected<T>` and are bound by the component factory
/// during instantiation. Unmarked fields are left alone. An optional
/// `render_mode = <mode>` argument declares the type-level render mode.
///
/// The macro generates the `Component` and `ComponentReflect`
/// implementations; the struct still needs `Default` (for the default
/// activator) and a hand-written `Render` implementation.
///
/// # Example
///
/// ```ignore
/// #[component(render_mode = InteractiveServer)]
/// #[derive(Default)]
/// struct Sidebar {
/// 	#[inject]
/// 	navigation: Injected<NavigationService>,
/// 	collapsed: bool,
/// }
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as component::ComponentArgs);
	let input = parse_macro_input!(input as DeriveInput);
	component::component_impl(args, input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}
