//! Core component traits and markup buffer

use crate::reflect::ComponentType;
use std::any::{Any, TypeId};
use std::fmt;

/// An HTML fragment produced by rendering a component.
///
/// `Markup` is deliberately minimal: an owned buffer with escaped and raw
/// append helpers. Anything beyond assembling a fragment (layout, streaming,
/// response shaping) belongs to the hosting layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
	/// Creates an empty fragment.
	pub fn new() -> Self {
		Self(String::new())
	}

	/// Creates a fragment from already-trusted HTML.
	pub fn raw(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Creates a fragment from text, escaping HTML metacharacters.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_components::Markup;
	///
	/// let markup = Markup::text("a < b");
	/// assert_eq!(markup.as_str(), "a &lt; b");
	/// ```
	pub fn text(text: &str) -> Self {
		let mut markup = Self::new();
		markup.push_text(text);
		markup
	}

	/// Appends already-trusted HTML.
	pub fn push_raw(&mut self, html: &str) {
		self.0.push_str(html);
	}

	/// Appends text, escaping HTML metacharacters.
	pub fn push_text(&mut self, text: &str) {
		self.0.push_str(&html_escape::encode_text(text));
	}

	/// Appends another fragment.
	pub fn push_markup(&mut self, other: &Markup) {
		self.0.push_str(other.as_str());
	}

	/// Fragment contents as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the fragment, returning the underlying string.
	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Rendering behavior of a component.
///
/// This is the half of the component contract that is always written by
/// hand; the instantiation half ([`Component`]) is generated by the
/// `#[component]` attribute.
pub trait Render {
	/// Renders the component to a markup fragment.
	fn render(&self) -> Markup;
}

/// A UI component that can be instantiated by the component factory.
///
/// Implementations are normally generated by the `#[component]` attribute
/// macro together with [`ComponentReflect`](crate::ComponentReflect); the
/// single required method ties a running instance back to its type
/// descriptor so the factory can inject substituted instances correctly.
///
/// # Example
///
/// ```
/// use grappelli_components::{component, Markup, Render};
///
/// #[component]
/// #[derive(Default)]
/// struct Greeting {
/// 	name: String,
/// }
///
/// impl Render for Greeting {
/// 	fn render(&self) -> Markup {
/// 		let mut markup = Markup::raw("<p>");
/// 		markup.push_text(&self.name);
/// 		markup.push_raw("</p>");
/// 		markup
/// 	}
/// }
/// ```
pub trait Component: Render + Any + Send {
	/// Type descriptor of the concrete component implementation.
	fn component_type(&self) -> ComponentType;
}

impl dyn Component {
	/// Returns `true` when the boxed component is of concrete type `T`.
	pub fn is<T: Component>(&self) -> bool {
		let any: &dyn Any = self;
		any.type_id() == TypeId::of::<T>()
	}

	/// Borrows the component as its concrete type.
	pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
		let any: &dyn Any = self;
		any.downcast_ref::<T>()
	}

	/// Mutably borrows the component as its concrete type.
	pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
		let any: &mut dyn Any = self;
		any.downcast_mut::<T>()
	}

	/// Converts the boxed component into its concrete type.
	///
	/// Returns the original box unchanged when the component is not a `T`.
	pub fn downcast<T: Component>(self: Box<Self>) -> std::result::Result<Box<T>, Box<dyn Component>> {
		if !self.is::<T>() {
			return Err(self);
		}
		let any: Box<dyn Any> = self;
		// The TypeId check above guarantees this succeeds.
		Ok(any
			.downcast::<T>()
			.expect("downcast after matching TypeId"))
	}
}

impl fmt::Debug for dyn Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Component")
			.field("type", &self.component_type().name())
			.finish()
	}
}
