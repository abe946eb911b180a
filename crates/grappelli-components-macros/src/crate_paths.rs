//! Helper functions for dynamic crate path resolution using proc_macro_crate
//!
//! Generated code must reference `grappelli-components` whether the caller
//! depends on it directly or through the `grappelli` facade crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path to the grappelli_components crate dynamically.
///
/// # Strategy
///
/// 1. `grappelli-components` is a dependency (or is the crate whose tests
///    are being compiled): reference it by its own name
/// 2. Only the `grappelli` facade (package name `grappelli-web`) is a
///    dependency: go through the facade's `components` re-export
/// 3. Fallback: assume `grappelli_components` is available
pub(crate) fn get_components_crate() -> TokenStream {
	use proc_macro_crate::{FoundCrate, crate_name};

	match crate_name("grappelli-components") {
		// `Itself` is reported for the crate's own doctests and integration
		// tests, which link the library under its external name.
		Ok(FoundCrate::Itself) => return quote!(::grappelli_components),
		Ok(FoundCrate::Name(name)) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			return quote!(::#ident);
		}
		Err(_) => {}
	}

	for facade in ["grappelli", "grappelli-web"] {
		if let Ok(found) = crate_name(facade) {
			let name = match found {
				FoundCrate::Itself => "grappelli".to_string(),
				FoundCrate::Name(name) => name,
			};
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			return quote!(::#ident::components);
		}
	}

	quote!(::grappelli_components)
}
