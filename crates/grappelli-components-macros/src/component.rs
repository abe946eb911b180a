//! Implementation of the `#[component]` attribute macro
//!
//! Collects `#[inject]` fields into dependency slot registrations and
//! generates `Component` + `ComponentReflect` implementations for the
//! annotated struct.

use crate::crate_paths::get_components_crate;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{
	Attribute, Data, DeriveInput, Expr, Fields, GenericArgument, PathArguments, Result, Token,
	Type,
};

/// Arguments of the attribute itself: nothing, or `render_mode = <mode>`.
pub(crate) struct ComponentArgs {
	render_mode: Option<Expr>,
}

impl Parse for ComponentArgs {
	fn parse(input: ParseStream) -> Result<Self> {
		if input.is_empty() {
			return Ok(Self { render_mode: None });
		}

		let key: syn::Ident = input.parse()?;
		if key != "render_mode" {
			return Err(syn::Error::new_spanned(
				key,
				"unsupported argument; expected `render_mode = <mode>`",
			));
		}
		input.parse::<Token![=]>()?;
		let value: Expr = input.parse()?;
		if !input.is_empty() {
			return Err(input.error("unexpected tokens after `render_mode = <mode>`"));
		}

		Ok(Self {
			render_mode: Some(value),
		})
	}
}

/// One `#[inject]` field.
struct SlotInfo {
	name: syn::Ident,
	service: Type,
}

pub(crate) fn component_impl(args: ComponentArgs, mut input: DeriveInput) -> Result<TokenStream> {
	let struct_name = input.ident.clone();
	let components_crate = get_components_crate();

	let fields = match &mut input.data {
		Data::Struct(data_struct) => match &mut data_struct.fields {
			Fields::Named(fields) => Some(&mut fields.named),
			Fields::Unit => None,
			Fields::Unnamed(_) => {
				return Err(syn::Error::new_spanned(
					&struct_name,
					"#[component] does not support tuple structs",
				));
			}
		},
		_ => {
			return Err(syn::Error::new_spanned(
				&struct_name,
				"#[component] can only be applied to structs",
			));
		}
	};

	// Collect #[inject] fields in declaration order and strip the marker
	// attribute from the re-emitted struct.
	let mut slots = Vec::new();
	if let Some(fields) = fields {
		for field in fields.iter_mut() {
			if !field.attrs.iter().any(is_inject_attr) {
				continue;
			}
			field.attrs.retain(|attr| !is_inject_attr(attr));

			let name = field
				.ident
				.clone()
				.ok_or_else(|| syn::Error::new_spanned(&*field, "field must have a name"))?;
			let service = injected_service_type(&field.ty).ok_or_else(|| {
				syn::Error::new_spanned(
					&field.ty,
					"fields marked #[inject] must have type `Injected<T>`",
				)
			})?;

			slots.push(SlotInfo { name, service });
		}
	}

	let slot_entries: Vec<TokenStream> = slots
		.iter()
		.map(|slot| {
			let name_str = slot.name.to_string();
			let field = &slot.name;
			let service = &slot.service;
			quote! {
				#components_crate::DependencySlot::of::<Self, #service>(
					#name_str,
					|component, value| component.#field = value,
				)
			}
		})
		.collect();

	let render_mode_impl = match &args.render_mode {
		Some(mode) => quote! {
			fn declared_render_mode()
				-> ::core::option::Option<&'static dyn #components_crate::RenderMode>
			{
				::core::option::Option::Some(&#mode)
			}
		},
		None => TokenStream::new(),
	};

	let slots_impl = if slot_entries.is_empty() {
		TokenStream::new()
	} else {
		quote! {
			fn dependency_slots() -> ::std::vec::Vec<#components_crate::DependencySlot> {
				::std::vec![
					#(#slot_entries),*
				]
			}
		}
	};

	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let reflect_impl = quote! {
		impl #impl_generics #components_crate::ComponentReflect
			for #struct_name #ty_generics #where_clause
		{
			#render_mode_impl
			#slots_impl
		}
	};

	let component_trait_impl = quote! {
		impl #impl_generics #components_crate::Component
			for #struct_name #ty_generics #where_clause
		{
			fn component_type(&self) -> #components_crate::ComponentType {
				#components_crate::ComponentType::of::<Self>()
			}
		}
	};

	Ok(quote! {
		#input

		#reflect_impl

		#component_trait_impl
	})
}

fn is_inject_attr(attr: &Attribute) -> bool {
	attr.path().is_ident("inject")
}

/// Extracts `T` from a field type of the shape `Injected<T>`.
fn injected_service_type(ty: &Type) -> Option<Type> {
	let Type::Path(type_path) = ty else {
		return None;
	};
	let segment = type_path.path.segments.last()?;
	if segment.ident != "Injected" {
		return None;
	}
	let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
		return None;
	};
	if arguments.args.len() != 1 {
		return None;
	}
	match arguments.args.first()? {
		GenericArgument::Type(service) => Some(service.clone()),
		_ => None,
	}
}
