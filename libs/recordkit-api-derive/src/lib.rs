use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Ident, Type, WherePredicate};

mod attrs;
mod util;

use attrs::{FieldOptions, RecordOptions};
use util::{bounded_where_clause, unraw};

/// Derive macro for immutable records with a generated builder.
///
/// For a struct `Person` this generates a `PersonBuilder` and:
///
/// - `Person::builder()` — fresh builder, every field unset.
/// - `Person::builder_from(&Person)` / `PersonBuilder::from(..)` — builder
///   seeded with every field of an existing record.
/// - `PersonBuilder::build()` — materializes the record. Unset fields fall
///   back to `Default::default()` (or `#[record(default = "...")]`); an unset
///   `#[record(required)]` field yields `RecordError::InvalidState`.
/// - A getter per field.
///
/// Struct options: `#[record(with)]` adds `to_builder`, `with(|b| ..)` and
/// `with_<field>`; `#[record(new)]` adds an all-args constructor;
/// `#[record(setters)]` adds `set_<field>` on the record itself.
///
/// Field options: `required`, `into`, `copy`, `default = "expr"`.
///
/// Every field type must be `Clone`, and every field that is neither
/// `required` nor given a `default` must be `Default`.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, RecordBuilder)]
/// #[record(with, new)]
/// pub struct Person {
///     #[record(copy)]
///     id: u32,
///
///     #[record(into)]
///     name: String,
/// }
///
/// let p1 = Person::new(1, "Angelo");
/// let p2 = p1.with_name("Zero");
/// let p3 = p2.with(|b| {
///     b.set_id(3);
/// });
/// ```
#[proc_macro_derive(RecordBuilder, attributes(record))]
pub fn derive_record_builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Field names that would shadow a generated method.
const RESERVED_FIELD_NAMES: &[&str] = &[
    "build",
    "builder",
    "builder_from",
    "materialize_over",
    "new",
    "to_builder",
    "with",
];

/// First field whose name equals a method generated for another field,
/// e.g. `with_name` next to `name`.
fn derived_name_collision<'a>(fields: &[RecordField<'a>], opts: &RecordOptions) -> Option<&'a Ident> {
    let names: Vec<String> = fields.iter().map(|f| unraw(f.ident)).collect();
    let prefixes: &[&str] = if opts.with {
        &["set_", "get_", "with_"]
    } else {
        &["set_", "get_"]
    };

    fields.iter().zip(&names).find_map(|(field, name)| {
        let collides = prefixes.iter().any(|prefix| {
            name.strip_prefix(prefix)
                .is_some_and(|base| names.iter().any(|other| other == base))
        });
        collides.then_some(field.ident)
    })
}

struct RecordField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    opts: FieldOptions,
}

impl RecordField<'_> {
    /// Parameter type accepted by setters for this field.
    fn param_ty(&self) -> TokenStream2 {
        let ty = self.ty;
        if self.opts.into {
            quote! { impl ::core::convert::Into<#ty> }
        } else {
            quote! { #ty }
        }
    }

    /// Expression turning the setter argument `arg` into the stored value.
    fn convert(&self, arg: &Ident) -> TokenStream2 {
        if self.opts.into {
            quote! { ::core::convert::Into::into(#arg) }
        } else {
            quote! { #arg }
        }
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;
    let vis = &input.vis;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "RecordBuilder only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "RecordBuilder only supports structs",
            ))
        }
    };

    let opts = RecordOptions::parse(&input.attrs)?;

    let mut record_fields = Vec::with_capacity(fields.len());
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;

        let field_name = unraw(ident);
        if RESERVED_FIELD_NAMES.contains(&field_name.as_str()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("field name `{field_name}` collides with a generated method"),
            ));
        }

        let opts = FieldOptions::parse(field, ident)?;
        record_fields.push(RecordField { ident, ty: &field.ty, opts });
    }

    if let Some(ident) = derived_name_collision(&record_fields, &opts) {
        return Err(syn::Error::new_spanned(
            ident,
            format!("field name `{}` collides with a generated method", unraw(ident)),
        ));
    }

    let builder = format_ident!("{}Builder", name);
    let record_name = name.to_string();
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let idents: Vec<&Ident> = record_fields.iter().map(|f| f.ident).collect();
    let tys: Vec<&Type> = record_fields.iter().map(|f| f.ty).collect();
    let value = format_ident!("value");

    // Seeding from a borrowed record clones every field; plain `build()`
    // falls back to `Default` for optional fields without an explicit default.
    let clone_bounds: Vec<WherePredicate> = tys
        .iter()
        .map(|ty| parse_quote! { #ty: ::core::clone::Clone })
        .collect();
    let default_bounds: Vec<WherePredicate> = record_fields
        .iter()
        .filter(|f| !f.opts.required && f.opts.default.is_none())
        .map(|f| {
            let ty = f.ty;
            parse_quote! { #ty: ::core::default::Default }
        })
        .collect();
    let trait_bounds: Vec<WherePredicate> = clone_bounds
        .iter()
        .chain(default_bounds.iter())
        .cloned()
        .collect();

    let clone_where = bounded_where_clause(generics, &clone_bounds);
    let build_where = bounded_where_clause(generics, &default_bounds);
    let trait_where = bounded_where_clause(generics, &trait_bounds);

    // -- builder ----------------------------------------------------------

    let builder_methods = record_fields.iter().map(|f| {
        let ident = f.ident;
        let ty = f.ty;
        let field_name = unraw(ident);
        let set_ident = format_ident!("set_{}", field_name);
        let get_ident = format_ident!("get_{}", field_name);
        let param_ty = f.param_ty();
        let convert = f.convert(&value);
        let setter_doc = format!("Set `{field_name}`, overriding any staged value.");

        quote! {
            #[doc = #setter_doc]
            #vis fn #ident(mut self, value: #param_ty) -> Self {
                self.#ident = ::core::option::Option::Some(#convert);
                self
            }

            #[doc = #setter_doc]
            #vis fn #set_ident(&mut self, value: #param_ty) -> &mut Self {
                self.#ident = ::core::option::Option::Some(#convert);
                self
            }

            /// Currently staged value, if any.
            #vis fn #get_ident(&self) -> ::core::option::Option<&#ty> {
                self.#ident.as_ref()
            }
        }
    });

    let build_inits = record_fields.iter().map(|f| {
        let ident = f.ident;
        let field_name = unraw(ident);
        if f.opts.required {
            quote! {
                #ident: ::recordkit_api::builder::required(#record_name, #field_name, self.#ident)?
            }
        } else if let Some(default) = &f.opts.default {
            quote! { #ident: self.#ident.unwrap_or_else(|| #default) }
        } else {
            quote! { #ident: self.#ident.unwrap_or_default() }
        }
    });

    let builder_doc = format!("Staging builder for [`{record_name}`].");

    let builder_tokens = quote! {
        #[doc = #builder_doc]
        #[must_use]
        #vis struct #builder #generics #where_clause {
            #( #idents: ::core::option::Option<#tys>, )*
        }

        impl #impl_generics ::core::default::Default for #builder #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #( #idents: ::core::option::Option::None, )*
                }
            }
        }

        #[allow(dead_code)]
        impl #impl_generics #builder #ty_generics #where_clause {
            /// Fresh builder with every field unset.
            #vis fn new() -> Self {
                ::core::default::Default::default()
            }

            #(#builder_methods)*
        }

        #[allow(dead_code)]
        impl #impl_generics #builder #ty_generics #build_where {
            /// Materialize the staged values into a new record.
            #vis fn build(self) -> ::core::result::Result<#name #ty_generics, ::recordkit_api::RecordError> {
                ::core::result::Result::Ok(::recordkit_api::builder::finish(
                    #record_name,
                    #name {
                        #(#build_inits,)*
                    },
                ))
            }
        }

        impl #impl_generics ::core::convert::From<#name #ty_generics> for #builder #ty_generics #where_clause {
            fn from(existing: #name #ty_generics) -> Self {
                Self {
                    #( #idents: ::core::option::Option::Some(existing.#idents), )*
                }
            }
        }

        impl #impl_generics ::core::convert::From<&#name #ty_generics> for #builder #ty_generics #clone_where {
            fn from(existing: &#name #ty_generics) -> Self {
                Self {
                    #( #idents: ::core::option::Option::Some(::core::clone::Clone::clone(&existing.#idents)), )*
                }
            }
        }
    };

    // -- record -----------------------------------------------------------

    let getters = record_fields.iter().map(|f| {
        let ident = f.ident;
        let ty = f.ty;
        if f.opts.copy {
            quote! {
                #vis fn #ident(&self) -> #ty {
                    self.#ident
                }
            }
        } else {
            quote! {
                #vis fn #ident(&self) -> &#ty {
                    &self.#ident
                }
            }
        }
    });

    let new_fn = if opts.new {
        let params = record_fields.iter().map(|f| {
            let ident = f.ident;
            let param_ty = f.param_ty();
            quote! { #ident: #param_ty }
        });
        let inits = record_fields.iter().map(|f| {
            let ident = f.ident;
            let convert = f.convert(ident);
            quote! { #ident: #convert }
        });
        quote! {
            /// All-args constructor.
            #[allow(clippy::too_many_arguments)]
            #vis fn new(#(#params),*) -> Self {
                Self {
                    #(#inits,)*
                }
            }
        }
    } else {
        quote! {}
    };

    let record_setters = record_fields
        .iter()
        .filter(|_| opts.setters)
        .map(|f| {
            let ident = f.ident;
            let set_ident = format_ident!("set_{}", unraw(ident));
            let param_ty = f.param_ty();
            let convert = f.convert(&value);
            quote! {
                #vis fn #set_ident(&mut self, value: #param_ty) {
                    self.#ident = #convert;
                }
            }
        });

    let with_tokens = if opts.with {
        let with_methods = record_fields.iter().map(|f| {
            let ident = f.ident;
            let field_name = unraw(ident);
            let with_ident = format_ident!("with_{}", field_name);
            let param_ty = f.param_ty();
            let doc = format!("Copy of this record with `{field_name}` replaced.");
            quote! {
                #[doc = #doc]
                #[must_use]
                #vis fn #with_ident(&self, value: #param_ty) -> Self {
                    self.to_builder().#ident(value).materialize_over(self)
                }
            }
        });

        quote! {
            #[allow(dead_code)]
            impl #impl_generics #name #ty_generics #clone_where {
                /// Builder seeded from this record; finish it with `build()`.
                #vis fn to_builder(&self) -> #builder #ty_generics {
                    Self::builder_from(self)
                }

                #(#with_methods)*

                /// Copy of this record after `stage` has adjusted a staging
                /// builder seeded with the current values.
                #[must_use]
                #vis fn with(&self, stage: impl ::core::ops::FnOnce(&mut #builder #ty_generics)) -> Self {
                    let mut staging = self.to_builder();
                    stage(&mut staging);
                    staging.materialize_over(self)
                }
            }

            #[allow(dead_code)]
            impl #impl_generics #builder #ty_generics #clone_where {
                // Unset slots fall back to `base`, so this never fails.
                fn materialize_over(self, base: &#name #ty_generics) -> #name #ty_generics {
                    ::recordkit_api::builder::finish(
                        #record_name,
                        #name {
                            #( #idents: self.#idents.unwrap_or_else(|| ::core::clone::Clone::clone(&base.#idents)), )*
                        },
                    )
                }
            }
        }
    } else {
        quote! {}
    };

    let record_tokens = quote! {
        #[allow(dead_code)]
        impl #impl_generics #name #ty_generics #where_clause {
            /// Fresh builder with every field unset.
            #vis fn builder() -> #builder #ty_generics {
                ::core::default::Default::default()
            }

            #(#getters)*

            #new_fn

            #(#record_setters)*
        }

        #[allow(dead_code)]
        impl #impl_generics #name #ty_generics #clone_where {
            /// Builder seeded with every field of `existing`.
            #vis fn builder_from(existing: &Self) -> #builder #ty_generics {
                ::core::convert::From::from(existing)
            }
        }

        #with_tokens

        impl #impl_generics ::recordkit_api::Record for #name #ty_generics #trait_where {
            type Builder = #builder #ty_generics;

            const NAME: &'static str = #record_name;

            fn builder() -> Self::Builder {
                ::core::default::Default::default()
            }

            fn to_builder(&self) -> Self::Builder {
                ::core::convert::From::from(self)
            }
        }

        impl #impl_generics ::recordkit_api::RecordBuilder for #builder #ty_generics #trait_where {
            type Record = #name #ty_generics;

            fn build(self) -> ::core::result::Result<Self::Record, ::recordkit_api::RecordError> {
                Self::build(self)
            }
        }
    };

    Ok(quote! {
        #builder_tokens
        #record_tokens
    })
}
