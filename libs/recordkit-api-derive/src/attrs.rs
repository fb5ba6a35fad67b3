use syn::{Attribute, Expr, Field, Ident, LitStr};

/// Struct-level `#[record(...)]` options.
#[derive(Debug, Default)]
pub struct RecordOptions {
    /// Generate `to_builder`, `with` and one `with_<field>` per field.
    pub with: bool,
    /// Generate an all-args `new` constructor.
    pub new: bool,
    /// Generate `set_<field>(&mut self, ..)` on the record itself.
    pub setters: bool,
}

impl RecordOptions {
    pub fn parse(attrs: &[Attribute]) -> Result<Self, syn::Error> {
        let mut opts = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("with") {
                    opts.with = true;
                } else if meta.path.is_ident("new") {
                    opts.new = true;
                } else if meta.path.is_ident("setters") {
                    opts.setters = true;
                } else {
                    return Err(meta.error(
                        "unknown record option (expected `with`, `new` or `setters`)",
                    ));
                }
                Ok(())
            })?;
        }

        Ok(opts)
    }
}

/// Field-level `#[record(...)]` options.
#[derive(Default)]
pub struct FieldOptions {
    /// `build()` fails with `InvalidState` when the slot is unset.
    pub required: bool,
    /// Setters accept `impl Into<T>`.
    pub into: bool,
    /// Getter returns the value instead of a reference.
    pub copy: bool,
    /// Fallback used instead of `Default::default()` for an unset slot.
    pub default: Option<Expr>,
}

impl FieldOptions {
    pub fn parse(field: &Field, ident: &Ident) -> Result<Self, syn::Error> {
        let mut opts = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("required") {
                    opts.required = true;
                } else if meta.path.is_ident("into") {
                    opts.into = true;
                } else if meta.path.is_ident("copy") {
                    opts.copy = true;
                } else if meta.path.is_ident("default") {
                    let value: LitStr = meta.value()?.parse()?;
                    opts.default = Some(value.parse::<Expr>()?);
                } else {
                    return Err(meta.error(
                        "unknown field option (expected `required`, `into`, `copy` or `default = \"...\"`)",
                    ));
                }
                Ok(())
            })?;
        }

        if opts.required && opts.default.is_some() {
            return Err(syn::Error::new_spanned(
                ident,
                "a field cannot be both `required` and have a `default`",
            ));
        }

        Ok(opts)
    }
}
