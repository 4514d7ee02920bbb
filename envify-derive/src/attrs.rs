//! Attribute parsing for `#[envify(...)]` annotations.
//!
//! This module extracts configuration attributes from the derive input
//! (struct level, field level and enum-variant level) during macro
//! expansion.

use syn::{Field, Lit, Variant};

/// Parsed struct-level `#[envify(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Root prefix used by the generated `from_env()`.
    ///
    /// Empty by default, which resolves fields at their bare names.
    pub prefix: String,

    /// Path to a validation function run after all fields resolve.
    pub validate: Option<String>,
}

impl StructAttrs {
    /// Extract and parse struct-level `#[envify(...)]` attributes.
    pub fn from_attrs(attrs: &[syn::Attribute]) -> Self {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("envify") {
                continue;
            }

            let _ = attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(s) = lit {
                        parsed.prefix = s.value();
                    }
                    return Ok(());
                }

                // validate = "function::path"
                if meta.path.is_ident("validate") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(s) = lit {
                        parsed.validate = Some(s.value());
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level envify attribute"))
            });
        }

        parsed
    }
}

/// Parsed `#[envify(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Custom key segment override.
    ///
    /// If `None`, the field name is converted to UPPER_SNAKE_CASE.
    pub name: Option<String>,

    /// Default value strategy:
    /// - `None`: Field is required (no default)
    /// - `Some(None)`: Use `Default::default()`
    /// - `Some(Some(tokens))`: Use explicit token stream as default value
    pub default: Option<Option<proc_macro2::TokenStream>>,

    /// Custom deserializer function path (e.g., `"serde_json::from_str"`).
    ///
    /// When specified, bypasses the built-in coercion and uses this
    /// function instead.
    pub deserializer: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[envify(...)]` attributes from a struct field.
    ///
    /// Silently ignores unrecognized attributes to allow other macros to
    /// process them.
    pub fn from_field(field: &Field) -> Self {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("envify") {
                continue;
            }

            let _ = attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let name: Lit = value.parse()?;
                    if let Lit::Str(s) = name {
                        attrs.name = Some(s.value());
                    }
                    return Ok(());
                }

                // default or default = value
                if meta.path.is_ident("default") {
                    if meta.input.peek(syn::Token![=]) {
                        // default = value - explicit value
                        let value = meta.value()?;
                        let tokens: proc_macro2::TokenStream = value.parse()?;
                        attrs.default = Some(Some(tokens));
                    } else {
                        // default - use Default::default()
                        attrs.default = Some(None);
                    }
                    return Ok(());
                }

                // deserializer = "function::path"
                if meta.path.is_ident("deserializer") {
                    let value = meta.value()?;
                    let func: Lit = value.parse()?;
                    if let Lit::Str(s) = func {
                        attrs.deserializer = Some(s.value());
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported envify attribute"))
            });
        }

        attrs
    }
}

/// Parsed `#[envify(...)]` attributes from an enum variant.
#[derive(Debug, Default)]
pub struct VariantAttrs {
    /// Literal string the variant matches against.
    ///
    /// If `None`, string-valued enums match the variant name verbatim.
    pub value: Option<String>,
}

impl VariantAttrs {
    /// Extract and parse `#[envify(...)]` attributes from an enum variant.
    pub fn from_variant(variant: &Variant) -> Self {
        let mut attrs = Self::default();

        for attr in &variant.attrs {
            if !attr.path().is_ident("envify") {
                continue;
            }

            let _ = attr.parse_nested_meta(|meta| {
                // value = "..."
                if meta.path.is_ident("value") {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(s) = lit {
                        attrs.value = Some(s.value());
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported envify variant attribute"))
            });
        }

        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[envify(name = "CUSTOM_NAME")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert_eq!(attrs.name, Some("CUSTOM_NAME".to_string()));
    }

    #[test]
    fn test_parse_default_string() {
        let field: Field = parse_quote! {
            #[envify(default = "default_value")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(attrs.default.is_some());
    }

    #[test]
    fn test_parse_default_number() {
        let field: Field = parse_quote! {
            #[envify(default = 42)]
            pub field_name: i32
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(attrs.default.is_some());
    }

    #[test]
    fn test_parse_default_no_value() {
        let field: Field = parse_quote! {
            #[envify(default)]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert!(matches!(attrs.default, Some(None)));
    }

    #[test]
    fn test_parse_deserializer() {
        let field: Field = parse_quote! {
            #[envify(deserializer = "serde_json::from_str")]
            pub field_name: Vec<String>
        };

        let attrs = FieldAttrs::from_field(&field);
        assert_eq!(attrs.deserializer, Some("serde_json::from_str".to_string()));
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let field: Field = parse_quote! {
            #[envify(name = "DB_URL", default = "localhost".to_string())]
            pub database_url: String
        };

        let attrs = FieldAttrs::from_field(&field);
        assert_eq!(attrs.name, Some("DB_URL".to_string()));
        assert!(attrs.default.is_some());
    }

    #[test]
    fn test_parse_struct_prefix() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[envify(prefix = "APP")])];
        let parsed = StructAttrs::from_attrs(&attrs);
        assert_eq!(parsed.prefix, "APP");
        assert_eq!(parsed.validate, None);
    }

    #[test]
    fn test_parse_struct_validate() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[envify(validate = "check_config")])];
        let parsed = StructAttrs::from_attrs(&attrs);
        assert_eq!(parsed.validate, Some("check_config".to_string()));
    }

    #[test]
    fn test_parse_variant_value() {
        let variant: Variant = parse_quote! {
            #[envify(value = "prod")]
            Production
        };

        let attrs = VariantAttrs::from_variant(&variant);
        assert_eq!(attrs.value, Some("prod".to_string()));
    }

    #[test]
    fn test_variant_without_attrs() {
        let variant: Variant = parse_quote!(Development);
        let attrs = VariantAttrs::from_variant(&variant);
        assert_eq!(attrs.value, None);
    }
}
