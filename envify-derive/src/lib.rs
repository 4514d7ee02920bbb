//! Derive macro implementation for envify

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, DataStruct, DeriveInput, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs, VariantAttrs};

/// Extract inner type from Option<T>
fn extract_option_inner_type(ty: &Type) -> &Type {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return inner;
                }
            }
        }
    }
    ty
}

/// Check whether a declared type is Option<T>
fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident == "Option")
            .unwrap_or(false)
    } else {
        false
    }
}

/// `Envify` derive macro
///
/// On a struct with named fields, implements `envify::FromEnv` so the
/// struct resolves recursively from prefixed environment variables, plus an
/// inherent `from_env()` convenience method over the process environment.
///
/// On an enum with unit variants, implements `envify::FromEnvValue` (and
/// `FromEnv`) so the enum coerces from a single variable: by integer
/// discriminant when every variant declares one, otherwise by matching the
/// variant name (or `#[envify(value = "...")]`) case-sensitively.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[envify(prefix = "APP")]`: Root prefix used by the generated `from_env()`
/// - `#[envify(validate = "func")]`: Validation hook run after all fields resolve
///
/// **Field-level**:
/// - `#[envify(name = "SEGMENT")]`: Custom key segment (used verbatim)
/// - `#[envify(default)]`: Use `Default::default()` if the variable is not set
/// - `#[envify(default = value)]`: Use explicit default value if the variable is not set
/// - `#[envify(deserializer = "func")]`: Use custom deserializer function
///
/// **Enum-variant-level**:
/// - `#[envify(value = "...")]`: Literal the variant matches (string-valued enums)
///
/// # Example
///
/// See the `envify` crate documentation for usage examples.
#[proc_macro_derive(Envify, attributes(envify))]
pub fn derive_envify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match &input.data {
        Data::Struct(data) => expand_struct(&input, data),
        Data::Enum(data) => expand_enum(&input, data),
        Data::Union(_) => syn::Error::new_spanned(&input, "Envify does not support unions")
            .to_compile_error()
            .into(),
    }
}

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> TokenStream {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs);

    let fields = match &data.fields {
        Fields::Named(fields) => &fields.named,
        _ => {
            return syn::Error::new_spanned(
                input,
                "Envify only supports structs with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    // Generate resolution code for each field
    let field_initializers = fields.iter().map(|field| {
        let field_name = field.ident.as_ref().unwrap();
        let field_type = &field.ty;

        // Parse attributes
        let attrs = FieldAttrs::from_field(field);

        let is_option = is_option_type(field_type);

        // Determine the key segment appended to the prefix
        let segment = attrs.name.unwrap_or_else(|| {
            // Convert field name to UPPER_SNAKE_CASE
            field_name.to_string().to_uppercase()
        });

        // Check for invalid combinations
        if is_option && attrs.default.is_some() {
            return syn::Error::new_spanned(
                field,
                "Option<T> fields cannot have default attribute (they default to None automatically)",
            )
            .to_compile_error();
        }

        // Generate resolution expression
        let resolve_expr = if let Some(func_path) = attrs.deserializer {
            // Use custom deserializer function
            let func: proc_macro2::TokenStream = func_path.parse().unwrap();
            if attrs.default.is_some() {
                return syn::Error::new_spanned(
                    field,
                    "default value is not supported with deserializer attribute",
                )
                .to_compile_error();
            }

            if is_option {
                // Option<T> with deserializer
                let inner_type = extract_option_inner_type(field_type);

                quote! {
                    match __lookup.get(&__key) {
                        ::std::option::Option::Some(__raw) => ::std::option::Option::Some(
                            #func(&__raw).map_err(|e| ::envify::EnvifyError::parse_error::<#inner_type>(&__key, &__raw, e))?
                        ),
                        ::std::option::Option::None => ::std::option::Option::None,
                    }
                }
            } else {
                // Non-Option with deserializer
                quote! {
                    {
                        let __raw = __lookup
                            .get(&__key)
                            .ok_or_else(|| ::envify::EnvifyError::missing(&__key))?;
                        #func(&__raw).map_err(|e| ::envify::EnvifyError::parse_error::<#field_type>(&__key, &__raw, e))?
                    }
                }
            }
        } else {
            // Use FromEnv resolution (default)
            match attrs.default {
                Some(Some(default_value)) => {
                    // Explicit default value
                    quote! {
                        ::envify::de::resolve_with_default::<#field_type>(
                            &__lookup,
                            &__key,
                            #default_value
                        )?
                    }
                }
                Some(None) => {
                    // Use Default::default()
                    quote! {
                        ::envify::de::resolve_with_default::<#field_type>(
                            &__lookup,
                            &__key,
                            ::std::default::Default::default()
                        )?
                    }
                }
                None => {
                    // Required field (Option<T> resolves its own absence to None)
                    quote! {
                        ::envify::de::resolve_required::<#field_type>(&__lookup, &__key)?
                    }
                }
            }
        };

        quote! {
            #field_name: {
                let __key = ::envify::de::env_key(__prefix, #segment);
                #resolve_expr
            }
        }
    });

    let validate_stmt = match struct_attrs.validate {
        Some(func_path) => {
            let func: proc_macro2::TokenStream = func_path.parse().unwrap();
            quote! {
                if let ::std::result::Result::Err(__err) = #func(&__value) {
                    return ::std::result::Result::Err(
                        ::envify::EnvifyError::construction::<Self>(__err),
                    );
                }
            }
        }
        None => quote! {},
    };

    let prefix = struct_attrs.prefix;

    // Generate the FromEnv impl and the from_env() convenience method
    let expanded = quote! {
        impl ::envify::FromEnv for #struct_name {
            fn resolve(
                __lookup: &::envify::de::Lookup<'_>,
                __prefix: &str,
            ) -> ::std::result::Result<Self, ::envify::EnvifyError> {
                let __lookup = __lookup.descend::<Self>(__prefix)?;
                let __value = Self {
                    #(#field_initializers),*
                };
                #validate_stmt
                ::std::result::Result::Ok(__value)
            }
        }

        impl #struct_name {
            /// Load configuration from environment variables
            ///
            /// # Errors
            ///
            /// - Required environment variables are not set
            /// - Environment variable values cannot be coerced into target types
            /// - The validation hook rejects the resolved values
            pub fn from_env() -> ::envify::anyhow::Result<Self> {
                ::std::result::Result::Ok(::envify::Resolver::new().envify(#prefix)?)
            }
        }
    };

    TokenStream::from(expanded)
}

fn expand_enum(input: &DeriveInput, data: &DataEnum) -> TokenStream {
    let enum_name = &input.ident;
    let enum_name_str = enum_name.to_string();

    if data.variants.is_empty() {
        return syn::Error::new_spanned(input, "Envify cannot be derived for empty enums")
            .to_compile_error()
            .into();
    }

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "Envify only supports enums with unit variants",
            )
            .to_compile_error()
            .into();
        }
    }

    let with_discriminant = data
        .variants
        .iter()
        .filter(|v| v.discriminant.is_some())
        .count();

    let coerce_body = if with_discriminant == data.variants.len() {
        // Integer-valued enum: parse the raw value, then match by discriminant
        for variant in &data.variants {
            if VariantAttrs::from_variant(variant).value.is_some() {
                return syn::Error::new_spanned(
                    variant,
                    "value attribute is only supported on string-valued enums (without discriminants)",
                )
                .to_compile_error()
                .into();
            }
        }

        let arms = data.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let (_, disc) = variant.discriminant.as_ref().unwrap();
            quote! {
                if __value == (#disc) as i64 {
                    return ::std::result::Result::Ok(Self::#ident);
                }
            }
        });

        quote! {
            let __value: i64 = raw.parse().map_err(|_| {
                ::std::format!("expected an integer value for {}, got '{}'", #enum_name_str, raw)
            })?;
            #(#arms)*
            ::std::result::Result::Err(::std::format!(
                "no variant of {} has value {}",
                #enum_name_str,
                __value
            ))
        }
    } else if with_discriminant == 0 {
        // String-valued enum: match the literal value case-sensitively
        let arms = data.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let value = VariantAttrs::from_variant(variant)
                .value
                .unwrap_or_else(|| ident.to_string());
            quote! {
                #value => ::std::result::Result::Ok(Self::#ident),
            }
        });

        quote! {
            match raw {
                #(#arms)*
                _ => ::std::result::Result::Err(::std::format!(
                    "no variant of {} matches '{}'",
                    #enum_name_str,
                    raw
                )),
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Envify enums must have discriminants on either all variants or none",
        )
        .to_compile_error()
        .into();
    };

    let expanded = quote! {
        impl ::envify::FromEnvValue for #enum_name {
            fn from_env_value(raw: &str) -> ::std::result::Result<Self, ::std::string::String> {
                #coerce_body
            }
        }

        impl ::envify::FromEnv for #enum_name {
            fn resolve(
                __lookup: &::envify::de::Lookup<'_>,
                __key: &str,
            ) -> ::std::result::Result<Self, ::envify::EnvifyError> {
                ::envify::de::resolve_value::<Self>(__lookup, __key)
            }
        }
    };

    TokenStream::from(expanded)
}
