use crate::NullableArg;
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{
    spanned::Spanned, Data, DataEnum, DataStruct, DeriveInput, Error, Expr, Member, Result,
};

pub fn expand(data: DeriveInput) -> Result<TokenStream> {
    let container = NullableArg::from_attrs(&data.attrs)?;
    let is_blank = match &data.data {
        Data::Enum(body) => {
            if let Some(arg) = &container {
                return Err(Error::new_spanned(
                    arg,
                    "mark the blank variants with `#[nullable(blank)]` instead",
                ));
            }
            blank_variants(body, &data)?
        }
        Data::Struct(body) => sentinel_field(body, container, &data)?,
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &data.ident,
                "only struct and enum are supported",
            ))
        }
    };

    let name = &data.ident;
    let (impl_generics, ty_generics, where_clause) = data.generics.split_for_impl();
    Ok(quote!(
        impl #impl_generics ::wrapped::Nullable for #name #ty_generics #where_clause {
            type Value = Self;

            fn wrapped(self) -> ::wrapped::Optional<Self> {
                let value = if #is_blank {
                    ::core::option::Option::None
                } else {
                    ::core::option::Option::Some(self)
                };
                ::wrapped::Nullable::wrapped(value)
            }
        }
    ))
}

fn blank_variants(body: &DataEnum, data: &DeriveInput) -> Result<TokenStream> {
    let mut blanks = Vec::new();
    for variant in body.variants.iter() {
        for field in variant.fields.iter() {
            if let Some(arg) = NullableArg::from_attrs(&field.attrs)? {
                return Err(Error::new_spanned(arg, "not supported on enum fields"));
            }
        }
        match NullableArg::from_attrs(&variant.attrs)? {
            Some(NullableArg::Blank(_)) => {
                let ident = &variant.ident;
                blanks.push(quote_spanned!(ident.span()=> Self::#ident { .. }));
            }
            Some(arg @ NullableArg::Sentinel { .. }) => {
                return Err(Error::new_spanned(
                    arg,
                    "variants only accept `#[nullable(blank)]`",
                ))
            }
            None => {}
        }
    }
    if blanks.is_empty() {
        return Err(Error::new_spanned(
            &data.ident,
            "expected at least one variant marked `#[nullable(blank)]`",
        ));
    }
    Ok(quote!(::core::matches!(&self, #(#blanks)|*)))
}

fn sentinel_field(
    body: &DataStruct,
    container: Option<NullableArg>,
    data: &DeriveInput,
) -> Result<TokenStream> {
    let mut found: Option<(Member, Expr)> = None;

    if let Some(arg) = container {
        let value = match arg {
            NullableArg::Sentinel { value, .. } => value,
            arg @ NullableArg::Blank(_) => {
                return Err(Error::new_spanned(arg, "`blank` only applies to enum variants"))
            }
        };
        if body.fields.len() != 1 {
            return Err(Error::new_spanned(
                &value,
                "a struct-level sentinel needs exactly one field; mark the field instead",
            ));
        }
        found = Some((member(body, 0), value));
    }

    for (i, field) in body.fields.iter().enumerate() {
        match NullableArg::from_attrs(&field.attrs)? {
            Some(NullableArg::Sentinel { value, .. }) => {
                if found.is_some() {
                    return Err(Error::new_spanned(value, "only one sentinel is allowed"));
                }
                found = Some((member(body, i), value));
            }
            Some(arg @ NullableArg::Blank(_)) => {
                return Err(Error::new_spanned(arg, "`blank` only applies to enum variants"))
            }
            None => {}
        }
    }

    match found {
        Some((member, value)) => {
            let span = value.span();
            Ok(quote_spanned!(span=> self.#member == (#value)))
        }
        None => Err(Error::new_spanned(
            &data.ident,
            "expected a field marked `#[nullable(sentinel = ...)]`",
        )),
    }
}

fn member(body: &DataStruct, i: usize) -> Member {
    body.fields
        .iter()
        .nth(i)
        .and_then(|field| field.ident.clone())
        .map(Member::Named)
        .unwrap_or_else(|| Member::Unnamed(i.into()))
}

#[cfg(test)]
mod tests {
    use super::expand;
    use syn::{parse_quote, DeriveInput};

    fn expand_err(data: DeriveInput) -> String {
        match expand(data) {
            Ok(tokens) => panic!("expected an error, got `{tokens}`"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn enum_matches_blank_variants() {
        let tokens = expand(parse_quote!(
            enum Reply {
                #[nullable(blank)]
                Nil,
                #[nullable(blank)]
                Gone { reason: String },
                Text(String),
            }
        ))
        .unwrap()
        .to_string();
        assert!(tokens.contains("Self :: Nil { .. } | Self :: Gone { .. }"));
        assert!(!tokens.contains("Text"));
    }

    #[test]
    fn tuple_struct_compares_field_index() {
        let tokens = expand(parse_quote!(
            #[nullable(sentinel = -1)]
            struct Fd(i32);
        ))
        .unwrap()
        .to_string();
        assert!(tokens.contains("self . 0 == (- 1)"));
    }

    #[test]
    fn generics_are_carried_over() {
        let tokens = expand(parse_quote!(
            struct Slot<T: PartialEq> {
                #[nullable(sentinel = 0)]
                index: usize,
                item: T,
            }
        ))
        .unwrap()
        .to_string();
        assert!(tokens.contains("impl < T : PartialEq > :: wrapped :: Nullable for Slot < T >"));
        assert!(tokens.contains("self . index == (0)"));
    }

    #[test]
    fn enum_without_blank_is_rejected() {
        let msg = expand_err(parse_quote!(
            enum Reply {
                Text(String),
            }
        ));
        assert!(msg.contains("at least one variant"));
    }

    #[test]
    fn struct_without_sentinel_is_rejected() {
        let msg = expand_err(parse_quote!(
            struct Fd(i32);
        ));
        assert!(msg.contains("sentinel"));
    }

    #[test]
    fn container_sentinel_needs_one_field() {
        let msg = expand_err(parse_quote!(
            #[nullable(sentinel = 0)]
            struct Span(u32, u32);
        ));
        assert!(msg.contains("exactly one field"));
    }

    #[test]
    fn duplicate_attribute_is_rejected() {
        let msg = expand_err(parse_quote!(
            enum Reply {
                #[nullable(blank)]
                #[nullable(blank)]
                Nil,
            }
        ));
        assert!(msg.contains("duplicate"));
    }

    #[test]
    fn blank_on_struct_is_rejected() {
        let msg = expand_err(parse_quote!(
            #[nullable(blank)]
            struct Fd(i32);
        ));
        assert!(msg.contains("enum variants"));
    }

    #[test]
    fn union_is_rejected() {
        let msg = expand_err(parse_quote!(
            union Bits {
                a: u32,
                b: f32,
            }
        ));
        assert!(msg.contains("only struct and enum"));
    }
}
