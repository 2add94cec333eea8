use crate::kw;
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Error, Expr, Result, Token,
};

/// The argument of a `#[nullable(...)]` attribute.
pub enum NullableArg {
    /// `#[nullable(blank)]`
    Blank(kw::blank),
    /// `#[nullable(sentinel = EXPR)]`
    Sentinel {
        name: kw::sentinel,
        eq_tk: Token![=],
        value: Expr,
    },
}

impl NullableArg {
    /// Find the only `#[nullable(...)]` among `attrs`, if any.
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Option<Self>> {
        let mut found = None;
        for attr in attrs.iter().filter(|attr| attr.path.is_ident("nullable")) {
            if found.is_some() {
                return Err(Error::new_spanned(attr, "duplicate `nullable` attribute"));
            }
            found = Some(attr.parse_args()?);
        }
        Ok(found)
    }
}

impl Parse for NullableArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::blank) {
            Ok(Self::Blank(input.parse()?))
        } else if lookahead.peek(kw::sentinel) {
            Ok(Self::Sentinel {
                name: input.parse()?,
                eq_tk: input.parse()?,
                value: input.parse()?,
            })
        } else {
            Err(lookahead.error())
        }
    }
}

impl ToTokens for NullableArg {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Blank(kw) => kw.to_tokens(tokens),
            Self::Sentinel { name, eq_tk, value } => {
                name.to_tokens(tokens);
                eq_tk.to_tokens(tokens);
                value.to_tokens(tokens);
            }
        }
    }
}
