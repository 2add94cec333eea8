mod attr;
mod nullable;

use attr::NullableArg;

mod kw {
    use syn::custom_keyword;

    custom_keyword!(blank);
    custom_keyword!(sentinel);
}

/// Expand `#[derive(Nullable)]` on `data`.
pub fn expand_nullable(data: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    nullable::expand(data)
}
