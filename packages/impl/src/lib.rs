use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Implement `wrapped::Nullable` for a type with its own "no value".
///
/// Mark the blank variants of an enum with `#[nullable(blank)]`, or the field
/// of a struct holding a sentinel with `#[nullable(sentinel = EXPR)]`. A
/// single-field struct may carry the sentinel on the struct itself.
///
/// ```ignore
/// use wrapped::{wrap, Nullable};
///
/// #[derive(Debug, PartialEq, Nullable)]
/// enum Reply {
///     #[nullable(blank)]
///     Nil,
///     Text(String),
/// }
///
/// #[derive(Debug, PartialEq, Nullable)]
/// #[nullable(sentinel = -1)]
/// struct Fd(i32);
///
/// assert!(wrap(Reply::Nil).is_blank());
/// assert_eq!(wrap(Fd(3)).unwrap(), Ok(Fd(3)));
/// assert!(wrap(Fd(-1)).is_blank());
/// ```
#[proc_macro_derive(Nullable, attributes(nullable))]
pub fn derive_nullable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    wrapped_lib::expand_nullable(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
