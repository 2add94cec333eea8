//! Values that may be absent, made explicit.
//!
//! [`wrap`] turns anything with a notion of "no value" ([`Option`], raw
//! pointers, or your own [`Nullable`] type) into an [`Optional`], which is
//! either present or blank. From there the combinators decide what happens in
//! each case, and [`Optional::unwrap`] is the only way to fail.
//!
//! ```
//! use wrapped::{wrap, EmptyAccess};
//!
//! let port = wrap(std::env::var("NO_SUCH_VARIABLE").ok())
//!     .flat_map(|s| wrap(s.parse::<u16>().ok()))
//!     .select(|port| *port != 0)
//!     .unwrap_or(8080);
//! assert_eq!(port, 8080);
//!
//! assert_eq!(wrap(None::<u16>).unwrap(), Err(EmptyAccess));
//! ```
//!
//! A wrapped value is never equal to the bare value it holds:
//!
//! ```compile_fail
//! assert!(wrapped::wrap(Some(1)) != 1);
//! ```

#[cfg(feature = "derive")]
#[doc(inline)]
pub use wrapped_impl::*;

mod error;
mod iter;
mod nullable;
mod optional;
#[cfg(feature = "serde")]
mod serialize;

pub use error::EmptyAccess;
pub use iter::{IntoIter, Iter};
pub use nullable::{wrap, Nullable};
pub use optional::Optional;
