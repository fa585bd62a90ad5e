#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A URI parser, normalizer and resolver that strictly adheres to IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! - **Strict:** Every input is matched against the `URI-reference` ABNF rule.
//!   A failure carries the index and the grammar production at which matching failed,
//!   and no partial result is ever returned. IP literal addresses are validated
//!   exactly, down to the count of groups elided by a `::`.
//!
//! - **Zero-copy:** A parsed [`UriRef`] keeps its text along with the indexes
//!   of its components. Every component is also available as a [`Span`]
//!   into the input.
//!
//! - **Width-agnostic:** Narrow (`&str`) and wide (`&[u16]`) text go through
//!   the same grammar logic and are accepted or rejected alike.
//!
//! # Examples
//!
//! ```
//! use strict_uri::{ParseErrorKind, Production, UriRef};
//!
//! let uri_ref = UriRef::parse("http://www.example.com/name%20with%20spaces/")?;
//! assert_eq!(uri_ref.authority().unwrap().host(), "www.example.com");
//!
//! let e = UriRef::parse("http://www.example.com/name with spaces/").unwrap_err();
//! assert_eq!(e.index(), 27);
//! assert_eq!(e.production(), Production::Path);
//! assert_eq!(e.kind(), ParseErrorKind::UnexpectedCharOrEnd);
//!
//! let base = UriRef::parse("http://a/b/c/d;p?q")?;
//! assert_eq!(UriRef::parse("../g")?.resolve_against(&base).unwrap(), "http://a/b/g");
//! # Ok::<_, strict_uri::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (default): Enables `std` support. This includes [`Error`] implementations.
//!
//! - `impl-error` (default): Enables [`Error`] implementations
//!   without `std` support. Requires Rust 1.81 or later.
//!
//! - `serde`: Enables [`serde`] support.
//!
//! [`Error`]: core::error::Error
//! [`serde`]: https://docs.rs/serde

extern crate alloc;

#[cfg(feature = "impl-error")]
use core::error::Error;

pub mod component;
pub mod ip;
pub mod normalize;
pub mod resolve;
pub mod table;

mod fmt;
mod imp;
mod parse;
mod recompose;
mod unit;

pub use imp::{Span, UriRef};
pub use parse::{ParseError, ParseErrorKind, Production};
