//! Module for normalization.

use crate::{
    component::Scheme,
    imp::{HostMeta, Meta, Parts},
    parse, resolve,
    table::{self, Table},
    UriRef,
};
use alloc::string::String;
use borrow_or_share::Bos;
use core::num::NonZeroUsize;

/// An error occurred when normalizing a URI reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NormalizeError {
    /// An underflow occurred in path normalization.
    ///
    /// Used only when [`Normalizer::allow_path_underflow`] is set to `false`.
    PathUnderflow,
}

#[cfg(feature = "impl-error")]
impl crate::Error for NormalizeError {}

/// A configurable URI reference normalizer.
///
/// See [`UriRef::normalize`] for the normalization steps.
#[derive(Clone, Copy)]
#[allow(missing_debug_implementations)]
#[must_use]
pub struct Normalizer {
    allow_path_underflow: bool,
    default_port_f: fn(&Scheme) -> Option<u16>,
}

impl Normalizer {
    /// Creates a new `Normalizer` with default configuration.
    pub fn new() -> Self {
        Self {
            allow_path_underflow: true,
            default_port_f: Scheme::default_port,
        }
    }

    /// Sets whether to allow underflow in path normalization.
    ///
    /// This defaults to `true`, in which case a `..` that would climb above
    /// the root is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{normalize::{Normalizer, NormalizeError}, UriRef};
    ///
    /// let normalizer = Normalizer::new().allow_path_underflow(false);
    /// let uri_ref = UriRef::parse("http://example.com/..")?;
    ///
    /// assert_eq!(normalizer.normalize(&uri_ref).unwrap_err(), NormalizeError::PathUnderflow);
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    pub fn allow_path_underflow(mut self, value: bool) -> Self {
        self.allow_path_underflow = value;
        self
    }

    /// Sets the function with which to get the default port of a scheme.
    ///
    /// This defaults to [`Scheme::default_port`].
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{component::Scheme, normalize::Normalizer, UriRef};
    ///
    /// const SCHEME_FOO: &Scheme = Scheme::new_or_panic("foo");
    ///
    /// let normalizer = Normalizer::new().default_port_with(|scheme| {
    ///     if scheme == SCHEME_FOO {
    ///         Some(4673)
    ///     } else {
    ///         scheme.default_port()
    ///     }
    /// });
    /// let uri_ref = UriRef::parse("foo://localhost:4673")?;
    ///
    /// assert_eq!(normalizer.normalize(&uri_ref).unwrap(), "foo://localhost");
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    pub fn default_port_with(mut self, f: fn(&Scheme) -> Option<u16>) -> Self {
        self.default_port_f = f;
        self
    }

    /// Normalizes the given URI reference.
    ///
    /// See [`UriRef::normalize`] for the exact behavior of this method.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an underflow occurred in path normalization
    /// when [`allow_path_underflow`] is set to `false`.
    ///
    /// [`allow_path_underflow`]: Self::allow_path_underflow
    pub fn normalize<T: Bos<str>>(
        &self,
        r: &UriRef<T>,
    ) -> Result<UriRef<String>, NormalizeError> {
        let (val, meta, underflow) = normalize(r.parts(), self.default_port_f);
        if underflow && !self.allow_path_underflow {
            return Err(NormalizeError::PathUnderflow);
        }
        Ok(UriRef::new(val, meta))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes a URI reference, also returning
/// whether an underflow occurred in path normalization.
pub(crate) fn normalize(
    r: Parts<'_, '_>,
    default_port_f: fn(&Scheme) -> Option<u16>,
) -> (String, Meta, bool) {
    // For "a://[::ffff:5:9]/" the capacity is not enough,
    // but it's fine since this rarely happens.
    let mut buf = String::with_capacity(r.as_str().len());

    let path = r.path();
    let mut path_buf = String::with_capacity(path.len());
    let mut underflow = false;

    if r.has_scheme() && path.starts_with('/') {
        normalize_pct(&mut buf, path, false);
        underflow = resolve::remove_dot_segments(&mut path_buf, &buf);
        buf.clear();
    } else {
        // Don't remove dot segments from relative reference or rootless path.
        normalize_pct(&mut path_buf, path, false);
    }

    let mut meta = Meta::default();

    if let Some(scheme) = r.scheme() {
        buf.push_str(scheme.as_str());
        buf.make_ascii_lowercase();
        meta.scheme_end = NonZeroUsize::new(buf.len());
        buf.push(':');
    }

    if let Some(auth) = r.authority() {
        buf.push_str("//");

        if let Some(userinfo) = auth.userinfo() {
            normalize_pct(&mut buf, userinfo, false);
            buf.push('@');
        }

        let mut auth_meta = auth.meta();
        auth_meta.host_bounds.0 = buf.len();
        match auth_meta.host_meta {
            // An IPv4 address is always canonical.
            HostMeta::Ipv4(..) => buf.push_str(auth.host()),
            HostMeta::Ipv6(lit) => {
                buf.push('[');
                auth_meta.host_meta = HostMeta::Ipv6(lit.write_canonical(&mut buf));
                buf.push(']');
            }
            HostMeta::RegName => {
                let start = buf.len();
                let host = auth.host();
                normalize_pct(&mut buf, host, true);

                if buf.len() < start + host.len() {
                    // Only reparse when the length is less than before.
                    auth_meta.host_meta = parse::parse_v4_or_reg_name(&buf.as_bytes()[start..]);
                }
            }
        }
        auth_meta.host_bounds.1 = buf.len();
        meta.auth_meta = Some(auth_meta);

        if let Some(port) = auth.port() {
            if !port.is_empty() {
                let mut eq_default = false;
                if let Some(scheme) = r.scheme() {
                    if let Some(default) = default_port_f(scheme) {
                        eq_default = port.parse().ok() == Some(default);
                    }
                }
                if !eq_default {
                    buf.push(':');
                    buf.push_str(port);
                }
            }
        }
    }

    meta.path_bounds.0 = buf.len();
    // Make sure that the output is a valid URI reference.
    if r.has_scheme() && !r.has_authority() && path_buf.starts_with("//") {
        buf.push_str("/.");
    }
    buf.push_str(&path_buf);
    meta.path_bounds.1 = buf.len();

    if let Some(query) = r.query() {
        buf.push('?');
        normalize_pct(&mut buf, query, false);
        meta.query_end = NonZeroUsize::new(buf.len());
    }

    if let Some(fragment) = r.fragment() {
        buf.push('#');
        normalize_pct(&mut buf, fragment, false);
    }

    (buf, meta, underflow)
}

/// Decodes percent-encoded unreserved characters and uppercases
/// the hexadecimal digits of the other percent-encoded octets.
///
/// The input must be a validated component.
fn normalize_pct(buf: &mut String, s: &str, to_ascii_lowercase: bool) {
    const DATA: Table = table::UNRESERVED;

    let mut rem = s.as_bytes();
    while let Some((&first, rest)) = rem.split_first() {
        let mut x = first;
        rem = rest;
        if x == b'%' {
            let [hi, lo, rest @ ..] = rem else {
                unreachable!("incomplete percent-encoded octet in a validated component");
            };
            rem = rest;
            let octet = table::decode_octet(*hi, *lo);
            if !DATA.allows(octet) {
                buf.push_str(table::encode_byte(octet));
                continue;
            }
            x = octet;
        }
        if to_ascii_lowercase {
            x.make_ascii_lowercase();
        }
        buf.push(char::from(x));
    }
}
