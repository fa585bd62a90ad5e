//! URI components.

use crate::{
    imp::{AuthMeta, HostMeta, Span},
    ip::Ipv6Literal,
    table,
};
use core::{net::Ipv4Addr, num::ParseIntError};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a case-insensitive
/// comparison if the scheme specification allows both letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use strict_uri::{component::Scheme, UriRef};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let scheme = UriRef::parse("HTTP://EXAMPLE.COM/")?.scheme().unwrap();
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// # Ok::<_, strict_uri::ParseError>(())
/// ```
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
        {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the registered default port of the scheme, if known.
    ///
    /// The schemes recognized are `http`, `https`, `ws`, `wss` and `ftp`,
    /// compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::component::Scheme;
    ///
    /// assert_eq!(Scheme::new_or_panic("HTTPS").default_port(), Some(443));
    /// assert_eq!(Scheme::new_or_panic("mailto").default_port(), None);
    /// ```
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        const DEFAULT_PORTS: &[(&str, u16)] = &[
            ("ftp", 21),
            ("http", 80),
            ("https", 443),
            ("ws", 80),
            ("wss", 443),
        ];
        DEFAULT_PORTS
            .iter()
            .find(|(name, _)| self.inner.eq_ignore_ascii_case(name))
            .map(|&(_, port)| port)
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// An [authority] component.
///
/// All spans returned by the methods of this struct are relative to the
/// whole URI reference the authority was taken from.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
#[derive(Clone, Copy)]
pub struct Authority<'a> {
    val: &'a str,
    // Index of the authority in the URI reference.
    offset: usize,
    // Host bounds relative to `val`.
    meta: AuthMeta,
}

impl<'a> Authority<'a> {
    pub(crate) fn new(val: &'a str, offset: usize, meta: AuthMeta) -> Self {
        Self { val, offset, meta }
    }

    pub(crate) fn meta(&self) -> AuthMeta {
        self.meta
    }

    /// Returns the authority component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.val
    }

    /// Returns the optional [userinfo] subcomponent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::UriRef;
    ///
    /// let uri_ref = UriRef::parse("http://user@example.com/")?;
    /// assert_eq!(uri_ref.authority().unwrap().userinfo(), Some("user"));
    ///
    /// let uri_ref = UriRef::parse("http://example.com/")?;
    /// assert_eq!(uri_ref.authority().unwrap().userinfo(), None);
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        let host_start = self.meta.host_bounds.0;
        (host_start != 0).then(|| &self.val[..host_start - 1])
    }

    /// Returns the [host] subcomponent as a string slice.
    ///
    /// An IP literal is returned with its square brackets.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
    #[must_use]
    pub fn host(&self) -> &'a str {
        let (start, end) = self.meta.host_bounds;
        &self.val[start..end]
    }

    /// Returns the parsed [host] subcomponent.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::{Ipv4Addr, Ipv6Addr};
    /// use strict_uri::{component::Host, UriRef};
    ///
    /// let uri_ref = UriRef::parse("//127.0.0.1")?;
    /// let host = uri_ref.authority().unwrap().host_parsed();
    /// assert!(matches!(host, Host::Ipv4(Ipv4Addr::LOCALHOST)));
    ///
    /// let uri_ref = UriRef::parse("//[::1]")?;
    /// let host = uri_ref.authority().unwrap().host_parsed();
    /// assert!(matches!(host, Host::Ipv6(lit) if lit.addr() == Ipv6Addr::LOCALHOST));
    ///
    /// let uri_ref = UriRef::parse("//127.0.0.1.example.com")?;
    /// let host = uri_ref.authority().unwrap().host_parsed();
    /// assert!(matches!(host, Host::RegName("127.0.0.1.example.com")));
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn host_parsed(&self) -> Host<'a> {
        match self.meta.host_meta {
            HostMeta::Ipv4(addr) => Host::Ipv4(addr),
            HostMeta::Ipv6(lit) => Host::Ipv6(lit),
            HostMeta::RegName => Host::RegName(self.host()),
        }
    }

    /// Returns the optional [port] subcomponent.
    ///
    /// A scheme may define a default port to use when the port is
    /// not present or is empty.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::UriRef;
    ///
    /// let uri_ref = UriRef::parse("//localhost:4673/")?;
    /// assert_eq!(uri_ref.authority().unwrap().port(), Some("4673"));
    ///
    /// let uri_ref = UriRef::parse("//localhost:/")?;
    /// assert_eq!(uri_ref.authority().unwrap().port(), Some(""));
    ///
    /// let uri_ref = UriRef::parse("//localhost/")?;
    /// assert_eq!(uri_ref.authority().unwrap().port(), None);
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        let host_end = self.meta.host_bounds.1;
        (host_end != self.val.len()).then(|| &self.val[host_end + 1..])
    }

    /// Converts the [port] subcomponent to `u16`, if present and nonempty.
    ///
    /// Returns `Ok(None)` if the port is not present or is empty. Leading zeros are ignored.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.3
    ///
    /// # Errors
    ///
    /// Returns `Err` if the port cannot be parsed into `u16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::UriRef;
    ///
    /// let uri_ref = UriRef::parse("//localhost:4673/")?;
    /// assert_eq!(uri_ref.authority().unwrap().port_to_u16(), Ok(Some(4673)));
    ///
    /// let uri_ref = UriRef::parse("//localhost:00080/")?;
    /// assert_eq!(uri_ref.authority().unwrap().port_to_u16(), Ok(Some(80)));
    ///
    /// let uri_ref = UriRef::parse("//localhost:65536/")?;
    /// assert!(uri_ref.authority().unwrap().port_to_u16().is_err());
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    pub fn port_to_u16(&self) -> Result<Option<u16>, ParseIntError> {
        self.port()
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }

    /// Returns the span of the userinfo subcomponent, excluding the `@`.
    #[must_use]
    pub fn userinfo_span(&self) -> Option<Span> {
        let host_start = self.meta.host_bounds.0;
        (host_start != 0).then(|| self.span(0, host_start - 1))
    }

    /// Returns the span of the host subcomponent.
    #[must_use]
    pub fn host_span(&self) -> Span {
        let (start, end) = self.meta.host_bounds;
        self.span(start, end)
    }

    /// Returns the span of the port subcomponent, excluding the `:`.
    #[must_use]
    pub fn port_span(&self) -> Option<Span> {
        let host_end = self.meta.host_bounds.1;
        (host_end != self.val.len()).then(|| self.span(host_end + 1, self.val.len()))
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.offset + start, self.offset + end)
    }

    /// Checks whether a userinfo subcomponent is present.
    #[inline]
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        self.meta.host_bounds.0 != 0
    }

    /// Checks whether a port subcomponent is present.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.meta.host_bounds.1 != self.val.len()
    }
}

/// The [host] subcomponent of authority, classified.
///
/// Exactly one of the three forms holds for every parsed host. An empty host
/// is an empty registered name.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host<'a> {
    /// An IPv4 address in dotted-decimal form.
    Ipv4(Ipv4Addr),
    /// An IPv6 address, written between square brackets.
    Ipv6(Ipv6Literal),
    /// A registered name, possibly empty.
    ///
    /// The name is percent-encoded and case-preserved.
    RegName(&'a str),
}
