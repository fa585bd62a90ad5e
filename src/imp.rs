use crate::{
    component::{Authority, Scheme},
    ip::Ipv6Literal,
    normalize,
    parse::{self, ParseError},
    recompose,
    resolve::{self, ResolveError},
    unit::CodeUnit,
};
use alloc::{borrow::ToOwned, string::String};
use borrow_or_share::{BorrowOrShare, Bos};
use core::{
    borrow::Borrow,
    cmp::Ordering,
    hash,
    net::Ipv4Addr,
    num::NonZeroUsize,
    ops::Range,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Input accepted by [`UriRef::parse`].
///
/// Implemented for `&str`, `String` and `&[u16]`.
pub trait Parse {
    /// The value type of the output.
    type Val;
    /// The error type.
    type Err;

    /// Parses the input into a URI reference.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input does not match the `URI-reference` ABNF rule.
    fn parse(self) -> Result<UriRef<Self::Val>, Self::Err>;
}

impl<'a> Parse for &'a str {
    type Val = &'a str;
    type Err = ParseError;

    fn parse(self) -> Result<UriRef<Self::Val>, Self::Err> {
        parse::parse(self.as_bytes()).map(|meta| UriRef::new(self, meta))
    }
}

impl Parse for String {
    type Val = Self;
    type Err = (ParseError, Self);

    fn parse(self) -> Result<UriRef<Self::Val>, Self::Err> {
        match parse::parse(self.as_bytes()) {
            Ok(meta) => Ok(UriRef::new(self, meta)),
            Err(e) => Err((e, self)),
        }
    }
}

impl Parse for &[u16] {
    type Val = String;
    type Err = ParseError;

    fn parse(self) -> Result<UriRef<Self::Val>, Self::Err> {
        let meta = parse::parse(self)?;
        // A valid URI reference consists of ASCII characters only,
        // so indexes into the wide text carry over unchanged.
        let val = self.iter().map(|&x| char::from(x.as_byte())).collect();
        Ok(UriRef::new(val, meta))
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct Meta {
    // The index of the trailing colon.
    pub scheme_end: Option<NonZeroUsize>,
    pub auth_meta: Option<AuthMeta>,
    pub path_bounds: (usize, usize),
    // One byte past the last byte of query.
    pub query_end: Option<NonZeroUsize>,
}

impl Meta {
    #[inline]
    pub fn query_or_path_end(&self) -> usize {
        self.query_end.map_or(self.path_bounds.1, |i| i.get())
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AuthMeta {
    pub host_bounds: (usize, usize),
    pub host_meta: HostMeta,
}

#[derive(Clone, Copy)]
pub(crate) enum HostMeta {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Literal),
    RegName,
}

/// A half-open range `[start, end)` of byte indexes into the text of a URI reference.
///
/// For wide input the indexes count code units, which coincide with bytes
/// of the ASCII-only text held by the parsed [`UriRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// The index of the first byte.
    pub start: usize,
    /// One past the index of the last byte.
    pub end: usize,
}

impl Span {
    pub(crate) const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Returns the length of the span.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Checks whether the span is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// A [URI reference], i.e., either a URI or a relative reference.
///
/// A `UriRef` holds its text together with the indexes at which its components
/// start and end, so extracting a component never copies. Parsing performs no
/// normalization: [`recompose`](Self::recompose) gives back the exact input.
///
/// # Variants
///
/// Two variants of `UriRef` are available: `UriRef<&str>` (borrowed) and
/// `UriRef<String>` (owned).
///
/// `UriRef<&'a str>` outputs references with lifetime `'a` where possible
/// (thanks to [`borrow-or-share`](borrow_or_share)):
///
/// ```
/// use strict_uri::UriRef;
///
/// // Keep a reference to the path after dropping the `UriRef`.
/// let path = UriRef::parse("foo:bar")?.path();
/// assert_eq!(path, "bar");
/// # Ok::<_, strict_uri::ParseError>(())
/// ```
///
/// # Comparison
///
/// `UriRef`s are compared [lexicographically](Ord#lexicographical-comparison)
/// by their byte values. Normalization is **not** performed prior to comparison.
///
/// # Examples
///
/// Parse and extract components from a URI reference:
///
/// ```
/// use strict_uri::{component::{Host, Scheme}, Span, UriRef};
///
/// const SCHEME_FOO: &Scheme = Scheme::new_or_panic("foo");
///
/// let s = "foo://user@example.com:8042/over/there?name=ferret#nose";
/// let uri_ref = UriRef::parse(s)?;
///
/// assert_eq!(uri_ref.scheme().unwrap(), SCHEME_FOO);
///
/// let auth = uri_ref.authority().unwrap();
/// assert_eq!(auth.as_str(), "user@example.com:8042");
/// assert_eq!(auth.userinfo(), Some("user"));
/// assert_eq!(auth.host(), "example.com");
/// assert!(matches!(auth.host_parsed(), Host::RegName("example.com")));
/// assert_eq!(auth.port(), Some("8042"));
/// assert_eq!(auth.port_to_u16(), Ok(Some(8042)));
/// assert_eq!(auth.host_span(), Span { start: 11, end: 22 });
///
/// assert_eq!(uri_ref.path(), "/over/there");
/// assert!(uri_ref.path_segments().eq(["over", "there"]));
/// assert_eq!(uri_ref.query(), Some("name=ferret"));
/// assert_eq!(uri_ref.fragment(), Some("nose"));
/// # Ok::<_, strict_uri::ParseError>(())
/// ```
///
/// Parse into and convert between `UriRef<&str>` and `UriRef<String>`:
///
/// ```
/// use strict_uri::UriRef;
///
/// let s = "http://example.com/";
///
/// // Parse into a `UriRef<&str>` from a string slice.
/// let uri_ref: UriRef<&str> = UriRef::parse(s)?;
///
/// // Parse into a `UriRef<String>` from an owned string.
/// let uri_ref_owned: UriRef<String> = UriRef::parse(s.to_owned()).map_err(|e| e.0)?;
///
/// // Convert a `UriRef<&str>` to `UriRef<String>`.
/// let uri_ref_owned: UriRef<String> = uri_ref.to_owned();
///
/// // Borrow a `UriRef<String>` as `UriRef<&str>`.
/// let uri_ref: UriRef<&str> = uri_ref_owned.borrow();
///
/// // Parse wide text into a `UriRef<String>`.
/// let wide: Vec<u16> = s.encode_utf16().collect();
/// assert_eq!(UriRef::parse(&wide[..])?, uri_ref);
/// # Ok::<_, strict_uri::ParseError>(())
/// ```
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
#[derive(Clone, Copy)]
pub struct UriRef<T> {
    /// Value of the URI reference.
    pub(crate) val: T,
    /// Metadata of the URI reference.
    /// Should be identical to parser output with `val` as input.
    pub(crate) meta: Meta,
}

impl<T> UriRef<T> {
    pub(crate) fn new(val: T, meta: Meta) -> Self {
        Self { val, meta }
    }

    /// Parses a URI reference from narrow or wide text.
    ///
    /// The return type is
    ///
    /// - `Result<UriRef<&str>, ParseError>` for `I = &str`;
    /// - `Result<UriRef<String>, (ParseError, String)>` for `I = String`;
    /// - `Result<UriRef<String>, ParseError>` for `I = &[u16]`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the text does not match the
    /// [`URI-reference`][abnf] ABNF rule from RFC 3986.
    ///
    /// [abnf]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
    pub fn parse<I>(input: I) -> Result<Self, I::Err>
    where
        I: Parse<Val = T>,
    {
        input.parse()
    }
}

impl UriRef<String> {
    /// Borrows this `UriRef<String>` as `UriRef<&str>`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    #[must_use]
    pub fn borrow(&self) -> UriRef<&str> {
        UriRef {
            val: &self.val,
            meta: self.meta,
        }
    }

    /// Consumes this `UriRef<String>` and yields the underlying [`String`].
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.val
    }
}

impl UriRef<&str> {
    /// Creates a new `UriRef<String>` by cloning the contents of this `UriRef<&str>`.
    #[inline]
    #[must_use]
    pub fn to_owned(&self) -> UriRef<String> {
        UriRef {
            val: self.val.to_owned(),
            meta: self.meta,
        }
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> UriRef<T> {
    pub(crate) fn parts(&'i self) -> Parts<'o, 'i> {
        Parts::new(self.as_str(), &self.meta)
    }

    /// Returns the URI reference as a string slice.
    #[must_use]
    pub fn as_str(&'i self) -> &'o str {
        self.val.borrow_or_share()
    }

    /// Returns the optional [scheme] component.
    ///
    /// Note that the scheme component is *case-insensitive*.
    /// See the documentation of [`Scheme`] for more details on comparison.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    #[must_use]
    pub fn scheme(&'i self) -> Option<&'o Scheme> {
        self.parts().scheme()
    }

    /// Returns the optional [authority] component.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
    #[must_use]
    pub fn authority(&'i self) -> Option<Authority<'o>> {
        self.parts().authority()
    }

    /// Returns the [path] component.
    ///
    /// The path component is always present, although it may be empty.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
    #[must_use]
    pub fn path(&'i self) -> &'o str {
        self.parts().path()
    }

    /// Returns an iterator over the segments of the path component.
    ///
    /// A leading `/` only marks the path as absolute and does not start a segment.
    /// An empty path has no segments, but every other path has at least one,
    /// which may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::UriRef;
    ///
    /// let uri_ref = UriRef::parse("file:///path/to//dir/")?;
    /// assert!(uri_ref.path_segments().eq(["path", "to", "", "dir", ""]));
    ///
    /// let uri_ref = UriRef::parse("../../")?;
    /// assert!(uri_ref.path_segments().eq(["..", "..", ""]));
    ///
    /// let uri_ref = UriRef::parse("http://example.com")?;
    /// assert_eq!(uri_ref.path_segments().count(), 0);
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    pub fn path_segments(&'i self) -> impl Iterator<Item = &'o str> {
        let path = self.path();
        let rest = path.strip_prefix('/').unwrap_or(path);
        rest.split('/').filter(move |_| !path.is_empty())
    }

    /// Returns the optional [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.4
    #[must_use]
    pub fn query(&'i self) -> Option<&'o str> {
        self.parts().query()
    }

    /// Returns the optional [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.5
    #[must_use]
    pub fn fragment(&'i self) -> Option<&'o str> {
        self.parts().fragment()
    }
}

impl<T: Bos<str>> UriRef<T> {
    /// Checks whether a scheme component is present,
    /// i.e., whether this is a URI rather than a relative reference.
    #[inline]
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.meta.scheme_end.is_some()
    }

    /// Checks whether an authority component is present.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.meta.auth_meta.is_some()
    }

    /// Checks whether the path component starts with `/`.
    #[inline]
    #[must_use]
    pub fn is_path_absolute(&self) -> bool {
        self.path().starts_with('/')
    }

    /// Checks whether a query component is present.
    #[inline]
    #[must_use]
    pub fn has_query(&self) -> bool {
        self.meta.query_end.is_some()
    }

    /// Checks whether a fragment component is present.
    #[inline]
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.meta.query_or_path_end() != self.as_str().len()
    }

    /// Returns the span of the scheme component, excluding the `:`.
    #[must_use]
    pub fn scheme_span(&self) -> Option<Span> {
        self.meta.scheme_end.map(|i| Span::new(0, i.get()))
    }

    /// Returns the span of the authority component, excluding the leading `//`.
    #[must_use]
    pub fn authority_span(&self) -> Option<Span> {
        self.meta.auth_meta?;
        Some(Span::new(authority_start(&self.meta), self.meta.path_bounds.0))
    }

    /// Returns the span of the path component.
    #[must_use]
    pub fn path_span(&self) -> Span {
        let (start, end) = self.meta.path_bounds;
        Span::new(start, end)
    }

    /// Returns the spans of the path segments, in the order of
    /// [`path_segments`](Self::path_segments).
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{Span, UriRef};
    ///
    /// let uri_ref = UriRef::parse("http://a/b/c")?;
    /// assert!(uri_ref
    ///     .path_segment_spans()
    ///     .eq([Span { start: 9, end: 10 }, Span { start: 11, end: 12 }]));
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    pub fn path_segment_spans(&self) -> impl Iterator<Item = Span> + '_ {
        let (start, _) = self.meta.path_bounds;
        let offset = if self.is_path_absolute() { start + 1 } else { start };
        self.path_segments().scan(offset, |pos, seg| {
            let span = Span::new(*pos, *pos + seg.len());
            *pos = span.end + 1;
            Some(span)
        })
    }

    /// Returns the span of the query component, excluding the `?`.
    #[must_use]
    pub fn query_span(&self) -> Option<Span> {
        let end = self.meta.query_end?.get();
        Some(Span::new(self.meta.path_bounds.1 + 1, end))
    }

    /// Returns the span of the fragment component, excluding the `#`.
    #[must_use]
    pub fn fragment_span(&self) -> Option<Span> {
        self.has_fragment()
            .then(|| Span::new(self.meta.query_or_path_end() + 1, self.as_str().len()))
    }

    /// Normalizes the URI reference.
    ///
    /// This method applies syntax-based normalization described in
    /// [Section 6.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-6.2.2)
    /// and scheme-based normalization described in
    /// [Section 6.2.3](https://datatracker.ietf.org/doc/html/rfc3986/#section-6.2.3):
    ///
    /// - Lowercase the scheme and the registered name host.
    /// - Decode any percent-encoded octet that corresponds to an unreserved character,
    ///   and uppercase the hexadecimal digits of the rest.
    /// - If there is a scheme and the path starts with `/`, remove dot segments from it.
    ///   Any `..` that would climb above the root is dropped.
    /// - Render an IPv6 address in the canonical form of
    ///   [RFC 5952](https://datatracker.ietf.org/doc/html/rfc5952).
    /// - Remove the port if it is empty or equals the default port of the scheme.
    /// - If there is no authority and the path starts with `//`, prepend `/.` to it.
    ///
    /// Normalization is idempotent. Use a [`Normalizer`](crate::normalize::Normalizer)
    /// to configure it.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::UriRef;
    ///
    /// let uri_ref = UriRef::parse("eXAMPLE://a/./b/../b/%63/%7bfoo%7d")?;
    /// assert_eq!(uri_ref.normalize(), "example://a/b/c/%7Bfoo%7D");
    ///
    /// let uri_ref = UriRef::parse("HTTP://[0:0:0:0:0:0:0:1]:80/%7euser")?;
    /// assert_eq!(uri_ref.normalize(), "http://[::1]/~user");
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn normalize(&self) -> UriRef<String> {
        let (val, meta, _) = normalize::normalize(self.parts(), Scheme::default_port);
        UriRef::new(val, meta)
    }

    /// Resolves the URI reference against the given base URI.
    ///
    /// This method follows the reference resolution algorithm defined in
    /// [Section 5.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2).
    /// A fragment of the base is ignored. If the output would have no authority
    /// and a path starting with `//`, `/.` is prepended to the path so that the
    /// output is a valid URI reference that parses back to the same components.
    ///
    /// Use a [`Resolver`](crate::resolve::Resolver) to configure it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::RequiresAbsoluteBase`] if the base has no scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::UriRef;
    ///
    /// let base = UriRef::parse("http://example.com/foo/bar")?;
    ///
    /// let uri_ref = UriRef::parse("../baz")?;
    /// assert_eq!(uri_ref.resolve_against(&base).unwrap(), "http://example.com/baz");
    ///
    /// let uri_ref = UriRef::parse("?query")?;
    /// assert_eq!(uri_ref.resolve_against(&base).unwrap(), "http://example.com/foo/bar?query");
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    pub fn resolve_against<U: Bos<str>>(
        &self,
        base: &UriRef<U>,
    ) -> Result<UriRef<String>, ResolveError> {
        let (val, meta, _) = resolve::resolve(base.parts(), self.parts())?;
        Ok(UriRef::new(val, meta))
    }

    /// Recomposes the URI reference from its components as described in
    /// [Section 5.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.3).
    ///
    /// The output always equals the text the reference was parsed from.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::UriRef;
    ///
    /// let s = "foo://user@[::1]:8042/over/there?name=ferret#nose";
    /// assert_eq!(UriRef::parse(s)?.recompose(), s);
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn recompose(&self) -> String {
        recompose::recompose(self.parts()).0
    }
}

fn authority_start(meta: &Meta) -> usize {
    match meta.scheme_end {
        Some(i) => i.get() + 3,
        None => 2,
    }
}

impl<T: Bos<str>, U: Bos<str>> PartialEq<UriRef<U>> for UriRef<T> {
    fn eq(&self, other: &UriRef<U>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<T: Bos<str>> PartialEq<str> for UriRef<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Bos<str>> PartialEq<UriRef<T>> for str {
    fn eq(&self, other: &UriRef<T>) -> bool {
        self == other.as_str()
    }
}

impl<T: Bos<str>> PartialEq<&str> for UriRef<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: Bos<str>> PartialEq<UriRef<T>> for &str {
    fn eq(&self, other: &UriRef<T>) -> bool {
        *self == other.as_str()
    }
}

impl<T: Bos<str>> Eq for UriRef<T> {}

impl<T: Bos<str>> hash::Hash for UriRef<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<T: Bos<str>> PartialOrd for UriRef<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Bos<str>> Ord for UriRef<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl<T: Bos<str>> AsRef<str> for UriRef<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Bos<str>> Borrow<str> for UriRef<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<'a> TryFrom<&'a str> for UriRef<&'a str> {
    type Error = ParseError;

    #[inline]
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        UriRef::parse(value)
    }
}

impl TryFrom<String> for UriRef<String> {
    type Error = (ParseError, String);

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        UriRef::parse(value)
    }
}

impl<'a> From<UriRef<&'a str>> for &'a str {
    #[inline]
    fn from(value: UriRef<&'a str>) -> &'a str {
        value.val
    }
}

impl From<UriRef<String>> for String {
    #[inline]
    fn from(value: UriRef<String>) -> String {
        value.val
    }
}

impl From<UriRef<&str>> for UriRef<String> {
    #[inline]
    fn from(value: UriRef<&str>) -> Self {
        value.to_owned()
    }
}

impl FromStr for UriRef<String> {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UriRef::parse(s).map(|r| r.to_owned())
    }
}

#[cfg(feature = "serde")]
impl<T: Bos<str>> Serialize for UriRef<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UriRef<&'de str> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        UriRef::parse(s).map_err(|e| {
            de::Error::custom(format_args!("failed to parse {s:?} as URI reference: {e}"))
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UriRef<String> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UriRef::parse(s).map_err(|(e, s)| {
            de::Error::custom(format_args!("failed to parse {s:?} as URI reference: {e}"))
        })
    }
}

/// A view of a URI reference along with its metadata.
#[derive(Clone, Copy)]
pub(crate) struct Parts<'v, 'm> {
    val: &'v str,
    meta: &'m Meta,
}

impl<'v, 'm> Parts<'v, 'm> {
    pub fn new(val: &'v str, meta: &'m Meta) -> Self {
        Self { val, meta }
    }

    pub fn as_str(self) -> &'v str {
        self.val
    }

    fn slice(self, start: usize, end: usize) -> &'v str {
        &self.val[start..end]
    }

    pub fn scheme(self) -> Option<&'v Scheme> {
        let end = self.meta.scheme_end?.get();
        Some(Scheme::new_validated(self.slice(0, end)))
    }

    pub fn authority(self) -> Option<Authority<'v>> {
        let mut meta = self.meta.auth_meta?;
        let start = authority_start(self.meta);
        let end = self.meta.path_bounds.0;

        meta.host_bounds.0 -= start;
        meta.host_bounds.1 -= start;

        Some(Authority::new(self.slice(start, end), start, meta))
    }

    pub fn path(self) -> &'v str {
        self.slice(self.meta.path_bounds.0, self.meta.path_bounds.1)
    }

    pub fn query(self) -> Option<&'v str> {
        let end = self.meta.query_end?.get();
        Some(self.slice(self.meta.path_bounds.1 + 1, end))
    }

    pub fn fragment(self) -> Option<&'v str> {
        Some(self.meta.query_or_path_end())
            .filter(|&i| i != self.val.len())
            .map(|i| self.slice(i + 1, self.val.len()))
    }

    #[inline]
    pub fn has_scheme(self) -> bool {
        self.meta.scheme_end.is_some()
    }

    #[inline]
    pub fn has_authority(self) -> bool {
        self.meta.auth_meta.is_some()
    }
}
