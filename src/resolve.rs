//! Module for reference resolution.

use crate::{
    imp::{Meta, Parts},
    recompose::{self, Components},
    UriRef,
};
use alloc::string::String;
use borrow_or_share::Bos;

/// An error occurred when resolving a URI reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResolveError {
    /// The base has no scheme.
    RequiresAbsoluteBase,
    /// An underflow occurred in path resolution.
    ///
    /// Only returned by a [`Resolver`] that disallows it.
    PathUnderflow,
}

#[cfg(feature = "impl-error")]
impl crate::Error for ResolveError {}

/// A configurable URI reference resolver against a fixed base.
///
/// # Examples
///
/// ```
/// use strict_uri::{resolve::Resolver, UriRef};
///
/// let base = UriRef::parse("http://example.com/foo/bar")?;
/// let resolver = Resolver::with_base(base);
///
/// assert_eq!(resolver.resolve(&UriRef::parse("baz")?).unwrap(), "http://example.com/foo/baz");
/// assert_eq!(resolver.resolve(&UriRef::parse("../baz")?).unwrap(), "http://example.com/baz");
/// assert_eq!(resolver.resolve(&UriRef::parse("?baz")?).unwrap(), "http://example.com/foo/bar?baz");
/// # Ok::<_, strict_uri::ParseError>(())
/// ```
#[derive(Clone, Copy)]
#[must_use]
pub struct Resolver<T> {
    pub(crate) base: UriRef<T>,
    pub(crate) allow_path_underflow: bool,
}

impl<T: Bos<str>> Resolver<T> {
    /// Creates a new `Resolver` with the given base.
    pub fn with_base(base: UriRef<T>) -> Self {
        Self {
            base,
            allow_path_underflow: true,
        }
    }

    /// Sets whether to allow underflow in path resolution.
    ///
    /// This defaults to `true`, in which case a `..` that would climb above
    /// the root is dropped. A value of `false` is a deviation from the
    /// reference resolution algorithm defined in
    /// [Section 5 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5).
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{resolve::{Resolver, ResolveError}, UriRef};
    ///
    /// let base = UriRef::parse("http://example.com/foo/bar")?;
    /// let resolver = Resolver::with_base(base).allow_path_underflow(false);
    ///
    /// assert_eq!(resolver.resolve(&UriRef::parse("../../baz")?).unwrap_err(), ResolveError::PathUnderflow);
    /// assert_eq!(resolver.resolve(&UriRef::parse("/../baz")?).unwrap_err(), ResolveError::PathUnderflow);
    /// assert!(resolver.resolve(&UriRef::parse("../baz")?).is_ok());
    /// # Ok::<_, strict_uri::ParseError>(())
    /// ```
    pub fn allow_path_underflow(mut self, value: bool) -> Self {
        self.allow_path_underflow = value;
        self
    }

    /// Resolves the given reference against the configured base.
    ///
    /// See [`resolve_against`] for the exact behavior of this method.
    ///
    /// # Errors
    ///
    /// Returns `Err` on the same conditions as [`resolve_against`] or if an underflow
    /// occurred in path resolution when [`allow_path_underflow`] is set to `false`.
    ///
    /// [`resolve_against`]: UriRef::resolve_against
    /// [`allow_path_underflow`]: Self::allow_path_underflow
    pub fn resolve<U: Bos<str>>(
        &self,
        reference: &UriRef<U>,
    ) -> Result<UriRef<String>, ResolveError> {
        let (val, meta, underflow) = resolve(self.base.parts(), reference.parts())?;
        if underflow && !self.allow_path_underflow {
            return Err(ResolveError::PathUnderflow);
        }
        Ok(UriRef::new(val, meta))
    }
}

/// Resolves a reference against a base, also returning
/// whether an underflow occurred in path resolution.
pub(crate) fn resolve(
    base: Parts<'_, '_>,
    /* reference */ r: Parts<'_, '_>,
) -> Result<(String, Meta, bool), ResolveError> {
    let Some(base_scheme) = base.scheme() else {
        return Err(ResolveError::RequiresAbsoluteBase);
    };

    let (t_scheme, t_authority, t_path, t_query);
    let mut buf = String::new();
    let mut underflow = false;

    let r_scheme = r.scheme();
    let r_authority = r.authority();
    let r_path = r.path();
    let r_query = r.query();

    if r_scheme.is_some() {
        t_scheme = r_scheme;
        t_authority = r_authority;
        t_path = if r_path.starts_with('/') {
            underflow = remove_dot_segments(&mut buf, r_path);
            &buf[..]
        } else {
            r_path
        };
        t_query = r_query;
    } else {
        if r_authority.is_some() {
            t_authority = r_authority;
            underflow = remove_dot_segments(&mut buf, r_path);
            t_path = &buf[..];
            t_query = r_query;
        } else {
            if r_path.is_empty() {
                t_path = base.path();
                if r_query.is_some() {
                    t_query = r_query;
                } else {
                    t_query = base.query();
                }
            } else {
                if r_path.starts_with('/') {
                    underflow = remove_dot_segments(&mut buf, r_path);
                } else {
                    // Instead of merging the paths, remove dot segments incrementally.
                    let base_path = base.path();
                    if base_path.is_empty() && base.has_authority() {
                        buf.push('/');
                    } else {
                        // Everything after the last "/" of the base path is dropped.
                        let base_dir = base_path.rfind('/').map_or("", |i| &base_path[..=i]);
                        underflow = remove_dot_segments(&mut buf, base_dir);
                    }
                    underflow |= remove_dot_segments(&mut buf, r_path);
                }
                t_path = &buf[..];
                t_query = r_query;
            }
            t_authority = base.authority();
        }
        t_scheme = Some(base_scheme);
    }

    let (val, meta) = recompose::assemble(&Components {
        scheme: t_scheme,
        authority: t_authority,
        path: t_path,
        query: t_query,
        fragment: r.fragment(),
    });
    Ok((val, meta, underflow))
}

/// Removes dot segments from `path`, appending the output to `buf`,
/// which must be empty or end with `/`.
///
/// Returns whether an underflow occurred, that is, whether a `..`
/// had no segment to remove. Such a `..` is dropped.
pub(crate) fn remove_dot_segments(buf: &mut String, path: &str) -> bool {
    let mut underflow = false;
    for seg in path.split_inclusive('/') {
        let seg_stripped = seg.strip_suffix('/').unwrap_or(seg);
        match classify_segment(seg_stripped) {
            SegKind::Dot => buf.truncate(buf.rfind('/').map_or(0, |i| i + 1)),
            SegKind::DoubleDot => {
                let stripped = buf.strip_suffix('/').unwrap_or(buf.as_str());
                if stripped.is_empty() {
                    underflow = true;
                } else {
                    let len = stripped.rfind('/').map_or(0, |i| i + 1);
                    buf.truncate(len);
                }
            }
            SegKind::Normal => buf.push_str(seg),
        }
    }
    underflow
}

enum SegKind {
    Dot,
    DoubleDot,
    Normal,
}

fn classify_segment(mut seg: &str) -> SegKind {
    if seg.is_empty() {
        return SegKind::Normal;
    }
    if let Some(rem) = seg.strip_prefix('.') {
        seg = rem;
    } else if let Some(rem) = seg.strip_prefix("%2E") {
        seg = rem;
    } else if let Some(rem) = seg.strip_prefix("%2e") {
        seg = rem;
    }
    if seg.is_empty() {
        SegKind::Dot
    } else if seg == "." || seg == "%2E" || seg == "%2e" {
        SegKind::DoubleDot
    } else {
        SegKind::Normal
    }
}
