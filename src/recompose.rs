//! Component recomposition as described in
//! [Section 5.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.3).

use crate::{
    component::{Authority, Scheme},
    imp::{Meta, Parts},
};
use alloc::string::String;
use core::num::NonZeroUsize;

/// The five components of a URI reference, taken from one or more
/// parsed references.
#[derive(Clone, Copy)]
pub(crate) struct Components<'a> {
    pub scheme: Option<&'a Scheme>,
    pub authority: Option<Authority<'a>>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> From<Parts<'a, '_>> for Components<'a> {
    fn from(r: Parts<'a, '_>) -> Self {
        Self {
            scheme: r.scheme(),
            authority: r.authority(),
            path: r.path(),
            query: r.query(),
            fragment: r.fragment(),
        }
    }
}

impl Components<'_> {
    // A path starting with "//" would be taken for an authority.
    fn needs_path_guard(&self) -> bool {
        self.authority.is_none() && self.path.starts_with("//")
    }

    fn len(&self) -> usize {
        let mut len = self.path.len();
        if let Some(scheme) = self.scheme {
            len += scheme.as_str().len() + 1;
        }
        if let Some(authority) = self.authority {
            len += authority.as_str().len() + 2;
        }
        if self.needs_path_guard() {
            len += 2;
        }
        if let Some(query) = self.query {
            len += query.len() + 1;
        }
        if let Some(fragment) = self.fragment {
            len += fragment.len() + 1;
        }
        len
    }
}

pub(crate) fn recompose(r: Parts<'_, '_>) -> (String, Meta) {
    assemble(&Components::from(r))
}

/// Joins the components into a string, along with the metadata
/// the parser would output for it.
pub(crate) fn assemble(c: &Components<'_>) -> (String, Meta) {
    let len = c.len();
    let mut buf = String::with_capacity(len);
    let mut meta = Meta::default();

    if let Some(scheme) = c.scheme {
        buf.push_str(scheme.as_str());
        meta.scheme_end = NonZeroUsize::new(buf.len());
        buf.push(':');
    }

    if let Some(authority) = c.authority {
        let mut auth_meta = authority.meta();
        buf.push_str("//");

        auth_meta.host_bounds.0 += buf.len();
        auth_meta.host_bounds.1 += buf.len();

        buf.push_str(authority.as_str());
        meta.auth_meta = Some(auth_meta);
    }

    meta.path_bounds.0 = buf.len();
    if c.needs_path_guard() {
        buf.push_str("/.");
    }
    buf.push_str(c.path);
    meta.path_bounds.1 = buf.len();

    if let Some(query) = c.query {
        buf.push('?');
        buf.push_str(query);
        meta.query_end = NonZeroUsize::new(buf.len());
    }

    if let Some(fragment) = c.fragment {
        buf.push('#');
        buf.push_str(fragment);
    }

    debug_assert_eq!(buf.len(), len);
    (buf, meta)
}
