use strict_uri::{
    resolve::{ResolveError, Resolver},
    UriRef,
};

trait Test {
    fn pass(&self, r: &str, res: &str);
    fn fail(&self, r: &str, err: ResolveError);
}

impl Test for UriRef<&str> {
    #[track_caller]
    fn pass(&self, r: &str, expected: &str) {
        let r = UriRef::parse(r).unwrap();
        assert_eq!(r.resolve_against(self).unwrap(), expected);
        for b in [true, false] {
            let resolver = Resolver::with_base(*self).allow_path_underflow(b);
            assert_eq!(resolver.resolve(&r).unwrap(), expected);
        }
    }

    #[track_caller]
    fn fail(&self, r: &str, expected: ResolveError) {
        let r = UriRef::parse(r).unwrap();
        assert_eq!(r.resolve_against(self).unwrap_err(), expected);
        for b in [true, false] {
            let resolver = Resolver::with_base(*self).allow_path_underflow(b);
            assert_eq!(resolver.resolve(&r).unwrap_err(), expected);
        }
    }
}

#[test]
fn resolve() {
    // Examples from Section 5.4 of RFC 3986.
    let base = UriRef::parse("http://a/b/c/d;p?q").unwrap();

    base.pass("g:h", "g:h");
    base.pass("g", "http://a/b/c/g");
    base.pass("./g", "http://a/b/c/g");
    base.pass("g/", "http://a/b/c/g/");
    base.pass("/g", "http://a/g");
    base.pass("//g", "http://g");
    base.pass("?y", "http://a/b/c/d;p?y");
    base.pass("g?y", "http://a/b/c/g?y");
    base.pass("#s", "http://a/b/c/d;p?q#s");
    base.pass("g#s", "http://a/b/c/g#s");
    base.pass("g?y#s", "http://a/b/c/g?y#s");
    base.pass(";x", "http://a/b/c/;x");
    base.pass("g;x", "http://a/b/c/g;x");
    base.pass("g;x?y#s", "http://a/b/c/g;x?y#s");
    base.pass("", "http://a/b/c/d;p?q");
    base.pass(".", "http://a/b/c/");
    base.pass("./", "http://a/b/c/");
    base.pass("..", "http://a/b/");
    base.pass("../", "http://a/b/");
    base.pass("../g", "http://a/b/g");
    base.pass("../..", "http://a/");
    base.pass("../../", "http://a/");
    base.pass("../../g", "http://a/g");

    base.pass("/./g", "http://a/g");
    base.pass("g.", "http://a/b/c/g.");
    base.pass(".g", "http://a/b/c/.g");
    base.pass("g..", "http://a/b/c/g..");
    base.pass("..g", "http://a/b/c/..g");

    base.pass("./../g", "http://a/b/g");
    base.pass("./g/.", "http://a/b/c/g/");
    base.pass("g/./h", "http://a/b/c/g/h");
    base.pass("g/../h", "http://a/b/c/h");
    base.pass("g;x=1/./y", "http://a/b/c/g;x=1/y");
    base.pass("g;x=1/../y", "http://a/b/c/y");

    base.pass("g?y/./x", "http://a/b/c/g?y/./x");
    base.pass("g?y/../x", "http://a/b/c/g?y/../x");
    base.pass("g#s/./x", "http://a/b/c/g#s/./x");
    base.pass("g#s/../x", "http://a/b/c/g#s/../x");

    base.pass("http:g", "http:g");

    // A reference with a scheme keeps everything but dot segments.
    base.pass("http:/a/../b?q#f", "http:/b?q#f");
    base.pass("foo:a/../b", "foo:a/../b");

    // A reference with an authority replaces everything but the scheme.
    base.pass("//g/./h/../i?j", "http://g/i?j");
    base.pass("//user@g:81", "http://user@g:81");

    // Non-hierarchical base URI.
    let base = UriRef::parse("foo:bar").unwrap();

    base.pass("", "foo:bar");
    base.pass("#baz", "foo:bar#baz");
    base.pass("?baz", "foo:bar?baz");
    base.pass("baz", "foo:baz");
    base.pass("http://example.com/", "http://example.com/");
    base.pass("foo:baz", "foo:baz");
    base.pass("bar:baz", "bar:baz");

    // Base with an authority and an empty path.
    let base = UriRef::parse("http://a?q").unwrap();
    base.pass("", "http://a?q");
    base.pass("g", "http://a/g");
    base.pass("./g", "http://a/g");

    let base = UriRef::parse("foo:/").unwrap();
    // A path starting with "//" is guarded against being taken for an authority.
    base.pass(".//@@", "foo:/.//@@");

    let base = UriRef::parse("foo:/bar/baz/.%2E/").unwrap();
    base.pass("..", "foo:/");

    // The last segment of the base path is replaced, even when it is "..".
    let base = UriRef::parse("foo:/bar/..").unwrap();
    base.pass(".", "foo:/bar/");
    base.pass("g", "foo:/bar/g");

    let base = base.normalize();
    base.borrow().pass(".", "foo:/");
}

#[test]
fn base_path_is_inherited_unchanged() {
    let base = UriRef::parse("http://a/b/../c?q").unwrap();
    base.pass("", "http://a/b/../c?q");
    base.pass("#s", "http://a/b/../c?q#s");
    base.pass("?y", "http://a/b/../c?y");
    base.pass("g", "http://a/g");

    let base = UriRef::parse("foo:/a/./%2E%2E/b").unwrap();
    base.pass("", "foo:/a/./%2E%2E/b");
    base.pass("#f", "foo:/a/./%2E%2E/b#f");
}

#[test]
fn rootless_base() {
    // Dot segments climbing above a rootless base path are dropped,
    // and the output path stays rootless.
    let base = UriRef::parse("foo:a/b").unwrap();
    base.pass("g", "foo:a/g");
    base.pass("../g", "foo:g");
    assert_eq!(
        UriRef::parse("../../g").unwrap().resolve_against(&base).unwrap(),
        "foo:g"
    );
    assert_eq!(
        Resolver::with_base(base)
            .allow_path_underflow(false)
            .resolve(&UriRef::parse("../../g").unwrap())
            .unwrap_err(),
        ResolveError::PathUnderflow
    );
}

#[test]
fn base_fragment_is_ignored() {
    let base = UriRef::parse("http://example.com/a#title1").unwrap();
    base.pass("foo", "http://example.com/foo");
    base.pass("", "http://example.com/a");
    base.pass("#title2", "http://example.com/a#title2");
}

#[test]
fn resolve_error() {
    for base in ["", "/a/b", "//example.com/a", "a/b?q#f"] {
        let base = UriRef::parse(base).unwrap();
        base.fail("g", ResolveError::RequiresAbsoluteBase);
        base.fail("http://a/", ResolveError::RequiresAbsoluteBase);
    }
}

#[test]
fn resolve_underflow() {
    let base = UriRef::parse("http://a/b/c/d;p?q").unwrap();
    for (r, expected) in [
        ("../../../g", "http://a/g"),
        ("../../../../g", "http://a/g"),
        ("/../g", "http://a/g"),
        ("//x/../g", "http://x/g"),
    ] {
        let r = UriRef::parse(r).unwrap();
        assert_eq!(r.resolve_against(&base).unwrap(), expected);

        let resolver = Resolver::with_base(base).allow_path_underflow(true);
        assert_eq!(resolver.resolve(&r).unwrap(), expected);

        let resolver = Resolver::with_base(base).allow_path_underflow(false);
        assert_eq!(
            resolver.resolve(&r).unwrap_err(),
            ResolveError::PathUnderflow
        );
    }

    // An underflow while merging with the base path counts too.
    let base = UriRef::parse("http://a/../b").unwrap();
    let resolver = Resolver::with_base(base).allow_path_underflow(false);
    assert_eq!(
        resolver.resolve(&UriRef::parse("g").unwrap()).unwrap_err(),
        ResolveError::PathUnderflow
    );
    assert_eq!(
        UriRef::parse("g").unwrap().resolve_against(&base).unwrap(),
        "http://a/g"
    );

    // An inherited base path is not touched, so nothing underflows.
    let base = UriRef::parse("http://a/..").unwrap();
    let resolver = Resolver::with_base(base).allow_path_underflow(false);
    assert_eq!(
        resolver.resolve(&UriRef::parse("").unwrap()).unwrap(),
        "http://a/.."
    );
}

#[test]
fn resolved_components() {
    let base = UriRef::parse("http://user@a:8080/b/c?q#f").unwrap();

    let t = UriRef::parse("../d?x").unwrap().resolve_against(&base).unwrap();
    assert_eq!(t, "http://user@a:8080/d?x");
    assert_eq!(t.scheme().unwrap().as_str(), "http");
    let a = t.authority().unwrap();
    assert_eq!(a.userinfo(), Some("user"));
    assert_eq!(a.host(), "a");
    assert_eq!(a.port(), Some("8080"));
    assert_eq!(t.path(), "/d");
    assert_eq!(t.query(), Some("x"));
    assert_eq!(t.fragment(), None);

    let t = UriRef::parse("//[::1]:1/p").unwrap().resolve_against(&base).unwrap();
    assert_eq!(t, "http://[::1]:1/p");
    assert_eq!(t.authority().unwrap().host(), "[::1]");
    assert_eq!(t.authority().unwrap().port(), Some("1"));

    // The output parses back to the same components.
    let reparsed = UriRef::parse(t.as_str()).unwrap();
    assert_eq!(reparsed.path_span(), t.path_span());
    assert_eq!(reparsed.authority_span(), t.authority_span());
}

#[test]
fn resolve_then_normalize() {
    // Normalizing before or after resolution gives the same result.
    let base = UriRef::parse("HTTP://A/b/c/%2E%2E/d").unwrap();
    for r in ["g", "../g", "./%2e/g/", "?y", "#s", "//H/./x", ""] {
        let r = UriRef::parse(r).unwrap();
        let a = r.resolve_against(&base).unwrap().normalize();
        let b = r.resolve_against(&base.normalize()).unwrap().normalize();
        assert_eq!(a, b);
    }
}
