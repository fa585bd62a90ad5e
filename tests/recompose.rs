use strict_uri::UriRef;

const CASES: &[&str] = &[
    "",
    "#",
    "?",
    "//",
    "a:",
    "a://",
    "http://www.example.com/",
    "http://www.example.com/name%20with%20spaces/",
    "http://sourceforge.net/project/platformdownload.php?group_id=182840",
    "mailto:test@example.com",
    "../../",
    "file:///bin/bash",
    "foo://user:pass@[2001:db8::7]:8042/over/there?name=ferret#nose",
    "foo://@:/",
    "//127.0.0.1:80",
    "./this:that",
    "/a//b/./../c",
    "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
    "foo:/.//@@",
    "HTTP://EXAMPLE.COM:/%7e?%3f#%2F",
];

#[test]
fn round_trip() {
    for &s in CASES {
        let r = UriRef::parse(s).unwrap();
        assert_eq!(r.recompose(), s);
        assert_eq!(r.to_string(), s);
    }
}

#[test]
fn round_trip_after_normalize_and_resolve() {
    let base = UriRef::parse("http://a/b/c/d;p?q").unwrap();
    for &s in CASES {
        let r = UriRef::parse(s).unwrap();

        let n = r.normalize();
        assert_eq!(n.recompose(), n.as_str());

        let t = r.resolve_against(&base).unwrap();
        assert_eq!(t.recompose(), t.as_str());
    }
}

#[test]
fn components_recompose_to_the_input() {
    for &s in CASES {
        let r = UriRef::parse(s).unwrap();

        let mut buf = String::new();
        if let Some(scheme) = r.scheme() {
            buf.push_str(scheme.as_str());
            buf.push(':');
        }
        if let Some(authority) = r.authority() {
            buf.push_str("//");
            if let Some(userinfo) = authority.userinfo() {
                buf.push_str(userinfo);
                buf.push('@');
            }
            buf.push_str(authority.host());
            if let Some(port) = authority.port() {
                buf.push(':');
                buf.push_str(port);
            }
        }
        buf.push_str(r.path());
        if let Some(query) = r.query() {
            buf.push('?');
            buf.push_str(query);
        }
        if let Some(fragment) = r.fragment() {
            buf.push('#');
            buf.push_str(fragment);
        }
        assert_eq!(buf, s);
    }
}
