use strict_uri::UriRef;

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn narrow_and_wide_agree() {
    let cases = [
        "http://www.example.com/",
        "http://www.example.com/name%20with%20spaces/",
        "http://www.example.com/name with spaces/",
        "http://sourceforge.net/projects/uriparser/",
        "mailto:test@example.com",
        "../../",
        "file:///bin/bash",
        "foo://user@[::ffff:1.2.3.4]:8042/over/there?name=ferret#nose",
        "http://[::ffff:1.2.3.256]/",
        "http://[1:2::3::4]/",
        "http://example.com:80ab",
        "exam=ple:foo",
        "text%a",
        "//127.0.0.1",
        "",
    ];

    for s in cases {
        let units = wide(s);
        match (UriRef::parse(s), UriRef::parse(&units[..])) {
            (Ok(narrow), Ok(wide)) => {
                assert_eq!(wide, narrow);
                assert_eq!(wide.scheme_span(), narrow.scheme_span());
                assert_eq!(wide.authority_span(), narrow.authority_span());
                assert_eq!(wide.path_span(), narrow.path_span());
                assert_eq!(wide.query_span(), narrow.query_span());
                assert_eq!(wide.fragment_span(), narrow.fragment_span());
                assert_eq!(
                    wide.authority().map(|a| a.host_parsed()),
                    narrow.authority().map(|a| a.host_parsed()),
                );
            }
            (Err(narrow), Err(wide)) => assert_eq!(wide, narrow, "{s}"),
            (narrow, wide) => panic!("{s}: {narrow:?} != {wide:?}"),
        }
    }
}

#[test]
fn non_ascii_units_are_rejected() {
    // U+00E9 fits in a byte but is not allowed anywhere.
    let e = UriRef::parse(&wide("http://caf\u{e9}.example/")[..]).unwrap_err();
    assert_eq!(e.index(), 10);
    assert_eq!(UriRef::parse("http://caf\u{e9}.example/").unwrap_err().index(), 10);

    // U+012F does not fit in a byte, and its low byte "/" must not leak through.
    let e = UriRef::parse(&wide("a\u{12f}b")[..]).unwrap_err();
    assert_eq!(e.index(), 1);

    // U+FF1A FULLWIDTH COLON is not a colon.
    let e = UriRef::parse(&wide("http\u{ff1a}//a")[..]).unwrap_err();
    assert_eq!(e.index(), 4);

    // Unpaired surrogates are just units outside the grammar.
    let e = UriRef::parse(&[b'a' as u16, 0xd800][..]).unwrap_err();
    assert_eq!(e.index(), 1);
}

#[test]
fn wide_output_is_owned() {
    let units = wide("HTTP://Example.COM:80/a/../b");
    let r: UriRef<String> = UriRef::parse(&units[..]).unwrap();
    assert_eq!(r.normalize(), "http://example.com/b");
    assert_eq!(r.recompose(), "HTTP://Example.COM:80/a/../b");
}

#[test]
fn wide_ip_literals() {
    use std::net::{Ipv4Addr, Ipv6Addr};
    use strict_uri::ip::{self, AddrErrorReason};

    assert_eq!(ip::parse_v4_wide(&wide("192.0.2.1")), Ok(Ipv4Addr::new(192, 0, 2, 1)));
    assert_eq!(
        ip::parse_v4_wide(&wide("192.0.2.01")).unwrap_err().reason(),
        AddrErrorReason::LeadingZero
    );

    let lit = ip::parse_v6_wide(&wide("::ffff:1.2.3.4")).unwrap();
    assert_eq!(lit.addr(), Ipv4Addr::new(1, 2, 3, 4).to_ipv6_mapped());
    assert_eq!(ip::parse_v6_wide(&wide("::1")).unwrap().addr(), Ipv6Addr::LOCALHOST);

    let e = ip::parse_v6_wide(&wide("1::\u{ff1a}2")).unwrap_err();
    assert_eq!(e.reason(), AddrErrorReason::InvalidChar);
    assert_eq!(e.index(), 3);
}
