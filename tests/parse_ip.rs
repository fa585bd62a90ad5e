use std::net::{Ipv4Addr, Ipv6Addr};

use strict_uri::{
    component::Host,
    ip::{self, AddrErrorReason, AddrKind},
    ParseErrorKind, Production, UriRef,
};

fn host_v4(s: &str) -> Option<Ipv4Addr> {
    let s = format!("//{s}");
    match UriRef::parse(s.as_str()).ok()?.authority()?.host_parsed() {
        Host::Ipv4(addr) => Some(addr),
        _ => None,
    }
}

fn host_v6(s: &str) -> Option<Ipv6Addr> {
    let s = format!("//[{s}]");
    match UriRef::parse(s.as_str()).ok()?.authority()?.host_parsed() {
        Host::Ipv6(lit) => Some(lit.addr()),
        _ => None,
    }
}

#[track_caller]
fn pass_v6(s: &str) -> Ipv6Addr {
    let addr = ip::parse_v6(s).map(Ipv6Addr::from);
    assert_eq!(addr.ok(), host_v6(s), "{s}");
    let wide: Vec<u16> = s.encode_utf16().collect();
    assert_eq!(ip::parse_v6_wide(&wide).map(Ipv6Addr::from), addr, "{s}");
    addr.unwrap_or_else(|e| panic!("{s}: {e}"))
}

#[track_caller]
fn fail_v6(s: &str) -> AddrErrorReason {
    assert_eq!(host_v6(s), None, "{s}");
    let e = ip::parse_v6(s).expect_err(s);
    assert_eq!(e.kind(), AddrKind::Ipv6);
    e.reason()
}

#[test]
fn test_parse_v4() {
    assert_eq!(ip::parse_v4("127.0.0.1"), Ok(Ipv4Addr::new(127, 0, 0, 1)));
    assert_eq!(host_v4("127.0.0.1"), Some(Ipv4Addr::new(127, 0, 0, 1)));
    assert_eq!(host_v4("255.255.255.255"), Some(Ipv4Addr::BROADCAST));
    assert_eq!(host_v4("0.0.0.0"), Some(Ipv4Addr::UNSPECIFIED));

    // A failed IPv4 address is still a valid reg-name.
    for s in [
        "256.0.0.1",
        "255.0.0",
        "255.0.0.1.2",
        "255.0..1",
        "255.0.0.01",
        "255.0.0.00",
        "255.0.00.0",
        ".0.0.0.0",
        "0.0.0.0.",
    ] {
        assert!(ip::parse_v4(s).is_err(), "{s}");
        assert_eq!(host_v4(s), None, "{s}");
        assert!(UriRef::parse(format!("//{s}").as_str()).is_ok(), "{s}");
    }

    let wide: Vec<u16> = "10.0.0.1".encode_utf16().collect();
    assert_eq!(ip::parse_v4_wide(&wide), Ok(Ipv4Addr::new(10, 0, 0, 1)));
}

#[test]
fn test_parse_v6() {
    // Minimum
    assert_eq!(pass_v6("::"), Ipv6Addr::UNSPECIFIED);

    // Group length
    assert_eq!(pass_v6("::1"), Ipv6Addr::LOCALHOST);
    assert_eq!(pass_v6("::12"), Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0x12));
    assert_eq!(pass_v6("::123"), Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0x123));
    assert_eq!(pass_v6("::1234"), Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0x1234));

    // Compression at the ends and in the middle
    assert_eq!(pass_v6("::1:2"), Ipv6Addr::new(0, 0, 0, 0, 0, 0, 1, 2));
    assert_eq!(pass_v6("2:1::"), Ipv6Addr::new(2, 1, 0, 0, 0, 0, 0, 0));
    assert_eq!(pass_v6("1::"), Ipv6Addr::new(1, 0, 0, 0, 0, 0, 0, 0));
    assert_eq!(pass_v6("1::2"), Ipv6Addr::new(1, 0, 0, 0, 0, 0, 0, 2));

    // Full length
    let addr = Ipv6Addr::new(0x2001, 0xdb8, 0x100, 0xf101, 0x210, 0xa4ff, 0xfee3, 0x9566);
    assert_eq!(pass_v6("2001:0db8:0100:f101:0210:a4ff:fee3:9566"), addr);
    assert_eq!(pass_v6("2001:0DB8:0100:F101:0210:A4FF:FEE3:9566"), addr);
    assert_eq!(pass_v6("2001:db8:100:f101:210:a4ff:fee3:9566"), addr);
    assert_eq!(
        pass_v6("2001:0db8:100:f101:0:0:0:1"),
        Ipv6Addr::new(0x2001, 0xdb8, 0x100, 0xf101, 0, 0, 0, 1)
    );

    // Embedded IPv4
    assert_eq!(pass_v6("0::1.2.3.4"), Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0x102, 0x304));
    assert_eq!(
        pass_v6("::ffff:1.2.3.4"),
        Ipv4Addr::new(1, 2, 3, 4).to_ipv6_mapped()
    );
    assert_eq!(pass_v6("::0.0.0.0"), Ipv6Addr::UNSPECIFIED);
    assert_eq!(
        pass_v6("::255.255.255.255"),
        Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0xffff, 0xffff)
    );
    assert_eq!(
        pass_v6("::ffff:255.255.255.255"),
        Ipv4Addr::BROADCAST.to_ipv6_mapped()
    );

    // A few more variations
    assert_eq!(pass_v6("21ff:abcd::1"), Ipv6Addr::new(0x21ff, 0xabcd, 0, 0, 0, 0, 0, 1));
    pass_v6("2001:db8:100:f101::1");
    pass_v6("a:b:c::0:1");
    pass_v6("a:b::0:1:2:3");
}

#[test]
fn test_parse_v6_fail() {
    use AddrErrorReason::*;

    // Five-digit group
    assert_eq!(fail_v6("::12345"), GroupTooLong);

    // Two compressions
    assert_eq!(fail_v6("abcd::abcd::abcd"), MultipleCompressions);
    assert_eq!(fail_v6("::6::8"), MultipleCompressions);

    // Triple colons
    assert_eq!(fail_v6(":::1234"), MisplacedColon);
    assert_eq!(fail_v6("1234:::1234:1234"), MisplacedColon);
    assert_eq!(fail_v6("1234:1234:::1234"), MisplacedColon);
    assert_eq!(fail_v6("1234:::"), MisplacedColon);

    // No groups, just IPv4
    assert_eq!(fail_v6("1.2.3.4"), TooFewGroups);
    assert_eq!(fail_v6("0001.0002.0003.0004"), LeadingZero);

    // Five groups and IPv4
    assert_eq!(fail_v6("0000:0000:0000:0000:0000:1.2.3.4"), TooFewGroups);

    // Seven groups
    assert_eq!(fail_v6("0:0:0:0:0:0:0"), TooFewGroups);
    assert_eq!(fail_v6("0:0:0:0:0:0:0:"), MisplacedColon);
    assert_eq!(fail_v6("0:0:0:0:0:0:0:1.2.3.4"), TooManyGroups);

    // Nine groups
    assert_eq!(fail_v6("0:0:0:0:0:0:0:0:0"), TooManyGroups);

    // Invalid IPv4 part
    assert_eq!(fail_v6("::ffff:001.02.03.004"), LeadingZero);
    assert_eq!(fail_v6("::ffff:1.2.3.1111"), OctetOutOfRange);
    assert_eq!(fail_v6("::ffff:1.2.3.256"), OctetOutOfRange);
    assert_eq!(fail_v6("::ffff:311.2.3.4"), OctetOutOfRange);
    assert_eq!(fail_v6("::ffff:1.2.3:4"), InvalidChar);
    assert_eq!(fail_v6("::ffff:1.2.3"), TooFewGroups);
    assert_eq!(fail_v6("::ffff:1.2.3."), TooFewGroups);
    assert_eq!(fail_v6("::ffff:1.2.3a.4"), InvalidChar);
    assert_eq!(fail_v6("::ffff:1.2.3.4:123"), TrailingInput);

    // Non-hexadecimal digit
    assert_eq!(fail_v6("g:0:0:0:0:0:0"), InvalidChar);

    // Leading and trailing colons
    assert_eq!(fail_v6(":1:2:3:4:5:6:7:8"), MisplacedColon);
    assert_eq!(fail_v6(":1::1"), MisplacedColon);
    assert_eq!(fail_v6("1::1:"), MisplacedColon);
    assert_eq!(fail_v6("1:"), MisplacedColon);
    assert_eq!(fail_v6(":"), MisplacedColon);
}

#[test]
fn compression_must_elide_a_group() {
    use AddrErrorReason::*;

    assert_eq!(fail_v6("::1:2:3:4:5:6:7:8"), RedundantCompression);
    assert_eq!(fail_v6("1:2:3:4::5:6:7:8"), RedundantCompression);
    assert_eq!(fail_v6("1:2:3:4:5:6:7:8::"), TooManyGroups);
    assert_eq!(fail_v6("::1:2:3:4:5:6:1.2.3.4"), RedundantCompression);

    assert_eq!(pass_v6("::2:3:4:5:6:7:8"), Ipv6Addr::new(0, 2, 3, 4, 5, 6, 7, 8));
    assert_eq!(pass_v6("1:2:3:4:5:6:7::"), Ipv6Addr::new(1, 2, 3, 4, 5, 6, 7, 0));
    assert_eq!(pass_v6("::2:3:4:5:6:1.2.3.4"), Ipv6Addr::new(0, 2, 3, 4, 5, 6, 0x102, 0x304));
}

#[test]
fn error_index() {
    let e = ip::parse_v6("1:2::3::4").unwrap_err();
    assert_eq!(e.index(), 6);

    let e = ip::parse_v6("::ffff:1.2.3.256").unwrap_err();
    assert_eq!(e.index(), 13);

    // Indexes within a URI are relative to the whole input.
    let e = UriRef::parse("http://[::ffff:1.2.3.256]/").unwrap_err();
    assert_eq!(e.production(), Production::IpLiteral);
    assert_eq!(e.index(), 21);
    let ParseErrorKind::InvalidIpLiteral(addr_err) = e.kind() else {
        panic!("unexpected error kind: {:?}", e.kind());
    };
    assert_eq!(addr_err.index(), 21);
    assert_eq!(addr_err.reason(), AddrErrorReason::OctetOutOfRange);
}
