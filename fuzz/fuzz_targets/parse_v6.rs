#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::Ipv6Addr;
use std::str::FromStr;
use strict_uri::{component::Host, ip, UriRef};

fuzz_target!(|data: &str| {
    let addr = ip::parse_v6(data).ok().map(Ipv6Addr::from);
    assert_eq!(addr, Ipv6Addr::from_str(data).ok());
    assert_eq!(addr, parse_v6_in_uri(data));
});

fn parse_v6_in_uri(s: &str) -> Option<Ipv6Addr> {
    let s = format!("//[{s}]");
    match UriRef::parse(s.as_str()).ok()?.authority()?.host_parsed() {
        Host::Ipv6(lit) => Some(lit.addr()),
        _ => None,
    }
}
