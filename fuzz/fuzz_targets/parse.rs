#![no_main]
use libfuzzer_sys::fuzz_target;
use strict_uri::UriRef;

fuzz_target!(|data: &str| {
    let Ok(r) = UriRef::parse(data) else {
        return;
    };
    let mut buf = String::with_capacity(data.len());
    if let Some(s) = r.scheme() {
        buf.push_str(s.as_str());
        buf.push(':');
    }
    if let Some(a) = r.authority() {
        buf.push_str("//");
        let start = buf.len();
        if let Some(ui) = a.userinfo() {
            buf.push_str(ui);
            buf.push('@');
        }
        buf.push_str(a.host());
        if let Some(p) = a.port() {
            buf.push(':');
            buf.push_str(p);
        }
        assert_eq!(&buf[start..], a.as_str());
        assert_eq!(&data[a.host_span().start..a.host_span().end], a.host());
    }
    buf.push_str(r.path());
    if let Some(q) = r.query() {
        buf.push('?');
        buf.push_str(q);
    }
    if let Some(f) = r.fragment() {
        buf.push('#');
        buf.push_str(f);
    }
    assert_eq!(data, buf);
    assert_eq!(r.recompose(), data);
});
