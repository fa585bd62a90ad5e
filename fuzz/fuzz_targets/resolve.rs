#![no_main]
use libfuzzer_sys::fuzz_target;
use strict_uri::{resolve::Resolver, UriRef};

fuzz_target!(|data: (&str, &str, bool)| {
    let (Ok(base), Ok(r)) = (UriRef::parse(data.0), UriRef::parse(data.1)) else {
        return;
    };

    let resolver = Resolver::with_base(base).allow_path_underflow(data.2);
    let Ok(u1) = resolver.resolve(&r) else {
        return;
    };
    assert!(base.has_scheme());
    let u2 = UriRef::parse(u1.as_str()).unwrap();

    assert_eq!(
        u1.scheme().map(|s| s.as_str()),
        u2.scheme().map(|s| s.as_str())
    );
    assert_eq!(u1.authority().is_some(), u2.authority().is_some());

    if let Some(a1) = u1.authority() {
        let a2 = u2.authority().unwrap();
        assert_eq!(a1.as_str(), a2.as_str());
        assert_eq!(a1.userinfo(), a2.userinfo());
        assert_eq!(a1.host(), a2.host());
        assert_eq!(a1.host_parsed(), a2.host_parsed());
        assert_eq!(a1.port(), a2.port());
    }

    assert_eq!(u1.path(), u2.path());
    assert_eq!(u1.query(), u2.query());
    assert_eq!(u1.fragment(), u2.fragment());
    assert_eq!(u1.recompose(), u1.as_str());
});
