#![no_main]
use libfuzzer_sys::fuzz_target;
use strict_uri::UriRef;

fuzz_target!(|data: &str| {
    let units: Vec<u16> = data.encode_utf16().collect();
    match (UriRef::parse(data), UriRef::parse(&units[..])) {
        (Ok(narrow), Ok(wide)) => {
            assert_eq!(narrow, wide);
            assert_eq!(narrow.path_span(), wide.path_span());
            assert_eq!(
                narrow.authority().map(|a| a.host_parsed()),
                wide.authority().map(|a| a.host_parsed())
            );
        }
        // Indexes only agree up to the first non-ASCII character.
        (Err(narrow), Err(wide)) if data.is_ascii() => assert_eq!(narrow, wide),
        (Err(_), Err(_)) => {}
        (narrow, wide) => panic!("{narrow:?} != {wide:?}"),
    }
});
