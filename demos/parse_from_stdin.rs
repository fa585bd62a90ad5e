use std::io;
use strict_uri::UriRef;

fn main() {
    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        match UriRef::parse(line.as_str()) {
            Ok(r) => {
                println!("{r:#?}");
                println!("normalized: {}", r.normalize());
            }
            Err(e) => println!("Error: {e}"),
        };
    }
}
