//! Character classification tables and percent-encoding helpers from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234]. They are plain `const` data, built
//! once at compile time and shared by every parse.
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

use core::str;

const MASK_PCT_ENCODED: u64 = 1 << b'%';
const MASK_UNENCODED_LO: u64 = !MASK_PCT_ENCODED;

/// A table specifying the characters allowed in a component.
///
/// Only ASCII characters can be allowed. The bit for `%` is reused
/// to mark whether percent-encoded octets are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Marks this table as allowing percent-encoded octets.
    #[must_use]
    pub const fn or_pct_encoded(self) -> Self {
        Self(self.0 | MASK_PCT_ENCODED, self.1)
    }

    /// Checks whether the table is a subset of another.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given unencoded byte is allowed by the table.
    ///
    /// Always returns `false` for `b'%'` and non-ASCII bytes.
    #[inline]
    #[must_use]
    pub const fn allows(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0 & MASK_UNENCODED_LO
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether percent-encoded octets are allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows_pct_encoded(self) -> bool {
        self.0 & MASK_PCT_ENCODED != 0
    }

    /// Validates the given string with the table.
    #[must_use]
    pub const fn validate(self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            let x = s[i];
            if x == b'%' && self.allows_pct_encoded() {
                if i + 2 >= s.len() || !is_hexdig_pair(s[i + 1], s[i + 2]) {
                    return false;
                }
                i += 3;
            } else {
                if !self.allows(x) {
                    return false;
                }
                i += 1;
            }
        }
        true
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":")).or_pct_encoded();

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub const REG_NAME: Table = UNRESERVED.or(SUB_DELIMS).or_pct_encoded();

/// `port = *DIGIT`
pub const PORT: Table = DIGIT;

/// `path = *( pchar / "/" )`
pub const PATH: Table = PCHAR.or(new(b"/"));

/// `segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )`
pub const SEGMENT_NZ_NC: Table = UNRESERVED.or(SUB_DELIMS).or(new(b"@")).or_pct_encoded();

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub const PCHAR: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@")).or_pct_encoded();

/// `query = *( pchar / "/" / "?" )`
pub const QUERY: Table = PCHAR.or(new(b"/?"));

/// `fragment = *( pchar / "/" / "?" )`
pub const FRAGMENT: Table = QUERY;

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

const fn gen_hex_table() -> [u8; 256] {
    let mut out = [0xff; 256];
    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i;
        out[(i - 10 + b'a') as usize] = i;
        i += 1;
    }
    out
}

const HEX_TABLE: &[u8; 256] = &gen_hex_table();

/// Returns the value of a hexadecimal digit.
#[inline]
#[must_use]
pub const fn decode_hexdigit(x: u8) -> Option<u8> {
    match HEX_TABLE[x as usize] {
        0xff => None,
        v => Some(v),
    }
}

/// Checks whether a byte is a hexadecimal digit.
#[inline]
#[must_use]
pub const fn is_hexdig(x: u8) -> bool {
    HEX_TABLE[x as usize] != 0xff
}

/// Checks whether two bytes form the hexadecimal part of a `pct-encoded` triplet.
#[inline]
#[must_use]
pub const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    is_hexdig(hi) && is_hexdig(lo)
}

/// Checks whether the bytes start with a complete `pct-encoded` triplet.
#[inline]
#[must_use]
pub const fn is_pct_encoded(s: &[u8]) -> bool {
    matches!(s, [b'%', hi, lo, ..] if is_hexdig_pair(*hi, *lo))
}

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
pub(crate) const fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(is_hexdig_pair(hi, lo));
    (HEX_TABLE[hi as usize] << 4) | HEX_TABLE[lo as usize]
}

/// Returns the `pct-encoded` triplet of a byte with uppercase hexadecimal digits.
#[must_use]
pub fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_partition_reserved() {
        for x in 0..=u8::MAX {
            assert_eq!(
                RESERVED.allows(x),
                GEN_DELIMS.allows(x) || SUB_DELIMS.allows(x)
            );
            assert!(!(GEN_DELIMS.allows(x) && SUB_DELIMS.allows(x)));
            assert!(!(UNRESERVED.allows(x) && RESERVED.allows(x)));
        }
        assert!(SUB_DELIMS.is_subset(PCHAR));
        assert!(!GEN_DELIMS.is_subset(PCHAR));
        assert!(PCHAR.is_subset(QUERY));
    }

    #[test]
    fn percent_sign_is_never_unencoded() {
        assert!(PATH.allows_pct_encoded());
        assert!(!PATH.allows(b'%'));
        assert!(!SCHEME.allows_pct_encoded());
        assert!(!PATH.allows(b' '));
        assert!(!PATH.allows(0xe9));
    }

    #[test]
    fn validate_pct_encoded() {
        assert!(PATH.validate(b"/name%20with%20spaces/"));
        assert!(!PATH.validate(b"/name with spaces/"));
        assert!(!PATH.validate(b"%2"));
        assert!(!PATH.validate(b"%"));
        assert!(!PATH.validate(b"%G0"));
        assert!(!SCHEME.validate(b"a%20"));
        assert!(PORT.validate(b"8042"));
        assert!(PORT.validate(b""));
        assert!(!PORT.validate(b"80ab"));
        assert!(!PORT.validate(b"%38"));
    }

    #[test]
    fn hex_helpers() {
        assert_eq!(decode_hexdigit(b'f'), Some(15));
        assert_eq!(decode_hexdigit(b'F'), Some(15));
        assert_eq!(decode_hexdigit(b'g'), None);
        assert_eq!(decode_octet(b'7', b'e'), b'~');
        assert!(is_pct_encoded(b"%41rest"));
        assert!(!is_pct_encoded(b"%4"));
        assert_eq!(encode_byte(b' '), "%20");
        assert_eq!(encode_byte(0xab), "%AB");
    }
}
