//! IP literal address validation.
//!
//! [`parse_v4`] matches exactly the `IPv4address` rule and [`parse_v6`] matches
//! exactly the `IPv6address` rule of [RFC 3986], with no surrounding characters.
//! Both fail fast at the first violating offset.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2

use crate::{
    table::decode_hexdigit,
    unit::{CodeUnit, Reader},
};
use alloc::string::{String, ToString};
use core::{
    hash::{Hash, Hasher},
    net::{Ipv4Addr, Ipv6Addr},
};

/// The kind of an IP literal address.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AddrKind {
    /// An IPv4 address.
    Ipv4,
    /// An IPv6 address, possibly with an embedded IPv4 tail.
    Ipv6,
}

/// Detailed cause of an [`AddrError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AddrErrorReason {
    /// A character that is neither a digit nor a separator expected at this point.
    InvalidChar,
    /// A hextet with more than four hexadecimal digits.
    GroupTooLong,
    /// A decimal octet greater than 255.
    OctetOutOfRange,
    /// A decimal octet with a leading zero, such as `01`.
    LeadingZero,
    /// Fewer than four octets, or fewer than eight hextets without `::`.
    TooFewGroups,
    /// More than four octets, or more than eight hextets.
    TooManyGroups,
    /// More than one `::`.
    MultipleCompressions,
    /// A `::` that elides no hextet at all.
    RedundantCompression,
    /// A leading, trailing or tripled colon.
    MisplacedColon,
    /// Characters after a complete embedded IPv4 address.
    TrailingInput,
}

/// An error occurred when validating an IP literal address.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AddrError {
    pub(crate) kind: AddrKind,
    pub(crate) reason: AddrErrorReason,
    pub(crate) index: usize,
}

impl AddrError {
    /// Returns the kind of address that was being validated.
    #[must_use]
    pub fn kind(&self) -> AddrKind {
        self.kind
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn reason(&self) -> AddrErrorReason {
        self.reason
    }

    /// Returns the index at which the error occurred.
    ///
    /// When the error is part of a [`ParseError`](crate::ParseError),
    /// the index is relative to the whole input.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for AddrError {}

/// A validated IPv6 address along with how it was written.
///
/// Literals compare and hash by address only, so `::1` equals `0:0:0:0:0:0:0:1`.
#[derive(Clone, Copy, Debug)]
pub struct Ipv6Literal {
    addr: Ipv6Addr,
    compressed: bool,
}

impl Ipv6Literal {
    /// Returns the address.
    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// Checks whether the address was written with a `::`.
    #[must_use]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

impl PartialEq for Ipv6Literal {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl Eq for Ipv6Literal {}

impl Hash for Ipv6Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr.hash(state);
    }
}

impl Ipv6Literal {
    /// Appends the address in the canonical text form of [RFC 5952] and
    /// returns the literal describing what was written.
    ///
    /// [RFC 5952]: https://datatracker.ietf.org/doc/html/rfc5952#section-4
    pub(crate) fn write_canonical(self, buf: &mut String) -> Ipv6Literal {
        let start = buf.len();
        buf.push_str(&self.addr.to_string());
        Ipv6Literal {
            addr: self.addr,
            compressed: buf[start..].contains("::"),
        }
    }
}

impl From<Ipv6Literal> for Ipv6Addr {
    #[inline]
    fn from(lit: Ipv6Literal) -> Self {
        lit.addr
    }
}

type Result<T> = core::result::Result<T, AddrError>;

/// Returns immediately with an error.
macro_rules! err {
    ($kind:ident, $index:expr, $reason:ident) => {
        return Err(AddrError {
            kind: AddrKind::$kind,
            reason: AddrErrorReason::$reason,
            index: $index,
        })
    };
}

/// Parses an IPv4 address in dotted-decimal form.
///
/// # Errors
///
/// Returns `Err` if the string does not match the `IPv4address` rule.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use strict_uri::ip::{self, AddrErrorReason};
///
/// assert_eq!(ip::parse_v4("192.0.2.16"), Ok(Ipv4Addr::new(192, 0, 2, 16)));
/// assert_eq!(ip::parse_v4("192.0.2.016").unwrap_err().reason(), AddrErrorReason::LeadingZero);
/// ```
pub fn parse_v4(s: &str) -> Result<Ipv4Addr> {
    parse_v4_units(s.as_bytes())
}

/// Parses an IPv4 address in dotted-decimal form from wide text.
///
/// # Errors
///
/// Returns `Err` if the text does not match the `IPv4address` rule.
pub fn parse_v4_wide(s: &[u16]) -> Result<Ipv4Addr> {
    parse_v4_units(s)
}

/// Parses an IPv6 address, taken from between the square brackets of an IP literal.
///
/// # Errors
///
/// Returns `Err` if the string does not match the `IPv6address` rule.
///
/// # Examples
///
/// ```
/// use std::net::Ipv6Addr;
/// use strict_uri::ip::{self, AddrErrorReason};
///
/// let lit = ip::parse_v6("::1").unwrap();
/// assert_eq!(lit.addr(), Ipv6Addr::LOCALHOST);
/// assert!(lit.is_compressed());
///
/// let e = ip::parse_v6("abcd::abcd::abcd").unwrap_err();
/// assert_eq!(e.reason(), AddrErrorReason::MultipleCompressions);
/// ```
pub fn parse_v6(s: &str) -> Result<Ipv6Literal> {
    parse_v6_units(s.as_bytes())
}

/// Parses an IPv6 address from wide text, taken from between the square brackets.
///
/// # Errors
///
/// Returns `Err` if the text does not match the `IPv6address` rule.
pub fn parse_v6_wide(s: &[u16]) -> Result<Ipv6Literal> {
    parse_v6_units(s)
}

fn parse_v4_units<C: CodeUnit>(s: &[C]) -> Result<Ipv4Addr> {
    let mut reader = Reader::new(s);
    let addr = read_v4(&mut reader, AddrKind::Ipv4)?;
    if reader.has_remaining() {
        if reader.peek(0) == Some(b'.') {
            err!(Ipv4, reader.pos, TooManyGroups);
        }
        err!(Ipv4, reader.pos, TrailingInput);
    }
    Ok(addr)
}

pub(crate) fn parse_v6_units<C: CodeUnit>(s: &[C]) -> Result<Ipv6Literal> {
    read_v6(&mut Reader::new(s))
}

// dec-octet = DIGIT             ; 0-9
//           / %x31-39 DIGIT     ; 10-99
//           / "1" 2DIGIT        ; 100-199
//           / "2" %x30-34 DIGIT ; 200-249
//           / "25" %x30-35      ; 250-255
fn read_dec_octet<C: CodeUnit>(r: &mut Reader<'_, C>, kind: AddrKind) -> Result<u8> {
    let fail = |index, reason| {
        Err(AddrError {
            kind,
            reason,
            index,
        })
    };

    let Some(first) = r.peek_digit(0) else {
        let reason = if r.has_remaining() {
            AddrErrorReason::InvalidChar
        } else {
            AddrErrorReason::TooFewGroups
        };
        return fail(r.pos, reason);
    };

    if first == 0 {
        if r.peek_digit(1).is_some() {
            return fail(r.pos, AddrErrorReason::LeadingZero);
        }
        // INVARIANT: Skipping "0" is fine.
        r.skip(1);
        return Ok(0);
    }

    let mut value = u32::from(first);
    let mut i = 1;
    while let Some(x) = r.peek_digit(i) {
        if i == 3 {
            return fail(r.pos, AddrErrorReason::OctetOutOfRange);
        }
        value = value * 10 + u32::from(x);
        i += 1;
    }

    match u8::try_from(value) {
        Ok(octet) => {
            // INVARIANT: Skipping `i` digits is fine.
            r.skip(i);
            Ok(octet)
        }
        Err(_) => fail(r.pos, AddrErrorReason::OctetOutOfRange),
    }
}

/// Reads a dotted-decimal IPv4 address, leaving any trailing input unread.
pub(crate) fn read_v4<C: CodeUnit>(r: &mut Reader<'_, C>, kind: AddrKind) -> Result<Ipv4Addr> {
    let mut octets = [read_dec_octet(r, kind)?, 0, 0, 0];
    for octet in &mut octets[1..] {
        if !r.read_byte(b'.') {
            let reason = if r.has_remaining() {
                AddrErrorReason::InvalidChar
            } else {
                AddrErrorReason::TooFewGroups
            };
            return Err(AddrError {
                kind,
                reason,
                index: r.pos,
            });
        }
        *octet = read_dec_octet(r, kind)?;
    }
    Ok(Ipv4Addr::from(octets))
}

enum Seg {
    // *1":" 1*4HEXDIG
    Normal(u16, bool),
    // "::"
    Ellipsis,
    // *1":" 1*4HEXDIG "."
    MaybeV4(bool),
    // ":" at the end
    SingleColon,
}

/// Reads an IPv6 address that must span the whole reader.
fn read_v6<C: CodeUnit>(r: &mut Reader<'_, C>) -> Result<Ipv6Literal> {
    let mut segs = [0; 8];
    let mut ellipsis_i = 8;
    let mut ellipsis_pos = 0;
    let mut v4_tail = false;

    let mut i = 0;
    while i < 8 {
        let seg_start = r.pos;
        match read_v6_segment(r)? {
            Some(Seg::Normal(seg, colon)) => {
                if colon == (i == 0 || i == ellipsis_i) {
                    // Leading colon, triple colons, or no colon.
                    err!(Ipv6, seg_start, MisplacedColon);
                }
                segs[i] = seg;
                i += 1;
            }
            Some(Seg::Ellipsis) => {
                if ellipsis_i != 8 {
                    err!(Ipv6, seg_start, MultipleCompressions);
                }
                ellipsis_i = i;
                ellipsis_pos = seg_start;
            }
            Some(Seg::MaybeV4(colon)) => {
                if colon == (i == 0 || i == ellipsis_i) {
                    err!(Ipv6, seg_start, MisplacedColon);
                }
                if i > 6 {
                    // Not enough space.
                    err!(Ipv6, r.pos, TooManyGroups);
                }
                let octets = read_v4(r, AddrKind::Ipv6)?.octets();
                segs[i] = u16::from_be_bytes([octets[0], octets[1]]);
                segs[i + 1] = u16::from_be_bytes([octets[2], octets[3]]);
                i += 2;
                v4_tail = true;
                break;
            }
            Some(Seg::SingleColon) => err!(Ipv6, seg_start, MisplacedColon),
            None => break,
        }
    }

    if r.has_remaining() {
        if v4_tail {
            err!(Ipv6, r.pos, TrailingInput);
        } else if i == 8 {
            err!(Ipv6, r.pos, TooManyGroups);
        }
        err!(Ipv6, r.pos, InvalidChar);
    }

    if ellipsis_i == 8 {
        // No ellipsis.
        if i != 8 {
            err!(Ipv6, r.pos, TooFewGroups);
        }
    } else if i == 8 {
        // Eliding nothing.
        err!(Ipv6, ellipsis_pos, RedundantCompression);
    } else {
        // Shift the segments after the ellipsis to the right.
        for j in (ellipsis_i..i).rev() {
            segs[8 - (i - j)] = segs[j];
            segs[j] = 0;
        }
    }

    Ok(Ipv6Literal {
        addr: segs.into(),
        compressed: ellipsis_i != 8,
    })
}

fn read_v6_segment<C: CodeUnit>(r: &mut Reader<'_, C>) -> Result<Option<Seg>> {
    let colon = r.read_byte(b':');
    let Some(first) = r.peek(0) else {
        return Ok(colon.then_some(Seg::SingleColon));
    };

    let Some(x) = decode_hexdigit(first) else {
        if !colon {
            return Ok(None);
        }
        if first == b':' {
            // INVARIANT: Skipping ":" is fine.
            r.skip(1);
            return Ok(Some(Seg::Ellipsis));
        }
        err!(Ipv6, r.pos, InvalidChar);
    };

    let mut x = u16::from(x);
    let mut i = 1;
    while let Some(b) = r.peek(i) {
        match decode_hexdigit(b) {
            Some(_) if i == 4 => err!(Ipv6, r.pos, GroupTooLong),
            Some(v) => {
                x = (x << 4) | u16::from(v);
                i += 1;
            }
            None if b == b'.' => return Ok(Some(Seg::MaybeV4(colon))),
            None => break,
        }
    }
    // INVARIANT: Skipping `i` hexadecimal digits is fine.
    r.skip(i);
    Ok(Some(Seg::Normal(x, colon)))
}
