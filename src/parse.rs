use crate::{
    imp::{AuthMeta, HostMeta, Meta},
    ip::{self, AddrError, AddrKind},
    table::{self, Table},
    unit::{CodeUnit, Reader},
};
use core::{
    num::NonZeroUsize,
    ops::{Deref, DerefMut},
};

/// The grammar production being matched when a [`ParseError`] occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Production {
    /// `scheme`, or the decision between a scheme and a relative path.
    Scheme,
    /// `authority`, before it is known whether a userinfo is present.
    Authority,
    /// `userinfo`.
    Userinfo,
    /// `host` after a userinfo.
    Host,
    /// `IP-literal`, including its square brackets.
    IpLiteral,
    /// `path-abempty`, `path-absolute`, `path-noscheme` or `path-rootless`.
    Path,
    /// `query`.
    Query,
    /// `fragment`.
    Fragment,
}

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// Unexpected character or end of input.
    ///
    /// The error index points to the character or the end of input.
    UnexpectedCharOrEnd,
    /// A `%` not followed by two hexadecimal digits.
    ///
    /// The error index points to the `%`.
    InvalidPctEncoded,
    /// Invalid address within an IP literal.
    ///
    /// The error index equals that of the address error,
    /// and both are relative to the whole input.
    InvalidIpLiteral(AddrError),
}

/// An error occurred when parsing a URI reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) production: Production,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index at which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the production being matched when the error occurred.
    #[must_use]
    pub fn production(&self) -> Production {
        self.production
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for ParseError {
    fn source(&self) -> Option<&(dyn crate::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidIpLiteral(e) => Some(e),
            _ => None,
        }
    }
}

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error in the current production.
macro_rules! err {
    ($p:expr, $index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            production: $p.production,
            kind: ParseErrorKind::$kind,
        })
    };
}

pub(crate) fn parse<C: CodeUnit>(units: &[C]) -> Result<Meta> {
    let mut parser = Parser {
        reader: Reader::new(units),
        production: Production::Scheme,
        out: Meta::default(),
    };
    parser.parse_from_scheme()?;
    Ok(parser.out)
}

/// URI reference parser.
///
/// # Invariants
///
/// `pos <= len` and `pos` is non-decreasing.
///
/// # Preconditions and guarantees
///
/// Before parsing, ensure that `pos == 0` and `out` is default initialized.
///
/// Start and finish parsing by calling `parse_from_scheme`.
/// The following are guaranteed when parsing succeeds:
///
/// - All output indexes are within bounds and correctly ordered.
/// - All components defined by output indexes are validated,
///   and thus consist of ASCII characters only.
struct Parser<'a, C> {
    reader: Reader<'a, C>,
    production: Production,
    out: Meta,
}

impl<'a, C> Deref for Parser<'a, C> {
    type Target = Reader<'a, C>;

    fn deref(&self) -> &Self::Target {
        &self.reader
    }
}

impl<C> DerefMut for Parser<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reader
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PathKind {
    General,
    AbEmpty,
    ContinuedNoScheme,
}

impl<C: CodeUnit> Parser<'_, C> {
    /// Reads as many characters as the table allows,
    /// returning whether anything was read.
    fn read(&mut self, table: Table) -> Result<bool> {
        let start = self.pos;
        let mut i = self.pos;

        while i < self.len() {
            let x = self.byte_at(i);
            if x == b'%' && table.allows_pct_encoded() {
                let valid = i + 2 < self.len()
                    && table::is_hexdig_pair(self.byte_at(i + 1), self.byte_at(i + 2));
                if !valid {
                    err!(self, i, InvalidPctEncoded);
                }
                i += 3;
            } else if table.allows(x) {
                i += 1;
            } else {
                break;
            }
        }

        // INVARIANT: `i` is non-decreasing and within bounds.
        self.pos = i;
        Ok(self.pos > start)
    }

    fn read_port(&mut self) -> Result<()> {
        if self.read_byte(b':') {
            self.read(table::PORT)?;
        }
        Ok(())
    }

    fn read_ip_literal(&mut self) -> Result<Option<HostMeta>> {
        if !self.read_byte(b'[') {
            return Ok(None);
        }
        self.production = Production::IpLiteral;

        let start = self.pos;
        let end = (start..self.len())
            .find(|&i| self.byte_at(i) == b']')
            .unwrap_or(self.len());

        let lit = match ip::parse_v6_units(self.slice(start, end)) {
            Ok(lit) => lit,
            Err(mut e) => {
                e.index += start;
                return Err(ParseError {
                    index: e.index,
                    production: self.production,
                    kind: ParseErrorKind::InvalidIpLiteral(e),
                });
            }
        };

        // INVARIANT: The address spans up to `end`.
        self.pos = end;
        if !self.read_byte(b']') {
            err!(self, self.pos, UnexpectedCharOrEnd);
        }
        Ok(Some(HostMeta::Ipv6(lit)))
    }

    fn read_v4_or_reg_name(&mut self) -> Result<HostMeta> {
        // Every unit consumed by a failed attempt is a digit or a dot,
        // so the reg-name read can simply continue from there.
        let v4 = ip::read_v4(&mut self.reader, AddrKind::Ipv4).ok();
        Ok(match (v4, self.read(table::REG_NAME)?) {
            (Some(addr), false) => HostMeta::Ipv4(addr),
            _ => HostMeta::RegName,
        })
    }

    fn read_host(&mut self) -> Result<HostMeta> {
        match self.read_ip_literal()? {
            Some(host) => Ok(host),
            None => self.read_v4_or_reg_name(),
        }
    }

    fn parse_from_scheme(&mut self) -> Result<()> {
        self.read(table::SCHEME)?;

        if self.peek(0) == Some(b':') {
            // Scheme starts with a letter.
            if self.pos > 0 && self.byte_at(0).is_ascii_alphabetic() {
                self.out.scheme_end = NonZeroUsize::new(self.pos);
            } else {
                err!(self, 0, UnexpectedCharOrEnd);
            }

            // INVARIANT: Skipping ":" is fine.
            self.skip(1);
            return if self.read_str("//") {
                self.parse_from_authority()
            } else {
                self.parse_from_path(PathKind::General)
            };
        } else if self.pos == 0 {
            // Nothing read.
            if self.read_str("//") {
                return self.parse_from_authority();
            }
        }
        // Scheme chars are valid for path.
        self.parse_from_path(PathKind::ContinuedNoScheme)
    }

    fn parse_from_authority(&mut self) -> Result<()> {
        // We first try to read host and port, noting that
        // a reg-name or IPv4address can also be part of userinfo.
        self.production = Production::Authority;
        let auth_start = self.pos;
        let host_meta = self.read_host()?;

        let mut auth_meta = AuthMeta {
            host_bounds: (auth_start, self.pos),
            host_meta,
        };

        self.read_port()?;
        let port_end = self.pos;

        if let HostMeta::Ipv4(..) | HostMeta::RegName = host_meta {
            self.production = Production::Userinfo;
            let userinfo_read = self.read(table::USERINFO)?;

            if self.peek(0) == Some(b'@') {
                // Userinfo present.
                // INVARIANT: Skipping "@" is fine.
                self.skip(1);

                self.production = Production::Host;
                let host_start = self.pos;
                let host_meta = self.read_host()?;

                auth_meta.host_bounds = (host_start, self.pos);
                auth_meta.host_meta = host_meta;

                self.read_port()?;
            } else if userinfo_read {
                // Only a port can follow the host here.
                self.production = Production::Authority;
                err!(self, port_end, UnexpectedCharOrEnd);
            }
        }

        self.out.auth_meta = Some(auth_meta);
        self.parse_from_path(PathKind::AbEmpty)
    }

    fn parse_from_path(&mut self, kind: PathKind) -> Result<()> {
        self.production = Production::Path;
        let path_start;

        match kind {
            PathKind::General | PathKind::AbEmpty => path_start = self.pos,
            PathKind::ContinuedNoScheme => {
                path_start = 0;

                self.read(table::SEGMENT_NZ_NC)?;

                if self.peek(0) == Some(b':') {
                    // In a relative reference, the first path
                    // segment cannot contain a colon character.
                    err!(self, self.pos, UnexpectedCharOrEnd);
                }
            }
        }

        if self.read(table::PATH)? && kind == PathKind::AbEmpty && self.byte_at(path_start) != b'/'
        {
            err!(self, path_start, UnexpectedCharOrEnd);
        }

        self.out.path_bounds = (path_start, self.pos);

        if self.read_byte(b'?') {
            self.production = Production::Query;
            self.read(table::QUERY)?;
            self.out.query_end = NonZeroUsize::new(self.pos);
        }

        if self.read_byte(b'#') {
            self.production = Production::Fragment;
            self.read(table::FRAGMENT)?;
        }

        if self.has_remaining() {
            err!(self, self.pos, UnexpectedCharOrEnd);
        }
        Ok(())
    }
}

/// Classifies an already validated host that is not an IP literal.
pub(crate) fn parse_v4_or_reg_name(bytes: &[u8]) -> HostMeta {
    let mut reader = Reader::new(bytes);
    match ip::read_v4(&mut reader, AddrKind::Ipv4) {
        Ok(addr) if !reader.has_remaining() => HostMeta::Ipv4(addr),
        _ => HostMeta::RegName,
    }
}
