use crate::{
    component::{Authority, Scheme},
    ip::{AddrError, AddrErrorReason, AddrKind},
    normalize::NormalizeError,
    parse::{ParseError, ParseErrorKind, Production},
    resolve::{ResolveError, Resolver},
    UriRef,
};
use borrow_or_share::Bos;
use core::fmt;

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scheme => "scheme",
            Self::Authority => "authority",
            Self::Userinfo => "userinfo",
            Self::Host => "host",
            Self::IpLiteral => "IP literal",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedCharOrEnd => write!(
                f,
                "unexpected character or end of input at index {} in {}",
                self.index, self.production
            ),
            ParseErrorKind::InvalidPctEncoded => write!(
                f,
                "invalid percent-encoded octet at index {} in {}",
                self.index, self.production
            ),
            ParseErrorKind::InvalidIpLiteral(e) => write!(f, "invalid IP literal: {e}"),
        }
    }
}

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            AddrKind::Ipv4 => "IPv4",
            AddrKind::Ipv6 => "IPv6",
        };
        let reason = match self.reason {
            AddrErrorReason::InvalidChar => "invalid character",
            AddrErrorReason::GroupTooLong => "more than four hexadecimal digits in a group",
            AddrErrorReason::OctetOutOfRange => "decimal octet out of range",
            AddrErrorReason::LeadingZero => "leading zero in a decimal octet",
            AddrErrorReason::TooFewGroups => "too few groups",
            AddrErrorReason::TooManyGroups => "too many groups",
            AddrErrorReason::MultipleCompressions => "more than one \"::\"",
            AddrErrorReason::RedundantCompression => "\"::\" eliding no group",
            AddrErrorReason::MisplacedColon => "misplaced colon",
            AddrErrorReason::TrailingInput => "trailing input after embedded IPv4 address",
        };
        write!(f, "{reason} in {kind} address at index {}", self.index)
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::RequiresAbsoluteBase => "base URI without scheme",
            Self::PathUnderflow => "underflow occurred in path resolution",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::PathUnderflow => "underflow occurred in path normalization",
        };
        f.write_str(msg)
    }
}

impl<T: Bos<str>> fmt::Debug for UriRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UriRef")
            .field("scheme", &self.scheme())
            .field("authority", &self.authority())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl<T: Bos<str>> fmt::Display for UriRef<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("host_parsed", &self.host_parsed())
            .field("port", &self.port())
            .finish()
    }
}

impl fmt::Display for Authority<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl<T: Bos<str>> fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("base", &self.base)
            .field("allow_path_underflow", &self.allow_path_underflow)
            .finish()
    }
}
