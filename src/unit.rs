//! Width-agnostic code units.

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// A code unit of narrow (`u8`) or wide (`u16`) text fed to the parser.
///
/// Every production of RFC 3986 is made of ASCII characters only, so the
/// parser looks at each unit through [`as_byte`](Self::as_byte) and never
/// needs to decode the text. This trait is sealed.
pub trait CodeUnit: Copy + sealed::Sealed {
    /// Returns the unit as a byte.
    ///
    /// Units that do not fit in a byte map to `0xFF`,
    /// which no table in [`table`](crate::table) allows.
    fn as_byte(self) -> u8;
}

impl CodeUnit for u8 {
    #[inline]
    fn as_byte(self) -> u8 {
        self
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn as_byte(self) -> u8 {
        u8::try_from(self).unwrap_or(u8::MAX)
    }
}

/// A cursor over a slice of code units.
///
/// # Invariants
///
/// `pos <= units.len()` and `pos` is non-decreasing.
pub(crate) struct Reader<'a, C> {
    units: &'a [C],
    pub(crate) pos: usize,
}

impl<'a, C: CodeUnit> Reader<'a, C> {
    pub(crate) fn new(units: &'a [C]) -> Self {
        Reader { units, pos: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }

    pub(crate) fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    pub(crate) fn peek(&self, i: usize) -> Option<u8> {
        self.units.get(self.pos + i).map(|x| x.as_byte())
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [C] {
        &self.units[start..end]
    }

    pub(crate) fn byte_at(&self, i: usize) -> u8 {
        self.units[i].as_byte()
    }

    // Any call to this method must keep the invariants.
    pub(crate) fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    pub(crate) fn read_byte(&mut self, x: u8) -> bool {
        if self.peek(0) == Some(x) {
            // INVARIANT: The next unit is `x` so it's fine to skip it.
            self.skip(1);
            true
        } else {
            false
        }
    }

    pub(crate) fn read_str(&mut self, s: &str) -> bool {
        let matched = s
            .bytes()
            .enumerate()
            .all(|(i, x)| self.peek(i) == Some(x));
        if matched {
            // INVARIANT: The remaining units start with `s` so it's fine to skip `s.len()`.
            self.skip(s.len());
        }
        matched
    }

    pub(crate) fn peek_digit(&self, i: usize) -> Option<u8> {
        self.peek(i).filter(u8::is_ascii_digit).map(|x| x - b'0')
    }
}
