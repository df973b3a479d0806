use std::fmt::{Debug, Formatter};
use std::ops::Range;

/// A byte range in the submitted source text.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pos: usize,
    len: u32,
}

impl Span {
    #[inline]
    pub const fn new(pos: usize, len: u32) -> Self {
        Self { pos, len }
    }

    pub const fn new_with_end(pos: usize, end: usize) -> Self {
        assert!(end >= pos);
        Self::new(pos, (end - pos) as u32)
    }

    /// Zero-length span at `pos`, used for tokens the parser had to make up.
    #[inline]
    pub const fn empty(pos: usize) -> Self {
        Self::new(pos, 0)
    }

    #[inline]
    pub const fn pos(self) -> usize {
        self.pos
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.len
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn end(self) -> usize {
        self.pos + (self.len as usize)
    }

    #[inline]
    pub const fn range(self) -> Range<usize> {
        let Self { pos, len } = self;

        pos..pos + (len as usize)
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        let pos = self.pos.min(other.pos);
        let end = self.end().max(other.end());

        Span::new_with_end(pos, end)
    }

    #[inline]
    pub fn str_slice(self, str: &str) -> &str {
        &str[self.range()]
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.pos, self.end())
    }
}
