/// A byte range in the scanned source.
///
/// Spans track the byte offsets a token covered in the original input,
/// independent of any value replacement performed during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span.
    ///
    /// # Clamping Behavior
    ///
    /// Uses saturating subtraction to compute `end - start`. If `end < start`
    /// (an inverted span), this returns `0` rather than panicking or wrapping.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join two spans into one covering both regions.
    ///
    /// Uses `min()` for start and `max()` for end, so the result spans from
    /// the earliest start to the latest end even for disjoint inputs.
    #[inline]
    pub fn join(&self, other: &Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 10, 10; "normal span")]
    #[test_case(5, 10, 5; "offset span")]
    #[test_case(10, 5, 0; "inverted span clamps to 0")]
    #[test_case(usize::MAX, 0, 0; "max inverted clamps to 0")]
    fn test_span_length_clamping(start: usize, end: usize, expected_len: usize) {
        assert_eq!(Span::new(start, end).len(), expected_len);
    }

    #[test_case(0, 10, 5, 15, 0, 15; "overlapping spans")]
    #[test_case(0, 5, 10, 15, 0, 15; "disjoint spans")]
    #[test_case(5, 10, 0, 20, 0, 20; "contained span")]
    fn test_span_join(s1: usize, e1: usize, s2: usize, e2: usize, exp_s: usize, exp_e: usize) {
        let joined = Span::new(s1, e1).join(&Span::new(s2, e2));
        assert_eq!(joined, Span::new(exp_s, exp_e));
    }
}
