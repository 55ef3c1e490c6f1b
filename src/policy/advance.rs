use num_traits::Euclid;

use crate::{
    cursor::Cursor,
    error::IterError,
};

/// Moves a cursor by a number of steps and measures the distance between two cursors.
///
/// All distances handed in are measured by the iterator along the cursor's direction of travel
/// from the _current_ begin/end of the container, so implementations never look at the
/// container itself.
pub trait AdvanceDistance {
    /// Moves `cursor` by `steps` (backwards if negative).
    ///
    /// - `begin`, `end`: the bounding cursors of the container.
    /// - `from_begin`: steps from `begin` to `cursor`.
    /// - `to_end`: steps from `cursor` to `end`.
    fn advance<K: Cursor>(
        cursor: &mut K,
        steps: isize,
        begin: K,
        end: K,
        from_begin: isize,
        to_end: isize,
    ) -> Result<(), IterError>;

    /// Returns the distance from `c1` to `c2`.
    ///
    /// - `begin_to_1`, `begin_to_2`: steps from `begin` to each cursor.
    /// - `c1_to_end`, `c2_to_end`: steps from each cursor to `end`.
    fn distance<K: Cursor>(
        c1: K,
        c2: K,
        begin_to_1: isize,
        begin_to_2: isize,
        c1_to_end: isize,
        c2_to_end: isize,
    ) -> isize;
}

/// Moves within `begin..=end`, clamping at either bound.
///
/// Example:
/// ```
/// use smartiter::{AdvanceDistance, Linear, RawCursor};
/// let (begin, end) = (RawCursor::new(0), RawCursor::new(4));
/// let mut c = RawCursor::new(1);
/// Linear::advance(&mut c, 5, begin, end, 1, 3).unwrap();
/// assert_eq!(c, end);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Linear;

impl AdvanceDistance for Linear {
    fn advance<K: Cursor>(
        cursor: &mut K,
        steps: isize,
        begin: K,
        end: K,
        from_begin: isize,
        to_end: isize,
    ) -> Result<(), IterError> {
        if steps > 0 {
            *cursor = if steps > to_end { end } else { cursor.advanced(steps) };
        } else if steps < 0 {
            let clamped = steps < from_begin.saturating_neg();
            *cursor = if clamped { begin } else { cursor.advanced(steps) };
        }
        Ok(())
    }

    fn distance<K: Cursor>(
        _c1: K,
        _c2: K,
        begin_to_1: isize,
        begin_to_2: isize,
        _c1_to_end: isize,
        _c2_to_end: isize,
    ) -> isize {
        begin_to_2.saturating_sub(begin_to_1)
    }
}

/// Treats `begin..end` as a ring: moving past either bound wraps around to the other side.
///
/// The ring has `begin.distance(end)` positions. A move from within `begin..=end` that stays
/// strictly before `end` (forwards) or at or after `begin` (backwards) is the same as
/// [`Linear`]; any other move restarts from `begin` at the ring position
/// `(from_begin + steps) mod len`. Consequently a circular cursor never rests on `end` after a
/// non-zero move, and a cursor found outside the ring is brought back into it.
///
/// Distances are _directional_: [`Circular::distance`] counts forward steps only, so the distance
/// from `a` to `b` is generally not the negation of the distance from `b` to `a`.
///
/// Example:
/// ```
/// use smartiter::{AdvanceDistance, Circular, Cursor, RawCursor};
/// let (begin, end) = (RawCursor::new(0), RawCursor::new(4));
/// let mut c = RawCursor::new(1);
/// Circular::advance(&mut c, 5, begin, end, 1, 3).unwrap();
/// assert_eq!(c.slot(), 2);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Circular;

impl AdvanceDistance for Circular {
    fn advance<K: Cursor>(
        cursor: &mut K,
        steps: isize,
        begin: K,
        end: K,
        from_begin: isize,
        to_end: isize,
    ) -> Result<(), IterError> {
        if steps == 0 {
            return Ok(());
        }
        let len = begin.distance(end);
        if len <= 0 {
            return Err(IterError::EmptyContainer);
        }
        let in_bounds = (0..=len).contains(&from_begin) && if steps > 0 {
            steps < to_end
        } else {
            steps >= -from_begin
        };
        if in_bounds {
            *cursor = cursor.advanced(steps);
            return Ok(());
        }
        // (at + by) mod len, without forming `at + by`
        let at = Euclid::rem_euclid(&from_begin, &len);
        let by = Euclid::rem_euclid(&steps, &len);
        let pos = if at < len - by { at + by } else { at - (len - by) };
        tracing::trace!(steps, from_begin, to_end, pos, "wrapped around ring");
        *cursor = begin.advanced(pos);
        Ok(())
    }

    fn distance<K: Cursor>(
        c1: K,
        c2: K,
        _begin_to_1: isize,
        begin_to_2: isize,
        c1_to_end: isize,
        c2_to_end: isize,
    ) -> isize {
        if c1_to_end >= c2_to_end {
            c1.distance(c2)
        } else {
            c1_to_end.saturating_add(begin_to_2)
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::cursor::{RawCursor, RawReverseCursor};
    use super::*;

    const LEN: isize = 4;

    /// Advances a forward cursor at `slot` of a 4-element container by `steps` under `A`.
    fn step<A: AdvanceDistance>(slot: isize, steps: isize) -> Result<isize, IterError> {
        let mut c = RawCursor::new(slot);
        A::advance(&mut c, steps, RawCursor::new(0), RawCursor::new(LEN), slot, LEN - slot)?;
        Ok(c.slot())
    }

    #[test_case(1, 5 => 4; "clamps to end")]
    #[test_case(1, 3 => 4; "exactly end")]
    #[test_case(1, 2 => 3)]
    #[test_case(3, -2 => 1)]
    #[test_case(3, -3 => 0; "exactly begin")]
    #[test_case(3, -9 => 0; "clamps to begin")]
    #[test_case(4, -9 => 0; "from end to begin")]
    #[test_case(2, 0 => 2; "zero is no-op")]
    fn linear(slot: isize, steps: isize) -> isize {
        step::<Linear>(slot, steps).unwrap()
    }

    #[test_case(1, 5 => 2; "wraps forward")]
    #[test_case(1, 2 => 3; "stays in bounds")]
    #[test_case(1, 3 => 0; "onto end wraps to begin")]
    #[test_case(1, -1 => 0; "exactly begin")]
    #[test_case(1, -2 => 3; "wraps backward")]
    #[test_case(0, -1 => 3; "begin to last")]
    #[test_case(2, -7 => 3)]
    #[test_case(2, 4 => 2; "full lap")]
    #[test_case(2, -4 => 2; "full lap backward")]
    #[test_case(3, 0 => 3; "zero is no-op")]
    #[test_case(4, 1 => 1; "from end")]
    #[test_case(4, -1 => 3; "from end backward")]
    fn circular(slot: isize, steps: isize) -> isize {
        step::<Circular>(slot, steps).unwrap()
    }

    #[test]
    fn circular_huge_steps_do_not_overflow() {
        assert_eq!(step::<Circular>(3, isize::MAX), Ok((3 + isize::MAX % LEN) % LEN));
        assert_eq!(step::<Circular>(0, isize::MIN), Ok(0));
    }

    #[test_case(-3 => 2; "before begin")]
    #[test_case(9 => 2; "past end")]
    #[test_case(isize::MIN => 1; "far before begin")]
    #[test_case(isize::MAX => 0; "far past end")]
    fn circular_brings_stray_cursor_into_ring(slot: isize) -> isize {
        let (begin, end) = (RawCursor::new(0), RawCursor::new(LEN));
        let mut c = RawCursor::new(slot);
        let (from_begin, to_end) = (begin.distance(c), c.distance(end));
        Circular::advance(&mut c, 1, begin, end, from_begin, to_end).unwrap();
        c.slot()
    }

    #[test]
    fn stray_distances_saturate() {
        let c = RawCursor::new(0);
        assert_eq!(Linear::distance(c, c, isize::MIN, 4, 0, 0), isize::MAX);
        assert_eq!(Circular::distance(c, c, 0, isize::MAX, 1, 2), isize::MAX);
    }

    #[test]
    fn circular_empty() {
        let mut c = RawCursor::new(0);
        let (b, e) = (RawCursor::new(0), RawCursor::new(0));
        assert_eq!(Circular::advance(&mut c, 1, b, e, 0, 0), Err(IterError::EmptyContainer));
        assert_eq!(Circular::advance(&mut c, -1, b, e, 0, 0), Err(IterError::EmptyContainer));
        assert_eq!(Circular::advance(&mut c, 0, b, e, 0, 0), Ok(()));
        assert_eq!(c, b);
    }

    #[test]
    fn reverse_cursor_wraps_through_end() {
        // [10, 20, 30, 40] backwards: begin = slot 3, end = slot -1.
        let (begin, end) = (RawReverseCursor::new(3), RawReverseCursor::new(-1));
        let mut c = RawReverseCursor::new(0); // 10, last in travel order
        Circular::advance(&mut c, 1, begin, end, 3, 1).unwrap();
        assert_eq!(c, begin);
        Circular::advance(&mut c, -1, begin, end, 0, 4).unwrap();
        assert_eq!(c.slot(), 0);
    }

    /// Distance from `s1` to `s2` of a 4-element container under `A`.
    fn dist<A: AdvanceDistance>(s1: isize, s2: isize) -> isize {
        A::distance(RawCursor::new(s1), RawCursor::new(s2), s1, s2, LEN - s1, LEN - s2)
    }

    #[test_case(0, 3 => 3)]
    #[test_case(3, 0 => -3)]
    #[test_case(2, 2 => 0)]
    #[test_case(0, 4 => 4; "to end")]
    fn linear_distance(s1: isize, s2: isize) -> isize {
        dist::<Linear>(s1, s2)
    }

    #[test_case(0, 3 => 3; "ahead")]
    #[test_case(3, 0 => 1; "wraps once")]
    #[test_case(3, 1 => 2)]
    #[test_case(2, 2 => 0; "self")]
    fn circular_distance(s1: isize, s2: isize) -> isize {
        dist::<Circular>(s1, s2)
    }

    #[test]
    fn circular_distance_matches_forward_steps() {
        for s1 in 0..LEN {
            for s2 in 0..LEN {
                let d = dist::<Circular>(s1, s2);
                assert!((0..LEN).contains(&d));
                assert_eq!(step::<Circular>(s1, d), Ok(s2));
            }
        }
    }
}
