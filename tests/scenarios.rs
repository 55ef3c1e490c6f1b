#![cfg(feature = "alloc")]

use std::collections::VecDeque;

use smartiter::{
    AdvanceDistance, BeginEnd, CircularConstIter, CircularIter, ConstForward, Cursor, IterError,
    LinearConstIter, LinearConstReverseIter, LinearIter, RawCursor, Sequence, SmartIter,
};

#[test]
fn linear_overshoot_lands_on_end() {
    let v = vec![10, 20, 30, 40];
    let mut it = LinearConstIter::new(&v);
    it.advance(1).unwrap();
    assert_eq!(it.get(), Ok(&20));
    it.advance(5).unwrap();
    assert_eq!(it.cursor().slot(), 4);
    assert_eq!(it, it.end());
}

#[test]
fn circular_overshoot_wraps() {
    let v = vec![10, 20, 30, 40];
    let mut it = CircularConstIter::new(&v);
    it.advance(1).unwrap();
    it.advance(5).unwrap();
    assert_eq!(it.distance_from_begin(), 2);
    assert_eq!(it.get(), Ok(&30));
}

#[test]
fn reverse_begin_and_end() {
    let v = vec![10, 20, 30, 40];
    let mut it = LinearConstReverseIter::new(&v);
    assert_eq!(it.get(), Ok(&40));
    assert_eq!(it.end().cursor().slot(), -1);
    it.increment().unwrap().increment().unwrap();
    assert_eq!(it.get(), Ok(&20));
}

#[test]
fn many_iterators_share_one_container() {
    let v = vec![1, 2, 3];
    let a = CircularConstIter::new(&v);
    let b = a.plus(1).unwrap();
    let c = b;
    assert_eq!(a.distance_to(&b), Ok(1));
    assert_eq!(b, c);
    assert_eq!(v, vec![1, 2, 3]);
}

#[test]
fn retargeting_moves_begin_and_end() {
    let short = vec![1, 2];
    let long = vec![1, 2, 3, 4, 5];
    let mut it = LinearConstIter::new(&short);
    assert_eq!(it.end().distance_from_begin(), 2);
    it.rebind(&long);
    assert_eq!(it.end().distance_from_begin(), 5);
    assert_eq!(it.size(), 5);
}

#[test]
fn deque_is_a_sequence() {
    let mut d: VecDeque<char> = VecDeque::new();
    d.push_back('c');
    d.push_front('b');
    d.push_front('a');
    let it = CircularConstIter::new(&d).plus(2).unwrap();
    assert_eq!(it.lap().collect::<String>(), "cab");
}

#[test]
fn writable_flavors() {
    let mut v = vec![1, 2, 3, 4];
    let mut it = LinearIter::new(&mut v);
    while let Ok(x) = it.get_mut() {
        *x *= 10;
        it.advance(1).unwrap();
    }
    assert_eq!(v, vec![10, 20, 30, 40]);

    let mut it = CircularIter::new(&mut v);
    for _ in 0..6 {
        *it.get_mut().unwrap() += 1;
        it.increment().unwrap();
    }
    assert_eq!(it.get(), Ok(&31));
    assert_eq!(it.at(5), Ok(&22));
    assert_eq!(it.lap().copied().collect::<Vec<_>>(), vec![31, 41, 12, 22]);
    assert_eq!(v, vec![12, 22, 31, 41]);
}

#[test]
fn misuse_is_reported() {
    let v: Vec<i32> = vec![];
    let mut it = CircularConstIter::new(&v);
    assert_eq!(it.get(), Err(IterError::OutOfRange { slot: 0, size: 0 }));
    assert_eq!(it.advance(1), Err(IterError::EmptyContainer));

    let w = vec![1];
    let other = CircularConstIter::new(&w);
    assert_eq!(it.distance_to(&other), Err(IterError::MismatchedContainer));
    assert_eq!(CircularConstIter::<Vec<i32>>::unbound().get(), Err(IterError::Unbound));
}

/// Skips every other element, clamping at the bounds.
struct EveryOther;

impl AdvanceDistance for EveryOther {
    fn advance<K: Cursor>(
        cursor: &mut K,
        steps: isize,
        begin: K,
        end: K,
        from_begin: isize,
        to_end: isize,
    ) -> Result<(), IterError> {
        let steps = steps.saturating_mul(2);
        if steps > to_end {
            *cursor = end;
        } else if steps < -from_begin {
            *cursor = begin;
        } else {
            *cursor = cursor.advanced(steps);
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
        (begin_to_2 - begin_to_1) / 2
    }
}

/// Starts at the second element.
struct SkipFirst;

impl BeginEnd for SkipFirst {
    type Cursor = RawCursor;

    fn begin<S: Sequence + ?Sized>(seq: &S) -> RawCursor {
        RawCursor::new(if seq.size() > 0 { 1 } else { 0 })
    }

    fn end<S: Sequence + ?Sized>(seq: &S) -> RawCursor { RawCursor::new(seq.size() as isize) }
}

#[test]
fn custom_policies_plug_in() {
    let v = [0, 1, 2, 3, 4, 5, 6];
    let it = SmartIter::<&[i32; 7], EveryOther, ConstForward>::new(&v);
    assert_eq!(it.lap().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
    assert_eq!(it.distance_to(&it.plus(2).unwrap()), Ok(2));

    let it = SmartIter::<&[i32; 7], EveryOther, SkipFirst>::new(&v);
    assert_eq!(it.get(), Ok(&1));
    assert_eq!(it.lap().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
}
