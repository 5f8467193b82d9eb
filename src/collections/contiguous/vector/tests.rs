#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::Array;
use crate::error::{
    EmptyContainer, IndexOutOfBounds, InvalidPosition, InvalidRange, PositionError, StalePosition,
};
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let vec: Vector<i32> = Vector::new();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.cap(), 0);
    assert!(vec.is_empty());

    let vec: Vector<i32> = Vector::with_len(10);
    assert_eq!(vec.len(), 10, "A sized Vector should contain default values.");
    assert_eq!(vec.cap(), 10);
    assert!(vec.iter().all(|i| *i == 0));

    let vec = Vector::from([1, 2, 3, 4, 5]);
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.cap(), 5, "A Vector built from a list should be full.");

    let copy = Vector::from_slice(&vec);
    assert_eq!(copy, vec);
    assert_eq!(copy.cap(), 5);

    let part = Vector::from_range(&vec, vec.begin() + 1, vec.begin() + 3).unwrap();
    assert_eq!(&*part, &[2, 3], "A range should copy [first, last).");
    assert_eq!(part.cap(), 2);

    assert_eq!(
        Vector::from_range(&vec, vec.begin() + 3, vec.begin() + 1),
        Err(PositionError::InvalidRange(InvalidRange { first: 3, last: 1, len: 5 })),
        "A reversed range should be rejected."
    );

    let collected: Vector<_> = (0..4).collect();
    assert_eq!(&*collected, &[0, 1, 2, 3]);
}

#[test]
fn test_clone_and_move() {
    let mut vec = Vector::from([1, 2, 3]);
    vec.reserve(8);

    let clone = vec.clone();
    assert_eq!(clone, vec);
    assert_eq!(clone.cap(), 8, "A clone should keep the capacity of the original.");

    let moved = std::mem::take(&mut vec);
    assert!(vec.is_empty(), "A moved-from Vector should be empty.");
    assert_eq!(vec.cap(), 0);
    assert_eq!(&*moved, &[1, 2, 3]);

    let mut other = Vector::from([9]);
    let mut moved = moved;
    moved.swap_with(&mut other);
    assert_eq!(&*moved, &[9]);
    assert_eq!(&*other, &[1, 2, 3]);
}

#[test_log::test]
fn test_push_growth() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    vec.push_back(6);
    assert_eq!(vec.cap(), 12, "A full Vector should grow to (cap + 1) * 2.");
    assert_eq!(vec.len(), 6);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6]);

    let mut vec = Vector::new();
    let mut caps = Vector::new();
    for i in 0..7 {
        vec.push_back(i);
        caps.push_back(vec.cap());
    }
    assert_eq!(&*caps, &[2, 2, 6, 6, 6, 6, 14], "Growth from 0 shouldn't stall.");
}

#[test]
fn test_pop_back() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    for expected in (1..=5).rev() {
        let len = vec.len();
        assert_eq!(vec.pop_back(), Ok(expected));
        assert_eq!(vec.len(), len - 1);
        assert_eq!(vec.cap(), 5, "Popping shouldn't change the capacity.");
    }
    assert_eq!(vec.pop_back(), Err(EmptyContainer));
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from(['a', 'b', 'c']);
    assert_eq!(vec.at(1), Ok(&'b'));
    assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *vec.at_mut(0).unwrap() = 'z';
    vec[2] = 'y';
    assert_eq!(&*vec, &['z', 'b', 'y']);
    assert_eq!(vec.front(), Some(&'z'));
    assert_eq!(vec.back(), Some(&'y'));

    *vec.back_mut().unwrap() = 'x';
    assert_eq!(vec[2], 'x');

    let empty: Vector<char> = Vector::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
}

#[test]
fn test_insert() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    let pos = vec.insert(vec.begin() + 2, 99).unwrap();
    assert_eq!(&*vec, &[1, 2, 99, 3, 4, 5]);
    assert_eq!(vec.len(), 6);
    assert_eq!(vec.get_at(pos), Ok(&99), "The returned Position should refer to the new value.");

    let pos = vec.insert(vec.end(), 100).unwrap();
    assert_eq!(pos, vec.end() - 1);
    assert_eq!(vec.back(), Some(&100));

    vec.insert(vec.begin(), 0).unwrap();
    assert_eq!(&*vec, &[0, 1, 2, 99, 3, 4, 5, 100]);
}

#[test_log::test]
fn test_insert_many() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    let pos = vec.insert_slice(vec.begin() + 1, &[10, 20, 30]).unwrap();
    assert_eq!(&*vec, &[1, 10, 20, 30, 2, 3, 4, 5]);
    assert_eq!(vec.cap(), 16, "Inserting past the capacity should grow to (len + k) * 2.");
    assert_eq!(pos.offset(), 1);

    let cap = vec.cap();
    vec.insert_iter(vec.end(), [6, 7, 8]).unwrap();
    assert_eq!(&*vec, &[1, 10, 20, 30, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(vec.cap(), cap, "Inserting within the capacity shouldn't reallocate.");

    let before = vec.begin();
    let pos = vec.insert_iter(vec.begin(), std::iter::empty()).unwrap();
    assert_eq!(pos, vec.begin());
    assert_eq!(vec.get_at(before), Ok(&1), "An empty insertion shouldn't invalidate Positions.");
}

#[test]
fn test_insert_into_empty() {
    let mut vec = Vector::new();
    vec.insert_slice(vec.begin(), &[1, 2, 3]).unwrap();
    assert_eq!(&*vec, &[1, 2, 3]);

    let mut vec = Vector::new();
    let end = vec.end();
    assert_eq!(end, vec.begin(), "begin and end of an empty Vector should be equal.");
    vec.insert_slice(end, &[1, 2, 3]).unwrap();
    assert_eq!(&*vec, &[1, 2, 3], "end is the same position as begin in an empty Vector.");

    let mut vec: Vector<i32> = Vector::new();
    assert_eq!(
        vec.insert(vec.begin() + 1, 1),
        Err(PositionError::EmptyContainer(EmptyContainer))
    );
    assert_eq!(vec.cap(), 0, "A rejected insertion shouldn't allocate.");
}

#[test]
fn test_insert_rejections() {
    let mut vec = Vector::from([1, 2, 3]);

    assert_eq!(
        vec.insert(vec.end() + 1, 4),
        Err(PositionError::InvalidPosition(InvalidPosition { offset: 4, len: 3 }))
    );
    assert_eq!(
        vec.insert(vec.begin() - 1, 0),
        Err(PositionError::InvalidPosition(InvalidPosition { offset: -1, len: 3 }))
    );

    let stale = vec.begin();
    vec.push_back(4);
    assert_eq!(
        vec.insert(stale, 0),
        Err(PositionError::StalePosition(StalePosition)),
        "Growing should invalidate Positions."
    );
    assert_eq!(&*vec, &[1, 2, 3, 4], "Rejected insertions shouldn't modify the Vector.");

    let other = Vector::from([5, 6]);
    assert!(
        vec.insert(other.begin(), 0).unwrap_err().is_stale_position(),
        "A Position from another Vector should be rejected."
    );
}

#[test]
fn test_erase() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    let next = vec.erase(vec.begin() + 1).unwrap();
    assert_eq!(&*vec, &[1, 3, 4, 5]);
    assert_eq!(vec.get_at(next), Ok(&3));
    assert_eq!(vec.cap(), 5, "Erasing shouldn't change the capacity.");

    let next = vec.erase(vec.end() - 1).unwrap();
    assert_eq!(next, vec.end(), "Erasing the last element should return end.");

    assert_eq!(
        vec.erase(vec.end()),
        Err(PositionError::InvalidPosition(InvalidPosition { offset: 3, len: 3 }))
    );

    let mut empty: Vector<i32> = Vector::new();
    assert_eq!(empty.erase(empty.begin()), Err(PositionError::EmptyContainer(EmptyContainer)));
    assert_eq!(
        empty.erase_range(empty.begin(), empty.end()),
        Err(PositionError::EmptyContainer(EmptyContainer)),
        "An empty range on an empty Vector should still be rejected."
    );
}

#[test]
fn test_erase_range() {
    let values = [1, 2, 3, 4, 5];

    let mut vec = Vector::from(values);
    let next = vec.erase_range(vec.begin(), vec.begin() + 3).unwrap();
    assert_eq!(&*vec, &[4, 5]);
    assert_eq!(next, vec.begin());

    let mut vec = Vector::from(values);
    let next = vec.erase_range(vec.begin() + 1, vec.begin() + 4).unwrap();
    assert_eq!(&*vec, &[1, 5]);
    assert_eq!(next, vec.begin() + 1);

    let mut vec = Vector::from(values);
    let next = vec.erase_range(vec.begin() + 2, vec.end()).unwrap();
    assert_eq!(&*vec, &[1, 2]);
    assert_eq!(next, vec.end());

    let mut vec = Vector::from(values);
    let next = vec.erase_range(vec.begin(), vec.end()).unwrap();
    assert!(vec.is_empty());
    assert_eq!(next, vec.end());

    let mut vec = Vector::from(values);
    assert!(vec.erase_range(vec.begin(), vec.end() + 1).unwrap_err().is_invalid_range());
    assert!(vec.erase_range(vec.begin() + 2, vec.begin() + 1).unwrap_err().is_invalid_range());
    assert_eq!(&*vec, &values, "Rejected erasures shouldn't modify the Vector.");
}

#[test]
fn test_reserve_and_shrink() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    vec.reserve(10);
    assert_eq!(vec.cap(), 10);
    vec.reserve(4);
    assert_eq!(vec.cap(), 10, "Reserving less than the capacity should do nothing.");
    assert_eq!(&*vec, &[1, 2, 3, 4, 5]);

    vec.pop_back().unwrap();
    vec.pop_back().unwrap();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3]);
}

#[test]
fn test_assign() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    vec.assign(3, 9);
    assert_eq!(&*vec, &[9, 9, 9]);
    assert_eq!(vec.cap(), 5, "Assigning fewer values shouldn't reallocate.");

    vec.assign(10, 8);
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.cap(), 10, "Assigning more values should reallocate to exactly that count.");
    assert!(vec.iter().all(|i| *i == 8));

    vec.assign_slice(&[1, 2]);
    assert_eq!(&*vec, &[1, 2]);
    assert_eq!(vec.cap(), 10);

    vec.assign_iter(0..4);
    assert_eq!(&*vec, &[0, 1, 2, 3]);
}

#[test]
fn test_clear() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    let pos = vec.begin();
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 5, "Clearing should keep the capacity.");
    assert_eq!(vec.get_at(pos), Err(PositionError::StalePosition(StalePosition)));
}

#[test]
fn test_equality() {
    let vec = Vector::from([1, 2, 3, 4, 5]);
    let mut roomy = Vector::from([1, 2, 3, 4, 5]);
    roomy.reserve(20);

    assert_eq!(vec, vec);
    assert_eq!(vec, roomy, "Capacity shouldn't affect equality.");
    assert_ne!(vec, Vector::from([1, 2, 3, 4]));
    assert_ne!(vec, Vector::from([1, 2, 8, 4, 5]));
}

#[test]
fn test_positions() {
    let vec = Vector::from([10, 20, 30, 40, 50]);
    let begin = vec.begin();

    let mut pos = begin;
    assert_eq!(pos.inc(), begin + 1, "inc should return the new Position.");
    assert_eq!(pos.post_inc(), begin + 1, "post_inc should return the old Position.");
    assert_eq!(pos, begin + 2);
    assert_eq!(pos.dec(), begin + 1);
    assert_eq!(pos.post_dec(), begin + 1);
    assert_eq!(pos, begin);

    let mut pos = 3 + begin;
    assert_eq!(vec.get_at(pos), Ok(&40));
    pos -= 2;
    assert_eq!(vec.get_at(pos), Ok(&20));
    pos += 3;
    assert_eq!(vec.get_at(pos), Ok(&50));

    assert_eq!(vec.end() - begin, 5);
    assert_eq!(begin - vec.end(), -5);
    assert!(begin < vec.end());
    assert!(vec.end() > begin);
    let same = vec.begin();
    assert!(begin <= same && begin >= same);
    assert_ne!(begin, vec.end());

    assert_eq!(
        vec.get_at(vec.end()),
        Err(PositionError::InvalidPosition(InvalidPosition { offset: 5, len: 5 }))
    );
}

#[test]
fn test_position_overflow() {
    let vec = Vector::from([1, 2, 3]);
    let far = vec.begin() + isize::MAX;
    assert_eq!(far.offset(), isize::MAX);
    assert_eq!(vec.get_at(far), Err(PositionError::InvalidPosition(InvalidPosition {
        offset: isize::MAX,
        len: 3,
    })));

    assert_panics!({ far + 1 }, "Moving past isize::MAX should panic.");
    assert_panics!({
        let mut next = far;
        next.inc()
    });
    assert_panics!({ vec.begin() - isize::MAX - 2 });
    assert_panics!({ (vec.begin() - 2) - far }, "An unrepresentable distance should panic.");

    let mut pos = vec.begin() - isize::MAX - 1;
    assert_eq!(pos.offset(), isize::MIN);
    assert_panics!({ pos.dec() });
    assert_panics!({ pos -= 2 });
    assert_eq!(pos.offset(), isize::MIN, "A failed move shouldn't change the Position.");
}

#[test]
fn test_into_iter() {
    let vec = Vector::from([1, 2, 3]);
    let mut sum = 0;
    for i in &vec {
        sum += i;
    }
    assert_eq!(sum, 6);

    let mut vec = vec;
    for i in &mut vec {
        *i *= 10;
    }
    assert_eq!(vec.into_iter().rev().collect::<Vector<_>>(), Vector::from([30, 20, 10]));
}

#[test]
fn test_drops() {
    let counter = DropCounter::new();
    let mut vec: Vector<_> = (0..6).map(|_| counter.track()).collect();

    vec.erase(vec.begin()).unwrap();
    assert_eq!(counter.drops(), 1, "Erasing should drop the erased element.");

    vec.erase_range(vec.begin(), vec.begin() + 2).unwrap();
    assert_eq!(counter.drops(), 3);

    drop(vec.pop_back());
    assert_eq!(counter.drops(), 4);

    vec.assign(3, counter.track());
    assert_eq!(counter.drops(), 6, "Assigning should drop the previous contents.");

    let arr: Array<_> = vec.into();
    assert_eq!(counter.drops(), 6, "Converting to an Array shouldn't drop anything.");
    drop(arr);
    assert_eq!(counter.drops(), 9);

    let vec: Vector<_> = (0..4).map(|_| counter.track()).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 13, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_display() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.to_string(), "{ 1 2 3 | }, len=3, cap=3");
    vec.push_back(4);
    assert_eq!(vec.to_string(), "{ 1 2 3 4 | _ _ _ _ }, len=4, cap=8");
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Reserve(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (0usize..40, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        (0usize..40).prop_map(Op::Erase),
        (0usize..80).prop_map(Op::Reserve),
    ]
}

proptest! {
    #[test]
    fn prop_matches_model(ops in proptest::collection::vec(op_strategy(), 0..100)) {
        let mut vec = Vector::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    vec.push_back(v);
                    model.push(v);
                },
                Op::Pop => {
                    prop_assert_eq!(vec.pop_back().ok(), model.pop());
                },
                Op::Insert(i, v) => {
                    let offset = i % (model.len() + 1);
                    vec.insert(vec.begin() + offset as isize, v).unwrap();
                    model.insert(offset, v);
                },
                Op::Erase(i) => {
                    let result = vec.erase(vec.begin() + i as isize);
                    if i < model.len() {
                        prop_assert!(result.is_ok());
                        model.remove(i);
                    } else {
                        prop_assert!(result.is_err());
                    }
                },
                Op::Reserve(n) => vec.reserve(n),
            }

            prop_assert!(vec.len() <= vec.cap());
            prop_assert_eq!(&*vec, model.as_slice());
        }
    }

    #[test]
    fn prop_push_pop_round_trip(values in proptest::collection::vec(any::<i32>(), 0..30), x in any::<i32>()) {
        let mut vec = Vector::from_slice(&values);
        let before = vec.clone();
        vec.push_back(x);
        prop_assert_eq!(vec.pop_back(), Ok(x));
        prop_assert_eq!(vec, before);
    }

    #[test]
    fn prop_insert_erase_inverse(
        values in proptest::collection::vec(any::<i32>(), 0..30),
        i in 0usize..31,
        x in any::<i32>(),
    ) {
        let mut vec = Vector::from_slice(&values);
        let offset = (i % (values.len() + 1)) as isize;
        let pos = vec.insert(vec.begin() + offset, x).unwrap();
        vec.erase(pos).unwrap();
        prop_assert_eq!(&*vec, values.as_slice());
    }

    #[test]
    fn prop_position_arithmetic(
        values in proptest::collection::vec(any::<i32>(), 1..30),
        a in 0usize..30,
        b in 0usize..30,
    ) {
        let vec = Vector::from_slice(&values);
        let start = (a % values.len()) as isize;
        let n = (b % (values.len() - start as usize)) as isize;
        let it = vec.begin() + start;

        prop_assert_eq!((it + n) - n, it);
        prop_assert_eq!((it + n) - it, n);
        prop_assert_eq!(vec.get_at(it + n), Ok(&vec[(start + n) as usize]));
    }

    #[test]
    fn prop_equality(
        a in proptest::collection::vec(0i32..3, 0..6),
        b in proptest::collection::vec(0i32..3, 0..6),
    ) {
        let va = Vector::from_slice(&a);
        let vb = Vector::from_slice(&b);
        prop_assert_eq!(va == vb, a == b);
        prop_assert!(va == va.clone());
    }
}
