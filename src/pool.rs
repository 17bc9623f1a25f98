use crate::basic::{GridPoint, BOARD_SIZE};
use crate::error::{Error, Result};
use std::ops::{Index, IndexMut};
use static_assertions::const_assert;

// SegmentId is stored in a u8
const_assert!(BOARD_SIZE <= u8::MAX as usize);

/// Stable index into the pool's slot array; a segment's identity for its
/// whole lifetime
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SegmentId(u8);

/// One unit of snake body. `next` points toward the tail, `prev` toward the
/// head; free slots reuse `next` as the free-list link.
#[derive(Copy, Clone, Debug)]
pub struct Segment {
    pub pos: GridPoint,
    pub next: Option<SegmentId>,
    pub prev: Option<SegmentId>,
}

/// Arena of exactly one slot per board cell. At all times every slot is
/// either linked into the snake's chain or onto the free list, never both:
/// `in_use_count() + free_count() == BOARD_SIZE`.
pub struct SegmentPool {
    slots: [Segment; BOARD_SIZE],
    free_head: Option<SegmentId>,
    free_len: usize,
}

impl SegmentPool {
    pub fn new() -> Self {
        let mut slots = [Segment {
            pos: GridPoint::ORIGIN,
            next: None,
            prev: None,
        }; BOARD_SIZE];
        for i in 0..BOARD_SIZE - 1 {
            slots[i].next = Some(SegmentId((i + 1) as u8));
        }
        Self {
            slots,
            free_head: Some(SegmentId(0)),
            free_len: BOARD_SIZE,
        }
    }

    /// Pop a slot off the free list. Which slot comes back is unspecified.
    pub fn acquire(&mut self) -> Result<SegmentId> {
        let id = self.free_head.ok_or(Error::PoolExhausted)?;
        self.free_head = self[id].next;
        self[id].next = None;
        self[id].prev = None;
        self.free_len -= 1;
        Ok(id)
    }

    /// Push a slot back onto the free list. The caller must have unlinked it
    /// from the chain and blanked its board cell already.
    pub fn release(&mut self, id: SegmentId) {
        self[id].next = self.free_head;
        self[id].prev = None;
        self.free_head = Some(id);
        self.free_len += 1;
    }

    pub fn free_count(&self) -> usize {
        self.free_len
    }

    pub fn in_use_count(&self) -> usize {
        BOARD_SIZE - self.free_len
    }
}

impl Index<SegmentId> for SegmentPool {
    type Output = Segment;

    fn index(&self, id: SegmentId) -> &Self::Output {
        &self.slots[id.0 as usize]
    }
}

impl IndexMut<SegmentId> for SegmentPool {
    fn index_mut(&mut self, id: SegmentId) -> &mut Self::Output {
        &mut self.slots[id.0 as usize]
    }
}

#[test]
fn test_conservation() {
    let mut pool = SegmentPool::new();
    assert_eq!(pool.free_count(), BOARD_SIZE);
    assert_eq!(pool.in_use_count(), 0);

    let a = pool.acquire().unwrap();
    let b = pool.acquire().unwrap();
    assert_ne!(a, b);
    assert_eq!(pool.free_count(), BOARD_SIZE - 2);
    assert_eq!(pool.in_use_count(), 2);

    pool.release(a);
    assert_eq!(pool.free_count(), BOARD_SIZE - 1);
    assert_eq!(pool.in_use_count(), 1);
}

#[test]
fn test_exhaustion() {
    let mut pool = SegmentPool::new();
    let mut ids = Vec::new();
    for _ in 0..BOARD_SIZE {
        ids.push(pool.acquire().unwrap());
    }
    // all ids are distinct
    let mut sorted = ids.clone();
    sorted.sort_by_key(|id| id.0);
    sorted.dedup();
    assert_eq!(sorted.len(), BOARD_SIZE);

    assert!(matches!(pool.acquire(), Err(Error::PoolExhausted)));

    pool.release(ids[7]);
    assert_eq!(pool.acquire().unwrap(), ids[7]);
}

#[test]
fn test_acquired_slot_is_unlinked() {
    let mut pool = SegmentPool::new();
    let id = pool.acquire().unwrap();
    assert_eq!(pool[id].next, None);
    assert_eq!(pool[id].prev, None);
}
