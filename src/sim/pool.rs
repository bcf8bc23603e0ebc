//! Fixed-capacity entity pools
//!
//! Entities are allocated once when the pool is built and then only toggled
//! between `Free` and `Active`. The pool never grows or shrinks.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a pooled entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    /// Inert and ready for reuse; not updated or drawn
    #[default]
    Free,
    /// Simulated and drawn every frame
    Active,
}

/// Implemented by entities that live in a `Pool`
pub trait Poolable {
    fn state(&self) -> SlotState;

    #[inline]
    fn is_free(&self) -> bool {
        self.state() == SlotState::Free
    }

    #[inline]
    fn is_active(&self) -> bool {
        self.state() == SlotState::Active
    }
}

#[derive(Debug, Clone)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T: Poolable> Pool<T> {
    /// Pre-allocate `capacity` entities
    pub fn new(capacity: usize, make: impl FnMut(usize) -> T) -> Self {
        Self {
            items: (0..capacity).map(make).collect(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// First free entity in index order, or `None` when the pool is exhausted
    pub fn first_free_mut(&mut self) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.is_free())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut().filter(|item| item.is_active())
    }

    pub fn free_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_free()).count()
    }

    pub fn active_count(&self) -> usize {
        self.capacity() - self.free_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Default)]
    struct Slot {
        id: usize,
        state: SlotState,
    }

    impl Poolable for Slot {
        fn state(&self) -> SlotState {
            self.state
        }
    }

    fn pool(capacity: usize) -> Pool<Slot> {
        Pool::new(capacity, |id| Slot {
            id,
            state: SlotState::Free,
        })
    }

    #[test]
    fn test_first_free_scans_in_order() {
        let mut pool = pool(3);
        pool.first_free_mut().unwrap().state = SlotState::Active;
        assert_eq!(pool.first_free_mut().unwrap().id, 1);

        pool.get_mut(0).unwrap().state = SlotState::Free;
        assert_eq!(pool.first_free_mut().unwrap().id, 0);
    }

    #[test]
    fn test_exhausted_pool_returns_none() {
        let mut pool = pool(2);
        while let Some(slot) = pool.first_free_mut() {
            slot.state = SlotState::Active;
        }
        assert!(pool.first_free_mut().is_none());
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn test_empty_pool() {
        let mut pool = pool(0);
        assert!(pool.first_free_mut().is_none());
        assert_eq!(pool.free_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_counts_always_sum_to_capacity(
            capacity in 0usize..16,
            ops in prop::collection::vec((any::<bool>(), 0usize..16), 0..100),
        ) {
            let mut pool = pool(capacity);
            for (start, index) in ops {
                if start {
                    if let Some(slot) = pool.first_free_mut() {
                        slot.state = SlotState::Active;
                    }
                } else if let Some(slot) = pool.get_mut(index) {
                    slot.state = SlotState::Free;
                }
                prop_assert_eq!(pool.capacity(), capacity);
                prop_assert_eq!(pool.free_count() + pool.active_count(), capacity);
                prop_assert_eq!(pool.iter_active().count(), pool.active_count());
            }
        }
    }
}
