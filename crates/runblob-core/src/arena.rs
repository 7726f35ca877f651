use std::ops::{Index, IndexMut};

use crate::error::{Result, RunblobError};

/// Whether a stage consumed all of its input or stopped at arena capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coverage {
    #[default]
    Complete,
    Truncated,
}

impl Coverage {
    pub fn is_truncated(self) -> bool {
        matches!(self, Coverage::Truncated)
    }
}

/// Fixed-capacity storage, allocated once and logically cleared each frame.
///
/// Entries are addressed by their insertion index, which stays stable until
/// the next `clear()`. The backing `Vec` is reserved up front and `push`
/// refuses to grow it, so steady-state use never allocates.
#[derive(Debug)]
pub struct FixedArena<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> FixedArena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry and return its index, or `CapacityExhausted` when full.
    pub fn push(&mut self, item: T) -> Result<usize> {
        if self.items.len() >= self.capacity {
            return Err(RunblobError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(self.items.len() - 1)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of entries written this frame.
    pub fn used(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

// A derived clone would reserve only `len` slots.
impl<T: Clone> Clone for FixedArena<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Index<usize> for FixedArena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for FixedArena<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
