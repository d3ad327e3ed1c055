//! Free-list of reusable [`Vector2D`] scratch values
//!
//! The pool is an ordinary value owned by the simulation context and passed
//! by `&mut` to anything that needs temporaries. Ownership rules:
//! - `get` moves a vector out; the caller owns it exclusively
//! - `release` moves it back (zeroed); it can't be released twice
//! - beyond `capacity` released vectors are simply dropped

use super::Vector2D;
use crate::consts::POOL_CAPACITY;

#[derive(Debug)]
pub struct VectorPool {
    free: Vec<Vector2D>,
    capacity: usize,
    /// Vectors built fresh because the free-list was empty
    constructed: usize,
}

impl Default for VectorPool {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorPool {
    /// Pool with the standard cap of [`POOL_CAPACITY`] entries
    pub fn new() -> Self {
        Self::with_capacity(POOL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
            constructed: 0,
        }
    }

    /// Borrow a vector set to `(x, y)`, reusing the most recently released one
    pub fn get(&mut self, x: f64, y: f64) -> Vector2D {
        match self.free.pop() {
            Some(mut v) => {
                v.set(x, y);
                v
            }
            None => {
                self.constructed += 1;
                Vector2D::new(x, y)
            }
        }
    }

    /// Return a vector. It is zeroed, or dropped if the pool is full.
    pub fn release(&mut self, mut v: Vector2D) {
        if self.free.len() < self.capacity {
            v.zero();
            self.free.push(v);
        } else {
            log::trace!("vector pool full ({}), dropping released vector", self.capacity);
        }
    }

    /// Drop every pooled vector
    pub fn clear(&mut self) {
        log::debug!("clearing vector pool ({} free)", self.free.len());
        self.free.clear();
    }

    /// Number of vectors waiting for reuse
    #[inline]
    pub fn len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn constructed(&self) -> usize {
        self.constructed
    }
}
