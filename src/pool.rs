//! Scoped pool of reusable encode-scratch buffers. Checkout and release
//! are paired by an RAII guard rather than an ambient global, so a
//! checked-out buffer is always returned even if the caller unwinds.

use std::ops::{Deref, DerefMut};

use bytes::BytesMut;
use crossbeam_queue::ArrayQueue;

/// A bounded pool of [`BytesMut`] buffers. Lock-free and `Send + Sync`, so
/// it can be shared across threads behind an `Arc` with no mutex.
pub struct Pool {
    queue: ArrayQueue<BytesMut>,
    default_capacity: usize,
}

impl Pool {
    /// Create a pool holding at most `pool_size` buffers, each allocated
    /// fresh at `default_capacity` bytes when the pool is empty.
    ///
    /// # Panics
    /// Panics if `pool_size` is `0`.
    pub fn new(pool_size: usize, default_capacity: usize) -> Pool {
        assert!(pool_size > 0, "pool size must be non-zero");
        Pool {
            queue: ArrayQueue::new(pool_size),
            default_capacity,
        }
    }

    /// Acquire a buffer, reusing a pooled one if available or allocating
    /// fresh otherwise. The returned guard returns its buffer to the pool
    /// (cleared) when dropped.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buf = self
            .queue
            .pop()
            .unwrap_or_else(|| BytesMut::with_capacity(self.default_capacity));
        PooledBuffer { pool: self, buf }
    }

    /// Number of buffers currently sitting idle in the pool.
    pub fn available(&self) -> usize {
        self.queue.len()
    }

    fn release(&self, mut buf: BytesMut) {
        buf.clear();
        // Pool is momentarily saturated: drop the buffer rather than
        // block or error, since release happens from `Drop` and cannot
        // propagate a failure.
        let _ = self.queue.push(buf);
    }
}

/// An RAII-scoped checkout from a [`Pool`]. Dereferences to the underlying
/// [`BytesMut`]; on drop the buffer is cleared and returned to the pool.
pub struct PooledBuffer<'a> {
    pool: &'a Pool,
    buf: BytesMut,
}

impl Deref for PooledBuffer<'_> {
    type Target = BytesMut;
    fn deref(&self) -> &BytesMut {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut BytesMut {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        let buf = std::mem::replace(&mut self.buf, BytesMut::new());
        self.pool.release(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_returns_buffer_with_default_capacity() {
        let pool = Pool::new(2, 64);
        let buf = pool.acquire();
        assert_eq!(buf.capacity(), 64);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn acquire_release_roundtrip_reuses_buffer() {
        let pool = Pool::new(1, 16);
        {
            let mut buf = pool.acquire();
            buf.extend_from_slice(b"hello");
        }
        assert_eq!(pool.available(), 1);
        let buf = pool.acquire();
        assert_eq!(buf.len(), 0, "returned buffer must be cleared");
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn pool_exhaustion_allocates_fresh() {
        let pool = Pool::new(1, 8);
        let a = pool.acquire();
        let b = pool.acquire();
        assert_eq!(a.capacity(), 8);
        assert_eq!(b.capacity(), 8);
    }

    #[test]
    fn excess_returns_are_dropped_not_queued_forever() {
        let pool = Pool::new(1, 8);
        let a = pool.acquire();
        let b = pool.acquire();
        drop(a);
        drop(b);
        assert_eq!(pool.available(), 1);
    }

    #[test]
    #[should_panic]
    fn zero_pool_size_panics() {
        Pool::new(0, 8);
    }

    #[test]
    fn pooled_buffer_feeds_encode_into_directly() {
        use crate::value::Field;

        let pool = Pool::new(1, 64);
        let mut buf = pool.acquire();
        crate::codec::encode_into(&mut *buf, &[Field::Str("alice".to_owned())]);
        assert!(!buf.is_empty());

        let decoded = crate::codec::decode_record(&buf);
        assert_eq!(decoded, vec![crate::value::Value::Str("alice".to_owned())]);
    }
}
