//! Media handle of one stream instance.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Refers to the frames of exactly one stream instance.
///
/// A stream that leaves and comes back under the same identity gets a new
/// handle, so textures of the old instance are never shown for the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamHandle(u64);

impl StreamHandle {
    /// Allocates a handle that has never been used in this process.
    pub fn fresh() -> Self {
        StreamHandle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// Texture name used when uploading this stream's frames
    pub fn texture_name(&self) -> String {
        format!("stream-{}", self.0)
    }
}

impl fmt::Display for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_handles_are_unique() {
        let a = StreamHandle::fresh();
        let b = StreamHandle::fresh();
        assert_ne!(a, b);
        assert_ne!(a.texture_name(), b.texture_name());
    }
}
