//! Fullscreen requests.
//!
//! Platforms expose fullscreen through different entry points, some of which
//! may be missing. The request walks them in order and silently gives up when
//! none is supported.

use crate::identity::StreamIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenOutcome {
    Entered,
    Unsupported,
}

/// One platform way of making the stage surface fullscreen.
pub trait FullscreenEntry {
    fn name(&self) -> &'static str;

    /// Tries to put the surface showing `target` into fullscreen.
    fn enter(&mut self, target: &StreamIdentity) -> FullscreenOutcome;
}

/// Tries each entry point in order. Returns the one that worked, if any.
///
/// Without a focused stream there is nothing to enlarge and no entry point
/// is touched.
pub fn request_fullscreen(
    entries: &mut [Box<dyn FullscreenEntry>],
    target: Option<&StreamIdentity>,
) -> Option<&'static str> {
    let target = target?;
    for entry in entries.iter_mut() {
        if entry.enter(target) == FullscreenOutcome::Entered {
            return Some(entry.name());
        }
    }
    None
}
