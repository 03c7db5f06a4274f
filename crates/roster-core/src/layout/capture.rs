// ── Pointer capture ──
//
// While a column drag is in progress the table owns every mouse drag and
// mouse-up event, wherever it lands. Capture is acquired as a guard and
// released when the guard drops, so a table torn down mid-drag cannot leave
// the root routing events to nobody.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

/// Shared capture flag. The root checks it when routing mouse events; the
/// table acquires it when a drag starts.
#[derive(Debug, Clone, Default)]
pub struct PointerCapture {
    held: Arc<AtomicBool>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the capture. `None` if someone already holds it.
    pub fn acquire(&self) -> Option<CaptureGuard> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| {
                trace!("pointer capture acquired");
                CaptureGuard {
                    held: Arc::clone(&self.held),
                }
            })
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// Releases the capture on drop.
#[derive(Debug)]
pub struct CaptureGuard {
    held: Arc<AtomicBool>,
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
        trace!("pointer capture released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let capture = PointerCapture::new();
        assert!(!capture.is_held());

        let guard = capture.acquire().expect("free");
        assert!(capture.is_held());
        assert!(capture.clone().is_held());

        drop(guard);
        assert!(!capture.is_held());
    }

    #[test]
    fn second_acquire_fails_while_held() {
        let capture = PointerCapture::new();
        let _guard = capture.acquire().expect("free");
        assert!(capture.acquire().is_none());
    }
}
