/*!
 * Segment Reclaim
 * Release by owner and free-segment coalescing
 */

use super::SegmentAllocator;
use crate::core::types::Size;
use crate::segment::types::Segment;
use log::{debug, info};

impl SegmentAllocator {
    /// Free every segment held by `owner`, returning the bytes released
    ///
    /// An owner may hold several disjoint segments; all are released in one
    /// call. A name that holds nothing is a no-op, not an error.
    pub fn deallocate(&mut self, owner: &str) -> Size {
        let mut freed = 0;
        let mut released = 0;
        for segment in &mut self.segments {
            if segment.owner.as_deref() == Some(owner) {
                freed += segment.size;
                released += 1;
                segment.owner = None;
            }
        }

        if released == 0 {
            debug!("Deallocate for unknown owner '{}' ignored", owner);
            return 0;
        }

        self.coalesce();

        info!(
            "Deallocated {} units across {} segments for '{}'",
            freed, released, owner
        );
        freed
    }

    /// Merge every run of adjacent free segments into a single segment
    ///
    /// Rebuilds the sequence in one left-to-right pass; handles runs of any
    /// length, restoring the no-adjacent-free invariant.
    fn coalesce(&mut self) {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in std::mem::take(&mut self.segments) {
            match merged.last_mut() {
                Some(last) if last.is_free() && segment.is_free() => last.size += segment.size,
                _ => merged.push(segment),
            }
        }
        self.segments = merged;

        // Merging shrinks the list; the next-fit cursor restarts if it fell off
        if self.scan_cursor >= self.segments.len() {
            self.scan_cursor = 0;
        }
    }
}
