/*!
 * Region Compaction
 * Slide occupied segments down to eliminate free gaps
 */

use super::SegmentAllocator;
use crate::core::types::{Address, Size};
use crate::segment::types::Segment;
use log::info;

impl SegmentAllocator {
    /// Relocate every occupied segment to the lowest available address,
    /// preserving relative order, owner, and size
    ///
    /// At most one free segment survives, at the tail; none if occupied
    /// segments fill the region exactly. Every previously observed address
    /// is invalidated. Returns the total bytes whose address changed.
    pub fn compact(&mut self) -> Size {
        let mut compacted: Vec<Segment> = Vec::with_capacity(self.segments.len());
        let mut cursor: Address = 0;
        let mut moved: Size = 0;
        let mut relocated = 0;

        for segment in std::mem::take(&mut self.segments) {
            if segment.is_free() {
                continue;
            }
            if segment.start != cursor {
                moved += segment.size;
                relocated += 1;
            }
            cursor += segment.size;
            let start = cursor - segment.size;
            compacted.push(Segment { start, ..segment });
        }

        let remaining = self.total_size - cursor;
        if remaining > 0 {
            compacted.push(Segment::free(cursor, remaining));
        }

        self.segments = compacted;
        // The rewrite invalidates every index the cursor could reference
        self.scan_cursor = 0;

        info!(
            "Compaction complete: {} segments relocated ({} units), {} units free at tail",
            relocated, moved, remaining
        );
        moved
    }
}
