/*!
 * Segment Allocator
 *
 * Ordered-list allocator over a fixed linear region.
 *
 * The allocator owns the one mutable segment sequence; it always covers
 * `[0, total_size)` contiguously with no overlaps, and no two adjacent
 * segments are free once a release has run its coalescing pass. Splitting,
 * merging, and compaction rebuild segment records rather than patching
 * neighbors in place, so no index survives a structural mutation.
 */

mod compact;
mod placement;
mod reclaim;

use super::types::{RegionStats, Segment, SegmentError, SegmentResult};
use crate::core::limits::{DEFAULT_REGION_SIZE, INITIAL_SEGMENT_CAPACITY};
use crate::core::types::Size;
use log::info;

/// Segment-list allocator
#[derive(Debug)]
pub struct SegmentAllocator {
    pub(super) segments: Vec<Segment>,
    pub(super) total_size: Size,
    // Next-fit resume position; clamped to 0 lazily when segment-count
    // changes push it out of range
    pub(super) scan_cursor: usize,
}

impl SegmentAllocator {
    /// Create an allocator over a region of `total_size` units
    ///
    /// Fails with `InvalidCapacity` for a zero-sized region; otherwise the
    /// region starts as a single free segment.
    pub fn new(total_size: Size) -> SegmentResult<Self> {
        if total_size == 0 {
            return Err(SegmentError::InvalidCapacity);
        }

        info!("Segment allocator initialized with {} units", total_size);

        let mut segments = Vec::with_capacity(INITIAL_SEGMENT_CAPACITY);
        segments.push(Segment::free(0, total_size));

        Ok(Self {
            segments,
            total_size,
            scan_cursor: 0,
        })
    }

    /// Fixed region capacity
    pub fn total_size(&self) -> Size {
        self.total_size
    }

    /// Ordered view of the segment sequence
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Owned copy of the segment sequence for the display boundary
    pub fn snapshot(&self) -> Vec<Segment> {
        self.segments.clone()
    }

    /// Region statistics
    pub fn stats(&self) -> RegionStats {
        let mut used = 0;
        let mut occupied_segments = 0;
        let mut free_segments = 0;
        let mut largest_free = 0;

        for segment in &self.segments {
            if segment.is_free() {
                free_segments += 1;
                largest_free = largest_free.max(segment.size);
            } else {
                occupied_segments += 1;
                used += segment.size;
            }
        }

        RegionStats {
            total: self.total_size,
            used,
            free: self.total_size - used,
            usage_percentage: (used as f64 / self.total_size as f64) * 100.0,
            occupied_segments,
            free_segments,
            largest_free,
        }
    }

    /// All segments held by an owner, in address order
    pub fn owner_segments(&self, owner: &str) -> Vec<Segment> {
        self.segments
            .iter()
            .filter(|s| s.owner.as_deref() == Some(owner))
            .cloned()
            .collect()
    }

    /// Total bytes held by an owner
    pub fn owner_total(&self, owner: &str) -> Size {
        self.segments
            .iter()
            .filter(|s| s.owner.as_deref() == Some(owner))
            .map(|s| s.size)
            .sum()
    }
}

impl Default for SegmentAllocator {
    fn default() -> Self {
        Self {
            segments: vec![Segment::free(0, DEFAULT_REGION_SIZE)],
            total_size: DEFAULT_REGION_SIZE,
            scan_cursor: 0,
        }
    }
}

// Implement trait interfaces
impl super::traits::Allocator for SegmentAllocator {
    fn allocate(
        &mut self,
        owner: &str,
        size: Size,
        policy: super::types::PlacementPolicy,
    ) -> SegmentResult<crate::core::types::Address> {
        SegmentAllocator::allocate(self, owner, size, policy)
    }

    fn deallocate(&mut self, owner: &str) -> Size {
        SegmentAllocator::deallocate(self, owner)
    }

    fn compact(&mut self) -> Size {
        SegmentAllocator::compact(self)
    }
}

impl super::traits::RegionInfo for SegmentAllocator {
    fn total_size(&self) -> Size {
        SegmentAllocator::total_size(self)
    }

    fn segments(&self) -> &[Segment] {
        SegmentAllocator::segments(self)
    }

    fn snapshot(&self) -> Vec<Segment> {
        SegmentAllocator::snapshot(self)
    }

    fn stats(&self) -> RegionStats {
        SegmentAllocator::stats(self)
    }

    fn owner_segments(&self, owner: &str) -> Vec<Segment> {
        SegmentAllocator::owner_segments(self, owner)
    }

    fn owner_total(&self, owner: &str) -> Size {
        SegmentAllocator::owner_total(self, owner)
    }
}
