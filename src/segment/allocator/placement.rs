/*!
 * Placement Implementation
 * Policy scans and segment splitting
 */

use super::SegmentAllocator;
use crate::core::types::{Address, Size};
use crate::segment::types::{PlacementPolicy, Segment, SegmentError, SegmentResult};
use log::{debug, error, info};

impl SegmentAllocator {
    /// Place a segment of `size` units for `owner` under the given policy
    ///
    /// On success the chosen free segment is replaced by an occupied segment
    /// at the same start; any remainder stays free immediately after it.
    /// Failure reports `OutOfMemory` with the fragmentation breakdown and
    /// leaves the region untouched, so the caller may compact and retry.
    pub fn allocate(
        &mut self,
        owner: &str,
        size: Size,
        policy: PlacementPolicy,
    ) -> SegmentResult<Address> {
        if size == 0 {
            return Err(SegmentError::InvalidSize(size));
        }

        let index = match policy {
            PlacementPolicy::FirstFit => self.first_fit(size),
            PlacementPolicy::BestFit => self.best_fit(size),
            PlacementPolicy::NextFit => self.next_fit(size),
        };

        let index = match index {
            Some(index) => index,
            None => {
                let stats = self.stats();
                error!(
                    "OOM: '{}' requested {} units under {}, largest free segment {} units ({} free / {} total)",
                    owner, size, policy, stats.largest_free, stats.free, stats.total
                );
                return Err(SegmentError::OutOfMemory {
                    requested: size,
                    largest_free: stats.largest_free,
                    free: stats.free,
                    total: stats.total,
                });
            }
        };

        if policy == PlacementPolicy::NextFit {
            // Resume after the chosen segment's original position so later
            // scans keep progressing instead of restarting
            self.scan_cursor = index + 1;
        }

        let address = self.place_at(index, owner, size);
        info!(
            "Allocated {} units at {} for '{}' ({})",
            size, address, owner, policy
        );
        Ok(address)
    }

    /// First free segment large enough, in ascending address order
    fn first_fit(&self, size: Size) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| segment.is_free() && segment.size >= size)
    }

    /// Smallest free segment large enough; first minimum wins on ties
    fn best_fit(&self, size: Size) -> Option<usize> {
        let mut best: Option<(usize, Size)> = None;
        for (index, segment) in self.segments.iter().enumerate() {
            if !segment.is_free() || segment.size < size {
                continue;
            }
            if best.map_or(true, |(_, best_size)| segment.size < best_size) {
                best = Some((index, segment.size));
            }
        }
        best.map(|(index, _)| index)
    }

    /// First fit starting at the scan cursor, wrapping the region exactly once
    ///
    /// A cursor pushed out of range by earlier merges restarts at zero; the
    /// cursor itself only moves on a successful placement.
    fn next_fit(&self, size: Size) -> Option<usize> {
        let len = self.segments.len();
        let start = if self.scan_cursor < len {
            self.scan_cursor
        } else {
            0
        };

        for offset in 0..len {
            let index = (start + offset) % len;
            let segment = &self.segments[index];
            if segment.is_free() && segment.size >= size {
                return Some(index);
            }
        }
        None
    }

    /// Replace the free segment at `index` with an occupied one, keeping any
    /// remainder free immediately after it
    fn place_at(&mut self, index: usize, owner: &str, size: Size) -> Address {
        let start = self.segments[index].start;
        let remainder = self.segments[index].size - size;

        self.segments[index] = Segment::owned(start, size, owner);
        if remainder > 0 {
            self.segments
                .insert(index + 1, Segment::free(start + size, remainder));
            debug!(
                "Split segment at {}: keeping {} units, {} units remain free at {}",
                start,
                size,
                remainder,
                start + size
            );
        }
        start
    }
}
