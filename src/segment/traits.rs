/*!
 * Segment Traits
 * Allocator abstractions consumed by the display layer
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Segment allocator interface
///
/// Every method is a read-modify-write over the whole segment sequence;
/// callers hold exclusive access for the duration of each call.
pub trait Allocator {
    /// Place a segment for an owner under the given policy
    fn allocate(
        &mut self,
        owner: &str,
        size: Size,
        policy: PlacementPolicy,
    ) -> SegmentResult<Address>;

    /// Free every segment held by an owner, returning the bytes released
    fn deallocate(&mut self, owner: &str) -> Size;

    /// Slide occupied segments down to address zero, returning the bytes moved
    fn compact(&mut self) -> Size;
}

/// Region query interface
///
/// Read-only; the display layer re-fetches after every mutating call since
/// compaction invalidates previously observed addresses.
pub trait RegionInfo {
    /// Fixed region capacity
    fn total_size(&self) -> Size;

    /// Ordered view of the segment sequence
    fn segments(&self) -> &[Segment];

    /// Owned copy of the segment sequence for display
    fn snapshot(&self) -> Vec<Segment>;

    /// Region statistics
    fn stats(&self) -> RegionStats;

    /// All segments held by an owner, in address order
    fn owner_segments(&self, owner: &str) -> Vec<Segment>;

    /// Total bytes held by an owner
    fn owner_total(&self, owner: &str) -> Size {
        self.owner_segments(owner).iter().map(|s| s.size).sum()
    }
}
