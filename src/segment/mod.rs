/*!
 * Segment Module
 *
 * Segment-list allocator for a linear, byte-addressable region.
 *
 * ## Placement
 *
 * Three classic placement policies over an ordered segment list:
 * - **FirstFit**: first free segment large enough, scanning from address zero
 * - **BestFit**: smallest free segment large enough, first minimum wins
 * - **NextFit**: first fit resuming from a cursor that persists across calls,
 *   wrapping the region exactly once
 *
 * ## Features
 *
 * - **Splitting**: oversized free segments are split, the remainder stays free
 * - **Coalescing**: every release merges adjacent free segments, runs of any length
 * - **Compaction**: occupied segments slide down to address zero, leaving at
 *   most one trailing free segment
 * - **Per-owner views**: an owner may hold several disjoint segments; release
 *   frees all of them in one call
 */

pub mod allocator;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use allocator::SegmentAllocator;
pub use traits::*;
pub use types::*;
