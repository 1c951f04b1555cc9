/*!
 * Compaction Tests
 * Slide-down correctness, idempotence, and retry-after-compact
 */

use pretty_assertions::assert_eq;
use segsim::{PlacementPolicy, Segment, SegmentAllocator, SegmentError};

#[test]
fn test_compact_slides_occupied_segments_down() {
    let mut alloc = SegmentAllocator::new(600).unwrap();
    alloc.allocate("A", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("B", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("C", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.deallocate("A");
    // [free 100, B, C, free 300]

    let moved = alloc.compact();
    assert_eq!(moved, 200);
    assert_eq!(
        alloc.segments(),
        &[
            Segment::owned(0, 100, "B"),
            Segment::owned(100, 100, "C"),
            Segment::free(200, 400),
        ]
    );
}

#[test]
fn test_compact_preserves_relative_order() {
    let mut alloc = SegmentAllocator::new(300).unwrap();
    alloc.allocate("A", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("B", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("C", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.deallocate("B");

    let moved = alloc.compact();
    assert_eq!(moved, 100); // only C changed address
    assert_eq!(
        alloc.segments(),
        &[
            Segment::owned(0, 100, "A"),
            Segment::owned(100, 100, "C"),
            Segment::free(200, 100),
        ]
    );
}

#[test]
fn test_compact_exact_fill_has_no_tail() {
    let mut alloc = SegmentAllocator::new(300).unwrap();
    alloc.allocate("A", 150, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("B", 150, PlacementPolicy::FirstFit).unwrap();

    let moved = alloc.compact();
    assert_eq!(moved, 0);
    assert_eq!(
        alloc.segments(),
        &[Segment::owned(0, 150, "A"), Segment::owned(150, 150, "B")]
    );
}

#[test]
fn test_compact_fresh_region_is_noop() {
    let mut alloc = SegmentAllocator::new(1000).unwrap();

    let moved = alloc.compact();
    assert_eq!(moved, 0);
    assert_eq!(alloc.segments(), &[Segment::free(0, 1000)]);
}

#[test]
fn test_compact_is_idempotent() {
    crate::init_logging();
    let mut alloc = SegmentAllocator::new(1000).unwrap();
    alloc.allocate("A", 200, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("B", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("C", 150, PlacementPolicy::FirstFit).unwrap();
    alloc.deallocate("A");
    alloc.deallocate("C");

    alloc.compact();
    let once = alloc.snapshot();

    let moved = alloc.compact();
    assert_eq!(moved, 0);
    assert_eq!(alloc.snapshot(), once);
}

#[test]
fn test_oom_then_compact_then_success() {
    let mut alloc = SegmentAllocator::new(1000).unwrap();
    alloc.allocate("A", 200, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("B", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("C", 150, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("D", 50, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("E", 500, PlacementPolicy::FirstFit).unwrap();
    alloc.deallocate("A");
    alloc.deallocate("C");

    // 350 units free across two holes, but the largest hole is 200
    match alloc.allocate("X", 300, PlacementPolicy::FirstFit) {
        Err(SegmentError::OutOfMemory { largest_free, .. }) => assert_eq!(largest_free, 200),
        other => panic!("Expected OutOfMemory, got {:?}", other),
    }

    alloc.compact();
    assert_eq!(alloc.stats().largest_free, 350);

    // Post-compaction the free space is contiguous and the request fits
    let addr = alloc.allocate("X", 300, PlacementPolicy::FirstFit).unwrap();
    assert_eq!(addr, 650);
    crate::assert_region_covered(alloc.segments(), 1000);
}

#[test]
fn test_compact_invalidates_owner_addresses() {
    let mut alloc = SegmentAllocator::new(600).unwrap();
    alloc.allocate("A", 100, PlacementPolicy::FirstFit).unwrap();
    alloc.allocate("B", 200, PlacementPolicy::FirstFit).unwrap();
    alloc.deallocate("A");

    assert_eq!(alloc.owner_segments("B"), vec![Segment::owned(100, 200, "B")]);

    alloc.compact();

    // B's previously observed start is stale; re-fetching shows the new one
    assert_eq!(alloc.owner_segments("B"), vec![Segment::owned(0, 200, "B")]);
}

#[test]
fn test_next_fit_after_compaction_starts_from_zero() {
    let mut alloc = SegmentAllocator::new(500).unwrap();
    alloc.allocate("A", 100, PlacementPolicy::NextFit).unwrap();
    alloc.allocate("B", 100, PlacementPolicy::NextFit).unwrap();
    alloc.allocate("C", 100, PlacementPolicy::NextFit).unwrap();
    alloc.deallocate("B");

    alloc.compact();
    // [A, C, free 300 @200]; the scan cursor was reset with the rewrite

    let addr = alloc.allocate("X", 50, PlacementPolicy::NextFit).unwrap();
    assert_eq!(addr, 200);
    crate::assert_region_covered(alloc.segments(), 500);
}
