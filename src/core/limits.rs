/*!
 * Region Limits and Constants
 *
 * Centralized location for region-wide limits and defaults.
 */

/// Default simulated region capacity (1000 units)
/// Used when an allocator is built without an explicit capacity
pub const DEFAULT_REGION_SIZE: usize = 1000;

/// Initial segment-list capacity reserved at construction
/// A fresh region holds one segment; interactive workloads rarely
/// fragment past a few dozen
pub const INITIAL_SEGMENT_CAPACITY: usize = 16;
