/*!
 * Segment Types
 * Common types for segment-list allocation
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Segment operation result
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Segment allocation errors
#[derive(Error, Debug, Clone)]
pub enum SegmentError {
    #[error("Invalid capacity: region size must be non-zero")]
    InvalidCapacity,

    #[error("Invalid allocation size: {0} (size must be non-zero)")]
    InvalidSize(Size),

    #[error("Out of memory: requested {requested} bytes, largest free segment {largest_free} bytes ({free} free / {total} total)")]
    OutOfMemory {
        requested: Size,
        largest_free: Size,
        free: Size,
        total: Size,
    },

    #[error("Invalid placement policy '{0}'. Valid: first_fit, best_fit, next_fit")]
    InvalidPolicy(String),
}

/// A contiguous span of the simulated region
///
/// Free iff `owner` is `None`. Segments never overlap and always cover the
/// region exactly; the allocator owns the only mutable sequence of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Address,
    pub size: Size,
    pub owner: Option<String>,
}

impl Segment {
    /// Create a free segment
    pub fn free(start: Address, size: Size) -> Self {
        Self {
            start,
            size,
            owner: None,
        }
    }

    /// Create an occupied segment
    pub fn owned(start: Address, size: Size, owner: impl Into<String>) -> Self {
        Self {
            start,
            size,
            owner: Some(owner.into()),
        }
    }

    /// Exclusive end address
    #[inline]
    pub fn end(&self) -> Address {
        self.start + self.size
    }

    /// Whether the segment is unowned
    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// Placement policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPolicy {
    /// First free segment large enough, in ascending address order
    FirstFit,
    /// Smallest free segment large enough; ties broken by lowest address
    BestFit,
    /// First fit resuming from the persistent scan cursor, wrapping once
    NextFit,
}

impl PlacementPolicy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> SegmentResult<Self> {
        match s.to_lowercase().as_str() {
            "first_fit" | "firstfit" | "ff" => Ok(Self::FirstFit),
            "best_fit" | "bestfit" | "bf" => Ok(Self::BestFit),
            "next_fit" | "nextfit" | "nf" => Ok(Self::NextFit),
            _ => Err(SegmentError::InvalidPolicy(s.to_string())),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first_fit",
            Self::BestFit => "best_fit",
            Self::NextFit => "next_fit",
        }
    }
}

impl Serialize for PlacementPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlacementPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionStats {
    pub total: Size,
    pub used: Size,
    pub free: Size,
    pub usage_percentage: f64,
    pub occupied_segments: usize,
    pub free_segments: usize,
    pub largest_free: Size,
}

impl RegionStats {
    /// External fragmentation: free space exists but no single free segment
    /// holds all of it
    pub fn is_fragmented(&self) -> bool {
        self.free > 0 && self.largest_free < self.free
    }
}
