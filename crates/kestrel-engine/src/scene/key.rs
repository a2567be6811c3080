use core::cmp::Ordering;

use super::ZOrder;

/// Paint-order key for render list members.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `seq`: ascending (attach order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    /// Z-layer read from the drawable at sort time.
    pub z: ZOrder,
    /// Attach sequence number. Unique within one list, so the key is total.
    pub seq: u64,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZOrder, seq: u64) -> Self {
        Self { z, seq }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.z.cmp(&other.z) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
