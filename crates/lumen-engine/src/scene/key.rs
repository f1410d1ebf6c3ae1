use core::cmp::Ordering;

/// Sort key for transparent draw items.
///
/// Ordering rules:
/// 1) `distance`: descending (farthest first, painter's order)
/// 2) `order`: ascending (input order for equal distances)
///
/// Distances compare with `f32::total_cmp`, so the order is total. Callers
/// map NaN to `f32::INFINITY` first; `total_cmp` alone would place a NaN by
/// its sign bit.
#[derive(Debug, Copy, Clone)]
pub struct DistanceKey {
    /// Euclidean distance from the eye to the drawable's anchor.
    pub distance: f32,
    /// Position in the input sequence.
    pub order: u32,
}

impl DistanceKey {
    #[inline]
    pub const fn new(distance: f32, order: u32) -> Self {
        Self { distance, order }
    }
}

impl Ord for DistanceKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match other.distance.total_cmp(&self.distance) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for DistanceKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DistanceKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DistanceKey {}
