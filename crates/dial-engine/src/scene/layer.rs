use core::cmp::Ordering;

/// Paint layer for draw items. Later variants appear on top of earlier ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum Layer {
    #[default]
    Marks,
    Hands,
    Pivot,
}

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `layer`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order within a layer)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub layer: Layer,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(layer: Layer, order: u32) -> Self {
        Self { layer, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.layer.cmp(&other.layer).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
