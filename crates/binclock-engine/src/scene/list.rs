use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// A list can be recorded once and replayed into later frames with
/// [`append`](Self::append); this is how the canvas keeps its static layer.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Replays every item of `other` after the items already recorded here.
    ///
    /// Z-indices are kept; insertion order is renumbered so replayed items
    /// stay behind anything pushed afterwards on the same layer.
    pub fn append(&mut self, other: &DrawList) {
        self.items.reserve(other.items.len());
        for item in &other.items {
            self.push(item.key.z, item.cmd.clone());
        }
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn circle_radius(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Circle(c) => c.radius,
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut dl = DrawList::new();
        dl.push_solid_circle(ZIndex(1), Vec2::zero(), 1.0, Color::white());
        dl.push_solid_circle(ZIndex(0), Vec2::zero(), 2.0, Color::white());
        dl.push_solid_circle(ZIndex(1), Vec2::zero(), 3.0, Color::white());

        let radii: Vec<f32> = dl.iter_in_paint_order().map(circle_radius).collect();
        assert_eq!(radii, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn append_keeps_replayed_items_first_within_layer() {
        let mut cached = DrawList::new();
        cached.push_solid_circle(ZIndex(0), Vec2::zero(), 1.0, Color::white());

        let mut frame = DrawList::new();
        frame.append(&cached);
        frame.push_solid_circle(ZIndex(0), Vec2::zero(), 2.0, Color::white());

        assert_eq!(frame.len(), 2);
        let radii: Vec<f32> = frame.iter_in_paint_order().map(circle_radius).collect();
        assert_eq!(radii, vec![1.0, 2.0]);
    }

    #[test]
    fn clear_resets_order() {
        let mut dl = DrawList::new();
        dl.push_solid_circle(ZIndex(0), Vec2::zero(), 1.0, Color::white());
        dl.clear();
        assert!(dl.is_empty());
        dl.push_solid_circle(ZIndex(0), Vec2::zero(), 1.0, Color::white());
        assert_eq!(dl.items()[0].key.order, 0);
        assert_eq!(dl.iter_in_paint_order().count(), 1);
    }
}
