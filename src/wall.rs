//! Placement for the guestbook "sticky note" wall.
//!
//! Notes land on a grid, each nudged by a bounded random jitter so the wall
//! reads as hand-placed. Indices past the grid's capacity are dropped at a
//! uniformly random in-bounds spot instead of being rejected. This is a
//! layout heuristic, not a packing algorithm: overlap is possible and
//! acceptable, only containment inside the wall area is guaranteed.

use rand::Rng;
use ratatui::layout::Rect;

/// Note cell geometry in terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct NoteGeometry {
    pub cell_width: u16,
    pub cell_height: u16,
    pub gap: u16,
}

impl Default for NoteGeometry {
    fn default() -> Self {
        Self {
            cell_width: 24,
            cell_height: 6,
            gap: 2,
        }
    }
}

impl NoteGeometry {
    fn columns(&self, area: Rect) -> u16 {
        area.width / (self.cell_width + self.gap)
    }

    fn rows(&self, area: Rect) -> u16 {
        area.height / (self.cell_height + self.gap)
    }

    /// How many notes fit on the grid proper.
    pub fn capacity(&self, area: Rect) -> usize {
        self.columns(area) as usize * self.rows(area) as usize
    }
}

/// Compute positions for `count` notes inside `area`.
///
/// Grid slots are deterministic per index; only the jitter and the overflow
/// placement consume randomness. Every returned rect lies within `area`,
/// shrunk to the area's size if the area is smaller than one cell.
pub fn layout<R: Rng>(count: usize, area: Rect, geometry: NoteGeometry, rng: &mut R) -> Vec<Rect> {
    let width = geometry.cell_width.min(area.width);
    let height = geometry.cell_height.min(area.height);
    let columns = geometry.columns(area);
    let capacity = geometry.capacity(area);
    let jitter = (geometry.gap / 2) as i32;

    let max_x = i32::from(area.x) + i32::from(area.width - width);
    let max_y = i32::from(area.y) + i32::from(area.height - height);

    (0..count)
        .map(|index| {
            let (x, y) = if index < capacity {
                let column = (index as u16) % columns;
                let row = (index as u16) / columns;
                let base_x =
                    i32::from(area.x) + i32::from(column) * i32::from(width + geometry.gap);
                let base_y =
                    i32::from(area.y) + i32::from(row) * i32::from(height + geometry.gap);
                (
                    base_x + rng.gen_range(-jitter..=jitter),
                    base_y + rng.gen_range(-jitter..=jitter),
                )
            } else {
                (
                    rng.gen_range(i32::from(area.x)..=max_x),
                    rng.gen_range(i32::from(area.y)..=max_y),
                )
            };
            Rect::new(
                x.clamp(i32::from(area.x), max_x) as u16,
                y.clamp(i32::from(area.y), max_y) as u16,
                width,
                height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn contains(outer: Rect, inner: Rect) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom()
    }

    #[test]
    fn test_grid_positions_stay_in_bounds() {
        let area = Rect::new(2, 1, 100, 30);
        let geometry = NoteGeometry::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let capacity = geometry.capacity(area);
            for rect in layout(capacity, area, geometry, &mut rng) {
                assert!(contains(area, rect), "{:?} escapes {:?}", rect, area);
            }
        }
    }

    #[test]
    fn test_overflow_positions_stay_in_bounds() {
        let area = Rect::new(0, 0, 60, 20);
        let geometry = NoteGeometry::default();
        let capacity = geometry.capacity(area);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for rect in layout(capacity + 7, area, geometry, &mut rng) {
                assert!(contains(area, rect), "{:?} escapes {:?}", rect, area);
            }
        }
    }

    #[test]
    fn test_tiny_area_shrinks_notes_instead_of_escaping() {
        let area = Rect::new(0, 0, 10, 3);
        let mut rng = StdRng::seed_from_u64(7);
        for rect in layout(4, area, NoteGeometry::default(), &mut rng) {
            assert!(contains(area, rect));
            assert_eq!(rect.width, 10);
            assert_eq!(rect.height, 3);
        }
    }

    #[test]
    fn test_capacity_matches_grid_dimensions() {
        let geometry = NoteGeometry {
            cell_width: 10,
            cell_height: 4,
            gap: 2,
        };
        // 60 / 12 = 5 columns, 18 / 6 = 3 rows
        assert_eq!(geometry.capacity(Rect::new(0, 0, 60, 18)), 15);
    }

    #[test]
    fn test_jitter_bounded_by_half_gap() {
        let geometry = NoteGeometry {
            cell_width: 10,
            cell_height: 4,
            gap: 4,
        };
        let area = Rect::new(10, 10, 60, 30);
        let mut rng = StdRng::seed_from_u64(3);
        let rects = layout(1, area, geometry, &mut rng);
        // First grid slot sits at the area origin, so any offset is jitter.
        assert!(rects[0].x.abs_diff(area.x) <= 2);
        assert!(rects[0].y.abs_diff(area.y) <= 2);
    }
}
