//! HexGrid: the fixed set of cells covering a hexagonal region.
//!
//! Cells are created once at construction for every coordinate within the
//! radius and are never added, removed, or relocated afterwards. Lookups go
//! through a hash index; iteration follows coordinate order.

use std::collections::HashMap;

use glam::Vec2;

use hexfront_core::constants::HEX_SIZE;
use hexfront_core::enums::TerrainType;
use hexfront_core::hex::{CubeCoordinate, HexLayout, DIRECTIONS};
use hexfront_core::types::Rect;

use crate::cell::Cell;

/// Hexagonal map of a given radius.
#[derive(Debug, Clone)]
pub struct HexGrid {
    radius: i32,
    layout: HexLayout,
    /// Sorted by coordinate.
    cells: Vec<Cell>,
    index: HashMap<CubeCoordinate, usize>,
}

impl HexGrid {
    /// Create a grid of `radius` with the default hex size.
    pub fn new(radius: i32) -> Self {
        Self::with_hex_size(radius, HEX_SIZE)
    }

    /// Create a grid of `radius` whose hexes measure `hex_size` from center to vertex.
    /// A negative radius yields an empty grid. `hex_size` must be positive and
    /// finite for position lookups to mean anything; `SimConfig::validate`
    /// checks both before the engine builds its grid.
    pub fn with_hex_size(radius: i32, hex_size: f32) -> Self {
        let capacity = cell_count(radius);
        let mut cells = Vec::with_capacity(capacity);
        let mut index = HashMap::with_capacity(capacity);

        for q in -radius..=radius {
            let r1 = (-radius).max(-q - radius);
            let r2 = radius.min(-q + radius);
            for r in r1..=r2 {
                let coord = CubeCoordinate::axial(q, r);
                index.insert(coord, cells.len());
                cells.push(Cell::new(coord));
            }
        }

        tracing::debug!(radius, hex_size, cells = cells.len(), "hex grid built");

        Self {
            radius,
            layout: HexLayout::new(hex_size),
            cells,
            index,
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn hex_size(&self) -> f32 {
        self.layout.size
    }

    pub fn layout(&self) -> HexLayout {
        self.layout
    }

    /// Number of cells (3R² + 3R + 1).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        self.index.contains_key(&coord)
    }

    /// Cell at `coord`, or `None` outside the radius.
    pub fn cell(&self, coord: CubeCoordinate) -> Option<&Cell> {
        self.index.get(&coord).map(|&i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, coord: CubeCoordinate) -> Option<&mut Cell> {
        match self.index.get(&coord) {
            Some(&i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Coordinate of the cell containing a plane position (the cell may not exist).
    pub fn coord_at(&self, pos: Vec2) -> CubeCoordinate {
        self.layout.to_cube(pos)
    }

    /// Plane position of a cell center.
    pub fn position_of(&self, coord: CubeCoordinate) -> Vec2 {
        self.layout.to_pixel(coord)
    }

    pub fn cell_at_position(&self, pos: Vec2) -> Option<&Cell> {
        self.cell(self.coord_at(pos))
    }

    pub fn cell_at_position_mut(&mut self, pos: Vec2) -> Option<&mut Cell> {
        let coord = self.coord_at(pos);
        self.cell_mut(coord)
    }

    /// Neighbors of `coord` that exist in the grid, in direction order.
    pub fn adjacent_coords(&self, coord: CubeCoordinate) -> Vec<CubeCoordinate> {
        coord
            .neighbors()
            .into_iter()
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// True iff `b` is one canonical step from `a`.
    pub fn are_adjacent(&self, a: CubeCoordinate, b: CubeCoordinate) -> bool {
        DIRECTIONS.iter().any(|d| a + *d == b)
    }

    /// Existing coordinates within `range` steps of `center`, in coordinate order.
    ///
    /// Walks the hex-shaped offset region directly, so the cost is O(range²)
    /// regardless of grid size. Each candidate is re-checked against the exact
    /// distance before it is kept.
    pub fn cells_in_range(&self, center: CubeCoordinate, range: i32) -> Vec<CubeCoordinate> {
        let mut result = Vec::new();
        if range < 0 {
            return result;
        }
        // Every existing cell lies within this band of distances from `center`.
        let from_origin = center.distance(&CubeCoordinate::ORIGIN);
        if from_origin.saturating_sub(self.radius) > range {
            return result;
        }
        let range = range.min(self.radius.saturating_add(from_origin));
        for dq in -range..=range {
            let r1 = (-range).max(-dq - range);
            let r2 = range.min(-dq + range);
            for dr in r1..=r2 {
                let coord = center + CubeCoordinate::axial(dq, dr);
                if self.contains(coord) && center.distance(&coord) <= range {
                    result.push(coord);
                }
            }
        }
        result
    }

    /// Cells whose centers fall inside `view`.
    pub fn cells_in_bounds(&self, view: &Rect) -> Vec<&Cell> {
        self.cells
            .iter()
            .filter(|cell| view.contains(self.layout.to_pixel(cell.coord())))
            .collect()
    }

    /// Rectangle covering every cell center, padded by two hex sizes.
    pub fn bounds(&self) -> Rect {
        if self.cells.is_empty() {
            return Rect::default();
        }
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for cell in &self.cells {
            let p = self.layout.to_pixel(cell.coord());
            min = min.min(p);
            max = max.max(p);
        }
        let padding = Vec2::splat(self.layout.size * 2.0);
        Rect::new(min - padding, max + padding)
    }

    /// Set the terrain of a cell. Returns false if the cell doesn't exist.
    pub fn set_terrain(&mut self, coord: CubeCoordinate, terrain: TerrainType) -> bool {
        match self.cell_mut(coord) {
            Some(cell) => {
                cell.set_terrain(terrain);
                true
            }
            None => false,
        }
    }

    pub fn reset_visibility(&mut self) {
        for cell in &mut self.cells {
            cell.set_visible(false);
        }
    }

    pub fn set_all_visible(&mut self) {
        for cell in &mut self.cells {
            cell.set_visible(true);
        }
    }

    /// All cells in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Coordinates of visible cells, in coordinate order.
    pub fn visible_coords(&self) -> Vec<CubeCoordinate> {
        self.cells
            .iter()
            .filter(|c| c.is_visible())
            .map(|c| c.coord())
            .collect()
    }
}

/// 3R² + 3R + 1, computed in `usize` so large radii can't overflow.
fn cell_count(radius: i32) -> usize {
    match usize::try_from(radius) {
        Ok(r) => r
            .saturating_mul(r)
            .saturating_mul(3)
            .saturating_add(r.saturating_mul(3))
            .saturating_add(1),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count_matches_formula() {
        for radius in 0..6 {
            let grid = HexGrid::new(radius);
            assert_eq!(grid.len() as i32, 3 * radius * radius + 3 * radius + 1);
        }
        assert!(HexGrid::new(-1).is_empty());
    }

    #[test]
    fn test_every_cell_within_radius() {
        let grid = HexGrid::new(4);
        for cell in grid.iter() {
            assert!(cell.coord().distance(&CubeCoordinate::ORIGIN) <= 4);
        }
        assert!(grid.cell(CubeCoordinate::axial(5, 0)).is_none());
        assert!(grid.cell(CubeCoordinate::axial(4, -4)).is_some());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let grid = HexGrid::new(3);
        let coords: Vec<_> = grid.iter().map(|c| c.coord()).collect();
        let mut sorted = coords.clone();
        sorted.sort();
        assert_eq!(coords, sorted);
    }

    #[test]
    fn test_position_round_trip_for_every_cell() {
        let grid = HexGrid::new(8);
        for cell in grid.iter() {
            let p = grid.position_of(cell.coord());
            let back = grid.cell_at_position(p).map(|c| c.coord());
            assert_eq!(back, Some(cell.coord()));
        }
    }

    #[test]
    fn test_adjacent_coords_clipped_at_edge() {
        let grid = HexGrid::new(2);
        assert_eq!(grid.adjacent_coords(CubeCoordinate::ORIGIN).len(), 6);
        // A corner of a radius-2 grid has three neighbors inside.
        assert_eq!(grid.adjacent_coords(CubeCoordinate::axial(2, -2)).len(), 3);
        // An edge (non-corner) cell has four.
        assert_eq!(grid.adjacent_coords(CubeCoordinate::axial(2, -1)).len(), 4);
    }

    #[test]
    fn test_are_adjacent() {
        let grid = HexGrid::new(3);
        let a = CubeCoordinate::axial(0, 0);
        assert!(grid.are_adjacent(a, CubeCoordinate::axial(1, -1)));
        assert!(grid.are_adjacent(a, CubeCoordinate::axial(0, 1)));
        assert!(!grid.are_adjacent(a, a));
        assert!(!grid.are_adjacent(a, CubeCoordinate::axial(2, -1)));
    }

    #[test]
    fn test_range_zero_is_center() {
        let grid = HexGrid::new(3);
        let c = CubeCoordinate::axial(1, 1);
        assert_eq!(grid.cells_in_range(c, 0), vec![c]);
        assert!(grid.cells_in_range(CubeCoordinate::axial(9, 0), 0).is_empty());
    }

    #[test]
    fn test_range_matches_brute_force() {
        let grid = HexGrid::new(5);
        let center = CubeCoordinate::axial(3, -1);
        for range in 0..=4 {
            let got = grid.cells_in_range(center, range);
            let expected: Vec<_> = grid
                .iter()
                .map(|c| c.coord())
                .filter(|c| c.distance(&center) <= range)
                .collect();
            assert_eq!(got, expected, "range {range}");
        }
    }

    #[test]
    fn test_full_range_from_origin_covers_grid() {
        let grid = HexGrid::new(3);
        assert_eq!(grid.cells_in_range(CubeCoordinate::ORIGIN, 3).len(), grid.len());
        assert_eq!(grid.cells_in_range(CubeCoordinate::ORIGIN, 1).len(), 7);
    }

    #[test]
    fn test_oversized_range_is_clamped_to_grid() {
        let grid = HexGrid::new(3);
        let edge = CubeCoordinate::axial(3, -3);
        assert_eq!(grid.cells_in_range(CubeCoordinate::ORIGIN, i32::MAX).len(), grid.len());
        assert_eq!(grid.cells_in_range(edge, 1_000_000_000).len(), grid.len());
        // A far-away center whose disk misses the grid finds nothing.
        assert!(grid.cells_in_range(CubeCoordinate::axial(50, 0), 40).is_empty());
        assert_eq!(
            grid.cells_in_range(CubeCoordinate::axial(5, 0), 2),
            vec![CubeCoordinate::axial(3, 0)]
        );
    }

    #[test]
    fn test_cell_count_saturates_instead_of_overflowing() {
        assert_eq!(cell_count(-5), 0);
        assert_eq!(cell_count(2), 19);
        assert!(cell_count(100_000) > 0);
    }

    #[test]
    fn test_cells_in_bounds() {
        let grid = HexGrid::new(3);
        let everything = grid.bounds();
        assert_eq!(grid.cells_in_bounds(&everything).len(), grid.len());

        let tiny = Rect::centered(Vec2::ZERO, Vec2::splat(4.0));
        let hits = grid.cells_in_bounds(&tiny);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].coord(), CubeCoordinate::ORIGIN);
    }

    #[test]
    fn test_visibility_flags() {
        let mut grid = HexGrid::new(2);
        grid.set_all_visible();
        assert_eq!(grid.visible_coords().len(), grid.len());
        grid.reset_visibility();
        assert!(grid.visible_coords().is_empty());
    }

    #[test]
    fn test_set_terrain() {
        let mut grid = HexGrid::new(1);
        assert!(grid.set_terrain(CubeCoordinate::axial(1, 0), TerrainType::Water));
        assert_eq!(
            grid.cell(CubeCoordinate::axial(1, 0)).map(|c| c.terrain()),
            Some(TerrainType::Water)
        );
        assert!(!grid.set_terrain(CubeCoordinate::axial(3, 0), TerrainType::Urban));
    }
}
