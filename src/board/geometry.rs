//! Static hex-board geometry
//!
//! The 19 hexes are laid out in a doubled-row grid: rows 0-8, columns 0-4,
//! with vertically adjacent hexes two rows apart and diagonal neighbours one
//! row and one column apart.

use serde::{Deserialize, Serialize};

use crate::types::{HEX_COUNT, HexId};

/// (row, col) of every hex, indexed by board position.
const HEX_COORDS: [(u8, u8); HEX_COUNT] = [
    (0, 2),
    (1, 1),
    (1, 3),
    (2, 0),
    (2, 2),
    (2, 4),
    (3, 1),
    (3, 3),
    (4, 0),
    (4, 2), // center
    (4, 4),
    (5, 1),
    (5, 3),
    (6, 0),
    (6, 2),
    (6, 4),
    (7, 1),
    (7, 3),
    (8, 2),
];

/// Grid coordinate of a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub row: u8,
    pub col: u8,
}

/// Reflections used to compare positions across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    /// 180° rotation through the center hex.
    Point,
    /// Mirror across the vertical axis through the center hex.
    LeftRight,
}

/// Board geometry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBoardGeometry {
    coords: [HexCoord; HEX_COUNT],
    center: HexId,
}

impl HexBoardGeometry {
    /// The geometry used by the game engine.
    pub fn standard() -> Self {
        let mut coords = [HexCoord { row: 0, col: 0 }; HEX_COUNT];
        for (slot, &(row, col)) in coords.iter_mut().zip(HEX_COORDS.iter()) {
            *slot = HexCoord { row, col };
        }
        Self {
            coords,
            center: HexId::CENTER,
        }
    }

    pub fn center(&self) -> HexId {
        self.center
    }

    pub fn coords(&self, hex: HexId) -> HexCoord {
        self.coords[hex.index()]
    }

    /// Find the hex at a grid coordinate.
    pub fn hex_at(&self, row: i32, col: i32) -> Option<HexId> {
        HexId::all().find(|&hex| {
            let c = self.coords(hex);
            i32::from(c.row) == row && i32::from(c.col) == col
        })
    }

    /// Euclidean distance between the grid coordinates of two hexes.
    ///
    /// This is a coarse near/far measure, not a hex-grid step count.
    pub fn distance(&self, a: HexId, b: HexId) -> f64 {
        let a = self.coords(a);
        let b = self.coords(b);
        let dr = f64::from(a.row) - f64::from(b.row);
        let dc = f64::from(a.col) - f64::from(b.col);
        (dr * dr + dc * dc).sqrt()
    }

    /// Reflected counterpart of `hex`, if it lands on the board.
    pub fn reflect(&self, hex: HexId, reflection: Reflection) -> Option<HexId> {
        let c = self.coords(hex);
        let center = self.coords(self.center);
        let (row, col) = (i32::from(c.row), i32::from(c.col));
        let (center_row, center_col) = (i32::from(center.row), i32::from(center.col));

        match reflection {
            Reflection::Point => self.hex_at(2 * center_row - row, 2 * center_col - col),
            Reflection::LeftRight => self.hex_at(row, 2 * center_col - col),
        }
    }

    pub fn is_adjacent(&self, a: HexId, b: HexId) -> bool {
        let a = self.coords(a);
        let b = self.coords(b);
        let dr = (i32::from(a.row) - i32::from(b.row)).abs();
        let dc = (i32::from(a.col) - i32::from(b.col)).abs();
        (dr == 2 && dc == 0) || (dr == 1 && dc == 1)
    }

    /// Hexes adjacent to `hex`, in board order.
    pub fn neighbors(&self, hex: HexId) -> Vec<HexId> {
        HexId::all()
            .filter(|&other| other != hex && self.is_adjacent(hex, other))
            .collect()
    }
}

impl Default for HexBoardGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(i: usize) -> HexId {
        HexId::new(i).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let geometry = HexBoardGeometry::standard();
        assert_eq!(geometry.distance(hex(9), hex(9)), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let geometry = HexBoardGeometry::standard();
        for a in HexId::all() {
            for b in HexId::all() {
                assert_eq!(geometry.distance(a, b), geometry.distance(b, a));
            }
        }
    }

    #[test]
    fn test_distance_values() {
        let geometry = HexBoardGeometry::standard();
        // (0,2) to (8,2)
        assert_eq!(geometry.distance(hex(0), hex(18)), 8.0);
        // (4,2) to (3,3)
        assert!((geometry.distance(hex(9), hex(7)) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_center_neighbors() {
        let geometry = HexBoardGeometry::standard();
        let neighbors: Vec<usize> = geometry
            .neighbors(geometry.center())
            .iter()
            .map(|h| h.index())
            .collect();
        assert_eq!(neighbors, vec![4, 6, 7, 11, 12, 14]);
    }

    #[test]
    fn test_point_reflection_pairs() {
        let geometry = HexBoardGeometry::standard();
        let pairs = [(4, 14), (6, 12), (7, 11), (0, 18), (9, 9)];
        for (a, b) in pairs {
            assert_eq!(geometry.reflect(hex(a), Reflection::Point), Some(hex(b)));
            assert_eq!(geometry.reflect(hex(b), Reflection::Point), Some(hex(a)));
        }
    }

    #[test]
    fn test_left_right_reflection() {
        let geometry = HexBoardGeometry::standard();
        assert_eq!(geometry.reflect(hex(2), Reflection::LeftRight), Some(hex(1)));
        assert_eq!(geometry.reflect(hex(10), Reflection::LeftRight), Some(hex(8)));
        assert_eq!(geometry.reflect(hex(14), Reflection::LeftRight), Some(hex(14)));
    }

    #[test]
    fn test_every_hex_reflects_onto_board() {
        let geometry = HexBoardGeometry::standard();
        for h in HexId::all() {
            assert!(geometry.reflect(h, Reflection::Point).is_some());
            assert!(geometry.reflect(h, Reflection::LeftRight).is_some());
        }
    }
}
