//! Winning chains for Hexuki
//!
//! Each player scores along five fixed chains of hexes. Player 1's chains run
//! down-right and player 2's run down-left; the two sets are expected to be
//! left-right mirror images of each other.

use std::collections::BTreeSet;

use super::{
    geometry::{HexBoardGeometry, Reflection},
    state_key::StateKey,
};
use crate::types::HexId;

/// Player 1 chains (down-right diagonals).
pub const PLAYER1_CHAINS: [&[usize]; 5] = [
    &[0, 2, 5],
    &[1, 4, 7, 10],
    &[3, 6, 9, 12, 15],
    &[8, 11, 14, 17],
    &[13, 16, 18],
];

/// Player 2 chains (down-left diagonals).
pub const PLAYER2_CHAINS: [&[usize]; 5] = [
    &[0, 1, 3],
    &[2, 4, 6, 8],
    &[5, 7, 9, 11, 13],
    &[10, 12, 14, 16],
    &[15, 17, 18],
];

/// Player 2 chains before the fourth chain was reordered into a straight line.
pub const PLAYER2_CHAINS_LEGACY: [&[usize]; 5] = [
    &[0, 1, 3],
    &[2, 4, 6, 8],
    &[5, 7, 9, 11, 13],
    &[12, 14, 16, 10],
    &[15, 17, 18],
];

/// Diagonal direction used when deriving chains from the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// Row +1, col +1.
    DownRight,
    /// Row +1, col -1.
    DownLeft,
}

impl Diagonal {
    fn col_step(self) -> i32 {
        match self {
            Diagonal::DownRight => 1,
            Diagonal::DownLeft => -1,
        }
    }
}

/// An ordered list of chains, numbered from 1 in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSet {
    chains: Vec<Vec<usize>>,
}

impl ChainSet {
    pub fn new(chains: Vec<Vec<usize>>) -> Self {
        Self { chains }
    }

    fn from_table(table: &[&[usize]]) -> Self {
        Self::new(table.iter().map(|chain| chain.to_vec()).collect())
    }

    pub fn player1() -> Self {
        Self::from_table(&PLAYER1_CHAINS)
    }

    pub fn player2() -> Self {
        Self::from_table(&PLAYER2_CHAINS)
    }

    pub fn player2_legacy() -> Self {
        Self::from_table(&PLAYER2_CHAINS_LEGACY)
    }

    pub fn chains(&self) -> &[Vec<usize>] {
        &self.chains
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// 1-indexed numbers of every chain that contains `hex`.
    pub fn containing(&self, hex: usize) -> BTreeSet<usize> {
        self.chains
            .iter()
            .enumerate()
            .filter(|(_, chain)| chain.contains(&hex))
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Chain lengths in order.
    pub fn lengths(&self) -> Vec<usize> {
        self.chains.iter().map(Vec::len).collect()
    }

    /// A chain is straight when every consecutive step has the same
    /// (row, col) delta.
    pub fn is_straight(chain: &[usize], geometry: &HexBoardGeometry) -> bool {
        let Some(coords) = chain
            .iter()
            .map(|&h| HexId::new(h).ok().map(|h| geometry.coords(h)))
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };

        let steps: BTreeSet<(i32, i32)> = coords
            .windows(2)
            .map(|pair| {
                (
                    i32::from(pair[1].row) - i32::from(pair[0].row),
                    i32::from(pair[1].col) - i32::from(pair[0].col),
                )
            })
            .collect();
        steps.len() <= 1
    }

    /// Chains (1-indexed) that are not straight lines.
    pub fn crooked_chains(&self, geometry: &HexBoardGeometry) -> Vec<usize> {
        self.chains
            .iter()
            .enumerate()
            .filter(|(_, chain)| !Self::is_straight(chain, geometry))
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Whether reflecting every chain of `self` yields exactly the hex sets of
    /// `other`'s chains (order inside a chain is ignored).
    pub fn mirrors(
        &self,
        other: &ChainSet,
        geometry: &HexBoardGeometry,
        reflection: Reflection,
    ) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let reflected: Option<BTreeSet<BTreeSet<usize>>> = self
            .chains
            .iter()
            .map(|chain| {
                chain
                    .iter()
                    .map(|&h| {
                        HexId::new(h)
                            .ok()
                            .and_then(|h| geometry.reflect(h, reflection))
                            .map(|m| m.index())
                    })
                    .collect::<Option<BTreeSet<usize>>>()
            })
            .collect();
        let target: BTreeSet<BTreeSet<usize>> = other
            .chains
            .iter()
            .map(|chain| chain.iter().copied().collect())
            .collect();

        reflected.is_some_and(|r| r == target)
    }

    /// Engine score of a position: sum over chains of the product of placed
    /// tile values. Chains with no tiles contribute 1.
    pub fn score(&self, state: &StateKey) -> u64 {
        self.chains
            .iter()
            .map(|chain| {
                chain
                    .iter()
                    .filter_map(|&h| state.board.get(h).and_then(|cell| cell.value()))
                    .map(u64::from)
                    .product::<u64>()
            })
            .sum()
    }
}

/// Return every chain (1-indexed) in `chains` containing `hex`.
pub fn chains_containing(hex: usize, chains: &ChainSet) -> BTreeSet<usize> {
    chains.containing(hex)
}

/// Rebuild a symmetric chain design by walking straight diagonals.
///
/// Walks start from hexes on the leading edge (top rows, or the left columns
/// for down-right / right columns for down-left), skip hexes already placed
/// in a chain, and keep chains of at least three hexes. Chains are ordered by
/// their starting hex, top to bottom, then toward the trailing edge.
pub fn derive_diagonal_chains(geometry: &HexBoardGeometry, diagonal: Diagonal) -> ChainSet {
    let mut used = BTreeSet::new();
    let mut chains: Vec<Vec<HexId>> = Vec::new();

    for start in HexId::all() {
        if used.contains(&start) {
            continue;
        }
        let c = geometry.coords(start);
        let on_edge = c.row <= 1
            || match diagonal {
                Diagonal::DownRight => c.col <= 1,
                Diagonal::DownLeft => c.col >= 3,
            };
        if !on_edge {
            continue;
        }

        let mut chain = vec![start];
        let mut current = geometry.coords(start);
        while let Some(next) = geometry.hex_at(
            i32::from(current.row) + 1,
            i32::from(current.col) + diagonal.col_step(),
        ) {
            chain.push(next);
            current = geometry.coords(next);
        }

        if chain.len() >= 3 {
            used.extend(chain.iter().copied());
            chains.push(chain);
        }
    }

    chains.sort_by_key(|chain| {
        let c = geometry.coords(chain[0]);
        let col = i32::from(c.col);
        match diagonal {
            Diagonal::DownRight => (c.row, col),
            Diagonal::DownLeft => (c.row, -col),
        }
    });

    ChainSet::new(
        chains
            .into_iter()
            .map(|chain| chain.into_iter().map(|h| h.index()).collect())
            .collect(),
    )
}
