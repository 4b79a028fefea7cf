//! Structural audit of the two players' chain sets

use serde::Serialize;

use crate::board::{ChainSet, Diagonal, HexBoardGeometry, Reflection, derive_diagonal_chains};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainAudit {
    pub player1_lengths: Vec<usize>,
    pub player2_lengths: Vec<usize>,
    /// 1-indexed chains that bend.
    pub player1_crooked: Vec<usize>,
    pub player2_crooked: Vec<usize>,
    /// Same multiset of chain lengths for both players.
    pub lengths_symmetric: bool,
    /// Player 2's chains are the left-right mirror of player 1's.
    pub mirrored: bool,
    pub player1_matches_diagonals: bool,
    pub player2_matches_diagonals: bool,
}

impl ChainAudit {
    pub fn is_symmetric(&self) -> bool {
        self.player1_crooked.is_empty()
            && self.player2_crooked.is_empty()
            && self.lengths_symmetric
            && self.mirrored
    }
}

/// Audit a pair of chain sets against the board geometry.
pub fn audit_chains(
    player1: &ChainSet,
    player2: &ChainSet,
    geometry: &HexBoardGeometry,
) -> ChainAudit {
    let mut sorted1 = player1.lengths();
    let mut sorted2 = player2.lengths();
    sorted1.sort_unstable();
    sorted2.sort_unstable();

    ChainAudit {
        player1_lengths: player1.lengths(),
        player2_lengths: player2.lengths(),
        player1_crooked: player1.crooked_chains(geometry),
        player2_crooked: player2.crooked_chains(geometry),
        lengths_symmetric: sorted1 == sorted2,
        mirrored: player1.mirrors(player2, geometry, Reflection::LeftRight),
        player1_matches_diagonals: *player1
            == derive_diagonal_chains(geometry, Diagonal::DownRight),
        player2_matches_diagonals: *player2
            == derive_diagonal_chains(geometry, Diagonal::DownLeft),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_chains_pass() {
        let geometry = HexBoardGeometry::standard();
        let audit = audit_chains(&ChainSet::player1(), &ChainSet::player2(), &geometry);
        assert!(audit.is_symmetric());
        assert!(audit.player1_matches_diagonals);
        assert!(audit.player2_matches_diagonals);
        assert_eq!(audit.player1_lengths, vec![3, 4, 5, 4, 3]);
    }

    #[test]
    fn test_legacy_chains_flagged() {
        let geometry = HexBoardGeometry::standard();
        let audit = audit_chains(
            &ChainSet::player1(),
            &ChainSet::player2_legacy(),
            &geometry,
        );
        assert_eq!(audit.player2_crooked, vec![4]);
        assert!(audit.lengths_symmetric);
        assert!(!audit.player2_matches_diagonals);
        assert!(!audit.is_symmetric());
    }
}
