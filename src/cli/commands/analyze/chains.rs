//! Chain audit report

use anyhow::Result;

use crate::{
    analysis::{ChainAudit, audit_chains},
    board::{ChainSet, HexBoardGeometry},
    cli::output::{print_kv, print_section},
};

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub(super) fn print_audit(audit: &ChainAudit) {
    print_section("CHAIN AUDIT");
    print_kv("P1 chain lengths", &format!("{:?}", audit.player1_lengths));
    print_kv("P2 chain lengths", &format!("{:?}", audit.player2_lengths));
    print_kv("Lengths symmetric", yes_no(audit.lengths_symmetric));
    print_kv("P1 crooked chains", &format!("{:?}", audit.player1_crooked));
    print_kv("P2 crooked chains", &format!("{:?}", audit.player2_crooked));
    print_kv("Left-right mirror", yes_no(audit.mirrored));
    print_kv("P1 matches diagonals", yes_no(audit.player1_matches_diagonals));
    print_kv("P2 matches diagonals", yes_no(audit.player2_matches_diagonals));
    print_kv("Symmetric", yes_no(audit.is_symmetric()));
}

pub fn analyze(legacy: bool) -> Result<()> {
    let geometry = HexBoardGeometry::standard();
    let player1 = ChainSet::player1();
    let player2 = if legacy {
        ChainSet::player2_legacy()
    } else {
        ChainSet::player2()
    };

    print_section("CHAIN DEFINITIONS");
    for (i, chain) in player1.chains().iter().enumerate() {
        println!("  P1 chain {}: {chain:?}", i + 1);
    }
    for (i, chain) in player2.chains().iter().enumerate() {
        println!("  P2 chain {}: {chain:?}", i + 1);
    }

    let audit = audit_chains(&player1, &player2, &geometry);
    if !audit.is_symmetric() {
        log::warn!("chain sets are not symmetric");
    }
    print_audit(&audit);
    Ok(())
}
