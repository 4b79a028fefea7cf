//! Compare one state's moves across two policies

use serde::Serialize;

use crate::{Result, policy::PolicyDatabase};

/// The neutral opening position, where player 1 chooses a first move.
pub const DEFAULT_COMPARISON_STATE: &str = "1|null,null,null,null,null,null,null,null,null,1p0,null,null,null,null,null,null,null,null,null|p1a:123456789|p2a:123456789|p1u:|p2u:";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveChange {
    pub key: String,
    pub before: f64,
    pub after: f64,
    pub change: f64,
    pub games_before: u64,
    pub games_after: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyComparison {
    pub state: String,
    /// Largest absolute change first.
    pub changes: Vec<MoveChange>,
    /// Changes below `-threshold`, worst first.
    pub regressions: Vec<MoveChange>,
    /// Changes above `threshold`, best first.
    pub improvements: Vec<MoveChange>,
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
}

/// Per-move win-rate change of `state` from `first` to `second`.
///
/// # Errors
///
/// Returns [`crate::Error::StateNotFound`] if either policy lacks the state.
pub fn compare_policies(
    first: &PolicyDatabase,
    second: &PolicyDatabase,
    state: &str,
    threshold: f64,
) -> Result<PolicyComparison> {
    let before = first.require(state)?;
    let after = second.require(state)?;

    let mut changes = Vec::new();
    let mut only_in_first = Vec::new();
    for (key, old) in &before.actions {
        let Some(new) = after.actions.get(key) else {
            only_in_first.push(key.clone());
            continue;
        };
        changes.push(MoveChange {
            key: key.clone(),
            before: old.win_rate(),
            after: new.win_rate(),
            change: new.win_rate() - old.win_rate(),
            games_before: old.games_played,
            games_after: new.games_played,
        });
    }
    let only_in_second = after
        .actions
        .keys()
        .filter(|key| !before.actions.contains_key(*key))
        .cloned()
        .collect();

    changes.sort_by(|a, b| b.change.abs().total_cmp(&a.change.abs()));

    let mut regressions: Vec<MoveChange> = changes
        .iter()
        .filter(|c| c.change < -threshold)
        .cloned()
        .collect();
    regressions.sort_by(|a, b| a.change.total_cmp(&b.change));

    let mut improvements: Vec<MoveChange> = changes
        .iter()
        .filter(|c| c.change > threshold)
        .cloned()
        .collect();
    improvements.sort_by(|a, b| b.change.total_cmp(&a.change));

    Ok(PolicyComparison {
        state: state.to_string(),
        changes,
        regressions,
        improvements,
        only_in_first,
        only_in_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{ActionStats, ActionTable};

    fn policy(moves: &[(&str, f64)]) -> PolicyDatabase {
        let table: ActionTable = moves
            .iter()
            .map(|(key, wins)| {
                (
                    key.to_string(),
                    ActionStats {
                        games_played: 10,
                        total_weight: 10.0,
                        wins: *wins,
                        losses: 10.0 - wins,
                        ties: 0.0,
                    },
                )
            })
            .collect();
        let mut db = PolicyDatabase::new();
        db.insert(DEFAULT_COMPARISON_STATE, table);
        db
    }

    #[test]
    fn test_changes_sorted_by_magnitude() {
        let first = policy(&[("t1h7", 5.0), ("t2h4", 8.0), ("t3h6", 5.0), ("t9h0", 1.0)]);
        let second = policy(&[("t1h7", 6.0), ("t2h4", 4.0), ("t3h6", 7.0), ("t4h4", 5.0)]);
        let cmp = compare_policies(&first, &second, DEFAULT_COMPARISON_STATE, 0.1).unwrap();

        let keys: Vec<_> = cmp.changes.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["t2h4", "t3h6", "t1h7"]);
        assert_eq!(cmp.regressions.len(), 1);
        assert_eq!(cmp.regressions[0].key, "t2h4");
        assert_eq!(cmp.improvements.len(), 1);
        assert_eq!(cmp.improvements[0].key, "t3h6");
        assert_eq!(cmp.only_in_first, vec!["t9h0".to_string()]);
        assert_eq!(cmp.only_in_second, vec!["t4h4".to_string()]);
    }

    #[test]
    fn test_missing_state_is_error() {
        let first = policy(&[("t1h7", 5.0)]);
        let second = PolicyDatabase::new();
        let result = compare_policies(&first, &second, DEFAULT_COMPARISON_STATE, 0.1);
        assert!(matches!(result, Err(crate::Error::StateNotFound { .. })));
    }
}
