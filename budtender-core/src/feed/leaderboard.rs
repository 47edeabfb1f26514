use crate::model::{LeaderboardEntry, UserId};

/// 1-based position of `user_id` in the server-ordered board.
#[must_use]
pub fn user_rank(entries: &[LeaderboardEntry], user_id: UserId) -> Option<usize> {
    entries
        .iter()
        .position(|e| e.user_id == user_id)
        .map(|idx| idx + 1)
}

#[must_use]
pub fn user_score(entries: &[LeaderboardEntry], user_id: UserId) -> Option<i64> {
    entries
        .iter()
        .find(|e| e.user_id == user_id)
        .map(|e| e.score)
}

/// Podium marker for the top three ranks.
#[must_use]
pub const fn medal(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Vec<LeaderboardEntry> {
        [(4, 90), (9, 70), (2, 10)]
            .into_iter()
            .map(|(user_id, score)| LeaderboardEntry {
                user_id,
                email: format!("u{user_id}@x.io"),
                score,
            })
            .collect()
    }

    #[test]
    fn rank_is_one_based() {
        let entries = board();
        assert_eq!(user_rank(&entries, 4), Some(1));
        assert_eq!(user_rank(&entries, 2), Some(3));
        assert_eq!(user_rank(&entries, 5), None);
        assert_eq!(user_score(&entries, 9), Some(70));
    }

    #[test]
    fn medals_stop_after_third() {
        assert!(medal(3).is_some());
        assert!(medal(4).is_none());
    }
}
