use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::models::competition::ContestantRow;
use crate::models::submission::SubmissionRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based.
    pub rank: usize,
    pub contestant_id: Uuid,
    pub full_name: String,
    pub average_score: u32,
    pub scenarios_completed: usize,
    /// Best final score per scenario.
    pub scores: BTreeMap<Uuid, u32>,
}

/// Ranks contestants by the average of their best final score per scenario.
///
/// Contestants without submissions average 0. Ties keep the input order.
pub fn compute_leaderboard(
    contestants: &[ContestantRow],
    submissions: &[SubmissionRow],
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = contestants
        .iter()
        .map(|c| {
            let mut best: BTreeMap<Uuid, u32> = BTreeMap::new();
            for s in submissions.iter().filter(|s| s.contestant_id == c.id) {
                let score = s.effective_score();
                best.entry(s.scenario_id)
                    .and_modify(|b| *b = (*b).max(score))
                    .or_insert(score);
            }

            LeaderboardEntry {
                rank: 0,
                contestant_id: c.id,
                full_name: c.full_name.clone(),
                average_score: rounded_average(best.values().copied()),
                scenarios_completed: best.len(),
                scores: best,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.average_score.cmp(&a.average_score));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    entries
}

/// Mean rounded to the nearest integer, 0 for an empty input.
pub fn rounded_average(values: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, n), v| (sum + u64::from(v), n + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn contestant(name: &str) -> ContestantRow {
        ContestantRow {
            id: Uuid::new_v4(),
            competition_id: Uuid::nil(),
            full_name: name.into(),
            email: None,
            access_code: "ABC123".into(),
            created_at: Utc::now(),
        }
    }

    fn submission(contestant: &ContestantRow, scenario: Uuid, score: Option<i32>) -> SubmissionRow {
        SubmissionRow {
            id: Uuid::new_v4(),
            contestant_id: contestant.id,
            scenario_id: scenario,
            competition_id: Uuid::nil(),
            user_prompt: "Verfasse einen Bescheid".into(),
            refined_prompt: None,
            initial_score: score,
            final_score: score,
            ai_feedback: None,
            ai_suggestions: None,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_best_score_per_scenario_is_averaged() {
        let anna = contestant("Anna");
        let (s1, s2) = (Uuid::new_v4(), Uuid::new_v4());
        let subs = vec![
            submission(&anna, s1, Some(40)),
            submission(&anna, s1, Some(90)),
            submission(&anna, s2, Some(75)),
        ];
        let board = compute_leaderboard(&[anna.clone()], &subs);
        assert_eq!(board[0].scores[&s1], 90);
        // (90 + 75) / 2 = 82.5
        assert_eq!(board[0].average_score, 83);
        assert_eq!(board[0].scenarios_completed, 2);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties_and_ranks() {
        let a = contestant("A");
        let b = contestant("B");
        let c = contestant("C");
        let s = Uuid::new_v4();
        let subs = vec![
            submission(&a, s, Some(60)),
            submission(&b, s, Some(80)),
            submission(&c, s, Some(60)),
        ];
        let board = compute_leaderboard(&[a.clone(), b.clone(), c.clone()], &subs);
        let names: Vec<&str> = board.iter().map(|e| e.full_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        let ranks: Vec<usize> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_contestant_without_submissions_averages_zero() {
        let idle = contestant("Idle");
        let board = compute_leaderboard(&[idle], &[]);
        assert_eq!(board[0].average_score, 0);
        assert_eq!(board[0].scenarios_completed, 0);
        assert_eq!(board[0].rank, 1);
    }

    #[test]
    fn test_null_scores_count_as_zero() {
        let a = contestant("A");
        let s = Uuid::new_v4();
        let board = compute_leaderboard(&[a.clone()], &[submission(&a, s, None)]);
        assert_eq!(board[0].scores[&s], 0);
        assert_eq!(board[0].scenarios_completed, 1);
    }

    #[test]
    fn test_rounded_average() {
        assert_eq!(rounded_average([].into_iter()), 0);
        assert_eq!(rounded_average([1, 2].into_iter()), 2);
        assert_eq!(rounded_average([70, 71, 71].into_iter()), 71);
    }
}
