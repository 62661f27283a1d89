//! Candidate aggregation — score buckets, top-N ranking, per-role averages,
//! and period-over-period change. Pure single-pass functions over the flat
//! candidate list; unevaluated or partial records are skipped, never an
//! error.

use crate::models::candidate::Candidate;
use crate::models::dashboard::{BucketCount, RoleStat, TopCandidate};
use crate::models::role::Role;

struct ScoreRange {
    label: &'static str,
    lo: f64,
    hi: f64,
}

/// Fixed chart buckets, highest first. Scores below 50 fall into no bucket,
/// matching the distribution chart's range.
const SCORE_BUCKETS: &[ScoreRange] = &[
    ScoreRange { label: "90-100", lo: 90.0, hi: 100.0 },
    ScoreRange { label: "80-89", lo: 80.0, hi: 89.0 },
    ScoreRange { label: "70-79", lo: 70.0, hi: 79.0 },
    ScoreRange { label: "60-69", lo: 60.0, hi: 69.0 },
    ScoreRange { label: "50-59", lo: 50.0, hi: 59.0 },
];

/// Partitions evaluated candidates into the fixed score buckets. Candidates
/// without a score are excluded entirely — they do not land in a zero bucket.
/// Every bucket is always present in the output, in fixed order, so chart
/// rendering never reorders.
pub fn score_distribution(candidates: &[Candidate]) -> Vec<BucketCount> {
    let mut counts = [0u32; SCORE_BUCKETS.len()];

    for candidate in candidates {
        let Some(score) = candidate.score() else {
            continue;
        };
        // Fractional scores bucket by their integer part (89.5 → 80-89).
        let score = score.floor();
        for (i, bucket) in SCORE_BUCKETS.iter().enumerate() {
            if score >= bucket.lo && score <= bucket.hi {
                counts[i] += 1;
                break;
            }
        }
    }

    SCORE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, count)| BucketCount {
            range: bucket.label.to_string(),
            count,
        })
        .collect()
}

/// Top `n` evaluated candidates, descending by score. The sort is stable:
/// equal scores keep their input order. Required property, not incidental —
/// ranking lists must not reshuffle between renders.
pub fn top_candidates(candidates: &[Candidate], n: usize) -> Vec<&Candidate> {
    let mut scored: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.score().is_some())
        .collect();
    scored.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(n);
    scored
}

/// Top-N rows shaped for the dashboard's ranking card.
pub fn top_candidate_summaries(candidates: &[Candidate], n: usize) -> Vec<TopCandidate> {
    top_candidates(candidates, n)
        .into_iter()
        .filter_map(|c| {
            c.score().map(|score| TopCandidate {
                name: c.name.clone(),
                score,
                role: c.role_title().unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Mean of the present scores; `0.0` when none exist, never NaN, so
/// downstream rendering stays total-order-safe.
pub fn average_score(candidates: &[Candidate]) -> f64 {
    mean(candidates.iter().filter_map(|c| c.score()))
}

/// Mean score of the candidates attached to `role_id`. A role with zero
/// scored candidates reports `0.0`.
pub fn role_average(candidates: &[Candidate], role_id: &str) -> f64 {
    mean(
        candidates
            .iter()
            .filter(|c| c.role_id() == Some(role_id))
            .filter_map(|c| c.score()),
    )
}

/// Candidate count and average score per role, in the roles' input order.
pub fn role_stats(roles: &[Role], candidates: &[Candidate]) -> Vec<RoleStat> {
    roles
        .iter()
        .map(|role| {
            let count = candidates
                .iter()
                .filter(|c| c.role_id() == Some(role.id.as_str()))
                .count() as u32;
            RoleStat {
                role: role.title.clone(),
                candidates: count,
                avg_score: role_average(candidates, &role.id),
            }
        })
        .collect()
}

/// Percentage change between two period counts. Defined as `0.0` when the
/// previous period is zero — Infinity/NaN must never reach the UI layer.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

fn mean(scores: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for score in scores {
        sum += score;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{Evaluation, RoleRef};

    fn candidate(id: &str, name: &str, score: Option<f64>, role_id: Option<&str>) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            phone: None,
            status: Default::default(),
            applied_at: None,
            cv_url: None,
            role: role_id.map(|r| RoleRef {
                id: r.to_string(),
                title: format!("Role {r}"),
                department: None,
            }),
            evaluation: score.map(|s| Evaluation {
                id: None,
                score: s,
                strengths: vec![],
                weaknesses: vec![],
                summary: None,
                evaluated_at: None,
            }),
        }
    }

    fn role(id: &str, title: &str) -> Role {
        Role {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            requirements: String::new(),
            department: None,
            location: None,
            employment_type: None,
            salary: None,
            status: Default::default(),
            candidates_count: 0,
            created_at: None,
        }
    }

    #[test]
    fn distribution_counts_fixed_buckets() {
        // Worked example: [70, 90, 90] → 90-100: 2, 80-89: 0.
        let candidates = vec![
            candidate("c1", "A", Some(70.0), None),
            candidate("c2", "B", Some(90.0), None),
            candidate("c3", "C", Some(90.0), None),
        ];
        let distribution = score_distribution(&candidates);
        assert_eq!(distribution[0], BucketCount { range: "90-100".to_string(), count: 2 });
        assert_eq!(distribution[1].count, 0);
        assert_eq!(distribution[2].count, 1);
    }

    #[test]
    fn distribution_excludes_unscored_candidates() {
        let candidates = vec![
            candidate("c1", "A", None, None),
            candidate("c2", "B", Some(55.0), None),
        ];
        let distribution = score_distribution(&candidates);
        let total: u32 = distribution.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn distribution_ignores_scores_below_fifty() {
        let candidates = vec![candidate("c1", "A", Some(42.0), None)];
        let total: u32 = score_distribution(&candidates).iter().map(|b| b.count).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn distribution_buckets_fractional_scores_by_integer_part() {
        let candidates = vec![candidate("c1", "A", Some(89.5), None)];
        let distribution = score_distribution(&candidates);
        assert_eq!(distribution[1].count, 1); // 80-89
    }

    #[test]
    fn top_candidates_sorts_descending() {
        let candidates = vec![
            candidate("c1", "A", Some(70.0), None),
            candidate("c2", "B", Some(95.0), None),
            candidate("c3", "C", Some(82.0), None),
        ];
        let top = top_candidates(&candidates, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "B");
        assert_eq!(top[1].name, "C");
    }

    #[test]
    fn top_candidates_is_stable_on_ties() {
        let candidates = vec![
            candidate("c1", "First", Some(90.0), None),
            candidate("c2", "Second", Some(90.0), None),
            candidate("c3", "Third", Some(90.0), None),
        ];
        let top = top_candidates(&candidates, 3);
        assert_eq!(top[0].name, "First");
        assert_eq!(top[1].name, "Second");
        assert_eq!(top[2].name, "Third");
    }

    #[test]
    fn top_candidates_skips_unscored() {
        let candidates = vec![
            candidate("c1", "A", None, None),
            candidate("c2", "B", Some(60.0), None),
        ];
        let top = top_candidates(&candidates, 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "B");
    }

    #[test]
    fn average_of_worked_example_is_83_33() {
        let candidates = vec![
            candidate("c1", "A", Some(70.0), None),
            candidate("c2", "B", Some(90.0), None),
            candidate("c3", "C", Some(90.0), None),
        ];
        let avg = average_score(&candidates);
        assert!((avg - 83.333333).abs() < 1e-4);
        assert_eq!(avg.round() as i64, 83);
    }

    #[test]
    fn role_average_of_no_scored_candidates_is_zero() {
        assert_eq!(role_average(&[], "r1"), 0.0);
        let unscored = vec![candidate("c1", "A", None, Some("r1"))];
        let avg = role_average(&unscored, "r1");
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }

    #[test]
    fn role_average_only_counts_that_role() {
        let candidates = vec![
            candidate("c1", "A", Some(80.0), Some("r1")),
            candidate("c2", "B", Some(40.0), Some("r2")),
        ];
        assert_eq!(role_average(&candidates, "r1"), 80.0);
    }

    #[test]
    fn role_stats_counts_unscored_candidates_too() {
        let roles = vec![role("r1", "Frontend Developer")];
        let candidates = vec![
            candidate("c1", "A", Some(76.0), Some("r1")),
            candidate("c2", "B", None, Some("r1")),
        ];
        let stats = role_stats(&roles, &candidates);
        assert_eq!(stats[0].candidates, 2);
        assert_eq!(stats[0].avg_score, 76.0);
    }

    #[test]
    fn percentage_change_is_zero_when_previous_is_zero() {
        assert_eq!(percentage_change(15.0, 0.0), 0.0);
        assert_eq!(percentage_change(0.0, 0.0), 0.0);
        assert_eq!(percentage_change(-3.0, 0.0), 0.0);
    }

    #[test]
    fn percentage_change_week_over_week() {
        assert!((percentage_change(30.0, 28.0) - 7.142857).abs() < 1e-4);
        assert_eq!(percentage_change(15.0, 30.0), -50.0);
    }

    #[test]
    fn top_candidate_summaries_carry_role_title() {
        let candidates = vec![candidate("c1", "Ana García", Some(94.0), Some("r1"))];
        let rows = top_candidate_summaries(&candidates, 4);
        assert_eq!(rows[0].role, "Role r1");
        assert_eq!(rows[0].score, 94.0);
    }
}
