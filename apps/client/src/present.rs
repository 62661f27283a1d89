//! Display formatting for derived values. No aggregation logic lives here —
//! only the mapping from numbers and statuses to what the widgets show.

use crate::models::candidate::CandidateStatus;
use crate::models::role::RoleStatus;

/// Visual band for a score badge: green / yellow / red in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

pub fn score_band(score: f64) -> ScoreBand {
    if score >= 80.0 {
        ScoreBand::High
    } else if score >= 60.0 {
        ScoreBand::Medium
    } else {
        ScoreBand::Low
    }
}

/// Star rating out of 5 for a 0–100 score.
pub fn score_stars(score: f64) -> u8 {
    (score / 20.0).round().clamp(0.0, 5.0) as u8
}

/// Up to two uppercase initials for the avatar fallback.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Signed percent string for the stat cards: "+12%", "-3%", "0%".
pub fn format_change(pct: f64) -> String {
    let rounded = pct.round();
    if rounded > 0.0 {
        format!("+{rounded:.0}%")
    } else if rounded < 0.0 {
        format!("{rounded:.0}%")
    } else {
        "0%".to_string()
    }
}

pub fn candidate_status_label(status: CandidateStatus) -> &'static str {
    match status {
        CandidateStatus::Pending => "Pending",
        CandidateStatus::Reviewed => "Reviewed",
        CandidateStatus::Accepted => "Accepted",
        CandidateStatus::Rejected => "Rejected",
    }
}

pub fn role_status_label(status: RoleStatus) -> &'static str {
    match status {
        RoleStatus::Active => "Active",
        RoleStatus::Paused => "Paused",
        RoleStatus::Closed => "Closed",
    }
}
