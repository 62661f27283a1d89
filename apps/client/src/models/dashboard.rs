use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard stat cards (`GET /dashboard/stats`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_roles: u32,
    pub total_candidates: u32,
    pub average_score: f64,
    pub pending_reviews: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Application,
    RoleCreated,
    Evaluation,
}

/// One entry of the recent-activity feed (`GET /dashboard/activity`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Human-readable relative time, rendered verbatim.
    pub time: String,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityList {
    #[serde(default, alias = "activity")]
    pub activities: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopCandidate {
    pub name: String,
    pub score: f64,
    pub role: String,
}

/// One bar of the score-distribution chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketCount {
    pub range: String,
    pub count: u32,
}

/// Candidate count and average score for one role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleStat {
    pub role: String,
    pub candidates: u32,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyCount {
    pub week: String,
    pub applications: u32,
}

/// Full analytics payload (`GET /dashboard/analytics`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    #[serde(default)]
    pub total_candidates: u32,
    #[serde(default)]
    pub total_roles: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub top_candidates: Vec<TopCandidate>,
    #[serde(default)]
    pub score_distribution: Vec<BucketCount>,
    #[serde(default)]
    pub role_stats: Vec<RoleStat>,
    #[serde(default)]
    pub weekly_applications: Vec<WeeklyCount>,
}

/// Evaluation pipeline counters (`GET /evaluations/stats`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationStats {
    pub total_evaluations: u32,
    pub average_score: f64,
    pub pending: u32,
}

/// Acknowledgement body for mutations where only the message matters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}
