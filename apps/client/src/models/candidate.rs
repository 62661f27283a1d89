use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::PageInfo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

/// The role a candidate applied against, as embedded in candidate payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Scored assessment of a candidate's fit. `strengths`/`weaknesses` default
/// to empty when the backend omits them; partial records are a data-quality
/// gap, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(default)]
    pub id: Option<String>,
    /// 0–100.
    pub score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default, alias = "evaluation")]
    pub summary: Option<String>,
    #[serde(default)]
    pub evaluated_at: Option<DateTime<Utc>>,
}

/// A person's application against a specific role. The evaluation is optional:
/// a candidate may be listed before the automatic assessment has run, in which
/// case they have no score and stay out of numeric aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    #[serde(alias = "candidateName")]
    pub name: String,
    #[serde(alias = "candidateEmail")]
    pub email: String,
    #[serde(default, alias = "candidatePhone")]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: CandidateStatus,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default, alias = "jobRole")]
    pub role: Option<RoleRef>,
    #[serde(default)]
    pub evaluation: Option<Evaluation>,
}

impl Candidate {
    /// Evaluation score, if the candidate has been evaluated. Absent scores
    /// are excluded from ranking and averages, never treated as zero.
    pub fn score(&self) -> Option<f64> {
        self.evaluation.as_ref().map(|e| e.score)
    }

    pub fn role_id(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.id.as_str())
    }

    pub fn role_title(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.title.as_str())
    }
}

/// Response of `GET /candidates` and `GET /roles/{id}/candidates`.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateList {
    #[serde(default, alias = "applications")]
    pub candidates: Vec<Candidate>,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Response of single-candidate endpoints, which wrap the resource.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(alias = "application")]
    pub candidate: Candidate,
}

/// A new application to submit: candidate fields plus the CV payload.
/// Sent as multipart form data by the API client.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub role_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cv_file_name: String,
    pub cv: Bytes,
}

/// Per-candidate analysis inside a comparison result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAnalysis {
    pub name: String,
    pub analysis: String,
}

/// Outcome of comparing a candidate set, either computed by the backend
/// (`POST /candidates/compare`) or derived locally as a fallback. Wire names
/// are snake_case, matching the comparison service contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub best_candidate_name: String,
    pub justification: String,
    #[serde(default)]
    pub comparison_summary: Vec<CandidateAnalysis>,
}
