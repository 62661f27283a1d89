//! Comparison engine — a bounded, user-curated selection of candidates and
//! the pluggable backend that ranks them.
//!
//! The backend is a trait seam: `RemoteCompare` asks the comparison service,
//! `LocalCompare` is the deterministic argmax fallback. Swapping backends
//! never touches the selection-set code.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::candidate::{Candidate, CandidateAnalysis, ComparisonResult};

/// Default cap on a comparison set, matching the side-by-side grid.
pub const DEFAULT_MAX_SELECTED: usize = 4;

/// Where the selection currently stands. Derived from the set size; there is
/// no separate state variable to fall out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    /// One candidate selected — not enough to compare yet.
    Selecting,
    /// Two or more selected, below the cap.
    ReadyToCompare,
    Full,
}

/// Outcome of an `add` attempt. Rejections carry the reason and leave the
/// set unchanged; they are surfaced to the user as a notice, never thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadySelected,
    SetFull,
}

/// Numeric summary of the current selection, derived for display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub max_score: f64,
    /// Mean rounded to the nearest integer, as shown on the summary card.
    pub mean_score: f64,
    /// max − min.
    pub spread: f64,
}

#[async_trait]
pub trait CompareBackend: Send + Sync {
    async fn compare(
        &self,
        role_id: &str,
        selected: &[Candidate],
    ) -> Result<ComparisonResult, ClientError>;
}

/// Deterministic local fallback: best candidate by score, ties broken by
/// first occurrence in selection order.
pub struct LocalCompare;

#[async_trait]
impl CompareBackend for LocalCompare {
    async fn compare(
        &self,
        _role_id: &str,
        selected: &[Candidate],
    ) -> Result<ComparisonResult, ClientError> {
        local_best(selected)
    }
}

/// Remote comparison via `POST /candidates/compare`. When the service is
/// unreachable or errors, falls back to the local ranking rather than
/// surfacing the failure — a comparison screen with candidates selected
/// should always produce a result.
pub struct RemoteCompare {
    api: ApiClient,
}

impl RemoteCompare {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CompareBackend for RemoteCompare {
    async fn compare(
        &self,
        role_id: &str,
        selected: &[Candidate],
    ) -> Result<ComparisonResult, ClientError> {
        let ids: Vec<String> = selected.iter().map(|c| c.id.clone()).collect();
        match self.api.compare_candidates(role_id, &ids).await {
            Ok(result) => Ok(result),
            Err(err) => {
                warn!("remote comparison unavailable, using local ranking: {err}");
                local_best(selected)
            }
        }
    }
}

/// The bounded comparison set. Holds at most `max` candidates and the last
/// computed result; any change to the selection discards the result, since
/// it was computed over a now-stale set.
#[derive(Debug, Clone)]
pub struct ComparisonSet {
    max: usize,
    selected: Vec<Candidate>,
    result: Option<ComparisonResult>,
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTED)
    }
}

impl ComparisonSet {
    /// A set capped at `max` candidates. Caps below 2 make comparison
    /// impossible, so they are raised to 2.
    pub fn new(max: usize) -> Self {
        Self {
            max: max.max(2),
            selected: Vec::new(),
            result: None,
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn selected(&self) -> &[Candidate] {
        &self.selected
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref()
    }

    pub fn state(&self) -> SelectionState {
        match self.selected.len() {
            0 => SelectionState::Empty,
            1 => SelectionState::Selecting,
            n if n >= self.max => SelectionState::Full,
            _ => SelectionState::ReadyToCompare,
        }
    }

    pub fn add(&mut self, candidate: Candidate) -> AddOutcome {
        if self.selected.iter().any(|c| c.id == candidate.id) {
            return AddOutcome::AlreadySelected;
        }
        if self.selected.len() >= self.max {
            return AddOutcome::SetFull;
        }
        self.selected.push(candidate);
        self.result = None;
        AddOutcome::Added
    }

    /// Removes a candidate by id. Always succeeds; when a candidate was
    /// actually removed, any stored result is discarded as stale.
    pub fn remove(&mut self, candidate_id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|c| c.id != candidate_id);
        let removed = self.selected.len() != before;
        if removed {
            self.result = None;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.result = None;
    }

    /// Runs the comparison over the current selection. Only valid with at
    /// least two candidates selected; otherwise a `Validation` error is
    /// returned without calling the backend.
    pub async fn compare(
        &mut self,
        role_id: &str,
        backend: &dyn CompareBackend,
    ) -> Result<&ComparisonResult, ClientError> {
        match self.state() {
            SelectionState::ReadyToCompare | SelectionState::Full => {}
            _ => {
                return Err(ClientError::Validation(
                    "Select at least two candidates to compare".to_string(),
                ))
            }
        }
        let result = backend.compare(role_id, &self.selected).await?;
        Ok(&*self.result.insert(result))
    }

    /// Max, rounded mean, and spread over the scored candidates currently
    /// selected. `None` when no selected candidate has a score.
    pub fn summary(&self) -> Option<SelectionSummary> {
        let scores: Vec<f64> = self.selected.iter().filter_map(|c| c.score()).collect();
        if scores.is_empty() {
            return None;
        }
        let max = scores.iter().cloned().fold(f64::MIN, f64::max);
        let min = scores.iter().cloned().fold(f64::MAX, f64::min);
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Some(SelectionSummary {
            max_score: max,
            mean_score: mean.round(),
            spread: max - min,
        })
    }
}

/// Argmax by score with first-occurrence tie-break: a candidate only
/// displaces the current best with a strictly higher score, so the result is
/// reproducible for a given selection order. Unscored candidates cannot win.
fn local_best(selected: &[Candidate]) -> Result<ComparisonResult, ClientError> {
    let mut best: Option<&Candidate> = None;
    for candidate in selected {
        let Some(score) = candidate.score() else {
            continue;
        };
        match best {
            Some(current) if score <= current.score().unwrap_or(f64::MIN) => {}
            _ => best = Some(candidate),
        }
    }

    let best = best.ok_or_else(|| {
        ClientError::Validation(
            "None of the selected candidates has an evaluation score".to_string(),
        )
    })?;
    let best_score = best.score().unwrap_or_default();

    let comparison_summary = selected
        .iter()
        .map(|candidate| CandidateAnalysis {
            name: candidate.name.clone(),
            analysis: match (&candidate.evaluation, candidate.score()) {
                (Some(evaluation), Some(score)) => match &evaluation.summary {
                    Some(summary) => summary.clone(),
                    None => format!("Scored {score:.0}/100"),
                },
                _ => "No evaluation available".to_string(),
            },
        })
        .collect();

    Ok(ComparisonResult {
        best_candidate_name: best.name.clone(),
        justification: format!(
            "{} has the highest score ({:.0}/100) of the {} candidates compared",
            best.name,
            best_score,
            selected.len()
        ),
        comparison_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::Evaluation;

    fn candidate(id: &str, name: &str, score: Option<f64>) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            phone: None,
            status: Default::default(),
            applied_at: None,
            cv_url: None,
            role: None,
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

    #[test]
    fn state_tracks_selection_size() {
        let mut set = ComparisonSet::new(4);
        assert_eq!(set.state(), SelectionState::Empty);

        set.add(candidate("c1", "A", Some(70.0)));
        assert_eq!(set.state(), SelectionState::Selecting);

        set.add(candidate("c2", "B", Some(80.0)));
        assert_eq!(set.state(), SelectionState::ReadyToCompare);

        set.add(candidate("c3", "C", Some(60.0)));
        set.add(candidate("c4", "D", Some(50.0)));
        assert_eq!(set.state(), SelectionState::Full);
    }

    #[test]
    fn fifth_add_is_rejected_and_leaves_set_unchanged() {
        let mut set = ComparisonSet::new(4);
        for i in 0..4 {
            assert_eq!(
                set.add(candidate(&format!("c{i}"), "X", Some(50.0))),
                AddOutcome::Added
            );
        }
        let outcome = set.add(candidate("c9", "Extra", Some(99.0)));
        assert_eq!(outcome, AddOutcome::SetFull);
        assert_eq!(set.selected().len(), 4);
        assert!(set.selected().iter().all(|c| c.id != "c9"));
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut set = ComparisonSet::default();
        set.add(candidate("c1", "A", Some(70.0)));
        assert_eq!(
            set.add(candidate("c1", "A", Some(70.0))),
            AddOutcome::AlreadySelected
        );
        assert_eq!(set.selected().len(), 1);
    }

    #[tokio::test]
    async fn remove_discards_stale_result() {
        let mut set = ComparisonSet::default();
        set.add(candidate("c1", "A", Some(60.0)));
        set.add(candidate("c2", "B", Some(95.0)));

        set.compare("r1", &LocalCompare).await.unwrap();
        assert!(set.result().is_some());

        assert!(set.remove("c2"));
        assert!(set.result().is_none());
    }

    #[test]
    fn removing_unknown_id_keeps_result() {
        let mut set = ComparisonSet::default();
        set.add(candidate("c1", "A", Some(60.0)));
        set.add(candidate("c2", "B", Some(95.0)));
        set.result = Some(ComparisonResult {
            best_candidate_name: "B".to_string(),
            justification: "x".to_string(),
            comparison_summary: vec![],
        });

        assert!(!set.remove("nope"));
        assert!(set.result().is_some());
    }

    #[tokio::test]
    async fn compare_rejected_below_two_candidates() {
        let mut set = ComparisonSet::default();
        set.add(candidate("c1", "A", Some(70.0)));
        let err = set.compare("r1", &LocalCompare).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn local_fallback_picks_highest_score() {
        let mut set = ComparisonSet::default();
        set.add(candidate("c1", "Low", Some(60.0)));
        set.add(candidate("c2", "High", Some(95.0)));

        let result = set.compare("r1", &LocalCompare).await.unwrap();
        assert_eq!(result.best_candidate_name, "High");
        assert_eq!(result.comparison_summary.len(), 2);

        let summary = set.summary().unwrap();
        assert_eq!(summary.spread, 35.0);
        assert_eq!(summary.max_score, 95.0);
    }

    #[test]
    fn local_best_ties_break_by_selection_order() {
        let selected = vec![
            candidate("c1", "First", Some(90.0)),
            candidate("c2", "Second", Some(90.0)),
        ];
        let result = local_best(&selected).unwrap();
        assert_eq!(result.best_candidate_name, "First");
    }

    #[test]
    fn local_best_ignores_unscored_candidates() {
        let selected = vec![
            candidate("c1", "Unscored", None),
            candidate("c2", "Scored", Some(40.0)),
        ];
        let result = local_best(&selected).unwrap();
        assert_eq!(result.best_candidate_name, "Scored");
        // Best-candidate name always matches a name in the input set.
        assert!(selected.iter().any(|c| c.name == result.best_candidate_name));
    }

    #[test]
    fn local_best_with_no_scores_is_a_validation_error() {
        let selected = vec![candidate("c1", "A", None), candidate("c2", "B", None)];
        assert!(matches!(
            local_best(&selected),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn summary_rounds_mean_to_nearest_integer() {
        let mut set = ComparisonSet::default();
        set.add(candidate("c1", "A", Some(70.0)));
        set.add(candidate("c2", "B", Some(90.0)));
        set.add(candidate("c3", "C", Some(90.0)));
        let summary = set.summary().unwrap();
        assert_eq!(summary.mean_score, 83.0); // 83.33… displayed as 83
    }

    #[test]
    fn summary_is_none_without_scores() {
        let mut set = ComparisonSet::default();
        set.add(candidate("c1", "A", None));
        assert!(set.summary().is_none());
    }

    #[test]
    fn max_below_two_is_raised() {
        let set = ComparisonSet::new(1);
        assert_eq!(set.max(), 2);
    }
}
