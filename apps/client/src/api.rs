//! API gateway client — the single point of entry for all backend calls.
//!
//! ARCHITECTURAL RULE: no other module may issue HTTP requests directly.
//! Every screen goes through [`ApiClient`], which owns token attachment and
//! error normalization, so that a non-2xx response always surfaces as
//! `ClientError::Api` with the server's message and a transport failure as
//! `ClientError::Network`.

use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::candidate::{
    Candidate, CandidateEnvelope, CandidateList, ComparisonResult, NewApplication,
};
use crate::models::dashboard::{
    Ack, ActivityItem, ActivityList, AnalyticsReport, DashboardStats, EvaluationStats,
};
use crate::models::role::{Role, RoleDraft, RoleEnvelope, RoleFilter, RoleList};
use crate::session::Session;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareRequest<'a> {
    role_id: &'a str,
    candidate_ids: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReevaluateRequest<'a> {
    candidate_ids: &'a [String],
}

/// Typed client over the backend REST surface. Cheap to clone; all clones
/// share the session handle.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request with the bearer token attached when a session exists,
    /// then normalizes the response: non-2xx becomes `Api`, transport failure
    /// becomes `Network`, and the success body decodes into `T`.
    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            let message = error_message_from_body(status, &body);
            warn!(path, status, "api request failed: {message}");
            return Err(ClientError::Api { status, message });
        }

        debug!(path, status, "api request ok");

        // DELETE-style acks may come back with no body at all.
        let body = if body.trim().is_empty() {
            "{}"
        } else {
            body.as_str()
        };
        serde_json::from_str(body).map_err(ClientError::Decode)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(path, self.http.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(path, self.http.post(self.url(path)).json(body))
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(path, self.http.put(self.url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Ack, ClientError> {
        self.send(path, self.http.delete(self.url(path))).await
    }

    // ── Auth ────────────────────────────────────────────────────────────

    /// `POST /auth/login`. On success the token and profile are stored in
    /// the session, so subsequent calls are authenticated.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self.post("/auth/login", credentials).await?;
        if let Some(token) = &response.token {
            self.session.store(token.clone(), response.user.clone());
        }
        Ok(response)
    }

    /// `POST /auth/register`. Does not sign the user in; the account may
    /// require email confirmation first.
    pub async fn register(&self, details: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.post("/auth/register", details).await
    }

    // ── Roles ───────────────────────────────────────────────────────────

    pub async fn list_roles(&self, page: u32, filter: &RoleFilter) -> Result<RoleList, ClientError> {
        let mut request = self
            .http
            .get(self.url("/roles"))
            .query(&[("page", page.to_string())]);
        for pair in filter.to_query_pairs() {
            request = request.query(&[pair]);
        }
        self.send("/roles", request).await
    }

    pub async fn get_role(&self, role_id: &str) -> Result<Role, ClientError> {
        let envelope: RoleEnvelope = self.get(&format!("/roles/{role_id}")).await?;
        Ok(envelope.role)
    }

    pub async fn create_role(&self, draft: &RoleDraft) -> Result<Role, ClientError> {
        let envelope: RoleEnvelope = self.post("/roles", draft).await?;
        Ok(envelope.role)
    }

    pub async fn update_role(&self, role_id: &str, draft: &RoleDraft) -> Result<Role, ClientError> {
        let envelope: RoleEnvelope = self.put(&format!("/roles/{role_id}"), draft).await?;
        Ok(envelope.role)
    }

    pub async fn delete_role(&self, role_id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/roles/{role_id}")).await?;
        Ok(())
    }

    // ── Candidates / applications ───────────────────────────────────────

    pub async fn list_candidates(&self, page: u32) -> Result<CandidateList, ClientError> {
        let request = self
            .http
            .get(self.url("/candidates"))
            .query(&[("page", page.to_string())]);
        self.send("/candidates", request).await
    }

    pub async fn role_candidates(&self, role_id: &str) -> Result<CandidateList, ClientError> {
        self.get(&format!("/roles/{role_id}/candidates")).await
    }

    pub async fn get_candidate(&self, candidate_id: &str) -> Result<Candidate, ClientError> {
        let envelope: CandidateEnvelope =
            self.get(&format!("/candidates/{candidate_id}")).await?;
        Ok(envelope.candidate)
    }

    pub async fn delete_candidate(&self, candidate_id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/candidates/{candidate_id}")).await?;
        Ok(())
    }

    /// `POST /applications` — multipart CV upload. No explicit content-type
    /// is set on the request: the transport supplies the multipart boundary.
    pub async fn submit_application(
        &self,
        application: &NewApplication,
    ) -> Result<Candidate, ClientError> {
        let cv = multipart::Part::bytes(application.cv.to_vec())
            .file_name(application.cv_file_name.clone())
            .mime_str("application/pdf")?;

        let mut form = multipart::Form::new()
            .part("cv", cv)
            .text("jobRoleId", application.role_id.clone())
            .text("candidateName", application.name.clone())
            .text("candidateEmail", application.email.clone());
        if let Some(phone) = &application.phone {
            form = form.text("candidatePhone", phone.clone());
        }

        let request = self.http.post(self.url("/applications")).multipart(form);
        let envelope: CandidateEnvelope = self.send("/applications", request).await?;
        Ok(envelope.candidate)
    }

    // ── Evaluations ─────────────────────────────────────────────────────

    pub async fn reevaluate(&self, candidate_ids: &[String]) -> Result<Ack, ClientError> {
        self.post("/evaluations/reevaluate", &ReevaluateRequest { candidate_ids })
            .await
    }

    pub async fn evaluation_stats(&self) -> Result<EvaluationStats, ClientError> {
        self.get("/evaluations/stats").await
    }

    // ── Comparison ──────────────────────────────────────────────────────

    pub async fn compare_candidates(
        &self,
        role_id: &str,
        candidate_ids: &[String],
    ) -> Result<ComparisonResult, ClientError> {
        self.post(
            "/candidates/compare",
            &CompareRequest {
                role_id,
                candidate_ids,
            },
        )
        .await
    }

    // ── Dashboard ───────────────────────────────────────────────────────

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get("/dashboard/stats").await
    }

    pub async fn recent_activity(&self) -> Result<Vec<ActivityItem>, ClientError> {
        let list: ActivityList = self.get("/dashboard/activity").await?;
        Ok(list.activities)
    }

    pub async fn analytics(&self) -> Result<AnalyticsReport, ClientError> {
        self.get("/dashboard/analytics").await
    }
}

/// Extracts a human-readable message from an error body. The backend answers
/// with `{"message": ...}`; older endpoints use `{"error": {"message": ...}}`
/// or a bare `{"error": ...}` string. Anything else falls back to the raw
/// body, or to the status code when the body is empty.
fn error_message_from_body(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        match value.get("error") {
            Some(serde_json::Value::String(message)) => return message.clone(),
            Some(inner) => {
                if let Some(message) = inner.get("message").and_then(|m| m.as_str()) {
                    return message.to_string();
                }
            }
            None => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP error {status}")
    } else {
        trimmed.to_string()
    }
}
