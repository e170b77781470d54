use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use shared::{
    AttendanceData, AttendanceFilters, ChangePasswordRequest, ChildrenData, DashboardData,
    Envelope, FeesData, GradeFilters, GradesData, LoginData, LoginRequest, MessageFilters,
    MessagesData, PeriodsData, ReportDownloadData, ReportFilters, ReportsData, SendMessageData,
    SendMessageRequest, StudentInfoData, TeachersData, TimetableData, TimetableFilters,
};

use super::session;

/// What a portal request can fail with, already worded for the inline error
/// banners the views render.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Business failure reported by the server (`status != "success"`).
    #[error("{0}")]
    Server(String),
    /// HTTP 401; the session has already been torn down when this surfaces.
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    /// The backend could not be reached at all.
    #[error("Service unavailable, please contact the administration")]
    ServiceUnavailable,
    #[error("Connection error, please check your network and try again")]
    Connection,
    #[error("Unexpected response from the server")]
    Decode,
}

/// Map a fetch rejection to a user-facing error by its kind rather than by
/// scraping the whole message. Browsers disagree on wording: Firefox raises a
/// `NetworkError`, Chromium a `TypeError` whose message says
/// "Failed to fetch". Anything unrecognized stays a generic connection error.
fn classify_js_error(name: &str, message: &str) -> ApiError {
    if name == "NetworkError"
        || message.contains("NetworkError")
        || message.contains("Failed to fetch")
    {
        ApiError::ServiceUnavailable
    } else {
        ApiError::Connection
    }
}

fn classify_transport(err: &gloo::net::Error) -> ApiError {
    match err {
        gloo::net::Error::JsError(js) => classify_js_error(&js.name, &js.message),
        gloo::net::Error::SerdeError(_) => ApiError::Decode,
        _ => ApiError::Connection,
    }
}

/// Typed client for the parent-portal HTTP API.
///
/// Every request carries the session cookie (`credentials: include`); the
/// server decides who the caller is. No retries, no explicit timeouts.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Base URL from the build environment, falling back to the Odoo
    /// development default.
    pub fn new() -> Self {
        Self {
            base_url: option_env!("PORTAL_API_BASE_URL")
                .unwrap_or("http://localhost:8069")
                .to_string(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Resolve a server-relative path (e.g. an attachment `download_url`)
    /// against the configured base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    // -- session ------------------------------------------------------------

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginData, ApiError> {
        self.post("/api/parent/login", request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty::<Ack>("/api/parent/logout").await.map(|_| ())
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.post::<Ack, _>("/api/parent/change-password", request)
            .await
            .map(|_| ())
    }

    pub async fn children(&self) -> Result<ChildrenData, ApiError> {
        self.get("/api/parent/children", &[]).await
    }

    // -- per-student resources ----------------------------------------------

    pub async fn student_dashboard(&self, student_id: i64) -> Result<DashboardData, ApiError> {
        self.get(&format!("/api/parent/student/{}/dashboard", student_id), &[])
            .await
    }

    pub async fn student_info(&self, student_id: i64) -> Result<StudentInfoData, ApiError> {
        self.get(&format!("/api/parent/student/{}/info", student_id), &[])
            .await
    }

    pub async fn student_grades(
        &self,
        student_id: i64,
        filters: &GradeFilters,
    ) -> Result<GradesData, ApiError> {
        self.get(
            &format!("/api/parent/student/{}/grades", student_id),
            &filters.pairs(),
        )
        .await
    }

    pub async fn student_attendance(
        &self,
        student_id: i64,
        filters: &AttendanceFilters,
    ) -> Result<AttendanceData, ApiError> {
        self.get(
            &format!("/api/parent/student/{}/attendance", student_id),
            &filters.pairs(),
        )
        .await
    }

    pub async fn student_timetable(
        &self,
        student_id: i64,
        filters: &TimetableFilters,
    ) -> Result<TimetableData, ApiError> {
        self.get(
            &format!("/api/parent/student/{}/timetable", student_id),
            &filters.pairs(),
        )
        .await
    }

    pub async fn student_fees(&self, student_id: i64) -> Result<FeesData, ApiError> {
        self.get(&format!("/api/parent/student/{}/fees", student_id), &[])
            .await
    }

    pub async fn student_messages(
        &self,
        student_id: i64,
        filters: &MessageFilters,
    ) -> Result<MessagesData, ApiError> {
        self.get(
            &format!("/api/parent/student/{}/messages", student_id),
            &filters.pairs(),
        )
        .await
    }

    pub async fn send_message(
        &self,
        student_id: i64,
        request: &SendMessageRequest,
    ) -> Result<SendMessageData, ApiError> {
        self.post(
            &format!("/api/parent/student/{}/messages", student_id),
            request,
        )
        .await
    }

    pub async fn student_teachers(&self, student_id: i64) -> Result<TeachersData, ApiError> {
        self.get(&format!("/api/parent/student/{}/teachers", student_id), &[])
            .await
    }

    pub async fn student_reports(
        &self,
        student_id: i64,
        filters: &ReportFilters,
    ) -> Result<ReportsData, ApiError> {
        self.get(
            &format!("/api/parent/student/{}/reports", student_id),
            &filters.pairs(),
        )
        .await
    }

    pub async fn report_download(
        &self,
        student_id: i64,
        report_id: &str,
    ) -> Result<ReportDownloadData, ApiError> {
        self.get(
            &format!(
                "/api/parent/student/{}/reports/{}/download",
                student_id, report_id
            ),
            &[],
        )
        .await
    }

    pub async fn academic_periods(&self, student_id: i64) -> Result<PeriodsData, ApiError> {
        self.get(&format!("/api/parent/student/{}/periods", student_id), &[])
            .await
    }

    // -- plumbing ------------------------------------------------------------

    async fn get<T>(&self, path: &str, query: &[(&'static str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let mut builder = Request::get(&self.absolute_url(path))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include);
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
        }

        let response = builder
            .send()
            .await
            .map_err(|err| classify_transport(&err))?;
        self.unwrap_envelope(response).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize,
    {
        let request = Request::post(&self.absolute_url(path))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|_| ApiError::Decode)?;

        let response = request
            .send()
            .await
            .map_err(|err| classify_transport(&err))?;
        self.unwrap_envelope(response).await
    }

    async fn post_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let response = Request::post(&self.absolute_url(path))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| classify_transport(&err))?;
        self.unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T>(&self, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        // A 401 anywhere means the Odoo session died: drop the persisted
        // session and restart from the login screen.
        if response.status() == 401 {
            session::expire();
            return Err(ApiError::Unauthorized);
        }

        let envelope: Envelope<T> = response.json().await.map_err(|_| ApiError::Decode)?;
        envelope.into_result().map_err(ApiError::Server)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Bodyless success payload for endpoints that only acknowledge
/// (logout, change-password).
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
struct Ack {}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn unreachable_backend_maps_to_service_unavailable() {
        // Chromium wording
        assert_eq!(
            classify_js_error("TypeError", "Failed to fetch"),
            ApiError::ServiceUnavailable
        );
        // Firefox wording
        assert_eq!(
            classify_js_error("NetworkError", "NetworkError when attempting to fetch resource."),
            ApiError::ServiceUnavailable
        );
    }

    #[wasm_bindgen_test]
    fn unknown_exceptions_map_to_generic_connection_error() {
        assert_eq!(
            classify_js_error("TypeError", "The operation was aborted."),
            ApiError::Connection
        );
        assert_eq!(classify_js_error("AbortError", "aborted"), ApiError::Connection);
    }

    #[wasm_bindgen_test]
    fn error_display_matches_banner_copy() {
        assert_eq!(
            ApiError::ServiceUnavailable.to_string(),
            "Service unavailable, please contact the administration"
        );
        assert_eq!(
            ApiError::Server("Invalid credentials".to_string()).to_string(),
            "Invalid credentials"
        );
    }

    #[wasm_bindgen_test]
    fn absolute_url_resolves_relative_paths_only() {
        let client = ApiClient::with_base_url("http://school.example".to_string());
        assert_eq!(
            client.absolute_url("/web/content/7?download=true"),
            "http://school.example/web/content/7?download=true"
        );
        assert_eq!(
            client.absolute_url("https://cdn.example/file.pdf"),
            "https://cdn.example/file.pdf"
        );
    }
}
