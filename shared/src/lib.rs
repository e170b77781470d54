use serde::{Deserialize, Serialize};

/// The `{status, data, message}` shape every portal endpoint responds with.
///
/// `status` is `"success"` on the happy path; anything else is a business
/// failure and `message` carries the human-readable reason. `data` holds the
/// endpoint-specific payload and is frequently absent on failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Default> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Collapse the envelope into the payload or the server's failure message.
    ///
    /// A successful response with no `data` key yields the payload's default
    /// (empty collections), never an error.
    pub fn into_result(self) -> Result<T, String> {
        if self.is_success() {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "The server reported an error".to_string()))
        }
    }
}

mod de {
    use serde::{Deserialize, Deserializer};

    /// The backend emits numeric ids for stored records and string keys for
    /// synthesized ones ("bulletin_3", "default_current"). Accept both.
    pub fn string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => n.to_string(),
            Raw::Text(s) => s,
        })
    }
}

// ---------------------------------------------------------------------------
// Session / profile
// ---------------------------------------------------------------------------

/// One dependent (student) associated with the signed-in parent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gr_no: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub batch: String,
}

/// The authenticated parent, as cached locally between sessions.
///
/// The server stays authoritative; `children` is re-fetched on every restore.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParentProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub children: Vec<ChildRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub parent: ParentProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildrenData {
    #[serde(default)]
    pub children: Vec<ChildRecord>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub batch: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceSummary {
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeTotals {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub paid: f64,
    #[serde(default)]
    pub outstanding: f64,
}

/// A recently graded assessment as shown on the dashboard. The dashboard
/// endpoint reports raw exam marks, unlike the grades endpoint below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardGrade {
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub exam: String,
    #[serde(default)]
    pub marks: f64,
    #[serde(default)]
    pub total_marks: f64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub student: StudentSummary,
    #[serde(default)]
    pub attendance: AttendanceSummary,
    #[serde(default)]
    pub grades: Vec<DashboardGrade>,
    #[serde(default)]
    pub fees: FeeTotals,
    #[serde(default)]
    pub today_schedule: Vec<TimetableSlot>,
}

// ---------------------------------------------------------------------------
// Student info
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub gr_no: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentInfoData {
    #[serde(default)]
    pub student: StudentDetails,
}

// ---------------------------------------------------------------------------
// Grades
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradeRecord {
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub exam: String,
    #[serde(default)]
    pub grade: f64,
    #[serde(default)]
    pub max_grade: f64,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradeStatistics {
    #[serde(default)]
    pub average_grade: Option<f64>,
    #[serde(default)]
    pub highest_grade: Option<f64>,
    #[serde(default)]
    pub lowest_grade: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradesData {
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
    #[serde(default)]
    pub statistics: GradeStatistics,
}

/// Optional query parameters for the grades endpoint. Unset fields are left
/// out of the query string entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradeFilters {
    pub period: Option<String>,
    pub subject: Option<String>,
}

impl GradeFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(period) = &self.period {
            pairs.push(("period", period.clone()));
        }
        if let Some(subject) = &self.subject {
            pairs.push(("subject", subject.clone()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    /// "present", "absent", "late" or "excused".
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceStatistics {
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub absent_days: u32,
    #[serde(default)]
    pub late_days: u32,
    #[serde(default)]
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceData {
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub statistics: AttendanceStatistics,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttendanceFilters {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl AttendanceFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(month) = self.month {
            pairs.push(("month", month.to_string()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Timetable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub day_of_week: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub classroom: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimetableData {
    #[serde(default)]
    pub timetable: Vec<TimetableSlot>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimetableFilters {
    pub teacher: Option<String>,
}

impl TimetableFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        match &self.teacher {
            Some(teacher) => vec![("teacher", teacher.clone())],
            None => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeLine {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    /// "paid", "unpaid" or "partial".
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeesData {
    #[serde(default)]
    pub fees: Vec<FeeLine>,
    #[serde(default)]
    pub summary: FeeTotals,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mimetype: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sender_name: String,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub is_from_parent: bool,
    #[serde(default)]
    pub message_type: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessagesData {
    #[serde(default)]
    pub messages: Vec<MessageRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl MessageFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Compose-form payload. `recipient` selects the routing group on the server
/// ("teachers" or "administration").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub recipient: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SendMessageData {
    #[serde(default)]
    pub message_id: i64,
    #[serde(default)]
    pub sent_to: u32,
    #[serde(default)]
    pub recipient_type: String,
}

// ---------------------------------------------------------------------------
// Teachers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeacherRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeachersData {
    #[serde(default)]
    pub teachers: Vec<TeacherRecord>,
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(deserialize_with = "de::string_or_int")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// "academic", "behavioral", "medical" or "other".
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub mimetype: String,
    #[serde(default)]
    pub download_url: String,
    /// True for bulletins the server synthesizes on the fly instead of
    /// serving from stored attachments.
    #[serde(default)]
    pub is_generated: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportsData {
    #[serde(default)]
    pub reports: Vec<ReportRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportFilters {
    pub kind: Option<String>,
}

impl ReportFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        match &self.kind {
            Some(kind) => vec![("type", kind.clone())],
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportDownloadData {
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mimetype: String,
}

// ---------------------------------------------------------------------------
// Academic periods
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AcademicTerm {
    #[serde(deserialize_with = "de::string_or_int", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AcademicPeriod {
    #[serde(deserialize_with = "de::string_or_int", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub terms: Vec<AcademicTerm>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodsData {
    #[serde(default)]
    pub periods: Vec<AcademicPeriod>,
    #[serde(default)]
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_success_extracts_payload() {
        let envelope: Envelope<GradesData> = serde_json::from_value(json!({
            "status": "success",
            "data": {
                "grades": [
                    {"id": 1, "subject": "Maths", "exam": "Contrôle 1",
                     "grade": 15.0, "max_grade": 20.0}
                ],
                "statistics": {"average_grade": 14.2}
            }
        }))
        .unwrap();

        let data = envelope.into_result().unwrap();
        assert_eq!(data.grades.len(), 1);
        assert_eq!(data.grades[0].grade, 15.0);
        assert_eq!(data.grades[0].max_grade, 20.0);
        assert_eq!(data.statistics.average_grade, Some(14.2));
    }

    #[test]
    fn envelope_success_without_data_defaults_to_empty() {
        let envelope: Envelope<GradesData> =
            serde_json::from_value(json!({"status": "success"})).unwrap();

        let data = envelope.into_result().unwrap();
        assert!(data.grades.is_empty());
        assert_eq!(data.statistics.average_grade, None);
    }

    #[test]
    fn envelope_success_with_missing_collection_key_defaults() {
        // A success payload that only carries statistics must not fail on the
        // absent `grades` key.
        let envelope: Envelope<GradesData> = serde_json::from_value(json!({
            "status": "success",
            "data": {"statistics": {"average_grade": 12.0}}
        }))
        .unwrap();

        let data = envelope.into_result().unwrap();
        assert!(data.grades.is_empty());
        assert_eq!(data.statistics.average_grade, Some(12.0));
    }

    #[test]
    fn envelope_failure_carries_server_message() {
        let envelope: Envelope<LoginData> = serde_json::from_value(json!({
            "status": "error",
            "message": "Invalid credentials"
        }))
        .unwrap();

        assert!(!envelope.is_success());
        assert_eq!(envelope.into_result(), Err("Invalid credentials".to_string()));
    }

    #[test]
    fn envelope_failure_without_message_falls_back() {
        let envelope: Envelope<ChildrenData> =
            serde_json::from_value(json!({"status": "error"})).unwrap();

        let err = envelope.into_result().unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn envelope_failure_discards_partial_data() {
        // An error envelope never exposes whatever data the server attached.
        let envelope: Envelope<ChildrenData> = serde_json::from_value(json!({
            "status": "error",
            "message": "Accès non autorisé à cet étudiant",
            "data": {"children": [{"id": 7, "name": "Awa"}]}
        }))
        .unwrap();

        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn report_ids_accept_numbers_and_keys() {
        let stored: ReportRecord = serde_json::from_value(json!({
            "id": 42,
            "name": "certificat.pdf",
            "type": "other"
        }))
        .unwrap();
        assert_eq!(stored.id, "42");
        assert!(!stored.is_generated);

        let generated: ReportRecord = serde_json::from_value(json!({
            "id": "bulletin_3",
            "name": "Bulletin de notes - 2024/2025",
            "type": "academic",
            "is_generated": true
        }))
        .unwrap();
        assert_eq!(generated.id, "bulletin_3");
        assert!(generated.is_generated);
    }

    #[test]
    fn period_ids_accept_numbers_and_keys() {
        let data: PeriodsData = serde_json::from_value(json!({
            "periods": [
                {"id": 1, "name": "Année 2024-2025", "type": "academic_year",
                 "terms": [{"id": "default_term1", "name": "Premier Semestre"}]},
                {"id": "default_current", "name": "Année 2025-2026",
                 "type": "academic_year"}
            ],
            "total": 2
        }))
        .unwrap();

        assert_eq!(data.periods[0].id, "1");
        assert_eq!(data.periods[0].terms[0].id, "default_term1");
        assert_eq!(data.periods[1].id, "default_current");
    }

    #[test]
    fn filters_omit_unset_fields() {
        assert!(GradeFilters::default().pairs().is_empty());

        let filters = GradeFilters {
            period: Some("trimestre1".to_string()),
            subject: None,
        };
        assert_eq!(filters.pairs(), vec![("period", "trimestre1".to_string())]);

        let filters = AttendanceFilters {
            month: Some(3),
            year: Some(2026),
        };
        assert_eq!(
            filters.pairs(),
            vec![("month", "3".to_string()), ("year", "2026".to_string())]
        );
    }

    #[test]
    fn message_records_tolerate_sparse_payloads() {
        let data: MessagesData = serde_json::from_value(json!({
            "messages": [{"id": 9, "subject": "Absence demain"}]
        }))
        .unwrap();

        assert_eq!(data.messages[0].sender_name, "");
        assert!(!data.messages[0].is_from_parent);
        assert!(data.messages[0].attachments.is_empty());
        assert_eq!(data.pagination.page, 0);
    }

    #[test]
    fn cached_profile_round_trips() {
        let profile = ParentProfile {
            id: 12,
            name: "Ndeye Fatou".to_string(),
            email: "ndeye.fatou@gmail.com".to_string(),
            mobile: String::new(),
            relationship: "Mère".to_string(),
            children: vec![ChildRecord {
                id: 42,
                name: "Awa Diop".to_string(),
                gr_no: "GR042".to_string(),
                course: "CM2".to_string(),
                batch: "CM2-A".to_string(),
            }],
        };

        let encoded = serde_json::to_string(&profile).unwrap();
        let decoded: ParentProfile = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, profile);
    }
}
