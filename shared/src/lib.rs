use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Health worker identity as exposed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerDto {
    pub name: String,
    /// Worker ID as issued by the health programme (free-form string)
    pub id: String,
    /// Area or block the worker is assigned to
    pub area: String,
}

/// Current session state. `worker` is `null` when nobody is logged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSessionResponse {
    pub worker: Option<WorkerDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub id: String,
    pub area: String,
}

/// Status of a single antenatal-care milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Done,
    Due,
    Overdue,
}

/// The five fixed antenatal-care checkpoints tracked per mother.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDto {
    pub anc1: MilestoneStatus,
    pub anc2: MilestoneStatus,
    pub tt_injection: MilestoneStatus,
    pub iron_tablets: MilestoneStatus,
    pub ultrasound: MilestoneStatus,
}

/// The three independent fatigue indicators recorded during a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueDto {
    pub heavy_work: bool,
    pub less_rest: bool,
    pub weakness: bool,
}

/// A mother record as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotherDto {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub village: String,
    pub guardian: String,
    pub phone: String,
    /// Month of pregnancy (1-9)
    pub pregnancy_month: u32,
    /// Last menstrual period date
    pub lmp_date: NaiveDate,
    pub high_risk: bool,
    /// Pre-existing condition labels (e.g. "Anemia", "High BP")
    pub conditions: Vec<String>,
    /// "systolic/diastolic", e.g. "120/80"
    pub blood_pressure: String,
    /// Weight in kilograms
    pub weight: f64,
    pub swelling: bool,
    pub bleeding: bool,
    pub headache: bool,
    pub fatigue: FatigueDto,
    pub timeline: TimelineDto,
    pub next_follow_up: NaiveDate,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub last_visit: NaiveDate,
}

/// Derived fatigue risk bucket, rendered as a colour band in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FatigueRiskDto {
    Low,
    Medium,
    High,
}

/// Derived follow-up urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpUrgencyDto {
    Urgent,
    Soon,
    Upcoming,
}

/// Registration form payload. Clinical snapshot and timeline fields are
/// defaulted server-side when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMotherRequest {
    pub name: String,
    pub age: u32,
    pub village: String,
    pub guardian: String,
    pub phone: String,
    pub pregnancy_month: u32,
    /// Last menstrual period date (YYYY-MM-DD)
    pub lmp_date: String,
    #[serde(default)]
    pub high_risk: bool,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub blood_pressure: Option<String>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update payload. Absent fields keep their prior value; the
/// fatigue and timeline blocks are replaced whole when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMotherRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub village: Option<String>,
    pub guardian: Option<String>,
    pub phone: Option<String>,
    pub pregnancy_month: Option<u32>,
    pub lmp_date: Option<String>,
    pub high_risk: Option<bool>,
    pub conditions: Option<Vec<String>>,
    pub blood_pressure: Option<String>,
    pub weight: Option<f64>,
    pub swelling: Option<bool>,
    pub bleeding: Option<bool>,
    pub headache: Option<bool>,
    pub fatigue: Option<FatigueDto>,
    pub timeline: Option<TimelineDto>,
    pub next_follow_up: Option<String>,
    pub notes: Option<String>,
    pub last_visit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotherListResponse {
    pub mothers: Vec<MotherDto>,
}

/// A single mother with her derived values, for the profile view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotherDetailResponse {
    pub mother: MotherDto,
    pub fatigue_risk: FatigueRiskDto,
    pub days_until_follow_up: i64,
    pub follow_up_urgency: FollowUpUrgencyDto,
}

/// A mother paired with the day difference to her next follow-up.
/// `days_until` is negative when the visit is overdue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpEntryDto {
    pub mother: MotherDto,
    pub days_until: i64,
}

/// Follow-ups partitioned by urgency, registry order preserved within
/// each group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpGroupsResponse {
    pub urgent: Vec<FollowUpEntryDto>,
    pub soon: Vec<FollowUpEntryDto>,
    pub upcoming: Vec<FollowUpEntryDto>,
}

/// Kind of suggested action on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKindDto {
    HighRisk,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemDto {
    pub kind: ActionKindDto,
    pub mother_id: String,
    pub message: String,
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryResponse {
    pub total_mothers: usize,
    pub high_risk_mothers: usize,
    pub overdue_visits: usize,
    pub actions: Vec<ActionItemDto>,
}
