use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::{
    ActionItemDto, ActionKindDto, DashboardSummaryResponse, FatigueDto, FatigueRiskDto,
    FollowUpEntryDto, FollowUpGroupsResponse, FollowUpUrgencyDto, LoginRequest,
    MilestoneStatus as MilestoneStatusDto, MotherDetailResponse, MotherDto, MotherListResponse,
    RegisterMotherRequest, TimelineDto, UpdateMotherRequest, WorkerDto, WorkerSessionResponse,
};
use tracing::info;

use crate::domain::commands::mother::{
    GetMotherCommand, MotherListFilter, RegisterMotherCommand, UpdateMotherCommand,
};
use crate::domain::errors::DomainError;
use crate::domain::followup_service::{ActionKind, FollowUpEntry};
use crate::domain::models::mother::{
    FatigueAssessment, FatigueRisk, FollowUpUrgency, MilestoneStatus, Mother, Timeline,
};
use crate::domain::models::worker::Worker;
use crate::domain::{FollowUpService, MotherService, SessionService};
use crate::storage::MemoryMotherRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub mother_service: MotherService,
    pub session_service: SessionService,
    pub followup_service: FollowUpService,
}

impl AppState {
    /// Build the state over a single shared registry.
    pub fn new(repository: MemoryMotherRepository) -> Self {
        Self {
            mother_service: MotherService::new(repository.clone()),
            followup_service: FollowUpService::new(repository),
            session_service: SessionService::new(),
        }
    }
}

/// Query parameters for the mother list endpoint
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MotherListQuery {
    pub search: Option<String>,
    pub high_risk: Option<bool>,
}

/// Axum handler for GET /api/session
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/session");

    let session = state.session_service.current();
    Json(WorkerSessionResponse {
        worker: session.worker.map(WorkerDto::from),
    })
}

/// Axum handler for POST /api/session/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/session/login - worker id: {}", request.id);

    state
        .session_service
        .login(request.name, request.id, request.area);
    let session = state.session_service.current();
    Json(WorkerSessionResponse {
        worker: session.worker.map(WorkerDto::from),
    })
}

/// Axum handler for POST /api/session/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/session/logout");

    state.session_service.logout();
    StatusCode::NO_CONTENT
}

/// Axum handler for GET /api/mothers
pub async fn list_mothers(
    State(state): State<AppState>,
    Query(query): Query<MotherListQuery>,
) -> impl IntoResponse {
    info!("GET /api/mothers - query: {:?}", query);

    let filter = MotherListFilter {
        search: query.search,
        high_risk: query.high_risk,
    };

    match state.mother_service.list(filter) {
        Ok(result) => (
            StatusCode::OK,
            Json(MotherListResponse {
                mothers: result.mothers.into_iter().map(MotherDto::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error listing mothers: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing mothers").into_response()
        }
    }
}

/// Axum handler for POST /api/mothers
pub async fn register_mother(
    State(state): State<AppState>,
    Json(request): Json<RegisterMotherRequest>,
) -> impl IntoResponse {
    info!("POST /api/mothers - name: {}", request.name);

    let command = RegisterMotherCommand {
        name: request.name,
        age: request.age,
        village: request.village,
        guardian: request.guardian,
        phone: request.phone,
        pregnancy_month: request.pregnancy_month,
        lmp_date: request.lmp_date,
        high_risk: request.high_risk,
        conditions: request.conditions,
        blood_pressure: request.blood_pressure,
        weight: request.weight,
        notes: request.notes,
    };

    match state.mother_service.register(command) {
        Ok(result) => (StatusCode::CREATED, Json(MotherDto::from(result.mother))).into_response(),
        Err(e) => {
            tracing::error!("Error registering mother: {:?}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Axum handler for GET /api/mothers/:id
pub async fn get_mother(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/mothers/{}", id);

    match state.mother_service.get(GetMotherCommand { mother_id: id }) {
        Ok(result) => match result.mother {
            Some(mother) => {
                let today = Utc::now().date_naive();
                (
                    StatusCode::OK,
                    Json(MotherDetailResponse {
                        fatigue_risk: mother.fatigue.risk().into(),
                        days_until_follow_up: mother.days_until_follow_up(today),
                        follow_up_urgency: mother.follow_up_urgency(today).into(),
                        mother: mother.into(),
                    }),
                )
                    .into_response()
            }
            None => (StatusCode::NOT_FOUND, "Mother not found").into_response(),
        },
        Err(e) => {
            tracing::error!("Error retrieving mother: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving mother").into_response()
        }
    }
}

/// Axum handler for PUT /api/mothers/:id
pub async fn update_mother(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMotherRequest>,
) -> impl IntoResponse {
    info!("PUT /api/mothers/{}", id);

    let command = UpdateMotherCommand {
        id,
        name: request.name,
        age: request.age,
        village: request.village,
        guardian: request.guardian,
        phone: request.phone,
        pregnancy_month: request.pregnancy_month,
        lmp_date: request.lmp_date,
        high_risk: request.high_risk,
        conditions: request.conditions,
        blood_pressure: request.blood_pressure,
        weight: request.weight,
        swelling: request.swelling,
        bleeding: request.bleeding,
        headache: request.headache,
        fatigue: request.fatigue.map(FatigueAssessment::from),
        timeline: request.timeline.map(Timeline::from),
        next_follow_up: request.next_follow_up,
        notes: request.notes,
        last_visit: request.last_visit,
    };

    match state.mother_service.update(command) {
        Ok(result) => (StatusCode::OK, Json(MotherDto::from(result.mother))).into_response(),
        Err(e) if e.downcast_ref::<DomainError>().is_some() => {
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Error updating mother: {:?}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Axum handler for GET /api/followups
pub async fn list_followups(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/followups");

    let today = Utc::now().date_naive();
    match state.followup_service.categorize(today) {
        Ok(groups) => (
            StatusCode::OK,
            Json(FollowUpGroupsResponse {
                urgent: groups.urgent.into_iter().map(FollowUpEntryDto::from).collect(),
                soon: groups.soon.into_iter().map(FollowUpEntryDto::from).collect(),
                upcoming: groups
                    .upcoming
                    .into_iter()
                    .map(FollowUpEntryDto::from)
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error categorizing follow-ups: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error categorizing follow-ups",
            )
                .into_response()
        }
    }
}

/// Axum handler for GET /api/dashboard
pub async fn dashboard_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");

    let today = Utc::now().date_naive();
    match state.followup_service.dashboard_summary(today) {
        Ok(summary) => (
            StatusCode::OK,
            Json(DashboardSummaryResponse {
                total_mothers: summary.total_mothers,
                high_risk_mothers: summary.high_risk_mothers,
                overdue_visits: summary.overdue_visits,
                actions: summary
                    .actions
                    .into_iter()
                    .map(|action| ActionItemDto {
                        kind: action.kind.into(),
                        mother_id: action.mother_id,
                        message: action.message,
                    })
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error building dashboard summary: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error building dashboard summary",
            )
                .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// Wire <-> domain conversions
// ---------------------------------------------------------------------------

impl From<Worker> for WorkerDto {
    fn from(worker: Worker) -> Self {
        Self {
            name: worker.name,
            id: worker.id,
            area: worker.area,
        }
    }
}

impl From<MilestoneStatus> for MilestoneStatusDto {
    fn from(status: MilestoneStatus) -> Self {
        match status {
            MilestoneStatus::Done => Self::Done,
            MilestoneStatus::Due => Self::Due,
            MilestoneStatus::Overdue => Self::Overdue,
        }
    }
}

impl From<MilestoneStatusDto> for MilestoneStatus {
    fn from(status: MilestoneStatusDto) -> Self {
        match status {
            MilestoneStatusDto::Done => Self::Done,
            MilestoneStatusDto::Due => Self::Due,
            MilestoneStatusDto::Overdue => Self::Overdue,
        }
    }
}

impl From<Timeline> for TimelineDto {
    fn from(timeline: Timeline) -> Self {
        Self {
            anc1: timeline.anc1.into(),
            anc2: timeline.anc2.into(),
            tt_injection: timeline.tt_injection.into(),
            iron_tablets: timeline.iron_tablets.into(),
            ultrasound: timeline.ultrasound.into(),
        }
    }
}

impl From<TimelineDto> for Timeline {
    fn from(timeline: TimelineDto) -> Self {
        Self {
            anc1: timeline.anc1.into(),
            anc2: timeline.anc2.into(),
            tt_injection: timeline.tt_injection.into(),
            iron_tablets: timeline.iron_tablets.into(),
            ultrasound: timeline.ultrasound.into(),
        }
    }
}

impl From<FatigueAssessment> for FatigueDto {
    fn from(fatigue: FatigueAssessment) -> Self {
        Self {
            heavy_work: fatigue.heavy_work,
            less_rest: fatigue.less_rest,
            weakness: fatigue.weakness,
        }
    }
}

impl From<FatigueDto> for FatigueAssessment {
    fn from(fatigue: FatigueDto) -> Self {
        Self {
            heavy_work: fatigue.heavy_work,
            less_rest: fatigue.less_rest,
            weakness: fatigue.weakness,
        }
    }
}

impl From<Mother> for MotherDto {
    fn from(mother: Mother) -> Self {
        Self {
            id: mother.id,
            name: mother.name,
            age: mother.age,
            village: mother.village,
            guardian: mother.guardian,
            phone: mother.phone,
            pregnancy_month: mother.pregnancy_month,
            lmp_date: mother.lmp_date,
            high_risk: mother.high_risk,
            conditions: mother.conditions,
            blood_pressure: mother.blood_pressure,
            weight: mother.weight,
            swelling: mother.swelling,
            bleeding: mother.bleeding,
            headache: mother.headache,
            fatigue: mother.fatigue.into(),
            timeline: mother.timeline.into(),
            next_follow_up: mother.next_follow_up,
            notes: mother.notes,
            created_at: mother.created_at,
            last_visit: mother.last_visit,
        }
    }
}

impl From<FatigueRisk> for FatigueRiskDto {
    fn from(risk: FatigueRisk) -> Self {
        match risk {
            FatigueRisk::Low => Self::Low,
            FatigueRisk::Medium => Self::Medium,
            FatigueRisk::High => Self::High,
        }
    }
}

impl From<FollowUpUrgency> for FollowUpUrgencyDto {
    fn from(urgency: FollowUpUrgency) -> Self {
        match urgency {
            FollowUpUrgency::Urgent => Self::Urgent,
            FollowUpUrgency::Soon => Self::Soon,
            FollowUpUrgency::Upcoming => Self::Upcoming,
        }
    }
}

impl From<ActionKind> for ActionKindDto {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::HighRisk => Self::HighRisk,
            ActionKind::Overdue => Self::Overdue,
        }
    }
}

impl From<FollowUpEntry> for FollowUpEntryDto {
    fn from(entry: FollowUpEntry) -> Self {
        Self {
            mother: entry.mother.into(),
            days_until: entry.days_until,
        }
    }
}
