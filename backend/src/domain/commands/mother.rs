//! Command and result types for mother registry operations.

use crate::domain::models::mother::{FatigueAssessment, Mother, Timeline};

/// Register a new mother. The registry assigns the id and `created_at`;
/// clinical snapshot, fatigue and timeline fields take fixed defaults.
#[derive(Debug, Clone)]
pub struct RegisterMotherCommand {
    pub name: String,
    pub age: u32,
    pub village: String,
    pub guardian: String,
    pub phone: String,
    pub pregnancy_month: u32,
    /// Last menstrual period date (YYYY-MM-DD)
    pub lmp_date: String,
    pub high_risk: bool,
    pub conditions: Vec<String>,
    /// Defaults to "120/80" when the form did not capture a reading
    pub blood_pressure: Option<String>,
    /// Defaults to 62 kg when the form did not capture a weight
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterMotherResult {
    pub mother: Mother,
}

/// Partial update of an existing record. `Some` replaces the field,
/// `None` keeps the prior value. The fatigue and timeline blocks are
/// replaced whole, matching how the profile form submits them.
#[derive(Debug, Clone, Default)]
pub struct UpdateMotherCommand {
    pub id: String,
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
    pub fatigue: Option<FatigueAssessment>,
    pub timeline: Option<Timeline>,
    pub next_follow_up: Option<String>,
    pub notes: Option<String>,
    pub last_visit: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateMotherResult {
    pub mother: Mother,
}

#[derive(Debug, Clone)]
pub struct GetMotherCommand {
    pub mother_id: String,
}

/// `mother` is `None` for an unknown id; callers branch on presence.
#[derive(Debug, Clone)]
pub struct GetMotherResult {
    pub mother: Option<Mother>,
}

/// Composable list predicate: case-insensitive substring match on name or
/// village, AND an optional high-risk equality filter.
#[derive(Debug, Clone, Default)]
pub struct MotherListFilter {
    pub search: Option<String>,
    pub high_risk: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ListMothersResult {
    pub mothers: Vec<Mother>,
}
