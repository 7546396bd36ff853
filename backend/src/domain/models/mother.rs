use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status of one antenatal-care milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Done,
    Due,
    Overdue,
}

/// The five fixed antenatal-care checkpoints tracked for every mother.
/// A fresh registration starts with everything due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub anc1: MilestoneStatus,
    pub anc2: MilestoneStatus,
    pub tt_injection: MilestoneStatus,
    pub iron_tablets: MilestoneStatus,
    pub ultrasound: MilestoneStatus,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            anc1: MilestoneStatus::Due,
            anc2: MilestoneStatus::Due,
            tt_injection: MilestoneStatus::Due,
            iron_tablets: MilestoneStatus::Due,
            ultrasound: MilestoneStatus::Due,
        }
    }
}

/// Three independent fatigue indicators recorded during a home visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatigueAssessment {
    pub heavy_work: bool,
    pub less_rest: bool,
    pub weakness: bool,
}

/// Derived fatigue risk bucket. Never stored; recomputed wherever shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatigueRisk {
    Low,
    Medium,
    High,
}

impl FatigueAssessment {
    /// Count of true indicators: 0 is low, 1 is medium, 2 or more is high.
    pub fn risk(&self) -> FatigueRisk {
        let count = [self.heavy_work, self.less_rest, self.weakness]
            .iter()
            .filter(|flag| **flag)
            .count();
        match count {
            0 => FatigueRisk::Low,
            1 => FatigueRisk::Medium,
            _ => FatigueRisk::High,
        }
    }
}

/// Derived follow-up urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpUrgency {
    /// Follow-up date has passed
    Urgent,
    /// Due within the next three days
    Soon,
    Upcoming,
}

/// Domain model for a pregnant mother under a health worker's care.
///
/// `id` is assigned at registration and never changes; every other field
/// is freely mutable through a partial update. Records are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mother {
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
    pub conditions: Vec<String>,
    /// "systolic/diastolic" reading, e.g. "120/80"
    pub blood_pressure: String,
    /// Weight in kilograms
    pub weight: f64,
    pub swelling: bool,
    pub bleeding: bool,
    pub headache: bool,
    pub fatigue: FatigueAssessment,
    pub timeline: Timeline,
    pub next_follow_up: NaiveDate,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub last_visit: NaiveDate,
}

impl Mother {
    /// Day difference between the next follow-up and `today`.
    /// Negative means the visit is overdue.
    pub fn days_until_follow_up(&self, today: NaiveDate) -> i64 {
        (self.next_follow_up - today).num_days()
    }

    /// A follow-up is overdue when its date is strictly before `today`.
    /// Comparison is at day granularity; time of day never enters into it.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_follow_up < today
    }

    pub fn follow_up_urgency(&self, today: NaiveDate) -> FollowUpUrgency {
        let days = self.days_until_follow_up(today);
        if days < 0 {
            FollowUpUrgency::Urgent
        } else if days <= 3 {
            FollowUpUrgency::Soon
        } else {
            FollowUpUrgency::Upcoming
        }
    }
}
