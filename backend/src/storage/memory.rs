//! In-memory mother registry.
//!
//! There is no persistence layer: the registry lives for the lifetime of
//! the process and is re-seeded from fixture data on every start. Records
//! are kept in insertion order, which is the natural order every listing
//! operation reports.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::debug;

use crate::domain::models::mother::{
    FatigueAssessment, MilestoneStatus, Mother, Timeline,
};
use crate::storage::traits::MotherStorage;

/// In-memory repository holding the process-wide mother registry.
///
/// Clones share the same underlying registry.
#[derive(Clone)]
pub struct MemoryMotherRepository {
    mothers: Arc<Mutex<Vec<Mother>>>,
}

impl MemoryMotherRepository {
    /// Create an empty registry (used by tests).
    pub fn empty() -> Self {
        Self {
            mothers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a registry pre-loaded with the startup fixture records.
    pub fn seeded() -> Self {
        let repository = Self {
            mothers: Arc::new(Mutex::new(seed_mothers())),
        };
        debug!("Seeded mother registry with fixture records");
        repository
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Mother>> {
        // A poisoned lock only means another thread panicked mid-read;
        // the Vec itself is still coherent, so recover the guard.
        self.mothers.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MotherStorage for MemoryMotherRepository {
    fn store_mother(&self, mother: &Mother) -> Result<()> {
        self.lock().push(mother.clone());
        Ok(())
    }

    fn get_mother(&self, mother_id: &str) -> Result<Option<Mother>> {
        Ok(self.lock().iter().find(|m| m.id == mother_id).cloned())
    }

    fn list_mothers(&self) -> Result<Vec<Mother>> {
        Ok(self.lock().clone())
    }

    fn update_mother(&self, mother: &Mother) -> Result<()> {
        let mut mothers = self.lock();
        let slot = mothers
            .iter_mut()
            .find(|m| m.id == mother.id)
            .ok_or_else(|| anyhow!("No stored record with id {}", mother.id))?;
        *slot = mother.clone();
        Ok(())
    }
}

/// The three fixture records every process starts with.
fn seed_mothers() -> Vec<Mother> {
    vec![
        Mother {
            id: "1".to_string(),
            name: "Sita Devi".to_string(),
            age: 24,
            village: "Dharampur".to_string(),
            guardian: "Rajesh Kumar".to_string(),
            phone: "9876543210".to_string(),
            pregnancy_month: 6,
            lmp_date: date(2024, 7, 15),
            high_risk: false,
            conditions: vec![],
            blood_pressure: "120/80".to_string(),
            weight: 62.0,
            swelling: false,
            bleeding: false,
            headache: false,
            fatigue: FatigueAssessment {
                heavy_work: true,
                less_rest: false,
                weakness: false,
            },
            timeline: Timeline {
                anc1: MilestoneStatus::Done,
                ..Timeline::default()
            },
            next_follow_up: date(2025, 2, 10),
            notes: "Regular checkup completed. No complications.".to_string(),
            created_at: date(2024, 7, 15).and_hms_opt(0, 0, 0).unwrap().and_utc(),
            last_visit: date(2025, 1, 20),
        },
        Mother {
            id: "2".to_string(),
            name: "Priya Sharma".to_string(),
            age: 28,
            village: "Khairagarh".to_string(),
            guardian: "Vikram Singh".to_string(),
            phone: "9123456789".to_string(),
            pregnancy_month: 8,
            lmp_date: date(2024, 5, 20),
            high_risk: true,
            conditions: vec!["Anemia".to_string(), "High BP".to_string()],
            blood_pressure: "140/95".to_string(),
            weight: 68.0,
            swelling: true,
            bleeding: false,
            headache: true,
            fatigue: FatigueAssessment {
                heavy_work: true,
                less_rest: true,
                weakness: true,
            },
            timeline: Timeline {
                anc1: MilestoneStatus::Done,
                anc2: MilestoneStatus::Done,
                tt_injection: MilestoneStatus::Done,
                ..Timeline::default()
            },
            next_follow_up: date(2025, 1, 28),
            notes: "High priority. Referred to PHC for specialist consultation.".to_string(),
            created_at: date(2024, 5, 20).and_hms_opt(0, 0, 0).unwrap().and_utc(),
            last_visit: date(2025, 1, 15),
        },
        Mother {
            id: "3".to_string(),
            name: "Anjali Das".to_string(),
            age: 22,
            village: "Raipur".to_string(),
            guardian: "Arjun Das".to_string(),
            phone: "9234567890".to_string(),
            pregnancy_month: 4,
            lmp_date: date(2024, 9, 10),
            high_risk: false,
            conditions: vec![],
            blood_pressure: "118/76".to_string(),
            weight: 59.0,
            swelling: false,
            bleeding: false,
            headache: false,
            fatigue: FatigueAssessment::default(),
            timeline: Timeline {
                anc1: MilestoneStatus::Done,
                ..Timeline::default()
            },
            next_follow_up: date(2025, 2, 15),
            notes: "On track. Regular pregnancy. No concerns.".to_string(),
            created_at: date(2024, 9, 10).and_hms_opt(0, 0, 0).unwrap().and_utc(),
            last_visit: date(2025, 1, 10),
        },
    ]
}

// Fixture dates are compile-time constants and always valid.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
