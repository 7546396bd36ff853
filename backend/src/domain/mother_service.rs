use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use log::{info, warn};
use uuid::Uuid;

use crate::domain::commands::mother::{
    GetMotherCommand, GetMotherResult, ListMothersResult, MotherListFilter,
    RegisterMotherCommand, RegisterMotherResult, UpdateMotherCommand, UpdateMotherResult,
};
use crate::domain::errors::DomainError;
use crate::domain::models::mother::{FatigueAssessment, Mother, Timeline};
use crate::storage::memory::MemoryMotherRepository;
use crate::storage::traits::MotherStorage;

/// Days between registration and the first scheduled follow-up visit.
const DEFAULT_FOLLOW_UP_DAYS: i64 = 14;

/// Service for managing the mother registry.
#[derive(Clone)]
pub struct MotherService {
    repository: MemoryMotherRepository,
}

impl MotherService {
    /// Create a new MotherService over the given registry.
    pub fn new(repository: MemoryMotherRepository) -> Self {
        Self { repository }
    }

    /// Register a new mother.
    ///
    /// The registry assigns a fresh unique id and `created_at`; the
    /// clinical snapshot, fatigue flags and milestone timeline start at
    /// their registration defaults and the first follow-up is scheduled
    /// 14 days out. No duplicate detection: registering the same woman
    /// twice yields two records.
    pub fn register(&self, command: RegisterMotherCommand) -> Result<RegisterMotherResult> {
        info!(
            "Registering mother: name={}, village={}",
            command.name, command.village
        );

        self.validate_name(&command.name)?;
        let lmp_date = parse_date(&command.lmp_date)
            .context("Invalid LMP date in register command")?;

        let now = Utc::now();
        let today = now.date_naive();

        let mother = Mother {
            id: format!("mother::{}", Uuid::new_v4()),
            name: command.name.trim().to_string(),
            age: command.age,
            village: command.village,
            guardian: command.guardian,
            phone: command.phone,
            pregnancy_month: command.pregnancy_month,
            lmp_date,
            high_risk: command.high_risk,
            conditions: command.conditions,
            blood_pressure: command
                .blood_pressure
                .unwrap_or_else(|| "120/80".to_string()),
            weight: command.weight.unwrap_or(62.0),
            swelling: false,
            bleeding: false,
            headache: false,
            fatigue: FatigueAssessment::default(),
            timeline: Timeline::default(),
            next_follow_up: today + Duration::days(DEFAULT_FOLLOW_UP_DAYS),
            notes: command
                .notes
                .unwrap_or_else(|| "New registration".to_string()),
            created_at: now,
            last_visit: today,
        };

        self.repository.store_mother(&mother)?;

        info!("Registered mother: {} with ID: {}", mother.name, mother.id);

        Ok(RegisterMotherResult { mother })
    }

    /// Get a mother by id. Absent ids are not an error; the result
    /// carries `None` and callers branch on presence.
    pub fn get(&self, command: GetMotherCommand) -> Result<GetMotherResult> {
        info!("Getting mother: {}", command.mother_id);

        let mother = self.repository.get_mother(&command.mother_id)?;

        if mother.is_none() {
            warn!("Mother not found: {}", command.mother_id);
        }

        Ok(GetMotherResult { mother })
    }

    /// List mothers matching the filter, in registry (insertion) order.
    ///
    /// The search term matches case-insensitively as a substring of the
    /// name or the village; the risk filter, when present, keeps only
    /// records whose `high_risk` flag equals it.
    pub fn list(&self, filter: MotherListFilter) -> Result<ListMothersResult> {
        info!(
            "Listing mothers: search={:?}, high_risk={:?}",
            filter.search, filter.high_risk
        );

        let needle = filter
            .search
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        let mothers: Vec<Mother> = self
            .repository
            .list_mothers()?
            .into_iter()
            .filter(|mother| {
                let matches_search = needle.is_empty()
                    || mother.name.to_lowercase().contains(&needle)
                    || mother.village.to_lowercase().contains(&needle);
                let matches_risk = filter
                    .high_risk
                    .map_or(true, |high_risk| mother.high_risk == high_risk);
                matches_search && matches_risk
            })
            .collect();

        info!("Found {} mothers", mothers.len());

        Ok(ListMothersResult { mothers })
    }

    /// Merge a partial update into an existing record.
    ///
    /// Fields left as `None` keep their prior value; an empty partial is
    /// a no-op. Updates addressed to an unknown id fail with
    /// [`DomainError::MotherNotFound`] rather than silently dropping the
    /// write.
    pub fn update(&self, command: UpdateMotherCommand) -> Result<UpdateMotherResult> {
        info!("Updating mother: {}", command.id);

        let mut mother = self
            .repository
            .get_mother(&command.id)?
            .ok_or_else(|| DomainError::MotherNotFound {
                id: command.id.clone(),
            })?;

        if let Some(name) = command.name {
            self.validate_name(&name)?;
            mother.name = name.trim().to_string();
        }
        if let Some(age) = command.age {
            mother.age = age;
        }
        if let Some(village) = command.village {
            mother.village = village;
        }
        if let Some(guardian) = command.guardian {
            mother.guardian = guardian;
        }
        if let Some(phone) = command.phone {
            mother.phone = phone;
        }
        if let Some(pregnancy_month) = command.pregnancy_month {
            mother.pregnancy_month = pregnancy_month;
        }
        if let Some(lmp_date) = command.lmp_date {
            mother.lmp_date =
                parse_date(&lmp_date).context("Invalid LMP date in update command")?;
        }
        if let Some(high_risk) = command.high_risk {
            mother.high_risk = high_risk;
        }
        if let Some(conditions) = command.conditions {
            mother.conditions = conditions;
        }
        if let Some(blood_pressure) = command.blood_pressure {
            mother.blood_pressure = blood_pressure;
        }
        if let Some(weight) = command.weight {
            mother.weight = weight;
        }
        if let Some(swelling) = command.swelling {
            mother.swelling = swelling;
        }
        if let Some(bleeding) = command.bleeding {
            mother.bleeding = bleeding;
        }
        if let Some(headache) = command.headache {
            mother.headache = headache;
        }
        if let Some(fatigue) = command.fatigue {
            mother.fatigue = fatigue;
        }
        if let Some(timeline) = command.timeline {
            mother.timeline = timeline;
        }
        if let Some(next_follow_up) = command.next_follow_up {
            mother.next_follow_up = parse_date(&next_follow_up)
                .context("Invalid follow-up date in update command")?;
        }
        if let Some(notes) = command.notes {
            mother.notes = notes;
        }
        if let Some(last_visit) = command.last_visit {
            mother.last_visit =
                parse_date(&last_visit).context("Invalid last-visit date in update command")?;
        }

        self.repository.update_mother(&mother)?;

        info!("Updated mother: {} with ID: {}", mother.name, mother.id);

        Ok(UpdateMotherResult { mother })
    }

    fn validate_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(anyhow::anyhow!("Mother name cannot be empty"));
        }
        Ok(())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Not a YYYY-MM-DD date: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::mother::{FatigueRisk, MilestoneStatus};
    use std::collections::HashSet;

    fn setup_test() -> MotherService {
        MotherService::new(MemoryMotherRepository::empty())
    }

    fn register_command(name: &str, village: &str) -> RegisterMotherCommand {
        RegisterMotherCommand {
            name: name.to_string(),
            age: 25,
            village: village.to_string(),
            guardian: "Guardian".to_string(),
            phone: "9000000000".to_string(),
            pregnancy_month: 3,
            lmp_date: "2024-11-01".to_string(),
            high_risk: false,
            conditions: vec![],
            blood_pressure: None,
            weight: None,
            notes: None,
        }
    }

    #[test]
    fn register_applies_defaults_and_schedules_follow_up() {
        let service = setup_test();

        let result = service
            .register(register_command("Test A", "X"))
            .unwrap();
        let mother = service
            .get(GetMotherCommand {
                mother_id: result.mother.id.clone(),
            })
            .unwrap()
            .mother
            .unwrap();

        assert_eq!(mother.name, "Test A");
        assert_eq!(mother.village, "X");
        assert_eq!(mother.timeline.anc1, MilestoneStatus::Due);
        assert_eq!(mother.timeline.ultrasound, MilestoneStatus::Due);
        assert!(!mother.swelling);
        assert!(!mother.bleeding);
        assert!(!mother.headache);
        assert_eq!(mother.fatigue.risk(), FatigueRisk::Low);
        assert_eq!(mother.blood_pressure, "120/80");
        assert_eq!(
            mother.next_follow_up,
            mother.created_at.date_naive() + Duration::days(14)
        );
        assert_eq!(mother.last_visit, mother.created_at.date_naive());
        assert_eq!(mother.notes, "New registration");
    }

    #[test]
    fn register_trims_name_and_rejects_empty() {
        let service = setup_test();

        let result = service
            .register(register_command("  Padded Name  ", "X"))
            .unwrap();
        assert_eq!(result.mother.name, "Padded Name");

        assert!(service.register(register_command("   ", "X")).is_err());
    }

    #[test]
    fn register_rejects_malformed_lmp_date() {
        let service = setup_test();
        let mut command = register_command("Test", "X");
        command.lmp_date = "01/11/2024".to_string();

        assert!(service.register(command).is_err());
    }

    #[test]
    fn ids_stay_unique_across_any_register_sequence() {
        let service = setup_test();

        let mut seen = HashSet::new();
        for i in 0..50 {
            let result = service
                .register(register_command(&format!("Mother {i}"), "X"))
                .unwrap();
            assert!(seen.insert(result.mother.id));
        }
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let service = setup_test();
        let result = service
            .get(GetMotherCommand {
                mother_id: "nonexistent-id".to_string(),
            })
            .unwrap();
        assert!(result.mother.is_none());
    }

    #[test]
    fn empty_partial_update_leaves_record_unchanged() {
        let service = setup_test();
        let registered = service.register(register_command("Test", "X")).unwrap();

        let updated = service
            .update(UpdateMotherCommand {
                id: registered.mother.id.clone(),
                ..UpdateMotherCommand::default()
            })
            .unwrap();

        assert_eq!(updated.mother, registered.mother);
    }

    #[test]
    fn single_field_update_touches_only_that_field() {
        let service = setup_test();
        let registered = service.register(register_command("Test", "X")).unwrap();

        let updated = service
            .update(UpdateMotherCommand {
                id: registered.mother.id.clone(),
                notes: Some("Swelling observed, re-check next week".to_string()),
                ..UpdateMotherCommand::default()
            })
            .unwrap()
            .mother;

        assert_eq!(updated.notes, "Swelling observed, re-check next week");

        let mut expected = registered.mother;
        expected.notes = updated.notes.clone();
        assert_eq!(updated, expected);
    }

    #[test]
    fn update_replaces_fatigue_and_timeline_whole() {
        let service = setup_test();
        let registered = service.register(register_command("Test", "X")).unwrap();

        let updated = service
            .update(UpdateMotherCommand {
                id: registered.mother.id.clone(),
                fatigue: Some(FatigueAssessment {
                    heavy_work: true,
                    less_rest: true,
                    weakness: false,
                }),
                timeline: Some(Timeline {
                    anc1: MilestoneStatus::Done,
                    ..Timeline::default()
                }),
                ..UpdateMotherCommand::default()
            })
            .unwrap()
            .mother;

        assert_eq!(updated.fatigue.risk(), FatigueRisk::High);
        assert_eq!(updated.timeline.anc1, MilestoneStatus::Done);
        assert_eq!(updated.timeline.anc2, MilestoneStatus::Due);
    }

    #[test]
    fn update_of_unknown_id_fails_and_alters_nothing() {
        let service = setup_test();
        service.register(register_command("Kept Intact", "X")).unwrap();
        let before = service.list(MotherListFilter::default()).unwrap().mothers;

        let result = service.update(UpdateMotherCommand {
            id: "nonexistent-id".to_string(),
            name: Some("Y".to_string()),
            ..UpdateMotherCommand::default()
        });

        let error = result.unwrap_err();
        assert!(error.downcast_ref::<DomainError>().is_some());

        let after = service.list(MotherListFilter::default()).unwrap().mothers;
        assert_eq!(before, after);
    }

    #[test]
    fn id_is_immutable_through_updates() {
        let service = setup_test();
        let registered = service.register(register_command("Test", "X")).unwrap();

        let updated = service
            .update(UpdateMotherCommand {
                id: registered.mother.id.clone(),
                name: Some("Renamed".to_string()),
                ..UpdateMotherCommand::default()
            })
            .unwrap();

        assert_eq!(updated.mother.id, registered.mother.id);
    }

    #[test]
    fn list_risk_filter_returns_exactly_the_matching_subset() {
        let service = setup_test();
        let mut command = register_command("Low Risk", "X");
        service.register(command.clone()).unwrap();

        command.name = "High Risk One".to_string();
        command.high_risk = true;
        service.register(command.clone()).unwrap();

        command.name = "Low Risk Two".to_string();
        command.high_risk = false;
        service.register(command.clone()).unwrap();

        command.name = "High Risk Two".to_string();
        command.high_risk = true;
        service.register(command).unwrap();

        let high = service
            .list(MotherListFilter {
                high_risk: Some(true),
                ..MotherListFilter::default()
            })
            .unwrap()
            .mothers;

        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|m| m.high_risk));
        // Insertion order preserved
        assert_eq!(high[0].name, "High Risk One");
        assert_eq!(high[1].name, "High Risk Two");
    }

    #[test]
    fn list_search_matches_name_or_village_case_insensitively() {
        let service = setup_test();
        service
            .register(register_command("Sita Devi", "Dharampur"))
            .unwrap();
        service
            .register(register_command("Priya Sharma", "Khairagarh"))
            .unwrap();

        let by_name = service
            .list(MotherListFilter {
                search: Some("sita".to_string()),
                ..MotherListFilter::default()
            })
            .unwrap()
            .mothers;
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Sita Devi");

        let by_village = service
            .list(MotherListFilter {
                search: Some("KHAIRA".to_string()),
                ..MotherListFilter::default()
            })
            .unwrap()
            .mothers;
        assert_eq!(by_village.len(), 1);
        assert_eq!(by_village[0].name, "Priya Sharma");

        let none = service
            .list(MotherListFilter {
                search: Some("missing".to_string()),
                ..MotherListFilter::default()
            })
            .unwrap()
            .mothers;
        assert!(none.is_empty());
    }

    #[test]
    fn list_combines_search_and_risk_filter() {
        let service = setup_test();
        let mut command = register_command("Sita Devi", "Dharampur");
        service.register(command.clone()).unwrap();

        command.name = "Sita Kumari".to_string();
        command.high_risk = true;
        service.register(command).unwrap();

        let mothers = service
            .list(MotherListFilter {
                search: Some("sita".to_string()),
                high_risk: Some(true),
            })
            .unwrap()
            .mothers;

        assert_eq!(mothers.len(), 1);
        assert_eq!(mothers[0].name, "Sita Kumari");
    }
}
