use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::domain::models::mother::{FollowUpUrgency, Mother};
use crate::storage::memory::MemoryMotherRepository;
use crate::storage::traits::MotherStorage;

/// How many high-risk mothers the dashboard action list surfaces.
const MAX_HIGH_RISK_ACTIONS: usize = 3;
/// How many overdue follow-ups the dashboard action list surfaces.
const MAX_OVERDUE_ACTIONS: usize = 2;

/// A mother paired with the day difference to her next follow-up.
#[derive(Debug, Clone)]
pub struct FollowUpEntry {
    pub mother: Mother,
    pub days_until: i64,
}

/// The full registry partitioned by follow-up urgency. Registry order is
/// preserved within each group.
#[derive(Debug, Clone, Default)]
pub struct FollowUpGroups {
    pub urgent: Vec<FollowUpEntry>,
    pub soon: Vec<FollowUpEntry>,
    pub upcoming: Vec<FollowUpEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    HighRisk,
    Overdue,
}

/// A suggested visit for the worker's day, shown on the overview page.
#[derive(Debug, Clone)]
pub struct ActionItem {
    pub kind: ActionKind,
    pub mother_id: String,
    pub message: String,
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_mothers: usize,
    pub high_risk_mothers: usize,
    pub overdue_visits: usize,
    pub actions: Vec<ActionItem>,
}

/// Service deriving follow-up schedules and dashboard figures from the
/// registry. Nothing here is stored; every call recomputes from the
/// records as they stand.
#[derive(Clone)]
pub struct FollowUpService {
    repository: MemoryMotherRepository,
}

impl FollowUpService {
    pub fn new(repository: MemoryMotherRepository) -> Self {
        Self { repository }
    }

    /// Partition all mothers into urgent / soon / upcoming relative to
    /// `today`. Overdue visits are urgent, anything within three days is
    /// soon, the rest upcoming.
    pub fn categorize(&self, today: NaiveDate) -> Result<FollowUpGroups> {
        let mut groups = FollowUpGroups::default();

        for mother in self.repository.list_mothers()? {
            let days_until = mother.days_until_follow_up(today);
            let urgency = mother.follow_up_urgency(today);
            let entry = FollowUpEntry { mother, days_until };
            match urgency {
                FollowUpUrgency::Urgent => groups.urgent.push(entry),
                FollowUpUrgency::Soon => groups.soon.push(entry),
                FollowUpUrgency::Upcoming => groups.upcoming.push(entry),
            }
        }

        info!(
            "Categorized follow-ups: {} urgent, {} soon, {} upcoming",
            groups.urgent.len(),
            groups.soon.len(),
            groups.upcoming.len()
        );

        Ok(groups)
    }

    /// Overview figures plus the day's suggested actions: up to three
    /// high-risk mothers, then up to two overdue follow-ups.
    pub fn dashboard_summary(&self, today: NaiveDate) -> Result<DashboardSummary> {
        let mothers = self.repository.list_mothers()?;

        let total_mothers = mothers.len();
        let high_risk_mothers = mothers.iter().filter(|m| m.high_risk).count();
        let overdue_visits = mothers.iter().filter(|m| m.is_overdue(today)).count();

        let mut actions: Vec<ActionItem> = mothers
            .iter()
            .filter(|m| m.high_risk)
            .take(MAX_HIGH_RISK_ACTIONS)
            .map(|m| ActionItem {
                kind: ActionKind::HighRisk,
                mother_id: m.id.clone(),
                message: format!("Visit {} - high fatigue and risk", m.name),
            })
            .collect();
        actions.extend(
            mothers
                .iter()
                .filter(|m| m.is_overdue(today))
                .take(MAX_OVERDUE_ACTIONS)
                .map(|m| ActionItem {
                    kind: ActionKind::Overdue,
                    mother_id: m.id.clone(),
                    message: format!("Follow-up overdue: {}", m.name),
                }),
        );

        Ok(DashboardSummary {
            total_mothers,
            high_risk_mothers,
            overdue_visits,
            actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::mother::{
        MotherListFilter, RegisterMotherCommand, UpdateMotherCommand,
    };
    use crate::domain::mother_service::MotherService;
    use chrono::{Duration, Utc};

    struct TestContext {
        mothers: MotherService,
        followups: FollowUpService,
        today: NaiveDate,
    }

    fn setup_test() -> TestContext {
        let repository = MemoryMotherRepository::empty();
        TestContext {
            mothers: MotherService::new(repository.clone()),
            followups: FollowUpService::new(repository),
            today: Utc::now().date_naive(),
        }
    }

    /// Register a mother and move her follow-up to `today + offset` days.
    fn register_with_follow_up(context: &TestContext, name: &str, offset: i64, high_risk: bool) {
        let registered = context
            .mothers
            .register(RegisterMotherCommand {
                name: name.to_string(),
                age: 25,
                village: "X".to_string(),
                guardian: "G".to_string(),
                phone: "9000000000".to_string(),
                pregnancy_month: 3,
                lmp_date: "2024-11-01".to_string(),
                high_risk,
                conditions: vec![],
                blood_pressure: None,
                weight: None,
                notes: None,
            })
            .unwrap();
        context
            .mothers
            .update(UpdateMotherCommand {
                id: registered.mother.id,
                next_follow_up: Some(
                    (context.today + Duration::days(offset))
                        .format("%Y-%m-%d")
                        .to_string(),
                ),
                ..UpdateMotherCommand::default()
            })
            .unwrap();
    }

    #[test]
    fn categorize_partitions_by_urgency_preserving_order() {
        let context = setup_test();
        register_with_follow_up(&context, "Overdue One", -2, false);
        register_with_follow_up(&context, "Due Today", 0, false);
        register_with_follow_up(&context, "Overdue Two", -10, false);
        register_with_follow_up(&context, "Next Week", 7, false);
        register_with_follow_up(&context, "In Three Days", 3, false);

        let groups = context.followups.categorize(context.today).unwrap();

        let names = |entries: &[FollowUpEntry]| {
            entries
                .iter()
                .map(|e| e.mother.name.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(&groups.urgent), vec!["Overdue One", "Overdue Two"]);
        assert_eq!(names(&groups.soon), vec!["Due Today", "In Three Days"]);
        assert_eq!(names(&groups.upcoming), vec!["Next Week"]);

        assert_eq!(groups.urgent[0].days_until, -2);
        assert_eq!(groups.urgent[1].days_until, -10);
        assert_eq!(groups.soon[0].days_until, 0);
    }

    #[test]
    fn categorize_of_empty_registry_yields_empty_groups() {
        let context = setup_test();
        let groups = context.followups.categorize(context.today).unwrap();
        assert!(groups.urgent.is_empty());
        assert!(groups.soon.is_empty());
        assert!(groups.upcoming.is_empty());
    }

    #[test]
    fn dashboard_summary_counts_and_caps_actions() {
        let context = setup_test();
        for i in 0..4 {
            register_with_follow_up(&context, &format!("High Risk {i}"), 10, true);
        }
        for i in 0..3 {
            register_with_follow_up(&context, &format!("Overdue {i}"), -1, false);
        }

        let summary = context.followups.dashboard_summary(context.today).unwrap();

        assert_eq!(summary.total_mothers, 7);
        assert_eq!(summary.high_risk_mothers, 4);
        assert_eq!(summary.overdue_visits, 3);

        // Three high-risk actions, then two overdue
        assert_eq!(summary.actions.len(), 5);
        assert!(summary.actions[..3]
            .iter()
            .all(|a| a.kind == ActionKind::HighRisk));
        assert!(summary.actions[3..]
            .iter()
            .all(|a| a.kind == ActionKind::Overdue));
        assert_eq!(summary.actions[3].message, "Follow-up overdue: Overdue 0");
    }

    #[test]
    fn dashboard_counts_follow_the_registry_as_it_changes() {
        let context = setup_test();
        register_with_follow_up(&context, "Only One", 5, false);

        let before = context.followups.dashboard_summary(context.today).unwrap();
        assert_eq!(before.total_mothers, 1);
        assert_eq!(before.high_risk_mothers, 0);

        let id = context
            .mothers
            .list(MotherListFilter::default())
            .unwrap()
            .mothers[0]
            .id
            .clone();
        context
            .mothers
            .update(UpdateMotherCommand {
                id,
                high_risk: Some(true),
                ..UpdateMotherCommand::default()
            })
            .unwrap();

        let after = context.followups.dashboard_summary(context.today).unwrap();
        assert_eq!(after.high_risk_mothers, 1);
        assert_eq!(after.actions.len(), 1);
        assert_eq!(after.actions[0].kind, ActionKind::HighRisk);
    }
}
