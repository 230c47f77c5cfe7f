use serde::{Deserialize, Serialize};

use crate::domain::email::EmailSummary;

/// Aggregate counters computed by the backend. `time_saved` is in hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_emails: u64,
    pub priority_emails: u64,
    pub action_required: u64,
    pub meetings: u64,
    pub time_saved: u64,
}

/// Body of `GET /api/v1/analysis/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub emails: Vec<EmailSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityPoint {
    pub name: &'static str,
    pub emails: u64,
}

/// Weekly activity shown under "Email Activity". The API does not serve this
/// series yet, so the dashboard ships a fixed sample week.
pub const WEEKLY_ACTIVITY: [ActivityPoint; 7] = [
    ActivityPoint { name: "Mon", emails: 45 },
    ActivityPoint { name: "Tue", emails: 52 },
    ActivityPoint { name: "Wed", emails: 38 },
    ActivityPoint { name: "Thu", emails: 61 },
    ActivityPoint { name: "Fri", emails: 48 },
    ActivityPoint { name: "Sat", emails: 12 },
    ActivityPoint { name: "Sun", emails: 8 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_payload() {
        let data: DashboardData = serde_json::from_str(
            r#"{
                "stats": {
                    "totalEmails": 120,
                    "priorityEmails": 14,
                    "actionRequired": 9,
                    "meetings": 3,
                    "timeSaved": 5
                },
                "emails": [
                    {"priority":"Low","category":"News","subject":"Digest",
                     "from":"news@example.com","summary":"Weekly digest","date":"Mon"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            data.stats,
            DashboardStats {
                total_emails: 120,
                priority_emails: 14,
                action_required: 9,
                meetings: 3,
                time_saved: 5,
            }
        );
        assert_eq!(data.emails.len(), 1);
        assert_eq!(data.emails[0].subject, "Digest");
    }

    #[test]
    fn negative_counter_is_rejected() {
        let r = serde_json::from_str::<DashboardStats>(
            r#"{"totalEmails":-1,"priorityEmails":0,"actionRequired":0,"meetings":0,"timeSaved":0}"#,
        );
        assert!(r.is_err());
    }

    #[test]
    fn initial_stats_are_zero() {
        let s = DashboardStats::default();
        assert_eq!(s.total_emails + s.priority_emails + s.action_required, 0);
        assert_eq!(s.meetings + s.time_saved, 0);
    }
}
