// Patent application table rows
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Granted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatentApplication {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: ApplicationStatus,
    pub filed_on: NaiveDate,
}

impl PatentApplication {
    pub fn new(
        id: &str,
        title: &str,
        category: &str,
        status: ApplicationStatus,
        filed_on: NaiveDate,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            status,
            filed_on,
        }
    }
}

/// Actions offered from a row's options menu.
pub const APPLICATION_ACTIONS: [&str; 6] = [
    "View Details",
    "Edit Application",
    "Download Documents",
    "Add Comments",
    "Change Status",
    "Delete Application",
];

/// Recent applications listed in the dashboard table.
pub fn recent_applications() -> Vec<PatentApplication> {
    let rows = [
        (
            "PA-2024-001",
            "Neural Network Optimization Method",
            "AI/ML",
            ApplicationStatus::Pending,
            (2024, 1, 15),
        ),
        (
            "PA-2024-002",
            "Distributed Ledger Consensus Protocol",
            "Blockchain",
            ApplicationStatus::Granted,
            (2024, 1, 12),
        ),
        (
            "PA-2024-003",
            "Low-Power Sensor Mesh Routing",
            "IoT",
            ApplicationStatus::UnderReview,
            (2024, 1, 10),
        ),
        (
            "PA-2024-004",
            "Error-Corrected Qubit Layout",
            "Quantum",
            ApplicationStatus::Pending,
            (2024, 1, 8),
        ),
        (
            "PA-2024-005",
            "Enzyme Stabilization Process",
            "Biotech",
            ApplicationStatus::Rejected,
            (2024, 1, 5),
        ),
    ];

    rows.into_iter()
        .filter_map(|(id, title, category, status, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|filed_on| PatentApplication::new(id, title, category, status, filed_on))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_applications_are_unique_and_dated() {
        let rows = recent_applications();
        assert_eq!(rows.len(), 5);
        let mut ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert!(rows.windows(2).all(|w| w[0].filed_on >= w[1].filed_on));
    }
}
