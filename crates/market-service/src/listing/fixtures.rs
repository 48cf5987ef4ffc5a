//! Sample records for unit tests.

use chrono::NaiveDate;
use market_entity::{Complaint, ComplaintStatus};

pub fn complaint(id: i64, subject: &str, status: ComplaintStatus, date: &str) -> Complaint {
    Complaint {
        id,
        subject: subject.to_string(),
        description: format!("Details for complaint {id}"),
        submitted_by: "Ana Reyes".to_string(),
        status,
        submitted_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

/// Three complaints with statuses Open, Resolved, Open.
pub fn complaints() -> Vec<Complaint> {
    vec![
        complaint(1, "Spoiled tilapia", ComplaintStatus::Open, "2024-03-13"),
        complaint(2, "Late delivery", ComplaintStatus::Resolved, "2024-03-15"),
        complaint(3, "Wrong weight on bangus", ComplaintStatus::Open, "2024-03-14"),
    ]
}

pub fn ids(rows: &[&Complaint]) -> Vec<i64> {
    rows.iter().map(|c| c.id).collect()
}
