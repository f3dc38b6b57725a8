//! CSV export of the candidate list.
//!
//! The export always covers the full, unfiltered snapshot. Every field
//! is quoted (embedded quotes doubled) and the file name carries the
//! current calendar date, e.g. `candidates-export-2026-08-07.csv`.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::info;

use hireline_shared::constants::SKILL_SEPARATOR;
use hireline_shared::Candidate;

use crate::error::Result;

/// Column headers, in the fixed export order.
const HEADERS: [&str; 14] = [
    "Name",
    "Email",
    "Phone",
    "Position",
    "Status",
    "Skills",
    "Experience",
    "Rating",
    "Applied Date",
    "Interview Date",
    "Yearly Salary",
    "Location",
    "Education",
    "Notes",
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| quote(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a snapshot as CSV text, header row included.
pub fn csv_export(candidates: &[Candidate]) -> String {
    let mut lines = Vec::with_capacity(candidates.len() + 1);
    lines.push(row(
        &HEADERS.map(|h| h.to_string()),
    ));

    for c in candidates {
        lines.push(row(&[
            c.name.clone(),
            c.email.clone(),
            c.phone.clone(),
            c.position.clone(),
            c.status.to_string(),
            c.skills.join(SKILL_SEPARATOR),
            c.experience.to_string(),
            c.rating.to_string(),
            c.applied_date.to_string(),
            c.interview_date.map(|d| d.to_string()).unwrap_or_default(),
            c.yearly_salary.to_string(),
            c.location.clone(),
            c.education.clone(),
            c.notes.clone(),
        ]));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn export_file_name(date: NaiveDate) -> String {
    format!("candidates-export-{}.csv", date.format("%Y-%m-%d"))
}

/// Write a snapshot to `dir`, stamped with today's date, and return the
/// path of the written file.
pub fn write_export(dir: &Path, candidates: &[Candidate]) -> Result<PathBuf> {
    let path = dir.join(export_file_name(Local::now().date_naive()));
    std::fs::write(&path, csv_export(candidates))?;
    info!(path = %path.display(), count = candidates.len(), "Exported candidates");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use hireline_shared::{CandidateId, CandidateStatus};

    fn candidate() -> Candidate {
        Candidate {
            id: CandidateId(1),
            name: "Ada \"The Machine\" Quinn".to_string(),
            email: "ada.quinn@example.com".to_string(),
            phone: "555-0100".to_string(),
            position: "Compiler Engineer".to_string(),
            status: CandidateStatus::OnHold,
            skills: vec!["Rust".to_string(), "LLVM".to_string()],
            experience: 7.5,
            rating: 5.0,
            applied_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            interview_date: None,
            notes: "Asked about remote work, budget pending".to_string(),
            yearly_salary: 140_000.0,
            location: "Toronto".to_string(),
            education: "MSc".to_string(),
        }
    }

    #[test]
    fn test_header_row_has_fixed_column_order() {
        let csv = csv_export(&[]);
        assert_eq!(
            csv,
            "\"Name\",\"Email\",\"Phone\",\"Position\",\"Status\",\"Skills\",\
             \"Experience\",\"Rating\",\"Applied Date\",\"Interview Date\",\
             \"Yearly Salary\",\"Location\",\"Education\",\"Notes\"\n"
        );
    }

    #[test]
    fn test_every_field_quoted_and_quotes_doubled() {
        let csv = csv_export(&[candidate()]);
        let line = csv.lines().nth(1).unwrap();
        assert!(line.starts_with("\"Ada \"\"The Machine\"\" Quinn\","));
        assert!(line.contains("\"Rust; LLVM\""));
        assert!(line.contains("\"on-hold\""));
        assert!(line.contains("\"7.5\""));
        assert!(line.contains("\"140000\""));
        assert!(line.contains("\"2025-04-02\""));
    }

    #[test]
    fn test_unscheduled_interview_is_an_empty_column() {
        let csv = csv_export(&[candidate()]);
        let line = csv.lines().nth(1).unwrap();
        // Applied Date, then an empty Interview Date column.
        assert!(line.contains("\"2025-04-02\",\"\",\"140000\""));
    }

    #[test]
    fn test_one_row_per_candidate() {
        let mut second = candidate();
        second.id = CandidateId(2);
        second.name = "Noor Haddad".to_string();
        let csv = csv_export(&[candidate(), second]);
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_write_export_stamps_the_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), &[candidate()]).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(name, format!("candidates-export-{today}.csv"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, csv_export(&[candidate()]));
    }
}
