//! Client-side field checks performed before a mutation is sent.
//!
//! These mirror the submission form rules: required name/email/position,
//! a basic `local@domain.tld` email shape, and numeric range checks. The
//! cache layer itself never re-validates; the remote store's accepted
//! payload is authoritative.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::constants::MAX_RATING;
use crate::types::{CandidateDraft, CandidatePatch};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// One or more failed field checks, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check a full create payload.
///
/// Every failed check is collected before returning, so a form can
/// surface all field errors in a single pass.
pub fn validate_draft(draft: &CandidateDraft) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    if draft.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.push(FieldError::new("email", "Invalid email format"));
    }

    if draft.position.trim().is_empty() {
        errors.push(FieldError::new("position", "Position is required"));
    }

    if draft.experience < 0.0 {
        errors.push(FieldError::new("experience", "Experience cannot be negative"));
    }

    if draft.yearly_salary < 0.0 {
        errors.push(FieldError::new("yearlySalary", "Salary cannot be negative"));
    }

    if !(0.0..=MAX_RATING).contains(&draft.rating) {
        errors.push(FieldError::new("rating", "Rating must be between 0 and 5"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Check only the fields present in a partial update payload.
pub fn validate_patch(patch: &CandidatePatch) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if let Some(ref name) = patch.name {
        if name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }
    }

    if let Some(ref email) = patch.email {
        if email.trim().is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !EMAIL_RE.is_match(email) {
            errors.push(FieldError::new("email", "Invalid email format"));
        }
    }

    if let Some(ref position) = patch.position {
        if position.trim().is_empty() {
            errors.push(FieldError::new("position", "Position is required"));
        }
    }

    if let Some(experience) = patch.experience {
        if experience < 0.0 {
            errors.push(FieldError::new("experience", "Experience cannot be negative"));
        }
    }

    if let Some(salary) = patch.yearly_salary {
        if salary < 0.0 {
            errors.push(FieldError::new("yearlySalary", "Salary cannot be negative"));
        }
    }

    if let Some(rating) = patch.rating {
        if !(0.0..=MAX_RATING).contains(&rating) {
            errors.push(FieldError::new("rating", "Rating must be between 0 and 5"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CandidateStatus, CandidatePatch};
    use chrono::NaiveDate;

    fn valid_draft() -> CandidateDraft {
        CandidateDraft {
            name: "Priya Raman".to_string(),
            email: "priya.raman@example.com".to_string(),
            phone: String::new(),
            position: "Platform Engineer".to_string(),
            status: CandidateStatus::Pending,
            skills: vec!["Go".to_string()],
            experience: 3.0,
            rating: 4.2,
            applied_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            interview_date: None,
            notes: String::new(),
            yearly_salary: 88_000.0,
            location: "Remote".to_string(),
            education: "BEng".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "name");
    }

    #[test]
    fn test_email_shape_checked() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.0[0].field, "email");
        assert_eq!(errors.0[0].message, "Invalid email format");

        draft.email = String::new();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.0[0].message, "Email is required");
    }

    #[test]
    fn test_numeric_ranges_checked() {
        let mut draft = valid_draft();
        draft.experience = -1.0;
        draft.yearly_salary = -500.0;
        draft.rating = 5.5;
        let errors = validate_draft(&draft).unwrap_err();
        let fields: Vec<_> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["experience", "yearlySalary", "rating"]);
    }

    #[test]
    fn test_all_failures_collected_at_once() {
        let mut draft = valid_draft();
        draft.name = String::new();
        draft.email = "broken".to_string();
        draft.position = String::new();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.0.len(), 3);
    }

    #[test]
    fn test_empty_patch_passes() {
        assert!(validate_patch(&CandidatePatch::default()).is_ok());
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        let patch = CandidatePatch {
            name: Some(String::new()),
            rating: Some(9.0),
            ..CandidatePatch::default()
        };
        let errors = validate_patch(&patch).unwrap_err();
        let fields: Vec<_> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "rating"]);

        let patch = CandidatePatch {
            status: Some(CandidateStatus::Approved),
            ..CandidatePatch::default()
        };
        assert!(validate_patch(&patch).is_ok());
    }

    #[test]
    fn test_error_message_names_fields() {
        let mut draft = valid_draft();
        draft.name = String::new();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.to_string(), "name: Name is required");
    }
}
