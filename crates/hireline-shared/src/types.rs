//! Domain model for the candidate pipeline.
//!
//! Every struct derives `Serialize`/`Deserialize` with the remote store's
//! wire field names (camelCase), so values pass straight through the HTTP
//! layer and out to the UI without a mapping step.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Candidate identifier, assigned by the remote store on create.
///
/// Opaque to callers; unique across all candidates held in the cache.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub i64);

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Pipeline status of a candidate.
///
/// Serialized as `"pending"`, `"approved"`, `"rejected"` or `"on-hold"`;
/// no other wire value is representable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStatus {
    Pending,
    Approved,
    Rejected,
    OnHold,
}

impl CandidateStatus {
    /// All statuses, in display order.
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::Pending,
        CandidateStatus::Approved,
        CandidateStatus::Rejected,
        CandidateStatus::OnHold,
    ];

    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Approved => "approved",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::OnHold => "on-hold",
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CandidateStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CandidateStatus::Pending),
            "approved" => Ok(CandidateStatus::Approved),
            "rejected" => Ok(CandidateStatus::Rejected),
            "on-hold" => Ok(CandidateStatus::OnHold),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Returned when a string is none of the four known status values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown candidate status: {0}")]
pub struct ParseStatusError(pub String);

/// Status restriction for list queries.
///
/// `All` is the reserved sentinel meaning "no status restriction". It is
/// a closed variant here, but the access layer still forwards its wire
/// value (`"all"`) verbatim; interpreting it is the query processor's
/// business, not the transport's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(CandidateStatus),
}

impl StatusFilter {
    /// The wire value forwarded to the remote store.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Whether a candidate with the given status passes this filter.
    pub fn matches(&self, status: CandidateStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl From<CandidateStatus> for StatusFilter {
    fn from(status: CandidateStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse::<CandidateStatus>().map(StatusFilter::Only)
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A single hiring-pipeline record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    /// Free text, may be empty.
    pub phone: String,
    pub position: String,
    pub status: CandidateStatus,
    /// Skill tokens in insertion order; duplicates permitted.
    pub skills: Vec<String>,
    /// Years of professional experience.
    pub experience: f64,
    /// Reviewer rating in `[0, 5]`.
    pub rating: f64,
    pub applied_date: NaiveDate,
    /// `None` until an interview is scheduled (JSON `null` on the wire).
    pub interview_date: Option<NaiveDate>,
    pub notes: String,
    pub yearly_salary: f64,
    pub location: String,
    pub education: String,
}

impl Candidate {
    /// Payload view of the record without its identifier, as an edit form
    /// would resubmit it.
    pub fn to_draft(&self) -> CandidateDraft {
        CandidateDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            position: self.position.clone(),
            status: self.status,
            skills: self.skills.clone(),
            experience: self.experience,
            rating: self.rating,
            applied_date: self.applied_date,
            interview_date: self.interview_date,
            notes: self.notes.clone(),
            yearly_salary: self.yearly_salary,
            location: self.location.clone(),
            education: self.education.clone(),
        }
    }
}

/// A candidate payload without an identifier, the body of a create call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub status: CandidateStatus,
    pub skills: Vec<String>,
    pub experience: f64,
    pub rating: f64,
    pub applied_date: NaiveDate,
    pub interview_date: Option<NaiveDate>,
    pub notes: String,
    pub yearly_salary: f64,
    pub location: String,
    pub education: String,
}

impl CandidateDraft {
    /// Attach a store-assigned identifier, producing a full record.
    pub fn into_candidate(self, id: CandidateId) -> Candidate {
        Candidate {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            status: self.status,
            skills: self.skills,
            experience: self.experience,
            rating: self.rating,
            applied_date: self.applied_date,
            interview_date: self.interview_date,
            notes: self.notes,
            yearly_salary: self.yearly_salary,
            location: self.location,
            education: self.education,
        }
    }
}

/// A partial candidate payload for `PATCH` calls.
///
/// Absent fields are skipped during serialization and left unchanged by
/// the remote store. The cache adopts the store's response (the full
/// merged record), never this payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<NaiveDate>,
    /// Outer `None` leaves the date unchanged; `Some(None)` clears it
    /// back to "not scheduled" (JSON `null`).
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub interview_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}

// A present-but-null field must deserialize to Some(None), not None.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}
