//! Development seed data: fifteen realistic candidate records.
//!
//! Useful for seeding a local development store and as a fixture set in
//! tests. Every record satisfies the submission-form checks in
//! [`crate::validation`].

use chrono::NaiveDate;

use crate::types::{Candidate, CandidateId, CandidateStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn skills(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

/// The full sample set, ids 1 through 15, in application order.
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: CandidateId(1),
            name: "Sarah Mitchell".to_string(),
            email: "sarah.mitchell@example.com".to_string(),
            phone: "555-0101".to_string(),
            position: "Frontend Developer".to_string(),
            status: CandidateStatus::Approved,
            skills: skills(&["React", "TypeScript", "CSS"]),
            experience: 5.0,
            rating: 4.5,
            applied_date: date(2025, 1, 15),
            interview_date: Some(date(2025, 1, 28)),
            notes: "Strong portfolio, great communication.".to_string(),
            yearly_salary: 95_000.0,
            location: "San Francisco, CA".to_string(),
            education: "BSc Computer Science".to_string(),
        },
        Candidate {
            id: CandidateId(2),
            name: "James Okafor".to_string(),
            email: "james.okafor@example.com".to_string(),
            phone: "555-0102".to_string(),
            position: "Backend Engineer".to_string(),
            status: CandidateStatus::Pending,
            skills: skills(&["Rust", "PostgreSQL", "Docker"]),
            experience: 3.0,
            rating: 4.0,
            applied_date: date(2025, 2, 3),
            interview_date: None,
            notes: String::new(),
            yearly_salary: 88_000.0,
            location: "Austin, TX".to_string(),
            education: "BSc Software Engineering".to_string(),
        },
        Candidate {
            id: CandidateId(3),
            name: "Elena Petrova".to_string(),
            email: "elena.petrova@example.com".to_string(),
            phone: "555-0103".to_string(),
            position: "Data Scientist".to_string(),
            status: CandidateStatus::OnHold,
            skills: skills(&["Python", "TensorFlow", "SQL"]),
            experience: 7.0,
            rating: 4.8,
            applied_date: date(2025, 1, 22),
            interview_date: Some(date(2025, 2, 10)),
            notes: "Waiting on headcount approval.".to_string(),
            yearly_salary: 125_000.0,
            location: "New York, NY".to_string(),
            education: "PhD Statistics".to_string(),
        },
        Candidate {
            id: CandidateId(4),
            name: "Marcus Webb".to_string(),
            email: "marcus.webb@example.com".to_string(),
            phone: "555-0104".to_string(),
            position: "DevOps Engineer".to_string(),
            status: CandidateStatus::Rejected,
            skills: skills(&["Kubernetes", "Terraform", "AWS"]),
            experience: 2.0,
            rating: 2.5,
            applied_date: date(2025, 2, 14),
            interview_date: Some(date(2025, 2, 20)),
            notes: "Not enough production experience yet.".to_string(),
            yearly_salary: 92_000.0,
            location: "Denver, CO".to_string(),
            education: "BSc Information Systems".to_string(),
        },
        Candidate {
            id: CandidateId(5),
            name: "Priya Raman".to_string(),
            email: "priya.raman@example.com".to_string(),
            phone: "555-0105".to_string(),
            position: "Platform Engineer".to_string(),
            status: CandidateStatus::Approved,
            skills: skills(&["Go", "gRPC", "Kafka"]),
            experience: 6.0,
            rating: 4.6,
            applied_date: date(2025, 1, 8),
            interview_date: Some(date(2025, 1, 19)),
            notes: "Referred by platform team lead.".to_string(),
            yearly_salary: 118_000.0,
            location: "Seattle, WA".to_string(),
            education: "MSc Computer Science".to_string(),
        },
        Candidate {
            id: CandidateId(6),
            name: "Tom Aldridge".to_string(),
            email: "tom.aldridge@example.com".to_string(),
            phone: "555-0106".to_string(),
            position: "Frontend Developer".to_string(),
            status: CandidateStatus::Pending,
            skills: skills(&["Vue", "JavaScript"]),
            experience: 1.5,
            rating: 3.2,
            applied_date: date(2025, 3, 2),
            interview_date: None,
            notes: String::new(),
            yearly_salary: 68_000.0,
            location: "Portland, OR".to_string(),
            education: "Bootcamp Certificate".to_string(),
        },
        Candidate {
            id: CandidateId(7),
            name: "Aisha Diallo".to_string(),
            email: "aisha.diallo@example.com".to_string(),
            phone: "555-0107".to_string(),
            position: "Engineering Manager".to_string(),
            status: CandidateStatus::OnHold,
            skills: skills(&["Leadership", "Agile", "Python"]),
            experience: 10.0,
            rating: 4.9,
            applied_date: date(2025, 2, 26),
            interview_date: Some(date(2025, 3, 12)),
            notes: "Excellent fit; role may be re-scoped.".to_string(),
            yearly_salary: 160_000.0,
            location: "Chicago, IL".to_string(),
            education: "MBA".to_string(),
        },
        Candidate {
            id: CandidateId(8),
            name: "Diego Fernandez".to_string(),
            email: "diego.fernandez@example.com".to_string(),
            phone: "555-0108".to_string(),
            position: "Mobile Developer".to_string(),
            status: CandidateStatus::Pending,
            skills: skills(&["Swift", "Kotlin"]),
            experience: 4.0,
            rating: 3.8,
            applied_date: date(2025, 3, 9),
            interview_date: None,
            notes: String::new(),
            yearly_salary: 90_000.0,
            location: "Miami, FL".to_string(),
            education: "BSc Computer Engineering".to_string(),
        },
        Candidate {
            id: CandidateId(9),
            name: "Hannah Lee".to_string(),
            email: "hannah.lee@example.com".to_string(),
            phone: "555-0109".to_string(),
            position: "QA Engineer".to_string(),
            status: CandidateStatus::Approved,
            skills: skills(&["Selenium", "Playwright", "Python"]),
            experience: 3.5,
            rating: 4.1,
            applied_date: date(2025, 1, 30),
            interview_date: Some(date(2025, 2, 6)),
            notes: "Solid automation background.".to_string(),
            yearly_salary: 78_000.0,
            location: "Raleigh, NC".to_string(),
            education: "BSc Computer Science".to_string(),
        },
        Candidate {
            id: CandidateId(10),
            name: "Viktor Hansen".to_string(),
            email: "viktor.hansen@example.com".to_string(),
            phone: "555-0110".to_string(),
            position: "Backend Engineer".to_string(),
            status: CandidateStatus::Rejected,
            skills: skills(&["Java", "Spring"]),
            experience: 8.0,
            rating: 3.0,
            applied_date: date(2025, 2, 18),
            interview_date: Some(date(2025, 2, 27)),
            notes: "Salary expectations out of range.".to_string(),
            yearly_salary: 145_000.0,
            location: "Boston, MA".to_string(),
            education: "MSc Software Engineering".to_string(),
        },
        Candidate {
            id: CandidateId(11),
            name: "Nadia Hussain".to_string(),
            email: "nadia.hussain@example.com".to_string(),
            phone: "555-0111".to_string(),
            position: "Security Engineer".to_string(),
            status: CandidateStatus::Pending,
            skills: skills(&["Pentesting", "Go", "Linux"]),
            experience: 5.5,
            rating: 4.4,
            applied_date: date(2025, 3, 15),
            interview_date: None,
            notes: "Holds OSCP certification.".to_string(),
            yearly_salary: 112_000.0,
            location: "Washington, DC".to_string(),
            education: "BSc Cybersecurity".to_string(),
        },
        Candidate {
            id: CandidateId(12),
            name: "Oliver Brandt".to_string(),
            email: "oliver.brandt@example.com".to_string(),
            phone: "555-0112".to_string(),
            position: "Site Reliability Engineer".to_string(),
            status: CandidateStatus::Approved,
            skills: skills(&["Prometheus", "Kubernetes", "Bash"]),
            experience: 6.5,
            rating: 4.3,
            applied_date: date(2025, 1, 12),
            interview_date: Some(date(2025, 1, 23)),
            notes: String::new(),
            yearly_salary: 122_000.0,
            location: "Remote".to_string(),
            education: "BSc Computer Science".to_string(),
        },
        Candidate {
            id: CandidateId(13),
            name: "Grace Kimani".to_string(),
            email: "grace.kimani@example.com".to_string(),
            phone: "555-0113".to_string(),
            position: "Product Designer".to_string(),
            status: CandidateStatus::Pending,
            skills: skills(&["Figma", "Prototyping"]),
            experience: 4.5,
            rating: 4.0,
            applied_date: date(2025, 3, 20),
            interview_date: None,
            notes: String::new(),
            yearly_salary: 85_000.0,
            location: "Atlanta, GA".to_string(),
            education: "BA Design".to_string(),
        },
        Candidate {
            id: CandidateId(14),
            name: "Liam Gallagher".to_string(),
            email: "liam.gallagher@example.com".to_string(),
            phone: "555-0114".to_string(),
            position: "Data Engineer".to_string(),
            status: CandidateStatus::Rejected,
            skills: skills(&["Spark", "Airflow", "Scala"]),
            experience: 2.5,
            rating: 2.8,
            applied_date: date(2025, 2, 7),
            interview_date: None,
            notes: "Withdrew after first call.".to_string(),
            yearly_salary: 98_000.0,
            location: "Phoenix, AZ".to_string(),
            education: "BSc Mathematics".to_string(),
        },
        Candidate {
            id: CandidateId(15),
            name: "Yuki Tanaka".to_string(),
            email: "yuki.tanaka@example.com".to_string(),
            phone: "555-0115".to_string(),
            position: "Machine Learning Engineer".to_string(),
            status: CandidateStatus::OnHold,
            skills: skills(&["PyTorch", "Python", "MLOps"]),
            experience: 4.0,
            rating: 4.7,
            applied_date: date(2025, 3, 5),
            interview_date: Some(date(2025, 3, 18)),
            notes: "Second round pending budget review.".to_string(),
            yearly_salary: 130_000.0,
            location: "San Jose, CA".to_string(),
            education: "MSc Machine Learning".to_string(),
        },
    ]
}
