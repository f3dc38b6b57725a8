//! Derived view computations over a cache snapshot.
//!
//! Pure functions: they never touch the store and are recomputed by the
//! presentation layer whenever the snapshot or a view parameter changes.

use serde::Serialize;

use hireline_shared::constants::PAGE_SIZE;
use hireline_shared::{Candidate, CandidateStatus, StatusFilter};

/// Page strips longer than this get ellipsis gaps.
const MAX_PLAIN_PAGES: usize = 7;

/// Narrow a snapshot by status, then by a case-insensitive substring
/// match against name, email or position.
///
/// The status pass is skipped for [`StatusFilter::All`]; the text pass
/// is skipped for a blank term. Relative order is preserved.
pub fn filter_candidates(
    candidates: &[Candidate],
    filter: StatusFilter,
    search_term: &str,
) -> Vec<Candidate> {
    let term = search_term.trim().to_lowercase();
    candidates
        .iter()
        .filter(|c| filter.matches(c.status))
        .filter(|c| {
            term.is_empty()
                || c.name.to_lowercase().contains(&term)
                || c.email.to_lowercase().contains(&term)
                || c.position.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// One page of a list view.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Records on this page, in snapshot order.
    pub items: Vec<Candidate>,
    /// The 1-based page number that was requested.
    pub page: usize,
    /// Total number of pages (`0` for an empty snapshot).
    pub total_pages: usize,
    /// Total records across all pages.
    pub total: usize,
}

/// Slice one fixed-size page out of a snapshot.
///
/// Pages are 1-based; an out-of-range page yields an empty item list.
pub fn paginate(candidates: &[Candidate], page: usize) -> PageView {
    let total = candidates.len();
    let total_pages = total.div_ceil(PAGE_SIZE);
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let items = if page == 0 || start >= total {
        Vec::new()
    } else {
        candidates[start..(start + PAGE_SIZE).min(total)].to_vec()
    };
    PageView {
        items,
        page,
        total_pages,
        total,
    }
}

/// An entry in the pagination control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    /// A selectable page number.
    Page(usize),
    /// An ellipsis standing in for one or more skipped pages.
    Gap,
}

/// Build the strip of page marks for a pagination control.
///
/// Strips of up to seven pages show every number. Longer strips always
/// show the first and last page plus one neighbor on each side of the
/// current page, with a gap wherever more than one number is skipped.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageMark> {
    if total_pages <= MAX_PLAIN_PAGES {
        return (1..=total_pages).map(PageMark::Page).collect();
    }

    let mut marks = vec![PageMark::Page(1)];

    if current > 3 {
        marks.push(PageMark::Gap);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    for page in start..=end {
        marks.push(PageMark::Page(page));
    }

    if current + 2 < total_pages {
        marks.push(PageMark::Gap);
    }

    marks.push(PageMark::Page(total_pages));
    marks
}

/// Aggregate statistics over a snapshot, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub on_hold: usize,
    /// Mean yearly salary, rounded to the nearest whole unit; `0` for an
    /// empty snapshot.
    pub avg_salary: f64,
    /// Mean years of experience, rounded to one decimal place; `0` for
    /// an empty snapshot.
    pub avg_experience: f64,
}

/// Compute dashboard statistics for a snapshot.
pub fn candidate_stats(candidates: &[Candidate]) -> CandidateStats {
    let total = candidates.len();
    let mut stats = CandidateStats {
        total,
        pending: 0,
        approved: 0,
        rejected: 0,
        on_hold: 0,
        avg_salary: 0.0,
        avg_experience: 0.0,
    };

    for candidate in candidates {
        match candidate.status {
            CandidateStatus::Pending => stats.pending += 1,
            CandidateStatus::Approved => stats.approved += 1,
            CandidateStatus::Rejected => stats.rejected += 1,
            CandidateStatus::OnHold => stats.on_hold += 1,
        }
    }

    if total > 0 {
        let count = total as f64;
        let salary_sum: f64 = candidates.iter().map(|c| c.yearly_salary).sum();
        let experience_sum: f64 = candidates.iter().map(|c| c.experience).sum();
        stats.avg_salary = (salary_sum / count).round();
        stats.avg_experience = (experience_sum / count * 10.0).round() / 10.0;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use hireline_shared::CandidateId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn candidate(id: i64, name: &str, status: CandidateStatus) -> Candidate {
        Candidate {
            id: CandidateId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "555-0100".to_string(),
            position: "Backend Engineer".to_string(),
            status,
            skills: vec!["Rust".to_string()],
            experience: 4.0,
            rating: 3.5,
            applied_date: date(2025, 11, 3),
            interview_date: None,
            notes: String::new(),
            yearly_salary: 90_000.0,
            location: "Berlin".to_string(),
            education: "BSc Computer Science".to_string(),
        }
    }

    fn numbered(count: usize) -> Vec<Candidate> {
        (1..=count as i64)
            .map(|i| candidate(i, &format!("Candidate {i}"), CandidateStatus::Pending))
            .collect()
    }

    #[test]
    fn test_filter_by_status_then_text() {
        let candidates = vec![
            candidate(1, "John Carter", CandidateStatus::Approved),
            candidate(2, "Johanna Fields", CandidateStatus::Pending),
            candidate(3, "Mia Torres", CandidateStatus::Approved),
        ];

        let hits = filter_candidates(
            &candidates,
            StatusFilter::Only(CandidateStatus::Approved),
            "joh",
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "John Carter");
    }

    #[test]
    fn test_filter_all_with_blank_term_is_identity() {
        let candidates = numbered(4);
        assert_eq!(
            filter_candidates(&candidates, StatusFilter::All, "   "),
            candidates
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_and_order_preserving() {
        let candidates = vec![
            candidate(1, "Zoe Park", CandidateStatus::Pending),
            candidate(2, "Amir Park", CandidateStatus::Pending),
        ];
        let hits = filter_candidates(&candidates, StatusFilter::All, "PARK");
        assert_eq!(hits, candidates);
    }

    #[test]
    fn test_paginate_twelve_records() {
        let candidates = numbered(12);

        let first = paginate(&candidates, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total, 12);
        assert_eq!(first.items, candidates[0..5].to_vec());

        let last = paginate(&candidates, 3);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].id, CandidateId(12));
    }

    #[test]
    fn test_paginate_empty_snapshot() {
        let page = paginate(&[], 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_paginate_out_of_range_page_is_empty() {
        let candidates = numbered(12);
        assert!(paginate(&candidates, 4).items.is_empty());
        assert!(paginate(&candidates, 0).items.is_empty());
    }

    #[test]
    fn test_page_numbers_short_strip_has_no_gap() {
        assert_eq!(
            page_numbers(2, 3),
            vec![PageMark::Page(1), PageMark::Page(2), PageMark::Page(3)]
        );
        assert_eq!(page_numbers(4, 7).len(), 7);
        assert!(!page_numbers(4, 7).contains(&PageMark::Gap));
    }

    #[test]
    fn test_page_numbers_gap_after_head() {
        assert_eq!(
            page_numbers(1, 10),
            vec![
                PageMark::Page(1),
                PageMark::Page(2),
                PageMark::Gap,
                PageMark::Page(10),
            ]
        );
    }

    #[test]
    fn test_page_numbers_gaps_on_both_sides() {
        assert_eq!(
            page_numbers(5, 10),
            vec![
                PageMark::Page(1),
                PageMark::Gap,
                PageMark::Page(4),
                PageMark::Page(5),
                PageMark::Page(6),
                PageMark::Gap,
                PageMark::Page(10),
            ]
        );
    }

    #[test]
    fn test_page_numbers_gap_before_tail() {
        assert_eq!(
            page_numbers(10, 10),
            vec![
                PageMark::Page(1),
                PageMark::Gap,
                PageMark::Page(9),
                PageMark::Page(10),
            ]
        );
    }

    #[test]
    fn test_page_numbers_always_include_first_and_last() {
        for current in 1..=20 {
            let marks = page_numbers(current, 20);
            assert_eq!(marks.first(), Some(&PageMark::Page(1)));
            assert_eq!(marks.last(), Some(&PageMark::Page(20)));
        }
    }

    #[test]
    fn test_stats_reference_scenario() {
        let mut first = candidate(1, "John Carter", CandidateStatus::Approved);
        first.yearly_salary = 90_000.0;
        first.experience = 5.0;
        let mut second = candidate(2, "Mia Torres", CandidateStatus::Pending);
        second.yearly_salary = 75_000.0;
        second.experience = 3.0;

        let stats = candidate_stats(&[first, second]);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.on_hold, 0);
        assert_eq!(stats.avg_salary, 82_500.0);
        assert_eq!(stats.avg_experience, 4.0);
    }

    #[test]
    fn test_stats_empty_snapshot_yields_zeroes() {
        let stats = candidate_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.avg_salary, 0.0);
        assert_eq!(stats.avg_experience, 0.0);
        assert!(!stats.avg_salary.is_nan());
        assert!(!stats.avg_experience.is_nan());
    }

    #[test]
    fn test_stats_rounding() {
        let mut a = candidate(1, "A One", CandidateStatus::Pending);
        a.yearly_salary = 70_001.0;
        a.experience = 3.33;
        let mut b = candidate(2, "B Two", CandidateStatus::Pending);
        b.yearly_salary = 70_002.0;
        b.experience = 3.33;

        let stats = candidate_stats(&[a, b]);
        // 70001.5 rounds away from zero, 3.33 rounds to one decimal.
        assert_eq!(stats.avg_salary, 70_002.0);
        assert_eq!(stats.avg_experience, 3.3);
    }
}
