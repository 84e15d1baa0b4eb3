//! Tests for the catalog filter/sort predicates and the admin review
//! filter.

use chrono::Duration;

use super::*;
use crate::data::seed;
use crate::model::{ApplicationDecision, ApplicationStatus, CourseMode};
use crate::store::query::{
    catalog, count_by_status, course_types, institutions, modes, partner_matches,
    recent_applications, ApplicationFilter, CourseFilter, CourseSortKey,
};
use crate::store::AppState;

/// Filter dimensions AND-combine: selecting a type and a mode returns only
/// the courses where both predicates hold, never the union.
#[test]
fn filter_dimensions_and_combine() {
    let courses = seed::sample_courses();
    let filter = CourseFilter {
        course_type: "MBA".to_string(),
        mode: "Online".to_string(),
        ..Default::default()
    };

    let result = catalog(&courses, &filter, CourseSortKey::Title);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].course_type, "MBA");
    assert_eq!(result[0].mode, CourseMode::Online);

    // A type that only exists offline must not leak in via the OR of the
    // two single-dimension matches.
    let mismatch = CourseFilter {
        course_type: "B.Sc".to_string(),
        mode: "Online".to_string(),
        ..Default::default()
    };
    assert!(catalog(&courses, &mismatch, CourseSortKey::Title).is_empty());
}

#[test]
fn unset_dimensions_match_everything() {
    let courses = seed::sample_courses();
    let filter = CourseFilter::default();

    assert!(filter.is_empty());
    assert_eq!(catalog(&courses, &filter, CourseSortKey::Title).len(), courses.len());
}

#[test]
fn search_is_case_insensitive_substring() {
    let courses = seed::sample_courses();
    let filter = CourseFilter {
        search: "bUSiNeSS".to_string(),
        ..Default::default()
    };

    let result = catalog(&courses, &filter, CourseSortKey::Title);

    // Matches the MBA title and the Harvard institution/description.
    assert!(!result.is_empty());
    assert!(result.iter().all(|c| {
        let hay = format!("{} {} {}", c.title, c.institution, c.description).to_lowercase();
        hay.contains("business")
    }));
}

#[test]
fn sort_keys_order_lexicographically() {
    let courses = seed::sample_courses();

    let by_title = catalog(&courses, &CourseFilter::default(), CourseSortKey::Title);
    let titles: Vec<_> = by_title.iter().map(|c| c.title.as_str()).collect();
    let mut expected = titles.clone();
    expected.sort();
    assert_eq!(titles, expected);

    let by_duration = catalog(&courses, &CourseFilter::default(), CourseSortKey::Duration);
    let durations: Vec<_> = by_duration.iter().map(|c| c.duration.as_str()).collect();
    let mut expected = durations.clone();
    expected.sort();
    assert_eq!(durations, expected);
}

/// Ties keep collection order because the sort is stable and compares only
/// the selected field.
#[test]
fn sort_is_stable_on_ties() {
    let mut first = course("a", "Zeta Course");
    first.duration = "2 years".to_string();
    let mut second = course("b", "Alpha Course");
    second.duration = "2 years".to_string();
    let courses = vec![first, second];

    let sorted = catalog(&courses, &CourseFilter::default(), CourseSortKey::Duration);
    let ids: Vec<_> = sorted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn facets_are_sorted_and_distinct() {
    let courses = seed::sample_courses();

    let institutions = institutions(&courses);
    assert_eq!(institutions.len(), 6);
    assert!(institutions.windows(2).all(|w| w[0] < w[1]));

    let types = course_types(&courses);
    assert_eq!(types.len(), 6);

    let modes = modes(&courses);
    assert_eq!(modes, vec!["Hybrid", "Offline", "Online"]);
}

#[test]
fn partner_search_covers_name_email_address() {
    let p = partner("p1", "Northwind College");

    assert!(partner_matches(&p, ""));
    assert!(partner_matches(&p, "northwind"));
    assert!(partner_matches(&p, "CONTACT@P1"));
    assert!(partner_matches(&p, "test way"));
    assert!(!partner_matches(&p, "southwind"));
}

#[test]
fn application_filter_combines_search_and_status() {
    let mut store = AppState::new();
    let approved = store.submit_application(draft("s1", "1"));
    store.submit_application(draft("s2", "2"));
    store.update_application_status(&approved.id, ApplicationDecision::Approved);

    let filter = ApplicationFilter {
        search: "jordan".to_string(),
        status: Some(ApplicationStatus::Approved),
    };
    let matching: Vec<_> = store
        .applications
        .iter()
        .filter(|a| filter.matches(a))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, approved.id);

    let unset = ApplicationFilter::default();
    assert!(unset.is_empty());
    assert_eq!(store.applications.iter().filter(|a| unset.matches(a)).count(), 2);
}

/// The overview panel shows the newest submissions first, capped at the
/// requested size; insertion order does not leak through.
#[test]
fn recent_applications_orders_newest_first_and_caps() {
    let mut store = AppState::new();
    let a = store.submit_application(draft("s1", "1"));
    let b = store.submit_application(draft("s2", "2"));
    let c = store.submit_application(draft("s3", "3"));
    // Shuffle the submission times so insertion order and recency disagree.
    let base = store.applications[0].applied_at;
    store.applications[0].applied_at = base + Duration::minutes(2);
    store.applications[1].applied_at = base + Duration::minutes(1);
    store.applications[2].applied_at = base + Duration::minutes(3);

    let recent = recent_applications(&store.applications, 2);
    let ids: Vec<_> = recent.iter().map(|x| x.id.as_str()).collect();
    assert_eq!(ids, vec![c.id.as_str(), a.id.as_str()]);

    let all = recent_applications(&store.applications, 10);
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].id, b.id);
}

#[test]
fn status_counts_track_decisions() {
    let mut store = AppState::new();
    let a = store.submit_application(draft("s1", "1"));
    let b = store.submit_application(draft("s2", "2"));
    store.submit_application(draft("s3", "3"));
    store.update_application_status(&a.id, ApplicationDecision::Approved);
    store.update_application_status(&b.id, ApplicationDecision::Rejected);

    assert_eq!(count_by_status(&store.applications, ApplicationStatus::Pending), 1);
    assert_eq!(count_by_status(&store.applications, ApplicationStatus::Approved), 1);
    assert_eq!(count_by_status(&store.applications, ApplicationStatus::Rejected), 1);
}
