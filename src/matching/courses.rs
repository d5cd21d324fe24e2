use tracing::debug;

use super::fuzzy::fuzzy_match;
use super::round_to_tenth;
use crate::normalize::{dedupe_terms, nfkc_lower_trim};

/// Outcome of matching a posting's accepted courses against resume
/// education text.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseMatch {
    /// Accepted courses found in the education entries, duplicates removed,
    /// acceptance-list order preserved.
    pub matched: Vec<String>,
    /// 0-100, one decimal place.
    pub percentage: f64,
}

/// Course-name words worth testing individually: longer than 3 characters,
/// split on any non-alphanumeric boundary.
fn significant_words(course: &str) -> Vec<String> {
    course
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 3)
        .map(str::to_string)
        .collect()
}

/// Match a posting's accepted courses against the candidate's education
/// entries.
///
/// A course counts as matched when any of these hold against the combined
/// lowercased education text:
/// - the full course name appears as a substring;
/// - at least 60% of its significant words appear;
/// - it fuzzy-matches a single education entry at `threshold`;
/// - any single significant word appears verbatim inside one entry.
///
/// No accepted courses means no constraint (100%); no education entries
/// means nothing can match (0%).
pub fn match_courses(
    accepted_courses: &[String],
    education_entries: &[String],
    threshold: f64,
) -> CourseMatch {
    let accepted = dedupe_terms(accepted_courses);
    if accepted.is_empty() {
        return CourseMatch {
            matched: vec![],
            percentage: 100.0,
        };
    }

    if education_entries.is_empty() {
        return CourseMatch {
            matched: vec![],
            percentage: 0.0,
        };
    }

    let search_text = education_entries
        .iter()
        .map(|entry| nfkc_lower_trim(entry))
        .collect::<Vec<_>>()
        .join(" ");
    let entries_lower: Vec<String> = education_entries
        .iter()
        .map(|entry| nfkc_lower_trim(entry))
        .collect();

    let mut matched = Vec::new();
    for course in &accepted {
        let course_lower = nfkc_lower_trim(course);
        if course_matches(&course_lower, course, &search_text, &entries_lower, threshold) {
            matched.push(course.clone());
        }
    }

    let percentage = round_to_tenth(100.0 * matched.len() as f64 / accepted.len() as f64);
    debug!(
        accepted = accepted.len(),
        matched = matched.len(),
        percentage,
        "course criterion scored"
    );

    CourseMatch {
        matched,
        percentage,
    }
}

fn course_matches(
    course_lower: &str,
    course: &str,
    search_text: &str,
    entries_lower: &[String],
    threshold: f64,
) -> bool {
    // (a) whole course name inside the combined education text
    if search_text.contains(course_lower) {
        return true;
    }

    // (b) enough of the course's significant words appear in the text
    let words = significant_words(course_lower);
    if !words.is_empty() {
        let hits = words.iter().filter(|w| search_text.contains(w.as_str())).count();
        if hits as f64 / words.len() as f64 >= 0.6 {
            return true;
        }
    }

    // (c) fuzzy match against a single entry
    if entries_lower
        .iter()
        .any(|entry| fuzzy_match(course, entry, threshold))
    {
        return true;
    }

    // (d) any single significant word verbatim inside one entry
    words
        .iter()
        .any(|w| entries_lower.iter().any(|entry| entry.contains(w.as_str())))
}
