use std::ops::Range;

use regex::Regex;

use crate::model::trip::{Activity, Trip};

/// Which field of a trip or activity matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchField {
    Destination,
    Title,
    Provider,
    Notes,
}

/// A search hit for a trip or activity field.
///
/// `activity_id` is `None` for destination hits, which belong to the trip
/// itself rather than to any activity.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub trip_id: String,
    pub activity_id: Option<String>,
    pub field: MatchField,
    pub spans: Vec<Range<usize>>,
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

// ---------------------------------------------------------------------------
// Trip search
// ---------------------------------------------------------------------------

/// Search trips and their activities.
///
/// If `trip_filter` is `Some`, only the trip with that id is searched. If
/// `None`, every trip is searched.
pub fn search_trips(trips: &[Trip], re: &Regex, trip_filter: Option<&str>) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    for trip in trips {
        if let Some(filter) = trip_filter
            && trip.id != filter
        {
            continue;
        }

        // Destination
        let spans = find_matches(re, &trip.destination);
        if !spans.is_empty() {
            hits.push(SearchHit {
                trip_id: trip.id.clone(),
                activity_id: None,
                field: MatchField::Destination,
                spans,
            });
        }

        for activity in &trip.activities {
            search_activity(re, activity, &trip.id, &mut hits);
        }
    }

    hits
}

/// Search a single activity's text fields.
fn search_activity(re: &Regex, activity: &Activity, trip_id: &str, hits: &mut Vec<SearchHit>) {
    // Title
    let spans = find_matches(re, &activity.title);
    if !spans.is_empty() {
        hits.push(SearchHit {
            trip_id: trip_id.to_string(),
            activity_id: Some(activity.id.clone()),
            field: MatchField::Title,
            spans,
        });
    }

    // Provider
    if let Some(provider) = &activity.provider {
        let spans = find_matches(re, provider);
        if !spans.is_empty() {
            hits.push(SearchHit {
                trip_id: trip_id.to_string(),
                activity_id: Some(activity.id.clone()),
                field: MatchField::Provider,
                spans,
            });
        }
    }

    // Notes
    if let Some(notes) = &activity.notes {
        let spans = find_matches(re, notes);
        if !spans.is_empty() {
            hits.push(SearchHit {
                trip_id: trip_id.to_string(),
                activity_id: Some(activity.id.clone()),
                field: MatchField::Notes,
                spans,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
