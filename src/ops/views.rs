use indexmap::IndexMap;

use crate::model::trip::{Activity, Trip};

// ---------------------------------------------------------------------------
// Derived itinerary views
// ---------------------------------------------------------------------------

/// Case-insensitive substring filter over activity titles. An empty term
/// keeps everything.
pub fn filter_by_title<'a>(activities: &'a [Activity], term: &str) -> Vec<&'a Activity> {
    if term.is_empty() {
        return activities.iter().collect();
    }
    let needle = term.to_lowercase();
    activities
        .iter()
        .filter(|a| a.title.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by date ascending. Dates are `YYYY-MM-DD`, so string order
/// is date order; same-day entries keep their relative order.
pub fn sort_by_date(mut activities: Vec<&Activity>) -> Vec<&Activity> {
    activities.sort_by(|a, b| a.date.cmp(&b.date));
    activities
}

/// Group a date-sorted list into buckets keyed by exact date string.
/// Buckets appear in first-seen order; entries keep their order.
pub fn group_by_date<'a>(sorted: &[&'a Activity]) -> IndexMap<String, Vec<&'a Activity>> {
    let mut groups: IndexMap<String, Vec<&Activity>> = IndexMap::new();
    for &activity in sorted {
        groups
            .entry(activity.date.clone())
            .or_default()
            .push(activity);
    }
    groups
}

/// The rendered itinerary: filter, then sort, then group by day
pub fn itinerary<'a>(trip: &'a Trip, filter: &str) -> IndexMap<String, Vec<&'a Activity>> {
    let filtered = filter_by_title(&trip.activities, filter);
    let sorted = sort_by_date(filtered);
    group_by_date(&sorted)
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Cost and completion summary for one trip. Always covers every activity,
/// whatever filter the display applies.
#[derive(Debug, Default, PartialEq)]
pub struct TripStats {
    pub total_cost: f64,
    pub completed: usize,
    pub total: usize,
}

pub fn trip_stats(trip: &Trip) -> TripStats {
    let mut stats = TripStats::default();
    for activity in &trip.activities {
        stats.total_cost += activity.cost;
        stats.total += 1;
        if activity.completed {
            stats.completed += 1;
        }
    }
    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
