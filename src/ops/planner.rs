use chrono::Local;

use crate::model::config::DefaultsConfig;
use crate::model::trip::{Activity, Category, Trip};
use crate::notify::NoticeQueue;
use crate::util::ident::fresh_id;

// ---------------------------------------------------------------------------
// Patch and draft inputs
// ---------------------------------------------------------------------------

/// Field overrides for a trip. `None` preserves the current value.
#[derive(Debug, Clone, Default)]
pub struct TripPatch {
    pub destination: Option<String>,
    pub cover_image: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub currency: Option<String>,
}

/// Field overrides for an activity. `None` preserves the current value;
/// for the optional fields an empty string clears the field.
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub cost: Option<f64>,
    pub category: Option<Category>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub provider: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

/// Input fields for a new activity. The id and the completed flag are
/// assigned on insertion, never by the caller.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub title: String,
    pub date: String,
    pub cost: f64,
    pub category: Category,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Owns the trip collection and the current selection. All mutations go
/// through it, and every read observes the most recent write. Referential
/// misses degrade to no-ops instead of erroring.
#[derive(Debug)]
pub struct Planner {
    trips: Vec<Trip>,
    active: Option<String>,
    defaults: DefaultsConfig,
    /// Outbound user-facing messages
    pub notices: NoticeQueue,
}

impl Planner {
    /// Start with the first trip selected (or nothing, when empty)
    pub fn new(trips: Vec<Trip>, defaults: DefaultsConfig, notices: NoticeQueue) -> Self {
        let active = trips.first().map(|t| t.id.clone());
        Planner {
            trips,
            active,
            defaults,
            notices,
        }
    }

    /// Restore a persisted selection; a stale or absent id falls back to
    /// the first trip.
    pub fn resume(
        trips: Vec<Trip>,
        remembered: Option<&str>,
        defaults: DefaultsConfig,
        notices: NoticeQueue,
    ) -> Self {
        let mut planner = Self::new(trips, defaults, notices);
        if let Some(id) = remembered
            && planner.trips.iter().any(|t| t.id == id)
        {
            planner.active = Some(id.to_string());
        }
        planner
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_trip(&self) -> Option<&Trip> {
        let id = self.active.as_deref()?;
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == trip_id)
    }

    /// Select a trip. Returns false (selection unchanged) when the id
    /// matches nothing.
    pub fn set_active(&mut self, trip_id: &str) -> bool {
        if self.trips.iter().any(|t| t.id == trip_id) {
            self.active = Some(trip_id.to_string());
            true
        } else {
            false
        }
    }

    /// Release the collection and selection for persistence
    pub fn into_parts(self) -> (Vec<Trip>, Option<String>) {
        (self.trips, self.active)
    }

    // --- Trip operations ---

    /// Create a trip spanning today with an empty itinerary, select it,
    /// and report it. Returns the new id.
    pub fn add_trip(&mut self, destination: &str, cover_image: Option<&str>) -> String {
        let cover = cover_image.unwrap_or(&self.defaults.cover_image).to_string();
        let trip = Trip::new(
            fresh_id(),
            destination.to_string(),
            cover,
            today_str(),
            self.defaults.currency.clone(),
        );
        let id = trip.id.clone();
        self.active = Some(id.clone());
        self.trips.push(trip);
        self.notices
            .success(format!("Trip to {} created", destination));
        id
    }

    /// Merge fields into the matching trip. A miss changes nothing; the
    /// success notice fires either way.
    pub fn update_trip(&mut self, trip_id: &str, patch: TripPatch) {
        if let Some(trip) = find_trip_mut(&mut self.trips, trip_id) {
            apply_trip_patch(trip, patch);
        }
        self.notices.success("Trip updated");
    }

    /// Remove a trip. When it was selected, selection falls to the first
    /// remaining trip, or to none.
    pub fn delete_trip(&mut self, trip_id: &str) {
        self.trips.retain(|t| t.id != trip_id);
        if self.active.as_deref() == Some(trip_id) {
            self.active = self.trips.first().map(|t| t.id.clone());
        }
        self.notices.success("Trip deleted");
    }

    // --- Activity operations ---

    /// Append a new activity to the named trip, assigning a fresh id and
    /// `completed = false`. Returns the id when an activity materialized;
    /// an unknown trip materializes nothing (the notice fires either way).
    pub fn add_activity(&mut self, trip_id: &str, draft: ActivityDraft) -> Option<String> {
        let mut created = None;
        if let Some(trip) = find_trip_mut(&mut self.trips, trip_id) {
            let activity = Activity {
                id: fresh_id(),
                date: draft.date,
                title: draft.title,
                cost: draft.cost,
                category: draft.category,
                time_start: draft.time_start,
                time_end: draft.time_end,
                provider: draft.provider,
                notes: draft.notes,
                completed: false,
            };
            created = Some(activity.id.clone());
            trip.activities.push(activity);
        }
        self.notices.success("Activity added");
        created
    }

    /// Merge fields into the matching activity within the named trip.
    /// A miss on either id is a silent no-op.
    pub fn update_activity(&mut self, trip_id: &str, activity_id: &str, patch: ActivityPatch) {
        if let Some(trip) = find_trip_mut(&mut self.trips, trip_id)
            && let Some(activity) = trip.activities.iter_mut().find(|a| a.id == activity_id)
        {
            apply_activity_patch(activity, patch);
        }
    }

    /// Remove the matching activity from the named trip
    pub fn delete_activity(&mut self, trip_id: &str, activity_id: &str) {
        if let Some(trip) = find_trip_mut(&mut self.trips, trip_id) {
            trip.activities.retain(|a| a.id != activity_id);
        }
        self.notices.info("Activity removed");
    }

    /// Replace the named trip's activity list wholesale. The caller
    /// supplies the permutation; nothing here validates it.
    pub fn reorder_activities(&mut self, trip_id: &str, new_order: Vec<Activity>) {
        if let Some(trip) = find_trip_mut(&mut self.trips, trip_id) {
            trip.activities = new_order;
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn find_trip_mut<'a>(trips: &'a mut [Trip], trip_id: &str) -> Option<&'a mut Trip> {
    trips.iter_mut().find(|t| t.id == trip_id)
}

fn apply_trip_patch(trip: &mut Trip, patch: TripPatch) {
    if let Some(destination) = patch.destination {
        trip.destination = destination;
    }
    if let Some(cover_image) = patch.cover_image {
        trip.cover_image = cover_image;
    }
    if let Some(start_date) = patch.start_date {
        trip.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        trip.end_date = end_date;
    }
    if let Some(currency) = patch.currency {
        trip.currency = currency;
    }
}

fn apply_activity_patch(activity: &mut Activity, patch: ActivityPatch) {
    if let Some(title) = patch.title {
        activity.title = title;
    }
    if let Some(date) = patch.date {
        activity.date = date;
    }
    if let Some(cost) = patch.cost {
        activity.cost = cost;
    }
    if let Some(category) = patch.category {
        activity.category = category;
    }
    if let Some(time_start) = patch.time_start {
        activity.time_start = opt_field(time_start);
    }
    if let Some(time_end) = patch.time_end {
        activity.time_end = opt_field(time_end);
    }
    if let Some(provider) = patch.provider {
        activity.provider = opt_field(provider);
    }
    if let Some(notes) = patch.notes {
        activity.notes = opt_field(notes);
    }
    if let Some(completed) = patch.completed {
        activity.completed = completed;
    }
}

/// Empty strings clear optional fields
fn opt_field(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
