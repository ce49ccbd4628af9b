use serde::Serialize;

use crate::model::trip::{Activity, Category, Trip};
use crate::notify::{Notice, Severity};
use crate::ops::search::MatchField;
use crate::ops::views::{self, TripStats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ActivityJson {
    pub id: String,
    pub date: String,
    pub title: String,
    pub cost: f64,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TripInfoJson {
    pub id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub currency: String,
    pub active: bool,
    pub stats: TripStatsJson,
}

#[derive(Serialize)]
pub struct TripStatsJson {
    pub total_cost: f64,
    pub completed: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct DayJson {
    pub date: String,
    pub activities: Vec<ActivityJson>,
}

#[derive(Serialize)]
pub struct ItineraryJson {
    pub trip: String,
    pub destination: String,
    pub days: Vec<DayJson>,
}

#[derive(Serialize)]
pub struct StatsReportJson {
    pub trip: String,
    pub destination: String,
    pub currency: String,
    pub stats: TripStatsJson,
}

#[derive(Serialize)]
pub struct SearchHitJson {
    pub trip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    pub field: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct NoticeJson {
    pub severity: String,
    pub text: String,
}

/// Envelope for mutating commands in `--json` mode: the affected id (when
/// one exists) plus the drained notification queue.
#[derive(Serialize)]
pub struct MutationJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub notices: Vec<NoticeJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn activity_to_json(activity: &Activity) -> ActivityJson {
    ActivityJson {
        id: activity.id.clone(),
        date: activity.date.clone(),
        title: activity.title.clone(),
        cost: activity.cost,
        category: activity.category,
        time_start: activity.time_start.clone(),
        time_end: activity.time_end.clone(),
        provider: activity.provider.clone(),
        notes: activity.notes.clone(),
        completed: activity.completed,
    }
}

pub fn stats_to_json(stats: &TripStats) -> TripStatsJson {
    TripStatsJson {
        total_cost: stats.total_cost,
        completed: stats.completed,
        total: stats.total,
    }
}

pub fn notice_to_json(notice: &Notice) -> NoticeJson {
    NoticeJson {
        severity: notice.severity.name().to_string(),
        text: notice.text.clone(),
    }
}

pub fn match_field_name(field: &MatchField) -> &'static str {
    match field {
        MatchField::Destination => "destination",
        MatchField::Title => "title",
        MatchField::Provider => "provider",
        MatchField::Notes => "notes",
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn completed_char(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}

pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

/// Format a single activity as a one-line summary
pub fn format_activity_line(activity: &Activity, currency: &str) -> String {
    let c = completed_char(activity.completed);
    let time_str = match (&activity.time_start, &activity.time_end) {
        (Some(start), Some(end)) => format!("{}-{} ", start, end),
        (Some(start), None) => format!("{} ", start),
        _ => String::new(),
    };
    let cost_str = if activity.cost != 0.0 {
        format!("  {}", format_money(activity.cost, currency))
    } else {
        String::new()
    };
    format!(
        "[{}] {} {}{} #{}{}",
        c,
        activity.id,
        time_str,
        activity.title,
        activity.category.name(),
        cost_str
    )
}

/// Format detailed activity view
pub fn format_activity_detail(activity: &Activity, trip: &Trip) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "[{}] {} {}",
        completed_char(activity.completed),
        activity.id,
        activity.title
    ));
    lines.push(format!("trip: {} ({})", trip.destination, trip.id));
    lines.push(format!("date: {}", activity.date));
    match (&activity.time_start, &activity.time_end) {
        (Some(start), Some(end)) => lines.push(format!("time: {} - {}", start, end)),
        (Some(start), None) => lines.push(format!("time: {}", start)),
        (None, Some(end)) => lines.push(format!("time: until {}", end)),
        (None, None) => {}
    }
    lines.push(format!("category: {}", activity.category.label()));
    lines.push(format!(
        "cost: {}",
        format_money(activity.cost, &trip.currency)
    ));
    if let Some(provider) = &activity.provider {
        lines.push(format!("provider: {}", provider));
    }
    if let Some(notes) = &activity.notes {
        lines.push("notes:".to_string());
        for line in notes.lines() {
            lines.push(format!("  {}", line));
        }
    }

    lines
}

/// Format an itinerary header
pub fn format_trip_header(trip: &Trip) -> String {
    format!("== {} ({}) ==", trip.destination, trip.id)
}

/// Format trip info for the trips listing
pub fn format_trip_info(trip: &Trip, active: bool, stats: &TripStats) -> String {
    let active_str = if active { " ★" } else { "" };
    format!(
        "  {} ({}) [{} - {}]  {}/{} done, {}{}",
        trip.destination,
        trip.id,
        trip.start_date,
        trip.end_date,
        stats.completed,
        stats.total,
        format_money(stats.total_cost, &trip.currency),
        active_str
    )
}

/// Format a trip's itinerary: day buckets in date order, separated by
/// blank lines.
pub fn format_itinerary(trip: &Trip, filter: &str) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format_trip_header(trip));
    lines.push(String::new());

    let days = views::itinerary(trip, filter);
    if days.is_empty() {
        lines.push("(no activities)".to_string());
        return lines;
    }

    for (date, activities) in &days {
        lines.push(format!("-- {} --", date));
        for &activity in activities {
            lines.push(format_activity_line(activity, &trip.currency));
        }
        lines.push(String::new());
    }
    // no blank line after the last day
    lines.pop();

    lines
}

/// Format a notification with its severity glyph
pub fn format_notice(notice: &Notice) -> String {
    let prefix = match notice.severity {
        Severity::Success => '✓',
        Severity::Error => '✗',
        Severity::Info => '·',
    };
    format!("{} {}", prefix, notice.text)
}

/// Parse a category string into Category
pub fn parse_category(s: &str) -> Result<Category, String> {
    match s {
        "flight" => Ok(Category::Flight),
        "lodging" => Ok(Category::Lodging),
        "transport" => Ok(Category::Transport),
        "food" => Ok(Category::Food),
        "activity" => Ok(Category::Activity),
        "culture" => Ok(Category::Culture),
        "excursion" => Ok(Category::Excursion),
        "shopping" => Ok(Category::Shopping),
        "other" => Ok(Category::Other),
        _ => Err(format!(
            "unknown category '{}' (expected: flight, lodging, transport, food, activity, culture, excursion, shopping, other)",
            s
        )),
    }
}
