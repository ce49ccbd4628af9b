mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

use regex::Regex;

/// Global override for planner directory (set by -C flag)
static PLANNER_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::lock::FileLock;
use crate::io::state::{self, SessionState};
use crate::io::store;
use crate::io::workspace_io::{self, WorkspaceError};
use crate::model::trip::{Activity, Trip};
use crate::model::workspace::Workspace;
use crate::notify::{Notice, NoticeQueue};
use crate::ops::planner::{ActivityDraft, ActivityPatch, Planner, TripPatch};
use crate::ops::{search, views};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for load_workspace_cwd()
    if let Some(ref dir) = cli.planner_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        PLANNER_DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        // Init is handled in main.rs before workspace discovery
        Commands::Init(args) => cmd_init(args),

        // Read commands
        Commands::Trips => cmd_trips(json),
        Commands::List(args) => cmd_list(args, json),
        Commands::Show(args) => cmd_show(args, json),
        Commands::Search(args) => cmd_search(args, json),
        Commands::Stats(args) => cmd_stats(args, json),

        // Write commands
        Commands::Add(args) => cmd_add(args, json),
        Commands::Edit(args) => cmd_edit(args, json),
        Commands::Check(args) => cmd_check(args, json),
        Commands::Rm(args) => cmd_rm(args, json),
        Commands::Mv(args) => cmd_mv(args, json),
        Commands::Use(args) => cmd_use(args, json),

        // Trip management
        Commands::Trip(args) => cmd_trip(args, json),

        // Gallery
        Commands::Gallery(args) => cmd_gallery(args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_workspace_cwd() -> Result<Workspace, WorkspaceError> {
    let start = match PLANNER_DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(WorkspaceError::IoError)?,
    };
    let root = workspace_io::discover_workspace(&start)?;
    workspace_io::load_workspace(&root)
}

/// Build a planner session from a loaded workspace, restoring the
/// remembered trip selection.
fn start_session(workspace: &Workspace) -> Planner {
    let remembered = state::read_session(&workspace.data_dir).and_then(|s| s.active_trip);
    Planner::resume(
        workspace.trips.clone(),
        remembered.as_deref(),
        workspace.config.defaults.clone(),
        NoticeQueue::new(),
    )
}

/// Write the session's trips and selection back to the planner directory.
/// Both writes are best-effort.
fn persist_session(workspace: &Workspace, planner: Planner) {
    let (trips, active_trip) = planner.into_parts();
    store::save_trips(&workspace.data_dir, &trips);
    state::save_session(&workspace.data_dir, &SessionState { active_trip });
}

/// Resolve a trip argument to a trip id. Accepts an exact id or a
/// destination name (case-insensitive); an ambiguous destination is an
/// error naming the candidates.
fn resolve_trip(trips: &[Trip], arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(trip) = trips.iter().find(|t| t.id == arg) {
        return Ok(trip.id.clone());
    }
    let needle = arg.to_lowercase();
    let matches: Vec<&Trip> = trips
        .iter()
        .filter(|t| t.destination.to_lowercase() == needle)
        .collect();
    match matches.as_slice() {
        [] => Err(format!("trip not found: {}", arg).into()),
        [trip] => Ok(trip.id.clone()),
        several => {
            let ids: Vec<&str> = several.iter().map(|t| t.id.as_str()).collect();
            Err(format!("'{}' is ambiguous (candidates: {})", arg, ids.join(", ")).into())
        }
    }
}

/// The trip a command should act on: an explicit --trip argument, or the
/// active trip.
fn target_trip_id(
    planner: &Planner,
    arg: Option<&str>,
) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(arg) => resolve_trip(planner.trips(), arg),
        None => planner
            .active_id()
            .map(str::to_string)
            .ok_or_else(|| "no active trip (create one with `vy trip new`)".into()),
    }
}

/// Find which trip an activity id belongs to.
fn find_activity_trip<'a>(trips: &'a [Trip], activity_id: &str) -> Option<&'a Trip> {
    trips
        .iter()
        .find(|t| t.activities.iter().any(|a| a.id == activity_id))
}

/// Shared output for mutating commands: an id line plus the drained
/// notifications, or a JSON envelope of the two.
fn render_mutation(
    id: Option<&str>,
    notices: &[Notice],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let output = MutationJson {
            id: id.map(str::to_string),
            notices: notices.iter().map(notice_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if let Some(id) = id {
            println!("{}", id);
        }
        for notice in notices {
            println!("{}", format_notice(notice));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_trips(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let planner = start_session(&workspace);

    if json {
        let infos: Vec<TripInfoJson> = planner
            .trips()
            .iter()
            .map(|trip| TripInfoJson {
                id: trip.id.clone(),
                destination: trip.destination.clone(),
                start_date: trip.start_date.clone(),
                end_date: trip.end_date.clone(),
                currency: trip.currency.clone(),
                active: planner.active_id() == Some(trip.id.as_str()),
                stats: stats_to_json(&views::trip_stats(trip)),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        if planner.trips().is_empty() {
            println!("(no trips)");
        }
        for trip in planner.trips() {
            let stats = views::trip_stats(trip);
            let active = planner.active_id() == Some(trip.id.as_str());
            println!("{}", format_trip_info(trip, active, &stats));
        }
    }
    Ok(())
}

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let planner = start_session(&workspace);
    let trip_id = target_trip_id(&planner, args.trip.as_deref())?;
    let trip = planner
        .trip(&trip_id)
        .ok_or_else(|| format!("trip not found: {}", trip_id))?;
    let filter = args.filter.as_deref().unwrap_or("");

    if json {
        let days: Vec<DayJson> = views::itinerary(trip, filter)
            .iter()
            .map(|(date, activities)| DayJson {
                date: date.clone(),
                activities: activities.iter().map(|&a| activity_to_json(a)).collect(),
            })
            .collect();
        let output = ItineraryJson {
            trip: trip.id.clone(),
            destination: trip.destination.clone(),
            days,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in format_itinerary(trip, filter) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;

    for trip in &workspace.trips {
        if let Some(activity) = trip.activities.iter().find(|a| a.id == args.id) {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&activity_to_json(activity))?
                );
            } else {
                for line in format_activity_detail(activity, trip) {
                    println!("{}", line);
                }
            }
            return Ok(());
        }
    }

    Err(format!("activity not found: {}", args.id).into())
}

fn cmd_search(args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let re = Regex::new(&args.pattern)?;
    let trip_filter = match args.trip.as_deref() {
        Some(arg) => Some(resolve_trip(&workspace.trips, arg)?),
        None => None,
    };
    let hits = search::search_trips(&workspace.trips, &re, trip_filter.as_deref());

    if json {
        let output: Vec<SearchHitJson> = hits
            .iter()
            .map(|hit| SearchHitJson {
                trip: hit.trip_id.clone(),
                activity_id: hit.activity_id.clone(),
                field: match_field_name(&hit.field).to_string(),
                text: hit_text(&workspace.trips, hit).to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for hit in &hits {
            let text = hit_text(&workspace.trips, hit);
            match &hit.activity_id {
                Some(activity_id) => println!(
                    "[{}] {} {}: {}",
                    hit.trip_id,
                    activity_id,
                    match_field_name(&hit.field),
                    text
                ),
                None => println!(
                    "[{}] {}: {}",
                    hit.trip_id,
                    match_field_name(&hit.field),
                    text
                ),
            }
        }
    }

    Ok(())
}

/// Look up the text a search hit matched in.
fn hit_text<'a>(trips: &'a [Trip], hit: &search::SearchHit) -> &'a str {
    let trip = match trips.iter().find(|t| t.id == hit.trip_id) {
        Some(trip) => trip,
        None => return "",
    };
    let activity_id = match &hit.activity_id {
        Some(id) => id,
        None => return &trip.destination,
    };
    let activity = match trip.activities.iter().find(|a| a.id == *activity_id) {
        Some(activity) => activity,
        None => return "",
    };
    match hit.field {
        search::MatchField::Title => &activity.title,
        search::MatchField::Provider => activity.provider.as_deref().unwrap_or(""),
        search::MatchField::Notes => activity.notes.as_deref().unwrap_or(""),
        search::MatchField::Destination => &trip.destination,
    }
}

fn cmd_stats(args: StatsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let planner = start_session(&workspace);
    let trip_id = target_trip_id(&planner, args.trip.as_deref())?;
    let trip = planner
        .trip(&trip_id)
        .ok_or_else(|| format!("trip not found: {}", trip_id))?;
    let stats = views::trip_stats(trip);

    if json {
        let output = StatsReportJson {
            trip: trip.id.clone(),
            destination: trip.destination.clone(),
            currency: trip.currency.clone(),
            stats: stats_to_json(&stats),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_trip_header(trip));
        println!("activities: {} ({} done)", stats.total, stats.completed);
        println!(
            "total cost: {}",
            format_money(stats.total_cost, &trip.currency)
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip_id = target_trip_id(&planner, args.trip.as_deref())?;
    let category = parse_category(&args.category).map_err(Box::<dyn std::error::Error>::from)?;

    let draft = ActivityDraft {
        title: args.title,
        date: args.date,
        cost: args.cost,
        category,
        time_start: args.time_start,
        time_end: args.time_end,
        provider: args.provider,
        notes: args.notes,
    };
    let id = planner
        .add_activity(&trip_id, draft)
        .ok_or_else(|| format!("trip not found: {}", trip_id))?;

    let notices = planner.notices.drain();
    persist_session(&workspace, planner);
    render_mutation(Some(&id), &notices, json)
}

fn cmd_edit(args: EditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip_id = find_activity_trip(planner.trips(), &args.id)
        .map(|t| t.id.clone())
        .ok_or_else(|| format!("activity not found: {}", args.id))?;

    let category = args
        .category
        .as_deref()
        .map(parse_category)
        .transpose()
        .map_err(Box::<dyn std::error::Error>::from)?;

    let patch = ActivityPatch {
        title: args.title,
        date: args.date,
        cost: args.cost,
        category,
        time_start: args.time_start,
        time_end: args.time_end,
        provider: args.provider,
        notes: args.notes,
        completed: None,
    };
    planner.update_activity(&trip_id, &args.id, patch);
    persist_session(&workspace, planner);

    if json {
        render_mutation(Some(&args.id), &[], true)
    } else {
        println!("{} updated", args.id);
        Ok(())
    }
}

fn cmd_check(args: CheckArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip = find_activity_trip(planner.trips(), &args.id)
        .ok_or_else(|| format!("activity not found: {}", args.id))?;
    let trip_id = trip.id.clone();
    let completed = trip
        .activities
        .iter()
        .find(|a| a.id == args.id)
        .map(|a| a.completed)
        .unwrap_or(false);

    let patch = ActivityPatch {
        completed: Some(!completed),
        ..Default::default()
    };
    planner.update_activity(&trip_id, &args.id, patch);
    persist_session(&workspace, planner);

    if json {
        render_mutation(Some(&args.id), &[], true)
    } else {
        println!(
            "{} → {}",
            args.id,
            if completed { "pending" } else { "done" }
        );
        Ok(())
    }
}

fn cmd_rm(args: RmArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip_id = find_activity_trip(planner.trips(), &args.id)
        .map(|t| t.id.clone())
        .ok_or_else(|| format!("activity not found: {}", args.id))?;

    planner.delete_activity(&trip_id, &args.id);
    let notices = planner.notices.drain();
    persist_session(&workspace, planner);
    render_mutation(None, &notices, json)
}

fn cmd_mv(args: MvArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip_id = find_activity_trip(planner.trips(), &args.id)
        .map(|t| t.id.clone())
        .ok_or_else(|| format!("activity not found: {}", args.id))?;

    // Compute the spliced order against the current list, then apply it
    // wholesale
    let trip = planner
        .trip(&trip_id)
        .ok_or_else(|| format!("trip not found: {}", trip_id))?;
    let mut order: Vec<Activity> = trip.activities.clone();
    let from = order
        .iter()
        .position(|a| a.id == args.id)
        .ok_or_else(|| format!("activity not found: {}", args.id))?;
    let moving = order.remove(from);

    let to = if args.top {
        0
    } else if let Some(ref after_id) = args.after {
        order
            .iter()
            .position(|a| a.id == *after_id)
            .map(|i| i + 1)
            .ok_or_else(|| format!("after target not found: {}", after_id))?
    } else if let Some(position) = args.position {
        position.min(order.len())
    } else {
        return Err("specify a position, --top, or --after".into());
    };
    order.insert(to, moving);

    planner.reorder_activities(&trip_id, order);
    persist_session(&workspace, planner);

    if json {
        render_mutation(Some(&args.id), &[], true)
    } else {
        println!("{} → position {}", args.id, to);
        Ok(())
    }
}

fn cmd_use(args: UseArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip_id = resolve_trip(planner.trips(), &args.trip)?;
    planner.set_active(&trip_id);
    let destination = planner
        .active_trip()
        .map(|t| t.destination.clone())
        .unwrap_or_default();
    persist_session(&workspace, planner);

    if json {
        render_mutation(Some(&trip_id), &[], true)
    } else {
        println!("now planning: {} ({})", destination, trip_id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Trip management
// ---------------------------------------------------------------------------

fn cmd_trip(cmd: TripCmd, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match cmd.action {
        TripAction::New(args) => cmd_trip_new(args, json),
        TripAction::Edit(args) => cmd_trip_edit(args, json),
        TripAction::Rm(args) => cmd_trip_rm(args, json),
    }
}

fn cmd_trip_new(args: TripNewArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let id = planner.add_trip(&args.destination, args.cover.as_deref());
    let notices = planner.notices.drain();
    persist_session(&workspace, planner);
    render_mutation(Some(&id), &notices, json)
}

fn cmd_trip_edit(args: TripEditArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip_id = resolve_trip(planner.trips(), &args.trip)?;
    let patch = TripPatch {
        destination: args.destination,
        cover_image: args.cover,
        start_date: args.start_date,
        end_date: args.end_date,
        currency: args.currency,
    };
    planner.update_trip(&trip_id, patch);
    let notices = planner.notices.drain();
    persist_session(&workspace, planner);
    render_mutation(None, &notices, json)
}

fn cmd_trip_rm(args: TripRmArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;
    let mut planner = start_session(&workspace);

    let trip_id = resolve_trip(planner.trips(), &args.trip)?;
    let was_active = planner.active_id() == Some(trip_id.as_str());
    planner.delete_trip(&trip_id);
    let notices = planner.notices.drain();

    if was_active && !json {
        match planner.active_trip() {
            Some(trip) => println!("now planning: {} ({})", trip.destination, trip.id),
            None => println!("no trips left"),
        }
    }
    persist_session(&workspace, planner);
    render_mutation(None, &notices, json)
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

fn cmd_gallery(cmd: GalleryCmd, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match cmd.action {
        Some(GalleryAction::Add(args)) => cmd_gallery_add(args, json),
        None => cmd_gallery_list(json),
    }
}

fn cmd_gallery_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let images = &workspace.config.gallery.images;

    if json {
        println!("{}", serde_json::to_string_pretty(images)?);
    } else {
        if images.is_empty() {
            println!("(gallery is empty)");
        }
        for (i, url) in images.iter().enumerate() {
            println!("{:>3}  {}", i + 1, url);
        }
    }
    Ok(())
}

fn cmd_gallery_add(args: GalleryAddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = load_workspace_cwd()?;
    let _lock = FileLock::acquire_default(&workspace.data_dir)?;

    let (_, mut doc) = config_io::read_config(&workspace.data_dir)?;
    config_io::add_gallery_image(&mut doc, &args.url);
    config_io::write_config(&workspace.data_dir, &doc)?;

    if json {
        render_mutation(None, &[], true)
    } else {
        println!("added to gallery");
        Ok(())
    }
}
