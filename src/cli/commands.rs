use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vy", about = concat!("[>] voyage v", env!("CARGO_PKG_VERSION"), " - plan your trips from the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different planner directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub planner_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new planner in the current directory
    Init(InitArgs),
    /// List all trips
    Trips,
    /// Show the itinerary for a trip, grouped by day
    List(ListArgs),
    /// Show activity details
    Show(ShowArgs),
    /// Search trips and activities by regex
    Search(SearchArgs),
    /// Show cost and completion statistics
    Stats(StatsArgs),
    /// Add an activity to a trip
    Add(AddArgs),
    /// Edit activity fields
    Edit(EditArgs),
    /// Toggle an activity between done and pending
    Check(CheckArgs),
    /// Remove an activity
    Rm(RmArgs),
    /// Move (reorder) an activity within its trip
    Mv(MvArgs),
    /// Select the active trip
    Use(UseArgs),
    /// Trip management
    Trip(TripCmd),
    /// View or extend the cover image gallery
    Gallery(GalleryCmd),
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Planner name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Start with no trips instead of the sample itineraries
    #[arg(long)]
    pub empty: bool,
    /// Reinitialize even if voyage/ already exists
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Keep only activities whose title contains this term (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,
    /// Trip to list (default: the active trip)
    #[arg(long)]
    pub trip: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Activity ID to show
    pub id: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern to search for
    pub pattern: String,
    /// Limit search to one trip
    #[arg(long)]
    pub trip: Option<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Trip to summarize (default: the active trip)
    #[arg(long)]
    pub trip: Option<String>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Activity title
    pub title: String,
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Cost in the trip currency
    #[arg(long, default_value = "0")]
    pub cost: f64,
    /// Category (flight, lodging, transport, food, activity, culture,
    /// excursion, shopping, other)
    #[arg(long, default_value = "activity")]
    pub category: String,
    /// Start time (HH:MM)
    #[arg(long)]
    pub time_start: Option<String>,
    /// End time (HH:MM)
    #[arg(long)]
    pub time_end: Option<String>,
    /// Provider or vendor name
    #[arg(long)]
    pub provider: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
    /// Trip to add to (default: the active trip)
    #[arg(long)]
    pub trip: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Activity ID
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// New cost
    #[arg(long)]
    pub cost: Option<f64>,
    /// New category
    #[arg(long)]
    pub category: Option<String>,
    /// New start time (empty string clears it)
    #[arg(long)]
    pub time_start: Option<String>,
    /// New end time (empty string clears it)
    #[arg(long)]
    pub time_end: Option<String>,
    /// New provider (empty string clears it)
    #[arg(long)]
    pub provider: Option<String>,
    /// New notes (empty string clears them)
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Activity ID
    pub id: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Activity ID
    pub id: String,
}

#[derive(Args)]
pub struct MvArgs {
    /// Activity ID
    pub id: String,
    /// Numeric position (0-indexed)
    pub position: Option<usize>,
    /// Move to the front of the trip's list
    #[arg(long)]
    pub top: bool,
    /// Move after this activity ID
    #[arg(long)]
    pub after: Option<String>,
}

#[derive(Args)]
pub struct UseArgs {
    /// Trip id or destination
    pub trip: String,
}

// ---------------------------------------------------------------------------
// Trip management
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TripCmd {
    #[command(subcommand)]
    pub action: TripAction,
}

#[derive(Subcommand)]
pub enum TripAction {
    /// Create a new trip
    New(TripNewArgs),
    /// Edit trip fields
    Edit(TripEditArgs),
    /// Delete a trip and all its activities
    Rm(TripRmArgs),
}

#[derive(Args)]
pub struct TripNewArgs {
    /// Destination name
    pub destination: String,
    /// Cover image URL (default: the configured default cover)
    #[arg(long)]
    pub cover: Option<String>,
}

#[derive(Args)]
pub struct TripEditArgs {
    /// Trip id or destination
    pub trip: String,
    /// New destination name
    #[arg(long)]
    pub destination: Option<String>,
    /// New cover image URL
    #[arg(long)]
    pub cover: Option<String>,
    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// New end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
    /// New currency code
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Args)]
pub struct TripRmArgs {
    /// Trip id or destination
    pub trip: String,
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct GalleryCmd {
    #[command(subcommand)]
    pub action: Option<GalleryAction>,
}

#[derive(Subcommand)]
pub enum GalleryAction {
    /// Add an image URL to the gallery
    Add(GalleryAddArgs),
}

#[derive(Args)]
pub struct GalleryAddArgs {
    /// Image URL
    pub url: String,
}
