use serde::{Deserialize, Serialize};

/// Activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flight,
    Lodging,
    Transport,
    Food,
    Activity,
    Culture,
    Excursion,
    Shopping,
    Other,
}

impl Category {
    /// Display label for human output
    pub fn label(self) -> &'static str {
        match self {
            Category::Flight => "Flight",
            Category::Lodging => "Lodging",
            Category::Transport => "Transport",
            Category::Food => "Food",
            Category::Activity => "Activity",
            Category::Culture => "Culture",
            Category::Excursion => "Excursion",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    /// Lowercase name as used in JSON and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Category::Flight => "flight",
            Category::Lodging => "lodging",
            Category::Transport => "transport",
            Category::Food => "food",
            Category::Activity => "activity",
            Category::Culture => "culture",
            Category::Excursion => "excursion",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }
}

/// One dated entry in a trip's itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Opaque identifier, unique within the owning trip
    pub id: String,
    /// Day this activity belongs to (`YYYY-MM-DD`)
    pub date: String,
    /// Title text
    pub title: String,
    /// Cost in the trip currency (0 = free)
    pub cost: f64,
    /// Category
    pub category: Category,
    /// Start time of day (`HH:MM`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// End time of day (`HH:MM`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    /// Provider or vendor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether this activity is done
    #[serde(default)]
    pub completed: bool,
}

/// A trip with its ordered itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Opaque identifier, immutable once assigned
    pub id: String,
    /// Destination name
    pub destination: String,
    /// Cover image URL
    pub cover_image: String,
    /// First day of the trip (`YYYY-MM-DD`)
    pub start_date: String,
    /// Last day of the trip (`YYYY-MM-DD`)
    pub end_date: String,
    /// Currency code for activity costs
    pub currency: String,
    /// Activities in user-defined order
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Trip {
    /// Create a trip with no activities, spanning a single day
    pub fn new(
        id: String,
        destination: String,
        cover_image: String,
        date: String,
        currency: String,
    ) -> Self {
        Trip {
            id,
            destination,
            cover_image,
            start_date: date.clone(),
            end_date: date,
            currency,
            activities: Vec::new(),
        }
    }
}
