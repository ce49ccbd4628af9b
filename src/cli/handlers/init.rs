use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::state::{self, SessionState};
use crate::io::store;
use crate::io::workspace_io;
use crate::model::seed;

const CONFIG_TOML_TEMPLATE: &str = r##"[planner]
name = "{name}"

[defaults]
currency = "USD"
cover_image = "https://picsum.photos/seed/adventure/1200/800"

# --- Gallery ---
# Cover images offered when creating a trip.
# Add more with: vy gallery add <url>

[gallery]
images = [
    "https://picsum.photos/seed/adventure/1200/800",
    "https://picsum.photos/seed/beach/1200/800",
    "https://picsum.photos/seed/city/1200/800",
    "https://picsum.photos/seed/mountain/1200/800",
    "https://picsum.photos/seed/paris/1200/800",
    "https://picsum.photos/seed/newyork/1200/800",
    "https://picsum.photos/seed/tokyo/1200/800",
    "https://picsum.photos/seed/mexico/1200/800",
    "https://picsum.photos/seed/rome/1200/800",
    "https://picsum.photos/seed/miami/1200/800",
    "https://picsum.photos/seed/sanjuan/1200/800",
]
"##;

/// Infer a planner name from a directory name: replace hyphens with spaces,
/// title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_config_toml(name: &str) -> String {
    CONFIG_TOML_TEMPLATE.replace("{name}", name)
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let data_dir = cwd.join("voyage");

    // Check if already initialized
    if data_dir.is_dir() && !args.force {
        return Err("planner already exists in ./voyage/ (use --force to reinitialize)".into());
    }

    // Check for a parent planner and warn
    if let Some(parent) = cwd.parent()
        && let Ok(parent_root) = workspace_io::discover_workspace(parent)
    {
        let parent_dir = parent_root.join("voyage");
        eprintln!("Note: parent planner found at {}/", parent_dir.display());
        eprintln!("Creating new planner in ./voyage/");
    }

    // Infer planner name
    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Untitled".to_string())
    });

    let trips = if args.empty {
        Vec::new()
    } else {
        seed::starter_trips()
    };

    fs::create_dir_all(&data_dir)?;
    fs::write(data_dir.join("config.toml"), render_config_toml(&name))?;

    // Unlike later saves, a failed first write is a hard error
    store::write_trips(&data_dir, &trips)?;
    let session = SessionState {
        active_trip: trips.first().map(|t| t.id.clone()),
    };
    state::write_session(&data_dir, &session)?;

    // Print summary
    println!("Initialized planner: {}", name);
    for trip in &trips {
        println!(
            "  trip: {} ({}) [{} - {}]",
            trip.destination, trip.id, trip.start_date, trip.end_date
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::PlannerConfig;

    #[test]
    fn test_infer_name() {
        assert_eq!(infer_name("summer-2026"), "Summer 2026");
        assert_eq!(infer_name("voyage"), "Voyage");
        assert_eq!(infer_name("family-winter-trips"), "Family Winter Trips");
    }

    #[test]
    fn test_config_template_renders_name() {
        let rendered = render_config_toml("My Trips");
        assert!(rendered.contains("name = \"My Trips\""));
        assert!(!rendered.contains("{name}"));
    }

    #[test]
    fn test_config_template_parses() {
        let rendered = render_config_toml("Test");
        let config: PlannerConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(config.planner.name, "Test");
        assert_eq!(config.defaults.currency, "USD");
        assert_eq!(config.gallery.images.len(), 11);
        assert_eq!(
            config.gallery.images[0],
            "https://picsum.photos/seed/adventure/1200/800"
        );
    }
}
