//! Integration tests for the `vy` CLI.
//!
//! Each test creates a temp planner directory, runs `vy` as a subprocess,
//! and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `vy` binary.
fn vy_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("vy");
    path
}

/// Create a minimal test planner in the given directory.
fn create_test_planner(root: &Path) {
    let data_dir = root.join("voyage");
    fs::create_dir_all(&data_dir).unwrap();

    fs::write(
        data_dir.join("config.toml"),
        r#"[planner]
name = "test-planner"

[defaults]
currency = "EUR"
cover_image = "https://picsum.photos/seed/city/1200/800"

# favorite covers
[gallery]
images = [
    "https://picsum.photos/seed/city/1200/800",
    "https://picsum.photos/seed/beach/1200/800",
]
"#,
    )
    .unwrap();

    fs::write(
        data_dir.join("trips.json"),
        r#"[
  {
    "id": "trip_lis",
    "destination": "Lisbon",
    "cover_image": "https://picsum.photos/seed/city/1200/800",
    "start_date": "2026-04-01",
    "end_date": "2026-04-05",
    "currency": "EUR",
    "activities": [
      {
        "id": "lis_1",
        "date": "2026-04-01",
        "title": "Flight SDQ - LIS",
        "cost": 420.0,
        "category": "flight",
        "time_start": "09:40",
        "time_end": "22:05",
        "provider": "TAP Air Portugal",
        "completed": true
      },
      {
        "id": "lis_2",
        "date": "2026-04-02",
        "title": "Tram 28 ride",
        "cost": 3.5,
        "category": "transport",
        "completed": false
      },
      {
        "id": "lis_3",
        "date": "2026-04-02",
        "title": "Dinner at Time Out Market",
        "cost": 30.0,
        "category": "food",
        "provider": "Time Out",
        "notes": "Try the custard tarts",
        "completed": false
      }
    ]
  },
  {
    "id": "trip_port",
    "destination": "Porto",
    "cover_image": "https://picsum.photos/seed/beach/1200/800",
    "start_date": "2026-04-06",
    "end_date": "2026-04-08",
    "currency": "EUR",
    "activities": [
      {
        "id": "port_1",
        "date": "2026-04-06",
        "title": "Train Lisbon - Porto",
        "cost": 24.0,
        "category": "transport",
        "provider": "CP Rail",
        "completed": false
      }
    ]
  }
]
"#,
    )
    .unwrap();

    fs::write(
        data_dir.join(".state.json"),
        r#"{ "active_trip": "trip_lis" }"#,
    )
    .unwrap();
}

/// Run `vy` with the given args in the given directory, returning
/// (stdout, stderr, success).
fn run_vy(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(vy_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run vy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `vy` expecting success, return stdout.
fn run_vy_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_vy(dir, args);
    if !success {
        panic!(
            "vy {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Read the stored activity ids of a trip, in order.
fn trip_activity_ids(root: &Path, trip_id: &str) -> Vec<String> {
    let data = fs::read_to_string(root.join("voyage/trips.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    let trip = parsed
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["id"] == trip_id)
        .unwrap_or_else(|| panic!("trip {} not in trips.json", trip_id))
        .clone();
    trip["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Init tests
// ---------------------------------------------------------------------------

#[test]
fn test_init_creates_planner() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = run_vy_ok(tmp.path(), &["init", "--name", "My Trips"]);
    assert!(out.contains("Initialized planner: My Trips"));
    assert!(tmp.path().join("voyage/config.toml").is_file());
    assert!(tmp.path().join("voyage/trips.json").is_file());
    assert!(tmp.path().join("voyage/.state.json").is_file());
}

#[test]
fn test_init_seeds_sample_trips() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = run_vy_ok(tmp.path(), &["init"]);
    assert!(out.contains("New York"));
    assert!(out.contains("San Juan"));

    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 4);

    // The first seeded trip is selected
    let state = fs::read_to_string(tmp.path().join("voyage/.state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(parsed["active_trip"], "trip_ny_2026");
}

#[test]
fn test_init_empty() {
    let tmp = tempfile::TempDir::new().unwrap();

    run_vy_ok(tmp.path(), &["init", "--empty"]);

    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 0);

    let state = fs::read_to_string(tmp.path().join("voyage/.state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert!(parsed["active_trip"].is_null());
}

#[test]
fn test_init_errors_if_planner_exists() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let (_stdout, stderr, success) = run_vy(tmp.path(), &["init"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));
}

// ---------------------------------------------------------------------------
// Read command tests
// ---------------------------------------------------------------------------

#[test]
fn test_trips_lists_all() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["trips"]);
    assert!(out.contains("Lisbon"));
    assert!(out.contains("trip_lis"));
    assert!(out.contains("Porto"));
    assert!(out.contains("trip_port"));
}

#[test]
fn test_trips_marks_active() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["trips"]);
    let lisbon_line = out.lines().find(|l| l.contains("Lisbon")).unwrap();
    let porto_line = out.lines().find(|l| l.contains("Porto")).unwrap();
    assert!(lisbon_line.contains("★"));
    assert!(!porto_line.contains("★"));
}

#[test]
fn test_trips_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["trips", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], "trip_lis");
    assert_eq!(arr[0]["active"], true);
    assert_eq!(arr[0]["stats"]["total"], 3);
    assert_eq!(arr[0]["stats"]["completed"], 1);
    assert_eq!(arr[1]["active"], false);
}

#[test]
fn test_list_groups_by_day() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["list"]);
    assert!(out.contains("== Lisbon (trip_lis) =="));
    let day1 = out.find("-- 2026-04-01 --").unwrap();
    let day2 = out.find("-- 2026-04-02 --").unwrap();
    assert!(day1 < day2);
    assert!(out.contains("Tram 28 ride"));
    assert!(out.contains("Dinner at Time Out Market"));
}

#[test]
fn test_list_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["list", "--filter", "tram"]);
    assert!(out.contains("Tram 28 ride"));
    assert!(!out.contains("Dinner"));
}

#[test]
fn test_list_other_trip() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["list", "--trip", "porto"]);
    assert!(out.contains("== Porto (trip_port) =="));
    assert!(out.contains("Train Lisbon - Porto"));
    assert!(!out.contains("Tram 28 ride"));
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["trip"], "trip_lis");
    let days = parsed["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2026-04-01");
    assert_eq!(days[1]["activities"].as_array().unwrap().len(), 2);
}

#[test]
fn test_show() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["show", "lis_1"]);
    assert!(out.contains("Flight SDQ - LIS"));
    assert!(out.contains("trip: Lisbon (trip_lis)"));
    assert!(out.contains("date: 2026-04-01"));
    assert!(out.contains("cost: 420.00 EUR"));
    assert!(out.contains("provider: TAP Air Portugal"));
}

#[test]
fn test_show_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["show", "lis_3", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["id"], "lis_3");
    assert_eq!(parsed["category"], "food");
    assert_eq!(parsed["notes"], "Try the custard tarts");
    assert_eq!(parsed["completed"], false);
}

#[test]
fn test_show_not_found() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let (_stdout, stderr, success) = run_vy(tmp.path(), &["show", "nope_9"]);
    assert!(!success);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_search() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["search", "Tram|Train"]);
    assert!(out.contains("lis_2"));
    assert!(out.contains("port_1"));
}

#[test]
fn test_search_matches_providers_and_notes() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["search", "custard"]);
    assert!(out.contains("lis_3"));
    assert!(out.contains("notes"));
}

#[test]
fn test_search_with_trip_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["search", "(?i)lisbon", "--trip", "porto"]);
    assert!(out.contains("port_1"));
    assert!(!out.contains("trip_lis]"));
}

#[test]
fn test_search_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["search", "Rail", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["trip"], "trip_port");
    assert_eq!(arr[0]["activity_id"], "port_1");
    assert_eq!(arr[0]["field"], "provider");
    assert_eq!(arr[0]["text"], "CP Rail");
}

#[test]
fn test_stats() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["stats"]);
    assert!(out.contains("activities: 3 (1 done)"));
    assert!(out.contains("total cost: 453.50 EUR"));
}

#[test]
fn test_stats_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["stats", "--trip", "trip_port", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["trip"], "trip_port");
    assert_eq!(parsed["stats"]["total"], 1);
    assert_eq!(parsed["stats"]["completed"], 0);
    assert_eq!(parsed["stats"]["total_cost"], 24.0);
}

// ---------------------------------------------------------------------------
// Write command tests
// ---------------------------------------------------------------------------

#[test]
fn test_add_activity() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(
        tmp.path(),
        &[
            "add",
            "Fado night",
            "--date",
            "2026-04-03",
            "--cost",
            "25",
            "--category",
            "culture",
        ],
    );
    let id = out.lines().next().unwrap().trim();
    assert_eq!(id.len(), 9);
    assert!(out.contains("✓ Activity added"));

    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    assert!(data.contains("Fado night"));
    assert!(trip_activity_ids(tmp.path(), "trip_lis").contains(&id.to_string()));
}

#[test]
fn test_add_to_named_trip() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    run_vy_ok(
        tmp.path(),
        &[
            "add",
            "Port tasting",
            "--date",
            "2026-04-07",
            "--trip",
            "Porto",
        ],
    );
    let ids = trip_activity_ids(tmp.path(), "trip_port");
    assert_eq!(ids.len(), 2);

    // Lisbon untouched
    assert_eq!(trip_activity_ids(tmp.path(), "trip_lis").len(), 3);
}

#[test]
fn test_add_unknown_category_errors() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let (_stdout, stderr, success) = run_vy(
        tmp.path(),
        &["add", "X", "--date", "2026-04-03", "--category", "sports"],
    );
    assert!(!success);
    assert!(stderr.contains("unknown category"));
}

#[test]
fn test_edit_title_and_cost() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(
        tmp.path(),
        &["edit", "lis_2", "--title", "Tram 28 loop", "--cost", "4"],
    );
    assert!(out.contains("lis_2 updated"));

    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    assert!(data.contains("Tram 28 loop"));
    assert!(!data.contains("Tram 28 ride"));
}

#[test]
fn test_edit_empty_string_clears_optional_field() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    run_vy_ok(tmp.path(), &["edit", "lis_1", "--provider", ""]);
    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    assert!(!data.contains("TAP Air Portugal"));
}

#[test]
fn test_edit_unknown_activity_errors() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let (_stdout, stderr, success) = run_vy(tmp.path(), &["edit", "nope_9", "--title", "X"]);
    assert!(!success);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_check_toggles() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["check", "lis_2"]);
    assert!(out.contains("lis_2 → done"));
    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    let lis_2 = &parsed[0]["activities"][1];
    assert_eq!(lis_2["completed"], true);

    // A second check flips it back
    let out = run_vy_ok(tmp.path(), &["check", "lis_2"]);
    assert!(out.contains("lis_2 → pending"));
    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(parsed[0]["activities"][1]["completed"], false);
}

#[test]
fn test_rm_activity() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["rm", "lis_2"]);
    assert!(out.contains("· Activity removed"));

    let ids = trip_activity_ids(tmp.path(), "trip_lis");
    assert_eq!(ids, vec!["lis_1", "lis_3"]);
}

#[test]
fn test_mv_top() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    run_vy_ok(tmp.path(), &["mv", "lis_3", "--top"]);
    let ids = trip_activity_ids(tmp.path(), "trip_lis");
    assert_eq!(ids, vec!["lis_3", "lis_1", "lis_2"]);
}

#[test]
fn test_mv_after() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    run_vy_ok(tmp.path(), &["mv", "lis_1", "--after", "lis_2"]);
    let ids = trip_activity_ids(tmp.path(), "trip_lis");
    assert_eq!(ids, vec!["lis_2", "lis_1", "lis_3"]);
}

#[test]
fn test_mv_position() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    run_vy_ok(tmp.path(), &["mv", "lis_1", "2"]);
    let ids = trip_activity_ids(tmp.path(), "trip_lis");
    assert_eq!(ids, vec!["lis_2", "lis_3", "lis_1"]);
}

#[test]
fn test_use_persists_selection() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["use", "trip_port"]);
    assert!(out.contains("now planning: Porto (trip_port)"));

    let state = fs::read_to_string(tmp.path().join("voyage/.state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(parsed["active_trip"], "trip_port");

    // Subsequent trip-scoped reads follow the selection
    let out = run_vy_ok(tmp.path(), &["list"]);
    assert!(out.contains("== Porto (trip_port) =="));
}

#[test]
fn test_use_accepts_destination_case_insensitive() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["use", "porto"]);
    assert!(out.contains("trip_port"));
}

#[test]
fn test_use_unknown_trip_errors() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let (_stdout, stderr, success) = run_vy(tmp.path(), &["use", "Atlantis"]);
    assert!(!success);
    assert!(stderr.contains("trip not found"));
}

// ---------------------------------------------------------------------------
// Trip management tests
// ---------------------------------------------------------------------------

#[test]
fn test_trip_new() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["trip", "new", "Tokyo"]);
    let id = out.lines().next().unwrap().trim().to_string();
    assert_eq!(id.len(), 9);
    assert!(out.contains("✓ Trip to Tokyo created"));

    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    let trips = parsed.as_array().unwrap();
    assert_eq!(trips.len(), 3);
    let tokyo = trips.iter().find(|t| t["destination"] == "Tokyo").unwrap();
    assert_eq!(tokyo["id"], id.as_str());
    // Spans a single day and picks up config defaults
    assert_eq!(tokyo["start_date"], tokyo["end_date"]);
    assert_eq!(tokyo["currency"], "EUR");
    assert_eq!(
        tokyo["cover_image"],
        "https://picsum.photos/seed/city/1200/800"
    );
    assert_eq!(tokyo["activities"].as_array().unwrap().len(), 0);

    // The new trip becomes the selection
    let state = fs::read_to_string(tmp.path().join("voyage/.state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(parsed["active_trip"], id.as_str());
}

#[test]
fn test_trip_new_with_cover() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    run_vy_ok(
        tmp.path(),
        &["trip", "new", "Rome", "--cover", "https://example.com/rome.jpg"],
    );
    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    assert!(data.contains("https://example.com/rome.jpg"));
}

#[test]
fn test_trip_new_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["trip", "new", "Oslo", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["id"].as_str().unwrap().len(), 9);
    let notices = parsed["notices"].as_array().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["severity"], "success");
    assert_eq!(notices[0]["text"], "Trip to Oslo created");
}

#[test]
fn test_trip_edit() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(
        tmp.path(),
        &[
            "trip",
            "edit",
            "trip_port",
            "--destination",
            "Porto & Douro",
            "--end-date",
            "2026-04-09",
        ],
    );
    assert!(out.contains("✓ Trip updated"));

    let data = fs::read_to_string(tmp.path().join("voyage/trips.json")).unwrap();
    assert!(data.contains("Porto & Douro"));
    assert!(data.contains("2026-04-09"));
}

#[test]
fn test_trip_rm_moves_selection() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    // Removing the active trip falls back to the first remaining one
    let out = run_vy_ok(tmp.path(), &["trip", "rm", "trip_lis"]);
    assert!(out.contains("now planning: Porto (trip_port)"));
    assert!(out.contains("✓ Trip deleted"));

    let state = fs::read_to_string(tmp.path().join("voyage/.state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(parsed["active_trip"], "trip_port");
}

#[test]
fn test_trip_rm_last_trip() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    run_vy_ok(tmp.path(), &["trip", "rm", "trip_port"]);
    let out = run_vy_ok(tmp.path(), &["trip", "rm", "trip_lis"]);
    assert!(out.contains("no trips left"));

    let state = fs::read_to_string(tmp.path().join("voyage/.state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert!(parsed["active_trip"].is_null());
}

// ---------------------------------------------------------------------------
// Gallery tests
// ---------------------------------------------------------------------------

#[test]
fn test_gallery_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(tmp.path(), &["gallery"]);
    assert!(out.contains("https://picsum.photos/seed/city/1200/800"));
    assert!(out.contains("https://picsum.photos/seed/beach/1200/800"));
}

#[test]
fn test_gallery_add_preserves_config_layout() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let out = run_vy_ok(
        tmp.path(),
        &["gallery", "add", "https://example.com/fjord.jpg"],
    );
    assert!(out.contains("added to gallery"));

    let config = fs::read_to_string(tmp.path().join("voyage/config.toml")).unwrap();
    assert!(config.contains("https://example.com/fjord.jpg"));
    // toml_edit keeps unrelated lines intact
    assert!(config.contains("name = \"test-planner\""));
    assert!(config.contains("# favorite covers"));

    let out = run_vy_ok(tmp.path(), &["gallery"]);
    assert!(out.contains("https://example.com/fjord.jpg"));
}

// ---------------------------------------------------------------------------
// Workspace discovery and errors
// ---------------------------------------------------------------------------

#[test]
fn test_runs_from_subdirectory() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());
    let sub = tmp.path().join("notes/2026");
    fs::create_dir_all(&sub).unwrap();

    let out = run_vy_ok(&sub, &["trips"]);
    assert!(out.contains("Lisbon"));
}

#[test]
fn test_dir_flag() {
    let planner = tempfile::TempDir::new().unwrap();
    create_test_planner(planner.path());
    let elsewhere = tempfile::TempDir::new().unwrap();

    let out = run_vy_ok(
        elsewhere.path(),
        &["-C", planner.path().to_str().unwrap(), "trips"],
    );
    assert!(out.contains("Lisbon"));
}

#[test]
fn test_no_planner_errors() {
    let tmp = tempfile::TempDir::new().unwrap();

    let (_stdout, stderr, success) = run_vy(tmp.path(), &["trips"]);
    assert!(!success);
    assert!(stderr.contains("not a planner directory"));
}

#[test]
fn test_write_command_fails_while_lock_is_held() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());

    let _held = voyage::io::lock::FileLock::acquire_default(&tmp.path().join("voyage")).unwrap();

    let (_stdout, stderr, success) = run_vy(tmp.path(), &["check", "lis_2"]);
    assert!(!success);
    assert!(stderr.contains("could not acquire lock"));

    // Reads never take the lock
    let out = run_vy_ok(tmp.path(), &["trips"]);
    assert!(out.contains("Lisbon"));
}

#[test]
fn test_ambiguous_destination_errors() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_planner(tmp.path());
    run_vy_ok(tmp.path(), &["trip", "new", "Lisbon"]);

    let (_stdout, stderr, success) = run_vy(tmp.path(), &["use", "lisbon"]);
    assert!(!success);
    assert!(stderr.contains("ambiguous"));
    assert!(stderr.contains("trip_lis"));
}
