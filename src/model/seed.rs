use super::trip::{Activity, Category, Trip};

/// Sample trips written by `vy init` and used as the read-failure default
/// for the trip store.
pub fn starter_trips() -> Vec<Trip> {
    vec![new_york(), mexico_city(), miami(), san_juan()]
}

fn act(
    id: &str,
    date: &str,
    title: &str,
    cost: f64,
    category: Category,
    time_start: Option<&str>,
    time_end: Option<&str>,
    provider: Option<&str>,
) -> Activity {
    Activity {
        id: id.to_string(),
        date: date.to_string(),
        title: title.to_string(),
        cost,
        category,
        time_start: time_start.map(String::from),
        time_end: time_end.map(String::from),
        provider: provider.map(String::from),
        notes: None,
        completed: false,
    }
}

fn new_york() -> Trip {
    Trip {
        id: "trip_ny_2026".to_string(),
        destination: "New York".to_string(),
        cover_image: "https://picsum.photos/seed/newyork/1200/800".to_string(),
        start_date: "2026-01-30".to_string(),
        end_date: "2026-02-09".to_string(),
        currency: "USD".to_string(),
        activities: vec![
            act(
                "ny_1",
                "2026-01-30",
                "Flight SDQ - EWR",
                116.50,
                Category::Flight,
                Some("06:10"),
                Some("09:30"),
                Some("Arajet"),
            ),
            act(
                "ny_2",
                "2026-01-30",
                "NJ Transit + AirTrain",
                13.25,
                Category::Transport,
                Some("10:00"),
                Some("11:00"),
                Some("Public transit"),
            ),
            act(
                "ny_3",
                "2026-01-30",
                "HI NYC Hostel",
                77.00,
                Category::Lodging,
                None,
                None,
                Some("Booking"),
            ),
            act(
                "ny_4",
                "2026-01-30",
                "Times Square + Rockefeller walk",
                0.0,
                Category::Activity,
                None,
                None,
                None,
            ),
            act(
                "ny_5",
                "2026-01-30",
                "Lunch at 2 Bros Pizza",
                9.02,
                Category::Food,
                None,
                None,
                None,
            ),
            act(
                "ny_6",
                "2026-01-30",
                "Central Park walk",
                0.0,
                Category::Activity,
                None,
                None,
                None,
            ),
            act(
                "ny_7",
                "2026-02-09",
                "Flight MIA - SDQ",
                116.50,
                Category::Flight,
                None,
                None,
                None,
            ),
        ],
    }
}

fn mexico_city() -> Trip {
    Trip {
        id: "trip_mex_2026".to_string(),
        destination: "Mexico City".to_string(),
        cover_image: "https://picsum.photos/seed/mexico/1200/800".to_string(),
        start_date: "2026-11-24".to_string(),
        end_date: "2026-11-30".to_string(),
        currency: "USD".to_string(),
        activities: vec![
            act(
                "mx_1",
                "2026-11-24",
                "Flight SDQ - NLU",
                189.11,
                Category::Flight,
                Some("22:44"),
                None,
                Some("Arajet"),
            ),
            act(
                "mx_2",
                "2026-11-24",
                "Transfer NLU - Polanco",
                18.00,
                Category::Transport,
                None,
                None,
                None,
            ),
            act(
                "mx_3",
                "2026-11-24",
                "Check-in Airbnb Polanco",
                288.00,
                Category::Lodging,
                None,
                None,
                None,
            ),
            act(
                "mx_4",
                "2026-11-25",
                "Centro Histórico + Bellas Artes",
                10.00,
                Category::Culture,
                None,
                None,
                None,
            ),
            act(
                "mx_5",
                "2026-11-25",
                "Xochimilco trajinera ride",
                25.00,
                Category::Excursion,
                None,
                None,
                None,
            ),
            act(
                "mx_6",
                "2026-11-26",
                "Frida Kahlo Museum (Coyoacán)",
                15.00,
                Category::Culture,
                None,
                None,
                None,
            ),
        ],
    }
}

fn miami() -> Trip {
    Trip {
        id: "trip_mia_2026".to_string(),
        destination: "Miami".to_string(),
        cover_image: "https://picsum.photos/seed/miami/1200/800".to_string(),
        start_date: "2026-02-27".to_string(),
        end_date: "2026-03-01".to_string(),
        currency: "USD".to_string(),
        activities: vec![
            act(
                "mia_1",
                "2026-02-27",
                "Flight SDQ - Fort Lauderdale",
                74.25,
                Category::Flight,
                Some("16:27"),
                Some("17:56"),
                Some("JetBlue"),
            ),
            act(
                "mia_2",
                "2026-02-27",
                "Uber FLL to Pembroke Pines",
                33.95,
                Category::Transport,
                Some("18:30"),
                Some("19:05"),
                Some("Uber"),
            ),
            act(
                "mia_3",
                "2026-02-28",
                "Breakfast at Starbucks",
                10.00,
                Category::Food,
                Some("08:00"),
                None,
                None,
            ),
            act(
                "mia_4",
                "2026-02-28",
                "Bayside Marketplace & Metromover",
                0.0,
                Category::Activity,
                None,
                None,
                None,
            ),
            act(
                "mia_5",
                "2026-02-28",
                "Lunch at La Camaronera",
                18.00,
                Category::Food,
                None,
                None,
                None,
            ),
        ],
    }
}

fn san_juan() -> Trip {
    Trip {
        id: "trip_sj_2026".to_string(),
        destination: "San Juan".to_string(),
        cover_image: "https://picsum.photos/seed/sanjuan/1200/800".to_string(),
        start_date: "2026-01-24".to_string(),
        end_date: "2026-01-28".to_string(),
        currency: "USD".to_string(),
        activities: vec![
            act(
                "sj_1",
                "2026-01-24",
                "Flight SDQ - SJU",
                102.70,
                Category::Flight,
                Some("15:30"),
                Some("16:39"),
                Some("Arajet"),
            ),
            act(
                "sj_2",
                "2026-01-24",
                "Uber airport to Navona Studios",
                17.53,
                Category::Transport,
                None,
                None,
                Some("Uber"),
            ),
            act(
                "sj_3",
                "2026-01-24",
                "Navona Studios",
                240.00,
                Category::Lodging,
                None,
                None,
                None,
            ),
            act(
                "sj_4",
                "2026-01-24",
                "Old San Juan walk",
                0.0,
                Category::Activity,
                None,
                None,
                None,
            ),
            act(
                "sj_5",
                "2026-01-24",
                "Traditional lunch",
                15.00,
                Category::Food,
                None,
                None,
                None,
            ),
        ],
    }
}
