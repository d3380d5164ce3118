//! A small road map of 17 Pakistani cities, useful for demos and tests.
//!
//! Positions are screen coordinates on a 600 x 620 canvas; weights are road lengths in
//! arbitrary units. The road between Islamabad and Rawalpindi is shorter than the distance
//! between the two cities on the canvas, which is the only Edge where the straight-line
//! Heuristic overestimates.

use crate::{Cost, Graph, Point};

/// The cities of the sample map and their positions
pub const CITIES: [(&str, Point); 17] = [
    ("Lahore", (100.0, 200.0)),
    ("Islamabad", (300.0, 100.0)),
    ("Multan", (180.0, 320.0)),
    ("Faisalabad", (140.0, 230.0)),
    ("Peshawar", (400.0, 80.0)),
    ("Quetta", (100.0, 400.0)),
    ("Karachi", (100.0, 500.0)),
    ("Rawalpindi", (310.0, 130.0)),
    ("Hyderabad", (120.0, 460.0)),
    ("Sialkot", (120.0, 170.0)),
    ("Sukkur", (150.0, 560.0)),
    ("Bahawalpur", (200.0, 370.0)),
    ("Gujranwala", (130.0, 190.0)),
    ("Okara", (160.0, 260.0)),
    ("Sargodha", (170.0, 210.0)),
    ("Mardan", (360.0, 90.0)),
    ("Dera Ghazi Khan", (160.0, 350.0)),
];

/// The roads of the sample map. Every road can be travelled in both directions.
pub const ROADS: [(&str, &str, Cost); 23] = [
    ("Lahore", "Faisalabad", 80.0),
    ("Lahore", "Sialkot", 60.0),
    ("Lahore", "Islamabad", 280.0),
    ("Lahore", "Gujranwala", 50.0),
    ("Lahore", "Sukkur", 700.0),
    ("Faisalabad", "Multan", 160.0),
    ("Faisalabad", "Islamabad", 320.0),
    ("Faisalabad", "Sargodha", 110.0),
    ("Faisalabad", "Okara", 100.0),
    ("Islamabad", "Rawalpindi", 20.0),
    ("Islamabad", "Peshawar", 180.0),
    ("Islamabad", "Mardan", 70.0),
    ("Rawalpindi", "Peshawar", 160.0),
    ("Multan", "Quetta", 400.0),
    ("Multan", "Karachi", 600.0),
    ("Multan", "Bahawalpur", 100.0),
    ("Multan", "Dera Ghazi Khan", 100.0),
    ("Quetta", "Karachi", 700.0),
    ("Karachi", "Hyderabad", 150.0),
    ("Karachi", "Sukkur", 200.0),
    ("Hyderabad", "Sukkur", 180.0),
    ("Sialkot", "Gujranwala", 40.0),
    ("Peshawar", "Mardan", 50.0),
];

/// Builds the sample map.
///
/// ## Examples
/// ```
/// use route_planner::sample::pakistan_roads;
///
/// let graph = pakistan_roads();
/// let path = graph.find_path("Lahore", "Peshawar")?.into_path().unwrap();
///
/// assert_eq!(path.nodes(), &["Lahore", "Islamabad", "Mardan", "Peshawar"]);
/// assert_eq!(path.cost(), 400.0);
/// # Ok::<(), route_planner::UnknownNodeError>(())
/// ```
pub fn pakistan_roads() -> Graph {
    Graph::from_parts(CITIES, ROADS).expect("invalid sample map")
}
