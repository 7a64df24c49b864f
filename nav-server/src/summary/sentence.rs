//! Natural-language trip summary.

use crate::directions::LatLng;

/// Everything the sentence mentions.
#[derive(Debug, Clone, Copy)]
pub struct SentenceParts<'a> {
    pub total_time: &'a str,
    pub distance_travelled: &'a str,
    pub waypoints: usize,
    pub avg_speed: Option<f64>,
    pub modes: &'a [String],
    pub lat_lng: (LatLng, LatLng),
}

/// Build the summary sentence, e.g.
/// "This journey will take 36 mins over 10.0 mi, covering 3 waypoints at an
/// average speed of 16.7. In addition to driving, you will also need to use
/// a ferry, at a starting (Lat/Long) of (47.6, -122.3), and ending at (47.6, -122.5)"
///
/// At most three modes are mentioned.
pub fn summary_sentence(parts: &SentenceParts<'_>) -> String {
    let speed = match parts.avg_speed {
        Some(mph) => format!("{mph:.1}"),
        None => "unknown".to_string(),
    };

    let mut sentence = format!(
        "This journey will take {} over {}, covering {} waypoints at an average speed of {}. ",
        parts.total_time, parts.distance_travelled, parts.waypoints, speed
    );
    sentence.push_str(&modes_clause(parts.modes));

    // "ferry-train" must go first or it would become "a ferry-train".
    let mut sentence = sentence
        .replace("ferry-train", "an auto-train")
        .replace("ferry", "a ferry");

    let (start, end) = parts.lat_lng;
    sentence.push_str(&format!(
        ", at a starting (Lat/Long) of ({:?}, {:?}), and ending at ({:?}, {:?})",
        start.lat, start.lng, end.lat, end.lng
    ));
    sentence
}

fn modes_clause(modes: &[String]) -> String {
    match modes {
        [] => String::new(),
        [only] => format!("It will only require {only}"),
        [first, second] => format!("In addition to {first}, you will also need to use {second}"),
        [first, second, third, ..] => format!(
            "In addition to {first}, you will also need to use {second} and {third}"
        ),
    }
}
