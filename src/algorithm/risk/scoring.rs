//! Category classifiers
//!
//! Free-text fields are classified by case-insensitive substring match,
//! first match wins in the listed order; the vaccination program is an
//! enumerated value and matches exactly. The literal rules here are the
//! documented behavior, including the near-miss phrases they let through
//! ("no biosecurity measures" does not contain "none" and scores the
//! default).

/// Score the biosecurity infrastructure from the free-text description
///
/// Empty input reads as having no measures in place.
#[must_use]
pub(crate) fn biosecurity_score(measures: &str) -> u8 {
    let text = measures.to_lowercase();
    if text.contains("none") || measures.is_empty() {
        30
    } else if text.contains("basic") {
        60
    } else if text.contains("advanced") || text.contains("comprehensive") {
        90
    } else {
        85
    }
}

/// Score the disease history from the free-text description
#[must_use]
pub(crate) fn disease_history_score(previous_diseases: &str) -> u8 {
    let text = previous_diseases.to_lowercase();
    if text.contains("frequent") || text.contains("multiple") {
        40
    } else if text.contains("occasional") || text.contains("some") {
        65
    } else if text.contains("none") || text.contains("never") {
        95
    } else {
        80
    }
}

/// Score the vaccination program level
///
/// Exact match on the enumerated form value; anything unrecognized,
/// including "none", scores as no program.
#[must_use]
pub(crate) fn vaccination_score(program: &str) -> u8 {
    match program {
        "comprehensive" => 95,
        "standard" => 80,
        "basic" => 60,
        _ => 30,
    }
}

/// Score the visitor and feed management protocols
///
/// The top band requires both a strict visitor protocol and certified
/// feed; an empty visitor protocol reads as minimal.
#[must_use]
pub(crate) fn management_score(visitor_protocol: &str, feed_source: &str) -> u8 {
    let visitor = visitor_protocol.to_lowercase();
    let feed = feed_source.to_lowercase();
    if visitor.contains("strict") && feed.contains("certified") {
        90
    } else if visitor.contains("moderate") {
        75
    } else if visitor.contains("minimal") || visitor_protocol.is_empty() {
        45
    } else {
        70
    }
}

/// Score the operation scale from the animal headcount
///
/// Larger operations carry higher density risk; boundaries are exclusive
/// (exactly 10000 animals stays in the middle band).
#[must_use]
pub(crate) fn scale_score(animal_count: u32) -> u8 {
    if animal_count > 10_000 {
        60
    } else if animal_count > 1_000 {
        75
    } else {
        90
    }
}

/// Parse an animal headcount from form text
///
/// Leading digits are taken and anything after them ignored, so
/// "500 sows" parses as 500. Empty or non-numeric input coerces to 0.
#[must_use]
pub(crate) fn parse_animal_count(raw: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}
