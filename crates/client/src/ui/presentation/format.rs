//! Small display formatters shared across components

use lorecrafter_domain::{Description, MapPoint};
use lorecrafter_shared::responses::HealthResponse;

/// Marker popup excerpt length, in characters
const POPUP_EXCERPT_CHARS: usize = 100;

/// `[X: 120, Y: 455]` for placed locations, `Not Placed` otherwise
pub fn coords_label(coords: Option<MapPoint>) -> String {
    match coords {
        Some(point) => format!(
            "[X: {}, Y: {}]",
            point.x().round() as i64,
            point.y().round() as i64
        ),
        None => "Not Placed".to_string(),
    }
}

/// Popup body under a map marker
pub fn popup_excerpt(description: &Description) -> String {
    description.excerpt(POPUP_EXCERPT_CHARS)
}

/// Header status line for a healthy backend
pub fn health_line(health: &HealthResponse) -> String {
    format!("API: {} | DB: {}", health.message, health.database)
}

/// Free-text field with a placeholder for empty values
pub fn text_or_na(text: &Description) -> &str {
    if text.is_empty() {
        "N/A"
    } else {
        text.as_str()
    }
}

/// Role line on a character card
pub fn role_label(role: &Description) -> &str {
    if role.is_empty() {
        "No role specified"
    } else {
        role.as_str()
    }
}

/// Up to two uppercased initials for the avatar disc
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
