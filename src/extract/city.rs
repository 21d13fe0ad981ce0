// src/extract/city.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ParsedCity;

static PAREN_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((.*?)\)").expect("paren capture regex should compile"));

// Leading whitespace (Unicode, so NBSP too) belongs to the group so "BOSTON (X)"
// collapses to "BOSTON".
static PAREN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*?\)").expect("paren removal regex should compile"));

/// Split a raw city cell such as `"Boston (Dorchester)"` into its parts.
///
/// Only the first group becomes the neighborhood, but every group is removed
/// from `city`.
pub fn parse_city(raw: &str) -> ParsedCity {
    let city_town = raw.trim().to_uppercase();

    let neighborhood = PAREN_GROUP
        .captures(&city_town)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_owned()))
        .unwrap_or_default();

    let city = PAREN_SUFFIX.replace_all(&city_town, "").into_owned();

    ParsedCity {
        city_town,
        city,
        neighborhood,
    }
}
