// src/types.rs

use serde::{Deserialize, Serialize};

/// One data row of the walk audit sheet.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Default)]
pub struct WalkAudit {
    pub city_town: String,
    pub city: String,
    pub neighborhood: String,
    pub year: String,
    pub summary: String,
    pub long_term_recommendations: String,
    pub short_term_recommendations: String,
    pub streets_intersections: String,
    pub themes: String,
    pub view: String,
    pub facilitator_author: String,
    pub organizer_lead_organization: String,
}

/// Output of splitting the raw city cell.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct ParsedCity {
    /// Trimmed, upper-cased cell text.
    pub city_town: String,
    /// `city_town` without any parenthesized groups.
    pub city: String,
    /// Inside of the first parenthesized group, or empty.
    pub neighborhood: String,
}
