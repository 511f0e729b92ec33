//! Module descriptor types: tracks, difficulty ratings, and the resolved
//! per-module descriptor record.
//!
//! Catalog tables carry raw string values; the enums here parse those
//! values leniently so that unknown tracks and difficulties fall back to
//! display defaults instead of failing generation.

use serde::Serialize;

// ============================================================================
// Track
// ============================================================================

/// Thematic grouping of five consecutive workshop modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Modules 1–5 in the reference curriculum.
    Fundamentals,
    /// Modules 6–10.
    Intermediate,
    /// Modules 11–15.
    Advanced,
    /// Modules 16–20.
    Enterprise,
    /// Modules 21–25.
    AiAgents,
    /// Modules 26–30.
    Mastery,
}

impl Track {
    /// Parses a catalog track value. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fundamentals" => Some(Self::Fundamentals),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "enterprise" => Some(Self::Enterprise),
            "ai-agents" => Some(Self::AiAgents),
            "mastery" => Some(Self::Mastery),
            _ => None,
        }
    }

    /// Human label used in badges and navigation.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Fundamentals => "Fundamentals",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Enterprise => "Enterprise",
            Self::AiAgents => "AI Agents",
            Self::Mastery => "Mastery",
        }
    }
}

/// Display label for a raw track value. Unknown tracks group under "General".
#[must_use]
pub fn track_display_name(value: &str) -> &'static str {
    Track::parse(value).map_or("General", Track::display_name)
}

// ============================================================================
// Difficulty
// ============================================================================

/// Difficulty rating of a module, rendered as a star badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Entry-level material, one star.
    Foundation,
    /// Hands-on application, two stars.
    Application,
    /// Expert material, three stars.
    Mastery,
}

impl Difficulty {
    /// Parses a catalog difficulty value. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "foundation" => Some(Self::Foundation),
            "application" => Some(Self::Application),
            "mastery" => Some(Self::Mastery),
            _ => None,
        }
    }

    /// Star count for the badge.
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Self::Foundation => 1,
            Self::Application => 2,
            Self::Mastery => 3,
        }
    }
}

/// Star count for a raw difficulty value. Unknown values rate one star.
#[must_use]
pub fn difficulty_stars(value: &str) -> u8 {
    Difficulty::parse(value).map_or(1, Difficulty::stars)
}

// ============================================================================
// ModuleDescriptor
// ============================================================================

/// Fully resolved descriptor for one module, assembled from the five
/// catalog tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Module number, unique within the catalog.
    pub number: u8,
    /// Raw track value from the catalog.
    pub track: String,
    /// Human-readable module name.
    pub title: String,
    /// One-sentence summary.
    pub description: String,
    /// Raw difficulty value from the catalog.
    pub difficulty: String,
    /// Estimated completion time in minutes.
    pub duration_minutes: u32,
}
