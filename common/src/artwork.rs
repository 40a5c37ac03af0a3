use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique artwork identifier (random token assigned on add).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtworkId(pub String);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable digital illustration listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    /// Display string, not necessarily a valid calendar year.
    pub year: String,
    pub category: String,
    pub technique: Option<String>,
    /// Price in US cents.
    pub price_cents: u64,
    /// Low-resolution watermarked preview, safe to show anywhere.
    pub preview_url: String,
    /// The deliverable full-resolution file. Only the admin panel may
    /// reference this; public views must never render or link it.
    pub high_res_url: Option<String>,
    /// Display string describing the deliverable format, e.g. "TIF".
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

/// Partial input for creating a listing.
///
/// Every omitted field gets a placeholder default when the catalog inserts
/// the record; see [`crate::catalog::Catalog::add`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewArtwork {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub category: Option<String>,
    pub technique: Option<String>,
    pub price_cents: Option<u64>,
    pub preview_url: Option<String>,
    pub high_res_url: Option<String>,
    pub file_type: Option<String>,
}
