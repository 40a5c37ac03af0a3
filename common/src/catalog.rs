use chrono::{Datelike, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::artwork::{Artwork, ArtworkId, NewArtwork};
use crate::seed;

/// Length of generated id tokens. 62^12 possible values, far beyond any
/// plausible catalog size, so no uniqueness scan is performed on insert.
const ID_LEN: usize = 12;

/// The authoritative ordered collection of artwork listings.
///
/// Newest listings come first: `add` prepends. The catalog is the single
/// source of truth for every view; components hold at most a read-only
/// borrow or a single [`ArtworkId`]. Nothing is persisted — a fresh process
/// starts again from the seed list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the fixed seed listings.
    pub fn seeded() -> Self {
        Self {
            artworks: seed::seed_artworks(),
        }
    }

    /// All listings, newest first.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Insert a new listing at the front of the catalog and return it.
    ///
    /// Omitted or blank fields fall back to placeholder defaults, so this
    /// always succeeds. The year placeholder is the current year.
    pub fn add(&mut self, new: NewArtwork) -> Artwork {
        let now = Utc::now();
        let artwork = Artwork {
            id: generate_id(),
            title: non_blank_or(new.title, "Untitled"),
            description: non_blank_or(new.description, "High quality digital illustration."),
            year: non_blank_or(new.year, &now.year().to_string()),
            category: non_blank_or(new.category, "Misc"),
            technique: new.technique.filter(|t| !t.trim().is_empty()),
            price_cents: new.price_cents.unwrap_or(0),
            preview_url: new.preview_url.unwrap_or_default(),
            high_res_url: new.high_res_url.filter(|u| !u.trim().is_empty()),
            file_type: non_blank_or(new.file_type, "TIF"),
            created_at: now,
        };
        self.artworks.insert(0, artwork.clone());
        artwork
    }

    /// Remove the listing with the given id.
    ///
    /// Returns whether a removal occurred; an unknown id is a no-op.
    pub fn remove(&mut self, id: &ArtworkId) -> bool {
        let before = self.artworks.len();
        self.artworks.retain(|a| a.id != *id);
        self.artworks.len() < before
    }

    /// Look up a listing by id. Absence is a normal outcome.
    pub fn find_by_id(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == *id)
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback.to_string(),
    }
}

fn generate_id() -> ArtworkId {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect();
    ArtworkId(token)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn full_input() -> NewArtwork {
        NewArtwork {
            title: Some("Atardecer".into()),
            description: Some("Cielo sobre el mar.".into()),
            year: Some("2024".into()),
            category: Some("Paisajes".into()),
            technique: Some("Acuarela".into()),
            price_cents: Some(2500),
            preview_url: Some("https://example.com/preview.jpg".into()),
            high_res_url: Some("https://example.com/full.tif".into()),
            file_type: Some("PNG".into()),
        }
    }

    #[test]
    fn add_applies_defaults_for_omitted_fields() {
        let mut catalog = Catalog::new();
        let art = catalog.add(NewArtwork::default());

        assert!(!art.title.is_empty());
        assert_eq!(art.title, "Untitled");
        assert_eq!(art.price_cents, 0);
        assert_eq!(art.category, "Misc");
        assert_eq!(art.year, Utc::now().year().to_string());
        assert_eq!(art.file_type, "TIF");
        assert!(art.preview_url.is_empty());
        assert!(art.high_res_url.is_none());
        assert!(art.technique.is_none());
        assert_eq!(art.id.0.len(), ID_LEN);
    }

    #[test]
    fn add_treats_blank_fields_as_omitted() {
        let mut catalog = Catalog::new();
        let art = catalog.add(NewArtwork {
            title: Some("   ".into()),
            high_res_url: Some("".into()),
            ..NewArtwork::default()
        });

        assert_eq!(art.title, "Untitled");
        assert!(art.high_res_url.is_none());
    }

    #[test]
    fn add_preserves_provided_fields() {
        let mut catalog = Catalog::new();
        let art = catalog.add(full_input());

        assert_eq!(art.title, "Atardecer");
        assert_eq!(art.price_cents, 2500);
        assert_eq!(art.technique.as_deref(), Some("Acuarela"));
        assert_eq!(art.high_res_url.as_deref(), Some("https://example.com/full.tif"));
        assert_eq!(art.file_type, "PNG");
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut catalog = Catalog::new();
        catalog.add(NewArtwork {
            title: Some("first".into()),
            ..NewArtwork::default()
        });
        catalog.add(NewArtwork {
            title: Some("second".into()),
            ..NewArtwork::default()
        });

        assert_eq!(catalog.artworks()[0].title, "second");
        assert_eq!(catalog.artworks()[1].title, "first");
    }

    #[test]
    fn ids_stay_unique_across_adds() {
        let mut catalog = Catalog::new();
        for _ in 0..100 {
            catalog.add(NewArtwork::default());
        }

        let ids: HashSet<_> = catalog.artworks().iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(catalog.len(), 100);
    }

    #[test]
    fn size_tracks_adds_and_removes() {
        let mut catalog = Catalog::new();
        let a = catalog.add(NewArtwork::default());
        let b = catalog.add(NewArtwork::default());
        catalog.add(NewArtwork::default());
        assert_eq!(catalog.len(), 3);

        assert!(catalog.remove(&a.id));
        assert!(catalog.remove(&b.id));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut catalog = Catalog::seeded();
        let snapshot = catalog.clone();

        assert!(!catalog.remove(&ArtworkId("does-not-exist".into())));
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn find_by_id_after_add_and_remove() {
        let mut catalog = Catalog::new();
        let art = catalog.add(full_input());

        let found = catalog.find_by_id(&art.id).expect("just added");
        assert_eq!(*found, art);

        assert!(catalog.remove(&art.id));
        assert!(catalog.find_by_id(&art.id).is_none());
        assert!(!catalog.remove(&art.id));
    }

    #[test]
    fn find_by_id_on_unknown_id_is_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.find_by_id(&ArtworkId("does-not-exist".into())).is_none());
    }

    #[test]
    fn seeded_catalog_contains_fixed_listings() {
        let catalog = Catalog::seeded();
        assert!(!catalog.is_empty());
        assert!(catalog.find_by_id(&ArtworkId("navidad-2025".into())).is_some());
    }
}
