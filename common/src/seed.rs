use chrono::{DateTime, Utc};

use crate::artwork::{Artwork, ArtworkId};

/// The fixed listings a fresh catalog starts with. This stands in for a
/// backend: admin edits live in memory only and do not survive a reload.
pub fn seed_artworks() -> Vec<Artwork> {
    vec![Artwork {
        id: ArtworkId("navidad-2025".into()),
        title: "Dulce Navidad".into(),
        description: "Una pieza vibrante que captura la esencia cálida y festiva de la \
                      temporada navideña a través de trazos detallados."
            .into(),
        year: "2025".into(),
        category: "Arte en dibujos".into(),
        technique: Some("Plumones".into()),
        price_cents: 1000,
        preview_url: "https://pazjones.sirv.com/amy/navidad72dpi.jpg".into(),
        high_res_url: Some("https://pazjones.sirv.com/amy/navidad_alta300dpi.tif".into()),
        file_type: "TIF".into(),
        // 2025-11-01T00:00:00Z
        created_at: DateTime::from_timestamp(1_761_955_200, 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
    }]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let seeds = seed_artworks();
        let ids: HashSet<_> = seeds.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids.len(), seeds.len());
    }

    #[test]
    fn seed_listings_are_renderable() {
        for art in seed_artworks() {
            assert!(!art.title.is_empty());
            assert!(!art.preview_url.is_empty());
            assert!(!art.file_type.is_empty());
        }
    }
}
