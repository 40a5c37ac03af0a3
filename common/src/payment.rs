use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::artwork::Artwork;
use crate::config::StoreConfig;
use crate::currency::format_link_amount;

/// Direct payment deep link: `https://www.paypal.me/<handle>/<amount>`.
///
/// The trailing segment is the bare amount — no currency symbol, trailing
/// zeros trimmed (see [`format_link_amount`]). Opened in a new browsing
/// context; nothing here verifies that a payment happened.
pub fn payment_link(config: &StoreConfig, artwork: &Artwork) -> String {
    format!(
        "https://www.paypal.me/{}/{}",
        config.merchant_handle,
        format_link_amount(artwork.price_cents)
    )
}

/// Pre-filled message the buyer sends the seller after paying, with the
/// uppercased title and the paid amount interpolated.
pub fn confirmation_message(artwork: &Artwork) -> String {
    format!(
        "¡Hola Amy! Acabo de realizar el pago de US${} por la obra \"{}\". \
         Aquí adjunto mi comprobante para recibir el archivo digital.",
        format_link_amount(artwork.price_cents),
        artwork.title.to_uppercase()
    )
}

/// Deep link opening the seller's chat with [`confirmation_message`]
/// pre-filled. This is a human hand-off, not a programmatic confirmation.
pub fn confirmation_link(config: &StoreConfig, artwork: &Artwork) -> String {
    let message = confirmation_message(artwork);
    let text = utf8_percent_encode(&message, NON_ALPHANUMERIC);
    format!("https://wa.me/{}?text={}", config.contact_number, text)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::artwork::ArtworkId;
    use crate::seed::seed_artworks;

    fn artwork_priced(price_cents: u64) -> Artwork {
        Artwork {
            id: ArtworkId("test-art".into()),
            title: "Dulce Navidad".into(),
            description: "desc".into(),
            year: "2025".into(),
            category: "Arte en dibujos".into(),
            technique: None,
            price_cents,
            preview_url: "".into(),
            high_res_url: None,
            file_type: "TIF".into(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    #[test]
    fn payment_link_for_seeded_artwork_ends_in_bare_amount() {
        let config = StoreConfig::load();
        let seeded = seed_artworks();
        let navidad = seeded
            .iter()
            .find(|a| a.id.0 == "navidad-2025")
            .expect("seed listing present");
        assert_eq!(navidad.price_cents, 1000);

        let link = payment_link(&config, navidad);
        assert_eq!(link, "https://www.paypal.me/amycustom/10");
        assert!(link.ends_with("/10"));
    }

    #[test]
    fn payment_link_keeps_significant_fraction_digits() {
        let config = StoreConfig::load();
        assert!(payment_link(&config, &artwork_priced(1050)).ends_with("/10.5"));
        assert!(payment_link(&config, &artwork_priced(1099)).ends_with("/10.99"));
    }

    #[test]
    fn confirmation_message_interpolates_title_and_amount() {
        let msg = confirmation_message(&artwork_priced(1000));
        assert!(msg.contains("US$10"));
        assert!(msg.contains("\"DULCE NAVIDAD\""));
    }

    #[test]
    fn confirmation_link_targets_the_contact_number() {
        let config = StoreConfig::load();
        let link = confirmation_link(&config, &artwork_priced(1000));
        assert!(link.starts_with("https://wa.me/56979518383?text="));
    }

    #[test]
    fn confirmation_link_is_percent_encoded() {
        let config = StoreConfig::load();
        let link = confirmation_link(&config, &artwork_priced(1000));
        let query = link.split_once("?text=").expect("query present").1;
        assert!(!query.contains(' '));
        assert!(!query.contains('"'));
        assert!(query.contains("%20"));
        assert!(query.contains("DULCE%20NAVIDAD"));
    }
}
