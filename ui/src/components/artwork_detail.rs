use dioxus::prelude::*;

use atelier_common::artwork::ArtworkId;
use atelier_common::currency::format_price;
use atelier_common::payment::{confirmation_link, payment_link};

use super::app::Route;
use super::payment_widget::PaymentWidget;
use super::store_state::{use_catalog, use_store_config};

#[component]
pub fn ArtworkDetail(artwork_id: String) -> Element {
    let catalog = use_catalog();
    let config = use_store_config();
    let nav = use_navigator();

    // An unknown id is an expected state, not an error: render the
    // not-found view and load no payment widget.
    let artwork = catalog
        .read()
        .find_by_id(&ArtworkId(artwork_id.clone()))
        .cloned();
    let Some(artwork) = artwork else {
        return rsx! {
            div { class: "not-found",
                h2 { "Obra no encontrada" }
                button {
                    onclick: move |_| { nav.push(Route::Home {}); },
                    "Volver a la colección"
                }
            }
        };
    };

    let price_str = format_price(artwork.price_cents);
    let pay_link = payment_link(&config, &artwork);
    let confirm_link = confirmation_link(&config, &artwork);

    rsx! {
        div { class: "artwork-detail",
            button {
                class: "back-link",
                onclick: move |_| { nav.go_back(); },
                "‹ Volver a la colección"
            }
            div { class: "detail-grid",
                div { class: "detail-preview",
                    img { src: "{artwork.preview_url}", alt: "{artwork.title}" }
                    div { class: "watermark-overlay",
                        span { class: "watermark-brand", "AMY CUSTOM" }
                        span { class: "watermark-badge", "Protección Visual" }
                    }
                }
                div { class: "detail-info",
                    span { class: "category", "{artwork.category}" }
                    h2 { class: "detail-title", "{artwork.title}" }
                    p { class: "detail-description", "{artwork.description}" }
                    p { class: "detail-meta",
                        "{artwork.year} • {artwork.file_type}"
                        if let Some(ref technique) = artwork.technique {
                            " • {technique}"
                        }
                    }
                    div { class: "price-block",
                        span { class: "price-label", "Precio del archivo" }
                        span { class: "price-large", "{price_str}" }
                    }
                    div { class: "checkout-steps",
                        div { class: "checkout-step",
                            span { class: "step-label", "1. Pagar con PayPal" }
                            PaymentWidget { fallback_link: pay_link }
                        }
                        div { class: "checkout-step",
                            span { class: "step-label", "2. Confirmar en WhatsApp" }
                            a {
                                class: "confirm-link",
                                href: "{confirm_link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Enviar comprobante"
                            }
                        }
                    }
                    div { class: "purchase-note",
                        span { class: "purchase-note-title", "Compra Protegida" }
                        p {
                            "Proceso: realiza el pago y luego presiona confirmar para "
                            "enviarme tu comprobante. Te enviaré el archivo original de "
                            "alta resolución por este mismo chat."
                        }
                    }
                }
            }
        }
    }
}
