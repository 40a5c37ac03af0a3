use dioxus::prelude::*;

use atelier_common::artwork::Artwork;
use atelier_common::currency::format_price;

use super::app::Route;
use super::store_state::{use_catalog, use_store_config};

#[component]
pub fn GalleryView() -> Element {
    let catalog = use_catalog();
    let config = use_store_config();
    let nav = use_navigator();

    let artworks: Vec<Artwork> = catalog.read().artworks().to_vec();

    rsx! {
        header { class: "hero",
            img { class: "hero-avatar", src: "{config.avatar_url}", alt: "{config.brand}" }
            h1 { class: "hero-title", "{config.brand}" }
            p { class: "hero-tagline", "{config.tagline}" }
        }
        section { class: "gallery",
            if artworks.is_empty() {
                p { class: "empty-state", "No hay obras disponibles por ahora." }
            } else {
                {artworks.into_iter().map(|art| {
                    let id = art.id.clone();
                    let price_str = format_price(art.price_cents);
                    rsx! {
                        div {
                            class: "gallery-card",
                            key: "{art.id}",
                            onclick: move |_| { nav.push(Route::Artwork { id: id.0.clone() }); },
                            div { class: "gallery-preview",
                                img { src: "{art.preview_url}", alt: "{art.title}" }
                                span { class: "preview-badge", "Preview" }
                                span { class: "card-cta", "Ver Detalle →" }
                            }
                            div { class: "gallery-caption",
                                div {
                                    span { class: "category", "{art.category}" }
                                    h3 { "{art.title}" }
                                }
                                span { class: "price", "{price_str}" }
                            }
                        }
                    }
                })}
            }
        }
        section { id: "servicios", class: "commissions",
            span { class: "commissions-kicker", "Proyectos Especiales" }
            h2 { "Comisiones" }
            a {
                class: "commissions-contact",
                href: "mailto:{config.contact_email}",
                "Contactar por Email"
            }
        }
    }
}
