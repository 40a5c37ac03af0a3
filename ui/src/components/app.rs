use dioxus::prelude::*;

use atelier_common::auth::AdminSession;
use atelier_common::catalog::Catalog;
use atelier_common::config::StoreConfig;

use super::admin_panel::AdminPanel;
use super::artwork_detail::ArtworkDetail;
use super::gallery_view::GalleryView;
use super::store_state::use_store_config;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/artwork/:id")]
    Artwork { id: String },
    #[route("/admin")]
    Admin {},
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(StoreConfig::load);
    use_context_provider(|| Signal::new(Catalog::seeded()));
    use_context_provider(move || Signal::new(AdminSession::from_config(&config)));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let config = use_store_config();
    let nav = use_navigator();
    let mut menu_open = use_signal(|| false);

    rsx! {
        div { class: "atelier-app",
            nav { class: "navbar",
                button {
                    class: "brand-logo",
                    onclick: move |_| { nav.push(Route::Home {}); },
                    "{config.brand}"
                }
                div { class: "nav-links",
                    button {
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Colección"
                    }
                    a { href: "#servicios", "Servicios" }
                    button {
                        class: "nav-admin",
                        onclick: move |_| { nav.push(Route::Admin {}); },
                        "Admin"
                    }
                }
                button {
                    class: "menu-toggle",
                    onclick: move |_| menu_open.set(true),
                    "☰"
                }
            }
            if *menu_open.read() {
                div { class: "mobile-menu",
                    div { class: "mobile-menu-header",
                        span { class: "brand-logo", "{config.brand}" }
                        button {
                            class: "menu-close",
                            onclick: move |_| menu_open.set(false),
                            "✕"
                        }
                    }
                    button {
                        onclick: move |_| {
                            menu_open.set(false);
                            nav.push(Route::Home {});
                        },
                        "Inicio"
                    }
                    a {
                        href: "#servicios",
                        onclick: move |_| menu_open.set(false),
                        "Servicios"
                    }
                    button {
                        onclick: move |_| {
                            menu_open.set(false);
                            nav.push(Route::Admin {});
                        },
                        "Admin"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
            footer { class: "site-footer",
                p { "© 2025 Amy Custom • Viña del Mar, Chile" }
            }
        }
    }
}

/// Route component: the public gallery.
#[component]
fn Home() -> Element {
    rsx! { GalleryView {} }
}

/// Route component: one artwork's detail/checkout page, by id from the URL.
#[component]
fn Artwork(id: String) -> Element {
    rsx! { ArtworkDetail { artwork_id: id } }
}

/// Route component: the password-gated admin panel.
#[component]
fn Admin() -> Element {
    rsx! { AdminPanel {} }
}
