//! Password-gated management view: add and remove listings, nothing more.
//! The gate is cosmetic (client-side comparison), so this panel must never
//! be described as a security boundary.

use dioxus::prelude::*;

use atelier_common::artwork::NewArtwork;
use atelier_common::auth::AuthDenied;
use atelier_common::currency::{format_price, parse_price};

use super::store_state::{use_admin_session, use_catalog};

#[component]
pub fn AdminPanel() -> Element {
    let session = use_admin_session();
    if session.read().is_logged_in() {
        rsx! { AdminDashboard {} }
    } else {
        rsx! { AdminLogin {} }
    }
}

#[component]
fn AdminLogin() -> Element {
    let mut session = use_admin_session();
    let mut password = use_signal(String::new);
    let mut denied = use_signal(|| false);

    let submit = move |_| {
        let secret = password.read().clone();
        match session.write().submit(&secret) {
            Ok(()) => denied.set(false),
            Err(AuthDenied) => {
                denied.set(true);
                password.set(String::new());
            }
        }
    };

    rsx! {
        div { class: "admin-login",
            input {
                r#type: "password",
                placeholder: "Contraseña",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            if *denied.read() {
                span { class: "field-error", "Contraseña incorrecta" }
            }
            button { onclick: submit, "Entrar" }
        }
    }
}

#[component]
fn AdminDashboard() -> Element {
    let mut session = use_admin_session();
    let mut catalog = use_catalog();

    let artworks = catalog.read().artworks().to_vec();
    let listing_count = artworks.len();

    rsx! {
        div { class: "admin-panel",
            div { class: "admin-header",
                h2 { "Panel Admin" }
                button {
                    class: "logout-btn",
                    onclick: move |_| session.write().logout(),
                    "Cerrar sesión"
                }
            }
            div { class: "admin-grid",
                AddArtworkForm {}
                div { class: "admin-listing",
                    h3 { "Obras publicadas ({listing_count})" }
                    if artworks.is_empty() {
                        p { class: "empty-state", "No hay obras publicadas." }
                    } else {
                        table {
                            thead {
                                tr {
                                    th { "Obra" }
                                    th { "Precio" }
                                    th { "Publicada" }
                                    th { "Acción" }
                                }
                            }
                            tbody {
                                {artworks.into_iter().map(|art| {
                                    let id = art.id.clone();
                                    let price_str = format_price(art.price_cents);
                                    let created = art.created_at.format("%d %b %Y").to_string();
                                    rsx! {
                                        tr { key: "{art.id}",
                                            td { class: "admin-title", "{art.title}" }
                                            td { "{price_str}" }
                                            td { "{created}" }
                                            td {
                                                button {
                                                    class: "remove-btn",
                                                    onclick: move |_| { catalog.write().remove(&id); },
                                                    "Eliminar"
                                                }
                                            }
                                        }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AddArtworkForm() -> Element {
    let mut catalog = use_catalog();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut technique = use_signal(String::new);
    let mut preview_url = use_signal(String::new);
    let mut high_res_url = use_signal(String::new);
    let mut file_type = use_signal(String::new);

    let can_submit = use_memo(move || !title.read().trim().is_empty());

    rsx! {
        div { class: "add-artwork-form",
            h3 { "Añadir obra" }
            div { class: "form-group",
                label { "Título:" }
                input {
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Precio (USD):" }
                input {
                    r#type: "text",
                    placeholder: "10.00",
                    value: "{price}",
                    oninput: move |evt| price.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Año:" }
                input {
                    r#type: "text",
                    value: "{year}",
                    oninput: move |evt| year.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Categoría:" }
                input {
                    r#type: "text",
                    value: "{category}",
                    oninput: move |evt| category.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Técnica:" }
                input {
                    r#type: "text",
                    value: "{technique}",
                    oninput: move |evt| technique.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Descripción:" }
                textarea {
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "URL preview:" }
                input {
                    r#type: "text",
                    value: "{preview_url}",
                    oninput: move |evt| preview_url.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "URL alta resolución:" }
                input {
                    r#type: "text",
                    value: "{high_res_url}",
                    oninput: move |evt| high_res_url.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Formato (TIF, PNG...):" }
                input {
                    r#type: "text",
                    value: "{file_type}",
                    oninput: move |evt| file_type.set(evt.value()),
                }
            }
            button {
                disabled: !can_submit(),
                onclick: move |_| {
                    let new = NewArtwork {
                        title: non_blank(&title.read()),
                        description: non_blank(&description.read()),
                        year: non_blank(&year.read()),
                        category: non_blank(&category.read()),
                        technique: non_blank(&technique.read()),
                        price_cents: Some(parse_price(&price.read())),
                        preview_url: non_blank(&preview_url.read()),
                        high_res_url: non_blank(&high_res_url.read()),
                        file_type: non_blank(&file_type.read()),
                    };
                    catalog.write().add(new);

                    title.set(String::new());
                    description.set(String::new());
                    price.set(String::new());
                    year.set(String::new());
                    category.set(String::new());
                    technique.set(String::new());
                    preview_url.set(String::new());
                    high_res_url.set(String::new());
                    file_type.set(String::new());
                },
                "Publicar"
            }
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
