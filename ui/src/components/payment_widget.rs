//! Externally hosted payment button with an explicit load lifecycle.
//!
//! The provider SDK script is injected once per process (a second visit
//! finds the tagged element and skips injection); the hosted button is then
//! rendered into a fixed mount element. Three observable phases: loading,
//! ready, error. There is no automatic retry — the user presses the retry
//! prompt or re-enters the view.

use dioxus::prelude::*;

use super::store_state::use_store_config;

/// Fixed mount point the provider renders into.
const MOUNT_ID: &str = "atelier-payment-button";

/// Element id tagging the SDK script so repeat visits skip injection.
#[cfg(target_family = "wasm")]
const SDK_SCRIPT_ID: &str = "atelier-payment-sdk";

#[derive(Clone, Copy, Debug, PartialEq)]
enum WidgetPhase {
    Loading,
    Ready,
    Error,
}

#[component]
pub fn PaymentWidget(fallback_link: String) -> Element {
    let config = use_store_config();
    let mut phase = use_signal(|| WidgetPhase::Loading);
    let mut attempt = use_signal(|| 0u32);

    use_effect(move || {
        // Reading the attempt counter re-runs this effect on every retry.
        let generation = *attempt.read();
        phase.set(WidgetPhase::Loading);

        let sdk_url = config.payment_sdk_url;
        let button_id = config.hosted_button_id;
        // The task is owned by this component's scope: navigating away
        // drops it, so a late SDK result never touches torn-down state.
        spawn(async move {
            let result = mount_hosted_button(sdk_url, button_id).await;
            // A retry may have started a newer attempt while this one was
            // in flight; its result wins.
            if *attempt.peek() != generation {
                return;
            }
            match result {
                Ok(()) => phase.set(WidgetPhase::Ready),
                Err(err) => {
                    tracing::error!("payment widget attempt {generation}: {err}");
                    phase.set(WidgetPhase::Error);
                }
            }
        });
    });

    let current = *phase.read();

    rsx! {
        div { class: "payment-widget",
            div { id: "{MOUNT_ID}" }
            if current == WidgetPhase::Loading {
                p { class: "widget-status", "Cargando pago seguro…" }
            }
            if current == WidgetPhase::Error {
                div { class: "widget-error",
                    p { "No se pudo cargar el botón de pago." }
                    button {
                        onclick: move |_| attempt += 1,
                        "Reintentar"
                    }
                    a {
                        class: "pay-link",
                        href: "{fallback_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Pagar con PayPal.me"
                    }
                }
            }
        }
    }
}

/// Load the SDK (idempotent) and render the hosted button into the mount
/// point. The mount point is cleared first so a failed attempt leaves no
/// partial provider DOM behind.
#[cfg(target_family = "wasm")]
async fn mount_hosted_button(sdk_url: &str, button_id: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;

    // The mount element disappears when the detail view is torn down;
    // bail out instead of rendering into a detached node.
    let mount = document
        .get_element_by_id(MOUNT_ID)
        .ok_or("mount point gone")?;
    mount.set_inner_html("");

    ensure_sdk_script(&document, sdk_url).await?;
    let paypal = wait_for_sdk_global().await?;
    render_hosted_button(&paypal, button_id).await
}

#[cfg(not(target_family = "wasm"))]
async fn mount_hosted_button(_sdk_url: &str, _button_id: &str) -> Result<(), String> {
    Err("payment widget requires a browser context".into())
}

/// Inject the provider SDK script once. A failed load removes the tag so
/// the next attempt re-injects instead of finding a dead element.
#[cfg(target_family = "wasm")]
async fn ensure_sdk_script(document: &web_sys::Document, sdk_url: &str) -> Result<(), String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    if document.get_element_by_id(SDK_SCRIPT_ID).is_some() {
        return Ok(());
    }

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| format!("create script element: {e:?}"))?
        .dyn_into()
        .map_err(|_| "script element cast".to_string())?;
    script.set_id(SDK_SCRIPT_ID);
    script.set_src(sdk_url);

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(false);
            }
        })
    };
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    document
        .head()
        .ok_or("no document head")?
        .append_child(&script)
        .map_err(|e| format!("append script: {e:?}"))?;

    // The closures must outlive the await; the handlers fire before rx resolves.
    let loaded = rx.await.unwrap_or(false);
    script.set_onload(None);
    script.set_onerror(None);
    drop(onload);
    drop(onerror);

    if loaded {
        Ok(())
    } else {
        script.remove();
        Err("SDK script failed to load".into())
    }
}

/// Poll for the SDK global. The script tag may already exist while the SDK
/// is still evaluating, so readiness is the global, not the tag.
#[cfg(target_family = "wasm")]
async fn wait_for_sdk_global() -> Result<js_sys::Object, String> {
    use wasm_bindgen::{JsCast, JsValue};

    for _ in 0..100 {
        let window = web_sys::window().ok_or("no window")?;
        if let Ok(value) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("paypal")) {
            if value.is_object() {
                return Ok(value.unchecked_into());
            }
        }
        gloo_timers::future::TimeoutFuture::new(50).await;
    }
    Err("SDK global never appeared".into())
}

/// `paypal.HostedButtons({ hostedButtonId }).render("#<mount>")`.
#[cfg(target_family = "wasm")]
async fn render_hosted_button(paypal: &js_sys::Object, button_id: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let hosted_buttons = js_sys::Reflect::get(paypal, &JsValue::from_str("HostedButtons"))
        .map_err(|_| "SDK exposes no HostedButtons".to_string())?;
    let hosted_buttons: js_sys::Function = hosted_buttons
        .dyn_into()
        .map_err(|_| "HostedButtons is not callable".to_string())?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("hostedButtonId"),
        &JsValue::from_str(button_id),
    )
    .map_err(|e| format!("set hostedButtonId: {e:?}"))?;

    let widget = hosted_buttons
        .call1(&JsValue::NULL, &options)
        .map_err(|e| format!("HostedButtons call: {e:?}"))?;

    let render = js_sys::Reflect::get(&widget, &JsValue::from_str("render"))
        .map_err(|_| "widget exposes no render".to_string())?;
    let render: js_sys::Function = render
        .dyn_into()
        .map_err(|_| "render is not callable".to_string())?;

    let result = render
        .call1(&widget, &JsValue::from_str(&format!("#{MOUNT_ID}")))
        .map_err(|e| format!("render call: {e:?}"))?;

    // render() returns a promise; a rejection there is a widget init failure.
    if let Ok(promise) = result.dyn_into::<js_sys::Promise>() {
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| format!("widget initialisation: {e:?}"))?;
    }
    Ok(())
}
