use dioxus::prelude::*;

use atelier_common::auth::AdminSession;
use atelier_common::catalog::Catalog;
use atelier_common::config::StoreConfig;

/// The catalog signal provided at the app root — the single source of
/// truth for every view. All mutations go through `write()` on this
/// signal from the admin panel; everything else reads.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// The admin login gate, also provided at the app root.
pub fn use_admin_session() -> Signal<AdminSession> {
    use_context::<Signal<AdminSession>>()
}

/// Static store profile (brand, payment handles, contact details).
pub fn use_store_config() -> StoreConfig {
    use_context::<StoreConfig>()
}
