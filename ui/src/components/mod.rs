pub mod admin_panel;
pub mod app;
pub mod artwork_detail;
pub mod gallery_view;
pub mod payment_widget;
pub mod store_state;
