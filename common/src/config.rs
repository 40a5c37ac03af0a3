/// Static storefront configuration.
///
/// A single built-in profile; the admin secret, hosted button id and SDK
/// address can be overridden at compile time via `ATELIER_ADMIN_SECRET`,
/// `ATELIER_BUTTON_ID` and `ATELIER_SDK_URL`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub avatar_url: &'static str,
    /// PayPal.me handle used by the link-based checkout.
    pub merchant_handle: &'static str,
    /// Fixed hosted-button id rendered by the payment widget.
    pub hosted_button_id: &'static str,
    /// Provider SDK script, injected once per process.
    pub payment_sdk_url: &'static str,
    /// WhatsApp number for the manual payment-confirmation hand-off.
    pub contact_number: &'static str,
    pub contact_email: &'static str,
    pub admin_secret: &'static str,
}

impl StoreConfig {
    pub fn load() -> Self {
        Self {
            brand: "amy.custom",
            tagline: "Ilustración digital con alma.",
            avatar_url: "https://pazjones.sirv.com/amy/avatar.webp",
            merchant_handle: "amycustom",
            hosted_button_id: option_env!("ATELIER_BUTTON_ID").unwrap_or("XGDEUSSYBR3Q6"),
            payment_sdk_url: option_env!("ATELIER_SDK_URL").unwrap_or(
                "https://www.paypal.com/sdk/js?client-id=sb&components=hosted-buttons&currency=USD",
            ),
            contact_number: "56979518383",
            contact_email: "amandajones.arts@gmail.com",
            admin_secret: option_env!("ATELIER_ADMIN_SECRET").unwrap_or("@Negrita2000"),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_complete() {
        let config = StoreConfig::load();
        assert!(!config.brand.is_empty());
        assert!(!config.merchant_handle.is_empty());
        assert!(!config.hosted_button_id.is_empty());
        assert!(!config.contact_number.is_empty());
        assert!(!config.admin_secret.is_empty());
        assert!(config.payment_sdk_url.starts_with("https://"));
    }
}
