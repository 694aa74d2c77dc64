// Endpoints are baked in at build time, e.g. `AIQUA_API_URL=https://... trunk build --release`.

#[cfg(debug_assertions)]
pub fn get_pricing_api_url() -> &'static str {
    option_env!("AIQUA_API_URL").unwrap_or("http://localhost:3001")
}

#[cfg(not(debug_assertions))]
pub fn get_pricing_api_url() -> &'static str {
    option_env!("AIQUA_API_URL").unwrap_or("")
}

#[cfg(debug_assertions)]
pub fn get_store_url() -> &'static str {
    option_env!("AIQUA_STORE_URL").unwrap_or("http://localhost:54321")
}

#[cfg(not(debug_assertions))]
pub fn get_store_url() -> &'static str {
    option_env!("AIQUA_STORE_URL").unwrap_or("")
}

/// Public (anon) key of the lead store.
pub fn get_store_key() -> &'static str {
    option_env!("AIQUA_STORE_KEY").unwrap_or("")
}

#[cfg(debug_assertions)]
pub fn get_checkout_url() -> &'static str {
    option_env!("AIQUA_CHECKOUT_URL").unwrap_or("http://localhost:5174")
}

#[cfg(not(debug_assertions))]
pub fn get_checkout_url() -> &'static str {
    option_env!("AIQUA_CHECKOUT_URL").unwrap_or("")
}

pub const LEADS_TABLE: &str = "Datos";

pub const WHATSAPP_NUMBER: &str = "573225100966";
pub const WHATSAPP_MESSAGE: &str =
    "Hola Tree-a, estoy interesado en la aplicación para el seguimiento de mis plantas de tratamiento.";

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}
