//! Cart-panel query-flag helpers.
//!
//! The shell opens the cart panel when the page query string carries
//! `cart=open`, and clears that flag (keeping unrelated parameters) when the
//! panel is dismissed. These helpers keep that convention in one place.

use url::form_urlencoded;

/// Query parameter that controls the cart panel.
pub const CART_PARAM: &str = "cart";
/// Value that requests the panel open.
pub const CART_OPEN: &str = "open";

/// Whether `query` (without the leading `?`) requests the cart panel open.
#[must_use]
pub fn panel_requested(query: &str) -> bool {
    form_urlencoded::parse(query.as_bytes())
        .any(|(key, value)| key == CART_PARAM && value == CART_OPEN)
}

/// Query string that opens the cart panel.
#[must_use]
pub fn open_query() -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(CART_PARAM, CART_OPEN)
        .finish()
}

/// `query` with the cart-panel flag removed and all other parameters kept.
#[must_use]
pub fn dismissed_query(query: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key != CART_PARAM {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.finish()
}
