// Small helpers shared across components.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::model::ContactMessage;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Smooth-scrolls the window to the given vertical offset.
pub fn scroll_to_y(top: f64) {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn set_timeout(cb: &Closure<dyn FnMut()>, ms: i32) -> i32 {
    web_sys::window()
        .and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                ms,
            )
            .ok()
        })
        .unwrap_or(0)
}

pub fn clear_timeout(id: i32) {
    if let Some(win) = web_sys::window() {
        win.clear_timeout_with_handle(id);
    }
}

/// Minimal `local@domain.tld` shape check, same strictness as the usual
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` pattern.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && !domain.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        _ => false,
    }
}

/// Builds the `mailto:` URL for a submitted contact message. Subject and
/// body go through `encodeURIComponent`.
pub fn mailto_href(to: &str, msg: &ContactMessage) -> String {
    let subject: String = js_sys::encode_uri_component(&msg.subject()).into();
    let body: String = js_sys::encode_uri_component(&msg.body()).into();
    format!("mailto:{to}?subject={subject}&body={body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("no@tld"));
        assert!(!is_valid_email("sp ace@mail.com"));
        assert!(!is_valid_email("dot@trailing."));
    }
}
