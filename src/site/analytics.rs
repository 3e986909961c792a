//! site::analytics
//!
//! Google Analytics bootstrap and Search Console verification markup.
//! Both render to nothing when their value is absent.

use maud::{html, Markup, PreEscaped};

use crate::core::types::MeasurementId;

const GTAG_SRC: &str = "https://www.googletagmanager.com/gtag/js";

/// URL of the gtag.js loader for `id`.
pub fn gtag_src(id: &MeasurementId) -> String {
    format!("{}?id={}", GTAG_SRC, id)
}

/// Inline bootstrap that queues the `js` and `config` calls.
///
/// `MeasurementId` admits only `[A-Za-z0-9-]`, so it is safe to place
/// between single quotes here.
pub fn gtag_inline(id: &MeasurementId) -> String {
    format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{}');",
        id
    )
}

/// The two gtag scripts, or nothing.
pub fn render_gtag(id: Option<&MeasurementId>) -> Markup {
    html! {
        @if let Some(id) = id {
            script async src=(gtag_src(id)) {}
            script { (PreEscaped(gtag_inline(id))) }
        }
    }
}

/// `google-site-verification` meta tag, or nothing.
pub fn render_site_verification(token: Option<&str>) -> Markup {
    html! {
        @if let Some(token) = token {
            meta name="google-site-verification" content=(token);
        }
    }
}
