//! site::layout
//!
//! The root layout: the HTML shell every page is rendered into.
//!
//! # Head order
//!
//! 1. charset and viewport
//! 2. metadata (title, description, Open Graph, Twitter, icons)
//! 3. site verification, if a token is set
//! 4. fonts
//! 5. LocalBusiness JSON-LD (always)
//! 6. gtag scripts, if a measurement ID is set
//!
//! Rendering is pure: the same site, environment and children always give
//! the same document.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::jsonld::LocalBusiness;
use super::{analytics, fonts};
use crate::core::config::SiteConfig;
use crate::core::env::Environment;

/// Wrap `children` in the full document shell.
pub fn render(site: &SiteConfig, env: &Environment, children: Markup) -> Markup {
    let business = LocalBusiness::from_profile(&site.business);

    html! {
        (DOCTYPE)
        html lang=(site.metadata.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (site.metadata.render())
                (analytics::render_site_verification(env.site_verification.as_deref()))
                (fonts::render_head(&site.fonts))
                script type="application/ld+json" {
                    (PreEscaped(business.to_script_json()))
                }
                (analytics::render_gtag(env.ga_measurement_id.as_ref()))
            }
            body class=(fonts::body_class(&site.fonts)) {
                (children)
            }
        }
    }
}

/// Render a document around pre-rendered HTML `children`, inserted verbatim.
pub fn render_document(site: &SiteConfig, env: &Environment, children: &str) -> String {
    render(site, env, PreEscaped(children.to_string())).into_string()
}

/// Pull the JSON-LD payload back out of a rendered document.
///
/// Returns `None` if the document has no structured-data script.
pub fn extract_json_ld(document: &str) -> Option<&str> {
    const OPEN: &str = r#"<script type="application/ld+json">"#;
    let start = document.find(OPEN)? + OPEN.len();
    let len = document[start..].find("</script>")?;
    Some(&document[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MeasurementId;

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    fn with_ga(id: &str) -> Environment {
        Environment {
            ga_measurement_id: Some(MeasurementId::new(id).unwrap()),
            site_verification: None,
        }
    }

    #[test]
    fn document_shell() {
        let html = render_document(&site(), &Environment::empty(), "<main>hi</main>");
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.ends_with("<main>hi</main></body></html>"));
    }

    #[test]
    fn body_carries_font_classes() {
        let html = render_document(&site(), &Environment::empty(), "");
        assert!(html.contains(
            r#"<body class="font-app-body font-app-display font-app-mono antialiased">"#
        ));
    }

    #[test]
    fn no_env_no_optional_markup() {
        let html = render_document(&site(), &Environment::empty(), "");
        assert!(!html.contains("googletagmanager"));
        assert!(!html.contains("gtag("));
        assert!(!html.contains("google-site-verification"));
        assert!(html.contains(r#"<script type="application/ld+json">"#));
    }

    #[test]
    fn analytics_id_enables_gtag() {
        let html = render_document(&site(), &with_ga("G-TEST123"), "");
        assert!(html.contains("gtag/js?id=G-TEST123"));
        assert!(html.contains("gtag('config', 'G-TEST123')"));
    }

    #[test]
    fn verification_token_enables_meta() {
        let env = Environment {
            ga_measurement_id: None,
            site_verification: Some("verify-me".to_string()),
        };
        let html = render_document(&site(), &env, "");
        assert!(html.contains(r#"<meta name="google-site-verification" content="verify-me">"#));
        assert!(!html.contains("googletagmanager"));
    }

    #[test]
    fn json_ld_round_trips_from_document() {
        let html = render_document(&site(), &Environment::empty(), "");
        let payload = extract_json_ld(&html).unwrap();
        let v: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(v["name"], "Elite Home Repairs");
    }

    #[test]
    fn json_ld_precedes_gtag() {
        let html = render_document(&site(), &with_ga("G-ORDER"), "");
        let ld = html.find("application/ld+json").unwrap();
        let gtag = html.find("googletagmanager").unwrap();
        assert!(ld < gtag);
    }

    #[test]
    fn font_stylesheet_is_html_escaped() {
        let html = render_document(&site(), &Environment::empty(), "");
        assert!(html.contains("family=Barlow:wght@400;500;600;700;800&amp;family=Barlow+Condensed"));
    }

    #[test]
    fn extract_json_ld_missing() {
        assert!(extract_json_ld("<html></html>").is_none());
    }
}
