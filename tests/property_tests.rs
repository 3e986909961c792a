//! Property-based tests for the rendered layout and sitemap.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use repairsite::core::config::{Integrations, SiteConfig};
use repairsite::core::env::{EnvOverrides, Environment};
use repairsite::core::types::{MeasurementId, SiteUrl};
use repairsite::site::layout::{extract_json_ld, render_document};
use repairsite::site::sitemap::{sitemap, to_xml};

/// Strategy for measurement IDs in the `G-XXXXXXX` shape.
fn measurement_id() -> impl Strategy<Value = String> {
    "G-[A-Z0-9]{4,12}"
}

/// Strategy for page bodies that never contain the marker strings.
fn body() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 <>/=\"]{0,80}".prop_filter("no script markers", |s| {
        !s.contains("gtag") && !s.contains("script") && !s.contains("google")
    })
}

/// Strategy for http(s) base URLs.
fn base_url() -> impl Strategy<Value = String> {
    ("https?", "[a-z]{1,12}", "(com|us|org|test)")
        .prop_map(|(scheme, host, tld)| format!("{}://{}.{}", scheme, host, tld))
}

fn env_with(id: Option<&str>, token: Option<&str>) -> Environment {
    Environment {
        ga_measurement_id: id.map(|id| MeasurementId::new(id).unwrap()),
        site_verification: token.map(str::to_string),
    }
}

proptest! {
    #[test]
    fn no_measurement_id_means_no_gtag(children in body()) {
        let html = render_document(&SiteConfig::default(), &Environment::empty(), &children);
        prop_assert!(!html.contains("googletagmanager"));
        prop_assert!(!html.contains("gtag("));
    }

    #[test]
    fn measurement_id_yields_loader_and_config(id in measurement_id(), children in body()) {
        let html = render_document(&SiteConfig::default(), &env_with(Some(&id), None), &children);
        let loader = format!("https://www.googletagmanager.com/gtag/js?id={}", id);
        let config = format!("gtag('config', '{}')", id);
        prop_assert!(html.contains(&loader));
        prop_assert!(html.contains(&config));
    }

    #[test]
    fn no_token_means_no_verification_meta(id in proptest::option::of(measurement_id())) {
        let html = render_document(&SiteConfig::default(), &env_with(id.as_deref(), None), "");
        prop_assert!(!html.contains("google-site-verification"));
    }

    #[test]
    fn json_ld_always_present_and_valid(
        id in proptest::option::of(measurement_id()),
        token in proptest::option::of("[a-zA-Z0-9_-]{1,30}"),
        children in body(),
    ) {
        let site = SiteConfig::default();
        let html = render_document(&site, &env_with(id.as_deref(), token.as_deref()), &children);

        let payload = extract_json_ld(&html).expect("json-ld script missing");
        let v: serde_json::Value = serde_json::from_str(payload).unwrap();
        prop_assert_eq!(&v["@context"], "https://schema.org");
        prop_assert_eq!(&v["@type"], "LocalBusiness");
        prop_assert_eq!(v["name"].as_str(), Some(site.business.name.as_str()));
        prop_assert_eq!(v["telephone"].as_str(), Some(site.business.telephone.as_str()));
        prop_assert_eq!(
            v["address"]["addressLocality"].as_str(),
            Some(site.business.address.locality.as_str())
        );
        let offered: Vec<&str> = v["hasOfferCatalog"]["itemListElement"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|offer| offer["itemOffered"]["name"].as_str())
            .collect();
        prop_assert_eq!(offered, site.business.services.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn business_name_survives_into_json_ld(name in "[ -~]{1,40}") {
        let mut site = SiteConfig::default();
        site.business.name = name.clone();
        let html = render_document(&site, &Environment::empty(), "");

        let payload = extract_json_ld(&html).expect("json-ld script missing");
        prop_assert!(!payload.contains("</"));
        let v: serde_json::Value = serde_json::from_str(payload).unwrap();
        prop_assert_eq!(v["name"].as_str(), Some(name.as_str()));
    }

    #[test]
    fn rendering_is_deterministic(id in proptest::option::of(measurement_id()), children in body()) {
        let site = SiteConfig::default();
        let env = env_with(id.as_deref(), None);
        prop_assert_eq!(
            render_document(&site, &env, &children),
            render_document(&site, &env, &children)
        );
    }

    #[test]
    fn sitemap_has_one_weekly_top_entry(url in base_url(), secs in 0i64..4_000_000_000) {
        let base = SiteUrl::new(url.clone()).unwrap();
        let now = Utc.timestamp_opt(secs, 0).unwrap();
        let entries = sitemap(&base, now);

        prop_assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        prop_assert_eq!(&entry.url, &url);
        prop_assert_eq!(entry.last_modified, now);
        prop_assert_eq!(entry.change_frequency.as_str(), "weekly");
        prop_assert_eq!(entry.priority.value(), 1.0);

        let xml = to_xml(&entries);
        prop_assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn blank_values_resolve_to_absent(blank in "[ \t]{0,4}") {
        let integrations = Integrations {
            ga_measurement_id: Some(blank.clone()),
            google_site_verification: Some(blank.clone()),
        };
        let overrides = EnvOverrides {
            ga_measurement_id: Some(blank.clone()),
            site_verification: Some(blank),
        };
        let env = Environment::resolve_with(&integrations, &overrides, |_| None).environment;
        prop_assert!(env.ga_measurement_id.is_none());
        prop_assert!(env.site_verification.is_none());
    }
}
