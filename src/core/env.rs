//! core::env
//!
//! Render-time environment: the optional analytics and site-verification
//! values that toggle markup in the root layout.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. `[integrations]` table of the config file
//! 2. Process environment (`NEXT_PUBLIC_GA_MEASUREMENT_ID`,
//!    `NEXT_PUBLIC_GOOGLE_SITE_VERIFICATION`)
//! 3. CLI flags
//!
//! Empty or whitespace-only values at any layer count as absent and do not
//! override a lower layer.

use super::config::schema::Integrations;
use super::types::MeasurementId;

/// Environment variable carrying the Google Analytics measurement ID.
pub const GA_MEASUREMENT_ID_VAR: &str = "NEXT_PUBLIC_GA_MEASUREMENT_ID";

/// Environment variable carrying the Google Search Console verification token.
pub const SITE_VERIFICATION_VAR: &str = "NEXT_PUBLIC_GOOGLE_SITE_VERIFICATION";

/// Resolved render-time environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Enables the gtag bootstrap scripts when present.
    pub ga_measurement_id: Option<MeasurementId>,
    /// Enables the `google-site-verification` meta tag when present.
    pub site_verification: Option<String>,
}

/// Explicit overrides, usually from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub ga_measurement_id: Option<String>,
    pub site_verification: Option<String>,
}

/// Outcome of resolving the environment.
#[derive(Debug, Clone, Default)]
pub struct EnvResolution {
    pub environment: Environment,
    /// Values that were set but ignored.
    pub warnings: Vec<String>,
}

impl Environment {
    /// Resolve from config, the process environment, and overrides.
    ///
    /// Resolution never fails. A malformed measurement ID is dropped with a
    /// warning, so the gtag scripts are simply left out.
    pub fn resolve(integrations: &Integrations, overrides: &EnvOverrides) -> EnvResolution {
        Self::resolve_with(integrations, overrides, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn resolve_with<F>(
        integrations: &Integrations,
        overrides: &EnvOverrides,
        lookup: F,
    ) -> EnvResolution
    where
        F: Fn(&str) -> Option<String>,
    {
        let ga = pick([
            overrides.ga_measurement_id.clone(),
            lookup(GA_MEASUREMENT_ID_VAR),
            integrations.ga_measurement_id.clone(),
        ]);
        let verification = pick([
            overrides.site_verification.clone(),
            lookup(SITE_VERIFICATION_VAR),
            integrations.google_site_verification.clone(),
        ]);

        let mut warnings = Vec::new();
        let ga_measurement_id = ga.and_then(|id| match MeasurementId::new(&id) {
            Ok(id) => Some(id),
            Err(e) => {
                warnings.push(format!("{}, analytics disabled", e));
                None
            }
        });

        EnvResolution {
            environment: Self {
                ga_measurement_id,
                site_verification: verification,
            },
            warnings,
        }
    }

    /// An environment with nothing set.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// First non-blank candidate, trimmed.
fn pick<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
