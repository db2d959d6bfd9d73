//! Endpoint addresses for the two dashboard requests.

/// Profile endpoint of the deployed dashboard.
pub const DEFAULT_PROFILE_URL: &str = "https://trello.vimlc.uz/get-personal-info";
/// Assessment endpoint of the deployed dashboard.
pub const DEFAULT_ASSESSMENT_URL: &str = "https://trello.vimlc.uz/knowlodge";

pub const PROFILE_URL_VAR: &str = "DOSSIER_PROFILE_URL";
pub const ASSESSMENT_URL_VAR: &str = "DOSSIER_ASSESSMENT_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub profile_url: String,
    pub assessment_url: String,
}

impl EndpointConfig {
    pub fn new(profile_url: impl Into<String>, assessment_url: impl Into<String>) -> Self {
        Self {
            profile_url: profile_url.into(),
            assessment_url: assessment_url.into(),
        }
    }

    /// Defaults, overridden per address by `DOSSIER_PROFILE_URL` /
    /// `DOSSIER_ASSESSMENT_URL`.
    ///
    /// Native builds read the variables at runtime; wasm builds have no
    /// process environment, so the values are captured at compile time.
    pub fn from_env() -> Self {
        Self::from_lookup(lookup_var)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |var: &str, fallback: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            profile_url: pick(PROFILE_URL_VAR, DEFAULT_PROFILE_URL),
            assessment_url: pick(ASSESSMENT_URL_VAR, DEFAULT_ASSESSMENT_URL),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_URL, DEFAULT_ASSESSMENT_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_var(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup_var(var: &str) -> Option<String> {
    match var {
        PROFILE_URL_VAR => option_env!("DOSSIER_PROFILE_URL").map(str::to_string),
        ASSESSMENT_URL_VAR => option_env!("DOSSIER_ASSESSMENT_URL").map(str::to_string),
        _ => None,
    }
}
