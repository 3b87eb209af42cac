//! Application configuration. Roles, paths, demo identity.

use crate::domain::UserIdentity;
use crate::domain::menu::DEFAULT_PRIVILEGED_ROLE;
use serde::Deserialize;

pub const DEFAULT_EXPORT_DIR: &str = "./public";
pub const DEFAULT_INITIAL_PATH: &str = "/";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Role value that unlocks the Agent Portal entry. Read from HVUT_SITE_PRIVILEGED_ROLE.
    #[serde(default)]
    pub privileged_role: Option<String>,

    /// Output directory for catalog export. Read from HVUT_SITE_EXPORT_DIR.
    #[serde(default)]
    pub export_dir: Option<String>,

    /// Simulated sign-out latency in ms for the in-memory session. Read from HVUT_SITE_SIGN_OUT_DELAY_MS.
    #[serde(default)]
    pub sign_out_delay_ms: Option<u64>,

    /// Path the router starts on. Read from HVUT_SITE_INITIAL_PATH.
    #[serde(default)]
    pub initial_path: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Demo identity used by "browse as signed-in user"
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub demo_email: Option<String>,

    #[serde(default)]
    pub demo_display_name: Option<String>,

    #[serde(default)]
    pub demo_role: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("HVUT_SITE"));
        if let Ok(path) = std::env::var("HVUT_SITE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn privileged_role_or_default(&self) -> String {
        self.privileged_role
            .clone()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRIVILEGED_ROLE.to_string())
    }

    pub fn export_dir_or_default(&self) -> String {
        self.export_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string())
    }

    /// Defaults to 0 (sign-out resolves immediately).
    pub fn sign_out_delay_ms_or_default(&self) -> u64 {
        self.sign_out_delay_ms.unwrap_or(0)
    }

    /// Falls back to `/` when unset or not absolute.
    pub fn initial_path_or_default(&self) -> String {
        self.initial_path
            .clone()
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| DEFAULT_INITIAL_PATH.to_string())
    }

    /// Identity for the signed-in demo. Email defaults to a sample driver.
    pub fn demo_identity(&self) -> UserIdentity {
        UserIdentity {
            email: self
                .demo_email
                .clone()
                .unwrap_or_else(|| "j.doe@example.com".to_string()),
            display_name: self.demo_display_name.clone(),
            role: self.demo_role.clone(),
        }
    }
}
