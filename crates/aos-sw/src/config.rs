//! CLI configuration: thin wrapper around `aos_sw_config`.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--host, --username, etc.).

use aos_sw_api::SwitchConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use aos_sw_config::{Config, Profile, config_path, load_config_or_default};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Apply CLI flag overrides on top of a profile.
fn apply_overrides(profile: &mut Profile, global: &GlobalOpts) {
    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if let Some(ref username) = global.username {
        profile.username = Some(username.clone());
    }
    if let Some(api_version) = global.api_version {
        profile.api_version = api_version;
    }
    if global.http {
        profile.https = false;
    }
    if global.verify_tls {
        profile.verify_tls = true;
    }
    if global.keep_session {
        profile.auto_logout = Some(false);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
}

/// Build a `SwitchConfig` from the config file, active profile, and flags.
///
/// Without a matching profile, `--host` alone is enough; credentials then
/// come from flags and the environment.
pub fn build_switch_config(global: &GlobalOpts) -> Result<SwitchConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let mut profile = match (cfg.profiles.get(&profile_name), &global.host) {
        (Some(profile), _) => profile.clone(),
        (None, Some(host)) => Profile::new(host.clone()),
        (None, None) if global.profile.is_some() => {
            let mut available: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available.join(", "),
            });
        }
        (None, None) => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    apply_overrides(&mut profile, global);
    tracing::debug!(profile = %profile_name, host = %profile.host, "resolved switch profile");

    Ok(aos_sw_config::profile_to_switch_config(
        &profile,
        &profile_name,
        &cfg.defaults,
    )?)
}
