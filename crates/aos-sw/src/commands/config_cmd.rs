//! Config subcommand handlers. None of these contact the switch.

use std::io::BufRead;

use secrecy::{ExposeSecret, SecretString};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;

const REDACTED: &str = "********";

/// Replace stored secrets so `config show` never prints them.
fn redact(cfg: &mut Config) {
    for profile in cfg.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some(REDACTED.into());
        }
        if profile.cookie.is_some() {
            profile.cookie = Some(REDACTED.into());
        }
    }
}

fn read_password() -> Result<SecretString, CliError> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_owned();
    if password.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password read from stdin is empty".into(),
        });
    }
    Ok(SecretString::from(password))
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Show => {
            let mut cfg = config::load_config_or_default();
            redact(&mut cfg);
            let rendered = toml::to_string_pretty(&cfg)?;
            crate::output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::SetPassword => {
            let cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);
            let password = read_password()?;
            aos_sw_config::store_password(&profile_name, password.expose_secret())?;
            if !global.quiet {
                eprintln!("Password stored in the keyring for profile '{profile_name}'");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;

    #[test]
    fn redact_hides_password_and_cookie() {
        let mut cfg = Config::default();
        let mut profile = Profile::new("10.0.0.1");
        profile.password = Some("hunter2".into());
        profile.cookie = Some("sessionId=abc".into());
        cfg.profiles.insert("lab".into(), profile);

        redact(&mut cfg);

        let lab = &cfg.profiles["lab"];
        assert_eq!(lab.password.as_deref(), Some(REDACTED));
        assert_eq!(lab.cookie.as_deref(), Some(REDACTED));
    }

    #[test]
    fn redact_leaves_unset_secrets_alone() {
        let mut cfg = Config::default();
        cfg.profiles.insert("lab".into(), Profile::new("10.0.0.1"));
        redact(&mut cfg);
        assert!(cfg.profiles["lab"].password.is_none());
    }
}
