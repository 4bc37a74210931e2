//! Configuration command handlers: init, show, path, set-token.

use dialoguer::{Confirm, Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: dialoguer::Error) -> CliError {
    let dialoguer::Error::IO(io) = e;
    CliError::Io(io)
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
        ConfigCommand::SetToken => set_token(global),
    }
}

fn profile_name(global: &GlobalOpts) -> String {
    global.profile.clone().unwrap_or_else(|| "default".into())
}

// ── init ────────────────────────────────────────────────────────────

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let name = profile_name(global);
    let mut cfg = config::load_config_or_default();

    let backend: String = Input::new()
        .with_prompt("Backend URL (e.g. https://nms.example.net/api/)")
        .interact_text()
        .map_err(prompt_err)?;

    let modes = ["token", "login"];
    let mode_idx = Select::new()
        .with_prompt("Authentication mode")
        .items(&modes)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    let auth_mode = modes[mode_idx].to_owned();

    let mut profile = config::Profile {
        backend,
        auth_mode: auth_mode.clone(),
        token: None,
        token_env: None,
        email: None,
        password: None,
        ca_cert: None,
        insecure: None,
        timeout: None,
    };

    if auth_mode == "token" {
        let token = rpassword::prompt_password("Bearer token: ")?;
        match store_secret(&name, "token", &token) {
            Ok(()) => eprintln!("Token stored in the system keyring."),
            Err(err) => {
                eprintln!("Keyring unavailable ({err}); storing token in the config file.");
                profile.token = Some(token);
            }
        }
    } else {
        let email: String = Input::new()
            .with_prompt("Technician email")
            .interact_text()
            .map_err(prompt_err)?;
        profile.email = Some(email);

        let password = rpassword::prompt_password("Password: ")?;
        match store_secret(&name, "password", &password) {
            Ok(()) => eprintln!("Password stored in the system keyring."),
            Err(err) => {
                eprintln!("Keyring unavailable ({err}); storing password in the config file.");
                profile.password = Some(password);
            }
        }
    }

    let insecure = Confirm::new()
        .with_prompt("Accept self-signed TLS certificates?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    if insecure {
        profile.insecure = Some(true);
    }

    if cfg.default_profile.is_none() {
        cfg.default_profile = Some(name.clone());
    }
    cfg.profiles.insert(name.clone(), profile);
    config::save_config(&cfg)?;

    eprintln!(
        "Profile '{name}' written to {}",
        config::config_path().display()
    );
    Ok(())
}

// ── show ────────────────────────────────────────────────────────────

fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config::load_config_or_default();

    // Never print secret material.
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("<redacted>".into());
        }
        if profile.password.is_some() {
            profile.password = Some("<redacted>".into());
        }
    }

    let rendered = toml::to_string_pretty(&cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: e.to_string(),
    })?;
    crate::output::print_output(&rendered, global.quiet);
    Ok(())
}

// ── set-token ───────────────────────────────────────────────────────

fn set_token(global: &GlobalOpts) -> Result<(), CliError> {
    let name = profile_name(global);
    let token = rpassword::prompt_password("Bearer token: ")?;

    store_secret(&name, "token", &token).map_err(|err| CliError::Validation {
        field: "keyring".into(),
        reason: format!("could not store token: {err}"),
    })?;

    eprintln!("Token stored for profile '{name}'.");
    Ok(())
}

fn store_secret(profile: &str, kind: &str, secret: &str) -> Result<(), keyring::Error> {
    keyring::Entry::new("ponctl", &format!("{profile}/{kind}"))?.set_password(secret)
}
