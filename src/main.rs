use std::process::ExitCode;

use anyhow::Result;
use pwvault::config::AppConfig;
use pwvault::logging::{LogConfig, init_logging};
use pwvault::shell::history::HistoryConfig;
use pwvault::shell::{Shell, ShellConfig};
use pwvault::vault::Vault;
use pwvault::wordlist::WordSource;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = AppConfig::resolve()?;
    init_logging(&LogConfig::new(config.log_path.clone()))?;

    let mut vault = Vault::new();
    vault.set_db_path(config.db_path.clone());

    println!("+++++++++ Welcome to your password manager +++++++++");

    if vault.is_new_user() {
        let master = rpassword::prompt_password("Set master password: ")?;
        if master.trim().is_empty() {
            eprintln!("Error: master password cannot be empty");
            return Ok(ExitCode::FAILURE);
        }
        vault.setup_new_user(&master)?;
        println!("Master password set");
    } else if !unlock(&mut vault)? {
        println!("No tries left. System exits.");
        return Ok(ExitCode::FAILURE);
    }

    let words = load_words(&config);

    let shell = Shell::with_config(ShellConfig {
        history: HistoryConfig::new(config.history_path.clone()),
        show_welcome: true,
    });

    let mut store = vault.take_store();
    shell.run_with_save(&mut store, &words, |store| vault.save_store(store))?;

    vault.lock();
    Ok(ExitCode::SUCCESS)
}

/// Prompts for the master password, allowing three attempts.
fn unlock(vault: &mut Vault) -> Result<bool> {
    for tries_left in (0..3).rev() {
        let master = rpassword::prompt_password("Password: ")?;
        if vault.validate_master_password(&master)? {
            return Ok(true);
        }
        if tries_left > 0 {
            println!("Password not correct. You have {} tries left.", tries_left);
        }
    }
    Ok(false)
}

/// Loads the configured word list, falling back to the built-in vocabulary.
fn load_words(config: &AppConfig) -> WordSource {
    if config.wordlist_path.exists() {
        match WordSource::load(&config.wordlist_path, config.wordlist_column) {
            Ok(words) => {
                log::info!(
                    "Loaded {} words from {}",
                    words.len(),
                    config.wordlist_path.display()
                );
                return words;
            }
            Err(e) => {
                log::warn!(
                    "Failed to load word list {}: {}; using built-in vocabulary",
                    config.wordlist_path.display(),
                    e
                );
            }
        }
    } else {
        log::info!(
            "No word list at {}; using built-in vocabulary",
            config.wordlist_path.display()
        );
    }
    WordSource::builtin()
}
