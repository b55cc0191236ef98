use crate::conf::{ConfigError, load_config};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check_config(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ ingest batch size: {}", cfg.ingest.batch_size);
            println!("✔ top paths: {}", cfg.summary.top_paths);
            println!(
                "✔ default realtime window: {} minutes",
                cfg.realtime.default_window_minutes
            );
            println!(
                "✔ session inactivity gap: {} seconds",
                cfg.sessions.inactivity_gap_secs
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, path);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, path: &Path) {
    match err {
        ConfigError::Validation { issues } => {
            for issue in issues {
                eprintln!("{}:{}: {}", path.display(), "error".red(), issue);
            }
        }
        other => eprintln!("{}: {}", "error".red(), other),
    }
}
