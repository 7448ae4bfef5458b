use crate::conf::{ConfigError, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ listen {}", cfg.server.listen);
            match cfg.server.threads {
                Some(threads) => println!("✔ {threads} worker threads"),
                None => println!("✔ default worker threads"),
            }
            let log_path = &cfg.source.log_path;
            if log_path.is_file() {
                println!("✔ honeypot log {}", log_path.display());
            } else {
                // Not fatal: the dashboard reports an empty data set until the
                // honeypot creates the file.
                println!("! honeypot log {} does not exist yet", log_path.display());
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("✘ {err}");
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{hint}");
    }
}
