use std::{
    fs::{File, OpenOptions},
    io::{self, stdin},
    path::{Path, PathBuf},
};

use clap::Parser;
use ui::repl;

use crate::{
    config::{Config, DEFAULT_LOCALE},
    service::{data_manager::DataManager, progress_store::ProgressStore},
};

mod config;
mod model;
mod service;
mod ui;

/// Track your League of Legends A-Z champion challenge
#[derive(Parser, Debug)]
#[command(name = "champ-challenge")]
#[command(version, about, long_about = None)]
struct Args {
    /// Load champion data from local JSON files in ./data instead of Data Dragon
    #[arg(short = 'l', long = "load-local")]
    load_local_json_files: bool,

    /// Store Data Dragon responses to JSON files in ./data
    #[arg(short = 's', long = "store-responses")]
    store_responses: bool,

    /// Directory for the progress file and log (defaults to the user's local data dir)
    #[arg(short = 'd', long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Locale of the champion dataset
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,
}

/// Each run starts a fresh log.
fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).write(true).truncate(true).open(path)
}

fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    // stdout and stderr belong to the terminal UI
    match open_log_file(&config.log_path()) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(err) => {
            eprintln!("Logging disabled, could not open {}: {}", config.log_path().display(), err);
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}

fn main() {
    let args = Args::parse();

    match Config::resolve(
        args.data_dir,
        args.locale,
        args.load_local_json_files,
        args.store_responses,
    ) {
        Ok(config) => {
            init_logging(&config);
            log::info!("Using data directory {}", config.data_dir.display());

            let mut store = ProgressStore::load(config.store_path());
            log::info!("Tracking {} champions in {}", store.len(), store.path().display());

            match DataManager::new(&config.locale, config.load_local, config.store_responses) {
                Ok(manager) => match repl::run(&manager, &mut store) {
                    Ok(_) => return,
                    Err(error) => {
                        log::error!("REPL failed: {}", error);
                        println!("Error occured while running REPL:\n{}\n", error)
                    }
                },
                Err(error) => println!("Error occured while initializing:\n{}\n", error),
            }
        }
        Err(error) => println!("Error occured while reading configuration:\n{}\n", error),
    };

    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write};

    use super::*;

    #[test]
    fn log_file_is_truncated_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        fs::write(&path, "previous run\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        file.write_all(b"new\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }
}
