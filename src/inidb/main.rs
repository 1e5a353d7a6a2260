use clap::Parser;
use colored::*;
use inidb::api::Database;
use inidb::config::Config;
use inidb::error::Result;
use inidb::protocol::Dispatcher;
use inidb::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.base_dir)?;
    let store = FileStore::new(&cli.base_dir);
    let mut dispatcher = Dispatcher::new(Database::new(store)).with_separator(config.separator);

    let response = match cli.command {
        Commands::Invoke { command, separator } => {
            if let Some(sep) = separator {
                dispatcher.set_separator(sep);
            }
            dispatcher.invoke(&command)
        }
        Commands::Write {
            file,
            section,
            key,
            value,
        } => {
            // The wire convention expects values quote-wrapped; wrap here so
            // callers pass the plain value.
            let quoted = format!("\"{}\"", value);
            dispatcher.write(&file, &section, &key, &quoted)
        }
        Commands::Read { file, section, key } => dispatcher.read(&file, &section, &key),
        Commands::DeleteSection { file, section } => dispatcher.delete_section(&file, &section),
        Commands::DeleteKey { file, section, key } => {
            dispatcher.delete_key(&file, &section, &key)
        }
        Commands::Delete { file } => dispatcher.delete(&file),
        Commands::Exists { file } => dispatcher.exists(&file),
        Commands::Sections { file } => dispatcher.sections(&file),
        Commands::Timestamp => dispatcher.timestamp(),
        Commands::Encode { text } => dispatcher.encode(&text),
        Commands::Decode { text } => dispatcher.decode(&text),
    };

    println!("{}", response);
    Ok(())
}
