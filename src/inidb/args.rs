use clap::{Parser, Subcommand};
use inidb::protocol::version_string;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inidb")]
#[command(version = version_string())]
#[command(about = "INI-file-backed key-value database with a textual command protocol", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory the database files live under
    #[arg(short, long, global = true, default_value = "db")]
    pub base_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed a raw protocol command through the dispatcher
    Invoke {
        /// Raw command, e.g. 'write|db.ini|Players|Alice|"100"'
        command: String,

        /// Separator to start the dispatcher with (overrides config.json)
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Write one value
    #[command(alias = "w")]
    Write {
        file: String,
        section: String,
        key: String,
        value: String,
    },

    /// Read one value
    #[command(alias = "r")]
    Read {
        file: String,
        section: String,
        key: String,
    },

    /// Delete a whole section
    DeleteSection { file: String, section: String },

    /// Delete a single key
    DeleteKey {
        file: String,
        section: String,
        key: String,
    },

    /// Delete a database file
    #[command(alias = "rm")]
    Delete { file: String },

    /// Check whether a database file exists
    Exists { file: String },

    /// List the sections of a database file
    #[command(alias = "ls")]
    Sections { file: String },

    /// Print the current local time in wire format
    Timestamp,

    /// Base64-encode a string
    Encode { text: String },

    /// Base64-decode a string
    Decode { text: String },
}
