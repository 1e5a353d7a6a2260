//! # Wire Protocol
//!
//! [`Dispatcher`] is the string-in/string-out surface of the database: one
//! delimited command per call, one plain-string response. This is the only
//! layer that knows the wire shapes (`"true"`/`"false"`, `[true, value]`,
//! `["a", "b"]`) and the only layer that talks to the logging sink.
//!
//! ## Contract
//!
//! [`Dispatcher::invoke`] is total: every call returns a string, never
//! panics, never propagates an error. Protocol errors (unknown function,
//! missing arguments) and storage errors alike are logged and collapsed to
//! the operation's conventional failure value.
//!
//! ## Wire compatibility
//!
//! Values are interpolated into `[true, value]` and `["name"]` responses
//! unquoted and unescaped. A value containing the response's own delimiter
//! characters produces output a downstream parser may misread; this is
//! preserved deliberately for compatibility with the calling convention.

use log::error;

use crate::api::Database;
use crate::codec;
use crate::store::DataStore;
use chrono::Local;

pub const DEFAULT_SEPARATOR: &str = "|";

const TRUE: &str = "true";
const FALSE: &str = "false";
const NOT_FOUND: &str = "[false, \"\"]";

/// Version string reported by the `version` operation and the CLI
/// `--version` flag. Dev builds carry the git hash and commit date.
pub fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Minimum argument count per operation, or `None` for an unknown name.
fn arity(function: &str) -> Option<usize> {
    let n = match function {
        "version" | "gettimestamp" | "getseparator" => 0,
        "delete" | "exists" | "decodebase64" | "encodebase64" | "setseparator"
        | "getsections" => 1,
        "deletesection" => 2,
        "read" | "deletekey" => 3,
        "write" => 4,
        _ => return None,
    };
    Some(n)
}

pub struct Dispatcher<S: DataStore> {
    db: Database<S>,
    separator: String,
}

impl<S: DataStore> Dispatcher<S> {
    pub fn new(db: Database<S>) -> Self {
        Self {
            db,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The separator used to split incoming commands. Splitting matches any
    /// single character of this string, so a multi-character separator acts
    /// as a set of alternatives.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// Parse one delimited command, validate its argument count, and route
    /// it. Field 0 is the function name; the rest are positional arguments.
    /// Extra fields beyond an operation's arity are ignored.
    pub fn invoke(&mut self, raw: &str) -> String {
        let fields: Vec<&str> = raw.split(|c: char| self.separator.contains(c)).collect();

        let (function, args) = match fields.split_first() {
            Some((function, args)) => (*function, args),
            None => {
                error!("Error: No Function Name Provided");
                return String::new();
            }
        };

        let required = match arity(function) {
            Some(n) => n,
            None => {
                error!("Invalid function: {}", function);
                return String::new();
            }
        };
        if args.len() < required {
            error!("Error: Insufficient Parameters");
            return String::new();
        }

        match function {
            "version" => version_string().to_string(),
            "write" => self.write(args[0], args[1], args[2], args[3]),
            "read" => self.read(args[0], args[1], args[2]),
            "deletesection" => self.delete_section(args[0], args[1]),
            "deletekey" => self.delete_key(args[0], args[1], args[2]),
            "delete" => self.delete(args[0]),
            "exists" => self.exists(args[0]),
            "gettimestamp" => self.timestamp(),
            "decodebase64" => self.decode(args[0]),
            "encodebase64" => self.encode(args[0]),
            "setseparator" => {
                self.separator = args[0].to_string();
                String::new()
            }
            "getseparator" => self.separator.clone(),
            "getsections" => self.sections(args[0]),
            // arity() vouched for the name; kept total rather than panicking
            _ => {
                error!("Invalid function: {}", function);
                String::new()
            }
        }
    }

    /// `"true"` on success, `"false"` on any storage failure.
    pub fn write(&mut self, file: &str, section: &str, key: &str, value: &str) -> String {
        match self.db.write(file, section, key, value) {
            Ok(()) => TRUE.to_string(),
            Err(e) => {
                error!("Error accessing ini: {}", e);
                FALSE.to_string()
            }
        }
    }

    /// `[true, value]` with the raw value interpolated, or `[false, ""]`.
    pub fn read(&self, file: &str, section: &str, key: &str) -> String {
        match self.db.read(file, section, key) {
            Ok(Some(value)) => format!("[true, {}]", value),
            Ok(None) => NOT_FOUND.to_string(),
            Err(e) => {
                error!("Error reading ini: {}", e);
                NOT_FOUND.to_string()
            }
        }
    }

    pub fn delete_section(&mut self, file: &str, section: &str) -> String {
        match self.db.delete_section(file, section) {
            Ok(()) => TRUE.to_string(),
            Err(e) => {
                error!("Error accessing ini: {}", e);
                FALSE.to_string()
            }
        }
    }

    pub fn delete_key(&mut self, file: &str, section: &str, key: &str) -> String {
        match self.db.delete_key(file, section, key) {
            Ok(()) => TRUE.to_string(),
            Err(e) => {
                error!("Error accessing ini: {}", e);
                FALSE.to_string()
            }
        }
    }

    pub fn delete(&mut self, file: &str) -> String {
        match self.db.delete(file) {
            Ok(()) => TRUE.to_string(),
            Err(_) => {
                error!("Error deleting file: {}", file);
                FALSE.to_string()
            }
        }
    }

    pub fn exists(&self, file: &str) -> String {
        if self.db.exists(file) {
            TRUE.to_string()
        } else {
            FALSE.to_string()
        }
    }

    /// `["a", "b"]` in document order; `[]` for a missing or malformed file.
    pub fn sections(&self, file: &str) -> String {
        match self.db.sections(file) {
            Ok(names) => {
                let quoted: Vec<String> = names.iter().map(|n| format!("\"{}\"", n)).collect();
                format!("[{}]", quoted.join(", "))
            }
            Err(e) => {
                error!("Error reading ini: {}", e);
                "[]".to_string()
            }
        }
    }

    /// Local wall-clock time as `[YYYY,MM,DD,HH,MM,SS]`.
    pub fn timestamp(&self) -> String {
        Local::now().format("[%Y,%m,%d,%H,%M,%S]").to_string()
    }

    pub fn encode(&self, plaintext: &str) -> String {
        codec::encode(plaintext)
    }

    pub fn decode(&self, encoded: &str) -> String {
        match codec::decode(encoded) {
            Ok(text) => text,
            Err(e) => {
                error!("Error decoding base64: {}", e);
                String::new()
            }
        }
    }
}
