//! # IniDb Architecture
//!
//! IniDb is an **embeddable key-value database library**. The on-disk
//! representation is a directory of plain INI files; the product surface is
//! a one-string-in, one-string-out command protocol. The CLI binary is just
//! one host for that surface.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Protocol Layer (protocol.rs)                               │
//! │  - Splits delimited commands, validates arity, routes       │
//! │  - Owns the separator state and all wire formatting         │
//! │  - The ONLY layer that logs; invoke() is total              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin typed facade over commands                          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One load-mutate-save cycle per operation                 │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over named INI documents        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Total Protocol Surface
//!
//! [`protocol::Dispatcher::invoke`] never panics and never propagates an
//! error: protocol errors and storage errors are logged through the `log`
//! facade and collapsed to each operation's conventional failure string.
//! Everything below the protocol layer returns ordinary `Result`s and never
//! touches the logging sink.
//!
//! ## No Hidden State
//!
//! The original design this library descends from kept one process-wide
//! lazily-created instance. Here the dispatcher is an explicit value: the
//! host constructs a store, wraps it in a [`api::Database`], hands that to a
//! [`protocol::Dispatcher`], and serializes calls by holding `&mut` to it.
//! A multi-threaded host must add its own lock around the dispatcher.
//!
//! ## Caveats Preserved for Compatibility
//!
//! - Database names are joined onto the base directory without containment
//!   validation; do not pass untrusted names to [`store::fs::FileStore`].
//! - `read` and `getsections` responses interpolate values unescaped.
//! - Every operation reopens and reparses its file; last write wins.
//!
//! ## Module Overview
//!
//! - [`protocol`]: Command dispatcher and wire formatting
//! - [`api`]: The typed facade over the record operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The ordered INI document model
//! - [`codec`]: Base64 encode/decode
//! - [`config`]: Per-directory configuration
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
pub mod store;
