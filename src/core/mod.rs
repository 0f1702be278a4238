//! # Core Application Logic
//!
//! This module contains terminal-note's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (mode, note) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Vault (files)        │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct and its `Mode`
//! - [`action`]: The `Action` enum and the `update()` state machine
//! - [`vault`]: Notes on disk: list, read, create, open, persist
//! - [`buffer`]: Text of the open note plus its write handle
//! - [`catalog`]: Vault listing projected into displayable rows
//! - [`status`]: The last outcome message
//! - [`config`]: Settings file and override resolution
//! - [`error`]: The `NoteError` taxonomy

pub mod action;
pub mod buffer;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod status;
pub mod vault;
