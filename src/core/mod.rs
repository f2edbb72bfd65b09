//! # Core Application Logic
//!
//! This module contains Plaza's data and business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Model (feed data)    │
//!                    │  • State (app data)     │
//!                    │  • Action (callbacks)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
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
//! - [`model`]: Posts, attachments, groups, stories, nav items
//! - [`sample`]: The hard-coded content the feed shows
//! - [`format`]: Badge, count and initials formatting
//! - [`image`]: The `ImageSource` seam for avatar/image resolution
//! - [`state`]: The `App` struct
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod format;
pub mod image;
pub mod model;
pub mod sample;
pub mod state;
