//! # State Module
//!
//! Application state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────────┐    │
//! │  │       FormState          │      │         AppConfig            │    │
//! │  │                          │      │                              │    │
//! │  │  bill text, presets,     │      │  currency symbol / code      │    │
//! │  │  custom entries, split,  │      │  show_breakdown              │    │
//! │  │  last result line        │      │                              │    │
//! │  │                          │      │  Read-only after load        │    │
//! │  │  Mutated by one session  │      │                              │    │
//! │  └──────────────────────────┘      └──────────────────────────────┘    │
//! │                                                                         │
//! │  Single-threaded: the session loop owns both, no locking needed.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{AppConfig, CurrencySettings, DisplaySettings};
pub use form::FormState;
