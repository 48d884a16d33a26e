//! QuitAll Core Library
//!
//! Resolves the distinct applications currently holding visible windows on a
//! desktop session and terminates them in bulk, protecting a configurable
//! set of essential processes. Provides functionality to:
//! - Enumerate open windowed apps (PID-based, with a window-class fallback)
//! - Terminate apps through an escalating signal strategy
//! - Manage the user's exclusion preference
//! - Central engine exposing a synchronous surface for launcher hosts
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure business logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External tool implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! POSIX-like desktops exposing window enumeration tools:
//! `xdotool` (primary), `wmctrl` (fallback), plus `ps`, `pgrep`, `killall`.

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
#[cfg(unix)]
pub mod engine;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{ExclusionSet, ItemAction, ResultItem, INSTALL_HINT, PROTECTED_APPS};

// Re-export other commonly used types
pub use application::{AppResolver, TerminationOutcome, Terminator};
pub use config::ConfigStore;
#[cfg(unix)]
pub use engine::QuitAllEngine;
pub use error::{Error, Result};
