//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses
//! to interact with external systems. Implementations live in `adapters`.

mod process;
mod signals;
mod windows;

pub use process::ProcessTablePort;
pub use signals::SignalPort;
pub use windows::{WindowClassPort, WindowQueryPort};
