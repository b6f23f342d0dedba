//! Runtime for driving the acme.sh subprocess
//!
//! This module handles:
//! - Building argument vectors from option records ([`args`])
//! - Spawning acme.sh and capturing its output ([`process`])
//! - Dispatching operations and routing output through the parsers
//!   ([`client`])

pub mod args;
pub mod client;
pub mod process;


pub use client::AcmeClient;
pub use process::{CommandRunner, TokioRunner};
