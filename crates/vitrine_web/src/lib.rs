// SPDX-License-Identifier: MIT OR Apache-2.0
//! Browser binding of the Vitrine behavior layer.
//!
//! This crate provides:
//! - The markup contract (selectors, marker classes, attributes)
//! - A tracing layer that writes to the devtools console
//! - A `web-sys` implementation of the document ports (wasm32 only)
//! - The `start` entry point that mounts the page (wasm32 only)

pub mod console;
pub mod error;
pub mod selectors;

#[cfg(target_arch = "wasm32")]
pub mod bind;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use console::{ConsoleLayer, ConsoleLevel, ConsoleLine, ConsoleSink};
pub use error::{Result, WebError};

#[cfg(target_arch = "wasm32")]
pub use console::BrowserConsole;
#[cfg(target_arch = "wasm32")]
pub use dom::DomDocument;
