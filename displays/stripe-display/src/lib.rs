//! Non-blocking driver for RGB565 SPI panels
//!
//! This crate provides:
//! - [`Display`]: solid fills and single-line text with automatic font fallback
//! - [`PanelBackend`] trait for controller command sets, with an ST7789 implementation
//! - The orientation transform that places small glass inside the controller's
//!   address space
//!
//! # Architecture
//!
//! ```text
//! application
//!     │  fill_rectangle / print / draw_char / poll
//!     ▼
//! Display ──► LineBuffer (one 60 px band, reused)
//!     │
//!     ▼
//! TransferEngine ──► PanelBackend (CASET/RASET/RAMWR framing)
//!     │
//!     ▼
//! stripe-hal SpiBus + OutputPin
//! ```
//!
//! A draw call composes into the line buffer, queues it on the bus and
//! returns while the bytes are still shifting out. The next draw call (or
//! [`Display::poll`]) releases the bus once it drained.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod buffer;
pub mod color;
pub mod config;
pub mod display;
pub mod font;
pub mod geometry;
pub mod st7789;
pub mod text;
pub mod transfer;

#[cfg(test)]
mod mock;

/// Height of a text band in pixels
pub const ROW_HEIGHT: u16 = 60;

/// Baseline inside a text band, three quarters down
pub const BASELINE: u16 = 45;

/// Longest printable line in bytes
pub const MAX_TEXT_LEN: usize = 32;

// Re-export key types
pub use backend::{CommandLink, DisplayError, InitStep, PanelBackend};
pub use color::Rgb565;
pub use config::{line_buffer_len, DisplayConfig, ST7789_SPI};
pub use display::{Display, Interface};
pub use font::{Font, FontSet, Glyph, Tier};
pub use geometry::{HardwareExtent, Rotation, VisibleExtent, Window};
pub use st7789::St7789;
pub use text::{Justify, TextArea};
pub use transfer::TransferState;
