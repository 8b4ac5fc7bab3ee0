//! Stripe Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the panel driver
//! needs. Chip-specific HALs implement them directly, or wrap their
//! `embedded-hal` 1.0 types with the adapters in [`compat`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  stripe-display (renderer, text, fill)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  stripe-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chip HAL w/  │       │ embedded-hal  │
//! │  DMA / FIFO   │       │  via compat   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip select, data/command and reset lines
//! - [`spi::SpiBus`] - Session-framed, queued SPI writes with a busy query

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{SpiBus, SpiConfig};
