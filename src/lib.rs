//! # lcdmenu - Menus for small text displays
//!
//! A hierarchical menu engine for one and two line character displays, built
//! for microcontrollers driven by a handful of buttons or a rotary encoder.
//! The library supports `no_std` environments and never allocates.
//!
//! ## Features
//!
//! ### Menu Definitions
//! - Menus, items and inputs described as `static` tables, linked by id
//! - Sub-menus nested up to a fixed depth, with the cursor kept per level
//! - Gaps in item ranges are skipped; optional wrap around at the ends
//!
//! ### Value Editing
//! - **List**: pick one entry of a `|` separated list
//! - **Boolean**: Y/N flags
//! - **Integer**: bounded integers in any radix from 2 to 16
//! - **Fixed point**: decimals with two implied fractional digits
//! - **Engineering**: values with SI prefixes and a unit, such as `4.700kHz`
//! - **Run action**: confirm and run application code
//! - **External**: confirm a value produced by the application
//!
//! ### Session Control
//! - Single `poll` entry point, one navigation action per call
//! - Optional live feedback of every change while editing
//! - Auto start on `Select` and an inactivity timeout
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lcdmenu = "0.1.0"
//! ```
//!
//! The application implements the [`platform`] traits for its hardware and
//! calls [`Menu::poll`] from its main loop:
//!
//! ```rust,no_run
//! use lcdmenu::catalog::{Catalog, InputDefinition, MenuHeader, MenuItem, Value};
//! use lcdmenu::{Menu, Options};
//! # use lcdmenu::catalog::Id;
//! # use lcdmenu::platform::*;
//! # struct Board;
//! # impl Navigator for Board {
//! #     fn navigate(&mut self, _inc_delta: &mut u16) -> NavAction { NavAction::Null }
//! # }
//! # impl DisplayDevice for Board {
//! #     fn display(&mut self, _action: DisplayAction, _message: Option<&str>) -> bool { true }
//! # }
//! # impl ValueRequest for Board {
//! #     fn get(&mut self, _id: Id) -> Option<Value> { Some(Value::default()) }
//! #     fn set(&mut self, _id: Id, _value: &Value) {}
//! # }
//! # impl Clock for Board {
//! #     fn millis(&self) -> u32 { 0 }
//! # }
//!
//! static MENUS: [MenuHeader; 2] = [
//!     MenuHeader::new(10, "Main Menu", 20, 21),
//!     MenuHeader::new(11, "Display", 30, 31),
//! ];
//! static ITEMS: [MenuItem; 4] = [
//!     MenuItem::menu(20, "Display", 11),
//!     MenuItem::edit(21, "Factory reset", 42),
//!     MenuItem::edit_live(30, "Contrast", 40),
//!     MenuItem::edit(31, "Backlight", 41),
//! ];
//! static INPUTS: [InputDefinition; 3] = [
//!     InputDefinition::integer(40, "Level", 3, Value::new(0), Value::new(100), 10),
//!     InputDefinition::boolean(41, "Light"),
//!     InputDefinition::run(42, "Confirm"),
//! ];
//!
//! let mut menu = Menu::new(Catalog::new(&MENUS, &ITEMS, &INPUTS), Board);
//! menu.set_options(Options {
//!     wrap: true,
//!     auto_start: true,
//!     timeout_ms: 15_000,
//! });
//!
//! loop {
//!     menu.poll(false);
//! }
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, AVR, etc.)
//! - Linux-based devices with a character display or a serial console
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

mod fmt;

/// Menu, item and input definitions and lookup by id.
///
/// Definitions are plain `const` constructible records so that a whole menu
/// system can be placed in `static` tables.
pub mod catalog;

/// Compile time limits, runtime options and display styling.
pub mod config;

/// Error type shared by the lookup, editing and configuration helpers.
pub mod error;

/// Traits the application implements to connect the menu to its hardware.
pub mod platform;

/// Fixed capacity display line formatting.
pub mod text;

/// The menu session controller, menu stack and inactivity timer.
pub mod menu;

mod editor;

pub use catalog::{Catalog, Id, InputDefinition, InputKind, ItemAction, MenuHeader, MenuItem, NO_ID, Value};
pub use config::{Options, Style};
pub use error::Error;
pub use menu::{Menu, Mode};
pub use platform::{DisplayAction, NavAction, Platform};
