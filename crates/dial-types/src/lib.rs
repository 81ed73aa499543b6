//! Foundation types and traits for Dial.
//!
//! This crate contains the platform-agnostic types shared by all Dial crates:
//! screen geometry, bitmap fonts, RGB565 colors, icon slots, input events,
//! the display driver trait, configuration, and error types.

pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod geometry;
pub mod icon;
pub mod input;
