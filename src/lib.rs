//! tapseek - gesture and seek controls for a media surface
//!
//! The core is [`controller::GestureController`]: it turns taps, track
//! presses and drags into play/pause toggles and seeks, and drives the
//! auto-hiding overlay and seek indicator from an explicit millisecond
//! clock. The remaining modules wrap it in a simulated player, a gesture
//! script format, a replay engine and an interactive terminal surface.

pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod player;
pub mod render;
pub mod replay;
pub mod script;
pub mod surface;
pub mod theme;

pub use config::Config;
