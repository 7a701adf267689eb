//! # Connect Four
//!
//! Two-player Connect Four on a fixed 6x7 grid. The rules engine is
//! presentation-agnostic: front ends feed it column choices and receive
//! placement and game-end callbacks.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine
//! - [`ui`] — Terminal UI and line-oriented console front end
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
