//! Terminal front end for two-player tic-tac-toe.
//!
//! The shell never touches board cells itself. It lays the board out
//! on screen ([`layout`]), turns clicks and keys into touches
//! ([`input`]), drives a [`tictactoe_model::Game`] tick by tick
//! ([`session`]) and draws the result ([`ui`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod layout;
pub mod session;
pub mod ui;

pub use cli::Cli;
pub use config::{ConfigError, ShellConfig};
pub use layout::BoardLayout;
pub use session::{Direction, Phase, Session, Touch};
