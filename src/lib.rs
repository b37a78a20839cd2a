//! Stockroom: a product catalog store with a terminal front end.
//!
//! The [`store`] module is the core: an authoritative product list, listing
//! query state, derived views and asynchronous CRUD actions over a pluggable
//! [`store::ProductSource`]. The remaining modules wire it to a command line
//! and a ratatui UI.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod notify;
pub mod route;
pub mod state;
pub mod store;
pub mod ui;
pub mod util;
