//! Terminal UI: screens, event loop, and the fetch lifecycle that drives
//! every remote call.

pub mod app;
pub mod detail;
pub mod editor;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod products;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod weather;
pub mod worker;
