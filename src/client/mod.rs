//! Headless client for the marketplace API.
//!
//! The browser page is modelled as data: [`view::ViewState`] decides which page
//! sections and controls are visible, [`session::SessionStore`] plays the role
//! of the browser's session storage, and [`render`] produces the HTML fragments
//! that get written into the page. [`app::ClientApp`] wires them to the HTTP
//! API through [`api::ApiClient`].

pub mod api;
pub mod app;
pub mod config;
pub mod render;
pub mod session;
pub mod view;
