pub mod album;
pub mod app;
pub mod cli;
pub mod client;
pub mod commands;
pub mod context;
pub mod error;
pub mod render;
pub mod rest;
pub mod tracing;
pub mod view;

pub use album::{Album, AlbumId};
pub use client::{AlbumApi, HttpAlbumApi};
pub use error::ViewError;
pub use view::{ViewController, ViewState};
