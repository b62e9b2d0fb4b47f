pub mod annotator;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod render;
pub mod session;
pub mod text;
pub mod transform;
