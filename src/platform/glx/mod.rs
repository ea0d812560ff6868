// gldrawable/src/platform/glx/mod.rs
//
//! Offscreen pbuffer drawables on X11 through GLX.

pub mod api;
pub mod attributes;
pub mod config;
pub mod connection;
pub mod drawable;
pub mod factory;
pub mod ffi;
pub mod surface;

mod error;
