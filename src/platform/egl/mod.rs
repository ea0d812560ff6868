// gldrawable/src/platform/egl/mod.rs
//
//! Drawables rendering into native windows through EGL.

pub mod api;
pub mod attributes;
pub mod config;
pub mod drawable;
pub mod factory;
pub mod ffi;
pub mod surface;

mod error;
