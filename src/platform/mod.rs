//! Backends.
//!
//! Each backend translates capabilities into its own attribute lists, selects a configuration,
//! and manages the native surfaces made from it.

pub mod egl;
pub mod glx;
