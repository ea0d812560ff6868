// gldrawable/src/platform/glx/factory.rs
//
//! Creation of GLX pbuffer drawables.

use super::api::GlxApi;
use super::connection::GlxConnection;
use super::drawable::GlxPbufferDrawable;
use crate::{Capabilities, Error};

use euclid::default::Size2D;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// Makes pbuffer drawables on one shared X display connection.
#[derive(Clone)]
pub struct GlxDrawableFactory {
    connection: Arc<GlxConnection>,
}

impl GlxDrawableFactory {
    /// Opens the default X display through the given entry points.
    pub fn new(glx: Arc<dyn GlxApi>) -> Result<GlxDrawableFactory, Error> {
        Ok(GlxDrawableFactory { connection: GlxConnection::open(glx)? })
    }

    /// Opens the default X display through the system Xlib and GL libraries.
    #[cfg(x11)]
    pub fn native() -> Result<GlxDrawableFactory, Error> {
        let glx = super::api::NativeGlx::load()?;
        GlxDrawableFactory::new(glx)
    }

    #[cfg(not(x11))]
    pub fn native() -> Result<GlxDrawableFactory, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    #[inline]
    pub fn connection(&self) -> &Arc<GlxConnection> {
        &self.connection
    }

    #[inline]
    pub fn can_create_pbuffer(&self) -> bool {
        true
    }

    /// Creates a pbuffer drawable. Both dimensions must be positive.
    pub fn create_pbuffer(&self, capabilities: &Capabilities, size: Size2D<i32>)
                          -> Result<GlxPbufferDrawable, Error> {
        GlxPbufferDrawable::new(self.connection.clone(), capabilities, size)
    }
}

impl Debug for GlxDrawableFactory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "GlxDrawableFactory({:?})", self.connection)
    }
}
