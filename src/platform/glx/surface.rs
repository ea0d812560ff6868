// gldrawable/src/platform/glx/surface.rs
//
//! GLX pbuffers.

use super::api::GlxApi;
use super::attributes;
use super::ffi::*;
use crate::{Error, WindowingApiError};

use euclid::default::Size2D;

/// A pbuffer and the size GLX actually gave it.
///
/// The size is read back once, at creation. Pbuffers can't be resized, so it never changes.
#[derive(Debug)]
pub(crate) struct PbufferSurface {
    pbuffer: GLXPbuffer,
    size: Size2D<i32>,
}

impl PbufferSurface {
    pub(crate) fn create(glx: &dyn GlxApi,
                         display: *mut XDisplay,
                         fb_config: GLXFBConfig,
                         requested_size: Size2D<i32>)
                         -> Result<PbufferSurface, Error> {
        let attributes = attributes::pbuffer_size_attributes(requested_size);
        let pbuffer = glx.create_pbuffer(display, fb_config, attributes.as_slice());
        if pbuffer == 0 {
            warn!("glXCreatePbuffer() failed for size {:?}", requested_size);
            return Err(Error::SurfaceCreationFailed(WindowingApiError::BadAlloc));
        }

        let width = glx.query_drawable(display, pbuffer, GLX_WIDTH) as i32;
        let height = glx.query_drawable(display, pbuffer, GLX_HEIGHT) as i32;
        debug!("created pbuffer {:#x}: requested {:?}, got {}x{}",
               pbuffer,
               requested_size,
               width,
               height);
        Ok(PbufferSurface { pbuffer, size: Size2D::new(width, height) })
    }

    /// The pbuffer, or 0 once destroyed.
    #[inline]
    pub(crate) fn pbuffer(&self) -> GLXPbuffer {
        self.pbuffer
    }

    #[inline]
    pub(crate) fn size(&self) -> Size2D<i32> {
        self.size
    }

    pub(crate) fn destroy(&mut self, glx: &dyn GlxApi, display: *mut XDisplay) {
        if self.pbuffer == 0 {
            return;
        }
        glx.destroy_pbuffer(display, self.pbuffer);
        debug!("destroyed pbuffer {:#x}", self.pbuffer);
        self.pbuffer = 0;
    }
}
