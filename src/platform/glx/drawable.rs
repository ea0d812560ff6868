// gldrawable/src/platform/glx/drawable.rs
//
//! Offscreen drawables backed by GLX pbuffers.

use super::attributes;
use super::config::{self, MAX_FB_CONFIG_CANDIDATES};
use super::connection::GlxConnection;
use super::ffi::*;
use super::surface::PbufferSurface;
use crate::context::NativeHandles;
use crate::drawable::DrawableState;
use crate::toolkit;
use crate::{Capabilities, Context, Drawable, Error, RenderingApi};

use euclid::default::Size2D;
use std::fmt::{self, Debug, Formatter};
use std::ptr;
use std::sync::Arc;

/// How floating point color components are provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatingPointMode {
    /// `GLX_NV_float_buffer`.
    NvFloat,
}

/// A fixed-size offscreen drawable rendering into a GLX pbuffer.
///
/// Unlike window drawables, the pbuffer is created immediately, and its size is fixed for its
/// whole lifetime.
pub struct GlxPbufferDrawable {
    connection: Option<Arc<GlxConnection>>,
    fb_config: GLXFBConfig,
    surface: PbufferSurface,
    state: DrawableState,
}

unsafe impl Send for GlxPbufferDrawable {}

impl GlxPbufferDrawable {
    /// Chooses a pbuffer-capable framebuffer configuration for `capabilities` and creates a
    /// pbuffer of `size` with it.
    ///
    /// GLX may grant a different size than requested; [`Drawable::size()`] reports what was
    /// actually granted.
    pub fn new(connection: Arc<GlxConnection>, capabilities: &Capabilities, size: Size2D<i32>)
               -> Result<GlxPbufferDrawable, Error> {
        if size.width <= 0 || size.height <= 0 {
            return Err(Error::InvalidPbufferSize(size));
        }

        let (fb_config, surface) = {
            let glx = connection.glx();
            let display = connection.display();
            let _toolkit = toolkit::lock_toolkit();

            let extensions = if capabilities.offscreen_floating_point {
                glx.query_extensions_string(display, connection.screen())
            } else {
                None
            };
            let attributes =
                attributes::pbuffer_config_attributes(capabilities, extensions.as_deref())?;

            let fb_config = config::choose_fb_config(glx,
                                                     display,
                                                     connection.screen(),
                                                     &attributes,
                                                     MAX_FB_CONFIG_CANDIDATES)?;
            config::log_fb_config(glx, display, fb_config);

            (fb_config, PbufferSurface::create(glx, display, fb_config, size)?)
        };

        Ok(GlxPbufferDrawable {
            connection: Some(connection),
            fb_config,
            surface,
            state: DrawableState::new(*capabilities),
        })
    }

    /// The X display, or null once destroyed.
    #[inline]
    pub fn display(&self) -> *mut XDisplay {
        self.connection.as_ref().map_or(ptr::null_mut(), |connection| connection.display())
    }

    #[inline]
    pub fn config(&self) -> GLXFBConfig {
        self.fb_config
    }

    /// The pbuffer, or 0 once destroyed.
    #[inline]
    pub fn surface(&self) -> GLXPbuffer {
        self.surface.pbuffer()
    }

    #[inline]
    pub fn floating_point_mode(&self) -> FloatingPointMode {
        FloatingPointMode::NvFloat
    }

    fn connection(&self) -> Result<&GlxConnection, Error> {
        self.state.check_alive()?;
        self.connection.as_deref().ok_or(Error::Destroyed)
    }
}

impl Drawable for GlxPbufferDrawable {
    /// Pbuffers exist from construction until destruction; this only records the flag.
    fn set_realized(&mut self, realized: bool) -> Result<(), Error> {
        self.state.check_alive()?;
        self.state.realized = realized;
        Ok(())
    }

    #[inline]
    fn is_realized(&self) -> bool {
        self.state.realized
    }

    fn width(&mut self) -> Result<i32, Error> {
        self.state.check_alive()?;
        Ok(self.surface.size().width)
    }

    fn height(&mut self) -> Result<i32, Error> {
        self.state.check_alive()?;
        Ok(self.surface.size().height)
    }

    /// Pbuffers can't be resized.
    fn set_size(&mut self, _: Size2D<i32>) -> Result<(), Error> {
        self.state.check_alive()?;
        Err(Error::UnsupportedOperation)
    }

    fn swap_buffers(&mut self) -> Result<(), Error> {
        let connection = self.connection()?;
        if !self.state.chosen_capabilities.double_buffered {
            return Ok(());
        }
        let _toolkit = toolkit::lock_toolkit();
        connection.glx().swap_buffers(connection.display(), self.surface.pbuffer());
        Ok(())
    }

    fn destroy(&mut self) -> Result<(), Error> {
        if self.state.destroyed {
            return Ok(());
        }

        if let Some(connection) = self.connection.take() {
            let _toolkit = toolkit::lock_toolkit();
            self.surface.destroy(connection.glx(), connection.display());
        }
        self.state.realized = false;
        self.state.destroyed = true;
        debug!("destroyed GLX pbuffer drawable");
        Ok(())
    }

    #[inline]
    fn is_destroyed(&self) -> bool {
        self.state.destroyed
    }

    fn create_context(&self, share_with: Option<&Context>) -> Result<Context, Error> {
        let connection = self.connection()?;
        let handles = NativeHandles::Glx {
            display: connection.display(),
            fb_config: self.fb_config,
            pbuffer: self.surface.pbuffer(),
        };
        Ok(Context::new(RenderingApi::GL, handles, share_with))
    }

    #[inline]
    fn chosen_capabilities(&self) -> &Capabilities {
        &self.state.chosen_capabilities
    }
}

impl Drop for GlxPbufferDrawable {
    fn drop(&mut self) {
        if let Err(err) = self.destroy() {
            warn!("failed to destroy GLX pbuffer drawable on drop: {:?}", err);
        }
    }
}

impl Debug for GlxPbufferDrawable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("GlxPbufferDrawable")
         .field("realized", &self.state.realized)
         .field("display", &self.display())
         .field("fb_config", &self.fb_config)
         .field("pbuffer", &self.surface.pbuffer())
         .field("size", &self.surface.size())
         .finish()
    }
}
