// gldrawable/src/platform/egl/drawable.rs
//
//! Drawables backed by EGL window surfaces.

use super::api::EglApi;
use super::attributes;
use super::config::{self, MAX_CONFIG_CANDIDATES};
use super::ffi::*;
use super::surface::WindowSurface;
use crate::context::NativeHandles;
use crate::drawable::DrawableState;
use crate::toolkit;
use crate::window::{NativeWindow, SurfaceLock};
use crate::{Capabilities, Context, Drawable, Error, RenderingApi};

use euclid::default::Size2D;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// A drawable rendering into a native window through an EGL window surface.
///
/// The display connection and configuration are set up at construction. The window surface is
/// created lazily, the first time it is needed after the drawable has been realized, so that
/// windows which aren't mapped yet can still get a drawable.
pub struct EglDrawable {
    egl: Arc<dyn EglApi>,
    window: Arc<dyn NativeWindow>,
    api: RenderingApi,
    egl_display: EGLDisplay,
    egl_config: EGLConfig,
    surface: WindowSurface,
    state: DrawableState,
}

unsafe impl Send for EglDrawable {}

impl EglDrawable {
    /// Opens the window's display (or the default display if the window names none) and chooses
    /// a configuration for `capabilities`.
    pub fn new(egl: Arc<dyn EglApi>,
               window: Arc<dyn NativeWindow>,
               capabilities: &Capabilities,
               api: RenderingApi)
               -> Result<EglDrawable, Error> {
        let attributes = attributes::config_attributes(capabilities, api)?;

        let native_display = window.display_handle();
        let native_display = if native_display.is_null() {
            EGL_DEFAULT_DISPLAY
        } else {
            native_display as EGLNativeDisplayType
        };

        let egl_display = egl.get_display(native_display);
        if egl_display == EGL_NO_DISPLAY {
            return Err(Error::DisplayAcquisitionFailed);
        }
        let (major, minor) = egl.initialize(egl_display).map_err(Error::DisplayInitFailed)?;
        debug!("initialized EGL {}.{} on display {:?}", major, minor, egl_display);

        let egl_config = match config::choose_config(&*egl,
                                                     egl_display,
                                                     &attributes,
                                                     MAX_CONFIG_CANDIDATES) {
            Ok(egl_config) => egl_config,
            Err(err) => {
                if let Err(terminate_err) = egl.terminate(egl_display) {
                    warn!("eglTerminate() failed: {:?}", terminate_err);
                }
                return Err(err);
            }
        };
        config::log_config(&*egl, egl_display, egl_config);

        Ok(EglDrawable {
            egl,
            window,
            api,
            egl_display,
            egl_config,
            surface: WindowSurface::new(),
            state: DrawableState::new(*capabilities),
        })
    }

    /// The EGL display, or `EGL_NO_DISPLAY` once destroyed.
    #[inline]
    pub fn display(&self) -> EGLDisplay {
        self.egl_display
    }

    #[inline]
    pub fn config(&self) -> EGLConfig {
        self.egl_config
    }

    /// The window surface, or `EGL_NO_SURFACE` if it hasn't been created.
    #[inline]
    pub fn surface(&self) -> EGLSurface {
        self.surface.egl_surface()
    }

    #[inline]
    pub fn window(&self) -> &Arc<dyn NativeWindow> {
        &self.window
    }

    #[inline]
    pub fn rendering_api(&self) -> RenderingApi {
        self.api
    }

    /// Creates the window surface if the drawable is realized and the surface doesn't exist yet.
    pub fn ensure_surface(&mut self) -> Result<EGLSurface, Error> {
        self.state.check_alive()?;
        if !self.state.realized {
            return Err(Error::NotRealized);
        }
        self.surface.ensure_created(&*self.egl, self.egl_display, self.egl_config, &*self.window)
    }

    fn query_surface(&mut self, attribute: EGLint) -> Result<i32, Error> {
        self.ensure_surface()?;
        self.surface.query(&*self.egl, self.egl_display, attribute)
    }
}

impl Drawable for EglDrawable {
    fn set_realized(&mut self, realized: bool) -> Result<(), Error> {
        self.state.check_alive()?;
        // Realizing is deferred: the surface appears on first use.
        let result = if realized {
            Ok(())
        } else {
            self.surface.destroy(&*self.egl, self.egl_display)
        };
        self.state.realized = realized;
        result
    }

    #[inline]
    fn is_realized(&self) -> bool {
        self.state.realized
    }

    fn width(&mut self) -> Result<i32, Error> {
        self.query_surface(EGL_WIDTH)
    }

    fn height(&mut self) -> Result<i32, Error> {
        self.query_surface(EGL_HEIGHT)
    }

    /// Window surfaces follow their window; resizing is left to the windowing system.
    fn set_size(&mut self, _: Size2D<i32>) -> Result<(), Error> {
        self.state.check_alive()
    }

    fn swap_buffers(&mut self) -> Result<(), Error> {
        self.state.check_alive()?;

        let window = self.window.clone();
        let _toolkit = toolkit::lock_toolkit();
        let _lock = if window.surface_handle() == 0 {
            match SurfaceLock::acquire(&*window) {
                None => return Ok(()),
                lock => lock,
            }
        } else {
            None
        };

        let egl_surface = self.ensure_surface()?;
        self.egl.swap_buffers(self.egl_display, egl_surface).map_err(Error::PresentFailed)
    }

    fn destroy(&mut self) -> Result<(), Error> {
        if self.state.destroyed {
            return Ok(());
        }

        let result = self.set_realized(false);
        if self.egl_display != EGL_NO_DISPLAY {
            if let Err(err) = self.egl.terminate(self.egl_display) {
                warn!("eglTerminate() failed: {:?}", err);
            }
            self.egl_display = EGL_NO_DISPLAY;
        }
        self.state.destroyed = true;
        debug!("destroyed EGL drawable");
        result
    }

    #[inline]
    fn is_destroyed(&self) -> bool {
        self.state.destroyed
    }

    fn create_context(&self, share_with: Option<&Context>) -> Result<Context, Error> {
        self.state.check_alive()?;
        let handles = NativeHandles::Egl {
            display: self.egl_display,
            config: self.egl_config,
            surface: self.surface.egl_surface(),
        };
        Ok(Context::new(self.api, handles, share_with))
    }

    #[inline]
    fn chosen_capabilities(&self) -> &Capabilities {
        &self.state.chosen_capabilities
    }
}

impl Drop for EglDrawable {
    fn drop(&mut self) {
        if let Err(err) = self.destroy() {
            warn!("failed to destroy EGL drawable on drop: {:?}", err);
        }
    }
}

impl Debug for EglDrawable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("EglDrawable")
         .field("realized", &self.state.realized)
         .field("window", &self.window.window_handle())
         .field("egl_display", &self.egl_display)
         .field("egl_config", &self.egl_config)
         .field("egl_surface", &self.surface.egl_surface())
         .finish()
    }
}
