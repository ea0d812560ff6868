// gldrawable/src/platform/egl/surface.rs
//
//! EGL window surfaces.

use super::api::EglApi;
use super::ffi::*;
use crate::window::{NativeWindow, SurfaceLock};
use crate::Error;

use std::fmt::{self, Debug, Formatter};

/// A window surface slot, empty (`EGL_NO_SURFACE`) until the surface is first needed.
pub(crate) struct WindowSurface {
    egl_surface: EGLSurface,
}

impl WindowSurface {
    #[inline]
    pub(crate) fn new() -> WindowSurface {
        WindowSurface { egl_surface: EGL_NO_SURFACE }
    }

    #[inline]
    pub(crate) fn egl_surface(&self) -> EGLSurface {
        self.egl_surface
    }

    #[inline]
    pub(crate) fn is_created(&self) -> bool {
        self.egl_surface != EGL_NO_SURFACE
    }

    /// Creates the surface if it doesn't exist yet, holding the window's surface lock around the
    /// native call.
    pub(crate) fn ensure_created(&mut self,
                                 egl: &dyn EglApi,
                                 egl_display: EGLDisplay,
                                 egl_config: EGLConfig,
                                 window: &dyn NativeWindow)
                                 -> Result<EGLSurface, Error> {
        if self.is_created() {
            return Ok(self.egl_surface);
        }

        // The lock status is irrelevant here: the surface is created either way.
        let _lock = SurfaceLock::acquire(window);
        let egl_surface =
            egl.create_window_surface(egl_display, egl_config, window.window_handle());
        if egl_surface == EGL_NO_SURFACE {
            let err = egl.last_error();
            warn!("eglCreateWindowSurface() failed for window {:?}: {:?}",
                  window.window_handle(),
                  err);
            return Err(Error::SurfaceCreationFailed(err));
        }

        debug!("created EGL window surface {:?}", egl_surface);
        self.egl_surface = egl_surface;
        Ok(egl_surface)
    }

    /// Destroys the surface if there is one.
    ///
    /// The slot is emptied even if EGL reports failure: a handle that failed to destroy can't
    /// be used again.
    pub(crate) fn destroy(&mut self, egl: &dyn EglApi, egl_display: EGLDisplay)
                          -> Result<(), Error> {
        if !self.is_created() {
            return Ok(());
        }

        let egl_surface = self.egl_surface;
        self.egl_surface = EGL_NO_SURFACE;
        match egl.destroy_surface(egl_display, egl_surface) {
            Ok(()) => {
                debug!("destroyed EGL window surface {:?}", egl_surface);
                Ok(())
            }
            Err(err) => {
                error!("eglDestroySurface() failed for {:?}: {:?}", egl_surface, err);
                Err(Error::SurfaceDestructionFailed(err))
            }
        }
    }

    /// Asks EGL for the current value of `EGL_WIDTH` or `EGL_HEIGHT`.
    ///
    /// Never cached: the window may be resized behind our back.
    pub(crate) fn query(&self, egl: &dyn EglApi, egl_display: EGLDisplay, attribute: EGLint)
                        -> Result<EGLint, Error> {
        debug_assert!(self.is_created());
        egl.query_surface(egl_display, self.egl_surface, attribute)
           .map_err(Error::SurfaceQueryFailed)
    }
}

impl Debug for WindowSurface {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "WindowSurface({:?})", self.egl_surface)
    }
}
