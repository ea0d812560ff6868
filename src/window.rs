// gldrawable/src/window.rs
//
//! Native windows that drawables render into.

use std::os::raw::c_void;

#[cfg(feature = "sm-raw-window-handle-06")]
use crate::Error;
#[cfg(feature = "sm-raw-window-handle-06")]
use parking_lot::lock_api::RawReentrantMutex;
#[cfg(feature = "sm-raw-window-handle-06")]
use parking_lot::{RawMutex, RawThreadId};
#[cfg(feature = "sm-raw-window-handle-06")]
use rwh_06::{HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle};
#[cfg(feature = "sm-raw-window-handle-06")]
use std::ptr;

/// The outcome of trying to lock a window's drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockStatus {
    /// The surface isn't ready to be drawn to yet (for example, the window isn't mapped). The
    /// lock is *not* held.
    NotReady,
    /// The lock is held, and the surface changed since it was last locked.
    Changed,
    /// The lock is held.
    Success,
}

/// A window, as seen by the drawables that render into it.
pub trait NativeWindow: Send + Sync {
    /// The native display the window lives on, or null to use the platform's default display.
    fn display_handle(&self) -> *mut c_void;

    /// The native window, in the form the platform's surface creation call expects.
    fn window_handle(&self) -> *mut c_void;

    /// Nonzero once the window's own drawing surface has been materialized.
    fn surface_handle(&self) -> usize;

    /// Locks the window's drawing surface. Must be reentrant on the locking thread.
    fn lock_surface(&self) -> LockStatus;

    /// Releases one level of a lock taken with `lock_surface()`.
    fn unlock_surface(&self);
}

/// A held lock on a window's drawing surface, released on drop.
#[must_use]
pub struct SurfaceLock<'a, W: NativeWindow + ?Sized> {
    window: &'a W,
    status: LockStatus,
}

impl<'a, W> SurfaceLock<'a, W> where W: NativeWindow + ?Sized {
    /// Locks the surface, or returns `None` if the window reported that it isn't ready.
    pub fn acquire(window: &'a W) -> Option<SurfaceLock<'a, W>> {
        match window.lock_surface() {
            LockStatus::NotReady => {
                trace!("window surface not ready");
                None
            }
            status => {
                trace!("window surface locked ({:?})", status);
                Some(SurfaceLock { window, status })
            }
        }
    }

    #[inline]
    pub fn status(&self) -> LockStatus {
        self.status
    }
}

impl<'a, W> Drop for SurfaceLock<'a, W> where W: NativeWindow + ?Sized {
    fn drop(&mut self) {
        self.window.unlock_surface();
        trace!("window surface unlocked");
    }
}

/// The reentrant lock guarding a raw window's drawing surface.
#[cfg(feature = "sm-raw-window-handle-06")]
pub(crate) type SurfaceMutex = RawReentrantMutex<RawMutex, RawThreadId>;

/// A window described by `raw-window-handle` handles.
///
/// The window's drawing surface always exists, so locking it never reports
/// [`LockStatus::NotReady`].
#[cfg(feature = "sm-raw-window-handle-06")]
pub struct RawWindowTarget {
    display: *mut c_void,
    window: *mut c_void,
    lock: SurfaceMutex,
}

#[cfg(feature = "sm-raw-window-handle-06")]
unsafe impl Send for RawWindowTarget {}
#[cfg(feature = "sm-raw-window-handle-06")]
unsafe impl Sync for RawWindowTarget {}

#[cfg(feature = "sm-raw-window-handle-06")]
impl RawWindowTarget {
    /// Wraps raw display and window handles.
    ///
    /// Wayland windows are rejected: EGL needs a `wl_egl_window`, which the caller must create.
    /// XCB displays are rejected too, since `eglGetDisplay()` can't take an XCB connection. XCB
    /// windows are fine on an Xlib display.
    pub fn new(display: RawDisplayHandle, window: RawWindowHandle)
               -> Result<RawWindowTarget, Error> {
        let display = match display {
            RawDisplayHandle::Xlib(handle) => handle.display.map_or(ptr::null_mut(), |d| d.as_ptr()),
            RawDisplayHandle::Gbm(handle) => handle.gbm_device.as_ptr(),
            RawDisplayHandle::Android(_) => ptr::null_mut(),
            _ => return Err(Error::UnsupportedOnThisPlatform),
        };
        let window = match window {
            RawWindowHandle::Xlib(handle) => handle.window as usize as *mut c_void,
            RawWindowHandle::Xcb(handle) => handle.window.get() as usize as *mut c_void,
            RawWindowHandle::Gbm(handle) => handle.gbm_surface.as_ptr(),
            RawWindowHandle::AndroidNdk(handle) => handle.a_native_window.as_ptr(),
            _ => return Err(Error::UnsupportedOnThisPlatform),
        };
        Ok(RawWindowTarget { display, window, lock: SurfaceMutex::INIT })
    }

    /// Wraps anything that exposes both a display and a window handle, such as a `winit` window.
    pub fn from_window<W>(window: &W) -> Result<RawWindowTarget, Error>
                          where W: HasDisplayHandle + HasWindowHandle {
        let display = window.display_handle().map_err(|_| Error::UnsupportedOnThisPlatform)?;
        let handle = window.window_handle().map_err(|_| Error::UnsupportedOnThisPlatform)?;
        RawWindowTarget::new(display.as_raw(), handle.as_raw())
    }
}

#[cfg(feature = "sm-raw-window-handle-06")]
impl NativeWindow for RawWindowTarget {
    #[inline]
    fn display_handle(&self) -> *mut c_void {
        self.display
    }

    #[inline]
    fn window_handle(&self) -> *mut c_void {
        self.window
    }

    #[inline]
    fn surface_handle(&self) -> usize {
        self.window as usize
    }

    fn lock_surface(&self) -> LockStatus {
        self.lock.lock();
        LockStatus::Success
    }

    fn unlock_surface(&self) {
        if !self.lock.is_owned_by_current_thread() {
            warn!("attempted to unlock a window surface not locked by this thread");
            return;
        }
        unsafe {
            self.lock.unlock();
        }
    }
}
