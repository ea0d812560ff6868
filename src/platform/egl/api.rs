// gldrawable/src/platform/egl/api.rs
//
//! The EGL entry points drawables depend on.

use super::ffi::{EGLConfig, EGLDisplay, EGLNativeDisplayType, EGLNativeWindowType};
use super::ffi::{EGLSurface, EGLint};
use crate::WindowingApiError;

/// The slice of EGL this crate calls into.
///
/// Methods mirror the EGL functions of the same names. Calls that report failure through
/// `EGLBoolean` return a `Result` carrying the translated `eglGetError()` code; calls that
/// report failure through a sentinel handle return the raw handle, and the caller is expected to
/// check it and consult `last_error()`.
pub trait EglApi: Send + Sync {
    /// `eglGetDisplay()`. Returns `EGL_NO_DISPLAY` on failure.
    fn get_display(&self, native_display: EGLNativeDisplayType) -> EGLDisplay;

    /// `eglInitialize()`. Returns the EGL version on success.
    fn initialize(&self, display: EGLDisplay) -> Result<(EGLint, EGLint), WindowingApiError>;

    /// `eglTerminate()`.
    fn terminate(&self, display: EGLDisplay) -> Result<(), WindowingApiError>;

    /// `eglChooseConfig()`, returning at most `max_configs` matches in platform order.
    fn choose_config(&self, display: EGLDisplay, attributes: &[EGLint], max_configs: usize)
                     -> Result<Vec<EGLConfig>, WindowingApiError>;

    /// `eglGetConfigAttrib()`.
    fn get_config_attrib(&self, display: EGLDisplay, config: EGLConfig, attribute: EGLint)
                         -> Result<EGLint, WindowingApiError>;

    /// `eglCreateWindowSurface()` with an empty attribute list. Returns `EGL_NO_SURFACE` on
    /// failure.
    fn create_window_surface(&self,
                             display: EGLDisplay,
                             config: EGLConfig,
                             window: EGLNativeWindowType)
                             -> EGLSurface;

    /// `eglDestroySurface()`.
    fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface)
                       -> Result<(), WindowingApiError>;

    /// `eglQuerySurface()`.
    fn query_surface(&self, display: EGLDisplay, surface: EGLSurface, attribute: EGLint)
                     -> Result<EGLint, WindowingApiError>;

    /// `eglSwapBuffers()`.
    fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface)
                    -> Result<(), WindowingApiError>;

    /// `eglGetError()`, translated.
    fn last_error(&self) -> WindowingApiError;
}

#[cfg(native_egl)]
pub use self::native::NativeEgl;

#[cfg(native_egl)]
mod native {
    use super::EglApi;
    use crate::egl::Egl;
    use crate::platform::egl::error::ToWindowingApiError;
    use crate::platform::egl::ffi::{EGLConfig, EGLDisplay, EGLNativeDisplayType};
    use crate::platform::egl::ffi::{EGLNativeWindowType, EGLSurface, EGLint, EGL_FALSE};
    use crate::platform::egl::ffi::EGL_NONE;
    use crate::{Error, WindowingApiError};

    use libc::{dlopen, dlsym, RTLD_LAZY};
    use std::ffi::CString;
    use std::os::raw::{c_char, c_void};
    use std::ptr;
    use std::sync::{Arc, OnceLock};

    #[cfg(android)]
    static EGL_LIBRARY_NAMES: [&[u8]; 1] = [b"libEGL.so\0"];
    #[cfg(not(android))]
    static EGL_LIBRARY_NAMES: [&[u8]; 2] = [b"libEGL.so.1\0", b"libEGL.so\0"];

    struct EglLibrary(*mut c_void);

    unsafe impl Send for EglLibrary {}
    unsafe impl Sync for EglLibrary {}

    static EGL_LIBRARY: OnceLock<EglLibrary> = OnceLock::new();

    thread_local! {
        static EGL_FUNCTIONS: Egl = Egl::load_with(get_proc_address);
    }

    fn egl_library() -> *mut c_void {
        EGL_LIBRARY
            .get_or_init(|| {
                let library = EGL_LIBRARY_NAMES
                    .iter()
                    .map(|name| unsafe { dlopen(name.as_ptr() as *const c_char, RTLD_LAZY) })
                    .find(|library| !library.is_null())
                    .unwrap_or(ptr::null_mut());
                if library.is_null() {
                    warn!("no EGL library could be loaded");
                } else {
                    debug!("loaded EGL library");
                }
                EglLibrary(library)
            })
            .0
    }

    fn get_proc_address(symbol_name: &str) -> *const c_void {
        let library = egl_library();
        if library.is_null() {
            return ptr::null();
        }
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe { dlsym(library, symbol_name.as_ptr()) as *const c_void }
    }

    /// EGL, loaded from the system library.
    #[derive(Debug)]
    pub struct NativeEgl {
        _private: (),
    }

    impl NativeEgl {
        /// Loads the system EGL library, once per process.
        pub fn load() -> Result<Arc<NativeEgl>, Error> {
            if egl_library().is_null() {
                return Err(Error::NoGLLibraryFound);
            }
            Ok(Arc::new(NativeEgl { _private: () }))
        }
    }

    fn check(ok: u32) -> Result<(), WindowingApiError> {
        if ok == EGL_FALSE {
            Err(EGL_FUNCTIONS.with(|egl| unsafe { egl.GetError() }).to_windowing_api_error())
        } else {
            Ok(())
        }
    }

    impl EglApi for NativeEgl {
        fn get_display(&self, native_display: EGLNativeDisplayType) -> EGLDisplay {
            EGL_FUNCTIONS.with(|egl| unsafe { egl.GetDisplay(native_display) })
        }

        fn initialize(&self, display: EGLDisplay) -> Result<(EGLint, EGLint), WindowingApiError> {
            let (mut major, mut minor) = (0, 0);
            let ok = EGL_FUNCTIONS.with(|egl| unsafe {
                egl.Initialize(display, &mut major, &mut minor)
            });
            check(ok)?;
            Ok((major, minor))
        }

        fn terminate(&self, display: EGLDisplay) -> Result<(), WindowingApiError> {
            check(EGL_FUNCTIONS.with(|egl| unsafe { egl.Terminate(display) }))
        }

        fn choose_config(&self, display: EGLDisplay, attributes: &[EGLint], max_configs: usize)
                         -> Result<Vec<EGLConfig>, WindowingApiError> {
            let mut configs = vec![ptr::null(); max_configs];
            let mut config_count = 0;
            let ok = EGL_FUNCTIONS.with(|egl| unsafe {
                egl.ChooseConfig(display,
                                 attributes.as_ptr(),
                                 configs.as_mut_ptr(),
                                 max_configs as EGLint,
                                 &mut config_count)
            });
            check(ok)?;
            configs.truncate(config_count.max(0) as usize);
            Ok(configs)
        }

        fn get_config_attrib(&self, display: EGLDisplay, config: EGLConfig, attribute: EGLint)
                             -> Result<EGLint, WindowingApiError> {
            let mut value = 0;
            let ok = EGL_FUNCTIONS.with(|egl| unsafe {
                egl.GetConfigAttrib(display, config, attribute, &mut value)
            });
            check(ok)?;
            Ok(value)
        }

        fn create_window_surface(&self,
                                 display: EGLDisplay,
                                 config: EGLConfig,
                                 window: EGLNativeWindowType)
                                 -> EGLSurface {
            let attributes = [EGL_NONE];
            EGL_FUNCTIONS.with(|egl| unsafe {
                egl.CreateWindowSurface(display, config, window, attributes.as_ptr())
            })
        }

        fn destroy_surface(&self, display: EGLDisplay, surface: EGLSurface)
                           -> Result<(), WindowingApiError> {
            check(EGL_FUNCTIONS.with(|egl| unsafe { egl.DestroySurface(display, surface) }))
        }

        fn query_surface(&self, display: EGLDisplay, surface: EGLSurface, attribute: EGLint)
                         -> Result<EGLint, WindowingApiError> {
            let mut value = 0;
            let ok = EGL_FUNCTIONS.with(|egl| unsafe {
                egl.QuerySurface(display, surface, attribute, &mut value)
            });
            check(ok)?;
            Ok(value)
        }

        fn swap_buffers(&self, display: EGLDisplay, surface: EGLSurface)
                        -> Result<(), WindowingApiError> {
            check(EGL_FUNCTIONS.with(|egl| unsafe { egl.SwapBuffers(display, surface) }))
        }

        fn last_error(&self) -> WindowingApiError {
            EGL_FUNCTIONS.with(|egl| unsafe { egl.GetError() }).to_windowing_api_error()
        }
    }
}
