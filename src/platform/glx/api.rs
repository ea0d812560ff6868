// gldrawable/src/platform/glx/api.rs
//
//! The Xlib and GLX entry points pbuffer drawables depend on.

use super::ffi::{GLXDrawable, GLXFBConfig, GLXPbuffer, XDisplay};
use crate::WindowingApiError;

use std::os::raw::{c_int, c_uint};
use std::slice;

/// The slice of Xlib and GLX this crate calls into.
///
/// GLX reports most failures through null or zero handles rather than an error code, so the
/// creation calls return raw handles and leave the check to the caller.
pub trait GlxApi: Send + Sync {
    /// `XOpenDisplay(NULL)`. Returns null on failure.
    fn open_display(&self) -> *mut XDisplay;

    /// `XCloseDisplay()`.
    fn close_display(&self, display: *mut XDisplay);

    /// `XDefaultScreen()`.
    fn default_screen(&self, display: *mut XDisplay) -> c_int;

    /// `glXQueryExtensionsString()`, or `None` if GLX returned nothing.
    fn query_extensions_string(&self, display: *mut XDisplay, screen: c_int) -> Option<String>;

    /// `glXChooseFBConfig()`, in platform order. No match is an empty list; other failures are
    /// errors.
    fn choose_fb_config(&self, display: *mut XDisplay, screen: c_int, attributes: &[c_int])
                        -> Result<Vec<GLXFBConfig>, WindowingApiError>;

    /// `glXGetFBConfigAttrib()`.
    fn get_fb_config_attrib(&self, display: *mut XDisplay, config: GLXFBConfig, attribute: c_int)
                            -> Result<c_int, WindowingApiError>;

    /// `glXCreatePbuffer()`. Returns 0 on failure.
    fn create_pbuffer(&self, display: *mut XDisplay, config: GLXFBConfig, attributes: &[c_int])
                      -> GLXPbuffer;

    /// `glXDestroyPbuffer()`.
    fn destroy_pbuffer(&self, display: *mut XDisplay, pbuffer: GLXPbuffer);

    /// `glXQueryDrawable()`.
    fn query_drawable(&self, display: *mut XDisplay, drawable: GLXDrawable, attribute: c_int)
                      -> c_uint;

    /// `glXSwapBuffers()`.
    fn swap_buffers(&self, display: *mut XDisplay, drawable: GLXDrawable);
}

/// Copies the array `glXChooseFBConfig()` returned.
///
/// GLX returns null both when nothing matched and when the call failed. Null with a count of
/// zero is read as "nothing matched".
///
/// # Safety
///
/// A non-null `configs` must point to `config_count` configs.
#[cfg_attr(not(x11), allow(dead_code))]
pub(crate) unsafe fn collect_fb_configs(configs: *const GLXFBConfig, config_count: c_int)
                                        -> Result<Vec<GLXFBConfig>, WindowingApiError> {
    if configs.is_null() {
        return if config_count == 0 { Ok(vec![]) } else { Err(WindowingApiError::Failed) };
    }
    Ok(slice::from_raw_parts(configs, config_count.max(0) as usize).to_vec())
}

#[cfg(x11)]
pub use self::native::NativeGlx;

#[cfg(x11)]
mod native {
    use super::{collect_fb_configs, GlxApi};
    use crate::glx::types::Display as GlxDisplay;
    use crate::glx::Glx;
    use crate::platform::glx::error::glx_error_to_windowing_api_error;
    use crate::platform::glx::ffi::{GLXDrawable, GLXFBConfig, GLXPbuffer, XDisplay};
    use crate::platform::glx::ffi::GLX_SUCCESS;
    use crate::{Error, WindowingApiError};

    use libc::{dlopen, dlsym, RTLD_LAZY};
    use std::ffi::{CStr, CString};
    use std::os::raw::{c_char, c_int, c_uint, c_void};
    use std::ptr;
    use std::sync::{Arc, OnceLock};
    use x11_dl::xlib::{Display, Xlib};

    static GL_LIBRARY_NAMES: [&[u8]; 2] = [b"libGL.so.1\0", b"libGL.so\0"];

    struct GlLibrary(*mut c_void);

    unsafe impl Send for GlLibrary {}
    unsafe impl Sync for GlLibrary {}

    static GL_LIBRARY: OnceLock<GlLibrary> = OnceLock::new();

    thread_local! {
        static GLX_FUNCTIONS: Glx = Glx::load_with(get_proc_address);
    }

    fn gl_library() -> *mut c_void {
        GL_LIBRARY
            .get_or_init(|| {
                let library = GL_LIBRARY_NAMES
                    .iter()
                    .map(|name| unsafe { dlopen(name.as_ptr() as *const c_char, RTLD_LAZY) })
                    .find(|library| !library.is_null())
                    .unwrap_or(ptr::null_mut());
                if library.is_null() {
                    warn!("no GL library could be loaded");
                }
                GlLibrary(library)
            })
            .0
    }

    fn get_proc_address(symbol_name: &str) -> *const c_void {
        let library = gl_library();
        if library.is_null() {
            return ptr::null();
        }
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe { dlsym(library, symbol_name.as_ptr()) as *const c_void }
    }

    /// Frees an Xlib-allocated array on drop.
    struct ScopedXFree<'a, T> {
        xlib: &'a Xlib,
        ptr: *mut T,
    }

    impl<'a, T> Drop for ScopedXFree<'a, T> {
        fn drop(&mut self) {
            if !self.ptr.is_null() {
                unsafe {
                    (self.xlib.XFree)(self.ptr as *mut c_void);
                }
            }
        }
    }

    /// Xlib and GLX, loaded from the system libraries.
    pub struct NativeGlx {
        xlib: Xlib,
    }

    // Thread safety of the X connection is provided by the toolkit lock.
    unsafe impl Send for NativeGlx {}
    unsafe impl Sync for NativeGlx {}

    impl NativeGlx {
        /// Loads Xlib and the system GL library.
        pub fn load() -> Result<Arc<NativeGlx>, Error> {
            let xlib = Xlib::open().map_err(|err| {
                warn!("failed to load Xlib: {}", err);
                Error::NoGLLibraryFound
            })?;
            if gl_library().is_null() {
                return Err(Error::NoGLLibraryFound);
            }
            debug!("loaded Xlib and GLX");
            Ok(Arc::new(NativeGlx { xlib }))
        }
    }

    #[inline]
    fn glx_display(display: *mut XDisplay) -> *mut GlxDisplay {
        display as *mut GlxDisplay
    }

    impl GlxApi for NativeGlx {
        fn open_display(&self) -> *mut XDisplay {
            unsafe { (self.xlib.XOpenDisplay)(ptr::null()) as *mut XDisplay }
        }

        fn close_display(&self, display: *mut XDisplay) {
            unsafe {
                (self.xlib.XCloseDisplay)(display as *mut Display);
            }
        }

        fn default_screen(&self, display: *mut XDisplay) -> c_int {
            unsafe { (self.xlib.XDefaultScreen)(display as *mut Display) }
        }

        fn query_extensions_string(&self, display: *mut XDisplay, screen: c_int)
                                   -> Option<String> {
            GLX_FUNCTIONS.with(|glx| unsafe {
                let extensions = glx.QueryExtensionsString(glx_display(display), screen);
                if extensions.is_null() {
                    None
                } else {
                    Some(CStr::from_ptr(extensions).to_string_lossy().into_owned())
                }
            })
        }

        fn choose_fb_config(&self, display: *mut XDisplay, screen: c_int, attributes: &[c_int])
                            -> Result<Vec<GLXFBConfig>, WindowingApiError> {
            let mut config_count = 0;
            let configs = ScopedXFree {
                xlib: &self.xlib,
                ptr: GLX_FUNCTIONS.with(|glx| unsafe {
                    glx.ChooseFBConfig(glx_display(display),
                                       screen,
                                       attributes.as_ptr(),
                                       &mut config_count)
                }),
            };
            unsafe { collect_fb_configs(configs.ptr, config_count) }
        }

        fn get_fb_config_attrib(&self,
                                display: *mut XDisplay,
                                config: GLXFBConfig,
                                attribute: c_int)
                                -> Result<c_int, WindowingApiError> {
            let mut value = 0;
            let result = GLX_FUNCTIONS.with(|glx| unsafe {
                glx.GetFBConfigAttrib(glx_display(display), config, attribute, &mut value)
            });
            if result != GLX_SUCCESS {
                return Err(glx_error_to_windowing_api_error(result));
            }
            Ok(value)
        }

        fn create_pbuffer(&self,
                          display: *mut XDisplay,
                          config: GLXFBConfig,
                          attributes: &[c_int])
                          -> GLXPbuffer {
            GLX_FUNCTIONS.with(|glx| unsafe {
                glx.CreatePbuffer(glx_display(display), config, attributes.as_ptr())
            })
        }

        fn destroy_pbuffer(&self, display: *mut XDisplay, pbuffer: GLXPbuffer) {
            GLX_FUNCTIONS.with(|glx| unsafe { glx.DestroyPbuffer(glx_display(display), pbuffer) })
        }

        fn query_drawable(&self, display: *mut XDisplay, drawable: GLXDrawable, attribute: c_int)
                          -> c_uint {
            let mut value = 0;
            GLX_FUNCTIONS.with(|glx| unsafe {
                glx.QueryDrawable(glx_display(display), drawable, attribute, &mut value)
            });
            value
        }

        fn swap_buffers(&self, display: *mut XDisplay, drawable: GLXDrawable) {
            GLX_FUNCTIONS.with(|glx| unsafe { glx.SwapBuffers(glx_display(display), drawable) })
        }
    }
}
