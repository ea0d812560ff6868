// gldrawable/src/lib.rs
//
//! Lifecycle management for GPU rendering surfaces ("drawables") on EGL and GLX.
//!
//! A drawable owns a connection to the platform display, the framebuffer configuration that was
//! chosen for a set of requested [`Capabilities`], and the native surface created against that
//! configuration. Two backends are provided:
//!
//! * EGL, for embedded OpenGL ES rendering into an existing native window. The window surface is
//!   created lazily, the first time it is actually needed after the drawable is realized.
//!
//! * GLX, for offscreen rendering into fixed-size desktop OpenGL pbuffers. The pbuffer is created
//!   eagerly when the drawable is constructed.
//!
//! Both backends talk to the platform through a narrow trait ([`EglApi`] and [`GlxApi`]
//! respectively) so that the native library can be swapped out.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;

pub mod platform;
pub use crate::platform::egl::api::EglApi;
pub use crate::platform::egl::drawable::EglDrawable;
pub use crate::platform::egl::factory::EglDrawableFactory;
pub use crate::platform::glx::api::GlxApi;
pub use crate::platform::glx::connection::GlxConnection;
pub use crate::platform::glx::drawable::{FloatingPointMode, GlxPbufferDrawable};
pub use crate::platform::glx::factory::GlxDrawableFactory;

pub mod error;
pub use crate::error::{Error, UnsupportedFeature, WindowingApiError};

mod attributes;
pub use crate::attributes::{AttributeList, MAX_ATTRIBUTES};

mod capabilities;
pub use crate::capabilities::{Capabilities, RenderingApi};

mod context;
pub use crate::context::{Context, ContextID, NativeHandles};

mod drawable;
pub use crate::drawable::Drawable;

mod toolkit;
pub use crate::toolkit::{lock_toolkit, ToolkitGuard};

mod window;
pub use crate::window::{LockStatus, NativeWindow, SurfaceLock};
#[cfg(feature = "sm-raw-window-handle-06")]
pub use crate::window::RawWindowTarget;

#[cfg(native_egl)]
#[allow(non_camel_case_types, clippy::all, dead_code, unused_imports)]
mod egl {
    use std::os::raw::{c_long, c_void};
    pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
    pub type khronos_uint64_t = u64;
    pub type khronos_ssize_t = c_long;
    pub type EGLint = i32;
    pub type EGLNativeDisplayType = *const c_void;
    pub type EGLNativePixmapType = *const c_void;
    pub type EGLNativeWindowType = *const c_void;
    pub type NativeDisplayType = EGLNativeDisplayType;
    pub type NativePixmapType = EGLNativePixmapType;
    pub type NativeWindowType = EGLNativeWindowType;
    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}

#[cfg(x11)]
#[allow(non_camel_case_types, clippy::all, dead_code, unused_imports)]
mod glx {
    include!(concat!(env!("OUT_DIR"), "/glx_bindings.rs"));
}
