// gldrawable/src/platform/egl/ffi.rs
//
//! EGL types and the constants this backend uses.

#![allow(dead_code)]

use std::os::raw::c_void;
use std::ptr;

pub type EGLint = i32;
pub type EGLBoolean = u32;
pub type EGLDisplay = *const c_void;
pub type EGLConfig = *const c_void;
pub type EGLSurface = *const c_void;
pub type EGLNativeDisplayType = *const c_void;
pub type EGLNativeWindowType = *const c_void;

pub const EGL_FALSE: EGLBoolean = 0;
pub const EGL_TRUE: EGLBoolean = 1;

pub const EGL_NO_DISPLAY: EGLDisplay = ptr::null();
pub const EGL_NO_SURFACE: EGLSurface = ptr::null();
pub const EGL_DEFAULT_DISPLAY: EGLNativeDisplayType = ptr::null();

pub const EGL_DONT_CARE: EGLint = -1;

pub const EGL_SUCCESS:             EGLint = 0x3000;
pub const EGL_NOT_INITIALIZED:     EGLint = 0x3001;
pub const EGL_BAD_ACCESS:          EGLint = 0x3002;
pub const EGL_BAD_ALLOC:           EGLint = 0x3003;
pub const EGL_BAD_ATTRIBUTE:       EGLint = 0x3004;
pub const EGL_BAD_CONFIG:          EGLint = 0x3005;
pub const EGL_BAD_CONTEXT:         EGLint = 0x3006;
pub const EGL_BAD_CURRENT_SURFACE: EGLint = 0x3007;
pub const EGL_BAD_DISPLAY:         EGLint = 0x3008;
pub const EGL_BAD_MATCH:           EGLint = 0x3009;
pub const EGL_BAD_NATIVE_PIXMAP:   EGLint = 0x300a;
pub const EGL_BAD_NATIVE_WINDOW:   EGLint = 0x300b;
pub const EGL_BAD_PARAMETER:       EGLint = 0x300c;
pub const EGL_BAD_SURFACE:         EGLint = 0x300d;
pub const EGL_CONTEXT_LOST:        EGLint = 0x300e;

pub const EGL_BUFFER_SIZE:     EGLint = 0x3020;
pub const EGL_ALPHA_SIZE:      EGLint = 0x3021;
pub const EGL_BLUE_SIZE:       EGLint = 0x3022;
pub const EGL_GREEN_SIZE:      EGLint = 0x3023;
pub const EGL_RED_SIZE:        EGLint = 0x3024;
pub const EGL_DEPTH_SIZE:      EGLint = 0x3025;
pub const EGL_STENCIL_SIZE:    EGLint = 0x3026;
pub const EGL_CONFIG_ID:       EGLint = 0x3028;
pub const EGL_SURFACE_TYPE:    EGLint = 0x3033;
pub const EGL_NONE:            EGLint = 0x3038;
pub const EGL_RENDERABLE_TYPE: EGLint = 0x3040;
pub const EGL_HEIGHT:          EGLint = 0x3056;
pub const EGL_WIDTH:           EGLint = 0x3057;

bitflags! {
    /// Values of `EGL_SURFACE_TYPE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SurfaceTypeBits: EGLint {
        const PBUFFER = 0x0001;
        const PIXMAP  = 0x0002;
        const WINDOW  = 0x0004;
    }
}

bitflags! {
    /// Values of `EGL_RENDERABLE_TYPE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RenderableTypeBits: EGLint {
        const OPENGL_ES  = 0x0001;
        const OPENGL_ES2 = 0x0004;
        const OPENGL     = 0x0008;
    }
}
