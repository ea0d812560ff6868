// gldrawable/src/platform/glx/ffi.rs
//
//! GLX and Xlib types and the constants this backend uses.

#![allow(dead_code)]

use std::os::raw::{c_int, c_ulong, c_void};

pub type XDisplay = c_void;
pub type XID = c_ulong;
pub type GLXFBConfig = *const c_void;
pub type GLXDrawable = XID;
pub type GLXPbuffer = XID;

pub const GL_FALSE: c_int = 0;
pub const GL_TRUE: c_int = 1;

/// Terminates GLX attribute lists.
pub const GLX_NONE: c_int = 0;

pub const GLX_SUCCESS:       c_int = 0;
pub const GLX_BAD_SCREEN:    c_int = 1;
pub const GLX_BAD_ATTRIBUTE: c_int = 2;
pub const GLX_NO_EXTENSION:  c_int = 3;
pub const GLX_BAD_VISUAL:    c_int = 4;
pub const GLX_BAD_CONTEXT:   c_int = 5;
pub const GLX_BAD_VALUE:     c_int = 6;
pub const GLX_BAD_ENUM:      c_int = 7;

pub const GLX_DOUBLEBUFFER:      c_int = 5;
pub const GLX_RED_SIZE:          c_int = 8;
pub const GLX_GREEN_SIZE:        c_int = 9;
pub const GLX_BLUE_SIZE:         c_int = 10;
pub const GLX_ALPHA_SIZE:        c_int = 11;
pub const GLX_DEPTH_SIZE:        c_int = 12;
pub const GLX_STENCIL_SIZE:      c_int = 13;
pub const GLX_ACCUM_RED_SIZE:    c_int = 14;
pub const GLX_ACCUM_GREEN_SIZE:  c_int = 15;
pub const GLX_ACCUM_BLUE_SIZE:   c_int = 16;

pub const GLX_DRAWABLE_TYPE:     c_int = 0x8010;
pub const GLX_RENDER_TYPE:       c_int = 0x8011;
pub const GLX_FBCONFIG_ID:       c_int = 0x8013;
pub const GLX_WIDTH:             c_int = 0x801d;
pub const GLX_HEIGHT:            c_int = 0x801e;
pub const GLX_PBUFFER_HEIGHT:    c_int = 0x8040;
pub const GLX_PBUFFER_WIDTH:     c_int = 0x8041;

/// From `GLX_NV_float_buffer`.
pub const GLX_FLOAT_COMPONENTS_NV: c_int = 0x20b0;
pub const NV_FLOAT_BUFFER_EXTENSION: &str = "GLX_NV_float_buffer";

bitflags! {
    /// Values of `GLX_DRAWABLE_TYPE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DrawableTypeBits: c_int {
        const WINDOW  = 0x0001;
        const PIXMAP  = 0x0002;
        const PBUFFER = 0x0004;
    }
}

bitflags! {
    /// Values of `GLX_RENDER_TYPE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RenderTypeBits: c_int {
        const RGBA        = 0x0001;
        const COLOR_INDEX = 0x0002;
    }
}
