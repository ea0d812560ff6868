// gldrawable/src/platform/egl/error.rs

//! Translation of errors from the EGL API to `gldrawable` errors.

use super::ffi::*;
use crate::WindowingApiError;

pub(crate) trait ToWindowingApiError {
    fn to_windowing_api_error(self) -> WindowingApiError;
}

impl ToWindowingApiError for EGLint {
    fn to_windowing_api_error(self) -> WindowingApiError {
        match self {
            EGL_NOT_INITIALIZED => WindowingApiError::NotInitialized,
            EGL_BAD_ACCESS => WindowingApiError::BadAccess,
            EGL_BAD_ALLOC => WindowingApiError::BadAlloc,
            EGL_BAD_ATTRIBUTE => WindowingApiError::BadAttribute,
            EGL_BAD_CONFIG => WindowingApiError::BadConfig,
            EGL_BAD_CONTEXT => WindowingApiError::BadContext,
            EGL_BAD_CURRENT_SURFACE => WindowingApiError::BadCurrentSurface,
            EGL_BAD_DISPLAY => WindowingApiError::BadDisplay,
            EGL_BAD_SURFACE => WindowingApiError::BadSurface,
            EGL_BAD_MATCH => WindowingApiError::BadMatch,
            EGL_BAD_PARAMETER => WindowingApiError::BadParameter,
            EGL_BAD_NATIVE_PIXMAP => WindowingApiError::BadNativePixmap,
            EGL_BAD_NATIVE_WINDOW => WindowingApiError::BadNativeWindow,
            EGL_CONTEXT_LOST => WindowingApiError::ContextLost,
            _ => WindowingApiError::Failed,
        }
    }
}
