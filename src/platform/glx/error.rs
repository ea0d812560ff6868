//! Translation of GLX errors to `gldrawable` errors.

use super::ffi::*;
use crate::WindowingApiError;

use std::os::raw::c_int;

#[cfg_attr(not(x11), allow(dead_code))]
pub(crate) fn glx_error_to_windowing_api_error(glx_error: c_int) -> WindowingApiError {
    match glx_error {
        GLX_BAD_SCREEN => WindowingApiError::BadScreen,
        GLX_BAD_ATTRIBUTE => WindowingApiError::BadAttribute,
        GLX_NO_EXTENSION => WindowingApiError::NoExtension,
        GLX_BAD_VISUAL => WindowingApiError::BadVisual,
        GLX_BAD_CONTEXT => WindowingApiError::BadContext,
        GLX_BAD_VALUE => WindowingApiError::BadValue,
        GLX_BAD_ENUM => WindowingApiError::BadEnumeration,
        _ => WindowingApiError::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::glx_error_to_windowing_api_error;
    use crate::platform::glx::ffi::{GLX_BAD_ENUM, GLX_BAD_VALUE, GLX_SUCCESS};
    use crate::WindowingApiError;

    #[test]
    fn test_error_codes() {
        assert_eq!(glx_error_to_windowing_api_error(GLX_BAD_VALUE), WindowingApiError::BadValue);
        assert_eq!(glx_error_to_windowing_api_error(GLX_BAD_ENUM),
                   WindowingApiError::BadEnumeration);
        assert_eq!(glx_error_to_windowing_api_error(GLX_SUCCESS), WindowingApiError::Failed);
    }
}
