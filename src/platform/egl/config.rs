// gldrawable/src/platform/egl/config.rs
//
//! EGL framebuffer configuration selection.

use super::api::EglApi;
use super::ffi::*;
use crate::{AttributeList, Error};

/// How many candidates drawables ask `eglChooseConfig()` for.
pub const MAX_CONFIG_CANDIDATES: usize = 1;

/// Chooses a configuration matching `attributes`.
///
/// The first candidate in the order EGL returns them wins. No ranking is done here.
pub fn choose_config(egl: &dyn EglApi,
                     egl_display: EGLDisplay,
                     attributes: &AttributeList,
                     max_candidates: usize)
                     -> Result<EGLConfig, Error> {
    debug_assert!(attributes.is_terminated());
    let configs = egl
        .choose_config(egl_display, attributes.as_slice(), max_candidates)
        .map_err(Error::ConfigurationSelectionFailed)?;
    match configs.first() {
        None => Err(Error::NoMatchingConfiguration),
        Some(&egl_config) => {
            debug!("{} EGL config(s) matched {:?}", configs.len(), attributes);
            Ok(egl_config)
        }
    }
}

/// Reads back a single attribute of a configuration, for diagnostics.
pub fn get_config_attr(egl: &dyn EglApi,
                       egl_display: EGLDisplay,
                       egl_config: EGLConfig,
                       attribute: EGLint)
                       -> Result<EGLint, Error> {
    egl.get_config_attrib(egl_display, egl_config, attribute).map_err(Error::QueryFailed)
}

pub(crate) fn log_config(egl: &dyn EglApi, egl_display: EGLDisplay, egl_config: EGLConfig) {
    if !log_enabled!(log::Level::Debug) {
        return;
    }

    let attributes = [
        ("config id", EGL_CONFIG_ID),
        ("renderable type", EGL_RENDERABLE_TYPE),
        ("surface type", EGL_SURFACE_TYPE),
        ("r", EGL_RED_SIZE),
        ("g", EGL_GREEN_SIZE),
        ("b", EGL_BLUE_SIZE),
        ("a", EGL_ALPHA_SIZE),
        ("depth", EGL_DEPTH_SIZE),
        ("stencil", EGL_STENCIL_SIZE),
    ];
    for (name, attribute) in attributes {
        match get_config_attr(egl, egl_display, egl_config, attribute) {
            Ok(value) => debug!("chosen EGL config {}: {:#x}", name, value),
            Err(err) => debug!("couldn't query EGL config {}: {:?}", name, err),
        }
    }
}
