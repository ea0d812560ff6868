// gldrawable/src/platform/glx/config.rs
//
//! GLX framebuffer configuration selection.

use super::api::GlxApi;
use super::ffi::*;
use crate::{AttributeList, Error};

use std::os::raw::c_int;

/// How many of the configurations GLX returns are considered.
pub const MAX_FB_CONFIG_CANDIDATES: usize = 1;

/// Chooses a framebuffer configuration matching `attributes` on `screen`.
///
/// At most `max_candidates` of the configs GLX returns are looked at, and the first one wins.
pub fn choose_fb_config(glx: &dyn GlxApi,
                        display: *mut XDisplay,
                        screen: c_int,
                        attributes: &AttributeList,
                        max_candidates: usize)
                        -> Result<GLXFBConfig, Error> {
    debug_assert!(attributes.is_terminated());
    let mut configs = glx
        .choose_fb_config(display, screen, attributes.as_slice())
        .map_err(Error::ConfigurationSelectionFailed)?;
    configs.truncate(max_candidates);
    match configs.first() {
        None => Err(Error::NoMatchingConfiguration),
        Some(&fb_config) => Ok(fb_config),
    }
}

/// Reads back a single attribute of a framebuffer configuration.
pub fn get_fb_config_attr(glx: &dyn GlxApi,
                          display: *mut XDisplay,
                          fb_config: GLXFBConfig,
                          attribute: c_int)
                          -> Result<c_int, Error> {
    glx.get_fb_config_attrib(display, fb_config, attribute).map_err(Error::QueryFailed)
}

pub(crate) fn log_fb_config(glx: &dyn GlxApi, display: *mut XDisplay, fb_config: GLXFBConfig) {
    if !log_enabled!(log::Level::Debug) {
        return;
    }

    let attributes = [
        ("fbconfig id", GLX_FBCONFIG_ID),
        ("drawable type", GLX_DRAWABLE_TYPE),
        ("double buffered", GLX_DOUBLEBUFFER),
        ("r", GLX_RED_SIZE),
        ("g", GLX_GREEN_SIZE),
        ("b", GLX_BLUE_SIZE),
        ("a", GLX_ALPHA_SIZE),
        ("depth", GLX_DEPTH_SIZE),
        ("stencil", GLX_STENCIL_SIZE),
    ];
    for (name, attribute) in attributes {
        match get_fb_config_attr(glx, display, fb_config, attribute) {
            Ok(value) => debug!("chosen GLX fbconfig {}: {:#x}", name, value),
            Err(err) => debug!("couldn't query GLX fbconfig {}: {:?}", name, err),
        }
    }
}
