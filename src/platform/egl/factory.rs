// gldrawable/src/platform/egl/factory.rs
//
//! Creation of EGL drawables.

use super::api::EglApi;
use super::drawable::EglDrawable;
use crate::window::NativeWindow;
use crate::{Capabilities, Drawable, Error, RenderingApi, UnsupportedFeature};

use euclid::default::Size2D;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// Makes EGL drawables for one OpenGL ES flavor.
///
/// EGL drawables here always render into windows; there is no pbuffer support.
#[derive(Clone)]
pub struct EglDrawableFactory {
    egl: Arc<dyn EglApi>,
    api: RenderingApi,
}

impl EglDrawableFactory {
    /// Creates a factory over the given EGL entry points. `api` must be an OpenGL ES flavor.
    pub fn new(egl: Arc<dyn EglApi>, api: RenderingApi) -> Result<EglDrawableFactory, Error> {
        match api {
            RenderingApi::GLES1 | RenderingApi::GLES2 => Ok(EglDrawableFactory { egl, api }),
            RenderingApi::GL => {
                Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderingApi(api)))
            }
        }
    }

    /// Creates a factory over the system EGL library.
    #[cfg(native_egl)]
    pub fn native(api: RenderingApi) -> Result<EglDrawableFactory, Error> {
        let egl = super::api::NativeEgl::load()?;
        EglDrawableFactory::new(egl, api)
    }

    #[cfg(not(native_egl))]
    pub fn native(_: RenderingApi) -> Result<EglDrawableFactory, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    #[inline]
    pub fn rendering_api(&self) -> RenderingApi {
        self.api
    }

    /// Creates a drawable for `window`. The window surface itself is created later, on first use
    /// after the drawable is realized.
    pub fn create_drawable(&self, window: Arc<dyn NativeWindow>, capabilities: &Capabilities)
                           -> Result<EglDrawable, Error> {
        EglDrawable::new(self.egl.clone(), window, capabilities, self.api)
    }

    #[inline]
    pub fn can_create_pbuffer(&self) -> bool {
        false
    }

    /// Not available on OpenGL ES.
    pub fn create_pbuffer(&self, _: &Capabilities, _: Size2D<i32>)
                          -> Result<Box<dyn Drawable>, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }

    /// Not available on OpenGL ES.
    pub fn create_offscreen_drawable(&self, _: &Capabilities)
                                     -> Result<Box<dyn Drawable>, Error> {
        Err(Error::UnsupportedOnThisPlatform)
    }
}

impl Debug for EglDrawableFactory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "EglDrawableFactory({:?})", self.api)
    }
}
