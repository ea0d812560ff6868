// gldrawable/src/platform/egl/attributes.rs
//
//! Translation of capabilities into `eglChooseConfig()` attribute lists.

use super::ffi::*;
use crate::{AttributeList, Capabilities, Error, RenderingApi, UnsupportedFeature};

/// Builds the configuration attribute list for a window-renderable EGL config.
///
/// Alpha and stencil sizes of zero are spelled `EGL_DONT_CARE`. Offscreen modes don't exist on
/// this backend and are refused before anything is sent to EGL.
pub fn config_attributes(capabilities: &Capabilities, api: RenderingApi)
                         -> Result<AttributeList, Error> {
    if capabilities.offscreen_render_to_texture {
        return Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderToTexture));
    }
    if capabilities.offscreen_render_to_texture_rectangle {
        return Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderToTextureRectangle));
    }
    if capabilities.offscreen_floating_point {
        return Err(Error::UnsupportedConfiguration(UnsupportedFeature::FloatingPointBuffers));
    }

    let renderable_type = match api {
        RenderingApi::GLES1 => RenderableTypeBits::OPENGL_ES,
        RenderingApi::GLES2 => RenderableTypeBits::OPENGL_ES2,
        RenderingApi::GL => {
            return Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderingApi(api)))
        }
    };

    let mut attributes = AttributeList::new();
    attributes.push(EGL_RENDERABLE_TYPE, renderable_type.bits());
    attributes.push(EGL_SURFACE_TYPE, SurfaceTypeBits::WINDOW.bits());
    attributes.push(EGL_RED_SIZE, capabilities.red_bits);
    attributes.push(EGL_GREEN_SIZE, capabilities.green_bits);
    attributes.push(EGL_BLUE_SIZE, capabilities.blue_bits);
    attributes.push(EGL_ALPHA_SIZE, or_dont_care(capabilities.alpha_bits));
    attributes.push(EGL_STENCIL_SIZE, or_dont_care(capabilities.stencil_bits));
    attributes.push(EGL_DEPTH_SIZE, capabilities.depth_bits);
    Ok(attributes.terminate(EGL_NONE))
}

#[inline]
fn or_dont_care(bits: EGLint) -> EGLint {
    if bits > 0 { bits } else { EGL_DONT_CARE }
}

#[cfg(test)]
mod tests {
    use super::config_attributes;
    use crate::platform::egl::ffi::*;
    use crate::{Capabilities, Error, RenderingApi, UnsupportedFeature};

    #[test]
    fn test_zero_alpha_and_stencil_are_dont_care() {
        let capabilities = Capabilities::default().with_color_bits(8, 8, 8, 0);
        let attributes = config_attributes(&capabilities, RenderingApi::GLES2).unwrap();
        assert_eq!(attributes.get(EGL_ALPHA_SIZE), Some(EGL_DONT_CARE));
        assert_eq!(attributes.get(EGL_STENCIL_SIZE), Some(EGL_DONT_CARE));
        assert_eq!(attributes.as_slice().last(), Some(&EGL_NONE));
    }

    #[test]
    fn test_nonzero_sizes_are_copied() {
        let capabilities = Capabilities::default()
            .with_color_bits(5, 6, 5, 8)
            .with_depth_bits(16)
            .with_stencil_bits(8);
        let attributes = config_attributes(&capabilities, RenderingApi::GLES1).unwrap();
        assert_eq!(attributes.get(EGL_RENDERABLE_TYPE), Some(RenderableTypeBits::OPENGL_ES.bits()));
        assert_eq!(attributes.get(EGL_SURFACE_TYPE), Some(SurfaceTypeBits::WINDOW.bits()));
        assert_eq!(attributes.get(EGL_RED_SIZE), Some(5));
        assert_eq!(attributes.get(EGL_GREEN_SIZE), Some(6));
        assert_eq!(attributes.get(EGL_BLUE_SIZE), Some(5));
        assert_eq!(attributes.get(EGL_ALPHA_SIZE), Some(8));
        assert_eq!(attributes.get(EGL_STENCIL_SIZE), Some(8));
        assert_eq!(attributes.get(EGL_DEPTH_SIZE), Some(16));
    }

    #[test]
    fn test_es2_renderable_bit() {
        let attributes = config_attributes(&Capabilities::default(), RenderingApi::GLES2).unwrap();
        assert_eq!(attributes.get(EGL_RENDERABLE_TYPE),
                   Some(RenderableTypeBits::OPENGL_ES2.bits()));
    }

    #[test]
    fn test_offscreen_modes_are_refused() {
        let cases = [
            (Capabilities::default().with_render_to_texture(true),
             UnsupportedFeature::RenderToTexture),
            (Capabilities::default().with_render_to_texture_rectangle(true),
             UnsupportedFeature::RenderToTextureRectangle),
            (Capabilities::default().with_floating_point(true),
             UnsupportedFeature::FloatingPointBuffers),
        ];
        for (capabilities, expected) in cases {
            match config_attributes(&capabilities, RenderingApi::GLES2) {
                Err(Error::UnsupportedConfiguration(feature)) => assert_eq!(feature, expected),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn test_desktop_gl_is_refused() {
        match config_attributes(&Capabilities::default(), RenderingApi::GL) {
            Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderingApi(_))) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
