// gldrawable/src/platform/glx/attributes.rs
//
//! Translation of capabilities into `glXChooseFBConfig()` and `glXCreatePbuffer()` attribute
//! lists.

use super::ffi::*;
use crate::{AttributeList, Capabilities, Error, UnsupportedFeature};

use euclid::default::Size2D;

/// Builds the framebuffer configuration attribute list for an RGBA pbuffer.
///
/// Every size is passed through literally, zero included. Accumulation sizes are only listed when
/// an accumulation buffer was asked for. `extensions` is the GLX extension string; it is only
/// consulted when floating point components are requested.
pub fn pbuffer_config_attributes(capabilities: &Capabilities, extensions: Option<&str>)
                                 -> Result<AttributeList, Error> {
    if capabilities.offscreen_render_to_texture {
        return Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderToTexture));
    }
    if capabilities.offscreen_render_to_texture_rectangle {
        return Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderToTextureRectangle));
    }

    let mut attributes = AttributeList::new();
    attributes.push(GLX_DRAWABLE_TYPE, DrawableTypeBits::PBUFFER.bits());
    attributes.push(GLX_RENDER_TYPE, RenderTypeBits::RGBA.bits());
    attributes.push(GLX_DOUBLEBUFFER, gl_bool(capabilities.double_buffered));
    attributes.push(GLX_DEPTH_SIZE, capabilities.depth_bits);
    attributes.push(GLX_RED_SIZE, capabilities.red_bits);
    attributes.push(GLX_GREEN_SIZE, capabilities.green_bits);
    attributes.push(GLX_BLUE_SIZE, capabilities.blue_bits);
    attributes.push(GLX_ALPHA_SIZE, capabilities.alpha_bits);
    attributes.push(GLX_STENCIL_SIZE, capabilities.stencil_bits);

    if capabilities.has_accum_buffer() {
        attributes.push(GLX_ACCUM_RED_SIZE, capabilities.accum_red_bits);
        attributes.push(GLX_ACCUM_GREEN_SIZE, capabilities.accum_green_bits);
        attributes.push(GLX_ACCUM_BLUE_SIZE, capabilities.accum_blue_bits);
    }

    if capabilities.offscreen_floating_point {
        if !has_extension(extensions, NV_FLOAT_BUFFER_EXTENSION) {
            return Err(Error::UnsupportedConfiguration(UnsupportedFeature::FloatingPointBuffers));
        }
        attributes.push(GLX_FLOAT_COMPONENTS_NV, GL_TRUE);
    }

    Ok(attributes.terminate(GLX_NONE))
}

/// Builds the `glXCreatePbuffer()` attribute list for a pbuffer of the given size.
pub fn pbuffer_size_attributes(size: Size2D<i32>) -> AttributeList {
    let mut attributes = AttributeList::new();
    attributes.push(GLX_PBUFFER_WIDTH, size.width);
    attributes.push(GLX_PBUFFER_HEIGHT, size.height);
    attributes.terminate(GLX_NONE)
}

fn has_extension(extensions: Option<&str>, name: &str) -> bool {
    extensions.map_or(false, |extensions| extensions.split_whitespace().any(|ext| ext == name))
}

#[inline]
fn gl_bool(value: bool) -> i32 {
    if value { GL_TRUE } else { GL_FALSE }
}

#[cfg(test)]
mod tests {
    use super::{pbuffer_config_attributes, pbuffer_size_attributes};
    use crate::platform::glx::ffi::*;
    use crate::{Capabilities, Error, UnsupportedFeature};
    use euclid::default::Size2D;

    #[test]
    fn test_zero_alpha_is_literal() {
        let capabilities = Capabilities::default().with_color_bits(8, 8, 8, 0);
        let attributes = pbuffer_config_attributes(&capabilities, None).unwrap();
        assert_eq!(attributes.get(GLX_ALPHA_SIZE), Some(0));
        assert_eq!(attributes.get(GLX_STENCIL_SIZE), Some(0));
        assert_eq!(attributes.get(GLX_DRAWABLE_TYPE), Some(DrawableTypeBits::PBUFFER.bits()));
        assert_eq!(attributes.get(GLX_RENDER_TYPE), Some(RenderTypeBits::RGBA.bits()));
        assert_eq!(attributes.get(GLX_DOUBLEBUFFER), Some(GL_TRUE));
        assert_eq!(attributes.as_slice().last(), Some(&GLX_NONE));
    }

    #[test]
    fn test_accum_sizes_only_when_requested() {
        let without = pbuffer_config_attributes(&Capabilities::default(), None).unwrap();
        assert!(!without.contains_key(GLX_ACCUM_RED_SIZE));
        assert!(!without.contains_key(GLX_ACCUM_GREEN_SIZE));
        assert!(!without.contains_key(GLX_ACCUM_BLUE_SIZE));

        let capabilities = Capabilities::default().with_accum_bits(0, 16, 0);
        let with = pbuffer_config_attributes(&capabilities, None).unwrap();
        assert_eq!(with.get(GLX_ACCUM_RED_SIZE), Some(0));
        assert_eq!(with.get(GLX_ACCUM_GREEN_SIZE), Some(16));
        assert_eq!(with.get(GLX_ACCUM_BLUE_SIZE), Some(0));
    }

    #[test]
    fn test_single_buffered() {
        let capabilities = Capabilities::default().with_double_buffered(false);
        let attributes = pbuffer_config_attributes(&capabilities, None).unwrap();
        assert_eq!(attributes.get(GLX_DOUBLEBUFFER), Some(GL_FALSE));
    }

    #[test]
    fn test_floating_point_needs_extension() {
        let capabilities = Capabilities::default().with_floating_point(true);
        match pbuffer_config_attributes(&capabilities, Some("GLX_ARB_multisample")) {
            Err(Error::UnsupportedConfiguration(UnsupportedFeature::FloatingPointBuffers)) => {}
            other => panic!("unexpected result: {:?}", other),
        }

        let extensions = "GLX_ARB_multisample GLX_NV_float_buffer GLX_SGIX_pbuffer";
        let attributes = pbuffer_config_attributes(&capabilities, Some(extensions)).unwrap();
        assert_eq!(attributes.get(GLX_FLOAT_COMPONENTS_NV), Some(GL_TRUE));
    }

    #[test]
    fn test_render_to_texture_is_refused() {
        let capabilities = Capabilities::default().with_render_to_texture(true);
        match pbuffer_config_attributes(&capabilities, None) {
            Err(Error::UnsupportedConfiguration(UnsupportedFeature::RenderToTexture)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_size_attributes() {
        let attributes = pbuffer_size_attributes(Size2D::new(640, 480));
        assert_eq!(attributes.as_slice(),
                   &[GLX_PBUFFER_WIDTH, 640, GLX_PBUFFER_HEIGHT, 480, GLX_NONE]);
    }
}
