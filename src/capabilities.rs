// gldrawable/src/capabilities.rs
//
//! The framebuffer capabilities a drawable is asked to provide.

/// The client API a drawable will be rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderingApi {
    /// OpenGL ES 1.x. EGL only.
    GLES1,
    /// OpenGL ES 2.x. EGL only.
    GLES2,
    /// Desktop OpenGL. GLX only.
    GL,
}

/// A request for a set of framebuffer properties.
///
/// Bit counts are minimums in the platform's sense. A value of zero for alpha or stencil means
/// "don't care"; each backend decides how that is spelled in its attribute list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub red_bits: i32,
    pub green_bits: i32,
    pub blue_bits: i32,
    pub alpha_bits: i32,
    pub depth_bits: i32,
    pub stencil_bits: i32,
    pub accum_red_bits: i32,
    pub accum_green_bits: i32,
    pub accum_blue_bits: i32,
    pub double_buffered: bool,
    pub offscreen_render_to_texture: bool,
    pub offscreen_render_to_texture_rectangle: bool,
    pub offscreen_floating_point: bool,
}

impl Default for Capabilities {
    #[inline]
    fn default() -> Capabilities {
        Capabilities {
            red_bits: 8,
            green_bits: 8,
            blue_bits: 8,
            alpha_bits: 0,
            depth_bits: 24,
            stencil_bits: 0,
            accum_red_bits: 0,
            accum_green_bits: 0,
            accum_blue_bits: 0,
            double_buffered: true,
            offscreen_render_to_texture: false,
            offscreen_render_to_texture_rectangle: false,
            offscreen_floating_point: false,
        }
    }
}

impl Capabilities {
    #[inline]
    pub fn with_color_bits(mut self, red: i32, green: i32, blue: i32, alpha: i32) -> Capabilities {
        self.red_bits = red;
        self.green_bits = green;
        self.blue_bits = blue;
        self.alpha_bits = alpha;
        self
    }

    #[inline]
    pub fn with_depth_bits(mut self, depth_bits: i32) -> Capabilities {
        self.depth_bits = depth_bits;
        self
    }

    #[inline]
    pub fn with_stencil_bits(mut self, stencil_bits: i32) -> Capabilities {
        self.stencil_bits = stencil_bits;
        self
    }

    #[inline]
    pub fn with_accum_bits(mut self, red: i32, green: i32, blue: i32) -> Capabilities {
        self.accum_red_bits = red;
        self.accum_green_bits = green;
        self.accum_blue_bits = blue;
        self
    }

    #[inline]
    pub fn with_double_buffered(mut self, double_buffered: bool) -> Capabilities {
        self.double_buffered = double_buffered;
        self
    }

    #[inline]
    pub fn with_render_to_texture(mut self, render_to_texture: bool) -> Capabilities {
        self.offscreen_render_to_texture = render_to_texture;
        self
    }

    #[inline]
    pub fn with_render_to_texture_rectangle(mut self, rectangle: bool) -> Capabilities {
        self.offscreen_render_to_texture_rectangle = rectangle;
        self
    }

    #[inline]
    pub fn with_floating_point(mut self, floating_point: bool) -> Capabilities {
        self.offscreen_floating_point = floating_point;
        self
    }

    /// Whether any accumulation buffer channel was requested.
    #[inline]
    pub fn has_accum_buffer(&self) -> bool {
        self.accum_red_bits > 0 || self.accum_green_bits > 0 || self.accum_blue_bits > 0
    }
}
