// gldrawable/src/drawable.rs
//
//! Declarations common to all drawables.

use crate::{Capabilities, Context, Error};

use euclid::default::Size2D;

/// A renderable destination bound to a native surface.
///
/// Lifecycle: constructed, then realized and unrealized any number of times, then destroyed.
/// A destroyed drawable stays destroyed.
pub trait Drawable {
    /// Marks the drawable realized or unrealized. Unrealizing releases the native surface where
    /// the backend allows it.
    fn set_realized(&mut self, realized: bool) -> Result<(), Error>;

    fn is_realized(&self) -> bool;

    /// The surface width in pixels.
    fn width(&mut self) -> Result<i32, Error>;

    /// The surface height in pixels.
    fn height(&mut self) -> Result<i32, Error>;

    #[inline]
    fn size(&mut self) -> Result<Size2D<i32>, Error> {
        Ok(Size2D::new(self.width()?, self.height()?))
    }

    /// Requests a new size.
    fn set_size(&mut self, size: Size2D<i32>) -> Result<(), Error>;

    /// Presents the back buffer.
    fn swap_buffers(&mut self) -> Result<(), Error>;

    /// Releases the surface and the display connection. Calling this again is a no-op.
    fn destroy(&mut self) -> Result<(), Error>;

    fn is_destroyed(&self) -> bool;

    /// Creates a rendering context bound to this drawable.
    fn create_context(&self, share_with: Option<&Context>) -> Result<Context, Error>;

    /// The capabilities the drawable was created with.
    fn chosen_capabilities(&self) -> &Capabilities;
}

/// Bookkeeping every drawable carries regardless of backend.
#[derive(Clone, Debug)]
pub(crate) struct DrawableState {
    pub(crate) realized: bool,
    pub(crate) destroyed: bool,
    pub(crate) chosen_capabilities: Capabilities,
}

impl DrawableState {
    pub(crate) fn new(chosen_capabilities: Capabilities) -> DrawableState {
        DrawableState { realized: false, destroyed: false, chosen_capabilities }
    }

    #[inline]
    pub(crate) fn check_alive(&self) -> Result<(), Error> {
        if self.destroyed {
            Err(Error::Destroyed)
        } else {
            Ok(())
        }
    }
}
