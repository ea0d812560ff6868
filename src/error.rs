// gldrawable/src/error.rs
//
//! Various errors that methods can produce.

use crate::capabilities::RenderingApi;

use euclid::default::Size2D;
use std::error;
use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
///
/// None of these are retried internally: every error is terminal for the call that produced it.
#[derive(Debug)]
pub enum Error {
    /// The platform returned its "no display" sentinel for the requested display.
    DisplayAcquisitionFailed,
    /// The display connection could not be initialized.
    DisplayInitFailed(WindowingApiError),
    /// The requested capabilities include a feature this backend cannot provide.
    UnsupportedConfiguration(UnsupportedFeature),
    /// The platform's configuration query itself reported failure.
    ConfigurationSelectionFailed(WindowingApiError),
    /// The configuration query succeeded, but nothing matched the requested attributes.
    NoMatchingConfiguration,
    /// The system couldn't create a surface.
    SurfaceCreationFailed(WindowingApiError),
    /// The system couldn't destroy a surface.
    ///
    /// The surface handle has already been forgotten when this is returned; it is not safe to
    /// use the old handle again.
    SurfaceDestructionFailed(WindowingApiError),
    /// The width or height of a surface couldn't be queried.
    SurfaceQueryFailed(WindowingApiError),
    /// An attribute of a chosen configuration couldn't be queried.
    QueryFailed(WindowingApiError),
    /// The operation is not supported on this kind of surface (e.g. resizing a pbuffer).
    UnsupportedOperation,
    /// The platform doesn't support this method.
    UnsupportedOnThisPlatform,
    /// Pbuffers must be created with a positive width and height.
    InvalidPbufferSize(Size2D<i32>),
    /// The drawable must be realized before its window surface can be used.
    NotRealized,
    /// The drawable has already been destroyed.
    Destroyed,
    /// The native buffer swap failed.
    PresentFailed(WindowingApiError),
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
}

/// Capabilities that a backend may refuse up front, before any configuration is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsupportedFeature {
    /// Offscreen render-to-texture.
    RenderToTexture,
    /// Offscreen render-to-texture-rectangle.
    RenderToTextureRectangle,
    /// Floating-point color buffers, or the extension they require is missing.
    FloatingPointBuffers,
    /// The backend cannot render with this client API.
    RenderingApi(RenderingApi),
}

/// Abstraction of the errors that EGL and GLX return.
///
/// They all tend to follow similar patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// EGL: An unrecognized attribute or attribute value was passed in the attribute list.
    /// GLX: Attribute to get is bad.
    BadAttribute,
    /// EGL: An EGLConfig argument does not name a valid EGL frame buffer configuration.
    BadConfig,
    /// EGL: An EGLContext argument does not name a valid EGL rendering context.
    /// GLX: The context is invalid.
    BadContext,
    /// EGL: An EGLDisplay argument does not name a valid EGL display connection.
    BadDisplay,
    /// EGL: Arguments are inconsistent (for example, a valid context requires
    /// buffers not supplied by a valid surface).
    BadMatch,
    /// EGL: EGL failed to allocate resources for the requested operation.
    BadAlloc,
    /// EGL: EGL is not initialized, or could not be initialized, for the
    /// specified EGL display connection.
    NotInitialized,
    /// EGL: EGL cannot access a requested resource (for example a context is
    /// bound in another thread).
    BadAccess,
    /// EGL: The current surface of the calling thread is a window, pixel
    /// buffer or pixmap that is no longer valid.
    BadCurrentSurface,
    /// EGL: An EGLSurface argument does not name a valid surface (window,
    /// pixel buffer or pixmap) configured for GL rendering.
    BadSurface,
    /// EGL: One or more argument values are invalid.
    BadParameter,
    /// EGL: A NativePixmapType argument does not refer to a valid native
    /// pixmap.
    BadNativePixmap,
    /// EGL: A NativeWindowType argument does not refer to a valid native
    /// window.
    BadNativeWindow,
    /// EGL: A power management event has occurred. The application must
    /// destroy all contexts and reinitialise OpenGL ES state and objects to
    /// continue rendering.
    ContextLost,
    /// GLX: Screen number is bad.
    BadScreen,
    /// GLX: The GLX extension is unavailable on the server.
    NoExtension,
    /// GLX: Visual number not known by GLX.
    BadVisual,
    /// GLX: Invalid value.
    BadValue,
    /// GLX: Invalid enum value.
    BadEnumeration,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::DisplayAcquisitionFailed => write!(f, "no display could be acquired"),
            Error::DisplayInitFailed(err) => write!(f, "display initialization failed: {:?}", err),
            Error::UnsupportedConfiguration(feature) => {
                write!(f, "unsupported configuration: {:?}", feature)
            }
            Error::ConfigurationSelectionFailed(err) => {
                write!(f, "configuration selection failed: {:?}", err)
            }
            Error::NoMatchingConfiguration => write!(f, "no matching configuration"),
            Error::SurfaceCreationFailed(err) => write!(f, "surface creation failed: {:?}", err),
            Error::SurfaceDestructionFailed(err) => {
                write!(f, "surface destruction failed: {:?}", err)
            }
            Error::SurfaceQueryFailed(err) => write!(f, "surface query failed: {:?}", err),
            Error::QueryFailed(err) => write!(f, "configuration query failed: {:?}", err),
            Error::UnsupportedOperation => write!(f, "operation not supported on this surface"),
            Error::UnsupportedOnThisPlatform => write!(f, "not supported on this platform"),
            Error::InvalidPbufferSize(size) => write!(
                f,
                "initial width and height of pbuffer must be positive (were ({}, {}))",
                size.width, size.height
            ),
            Error::NotRealized => write!(f, "drawable is not realized"),
            Error::Destroyed => write!(f, "drawable has been destroyed"),
            Error::PresentFailed(err) => write!(f, "buffer swap failed: {:?}", err),
            Error::NoGLLibraryFound => write!(f, "no GL library could be loaded"),
        }
    }
}

impl error::Error for Error {}
