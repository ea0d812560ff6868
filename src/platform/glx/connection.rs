// gldrawable/src/platform/glx/connection.rs
//
//! A shared connection to the X server.

use super::api::GlxApi;
use super::ffi::XDisplay;
use crate::Error;

use std::fmt::{self, Debug, Formatter};
use std::os::raw::c_int;
use std::sync::Arc;

/// An open X display, closed when the last drawable or factory using it goes away.
pub struct GlxConnection {
    glx: Arc<dyn GlxApi>,
    display: *mut XDisplay,
    screen: c_int,
}

unsafe impl Send for GlxConnection {}
unsafe impl Sync for GlxConnection {}

impl GlxConnection {
    /// Opens the default X display.
    pub fn open(glx: Arc<dyn GlxApi>) -> Result<Arc<GlxConnection>, Error> {
        let display = glx.open_display();
        if display.is_null() {
            return Err(Error::DisplayAcquisitionFailed);
        }
        let screen = glx.default_screen(display);
        debug!("opened X display {:?}, screen {}", display, screen);
        Ok(Arc::new(GlxConnection { glx, display, screen }))
    }

    #[inline]
    pub fn display(&self) -> *mut XDisplay {
        self.display
    }

    #[inline]
    pub fn screen(&self) -> c_int {
        self.screen
    }

    #[inline]
    pub fn glx(&self) -> &dyn GlxApi {
        &*self.glx
    }
}

impl Drop for GlxConnection {
    fn drop(&mut self) {
        self.glx.close_display(self.display);
        debug!("closed X display {:?}", self.display);
    }
}

impl Debug for GlxConnection {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "GlxConnection({:?}, screen {})", self.display, self.screen)
    }
}
