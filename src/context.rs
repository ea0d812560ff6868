// gldrawable/src/context.rs
//
//! Rendering contexts bound to a drawable.
//!
//! Making a context current is the business of the context-binding layer; the types here only
//! carry what it needs from the drawable.

use crate::capabilities::RenderingApi;
use crate::platform::egl::ffi::{EGLConfig, EGLDisplay, EGLSurface};
use crate::platform::glx::ffi::{GLXFBConfig, GLXPbuffer, XDisplay};

use std::sync::{Mutex, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContextID(pub u64);

pub(crate) static CREATE_CONTEXT_MUTEX: Mutex<ContextID> = Mutex::new(ContextID(0));

/// The native objects of the drawable a context was created for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NativeHandles {
    Egl {
        display: EGLDisplay,
        config: EGLConfig,
        surface: EGLSurface,
    },
    Glx {
        display: *mut XDisplay,
        fb_config: GLXFBConfig,
        pbuffer: GLXPbuffer,
    },
}

/// A rendering context created by a drawable, optionally sharing objects with another context.
#[derive(Debug)]
pub struct Context {
    id: ContextID,
    api: RenderingApi,
    handles: NativeHandles,
    share_with: Option<ContextID>,
}

impl Context {
    pub(crate) fn new(api: RenderingApi, handles: NativeHandles, share_with: Option<&Context>)
                      -> Context {
        let mut next_context_id =
            CREATE_CONTEXT_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let context = Context {
            id: *next_context_id,
            api,
            handles,
            share_with: share_with.map(Context::id),
        };
        next_context_id.0 += 1;
        debug!("created context {:?} sharing with {:?}", context.id, context.share_with);
        context
    }

    #[inline]
    pub fn id(&self) -> ContextID {
        self.id
    }

    #[inline]
    pub fn api(&self) -> RenderingApi {
        self.api
    }

    #[inline]
    pub fn native_handles(&self) -> NativeHandles {
        self.handles
    }

    /// The context whose objects this context shares, if any.
    #[inline]
    pub fn shared_context(&self) -> Option<ContextID> {
        self.share_with
    }
}
