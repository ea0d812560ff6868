// gldrawable/build.rs
//
//! The `gldrawable` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        linux: { all(unix, not(any(macos, android, target_env = "ohos"))) },

        // Backends compiled against the native libraries.
        native_egl: { all(unix, not(macos)) },
        x11: { all(linux, feature = "sm-x11") },
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let target_family = env::var("CARGO_CFG_TARGET_FAMILY").ok();
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    let unix = target_family.as_ref().map_or(false, |f| f == "unix");

    // Generate EGL bindings.
    if unix && target_os != "macos" {
        let mut file = File::create(dest.join("egl_bindings.rs")).unwrap();
        let registry = Registry::new(Api::Egl, (1, 5), Profile::Core, Fallbacks::All, []);
        registry.write_bindings(StructGenerator, &mut file).unwrap();
    }

    // Generate GLX bindings.
    if unix && target_os != "macos" && target_os != "android" && cfg!(feature = "sm-x11") {
        let mut file = File::create(dest.join("glx_bindings.rs")).unwrap();
        let registry = Registry::new(Api::Glx, (1, 4), Profile::Core, Fallbacks::All, []);
        registry.write_bindings(StructGenerator, &mut file).unwrap();
    }
}
