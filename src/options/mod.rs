//! Build option types: platform, spin, chip and the resolved [`BuildOptions`].

mod builder;
mod core;
mod platform;
mod variant;

pub use builder::{BuildOptionsBuilder, DEFAULT_SOURCE, DEFAULT_TARGET};
pub use self::core::{BuildOptions, UBERJAR_MODULE};
pub use platform::Platform;
pub use variant::{Chip, Spin};
