//! Method-facing data: identifiers, icons, config units, and descriptors.
//!
//! `descriptor` exposes [`AuthMethodDescriptor`], the record the registry produces for every
//! selectable sign-in method. `config` models the editor/upgrade-prompt split that decides
//! availability, and `icon` maps themes to icon assets.

pub mod config;
pub mod descriptor;
pub mod icon;
pub mod key;

pub use config::*;
pub use descriptor::*;
pub use icon::*;
pub use key::*;
