#![forbid(unsafe_code)]

//! Menu item model and constraint-based menu ordering (headless).
//!
//! Menu templates contributed by several sources are flat lists of items and separators. Items
//! can ask to be placed relative to other commands (`position: "after=core:copy"`) or to have
//! their whole separator-delimited group placed relative to another group
//! (`position: "beforeGroupContaining=core:quit"`). [`sort_menu_items`] resolves those requests
//! deterministically, never failing on missing or conflicting references.
//!
//! [`menu::merge`] / [`menu::unmerge`] splice templates into a menu tree, and
//! [`accelerator::accelerator_for_keystroke`] turns keystrokes into accelerator strings.

pub mod accelerator;
pub mod error;
pub mod menu;
pub mod model;
pub mod platform;
pub mod position;
pub mod sort;

pub use accelerator::accelerator_for_keystroke;
pub use error::{Error, Result};
pub use model::{ItemType, MenuItem};
pub use platform::{Platform, UnknownPlatform};
pub use position::{Position, Relationship};
pub use sort::{sort_menu_items, sort_menu_tree};
