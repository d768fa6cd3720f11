#![forbid(unsafe_code)]

//! `menusort` orders and merges menu templates without a GUI toolkit.
//!
//! ```
//! use menusort::{MenuItem, sort_menu_items};
//!
//! let menu = vec![
//!     MenuItem::command("core:one"),
//!     MenuItem::separator(),
//!     MenuItem::command("core:two"),
//!     MenuItem::separator(),
//!     MenuItem::command("core:three").with_position("after=core:one"),
//! ];
//! let sorted = sort_menu_items(menu).unwrap();
//! let commands: Vec<_> = sorted.iter().map(|i| i.command.as_deref()).collect();
//! assert_eq!(
//!     commands,
//!     vec![Some("core:one"), Some("core:three"), None, Some("core:two")]
//! );
//! ```

pub use menusort_core::*;

/// The topological sort and edge storage behind [`sort_menu_items`].
pub use menusort_graphlib as graphlib;
