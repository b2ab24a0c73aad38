//! UI palette constants and shared widgets.

// Unused utilities may trigger this lints undesirably.
#![allow(dead_code)]

pub mod palette;
pub mod widget;

#[allow(unused_imports)]
pub mod prelude {
    pub use super::{palette as ui_palette, widget};
}
