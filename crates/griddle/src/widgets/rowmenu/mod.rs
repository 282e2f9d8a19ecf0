//! Per-row action menu: a dropdown of caller-configured operations.

pub use self::item::{ActionItem, ActionVariant};
pub use self::state::{ActionEvent, RowMenuState};
pub use self::widget::RowMenu;

mod item;
mod state;
mod widget;
