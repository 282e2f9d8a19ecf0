//! Widgets for rendering record grids and their action menus.

pub use self::grid::{Column, Grid, GridState, Sort, SortDirection};
pub use self::rowmenu::{ActionEvent, ActionItem, ActionVariant, RowMenu, RowMenuState};

pub mod grid;
pub mod rowmenu;
