mod data_grid;
mod filter_bar;
mod menu_bar;
mod pagination;
mod settings_dialog;
mod status_bar;
mod tab_bar;

pub use data_grid::{DataGrid, DataGridEvent};
pub use filter_bar::{FilterBar, FilterBarEvent};
pub use menu_bar::{MenuBar, MenuBarEvent};
pub use pagination::{PaginationControls, PaginationEvent};
pub use settings_dialog::{SettingsDialog, SettingsDialogEvent};
pub use status_bar::StatusBar;
pub use tab_bar::{TabBar, TabBarEvent};
