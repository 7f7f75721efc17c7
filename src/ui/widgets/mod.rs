// ui/widgets/mod.rs - UI widgets

pub mod editor_pane;
pub mod emoji_picker;
pub mod status_bar;
pub mod toolbar;
