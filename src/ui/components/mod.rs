pub mod header;
pub mod keyboard_diagram;
pub mod stats_sidebar;
pub mod status_bar;
pub mod typing_area;
