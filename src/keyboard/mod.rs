pub mod display;
pub mod finger;
pub mod keymap;
pub mod layout;
