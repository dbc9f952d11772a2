pub mod bootstrap;
pub mod menu;

pub use menu::MenuApp;
