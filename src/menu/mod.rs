pub mod command;
pub mod nav;
pub mod pane;
pub mod ring;

pub use command::{Command, MENU_LAYOUT};
pub use ring::MenuRing;
