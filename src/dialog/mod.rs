pub mod listing;
pub mod open;

pub use open::OpenDialog;
