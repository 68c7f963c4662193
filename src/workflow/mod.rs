pub mod admin_state;
pub mod navigation;

pub use admin_state::{reduce, Action, AdminState, Outcome};
pub use navigation::{Navigation, Panel};
