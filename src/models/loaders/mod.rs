pub mod json_loader;

pub use json_loader::{load_seed, load_seed_file};
