pub mod loader;
pub mod output;
