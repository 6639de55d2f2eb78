pub mod cancel;
pub mod loader;
pub mod state;
