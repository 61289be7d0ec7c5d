mod app_state;
mod extension;

pub use app_state::AppState;
pub use extension::LoomExtension;
