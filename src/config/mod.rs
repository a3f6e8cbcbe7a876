pub mod load;
pub mod save;
pub mod types;

pub use types::{CameraCopySettings, Config, SETTINGS_FILE_NAME, UserSettings};
