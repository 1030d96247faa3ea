//! Application metadata constants

/// Directory name for acme data under the home directory or a project root
pub const DATA_DIR: &str = ".acme";
/// Key the mobile app stores its serialized theme under
pub const THEME_STORAGE_KEY: &str = "app-theme";
/// Basename of the key-value database inside DATA_DIR
pub const THEME_DB: &str = "theme.db";
/// Env file inside DATA_DIR
pub const ENV_FILE: &str = "env";
