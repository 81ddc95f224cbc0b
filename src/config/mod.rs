mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem, LOCAL_CONFIG_NAME};
pub use model::{Config, StyleConfig, BAR_HEIGHT_MAX, BAR_HEIGHT_MIN};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.style.bar_height, 1);
        assert_eq!(config.style.left_color, "green");
        assert_eq!(config.style.right_color, "blue");
    }

    #[test]
    fn config_default_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_zero_bar_height() {
        let mut config = Config::default();
        config.style.bar_height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_oversized_bar_height() {
        let mut config = Config::default();
        config.style.bar_height = BAR_HEIGHT_MAX + 1;
        assert!(config.validate().is_err());
    }
}
