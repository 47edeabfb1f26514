//! Browser console logging through the `log` facade.

use log::Level;

/// Level used for the console: everything in debug builds, `Info` in release.
#[must_use]
pub const fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Install the console logger. Later calls are ignored.
pub fn init() {
    if console_log::init_with_level(default_level()).is_err() {
        log::debug!("console logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_builds_still_log_info() {
        assert!(default_level() >= Level::Info);
        assert!(log::LevelFilter::Info <= default_level().to_level_filter());
    }
}
