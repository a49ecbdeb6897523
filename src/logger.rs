use simplelog::{Config, LevelFilter, SimpleLogger, TestLogger};

use crate::errors::Result;

/// Installs a [`SimpleLogger`] as the global logger.
/// Fails if some logger has already been installed.
pub fn init(level: LevelFilter) -> Result<()> {
    SimpleLogger::init(level, Config::default())?;
    Ok(())
}

// for unit tests: output is captured by the test harness.
// several tests race to install it, only the first one wins.
pub fn init_test() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
