//! Terminal logger setup

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Level used for a given `--verbose` setting.
pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the stderr logger. Reports go to stdout, so diagnostics never mix
/// into piped output.
///
/// # Errors
///
/// Returns an error if a logger was already installed.
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(
        level(verbose),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug() {
        assert_eq!(level(true), LevelFilter::Debug);
        assert_eq!(level(false), LevelFilter::Info);
    }
}
