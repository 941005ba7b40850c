use tracing::level_filters::LevelFilter;

/// Initialize diagnostic logging on stderr.
///
/// Only errors are shown unless `verbose` is set, in which case every
/// classification, folder creation and per-file failure is logged. Console
/// progress lines are separate and always printed.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::ERROR
    };

    // A subscriber may already be installed when embedded or under test.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    tracing::debug!("desktop-cleaner logging initialized at {}", level);
}
