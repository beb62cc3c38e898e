use crate::logging::*;

/// Sink for the positions of NaN entries met while filtering.
///
/// Implementations must not influence the filter result; they only observe it.
pub trait NanReporter {
    fn nan_found(&self, position: usize);
}

/// Emits one `warn` record per NaN through a slog logger.
#[derive(Debug, Clone)]
pub struct SlogReporter {
    log: Logger,
}

impl SlogReporter {
    pub fn new(log: Logger) -> Self {
        SlogReporter { log }
    }
}

impl Default for SlogReporter {
    fn default() -> Self {
        SlogReporter::new(DEFAULT.new(o!("function" => "filter_nan")))
    }
}

impl NanReporter for SlogReporter {
    fn nan_found(&self, position: usize) {
        warn!(self.log, "Array contains a NaN value"; "position" => position);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl NanReporter for SilentReporter {
    fn nan_found(&self, _position: usize) {}
}
