/// How much the binaries log to stderr.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only.
    Silent,
    /// Per-search summaries.
    Normal,
    /// Per-iteration detail, e.g. each IDS depth limit.
    Verbose,
    /// Everything, including periodic progress of long searches.
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

impl Verbosity {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub fn directive(&self) -> String {
        let level: tracing::Level = (*self).into();
        level.as_str().to_ascii_lowercase()
    }
}
