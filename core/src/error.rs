use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Cannot read source file {path}: {source}")]
    SourceFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Metric '{metric}' is undefined: {denominator} count is zero")]
    ZeroDenominator {
        metric: &'static str,
        denominator: &'static str,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PulseResult<T> = Result<T, PulseError>;
