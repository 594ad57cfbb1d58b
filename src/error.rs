use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Meal ratios should equal a total of 1. Total ratio given was {0:.2}")]
    RatioSum(f64),
}

pub type Result<T> = std::result::Result<T, BoilError>;
