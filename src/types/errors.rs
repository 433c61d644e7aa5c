use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Catalog not loaded: load a catalog before matching")]
    CatalogNotLoaded,
    #[error("Catalog is empty: {0}")]
    EmptyCatalog(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("No usable description in input: {0}")]
    UnusableInput(String),
    #[error("Report error: {0}")]
    Report(String),
}

impl Serialize for EngineError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
