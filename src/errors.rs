use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid orbital elements: {0}")]
    InvalidElements(String),

    #[error("Missing orbital element: {0}")]
    MissingElement(&'static str),

    #[error("Invalid impact scenario: {0}")]
    InvalidScenario(String),

    #[error("Data feed error: {0}")]
    DataFeed(String),
}
