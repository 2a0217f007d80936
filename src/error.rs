use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkdayError {
    /// Month or year outside the accepted bounds, or an unrecognized month name.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The holiday API could not be reached or returned a non-success status.
    #[error("fetch error: {0}")]
    FetchError(String),
    /// A holiday record is missing a required field or carries an unparseable date.
    #[error("malformed data: {0}")]
    MalformedData(String),
}

pub type WorkdayResult<T> = Result<T, WorkdayError>;
