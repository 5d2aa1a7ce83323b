use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("parameter `{name}` has unparsable value {value:?}")]
    Unparsable { name: &'static str, value: String },

    #[error("parameter `{name}` = {value} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("host could not schedule {what}: {reason}")]
    Schedule { what: &'static str, reason: String },
}

pub type FxResult<T> = Result<T, FxError>;
