use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("Invalid columns {found:?}. Must be: name, coordinates")]
    Schema { found: Vec<String> },
    #[error("Invalid coordinates format on line {line}: {reason}")]
    Format { line: u64, reason: String },
    #[error(
        "Coordinates out of range on line {line}: latitude {latitude} must be within [-90, 90] \
        and longitude {longitude} within [-180, 180]"
    )]
    Range {
        line: u64,
        latitude: f64,
        longitude: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("There are no participants to choose from. Upload a file with at least one participant.")]
pub struct EmptyInputError;
