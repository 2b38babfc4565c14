use crate::participants::errors::EmptyInputError;
use crate::sessions::models::Page;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{} Redirected to the {redirected_to} page.", .requested.missing_data_hint())]
pub struct StateError {
    pub requested: Page,
    pub redirected_to: Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    #[error(transparent)]
    State(#[from] StateError),
}
