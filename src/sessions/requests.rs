use crate::sessions::models::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub page: Page,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LimitQueryParam {
    pub limit: Option<usize>,
}
