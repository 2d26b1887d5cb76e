//! Paginated list envelope used by the facility API.

use serde::{Deserialize, Serialize};

/// A page of results as returned by the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
