//! Algorithm listing response.

use serde::Serialize;
use sortviz_core::Algorithm;

/// Response for `GET /algorithms`.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmListResponse {
    /// Registered algorithm identifiers accepted by `POST /sort`.
    pub algorithms: Vec<&'static str>,
}

impl AlgorithmListResponse {
    pub fn registered() -> Self {
        AlgorithmListResponse {
            algorithms: Algorithm::ALL.iter().map(|a| a.name()).collect(),
        }
    }
}
