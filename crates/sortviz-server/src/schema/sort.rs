//! Sort request/response types.
//!
//! The request body is `{"elements": [...], "algorithm": "..."}` and the
//! response is the recorded step list, `{"steps": [{"id", "list"}, ...]}`.
//! Both map directly onto core types.

pub use sortviz_core::SortInput as SortRequest;
pub use sortviz_core::StepList as SortResponse;
