pub mod algorithm;
pub mod error;
pub mod sort;
pub mod step;

// Re-export commonly used types
pub use algorithm::Algorithm;
pub use error::CoreError;
pub use sort::{sort, SortInput};
pub use step::{Focus, Step, StepList};
