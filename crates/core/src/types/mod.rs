pub mod language;
pub mod outcome;

// Re-export commonly used types
pub use language::Language;
pub use outcome::{COMPILE_ERROR_TAG, ERROR_TAG, ExecutionResult, OUTPUT_TAG};
