pub mod batch;
pub mod compiled;
pub mod javascript;
pub mod powershell;
pub mod python;

pub use batch::BatchToolchain;
pub use compiled::CompiledToolchain;
pub use javascript::{JavaScriptToolchain, NODE_FAILURE_MARKER};
pub use powershell::PowerShellToolchain;
pub use python::PythonToolchain;
