pub mod detect;
pub mod init;
pub mod keys;
pub mod run;

pub use detect::detect_command;
pub use init::init_command;
pub use keys::{keys_test_command, keys_wait_command};
pub use run::{RunOptions, run_command};
