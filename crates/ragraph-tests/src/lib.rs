pub mod fixtures;
pub mod test_env;

// Re-export key testing utilities
pub use fixtures::{Script, classic_deadlock_script};
pub use test_env::ScriptEnvironment;
