pub mod claim;
pub mod config;
pub mod console;
pub mod error;
pub mod kernel;
pub mod outputs;
pub mod reasons;
pub mod services;

// Re-export specific items for convenient access
pub use kernel::reactor::Reactor;
pub use reasons::format_reason;
