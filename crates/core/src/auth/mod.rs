pub mod token;
pub mod traits;

// Session backend implementations
pub mod memory;
pub mod rest;
