pub mod builder;
pub mod components;
pub mod errors;
pub mod execution;
pub mod jobs;
pub mod minerals;
pub mod types;
