pub mod catalog;
pub mod mineral;
pub mod registry;

// Re-export commonly used types
pub use catalog::{default_catalog, MineralType};
pub use mineral::Mineral;
pub use registry::MineralTypeRegistry;
