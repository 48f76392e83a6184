use crate::core::minerals::catalog::MineralType;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory lookup of mineral types by name.
///
/// Types are handed out as shared `Arc`s so every mineral of a kind points
/// at the same record.
pub struct MineralTypeRegistry {
    types: HashMap<String, Arc<MineralType>>,
    /// Returned on lookup misses
    empty: Arc<MineralType>,
}

impl MineralTypeRegistry {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            empty: Arc::new(MineralType::default()),
        }
    }

    /// Create a registry preloaded with the given catalog
    pub fn from_catalog(catalog: impl IntoIterator<Item = MineralType>) -> Self {
        let mut registry = Self::new();
        for mineral_type in catalog {
            registry.add_type(mineral_type);
        }
        registry
    }

    /// Insert a type keyed by its name. An existing entry is replaced.
    pub fn add_type(&mut self, mineral_type: MineralType) {
        debug!("[MineralTypeRegistry] Adding type {}", mineral_type);
        self.types
            .insert(mineral_type.name().to_string(), Arc::new(mineral_type));
    }

    /// Look up a type by name. Never fails: a miss yields the empty sentinel.
    pub fn get_by_name(&self, name: &str) -> Arc<MineralType> {
        self.types
            .get(name)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.empty))
    }

    /// Look up a type by name, reporting a miss as `None`
    pub fn try_get(&self, name: &str) -> Option<&Arc<MineralType>> {
        self.types.get(name)
    }

    /// Registered names in sorted order
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Emit every registered type at info level
    pub fn log_all_types(&self) {
        for name in self.type_names() {
            if let Some(mineral_type) = self.types.get(&name) {
                info!("[MineralTypeRegistry] {}", mineral_type);
            }
        }
    }
}

impl Default for MineralTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
