use serde::{Deserialize, Serialize};

/// Immutable physical properties shared by every mineral of one kind.
///
/// The all-zero value (empty name) doubles as the "not found" sentinel
/// returned by registry lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MineralType {
    name: String,
    hardness: u32,
    melting_point: f32,
    fracture_limit: u32,
}

impl MineralType {
    pub fn new(name: &str, hardness: u32, melting_point: f32, fracture_limit: u32) -> Self {
        Self {
            name: name.to_string(),
            hardness,
            melting_point,
            fracture_limit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hardness(&self) -> u32 {
        self.hardness
    }

    pub fn melting_point(&self) -> f32 {
        self.melting_point
    }

    /// Highest value the fracture counter may hold after a fracture
    pub fn fracture_limit(&self) -> u32 {
        self.fracture_limit
    }

    /// True for the sentinel produced by a registry miss
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl std::fmt::Display for MineralType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{} {} {} {}}}",
            self.name, self.hardness, self.melting_point, self.fracture_limit
        )
    }
}

/// Types loaded at startup when nothing else is configured
pub fn default_catalog() -> Vec<MineralType> {
    vec![
        MineralType::new("topaz", 200, 1000.0, 32),
        MineralType::new("diamond", 1500, 5000.0, 8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mineral_type() {
        let mt = MineralType::new("topaz", 4, 8.0, 8);
        assert_eq!(mt.name(), "topaz");
        assert_eq!(mt.hardness(), 4);
        assert_eq!(mt.melting_point(), 8.0);
        assert_eq!(mt.fracture_limit(), 8);
        assert!(!mt.is_empty());
    }

    #[test]
    fn test_default_is_empty_sentinel() {
        let mt = MineralType::default();
        assert!(mt.is_empty());
        assert_eq!(mt.fracture_limit(), 0);
    }

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 2);
        let diamond = catalog.iter().find(|t| t.name() == "diamond").unwrap();
        assert_eq!(diamond.fracture_limit(), 8);
        assert_eq!(diamond.hardness(), 1500);
    }
}
