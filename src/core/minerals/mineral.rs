use crate::core::minerals::catalog::MineralType;
use crate::core::types::MineralId;
use std::sync::Arc;

/// One physical unit being processed
#[derive(Debug)]
pub struct Mineral {
    id: MineralId,
    mineral_type: Arc<MineralType>,
    state: String,
    fractures: u32,
}

impl Mineral {
    pub fn new(mineral_type: Arc<MineralType>, state: &str, fractures: u32) -> Self {
        Self {
            id: MineralId::new(),
            mineral_type,
            state: state.to_string(),
            fractures,
        }
    }

    pub fn id(&self) -> MineralId {
        self.id
    }

    pub fn mineral_type(&self) -> &MineralType {
        &self.mineral_type
    }

    /// Free-form label describing the unit's condition
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn fractures(&self) -> u32 {
        self.fractures
    }

    /// Only the factory's fracture operation changes the counter
    pub(crate) fn set_fractures(&mut self, fractures: u32) {
        self.fractures = fractures;
    }
}

impl std::fmt::Display for Mineral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MINERAL {} {} {}",
            self.state, self.mineral_type, self.fractures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mineral() {
        let mt = Arc::new(MineralType::new("topaz", 4, 8.0, 8));
        let m = Mineral::new(Arc::clone(&mt), "fractured", 4);

        assert_eq!(m.state(), "fractured");
        assert_eq!(m.fractures(), 4);
        assert_eq!(m.mineral_type().name(), "topaz");
    }

    #[test]
    fn test_each_mineral_gets_its_own_id() {
        let mt = Arc::new(MineralType::new("topaz", 4, 8.0, 8));
        let a = Mineral::new(Arc::clone(&mt), "fractured", 4);
        let b = Mineral::new(mt, "fractured", 4);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_display() {
        let mt = Arc::new(MineralType::new("topaz", 4, 8.0, 8));
        let m = Mineral::new(mt, "fractured", 2);
        assert_eq!(m.to_string(), "MINERAL fractured {topaz 4 8 8} 2");
    }
}
