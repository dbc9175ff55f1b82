use std::collections::HashMap;
use crate::api::types::EntityId;

/// Registry of named bodies, populated at spawn time.
/// Provides name-based entity lookup for UI-driven selection.
/// Unknown names resolve to `None`; callers treat that as a no-op.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: HashMap<String, EntityId>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: HashMap::new(),
        }
    }

    /// Record a name → entity mapping. Later inserts win.
    pub fn insert(&mut self, name: impl Into<String>, id: EntityId) {
        self.bodies.insert(name.into(), id);
    }

    /// Look up a body by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<EntityId> {
        self.bodies.get(name).copied()
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Drop all mappings (scene rebuild).
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut reg = BodyRegistry::new();
        reg.insert("earth", EntityId(4));
        assert_eq!(reg.get("earth"), Some(EntityId(4)));
    }

    #[test]
    fn unknown_returns_none() {
        let reg = BodyRegistry::new();
        assert!(reg.get("vulcan").is_none());
    }

    #[test]
    fn clear_empties_registry() {
        let mut reg = BodyRegistry::new();
        reg.insert("mars", EntityId(5));
        reg.clear();
        assert!(reg.is_empty());
    }
}
