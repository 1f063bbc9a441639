use crate::api::types::EntityId;
use crate::components::entity::{Entity, EntityKind};

/// Flat entity storage. Small worlds (dozens of entities), so linear
/// scans everywhere. Insertion order is preserved: within a render
/// layer, spawn order is draw order.
#[derive(Debug)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by id, keeping the order of the rest.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Keep only entities matching the predicate, preserving order.
    pub fn retain(&mut self, pred: impl FnMut(&Entity) -> bool) {
        self.entities.retain(pred);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// First entity of the given kind.
    pub fn find_kind(&self, kind: EntityKind) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind == kind)
    }

    /// First entity of the given kind, mutable.
    pub fn find_kind_mut(&mut self, kind: EntityKind) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.kind == kind)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.find_kind(EntityKind::Player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.find_kind_mut(EntityKind::Player)
    }

    pub fn boss(&self) -> Option<&Entity> {
        self.find_kind(EntityKind::Boss)
    }

    pub fn boss_mut(&mut self) -> Option<&mut Entity> {
        self.find_kind_mut(EntityKind::Boss)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
