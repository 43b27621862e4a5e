//! Identity shared by every stored entity.

/// Identifier of a stored entity. Positive, unique per entity type.
pub type EntityId = i32;

/// An entity that is stored under its own integer identifier.
pub trait Keyed {
    fn id(&self) -> EntityId;
}
