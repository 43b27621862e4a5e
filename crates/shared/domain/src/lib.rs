//! Domain layer - Core entities of the creator platform.
//!
//! This crate contains plain data types with no infrastructure dependencies:
//! the five stored entities, the "new entity" inputs accepted by the store,
//! and the user patch type.

pub mod bookmark;
pub mod constants;
pub mod content;
pub mod entity;
pub mod error;
pub mod follower;
pub mod message;
pub mod user;

pub use bookmark::{Bookmark, NewBookmark};
pub use constants::*;
pub use content::{Content, NewContent};
pub use entity::{EntityId, Keyed};
pub use error::{DomainError, DomainResult};
pub use follower::{Follower, NewFollower};
pub use message::{Message, NewMessage};
pub use user::{NewUser, StripeInfo, UpdateUser, User, UserProfile};
