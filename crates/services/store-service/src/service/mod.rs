//! Service layer - the checks callers run around the store.
//!
//! The store trusts its inputs. Services validate request shapes, confirm
//! referenced users and content exist, and turn absent results into
//! `AppError::NotFound`.

mod account_service;
pub mod container;
mod content_service;
mod social_service;

pub use account_service::{
    AccountManager, AccountService, Credentials, LoginSession, ProfileUpdate, RegisterUser,
};
pub use container::Services;
pub use content_service::{ContentManager, ContentService, PublishContent};
pub use social_service::{SendMessage, SocialManager, SocialService};
