//! Sample data for local development.

use serde::Serialize;

use common::AppResult;
use domain::{Bookmark, Content, Message, UserProfile};

use crate::service::{PublishContent, RegisterUser, SendMessage, Services};

/// What `seed` created
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub users: Vec<UserProfile>,
    pub content: Vec<Content>,
    pub messages: Vec<Message>,
    pub bookmarks: Vec<Bookmark>,
    pub followers_of_creator: Vec<UserProfile>,
}

fn account(username: &str, display_name: &str) -> RegisterUser {
    RegisterUser {
        username: username.to_string(),
        password: "changeme".to_string(),
        display_name: Some(display_name.to_string()),
        bio: None,
        avatar_url: None,
    }
}

/// Populate two users, one piece of content, a bookmark, a message and a follow.
pub async fn seed_demo(services: &Services) -> AppResult<SeedSummary> {
    let accounts = services.accounts();
    let alice = accounts.register(account("alice", "Alice")).await?;
    let bob = accounts.register(account("bob", "Bob the Creator")).await?;

    let video = services
        .content()
        .publish(
            bob.id,
            PublishContent {
                title: "Studio tour".to_string(),
                description: Some("A look around the studio".to_string()),
                content_url: "https://cdn.example.com/videos/studio-tour.mp4".to_string(),
                thumbnail_url: Some("https://cdn.example.com/thumbs/studio-tour.jpg".to_string()),
                duration: Some(312),
                is_premium: false,
                category: Some("behind-the-scenes".to_string()),
            },
        )
        .await?;

    let social = services.social();
    social.add_bookmark(alice.id, video.id).await?;
    social
        .send_message(
            alice.id,
            SendMessage {
                receiver_id: bob.id,
                content: "Loved the tour!".to_string(),
            },
        )
        .await?;
    social.follow(alice.id, bob.id).await?;

    tracing::info!("Demo data seeded");

    Ok(SeedSummary {
        users: vec![alice.clone(), bob.clone()],
        content: services.content().list_all().await?,
        messages: social.inbox(bob.id).await?,
        bookmarks: social.bookmarks(alice.id).await?,
        followers_of_creator: social.followers(bob.id).await?,
    })
}
