//! Store behaviour through the public repository traits.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use domain::{EntityId, NewBookmark, NewContent, NewFollower, NewMessage, NewUser};
use store_service_lib::repository::{
    BookmarkRepository, ContentRepository, FollowerRepository, MemStorage, MessageRepository,
    Storage, UserRepository,
};

async fn alice_and_bob(store: &MemStorage) -> (EntityId, EntityId) {
    let alice = store.create_user(NewUser::new("alice", "pw-a")).await;
    let bob = store.create_user(NewUser::new("bob", "pw-b")).await;
    (alice.id, bob.id)
}

#[tokio::test]
async fn test_ids_strictly_increase_per_entity_type() {
    let store = MemStorage::default();

    let mut last = 0;
    for name in ["a", "b", "c", "d"] {
        let user = store.create_user(NewUser::new(name, "pw")).await;
        assert!(user.id > last);
        last = user.id;
    }

    // Each collection counts on its own
    let content = store.create_content(NewContent::new("t", "u", 1)).await;
    let message = store
        .create_message(NewMessage {
            sender_id: 1,
            receiver_id: 2,
            content: "x".to_string(),
        })
        .await;
    assert_eq!(content.id, 1);
    assert_eq!(message.id, 1);
}

#[tokio::test]
async fn test_bookmark_scenario() {
    let store = MemStorage::default();
    let (alice, bob) = alice_and_bob(&store).await;
    assert_eq!((alice, bob), (1, 2));

    let content = store
        .create_content(NewContent::new("Clip", "https://cdn.example.com/c.mp4", bob))
        .await;
    assert_eq!(content.id, 1);
    assert_eq!(content.creator_id, 2);

    let bookmark = store
        .create_bookmark(NewBookmark {
            user_id: alice,
            content_id: content.id,
        })
        .await;
    assert_eq!(bookmark.id, 1);

    let bookmarks = store.get_user_bookmarks(alice).await;
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].content_id, 1);

    assert!(store.delete_bookmark(1, 1).await);
    assert!(store.get_user_bookmarks(alice).await.is_empty());
}

#[tokio::test]
async fn test_message_scenario() {
    let store = MemStorage::default();
    let (alice, bob) = alice_and_bob(&store).await;

    let message = store
        .create_message(NewMessage {
            sender_id: alice,
            receiver_id: bob,
            content: "hi".to_string(),
        })
        .await;
    assert_eq!(message.id, 1);

    assert!(store.get_user_messages(alice).await.iter().any(|m| m.id == 1));
    assert!(store.get_user_messages(bob).await.iter().any(|m| m.id == 1));

    let read = store.mark_message_as_read(1).await.unwrap();
    assert!(read.is_read);

    let again = store.mark_message_as_read(1).await;
    assert!(again.is_some_and(|m| m.is_read));
}

#[tokio::test]
async fn test_followers_and_following_are_disjoint_for_one_way_edge() {
    let store = MemStorage::default();
    let (a, b) = alice_and_bob(&store).await;
    store
        .create_follower(NewFollower {
            follower_id: a,
            followed_id: b,
        })
        .await;

    let following: Vec<EntityId> = store.get_user_following(a).await.iter().map(|u| u.id).collect();
    let followers: Vec<EntityId> = store.get_user_followers(a).await.iter().map(|u| u.id).collect();

    assert!(following.contains(&b));
    assert!(!followers.contains(&b));
}

#[tokio::test]
async fn test_get_user_after_create_is_deep_equal() {
    let store = MemStorage::default();
    let mut data = NewUser::new("carol", "pw");
    data.display_name = Some("Carol".to_string());
    data.avatar_url = Some("https://img.example.com/c.png".to_string());

    let created = store.create_user(data).await;
    let fetched = store.get_user(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.password, "pw");
}

#[tokio::test]
async fn test_unknown_ids_are_absent_not_errors() {
    let store = MemStorage::default();

    assert!(store.get_user(1).await.is_none());
    assert!(store.get_content_by_id(1).await.is_none());
    assert!(store.increment_content_views(1).await.is_none());
    assert!(store.mark_message_as_read(1).await.is_none());
    assert!(!store.delete_bookmark(1, 1).await);
    assert!(!store.delete_follower(1, 2).await);
    assert!(store.get_user_followers(1).await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let store = Arc::new(MemStorage::default());

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create_user(NewUser::new(format!("user{}", i), "pw"))
                    .await
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=64).collect::<Vec<EntityId>>());
}

#[tokio::test(start_paused = true)]
async fn test_session_handle_is_shared() {
    let store = MemStorage::new(Duration::from_secs(60));

    let sessions = store.session_store();
    sessions.set("sid-1", json!({ "userId": 1 }), None).await;

    assert_eq!(
        store.session_store().get("sid-1").await,
        Some(json!({ "userId": 1 }))
    );

    tokio::time::advance(Duration::from_secs(61)).await;
    assert!(store.session_store().get("sid-1").await.is_none());
}
