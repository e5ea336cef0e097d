//! End-to-end chat simulation tests.
//!
//! These drive the shell, buddy list and chat view-model together on a
//! paused Tokio clock, so reply timing is deterministic.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use buddy_core::{
    AcceptAll, BuddyError, BuddyList, ChatState, ChatViewModel, ChatWindowState, Contact,
    ContactId, ContactSource, LoadState, NewMessage, Point, Presence, Sender, SessionEvent,
    SessionStore, Shell, StaticDirectory,
};

const VIEWPORT: Point = Point::new(1200.0, 800.0);
const DELAY: Duration = Duration::from_millis(1000);

/// A directory whose backend is down.
struct UnreachableDirectory;

#[async_trait]
impl ContactSource for UnreachableDirectory {
    async fn list_contacts(&self) -> buddy_core::Result<Vec<Contact>> {
        Err(BuddyError::DataUnavailable("connection refused".into()))
    }

    async fn get_contact(&self, _id: ContactId) -> buddy_core::Result<Contact> {
        Err(BuddyError::DataUnavailable("connection refused".into()))
    }

    async fn get_messages(&self, _id: ContactId) -> buddy_core::Result<Vec<NewMessage>> {
        Err(BuddyError::DataUnavailable("connection refused".into()))
    }
}

fn chat_over(directory: StaticDirectory) -> ChatViewModel {
    ChatViewModel::new(Arc::new(directory), Arc::new(SessionStore::new()))
}

/// Sleeps just past the reply delay so every scheduled reply has fired.
async fn wait_for_replies() {
    tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_single_buddy_scenario() {
    let directory =
        StaticDirectory::new(vec![Contact::new(1, "Sarah", Presence::Online, "Buddies")]);
    let contacts = directory.list_contacts().await.unwrap();
    let chat = chat_over(directory);

    let mut shell = Shell::new();
    shell.login("aimfan99", "secret", &AcceptAll).unwrap();
    shell.set_roster(&contacts);

    let list = BuddyList::new(contacts);
    let intent = list.open_chat(1);
    assert!(shell.open_chat(intent.contact_id, VIEWPORT).unwrap());

    let snapshot = chat.open(1).await.unwrap();
    assert!(snapshot.messages.is_empty());

    chat.send_message(1, "hi").unwrap();

    let messages = chat.messages(1);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].content, "hi");

    wait_for_replies().await;

    let messages = chat.messages(1);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[1].sender, Sender::Contact);
    assert!(messages[1].content.contains("hi"));
}

#[tokio::test(start_paused = true)]
async fn test_sessions_start_empty() {
    let chat = chat_over(StaticDirectory::fixture());

    for id in 1..=7 {
        assert!(chat.messages(id).is_empty());
    }
    assert!(chat.messages(1234).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_reply_arrives_only_after_delay() {
    let chat = chat_over(StaticDirectory::fixture());

    chat.send_message(4, "are you there?").unwrap();

    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert_eq!(chat.messages(4).len(), 1);
    assert_eq!(chat.state(4), ChatState::AwaitingReply { pending: 1 });

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(chat.messages(4).len(), 2);
    assert_eq!(chat.state(4), ChatState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_send_is_noop() {
    let chat = chat_over(StaticDirectory::fixture());

    assert!(chat.send_message(2, "   ").unwrap().is_none());
    assert!(chat.send_message(2, "").unwrap().is_none());

    assert!(chat.messages(2).is_empty());
    assert!(chat.pending_replies().is_empty());
    assert_eq!(chat.state(2), ChatState::Idle);

    wait_for_replies().await;
    assert!(chat.messages(2).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_sends_each_get_a_reply_after_close() {
    let chat = chat_over(StaticDirectory::fixture());
    let mut shell = Shell::new();
    shell.set_roster(&StaticDirectory::fixture_contacts());
    shell.open_chat(3, VIEWPORT).unwrap();

    for text in ["one", "two", "three"] {
        chat.send_message(3, text).unwrap();
    }

    assert_eq!(chat.messages(3).len(), 3);
    assert_eq!(chat.state(3), ChatState::AwaitingReply { pending: 3 });
    assert_eq!(chat.pending_replies().len(), 3);

    // Closing the window leaves the timers running.
    assert!(shell.close_chat(3));
    wait_for_replies().await;

    let messages = chat.messages(3);
    assert_eq!(messages.len(), 6);
    let users = messages.iter().filter(|m| m.sender == Sender::User).count();
    let replies: Vec<_> = messages
        .iter()
        .filter(|m| m.sender == Sender::Contact)
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(users, 3);
    assert_eq!(replies.len(), 3);
    assert!(replies[0].contains("one"));
    assert!(replies[1].contains("two"));
    assert!(replies[2].contains("three"));
    assert!(chat.pending_replies().is_empty());

    // Reopening shows the replies that landed while closed.
    shell.open_chat(3, VIEWPORT).unwrap();
    let snapshot = chat.open(3).await.unwrap();
    assert_eq!(snapshot.messages, messages);
}

#[tokio::test(start_paused = true)]
async fn test_interleaved_send_keeps_order() {
    let chat = chat_over(StaticDirectory::fixture());

    chat.send_message(1, "first").unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    chat.send_message(1, "second").unwrap();

    tokio::time::sleep(Duration::from_millis(501)).await;
    let contents: Vec<_> = chat.messages(1).into_iter().map(|m| m.content).collect();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0], "first");
    assert_eq!(contents[1], "second");
    assert!(contents[2].contains("first"));

    wait_for_replies().await;
    let messages = chat.messages(1);
    assert_eq!(messages.len(), 4);
    assert!(messages[3].content.contains("second"));
    assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test(start_paused = true)]
async fn test_distinct_windows_have_independent_histories() {
    let chat = chat_over(StaticDirectory::fixture());
    let mut shell = Shell::new();
    shell.set_roster(&StaticDirectory::fixture_contacts());

    assert!(shell.open_chat(1, VIEWPORT).unwrap());
    assert!(shell.open_chat(5, VIEWPORT).unwrap());
    assert!(!shell.open_chat(1, VIEWPORT).unwrap());
    assert_eq!(shell.open_chats(), vec![1, 5]);

    chat.send_message(1, "to claude").unwrap();
    wait_for_replies().await;

    assert_eq!(chat.messages(1).len(), 2);
    assert!(chat.messages(5).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_replies_are_broadcast() {
    let chat = chat_over(StaticDirectory::fixture());
    let mut events = chat.store().subscribe();

    chat.send_message(6, "ping").unwrap();
    wait_for_replies().await;

    let SessionEvent::Appended { message: sent, .. } = events.recv().await.unwrap();
    let SessionEvent::Appended {
        contact_id,
        message: reply,
    } = events.recv().await.unwrap();

    assert_eq!(sent.sender, Sender::User);
    assert_eq!(contact_id, 6);
    assert_eq!(reply.sender, Sender::Contact);
}

#[tokio::test]
async fn test_unreachable_directory_surfaces_error_state() {
    let chat = ChatViewModel::new(Arc::new(UnreachableDirectory), Arc::new(SessionStore::new()));

    let mut window = ChatWindowState::new(1, VIEWPORT);
    assert!(window.snapshot().is_loading());

    let result = chat.open(1).await;
    assert!(matches!(result, Err(BuddyError::DataUnavailable(_))));
    window.apply_loaded(1, result);

    assert_eq!(
        window.snapshot(),
        &LoadState::Failed("data unavailable: connection refused".to_string())
    );
    assert!(!chat.store().has_session(1));
}
