use goalgate_application::services::ProcessEnforcer;
use std::sync::Arc;

mod helpers;
use helpers::{MockNotifier, MockProcessTable};

fn apps(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_block_kills_case_insensitive_substring_matches() {
    // Arrange
    let table = Arc::new(MockProcessTable::with_processes(vec![
        (100, "Steam Helper"),
        (101, "steamwebhelper"),
        (102, "Finder"),
    ]));
    let enforcer = ProcessEnforcer::new(table.clone()).with_own_pid(1);

    // Act
    let killed = enforcer.block(&apps(&["STEAM"])).await.unwrap();

    // Assert
    assert_eq!(killed, 2);
    assert_eq!(table.killed(), vec![100, 101]);
    assert_eq!(table.running(), vec!["Finder"]);
}

#[tokio::test]
async fn test_block_notifies_only_when_something_was_killed() {
    let table = Arc::new(MockProcessTable::with_processes(vec![(7, "Discord")]));
    let notifier = Arc::new(MockNotifier::new());
    let enforcer = ProcessEnforcer::new(table.clone())
        .with_notifier(notifier.clone())
        .with_own_pid(1);

    enforcer.block(&apps(&["slack"])).await.unwrap();
    assert!(notifier.sent().is_empty());

    enforcer.block(&apps(&["discord"])).await.unwrap();
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Applications Blocked");
    assert_eq!(sent[0].sound.as_deref(), Some("Pop"));
}

#[tokio::test]
async fn test_block_skips_vanished_and_protected_processes() {
    let table = Arc::new(MockProcessTable::with_processes(vec![
        (10, "Steam"),
        (11, "Steam Helper"),
        (12, "steam_osx"),
    ]));
    table.mark_vanished(10);
    table.mark_protected(11);
    let enforcer = ProcessEnforcer::new(table.clone()).with_own_pid(1);

    let killed = enforcer.block(&apps(&["steam"])).await.unwrap();

    assert_eq!(killed, 1);
    assert_eq!(table.killed(), vec![12]);
}

#[tokio::test]
async fn test_block_never_kills_own_process() {
    let table = Arc::new(MockProcessTable::with_processes(vec![(42, "goalgate")]));
    let enforcer = ProcessEnforcer::new(table.clone()).with_own_pid(42);

    let killed = enforcer.block(&apps(&["goal"])).await.unwrap();

    assert_eq!(killed, 0);
    assert!(table.killed().is_empty());
}

#[tokio::test]
async fn test_blank_patterns_match_nothing() {
    let table = Arc::new(MockProcessTable::with_processes(vec![(5, "bash")]));
    let enforcer = ProcessEnforcer::new(table.clone()).with_own_pid(1);

    let killed = enforcer.block(&apps(&["", "   "])).await.unwrap();

    assert_eq!(killed, 0);
    assert_eq!(table.running(), vec!["bash"]);
}

#[tokio::test]
async fn test_notification_failure_does_not_fail_block() {
    let table = Arc::new(MockProcessTable::with_processes(vec![(3, "Steam")]));
    let notifier = Arc::new(MockNotifier::new());
    notifier.set_should_fail(true);
    let enforcer = ProcessEnforcer::new(table.clone())
        .with_notifier(notifier)
        .with_own_pid(1);

    assert_eq!(enforcer.block(&apps(&["steam"])).await.unwrap(), 1);
}

#[tokio::test]
async fn test_unblock_is_a_no_op() {
    let table = Arc::new(MockProcessTable::with_processes(vec![(3, "Steam")]));
    let enforcer = ProcessEnforcer::new(table.clone()).with_own_pid(1);

    enforcer.unblock(&apps(&["steam"])).await;

    assert!(table.killed().is_empty());
    assert_eq!(table.running(), vec!["Steam"]);
}
