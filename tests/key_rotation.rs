use std::collections::HashMap;
use std::sync::Arc;

use serial_test::serial;
use shopsense::keys::{KeyRing, PLACEHOLDER_KEY};

#[test]
fn sequential_rotation_is_periodic() {
    let ring = KeyRing::new(vec!["k1".into(), "k2".into(), "k3".into()]);
    let seen: Vec<String> = (0..9).map(|_| ring.next().to_string()).collect();
    assert_eq!(&seen[0..3], &seen[3..6]);
    assert_eq!(&seen[3..6], &seen[6..9]);
    assert_eq!(seen[0..3].iter().collect::<std::collections::HashSet<_>>().len(), 3);
}

#[tokio::test]
async fn concurrent_fetches_are_evenly_distributed() {
    let ring = Arc::new(KeyRing::new(vec!["k1".into(), "k2".into(), "k3".into()]));
    let mut tasks = Vec::new();
    for _ in 0..30 {
        let ring = Arc::clone(&ring);
        tasks.push(tokio::spawn(async move { ring.next().to_string() }));
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for task in tasks {
        *counts.entry(task.await.unwrap()).or_default() += 1;
    }

    // 30 fetches over 3 keys: every key exactly 10 times, none starved.
    assert_eq!(counts.len(), 3);
    for (_, count) in counts {
        assert_eq!(count, 10);
    }
}

#[test]
fn uneven_fetch_count_stays_within_one() {
    let ring = KeyRing::new(vec!["k1".into(), "k2".into(), "k3".into()]);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..10 {
        *counts.entry(ring.next().to_string()).or_default() += 1;
    }
    for (_, count) in counts {
        assert!(count == 3 || count == 4);
    }
}

fn clear_key_env() {
    for slot in 1..=7 {
        std::env::remove_var(format!("GEMINI_API_KEY_{slot}"));
    }
}

#[test]
#[serial]
fn from_env_collects_keys_in_slot_order() {
    clear_key_env();
    std::env::set_var("GEMINI_API_KEY_2", "second");
    std::env::set_var("GEMINI_API_KEY_5", "fifth");
    std::env::set_var("GEMINI_API_KEY_3", "");

    let ring = KeyRing::from_env();
    assert_eq!(ring.len(), 2);
    assert_eq!(ring.next(), "second");
    assert_eq!(ring.next(), "fifth");
    assert_eq!(ring.next(), "second");

    clear_key_env();
}

#[test]
#[serial]
fn from_env_without_keys_falls_back_to_placeholder() {
    clear_key_env();

    let ring = KeyRing::from_env();
    assert_eq!(ring.len(), 1);
    assert_eq!(ring.next(), PLACEHOLDER_KEY);
}
