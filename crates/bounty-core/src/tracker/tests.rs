use jiff::Timestamp;
use tempfile::TempDir;

use super::Tracker;
use crate::{
    error::TrackerError,
    models::Multipliers,
    params::{ItemId, MissionId, SetVisible},
    tracker::TrackerBuilder,
};

fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn id(id: &str) -> MissionId {
    MissionId { id: id.to_string() }
}

#[test]
fn test_increment_clamps_and_completes() {
    let (_tmp, mut tracker) = create_test_tracker();

    // daily-objectives has target_count 3.
    for _ in 0..5 {
        tracker.increment(&id("daily-objectives")).expect("increment");
    }
    let mission = tracker.mission("daily-objectives").expect("mission");
    assert_eq!(mission.progress_count, 3);
    assert!(mission.completed);
    assert!(mission.reward_granted);
}

#[test]
fn test_increment_past_fifth_changes_nothing() {
    let (_tmp, mut tracker) = create_test_tracker();

    // cargo-runs has target_count 10; reward lands on the 5th rep.
    for _ in 0..5 {
        tracker.increment(&id("cargo-runs")).expect("increment");
    }
    assert!(tracker.mission("cargo-runs").expect("mission").reward_granted);
    let earned = tracker.earned_bp();

    for _ in 0..3 {
        tracker.increment(&id("cargo-runs")).expect("increment");
    }
    let mission = tracker.mission("cargo-runs").expect("mission");
    assert_eq!(mission.progress_count, 8);
    assert!(mission.reward_granted);
    assert_eq!(tracker.earned_bp(), earned);
}

#[test]
fn test_decrement_below_threshold_revokes() {
    let (_tmp, mut tracker) = create_test_tracker();

    for _ in 0..5 {
        tracker.increment(&id("street-races")).expect("increment");
    }
    assert_eq!(tracker.earned_bp(), 50);

    let mission = tracker.decrement(&id("street-races")).expect("decrement");
    assert_eq!(mission.progress_count, 4);
    assert!(!mission.completed);
    assert!(!mission.reward_granted);
    assert_eq!(tracker.earned_bp(), 0);
}

#[test]
fn test_decrement_stops_at_zero() {
    let (_tmp, mut tracker) = create_test_tracker();

    let mission = tracker.decrement(&id("street-races")).expect("decrement");
    assert_eq!(mission.progress_count, 0);
}

#[test]
fn test_toggle_one_shot_grants_and_revokes() {
    let (_tmp, mut tracker) = create_test_tracker();

    // gym-session: target_count 1, base_reward 20.
    let mission = tracker.toggle_complete(&id("gym-session")).expect("toggle");
    assert!(mission.completed);
    assert!(mission.reward_granted);
    assert_eq!(tracker.earned_bp(), 20);

    let mission = tracker.toggle_complete(&id("gym-session")).expect("toggle");
    assert!(!mission.completed);
    assert!(!mission.reward_granted);
    assert_eq!(tracker.earned_bp(), 0);

    // Re-toggling grants again, never double-counts.
    tracker.toggle_complete(&id("gym-session")).expect("toggle");
    assert_eq!(tracker.earned_bp(), 20);
}

#[test]
fn test_toggle_at_cap_cannot_untoggle() {
    let (_tmp, mut tracker) = create_test_tracker();

    for _ in 0..3 {
        tracker.increment(&id("daily-objectives")).expect("increment");
    }
    // At the cap the toggle pins completed; only decrement reduces it.
    let mission = tracker.toggle_complete(&id("daily-objectives")).expect("toggle");
    assert!(mission.completed);
    let mission = tracker.toggle_complete(&id("daily-objectives")).expect("toggle");
    assert!(mission.completed);
}

#[test]
fn test_toggle_below_cap_flips_without_award() {
    let (_tmp, mut tracker) = create_test_tracker();

    // Multi-step mission below cap: the flag flips but the reward is
    // progress-based, so nothing is granted.
    let mission = tracker.toggle_complete(&id("street-races")).expect("toggle");
    assert!(mission.completed);
    assert!(!mission.reward_granted);
    assert_eq!(tracker.earned_bp(), 0);
}

#[test]
fn test_set_visible_leaves_rewards_alone() {
    let (_tmp, mut tracker) = create_test_tracker();

    tracker.toggle_complete(&id("gym-session")).expect("toggle");
    let earned = tracker.earned_bp();

    tracker
        .set_visible(&SetVisible {
            id: "gym-session".to_string(),
            visible: false,
        })
        .expect("set_visible");

    assert!(!tracker.mission("gym-session").expect("mission").visible);
    assert_eq!(tracker.earned_bp(), earned);
    assert!(tracker.visible_missions().iter().all(|m| m.id != "gym-session"));
}

#[test]
fn test_reset_cycle_is_idempotent() {
    let (_tmp, mut tracker) = create_test_tracker();

    for _ in 0..5 {
        tracker.increment(&id("street-races")).expect("increment");
    }
    tracker.toggle_complete(&id("gym-session")).expect("toggle");

    tracker.reset_cycle();
    let after_once: Vec<_> = tracker.missions().to_vec();
    tracker.reset_cycle();
    assert_eq!(tracker.missions(), &after_once[..]);
    assert_eq!(tracker.earned_bp(), 0);
}

#[test]
fn test_maybe_reset_without_marker_does_nothing() {
    let (_tmp, mut tracker) = create_test_tracker();

    tracker.toggle_complete(&id("gym-session")).expect("toggle");
    let now: Timestamp = "2026-08-30T09:00:00Z".parse().expect("timestamp");
    assert!(!tracker.maybe_reset(now));
    assert_eq!(tracker.earned_bp(), 20);
}

#[test]
fn test_maybe_reset_fires_once_per_day() {
    let (_tmp, mut tracker) = create_test_tracker();

    tracker.last_reset_date = Some("2026-08-29".to_string());
    tracker.toggle_complete(&id("gym-session")).expect("toggle");

    // 09:00 Kyiv on the 30th.
    let now: Timestamp = "2026-08-30T06:00:00Z".parse().expect("timestamp");
    assert!(tracker.maybe_reset(now));
    assert_eq!(tracker.earned_bp(), 0);
    assert_eq!(tracker.last_reset_date(), Some("2026-08-30"));

    // Second check the same day sees the rewritten marker.
    assert!(!tracker.maybe_reset(now));
}

#[test]
fn test_set_initial_balance_rejects_negative() {
    let (_tmp, mut tracker) = create_test_tracker();

    tracker.set_initial_balance(150).expect("set balance");
    assert_eq!(tracker.available_balance(), 150);

    let err = tracker.set_initial_balance(-5).expect_err("should reject");
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
    // Rejected input mutates nothing.
    assert_eq!(tracker.available_balance(), 150);
}

#[test]
fn test_purchase_unknown_item_is_an_error() {
    let (_tmp, mut tracker) = create_test_tracker();

    let now = Timestamp::now();
    let err = tracker
        .purchase(
            &ItemId {
                id: "jetpack".to_string(),
            },
            now,
        )
        .expect_err("unknown item");
    assert!(matches!(err, TrackerError::ItemNotFound { .. }));
}

#[test]
fn test_multipliers_scale_available_balance() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let mut tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_multipliers(Multipliers {
            double: true,
            vip: true,
        })
        .build()
        .expect("Failed to create tracker");

    tracker.toggle_complete(&id("gym-session")).expect("toggle");
    assert_eq!(tracker.earned_bp(), 20);
    assert_eq!(tracker.available_balance(), 80);
}
