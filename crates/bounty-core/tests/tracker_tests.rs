use bounty_core::{
    params::{ItemId, MissionId},
    Multipliers, PurchaseOutcome, RejectReason, TrackerBuilder, PURCHASE_COOLDOWN_MS,
};
use jiff::Timestamp;

mod common;

fn mission(id: &str) -> MissionId {
    MissionId { id: id.to_string() }
}

fn item(id: &str) -> ItemId {
    ItemId { id: id.to_string() }
}

fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

#[test]
fn test_grind_mission_reward_caps_at_fifth_repetition() {
    let (_tmp, mut tracker) = common::create_test_tracker();

    // cargo-runs: target 10, base reward 30. The reward lands on the
    // 5th repetition and the aggregate never moves afterwards.
    for n in 1..=4 {
        tracker.increment(&mission("cargo-runs")).expect("increment");
        assert_eq!(tracker.earned_bp(), 0, "no reward before the 5th (at {n})");
    }
    tracker.increment(&mission("cargo-runs")).expect("increment");
    assert_eq!(tracker.earned_bp(), 30);

    for _ in 6..=10 {
        tracker.increment(&mission("cargo-runs")).expect("increment");
        assert_eq!(tracker.earned_bp(), 30);
    }
    let done = tracker.mission("cargo-runs").expect("mission");
    assert_eq!(done.progress_count, 10);
    assert!(done.completed);
}

#[test]
fn test_decrement_after_threshold_lowers_balance_by_multiplied_reward() {
    let (_temp_dir, db_path) = common::create_test_environment();
    let mut tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_multipliers(Multipliers {
            double: true,
            vip: false,
        })
        .build()
        .expect("Failed to create tracker");

    // street-races: target 5, base reward 50.
    for _ in 0..5 {
        tracker.increment(&mission("street-races")).expect("increment");
    }
    let before = tracker.available_balance();
    assert_eq!(before, 100); // 50 x2

    tracker.decrement(&mission("street-races")).expect("decrement");
    assert_eq!(tracker.available_balance(), before - 100);
}

#[test]
fn test_round_trip_preserves_balance() {
    let (_temp_dir, db_path) = common::create_test_environment();

    let balance_before = {
        let mut tracker = TrackerBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .expect("Failed to create tracker");

        tracker.set_initial_balance(500).expect("set balance");
        tracker.toggle_complete(&mission("gym-session")).expect("toggle");
        for _ in 0..5 {
            tracker.increment(&mission("street-races")).expect("increment");
        }
        tracker.increment(&mission("daily-objectives")).expect("increment");
        let outcome = tracker
            .purchase(&item("medkit"), Timestamp::now())
            .expect("purchase");
        assert!(matches!(outcome, PurchaseOutcome::Accepted(_)));

        tracker.available_balance()
    };

    // Reload from the same database and recompute.
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to reopen tracker");

    assert_eq!(tracker.available_balance(), balance_before);
    let races = tracker.mission("street-races").expect("mission");
    assert_eq!(races.progress_count, 5);
    assert!(races.reward_granted);
    let partial = tracker.mission("daily-objectives").expect("mission");
    assert_eq!(partial.progress_count, 1);
    assert!(!partial.reward_granted);
}

#[test]
fn test_purchase_gate_cooldown_then_rearm() {
    let (_tmp, mut tracker) = common::create_test_tracker();
    tracker.set_initial_balance(600).expect("set balance");

    let t0 = ts("2026-08-30T12:00:00Z");

    // First attempt: affordable, no prior record.
    let outcome = tracker.purchase(&item("weapon"), t0).expect("purchase");
    let PurchaseOutcome::Accepted(receipt) = outcome else {
        panic!("first purchase should be accepted");
    };
    assert_eq!(receipt.balance_after, 300);
    assert_eq!(tracker.cumulative_spend(), 300);

    // Second attempt inside the cooldown: still affordable, so the
    // rejection is specifically the cooldown.
    let retry = ts("2026-08-30T12:02:00Z");
    let outcome = tracker.purchase(&item("weapon"), retry).expect("purchase");
    match outcome {
        PurchaseOutcome::Rejected(RejectReason::OnCooldown { remaining_ms }) => {
            assert_eq!(remaining_ms, PURCHASE_COOLDOWN_MS - 120_000);
        }
        other => panic!("expected cooldown rejection, got {other:?}"),
    }
    // Rejection mutates nothing.
    assert_eq!(tracker.cumulative_spend(), 300);

    // Exactly at the cooldown boundary the item is available again and
    // the spend counter is re-debited.
    let later = ts("2026-08-30T12:05:00Z");
    let outcome = tracker.purchase(&item("weapon"), later).expect("purchase");
    let PurchaseOutcome::Accepted(receipt) = outcome else {
        panic!("post-cooldown purchase should be accepted");
    };
    assert_eq!(receipt.balance_after, 0);
    assert_eq!(tracker.cumulative_spend(), 600);
}

#[test]
fn test_purchase_rejected_when_unaffordable() {
    let (_tmp, mut tracker) = common::create_test_tracker();
    tracker.set_initial_balance(100).expect("set balance");

    let outcome = tracker
        .purchase(&item("car"), Timestamp::now())
        .expect("purchase");
    match outcome {
        PurchaseOutcome::Rejected(RejectReason::InsufficientFunds { price, balance }) => {
            assert_eq!(price, 500);
            assert_eq!(balance, 100);
        }
        other => panic!("expected insufficient funds, got {other:?}"),
    }
    assert_eq!(tracker.cumulative_spend(), 0);
}

#[test]
fn test_affordability_checks_current_balance_not_raw_earnings() {
    let (_tmp, mut tracker) = common::create_test_tracker();
    tracker.set_initial_balance(50).expect("set balance");

    // Spend it all, then confirm even the cheapest item is refused.
    let outcome = tracker
        .purchase(&item("medkit"), ts("2026-08-30T12:00:00Z"))
        .expect("purchase");
    assert!(matches!(outcome, PurchaseOutcome::Accepted(_)));
    assert_eq!(tracker.available_balance(), 0);

    let outcome = tracker
        .purchase(&item("medkit"), ts("2026-08-30T13:00:00Z"))
        .expect("purchase");
    assert!(matches!(
        outcome,
        PurchaseOutcome::Rejected(RejectReason::InsufficientFunds { .. })
    ));
}

#[test]
fn test_shop_view_reports_live_flags() {
    let (_tmp, mut tracker) = common::create_test_tracker();
    tracker.set_initial_balance(120).expect("set balance");

    let t0 = ts("2026-08-30T12:00:00Z");
    let outcome = tracker.purchase(&item("grenade"), t0).expect("purchase");
    assert!(matches!(outcome, PurchaseOutcome::Accepted(_)));

    let view = tracker.shop_view(ts("2026-08-30T12:01:00Z"));
    let grenade = view.iter().find(|v| v.item.id == "grenade").expect("grenade");
    assert!(grenade.purchased);
    assert_eq!(grenade.cooldown_remaining_ms, PURCHASE_COOLDOWN_MS - 60_000);
    // 20 BP left after the purchase.
    assert!(!grenade.affordable);
    let medkit = view.iter().find(|v| v.item.id == "medkit").expect("medkit");
    assert!(!medkit.purchased);
    assert!(!medkit.affordable);
    assert_eq!(medkit.cooldown_remaining_ms, 0);
}

#[test]
fn test_multiplier_composition_on_displayed_balance() {
    let (_temp_dir, db_path) = common::create_test_environment();

    let mut tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_multipliers(Multipliers {
            double: true,
            vip: true,
        })
        .build()
        .expect("Failed to create tracker");

    // Both flags compose to x4 on the aggregate.
    tracker.toggle_complete(&mission("gym-session")).expect("toggle");
    tracker.increment(&mission("daily-objectives")).expect("increment");
    tracker.increment(&mission("daily-objectives")).expect("increment");
    tracker.increment(&mission("daily-objectives")).expect("increment");
    assert_eq!(tracker.earned_bp(), 60);
    assert_eq!(tracker.available_balance(), 240);
}

#[test]
fn test_daily_reset_wipes_cycle_but_not_spend() {
    let (_temp_dir, db_path) = common::create_test_environment();

    // Seed yesterday's reset marker before the tracker first loads.
    {
        let mut store = bounty_core::Store::new(&db_path).expect("open store");
        store
            .put_many(&[("lastResetDate", "2026-08-29".to_string())])
            .expect("seed marker");
    }

    let mut tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create tracker");
    assert_eq!(tracker.last_reset_date(), Some("2026-08-29"));

    tracker.set_initial_balance(200).expect("set balance");
    tracker.toggle_complete(&mission("gym-session")).expect("toggle");
    let outcome = tracker
        .purchase(&item("medkit"), ts("2026-08-29T20:00:00Z"))
        .expect("purchase");
    assert!(matches!(outcome, PurchaseOutcome::Accepted(_)));
    assert_eq!(tracker.available_balance(), 170);

    // Next morning, 09:00 Kyiv.
    assert!(tracker.maybe_reset(ts("2026-08-30T06:00:00Z")));
    assert_eq!(tracker.earned_bp(), 0);
    // Adjustment and spend survive the reset.
    assert_eq!(tracker.available_balance(), 150);
    assert_eq!(tracker.last_reset_date(), Some("2026-08-30"));
}
