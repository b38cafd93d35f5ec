//! Built-in default catalogs.
//!
//! Missions and shop items are defined statically at startup; this
//! version does not create or destroy them at runtime. The mission
//! catalog is also the fallback when the persisted `tasks` blob is
//! absent, empty or unparseable.

use super::{Mission, ShopItem};

fn mission(id: &str, title: &str, description: &str, base_reward: u32, target_count: u32) -> Mission {
    Mission {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        base_reward,
        target_count,
        progress_count: 0,
        completed: false,
        reward_granted: false,
        visible: true,
    }
}

/// The default mission catalog.
///
/// A deliberate mix of target counts: one-shot toggles, short counters
/// below the reward cap, and grind missions at or above it.
pub fn default_missions() -> Vec<Mission> {
    vec![
        mission(
            "story-mission",
            "Story mission",
            "Finish today's story mission",
            100,
            1,
        ),
        mission(
            "daily-objectives",
            "Daily objectives",
            "Complete the three daily objectives",
            40,
            3,
        ),
        mission(
            "street-races",
            "Street races",
            "Win street races around the city",
            50,
            5,
        ),
        mission(
            "cargo-runs",
            "Cargo runs",
            "Deliver cargo crates across the map",
            30,
            10,
        ),
        mission(
            "gym-session",
            "Gym session",
            "Put in a training session",
            20,
            1,
        ),
        mission(
            "scrap-hunt",
            "Scrap hunt",
            "Collect scrap pieces hidden around the districts",
            25,
            8,
        ),
    ]
}

fn shop_item(id: &str, name: &str, description: &str, price: u32) -> ShopItem {
    ShopItem {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
    }
}

/// The static shop catalog.
pub fn default_shop_items() -> Vec<ShopItem> {
    vec![
        shop_item("car", "Sports car", "A fast sports car", 500),
        shop_item("drone", "Drone", "A flying scout drone", 400),
        shop_item("weapon", "Weapon", "A powerful weapon", 300),
        shop_item("armor", "Armor", "Protection from attacks", 250),
        shop_item("grenade", "Grenade", "An explosive device", 100),
        shop_item("medkit", "Medkit", "Restores health", 50),
    ]
}
