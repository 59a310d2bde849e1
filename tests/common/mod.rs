#![allow(dead_code)]

pub mod fixtures;

use std::time::Duration;

use challenge_list::{
    DisplayedQuery, Identity, ListConfig, LoadRequest, ManualClock, QueryCoordinator,
};

pub type RecordingCoordinator = QueryCoordinator<Vec<LoadRequest>, ManualClock>;

/// Debounce window of the default config
pub const WINDOW: Duration = Duration::from_millis(1000);

/// Coordinator for a signed-in non-admin user that records its requests.
pub fn recording_coordinator(displayed: DisplayedQuery) -> (RecordingCoordinator, ManualClock) {
    coordinator_for(displayed, Identity::user("jdoe"))
}

pub fn coordinator_for(
    displayed: DisplayedQuery,
    identity: Identity,
) -> (RecordingCoordinator, ManualClock) {
    let clock = ManualClock::new();
    let coordinator = QueryCoordinator::with_clock(
        displayed,
        identity,
        Vec::new(),
        &ListConfig::default(),
        clock.clone(),
    );
    (coordinator, clock)
}

/// Advance the clock by `by` and give the debounce a chance to fire.
pub fn advance(coordinator: &mut RecordingCoordinator, clock: &ManualClock, by: Duration) -> bool {
    clock.advance(by);
    coordinator.tick()
}

/// Let any pending filter edit settle.
pub fn settle(coordinator: &mut RecordingCoordinator, clock: &ManualClock) -> bool {
    advance(coordinator, clock, WINDOW)
}
