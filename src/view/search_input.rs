//! Search box gating.
//!
//! The search box forwards text only once it reaches `min_length`
//! characters. When an edit takes it below the minimum, it forwards an
//! empty string exactly once, so clearing the box still clears the
//! filter. Growing text that is still too short is not forwarded.

/// Decide what a search box edit forwards to the coordinator.
///
/// Returns `None` when nothing should be forwarded.
pub fn search_input_change(previous: &str, next: &str, min_length: usize) -> Option<String> {
    let next_len = next.chars().count();
    if next_len >= min_length {
        return Some(next.to_string());
    }

    let previous_len = previous.chars().count();
    if previous_len > next_len {
        Some(String::new())
    } else {
        None
    }
}
