/// Delay before the first staggered child starts its entrance.
pub const STAGGER_BASE_MS: u32 = 300;
/// Gap between consecutive staggered children.
pub const STAGGER_STEP_MS: u32 = 200;

/// Inline style delaying a child's entrance animation by its position in the
/// stagger container.
pub fn enter_delay(index: usize) -> String {
    let ms = STAGGER_BASE_MS + STAGGER_STEP_MS * index as u32;
    format!("animation-delay: {ms}ms;")
}
