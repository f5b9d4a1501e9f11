use leptos::prelude::*;

/// One star of the decorative background field.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position as a percentage of the viewport.
    pub x: f32,
    /// Vertical position as a percentage of the viewport.
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    /// Peak opacity of the twinkle cycle.
    pub opacity: f32,
    /// Twinkle phase offset.
    pub delay_ms: u32,
    /// Twinkle cycle length.
    pub duration_ms: u32,
}

const SEED: u32 = 0x5eed_5743;

// Numerical Recipes LCG; top 24 bits mapped onto [0, 1)
fn next(state: &mut u32) -> f32 {
    *state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    (*state >> 8) as f32 / (1u32 << 24) as f32
}

/// Generates the star field from a fixed seed so the layout is identical on
/// the server and after hydration.
pub fn starfield(count: usize) -> Vec<Star> {
    let mut state = SEED;
    (0..count)
        .map(|_| {
            let x = next(&mut state) * 100.0;
            let y = next(&mut state) * 100.0;
            let size = 1.0 + next(&mut state) * 1.2;
            let opacity = 0.35 + next(&mut state) * 0.6;
            let delay_ms = (next(&mut state) * 4000.0) as u32;
            let duration_ms = 2000 + (next(&mut state) * 3000.0) as u32;
            Star {
                x,
                y,
                size,
                opacity,
                delay_ms,
                duration_ms,
            }
        })
        .collect()
}

#[component]
pub fn StarsBackground(#[prop(default = 50)] count: usize) -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {starfield(count)
                .into_iter()
                .map(|star| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; --star-opacity: {:.2}; box-shadow: 0 0 10px 1px rgba(255, 255, 255, 0.35); animation-delay: {}ms; animation-duration: {}ms;",
                        star.x,
                        star.y,
                        star.size,
                        star.size,
                        star.opacity,
                        star.delay_ms,
                        star.duration_ms,
                    );
                    view! { <div class="absolute rounded-full bg-white animate-twinkle" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_count() {
        assert_eq!(starfield(50).len(), 50);
        assert_eq!(starfield(0).len(), 0);
    }

    #[test]
    fn test_field_is_deterministic() {
        assert_eq!(starfield(50), starfield(50));
    }

    #[test]
    fn test_stars_stay_in_bounds() {
        for star in starfield(200) {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..2.2).contains(&star.size));
            assert!((0.35..0.95).contains(&star.opacity));
            assert!(star.delay_ms < 4000);
            assert!((2000..5000).contains(&star.duration_ms));
        }
    }
}
