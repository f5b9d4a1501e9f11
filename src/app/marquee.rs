use leptos::prelude::*;

use crate::content::site;

/// The logo list chained with itself, in source order.  The strip scrolls
/// half its own width per animation loop, so the second copy is what makes
/// the wrap-around seamless.
pub fn marquee_sequence(logos: &[String]) -> Vec<&str> {
    logos.iter().chain(logos.iter()).map(String::as_str).collect()
}

#[component]
pub fn LogoMarquee() -> impl IntoView {
    view! {
        <div class="w-full overflow-hidden py-6">
            <div class="relative">
                <div class="absolute inset-y-0 left-0 w-20 bg-gradient-to-r from-black to-transparent z-10 pointer-events-none"></div>
                <div class="absolute inset-y-0 right-0 w-20 bg-gradient-to-l from-black to-transparent z-10 pointer-events-none"></div>
                <div class="flex whitespace-nowrap animate-marquee">
                    {marquee_sequence(&site().marquee)
                        .into_iter()
                        .enumerate()
                        .map(|(index, src)| {
                            view! {
                                <img
                                    src=src
                                    alt=format!("logo {}", index + 1)
                                    class="h-16 w-16 sm:h-20 sm:w-20 object-contain rounded-xl mx-4 shadow-sm flex-shrink-0"
                                    loading="lazy"
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_doubles_the_logo_list() {
        let sequence = marquee_sequence(&site().marquee);
        assert_eq!(sequence.len(), 16);
        assert_eq!(sequence[..8], sequence[8..]);
    }

    #[test]
    fn test_sequence_preserves_source_order() {
        let logos = &site().marquee;
        let sequence = marquee_sequence(logos);
        for (i, logo) in logos.iter().enumerate() {
            assert_eq!(sequence[i], logo.as_str());
            assert_eq!(sequence[i + logos.len()], logo.as_str());
        }
    }

    #[test]
    fn test_each_logo_appears_exactly_twice() {
        let logos = &site().marquee;
        let sequence = marquee_sequence(logos);
        for logo in logos {
            let count = sequence.iter().filter(|s| **s == logo.as_str()).count();
            assert_eq!(count, 2, "{logo} should appear exactly twice");
        }
    }
}
