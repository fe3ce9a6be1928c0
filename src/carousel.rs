//! Carousel state machine shared by the guest-reviews and pre-launch
//! sections: a timer-driven autoplay loop with hover pause, a cool-down
//! after manual navigation, and scroll-sync of the backing container.
//!
//! The index arithmetic lives in [`CarouselCore`] so it can be tested
//! without a DOM; [`use_carousel`] owns the timers and guarantees they are
//! cleared on teardown.

use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Slide advance period while autoplaying.
const AUTOPLAY_PERIOD: Duration = Duration::from_millis(4000);
/// Autoplay suspension after a manual navigation.
const RESUME_DELAY: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One item advances per slide; dot count equals the item count.
    Item,
    /// A full page of `per_view` items advances per slide.
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselCore {
    pub item_count: usize,
    pub per_view: usize,
    pub granularity: Granularity,
}

impl CarouselCore {
    pub fn slide_count(&self) -> usize {
        match self.granularity {
            Granularity::Item => self.item_count,
            Granularity::Page => self.item_count.div_ceil(self.per_view),
        }
    }

    /// Arrows and dots are suppressed when everything already fits in view.
    pub fn controls_visible(&self) -> bool {
        self.item_count > self.per_view
    }

    pub fn next(&self, index: usize) -> usize {
        match self.slide_count() {
            0 => 0,
            count => (index + 1) % count,
        }
    }

    pub fn prev(&self, index: usize) -> usize {
        match self.slide_count() {
            0 => 0,
            count => (index + count - 1) % count,
        }
    }

    /// Target scroll offset for a slide index. Inter-item gaps are not
    /// accounted for, so visual drift accumulates over many slides.
    pub fn scroll_offset(&self, index: usize, container_width: f64) -> f64 {
        match self.granularity {
            Granularity::Item => index as f64 * (container_width / self.per_view as f64),
            Granularity::Page => index as f64 * container_width,
        }
    }
}

pub struct Carousel {
    pub core: CarouselCore,
    pub index: ReadSignal<usize>,
    pub go_to: Callback<usize>,
    pub next: Callback<()>,
    pub prev: Callback<()>,
    pub pause: Callback<()>,
    pub resume: Callback<()>,
}

/// Wires a [`CarouselCore`] to a scroll container. The autoplay interval is
/// re-acquired whenever the autoplay flag flips and cleared on unmount; a
/// manual navigation cancels any pending resume before scheduling its own,
/// so the cool-down always restarts from the latest interaction.
pub fn use_carousel(core: CarouselCore, container: NodeRef<html::Div>) -> Carousel {
    let (index, set_index) = create_signal(0usize);
    let auto_playing = create_rw_signal(true);
    let interval = store_value(None::<IntervalHandle>);
    let resume_timer = store_value(None::<TimeoutHandle>);

    create_effect(move |_| {
        let playing = auto_playing.get();
        interval.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
        if playing && core.controls_visible() {
            let handle = set_interval_with_handle(
                move || set_index.update(|i| *i = core.next(*i)),
                AUTOPLAY_PERIOD,
            )
            .ok();
            interval.set_value(handle);
        }
    });

    // Smooth-scroll the container whenever the index changes.
    create_effect(move |_| {
        let i = index.get();
        if let Some(el) = container.get() {
            let options = ScrollToOptions::new();
            options.set_left(core.scroll_offset(i, el.client_width() as f64));
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_to_with_scroll_to_options(&options);
        }
    });

    on_cleanup(move || {
        interval.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
        resume_timer.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    });

    let go_to = Callback::new(move |i: usize| {
        set_index.set(i);
        auto_playing.set(false);
        resume_timer.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
        let handle = set_timeout_with_handle(move || auto_playing.set(true), RESUME_DELAY).ok();
        resume_timer.set_value(handle);
    });

    Carousel {
        core,
        index,
        go_to,
        next: Callback::new(move |_| go_to.call(core.next(index.get_untracked()))),
        prev: Callback::new(move |_| go_to.call(core.prev(index.get_untracked()))),
        pause: Callback::new(move |_| auto_playing.set(false)),
        resume: Callback::new(move |_| auto_playing.set(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn per_item(item_count: usize, per_view: usize) -> CarouselCore {
        CarouselCore { item_count, per_view, granularity: Granularity::Item }
    }

    const fn per_page(item_count: usize, per_view: usize) -> CarouselCore {
        CarouselCore { item_count, per_view, granularity: Granularity::Page }
    }

    #[test]
    fn dot_count_per_granularity() {
        assert_eq!(per_item(4, 2).slide_count(), 4);
        assert_eq!(per_page(7, 3).slide_count(), 3);
        assert_eq!(per_page(6, 3).slide_count(), 2);
    }

    #[test]
    fn controls_suppressed_when_everything_fits() {
        assert!(!per_page(3, 3).controls_visible());
        assert!(!per_item(0, 2).controls_visible());
        assert!(per_item(4, 2).controls_visible());
    }

    #[test]
    fn empty_carousel_never_divides_by_zero() {
        let core = per_item(0, 2);
        assert_eq!(core.slide_count(), 0);
        assert_eq!(core.next(0), 0);
        assert_eq!(core.prev(0), 0);
    }

    #[test]
    fn autoplay_sequence_wraps() {
        let core = per_item(4, 2);
        let mut index = 0;
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                index = core.next(index);
                index
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn prev_wraps_backward() {
        let core = per_item(4, 2);
        assert_eq!(core.prev(0), 3);
        assert_eq!(core.prev(2), 1);
    }

    #[test]
    fn scroll_offset_per_item_divides_container() {
        let core = per_item(4, 2);
        assert_eq!(core.scroll_offset(0, 600.0), 0.0);
        assert_eq!(core.scroll_offset(1, 600.0), 300.0);
        assert_eq!(core.scroll_offset(3, 600.0), 900.0);
    }

    #[test]
    fn scroll_offset_per_page_jumps_full_width() {
        let core = per_page(7, 3);
        assert_eq!(core.scroll_offset(2, 900.0), 1800.0);
    }
}
