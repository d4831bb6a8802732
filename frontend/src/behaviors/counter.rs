//! Count-up animation for the statistics strip.
//!
//! Every display runs from 0 to its `data-target` in the same wall-clock
//! duration, one step per animation frame. The whole group starts once,
//! the first time the section is half visible.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use super::flag::CounterFlag;
use crate::config;
use crate::error::PageResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(i64),
    Finished(i64),
}

impl CounterFrame {
    pub fn value(self) -> i64 {
        match self {
            CounterFrame::Running(v) | CounterFrame::Finished(v) => v,
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, CounterFrame::Finished(_))
    }
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    steps_taken: u32,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            increment: target as f64 / Self::total_steps(),
            steps_taken: 0,
            finished: false,
        }
    }

    pub fn total_steps() -> f64 {
        config::COUNTER_DURATION_MS / config::COUNTER_FRAME_MS
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self) -> CounterFrame {
        if self.is_finished() {
            return CounterFrame::Finished(self.target);
        }
        self.steps_taken += 1;
        // Derived from the step count, so the final step equals the target exactly.
        let current = self.target as f64 * f64::from(self.steps_taken) / Self::total_steps();
        if current < self.target as f64 {
            CounterFrame::Running(current.floor() as i64)
        } else {
            self.finished = true;
            CounterFrame::Finished(self.target)
        }
    }
}

pub fn parse_target(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok()
}

pub trait FrameScheduler {
    fn request_frame(&self, step: Box<dyn FnOnce()>);
}

pub fn drive<S>(scheduler: Rc<S>, animation: CounterAnimation, render: impl FnMut(CounterFrame) + 'static)
where
    S: FrameScheduler + 'static,
{
    schedule_step(scheduler, animation, Box::new(render));
}

fn schedule_step<S>(scheduler: Rc<S>, mut animation: CounterAnimation, mut render: Box<dyn FnMut(CounterFrame)>)
where
    S: FrameScheduler + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move || {
        let frame = animation.step();
        render(frame);
        if !frame.is_final() {
            schedule_step(next, animation, render);
        }
    }));
}

pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, step: Box<dyn FnOnce()>) {
        let Ok(window) = dom::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || step());
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("animation frame rejected: {}", crate::error::describe_js(&e));
        }
    }
}

#[derive(Debug, Default)]
pub struct StatCounterGroup {
    flag: CounterFlag,
}

impl StatCounterGroup {
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if self.has_animated() {
            return false;
        }
        is_intersecting && self.flag.trigger()
    }

    pub fn has_animated(&self) -> bool {
        self.flag.is_seen()
    }
}

fn animate_display(scheduler: Rc<AnimationFrames>, el: HtmlElement) {
    let raw = el.get_attribute(config::STAT_TARGET_ATTR);
    let Some(target) = parse_target(raw.as_deref()) else {
        log::warn!("skipping stat display with invalid {}: {:?}", config::STAT_TARGET_ATTR, raw);
        return;
    };
    let animation = CounterAnimation::new(target);
    log::debug!("counting to {} by {:.2} per frame", animation.target(), animation.increment());
    drive(scheduler, animation, move |frame| {
        el.set_text_content(Some(&frame.value().to_string()));
    });
}

pub fn init_stats_counter() -> PageResult<()> {
    let Some(section) = dom::query(config::STATS_SECTION_SELECTOR) else {
        log::debug!("no stats section, counter disabled");
        return Ok(());
    };

    let group = Rc::new(RefCell::new(StatCounterGroup::default()));
    let scheduler = Rc::new(AnimationFrames);

    let callback = {
        let section = section.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !group.borrow_mut().on_intersection(entry.is_intersecting()) {
                    continue;
                }
                observer.unobserve(&section);
                let displays = dom::query_all_in(&section, config::STAT_NUMBER_SELECTOR);
                log::debug!("starting {} stat counters", displays.len());
                for el in displays {
                    animate_display(scheduler.clone(), el);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&config::STATS_THRESHOLD.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    observer.observe(&section);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;

    // Deterministic scheduler: each `tick` runs the queued frame callbacks
    // and advances simulated time by one frame interval.
    #[derive(Default)]
    struct ManualFrames {
        queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
        now_ms: Cell<f64>,
    }

    impl FrameScheduler for ManualFrames {
        fn request_frame(&self, step: Box<dyn FnOnce()>) {
            self.queue.borrow_mut().push_back(step);
        }
    }

    impl ManualFrames {
        fn tick(&self) {
            self.now_ms.set(self.now_ms.get() + config::COUNTER_FRAME_MS);
            let pending: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for step in pending {
                step();
            }
        }

        fn idle(&self) -> bool {
            self.queue.borrow().is_empty()
        }
    }

    fn run(target: i64) -> (Vec<(f64, CounterFrame)>, Rc<ManualFrames>) {
        let scheduler = Rc::new(ManualFrames::default());
        let frames = Rc::new(RefCell::new(Vec::new()));
        {
            let frames = frames.clone();
            let clock = scheduler.clone();
            drive(scheduler.clone(), CounterAnimation::new(target), move |frame| {
                frames.borrow_mut().push((clock.now_ms.get(), frame));
            });
        }
        let mut guard = 0;
        while !scheduler.idle() {
            scheduler.tick();
            guard += 1;
            assert!(guard < 1000, "counter never finished");
        }
        let frames = frames.borrow().clone();
        (frames, scheduler)
    }

    #[test]
    fn increment_spreads_target_over_duration() {
        let anim = CounterAnimation::new(500);
        assert_eq!(anim.increment(), 500.0 / 125.0);
    }

    #[test]
    fn counts_up_monotonically_and_finishes_on_target_at_two_seconds() {
        for target in [1, 7, 125, 500, 1234, 98765] {
            let (frames, scheduler) = run(target);
            let values: Vec<i64> = frames.iter().map(|(_, f)| f.value()).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert!(values.iter().all(|v| (0..=target).contains(v)));

            let (finished_at, last) = *frames.last().unwrap();
            assert_eq!(last, CounterFrame::Finished(target));
            assert_eq!(finished_at, config::COUNTER_DURATION_MS);
            assert_eq!(scheduler.now_ms.get(), config::COUNTER_DURATION_MS);
            assert!(frames[..frames.len() - 1].iter().all(|(_, f)| !f.is_final()));
        }
    }

    #[test]
    fn large_target_strictly_increases() {
        let (frames, _) = run(10_000);
        let values: Vec<i64> = frames.iter().map(|(_, f)| f.value()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values[0], 80);
    }

    #[test]
    fn finished_animation_stays_on_target() {
        let mut anim = CounterAnimation::new(3);
        while !anim.step().is_final() {}
        assert!(anim.is_finished());
        assert_eq!(anim.step(), CounterFrame::Finished(3));
    }

    #[test]
    fn non_positive_target_finishes_immediately() {
        assert_eq!(CounterAnimation::new(0).step(), CounterFrame::Finished(0));
        assert_eq!(CounterAnimation::new(-40).step(), CounterFrame::Finished(-40));
    }

    #[test]
    fn parses_only_integer_targets() {
        assert_eq!(parse_target(Some("250")), Some(250));
        assert_eq!(parse_target(Some(" 42 ")), Some(42));
        assert_eq!(parse_target(Some("12abc")), None);
        assert_eq!(parse_target(Some("")), None);
        assert_eq!(parse_target(Some("3.5")), None);
        assert_eq!(parse_target(None), None);
    }

    #[test]
    fn group_starts_once() {
        let mut group = StatCounterGroup::default();
        assert!(!group.on_intersection(false));
        assert!(!group.has_animated());
        assert!(group.on_intersection(true));
        assert!(!group.on_intersection(false));
        assert!(!group.on_intersection(true));
        assert!(group.has_animated());
    }
}
