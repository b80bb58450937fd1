use std::cell::Cell;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::frontend::smooth_scroll_to;
use crate::typing::TypingLoop;

const CURSOR_BLINK_MS: u32 = 530;

const PHRASES: [(&str, &str); 2] = [
    ("Hello, I'm Shihab...", "accent-violet"),
    ("A Full Stack Developer...", "accent-sky"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let looper = use_mut_ref(|| {
        TypingLoop::new(PHRASES.iter().map(|(text, _)| (*text).to_string()).collect())
    });
    let revision = use_state(|| 0u32);
    let cursor_visible = use_state(|| true);

    {
        let looper = looper.clone();
        let revision_handle = revision.clone();
        use_effect_with(*revision, move |&revision| {
            let delay = looper.borrow().delay_for_next_ms();
            let timer = Timeout::new(delay, move || {
                looper.borrow_mut().advance();
                revision_handle.set(revision.wrapping_add(1));
            });

            move || drop(timer)
        });
    }

    {
        let cursor_visible = cursor_visible.clone();
        use_effect_with((), move |_| {
            let shown = Cell::new(true);
            let blink = Interval::new(CURSOR_BLINK_MS, move || {
                shown.set(!shown.get());
                cursor_visible.set(shown.get());
            });

            move || drop(blink)
        });
    }

    let headline = looper.borrow().visible();
    let accent = PHRASES[looper.borrow().phrase_index()].1;

    let scroll_to_work = Callback::from(|_: MouseEvent| smooth_scroll_to("work"));
    let scroll_to_contact = Callback::from(|_: MouseEvent| smooth_scroll_to("contact"));

    html! {
        <section id="home" class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="hero-grid" />
                <div class="hero-orb hero-orb-left" />
                <div class="hero-orb hero-orb-right" />
            </div>

            <div class="hero-content">
                <div class="hero-portrait">
                    <div class="hero-portrait-ring" aria-hidden="true" />
                    <img class="hero-portrait-image" src="/profile.png" alt="Portrait of Shihab" />
                </div>

                <h1 class="hero-headline">
                    <span class={classes!("hero-typed", accent)}>{headline}</span>
                    <span
                        class={classes!("hero-cursor", (!*cursor_visible).then_some("is-hidden"))}
                        aria-hidden="true"
                    >
                        {"|"}
                    </span>
                </h1>

                <h3 class="hero-tagline">
                    {"Full-Stack "}
                    <span class="hero-tagline-strong">{"Architect"}</span>
                    {" & Digital Craftsman"}
                </h3>

                <p class="hero-status">
                    <span class="accent-violet">{"const"}</span>
                    {" status = "}
                    <span class="accent-sky">{"\"Building scalable systems\""}</span>
                    {";"}
                </p>

                <p class="hero-intro">
                    {"I'm a passionate full stack developer specializing in high-performance \
                      web applications with the MERN stack. I enjoy creating interactive UI, \
                      seamless UX, and bringing complex systems to life with clean, \
                      maintainable code."}
                </p>

                <div class="hero-actions">
                    <button class="button button-primary" onclick={scroll_to_work}>
                        {"Explore My Work"}
                    </button>
                    <button class="button button-ghost" onclick={scroll_to_contact}>
                        {"Initialize Contact"}
                    </button>
                </div>
            </div>

            <div class="hero-scroll-hint" aria-hidden="true">
                <span>{"SCROLL"}</span>
                <div class="hero-scroll-line" />
            </div>
        </section>
    }
}
