use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::frontend::motion::{observe_once, Reveal};
use crate::frontend::prefers_reduced_motion;
use crate::progress::EasedCounter;

const COUNT_DURATION_MS: u32 = 1_200;
const TICK_MS: u32 = 30;
const TRIGGER_THRESHOLD: f64 = 0.15;

const SKILLS: [(&str, u32); 12] = [
    ("HTML", 90),
    ("CSS", 85),
    ("JavaScript", 80),
    ("React", 85),
    ("Tailwind CSS", 80),
    ("Node.js", 70),
    ("Express.js", 70),
    ("MongoDB", 65),
    ("Mongoose", 65),
    ("Material UI", 75),
    ("Framer Motion", 70),
    ("Three.js", 50),
];

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    name: &'static str,
    target_level: u32,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let card = use_node_ref();
    // None until the card first scrolls into view; the count never restarts
    let elapsed = use_state(|| None::<u32>);
    let counter = EasedCounter::new(props.target_level, COUNT_DURATION_MS);

    {
        let card = card.clone();
        let elapsed = elapsed.clone();
        use_effect_with((), move |_| {
            let mut guard = None;

            if prefers_reduced_motion() {
                elapsed.set(Some(COUNT_DURATION_MS));
            } else {
                match card.cast::<Element>() {
                    Some(target) => {
                        let start = {
                            let elapsed = elapsed.clone();
                            move || elapsed.set(Some(0))
                        };
                        match observe_once(&target, TRIGGER_THRESHOLD, start) {
                            Some(active) => guard = Some(active),
                            None => elapsed.set(Some(0)),
                        }
                    }
                    None => elapsed.set(Some(0)),
                }
            }

            move || drop(guard)
        });
    }

    {
        let elapsed_handle = elapsed.clone();
        use_effect_with(*elapsed, move |&elapsed_ms| {
            let timer = elapsed_ms
                .filter(|&ms| ms < COUNT_DURATION_MS)
                .map(|ms| {
                    Timeout::new(TICK_MS, move || {
                        elapsed_handle.set(Some(ms.saturating_add(TICK_MS)));
                    })
                });

            move || drop(timer)
        });
    }

    let level = (*elapsed).map_or(0, |ms| counter.value_at(ms));

    html! {
        <div ref={card} class="skill-card">
            <div class="skill-card-heading">
                <h3 class="skill-name">{props.name}</h3>
                <span class="skill-level">{level}{"%"}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-bar-fill" style={format!("width: {level}%")} />
            </div>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="section skills">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-heading">{"My Skills"}</h2>
                </Reveal>
                <div class="skills-grid">
                    { for SKILLS.iter().map(|(name, target_level)| html! {
                        <SkillCard key={*name} name={*name} target_level={*target_level} />
                    }) }
                </div>
            </div>
        </section>
    }
}
