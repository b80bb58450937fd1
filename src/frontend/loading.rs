use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::progress::EasedCounter;

const COUNT_DURATION_MS: u32 = 3_000;
const TICK_MS: u32 = 30;
const EXIT_MS: u32 = 800;

const COUNTER: EasedCounter = EasedCounter::new(100, COUNT_DURATION_MS);

#[derive(Properties, PartialEq)]
pub struct LoadingGateProps {
    pub on_finish: Callback<()>,
}

#[function_component(LoadingGate)]
pub fn loading_gate(props: &LoadingGateProps) -> Html {
    let elapsed = use_state(|| 0u32);

    {
        let elapsed_handle = elapsed.clone();
        let on_finish = props.on_finish.clone();
        use_effect_with(*elapsed, move |&elapsed_ms| {
            // one pending timer at a time; once the count completes the
            // elapsed state stops changing, so the exit timer is scheduled
            // exactly once
            let timer = if !COUNTER.is_complete(elapsed_ms) {
                Timeout::new(TICK_MS, move || {
                    elapsed_handle.set(elapsed_ms.saturating_add(TICK_MS));
                })
            } else {
                Timeout::new(EXIT_MS, move || on_finish.emit(()))
            };

            move || drop(timer)
        });
    }

    let percent = COUNTER.value_at(*elapsed);
    let exiting = COUNTER.is_complete(*elapsed);

    html! {
        <div
            class={classes!("loading-gate", exiting.then_some("is-exiting"))}
            aria-busy={(!exiting).to_string()}
            aria-live="polite"
        >
            <div class="loading-aura" aria-hidden="true" />
            <div class="loading-content">
                <p class="loading-badge">{"System.Init"}</p>
                <h1 class="loading-title">
                    {"MERN "}
                    <span class="loading-title-accent">{"STACK"}</span>
                </h1>
                <p class="loading-subtitle">{"Architecting the future"}</p>
                <div class="loading-progress">
                    <div class="loading-readout">
                        <div class="loading-status">
                            <span class="loading-status-label">{"Status"}</span>
                            <span class="loading-status-detail">{"Fetching modules..."}</span>
                        </div>
                        <p class="loading-percent">
                            <span class="loading-percent-value">{percent}</span>
                            <span class="loading-percent-sign">{"%"}</span>
                        </p>
                    </div>
                    <div
                        class="loading-bar"
                        role="progressbar"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow={percent.to_string()}
                    >
                        <div class="loading-bar-fill" style={format!("width: {percent}%")} />
                    </div>
                </div>
            </div>
        </div>
    }
}
