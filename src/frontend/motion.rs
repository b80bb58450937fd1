use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::frontend::prefers_reduced_motion;

const REVEAL_THRESHOLD: f64 = 0.2;

pub struct IntersectionGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for IntersectionGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// Fires `on_visible` the first time `target` crosses the threshold, then
// disconnects. Dropping the guard disconnects without firing.
pub fn observe_once<F>(target: &Element, threshold: f64, on_visible: F) -> Option<IntersectionGuard>
where
    F: FnOnce() + 'static,
{
    let mut pending = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let crossed = entries.iter().any(|entry| {
                entry
                    .dyn_ref::<IntersectionObserverEntry>()
                    .is_some_and(IntersectionObserverEntry::is_intersecting)
            });

            if crossed {
                observer.disconnect();
                if let Some(notify) = pending.take() {
                    notify();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;
    observer.observe(target);

    Some(IntersectionGuard {
        observer,
        _callback: callback,
    })
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    FadeUp,
    FadeLeft,
    FadeRight,
    Zoom,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal-up",
            Self::FadeLeft => "reveal-left",
            Self::FadeRight => "reveal-right",
            Self::Zoom => "reveal-zoom",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or(Entrance::FadeUp)]
    pub variant: Entrance,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(prefers_reduced_motion);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let mut guard = None;

            if !*visible {
                match node.cast::<Element>() {
                    Some(target) => {
                        let on_visible = {
                            let visible = visible.clone();
                            move || visible.set(true)
                        };
                        match observe_once(&target, REVEAL_THRESHOLD, on_visible) {
                            Some(active) => guard = Some(active),
                            None => visible.set(true),
                        }
                    }
                    None => visible.set(true),
                }
            }

            move || drop(guard)
        });
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.variant.class(),
                (*visible).then_some("is-visible"),
                props.class.clone(),
            )}
            {style}
        >
            { props.children.clone() }
        </div>
    }
}
