use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::frontend::{scroll_y, smooth_scroll_to};

const SCROLL_THRESHOLD_PX: f64 = 20.0;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("About", "about"),
    ("Services", "services"),
    ("Work", "work"),
    ("Contact", "contact"),
];

fn has_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let drawer_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::new(move || {
                scrolled.set(has_scrolled(scroll_y()));
            });

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // selecting a link scrolls to the section and always closes the drawer
    let nav_click = {
        let drawer_open = drawer_open.clone();
        move |target: &'static str| {
            let drawer_open = drawer_open.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                smooth_scroll_to(target);
                drawer_open.set(false);
            })
        }
    };

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(true))
    };

    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(false))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("is-scrolled"))}>
            <div class="navbar-inner">
                <a class="navbar-logo" href="#home" onclick={nav_click("home")}>
                    <img src="/logo.png" alt="Shihab" />
                </a>

                <ul class="navbar-links">
                    { for NAV_ITEMS.iter().map(|&(label, target)| html! {
                        <li key={target}>
                            <a
                                class="navbar-link"
                                href={format!("#{target}")}
                                onclick={nav_click(target)}
                            >
                                {label}
                            </a>
                        </li>
                    }) }
                </ul>

                <a class="navbar-cv button button-ghost" href="/cv.pdf" download="">
                    {"Download CV"}
                </a>

                <button
                    class="navbar-menu-button"
                    aria-label="Open menu"
                    aria-expanded={(*drawer_open).to_string()}
                    onclick={open_drawer}
                >
                    <span class="navbar-menu-bar" />
                    <span class="navbar-menu-bar is-short" />
                </button>
            </div>

            if *drawer_open {
                <div class="drawer-backdrop" onclick={close_drawer.clone()} />
            }

            <aside class={classes!("drawer", (*drawer_open).then_some("is-open"))}>
                <div class="drawer-head">
                    <button
                        class="drawer-close"
                        aria-label="Close menu"
                        onclick={close_drawer}
                    >
                        {"✕"}
                    </button>
                </div>

                <ul class="drawer-links">
                    { for NAV_ITEMS.iter().map(|&(label, target)| html! {
                        <li key={target}>
                            <a
                                class="drawer-link"
                                href={format!("#{target}")}
                                onclick={nav_click(target)}
                            >
                                {label}
                            </a>
                        </li>
                    }) }
                </ul>

                <div class="drawer-foot">
                    <a class="button button-ghost" href="/cv.pdf" download="">
                        {"Download CV"}
                    </a>
                    <p class="drawer-copyright">{"© 2026 Shihab"}</p>
                </div>
            </aside>
        </nav>
    }
}
