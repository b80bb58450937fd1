use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::contact::RelayConfig;

mod about;
mod company;
mod contact;
mod footer;
mod hero;
mod loading;
mod motion;
mod navbar;
mod services;
mod skills;
mod work;

use about::About;
use company::Company;
use contact::ContactSection;
use footer::Footer;
use hero::Hero;
use loading::LoadingGate;
use navbar::Navbar;
use services::Services;
use skills::Skills;
use work::Work;

const RELAY_CONFIG: RelayConfig = RelayConfig {
    endpoint: "https://api.emailjs.com/api/v1.0/email/send",
    service_id: "service_shihabdev",
    template_id: "template_contact",
    public_key: "rpL7x0QZkXo4m9TBd",
};

const CHAT_HANDLE: &str = "+880 1712-345678";

pub(crate) fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub(crate) fn smooth_scroll_to(section_id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    // a missing anchor is a silent no-op, not an error
    let Some(target) = document.get_element_by_id(section_id) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[function_component(App)]
fn app() -> Html {
    let booted = use_state(|| false);

    let on_finish = {
        let booted = booted.clone();
        Callback::from(move |_| booted.set(true))
    };

    if !*booted {
        return html! { <LoadingGate on_finish={on_finish} /> };
    }

    html! {
        <>
            <Navbar />
            <main>
                <Hero />
                <About />
                <Skills />
                <Services />
                <Work />
                <Company />
                <ContactSection relay={RELAY_CONFIG} chat_handle={CHAT_HANDLE} />
            </main>
            <Footer />
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
