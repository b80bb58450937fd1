use web_sys::MouseEvent;
use yew::prelude::*;

use crate::frontend::motion::Reveal;
use crate::frontend::{smooth_scroll_to, ExternalLink};

const QUICK_LINKS: [(&str, &str); 3] = [
    ("Home", "home"),
    ("About", "about"),
    ("Contact", "contact"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/shihabdev332"),
    ("LinkedIn", "https://www.linkedin.com/in/shihabdev"),
    ("Twitter", "https://twitter.com/shihabdev"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let quick_link = |target: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            smooth_scroll_to(target);
        })
    };

    html! {
        <footer class="footer">
            <div class="section-inner">
                <div class="footer-columns">
                    <Reveal delay_ms={100} class={classes!("footer-column")}>
                        <h3 class="footer-heading">{"About"}</h3>
                        <p class="footer-copy">
                            {"A passionate developer building modern web solutions with \
                              cutting-edge technologies."}
                        </p>
                    </Reveal>

                    <Reveal delay_ms={200} class={classes!("footer-column")}>
                        <h3 class="footer-heading">{"Quick Links"}</h3>
                        <ul class="footer-links">
                            { for QUICK_LINKS.iter().map(|&(label, target)| html! {
                                <li key={target}>
                                    <a href={format!("#{target}")} onclick={quick_link(target)}>
                                        {label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </Reveal>

                    <Reveal delay_ms={300} class={classes!("footer-column")}>
                        <h3 class="footer-heading">{"Follow Me"}</h3>
                        <ul class="footer-links">
                            { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                                <li key={*label}>
                                    <ExternalLink href={*href} label={*label} />
                                </li>
                            }) }
                        </ul>
                    </Reveal>

                    <Reveal delay_ms={400} class={classes!("footer-column")}>
                        <p class="footer-copy">
                            {"© 2026 Shihab. All rights reserved."}
                        </p>
                    </Reveal>
                </div>
            </div>
        </footer>
    }
}
