use yew::prelude::*;

use crate::frontend::motion::Reveal;

const COMPANIES: [&str; 5] = [
    "YEllo Amber It",
    "Bruaracia",
    "My Captain",
    "Umion Living",
    "Accenture",
];

fn marquee_row(direction: &'static str) -> Html {
    // the list is doubled so the CSS loop can wrap without a visible seam
    html! {
        <div class="marquee">
            <div class={classes!("marquee-track", direction)}>
                { for COMPANIES.iter().chain(COMPANIES.iter()).enumerate().map(|(index, name)| html! {
                    <span key={index} class="marquee-item">{*name}</span>
                }) }
            </div>
        </div>
    }
}

#[function_component(Company)]
pub fn company() -> Html {
    html! {
        <section id="company" class="section company">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-heading">{"Companies I've worked with"}</h2>
                </Reveal>
                { marquee_row("is-leftward") }
                { marquee_row("is-rightward") }
            </div>
        </section>
    }
}
