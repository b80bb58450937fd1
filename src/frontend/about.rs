use web_sys::MouseEvent;
use yew::prelude::*;

use crate::frontend::motion::{Entrance, Reveal};
use crate::frontend::smooth_scroll_to;

const STATS: [(&str, &str); 3] = [
    ("2+", "Years of Experience"),
    ("50+", "Global Customers"),
    ("50+", "Projects Completed"),
];

#[function_component(About)]
pub fn about() -> Html {
    let scroll_to_contact = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        smooth_scroll_to("contact");
    });

    html! {
        <section id="about" class="section about">
            <div class="section-inner about-layout">
                <Reveal variant={Entrance::FadeLeft} class={classes!("about-portrait")}>
                    <img src="/about.png" alt="Shihab at work" />
                </Reveal>

                <Reveal variant={Entrance::FadeRight} delay_ms={200} class={classes!("about-copy")}>
                    <h2 class="section-heading">{"About Me"}</h2>
                    <p>
                        {"I am a full stack (MERN) developer with expertise in MongoDB, \
                          Express.js, React, and Node.js, building scalable and \
                          high-performance web applications. I create responsive, \
                          user-friendly interfaces while implementing robust backend \
                          logic, database management, and APIs."}
                    </p>
                    <p>
                        {"My goal is to turn ideas into stunning websites that provide a \
                          smooth user experience across all devices. I continually learn \
                          new tools and technologies to enhance my skill set and deliver \
                          high-quality projects."}
                    </p>
                    <a class="button button-primary" href="#contact" onclick={scroll_to_contact}>
                        {"Contact Me"}
                    </a>
                </Reveal>
            </div>

            <div class="section-inner about-stats">
                { for STATS.iter().enumerate().map(|(index, (number, label))| html! {
                    <Reveal
                        key={*label}
                        delay_ms={300 + (index as u32) * 200}
                        class={classes!("about-stat")}
                    >
                        <h3 class="about-stat-number">{*number}</h3>
                        <p class="about-stat-label">{*label}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
