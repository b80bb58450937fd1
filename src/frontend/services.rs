use yew::prelude::*;

use crate::frontend::motion::{Entrance, Reveal};

struct Service {
    title: &'static str,
    stack: &'static str,
    detail: &'static str,
}

const SERVICES: [Service; 9] = [
    Service {
        title: "Portfolio Development",
        stack: "GSAP / React / Three.js",
        detail: "Performance-optimized personal brands built with premium motion physics.",
    },
    Service {
        title: "Landing Pages",
        stack: "Tailwind / Framer / Vite",
        detail: "High-converting single-page applications with scroll-triggered engagement.",
    },
    Service {
        title: "Agency Solutions",
        stack: "Next.js / TypeScript",
        detail: "Scalable professional architectures that establish market authority.",
    },
    Service {
        title: "Full-Stack MERN",
        stack: "Node / Express / Mongo",
        detail: "End-to-end applications with modular server logic and database clusters.",
    },
    Service {
        title: "RESTful Backend",
        stack: "Redis / Mongoose / API",
        detail: "Complex API design focusing on low latency and high availability.",
    },
    Service {
        title: "Security & Auth",
        stack: "JWT / OAuth / bcrypt",
        detail: "Identity management with role-based access control protocols.",
    },
    Service {
        title: "E-commerce UI",
        stack: "Redux / Stripe / CMS",
        detail: "Seamless shopping flows with state-managed carts and secure payments.",
    },
    Service {
        title: "Figma to React",
        stack: "Design Tokens / Clean Code",
        detail: "Precise translation of design tokens into reusable Tailwind components.",
    },
    Service {
        title: "Corporate Systems",
        stack: "Dashboard / Chart.js",
        detail: "Internal tools and corporate portals with robust data visualization.",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section services">
            <div class="section-inner">
                <Reveal class={classes!("services-header")}>
                    <p class="section-eyebrow">{"System.Services_Overview"}</p>
                    <h2 class="section-heading">
                        {"Elite "}
                        <span class="heading-accent">{"Solutions"}</span>
                    </h2>
                    <p class="section-lede">
                        {"I architect high-performance digital environments where luxury \
                          design meets technical excellence."}
                    </p>
                </Reveal>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal
                            key={service.title}
                            variant={Entrance::Zoom}
                            delay_ms={(index as u32 % 3) * 100}
                            class={classes!("service-card")}
                        >
                            <div class="service-card-top">
                                <span class="service-index">
                                    {format!("{:02}", index + 1)}
                                </span>
                            </div>
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-detail">{service.detail}</p>
                            <div class="service-stack">
                                <p class="service-stack-label">{"Technical Stack"}</p>
                                <p class="service-stack-value">{service.stack}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>

                <Reveal class={classes!("services-cta")}>
                    <p class="services-cta-hint">{"Ready to scale your next project?"}</p>
                    <a class="services-cta-link" href="#contact">
                        {"Initialize_Collaboration"}
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
