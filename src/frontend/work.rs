use yew::prelude::*;

use crate::frontend::motion::Reveal;
use crate::frontend::ExternalLink;

struct Project {
    title: &'static str,
    subtitle: &'static str,
    detail: &'static str,
    image: &'static str,
    live_url: &'static str,
    code_url: &'static str,
    tech: &'static [&'static str],
    role: &'static str,
    outcome: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Agency Architecture V1",
        subtitle: "High-Performance Engineering Platform",
        detail: "A construction and architectural platform engineered for maximum \
                 performance, focused on Core Web Vitals and fluid business presentation.",
        image: "/work-agency.png",
        live_url: "https://agency-weld-kappa.vercel.app/",
        code_url: "https://github.com/shihabdev332/Agency",
        tech: &["React 18", "Tailwind CSS", "GSAP", "Vite"],
        role: "Lead Frontend Engineer",
        outcome: "98% Lighthouse Score",
    },
    Project {
        title: "Quantum E-Commerce",
        subtitle: "Scalable Full-Stack Retail Engine",
        detail: "A robust retail engine built for complex state management and \
                 high-volume transactions with flicker-free cart logic.",
        image: "/work-shop.png",
        live_url: "https://online-shop-txm5.vercel.app/",
        code_url: "https://github.com/shihabdev332/online-Shop",
        tech: &["React", "Redux Toolkit", "Node.js", "Express"],
        role: "Full Stack Developer",
        outcome: "40% Lower Latency",
    },
    Project {
        title: "Digital Shop Ecosystem",
        subtitle: "Secure Marketplace with Stripe",
        detail: "A marketplace featuring smart personalization, automated fraud \
                 detection, and a modular architecture for high-traffic stability.",
        image: "/work-store.png",
        live_url: "https://digital-store-rj52.vercel.app",
        code_url: "https://github.com/shihabdev332/Digital-Shop-Front-end",
        tech: &["MERN Stack", "JWT Auth", "Stripe API", "MongoDB"],
        role: "Backend Architect",
        outcome: "Encrypted Transaction Pipeline",
    },
    Project {
        title: "Enterprise Command",
        subtitle: "Real-time Data Visualization",
        detail: "An admin panel featuring real-time predictive inventory analytics \
                 and automated business intelligence with RBAC security.",
        image: "/work-admin.png",
        live_url: "https://admin-panel-zeta-two-83.vercel.app/",
        code_url: "https://github.com/shihabdev332/Digital-shop-admin-panel",
        tech: &["React Query", "Chart.js", "Express", "Mongoose"],
        role: "System Designer",
        outcome: "Real-time Sync Stability",
    },
];

#[function_component(Work)]
pub fn work() -> Html {
    html! {
        <section id="work" class="section work">
            <div class="section-inner">
                <Reveal class={classes!("work-header")}>
                    <p class="section-eyebrow">{"portfolio.case_studies()"}</p>
                    <h2 class="section-heading">
                        {"Selected "}
                        <span class="heading-accent">{"Works"}</span>
                    </h2>
                </Reveal>

                <div class="work-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <Reveal key={project.title} class={classes!("project-card")}>
                            <div class="project-frame">
                                <div class="project-frame-bar" aria-hidden="true">
                                    <span class="project-dot" />
                                    <span class="project-dot" />
                                    <span class="project-dot" />
                                </div>
                                <img
                                    class="project-image"
                                    src={project.image}
                                    alt={format!("{} screenshot", project.title)}
                                    loading="lazy"
                                />
                                <span class="project-role">{project.role}</span>
                            </div>

                            <div class="project-body">
                                <h3 class="project-title">{project.title}</h3>
                                <p class="project-subtitle">{project.subtitle}</p>
                                <p class="project-detail">{project.detail}</p>

                                <ul class="project-tech">
                                    { for project.tech.iter().map(|tech| html! {
                                        <li key={*tech}>{*tech}</li>
                                    }) }
                                </ul>

                                <p class="project-outcome">{project.outcome}</p>

                                <div class="project-links">
                                    <ExternalLink
                                        class={classes!("button", "button-primary")}
                                        href={project.live_url}
                                        label="View Project"
                                    />
                                    <ExternalLink
                                        class={classes!("button", "button-ghost")}
                                        href={project.code_url}
                                        label="Source"
                                    />
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
