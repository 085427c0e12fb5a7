//! Home Page
//!
//! Hero, stats, and the "why choose us" feature grid. Static content.

use leptos::prelude::*;

use crate::components::NavLink;

const BENEFITS: &[&str] = &[
    "Custom tailored solutions for your business",
    "24/7 expert support and maintenance",
    "Proven track record of success",
    "Cutting-edge technology stack",
];

/// (value, label)
const STATS: &[(&str, &str)] = &[
    ("200+", "Happy Clients"),
    ("500+", "Projects Completed"),
    ("98%", "5-Star Reviews"),
    ("40%", "Faster Delivery"),
];

/// (title, description)
const FEATURES: &[(&str, &str)] = &[
    ("Innovation Driven", "Cutting-edge solutions that push boundaries and deliver exceptional results."),
    ("Growth Focused", "Strategies and solutions designed to drive your business growth."),
    ("Enterprise Grade", "Robust, secure, and scalable solutions for businesses of all sizes."),
    ("Friendly Design", "Quality and easy to navigate design and enhance experiences."),
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <span class="chip">"Trusted by 200+ Companies Worldwide"</span>
                <h1>"Transforming Ideas Into Digital Excellence"</h1>
                <p class="lead">
                    "We create stunning digital experiences that drive results and elevate your brand "
                    "to new heights. Let us help you transform your vision into reality with our expert "
                    "team and cutting-edge technology."
                </p>
                <ul class="benefits">
                    {BENEFITS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
                <div class="cta-row">
                    <NavLink to="/contact" class="btn btn-primary">"Get Started"</NavLink>
                    <NavLink to="/portfolio" class="btn btn-outline">"View Our Work"</NavLink>
                </div>
            </div>
            <div class="hero-panel">
                <h4>"Tech Excellence"</h4>
                <p>"Top of the line digital solutions"</p>
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="stat">
                                <strong>{*value}</strong>
                                <span>{*label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="features">
            <h2>"Why Choose Kamashka"</h2>
            <p class="lead">
                "We combine cutting-edge technology with innovative design to deliver exceptional "
                "digital experiences."
            </p>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(title, description)| view! {
                        <article class="card feature-card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
