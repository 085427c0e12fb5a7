//! Portfolio Page
//!
//! Showcase of past projects. Static content.

use leptos::prelude::*;

use crate::components::NavLink;

struct Project {
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    category: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with real-time inventory management, payment processing, and customer analytics. Built with React, Node.js, and MongoDB.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        category: "Web Development",
    },
    Project {
        title: "Mobile Banking App",
        description: "A secure mobile banking application with biometric authentication, transaction history, and budget tracking features. Developed for both iOS and Android platforms.",
        technologies: &["React Native", "Firebase", "Redux", "TypeScript"],
        category: "Mobile Development",
    },
    Project {
        title: "Corporate Website Redesign",
        description: "Complete redesign of a corporate website with improved UX/UI, performance optimization, and SEO enhancements. Increased conversion rates by 45%.",
        technologies: &["Next.js", "Material-UI", "GraphQL", "Framer Motion"],
        category: "Web Design",
    },
    Project {
        title: "AI-Powered Analytics Dashboard",
        description: "Real-time analytics dashboard with machine learning predictions, customizable reports, and data visualization tools for business intelligence.",
        technologies: &["Vue.js", "Python", "TensorFlow", "D3.js"],
        category: "Data Analytics",
    },
];

/// CSS modifier for the category badge
fn category_class(category: &str) -> &'static str {
    match category {
        "Web Development" => "badge badge-code",
        "Mobile Development" => "badge badge-devices",
        "Web Design" => "badge badge-design",
        "Data Analytics" => "badge badge-data",
        _ => "badge",
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Our Portfolio"</h1>
            <p class="lead">"A selection of projects we are proud of."</p>
        </section>

        <section class="project-grid">
            {PROJECTS
                .iter()
                .map(|project| view! {
                    <article class="card project-card">
                        <span class=category_class(project.category)>{project.category}</span>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <div class="tech-list">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| view! { <span class="chip">{*tech}</span> })
                                .collect_view()}
                        </div>
                    </article>
                })
                .collect_view()}
        </section>

        <section class="cta-band">
            <h2>"Have a project in mind?"</h2>
            <NavLink to="/contact" class="btn btn-primary">"Let's Talk"</NavLink>
        </section>
    }
}
