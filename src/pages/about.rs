//! About Page

use leptos::prelude::*;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    expertise: &'static str,
    years: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember { name: "Nezar Gazer", role: "CEO & Founder", expertise: "Software engineering", years: "3+ years" },
    TeamMember { name: "Neveen Saeed", role: "Co-Founder", expertise: "Market Analysis", years: "2+ years" },
    TeamMember { name: "Nasser Gazer", role: "Finance manager", expertise: "Financial analysis", years: "8+ years" },
];

/// (title, description)
const VALUES: &[(&str, &str)] = &[
    ("Innovation", "We constantly push boundaries and explore new technologies to deliver cutting-edge solutions."),
    ("Collaboration", "We believe in the power of teamwork and open communication to achieve extraordinary results."),
    ("Integrity", "We maintain the highest ethical standards and build relationships based on trust and transparency."),
];

/// (number, label)
const STATS: &[(&str, &str)] = &[
    ("200+", "Happy Clients"),
    ("500+", "Projects Completed"),
    ("98%", "Client Satisfaction"),
    ("40+", "Team Members"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="page-hero">
            <span class="chip">"About Us"</span>
            <h1>"Building the Future of Digital"</h1>
            <p class="lead">
                "Kamashka is a team of engineers, designers, and strategists turning ideas into "
                "products people love to use."
            </p>
        </section>

        <section class="stats-band">
            {STATS
                .iter()
                .map(|(number, label)| view! {
                    <div class="stat">
                        <strong>{*number}</strong>
                        <span>{*label}</span>
                    </div>
                })
                .collect_view()}
        </section>

        <section class="values">
            <h2>"Our Values"</h2>
            <div class="feature-grid">
                {VALUES
                    .iter()
                    .map(|(title, description)| view! {
                        <article class="card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="team">
            <h2>"Meet Our Team"</h2>
            <div class="team-grid">
                {TEAM
                    .iter()
                    .map(|member| view! {
                        <article class="card team-card">
                            <h3>{member.name}</h3>
                            <p class="role">{member.role}</p>
                            <p>{member.expertise}</p>
                            <span class="chip">{member.years}</span>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
