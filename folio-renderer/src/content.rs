//! The résumé shown on the page.

use folio_core::{Contact, Education, Job, Link, Profile, Skill, SkillGroup, Stat};

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Literal profile data for the published page.
#[must_use]
pub fn resume() -> Profile {
    Profile {
        name: "Jordan Reyes".to_string(),
        headline: "Senior Software Engineer".to_string(),
        tagline: "I build fast, reliable systems and the tools around them.".to_string(),
        roles: strings(&["Backend", "Distributed Systems", "Developer Tooling"]),
        about: strings(&[
            "Engineer with a decade of experience shipping backend services, data pipelines and internal platforms used by hundreds of developers.",
            "Happiest close to the metal: profiling hot paths, designing storage layouts and turning flaky deploys into boring ones.",
        ]),
        stats: vec![
            Stat {
                label: "Years experience".to_string(),
                value: 10,
                suffix: "+".to_string(),
            },
            Stat {
                label: "Services shipped".to_string(),
                value: 35,
                suffix: String::new(),
            },
            Stat {
                label: "Open-source commits".to_string(),
                value: 1200,
                suffix: "+".to_string(),
            },
        ],
        skills: vec![
            SkillGroup {
                name: "Languages".to_string(),
                skills: vec![
                    skill("Rust", 90),
                    skill("Go", 80),
                    skill("TypeScript", 75),
                    skill("SQL", 85),
                ],
            },
            SkillGroup {
                name: "Infrastructure".to_string(),
                skills: vec![
                    skill("Kubernetes", 80),
                    skill("PostgreSQL", 85),
                    skill("Kafka", 70),
                    skill("Terraform", 65),
                ],
            },
            SkillGroup {
                name: "Practice".to_string(),
                skills: vec![
                    skill("System design", 90),
                    skill("Observability", 85),
                    skill("Mentoring", 80),
                ],
            },
        ],
        experience: vec![
            Job {
                role: "Senior Software Engineer".to_string(),
                company: "Northwind Logistics".to_string(),
                period: "2020 - Present".to_string(),
                location: "Remote".to_string(),
                highlights: strings(&[
                    "Led the rewrite of the routing engine, cutting p99 latency from 480 ms to 35 ms.",
                    "Designed an event-sourced shipment ledger processing 40k events per second.",
                    "Mentored six engineers through the team's move to on-call ownership.",
                ]),
            },
            Job {
                role: "Software Engineer".to_string(),
                company: "Brightline Analytics".to_string(),
                period: "2016 - 2020".to_string(),
                location: "Austin, TX".to_string(),
                highlights: strings(&[
                    "Built the ingestion pipeline behind the customer dashboards.",
                    "Introduced structured logging and tracing across 20 services.",
                ]),
            },
            Job {
                role: "Junior Developer".to_string(),
                company: "Pixel & Pine Studio".to_string(),
                period: "2014 - 2016".to_string(),
                location: "Portland, OR".to_string(),
                highlights: strings(&[
                    "Shipped client web applications end to end, from schema to CSS.",
                ]),
            },
        ],
        education: vec![
            Education {
                degree: "B.S. Computer Science".to_string(),
                institution: "University of Oregon".to_string(),
                period: "2010 - 2014".to_string(),
                details: strings(&["Thesis: lock-free queues for soft real-time audio"]),
            },
            Education {
                degree: "Certified Kubernetes Administrator".to_string(),
                institution: "Cloud Native Computing Foundation".to_string(),
                period: "2021".to_string(),
                details: Vec::new(),
            },
        ],
        contact: Contact {
            email: "jordan.reyes@example.com".to_string(),
            phone: Some("+1 (555) 010-2040".to_string()),
            location: "Portland, Oregon".to_string(),
            links: vec![
                Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                Link {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/example".to_string(),
                },
            ],
        },
    }
}
