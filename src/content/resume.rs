//! The résumé itself.

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn link(kind: LinkKind, label: &str, href: &str) -> ContactLink {
    ContactLink {
        kind,
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn experience(role: &str, company: &str, location: &str, period: &str, highlights: &[&str]) -> ExperienceEntry {
    ExperienceEntry {
        role: role.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        period: period.to_string(),
        highlights: strings(highlights),
    }
}

fn skills(title: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        skills: strings(items),
    }
}

fn achievement(title: &str, summary: &str) -> Achievement {
    Achievement {
        title: title.to_string(),
        summary: summary.to_string(),
    }
}

const LINKEDIN: &str = "https://linkedin.com/in/acidentlgenius";

pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Abhinav Maurya".into(),
            initials: "AM".into(),
            location: "Noida, Uttar Pradesh".into(),
            headline: "Machine Learning Engineer & Full Stack Developer passionate about building scalable solutions and pushing the boundaries of technology.".into(),
            avatar: "/avatar.jpg".into(),
        },
        contacts: vec![
            link(LinkKind::Email, "Email", "mailto:abhinavmaurya747@gmail.com"),
            link(LinkKind::Phone, "Call", "tel:+918299142953"),
            link(LinkKind::LinkedIn, "LinkedIn", LINKEDIN),
            link(LinkKind::GitHub, "GitHub", "https://github.com"),
        ],
        experience: vec![
            experience(
                "Machine Learning Engineer",
                "Tata Consultancy Services",
                "Noida, India",
                "Mar 2025 - Present",
                &[
                    "Implemented real-time streaming with a robust heartbeat mechanism to ensure seamless, uninterrupted performance for extended LLM interactions, enhancing user experience and system reliability.",
                    "Architected and deployed a vehicle recommendation engine by integrating research-phase algorithms into production databases, seamlessly embedding it into the core LLM chat application to deliver personalized, data-driven suggestions.",
                    "Developed a file upload feature for chat interactions, leveraging vector database chunking and ranking-based context generation to provide precise, context-aware responses to user queries, boosting engagement and utility.",
                    "Engineered an advanced agentic flow that decomposes complex user prompts into sub-prompts, processes them in parallel, and synthesizes results for a cohesive final response. Streamed intermediate thoughts, sub-prompt statuses, and results to the user, delivering a transparent and interactive experience.",
                    "Enhanced chatbot capabilities by implementing prompt-driven data visualization. Automatically analyzed user prompts to identify visualization needs, generated SQL queries to fetch relevant data from Redshift, and streamed graph data to the frontend for real-time rendering, enriching user insights.",
                ],
            ),
            experience(
                "Full Stack Developer",
                "Tata Consultancy Services",
                "Noida, India",
                "Jul 2022 - Mar 2025",
                &[
                    "Contributed to Baadal's cloud infrastructure by developing key modules (Ceph, OpenStack, Nagios, DB Compute, DNS Provisioning) that boosted scalability by 30% and supported 10,000+ virtual instances; collaborated with stakeholders to align solutions with organizational needs.",
                    "Enhanced these modules by designing robust RESTful APIs, intuitive UIs, and integrating multithreading techniques to improve user experience and system performance under high-load conditions.",
                    "Engineered cloud orchestration features, REST APIs, and CLI commands using Python, Docker, Kubernetes, OSM, MongoDB, and SQL, automating virtual machine management, boosting system reliability by 25% and reducing manual intervention time by 40% across a unified portal.",
                    "Led and designed the implementation of a tool to automate the 4G/5G node deployment process for BSNL, reducing deployment time from 2 hours to just 20 minutes using Python, Flask, Frontend and Backend technologies. Tooling improved the speed and accuracy of deployment, saving the company time and resources.",
                ],
            ),
            experience(
                "Machine Learning Engineer Intern",
                "ResoluteAI.in",
                "Remote",
                "Jul 2021 - Oct 2021",
                &[
                    "Build a dashboard for visualization of a data analytic project which boosted the process by 60%. Also, trained model using gradient boosting and added a module for prediction with an R2 score of 99.8%.",
                    "Created a machine learning pipeline that can create a 3D model from a given 2D photograph of a person using open-source tools and demonstrated it.",
                ],
            ),
        ],
        projects: vec![
            ProjectRecord {
                id: "node-deployment".into(),
                title: "Automated 4G/5G Node Deployment Tool".into(),
                period: "Jul 2022 - Mar 2025".into(),
                description: "Led the design and implementation of an automation tool that reduced BSNL's deployment time from 2 hours to 20 minutes, improving efficiency and accuracy.".into(),
                features: strings(&[
                    "One-click node provisioning for 4G/5G sites",
                    "Validated configuration templates per site",
                    "Deployment progress tracking in a web dashboard",
                ]),
                technologies: strings(&["Python", "Flask", "Frontend", "Backend"]),
                stats: "2 hours → 20 minutes".into(),
                demo_url: None,
                source_url: None,
                preview: None,
            },
            ProjectRecord {
                id: "3d-model-pipeline".into(),
                title: "3D Model Generation Pipeline".into(),
                period: "Jul 2021 - Oct 2021".into(),
                description: "Created an ML pipeline that generates 3D models from 2D photographs using advanced computer vision techniques.".into(),
                features: strings(&[
                    "Single-photograph input",
                    "Open-source reconstruction tooling",
                    "End-to-end demo of the generated mesh",
                ]),
                technologies: strings(&["Machine Learning", "Open Source Tools"]),
                stats: "2D photo → 3D model".into(),
                demo_url: None,
                source_url: None,
                preview: None,
            },
            ProjectRecord {
                id: "analytics-dashboard".into(),
                title: "Data Analytics Dashboard".into(),
                period: "Jul 2021 - Oct 2021".into(),
                description: "Built a visualization dashboard that improved data analytic processes by 60% with predictive modeling capabilities.".into(),
                features: strings(&[
                    "Interactive data visualization",
                    "Gradient boosting prediction module",
                ]),
                technologies: strings(&["Gradient Boosting", "Python"]),
                stats: "R2 Score 99.8%".into(),
                demo_url: None,
                source_url: None,
                preview: None,
            },
        ],
        skills: vec![
            skills("Programming Languages", &["Python", "JavaScript", "TypeScript", "SQL"]),
            skills("Frameworks & Libraries", &["React", "Next.js", "Flask", "TensorFlow"]),
            skills("Cloud & DevOps", &["Docker", "Kubernetes", "AWS", "OpenStack"]),
            skills("Databases", &["MongoDB", "PostgreSQL", "Redis", "Redshift"]),
        ],
        education: vec![EducationEntry {
            degree: "Bachelor of Technology in Computer Science".into(),
            institution: "Jaypee Institute of Information Technology, Noida".into(),
            period: "2018 - 2022".into(),
            summary: "Focused on computer science fundamentals, software engineering, and machine learning. Active in various technical clubs and projects.".into(),
        }],
        achievements: vec![
            achievement(
                "Cloud Infrastructure Scalability",
                "Boosted Baadal's cloud infrastructure scalability by 30%, supporting 10,000+ virtual instances through optimized module development.",
            ),
            achievement(
                "Deployment Automation",
                "Reduced BSNL's 4G/5G node deployment time from 2 hours to 20 minutes through innovative automation tooling.",
            ),
            achievement(
                "Machine Learning Excellence",
                "Achieved 99.8% R2 score in predictive modeling and developed advanced 3D model generation pipeline from 2D photographs.",
            ),
            achievement(
                "System Reliability",
                "Improved system reliability by 25% and reduced manual intervention by 40% through cloud orchestration and automation features.",
            ),
        ],
        footer: "Built with ❤️ using Rust, WebAssembly and shadcn/ui".into(),
    }
}
