//! Static site content
//!
//! Pages render from these tables; nothing is fetched at runtime.

/// Rotating hero phrases for the typing line.
pub static HERO_PHRASES: [&str; 5] = [
    "AI & Data Science Student",
    "Full Stack Developer",
    "Machine Learning Enthusiast",
    "Cloud Computing Explorer",
    "Innovation Leader",
];

pub const OWNER: &str = "Kundan Suryawanshi";

/// Headline numbers, `(value, label)`. A trailing `+` is kept while counting.
pub const STATS: [(&str, &str); 4] = [
    ("15+", "Projects Completed"),
    ("8+", "Technologies"),
    ("3", "Internships"),
    ("10+", "Certifications"),
];

/// Home page cards, `(icon, title, text)`.
pub const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("fa-brain", "Machine Learning", "Models that go from notebook to production with measured results."),
    ("fa-laptop-code", "Full Stack", "Fast, accessible web apps from the database to the last pixel."),
    ("fa-cloud", "Cloud", "Serverless pipelines and containers that scale down as well as up."),
];

/// In-page anchors on the home page, `(label, href)`.
pub static HOME_SECTIONS: [(&str, &str); 4] = [
    ("Intro", "#home"),
    ("Highlights", "#highlights"),
    ("Numbers", "#stats"),
    ("Connect", "#connect"),
];

pub struct Skill {
    pub name: &'static str,
    /// Bar fill, 0..=100.
    pub level: u8,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Languages",
        icon: "fa-code",
        skills: &[
            Skill { name: "Python", level: 92 },
            Skill { name: "JavaScript", level: 85 },
            Skill { name: "SQL", level: 80 },
        ],
    },
    SkillGroup {
        title: "Machine Learning",
        icon: "fa-brain",
        skills: &[
            Skill { name: "scikit-learn", level: 88 },
            Skill { name: "TensorFlow", level: 78 },
            Skill { name: "Pandas", level: 90 },
        ],
    },
    SkillGroup {
        title: "Cloud & Tools",
        icon: "fa-cloud",
        skills: &[
            Skill { name: "AWS", level: 72 },
            Skill { name: "Docker", level: 75 },
            Skill { name: "Git", level: 90 },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Filter tags; a card may carry several.
    pub categories: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

/// Filter buttons, `(filter value, label)`. `all` shows every card.
pub const PROJECT_FILTERS: [(&str, &str); 5] = [
    ("all", "All"),
    ("ai", "AI / ML"),
    ("web", "Web"),
    ("data", "Data"),
    ("cloud", "Cloud"),
];

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Crop Yield Predictor",
        description: "Gradient-boosted regression over weather and soil data for district-level yield forecasts.",
        categories: &["ai", "data"],
        technologies: &["Python", "XGBoost", "Pandas"],
    },
    Project {
        title: "Campus Event Hub",
        description: "Event listings with RSVP tracking and a live seat counter for student clubs.",
        categories: &["web"],
        technologies: &["React", "Node.js", "MongoDB"],
    },
    Project {
        title: "Sentiment Dashboard",
        description: "Streams product reviews through a transformer classifier and charts the mood per day.",
        categories: &["ai", "web"],
        technologies: &["PyTorch", "FastAPI", "Chart.js"],
    },
    Project {
        title: "Serverless Image Resizer",
        description: "Upload-triggered thumbnail pipeline with per-tenant storage buckets.",
        categories: &["cloud"],
        technologies: &["AWS Lambda", "S3", "Terraform"],
    },
    Project {
        title: "Air Quality Explorer",
        description: "Cleans and joins open sensor feeds, then maps pollution hot spots by hour.",
        categories: &["data"],
        technologies: &["SQL", "Pandas", "Leaflet"],
    },
    Project {
        title: "Resume Screener",
        description: "Ranks applications against a job description with embeddings and keyword rules.",
        categories: &["ai", "cloud"],
        technologies: &["Python", "spaCy", "Docker"],
    },
];

pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub organisation: &'static str,
    pub summary: &'static str,
}

pub static EXPERIENCE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2024",
        role: "Machine Learning Intern",
        organisation: "AgriTech Labs",
        summary: "Built the feature pipeline and evaluation harness for yield models.",
    },
    TimelineEntry {
        period: "2023",
        role: "Web Development Intern",
        organisation: "Studio Nine",
        summary: "Shipped client dashboards and cut page load time by a third.",
    },
    TimelineEntry {
        period: "2022",
        role: "Technical Lead",
        organisation: "College Coding Club",
        summary: "Ran weekly workshops and organised the annual hackathon.",
    },
];

pub struct Achievement {
    pub title: &'static str,
    pub detail: &'static str,
    pub icon: &'static str,
}

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "Hackathon Winner",
        detail: "First place, state-level smart agriculture hackathon.",
        icon: "fa-trophy",
    },
    Achievement {
        title: "Cloud Practitioner",
        detail: "AWS Certified Cloud Practitioner.",
        icon: "fa-certificate",
    },
    Achievement {
        title: "Research Paper",
        detail: "Co-authored a paper on low-cost crop disease detection.",
        icon: "fa-file-alt",
    },
    Achievement {
        title: "Merit Scholarship",
        detail: "Awarded for academic performance three years running.",
        icon: "fa-award",
    },
];

/// Known profile URLs by platform.
pub const SOCIAL_PROFILES: [(&str, &str); 4] = [
    ("linkedin", "https://linkedin.com/in/kundan-suryawanshi"),
    ("github", "https://github.com/kundan-suryawanshi"),
    ("twitter", "https://twitter.com/kundan_surya"),
    ("instagram", "https://instagram.com/kundan.suryawanshi"),
];

/// Buttons rendered on the contact page, `(platform, icon)`. Platforms
/// without a profile announce that it is coming.
pub const SOCIAL_BUTTONS: [(&str, &str); 5] = [
    ("linkedin", "fab fa-linkedin-in"),
    ("github", "fab fa-github"),
    ("twitter", "fab fa-twitter"),
    ("instagram", "fab fa-instagram"),
    ("kaggle", "fab fa-kaggle"),
];

pub const CONTACT_EMAIL: &str = "hello@example.com";
