#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const WORK_HISTORY: [WorkEntry; 2] = [
    WorkEntry {
        company: "Mydbops",
        role: "Associate Database Engineer",
        period: "July 2024 - Present",
        description: "Managing large-scale databases (MySQL & PostgreSQL). Experience with replication, AWS RDS, Xtrabackup, and performance tuning.",
        tags: &["MySQL", "PostgreSQL", "AWS", "Linux", "Backup & Recovery"],
    },
    WorkEntry {
        company: "Under 25 Universe",
        role: "Branded Student Cohort",
        period: "June 2024 - June 2025",
        description: "Part of a tech & creativity-focused community. Engaged in design, networking, and collaborative innovation.",
        tags: &["Community", "Figma", "Missions", "Space", "UI / UX"],
    },
];

/// Sections that fade in on first scroll into view, in page order.
pub const REVEAL_SECTIONS: [&str; 3] = ["about", "work", "contact"];

/// Navigation buttons: (button element id, target section id).
pub const NAV_TARGETS: [(&str, &str); 3] = [
    ("nav-about", "about"),
    ("nav-work", "work"),
    ("nav-contact", "contact"),
];

pub const OWNER: &str = "Athiban";

pub fn footer_text(year: i32) -> String {
    format!("© {} {}", year, OWNER)
}
