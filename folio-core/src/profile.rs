//! Résumé content model.

use serde::{Deserialize, Serialize};

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// One-line professional headline.
    pub headline: String,
    /// Short hero tagline, typed out on load.
    pub tagline: String,
    /// Role titles shown under the name.
    pub roles: Vec<String>,
    /// About-section paragraphs.
    pub about: Vec<String>,
    /// Headline numbers counted up in the about section.
    pub stats: Vec<Stat>,
    /// Grouped skill ratings.
    pub skills: Vec<SkillGroup>,
    /// Job history, most recent first.
    pub experience: Vec<Job>,
    /// Degrees and certificates.
    pub education: Vec<Education>,
    /// Contact details.
    pub contact: Contact,
}

/// A counted-up number with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Caption under the number.
    pub label: String,
    /// Final value.
    pub value: u64,
    /// Text after the number, e.g. `+`.
    #[serde(default)]
    pub suffix: String,
}

/// A named group of rated skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading.
    pub name: String,
    /// Skills in display order.
    pub skills: Vec<Skill>,
}

/// One skill with a self-rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Rating in percent, `0..=100`.
    pub level: u8,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Human-readable date range.
    pub period: String,
    /// City or "Remote".
    pub location: String,
    /// Bullet points.
    pub highlights: Vec<String>,
}

/// One degree or certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// Degree name.
    pub degree: String,
    /// School.
    pub institution: String,
    /// Human-readable date range.
    pub period: String,
    /// Optional extra lines (honours, thesis).
    #[serde(default)]
    pub details: Vec<String>,
}

/// Contact block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Email address.
    pub email: String,
    /// Phone number as displayed.
    pub phone: Option<String>,
    /// City, country.
    pub location: String,
    /// External profiles.
    pub links: Vec<Link>,
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link text.
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl Profile {
    /// Number of skills across all groups.
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|group| group.skills.len()).sum()
    }

    /// Initials for the hero monogram, at most two letters.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
