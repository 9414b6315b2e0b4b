//! Site content model. The content itself is embedded as JSON and
//! parsed once at startup; components receive slices of it as props.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Texts cycled by the hero typing banner.
    pub typing_texts: Vec<String>,
    pub tagline: String,
    pub email: String,
    pub portrait: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Progress bar percentage, 0-100.
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub activities: Vec<Activity>,
}

impl SiteContent {
    pub fn load() -> Self {
        serde_json::from_str(include_str!("content.json"))
            .expect("embedded site content is valid JSON")
    }
}

/// A submitted contact form, turned into a mailto subject/body pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Portfolio Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}\n\nSent from the portfolio website",
            self.name, self.email, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::load();
        assert!(!content.profile.typing_texts.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.activities.is_empty());
        // Every gallery trigger needs at least one image.
        for activity in &content.activities {
            assert!(!activity.images.is_empty(), "{}", activity.title);
        }
    }

    #[test]
    fn contact_message_formats_mailto_parts() {
        let msg = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        };
        assert_eq!(msg.subject(), "Portfolio Contact from Ada");
        let body = msg.body();
        assert!(body.contains("Name: Ada"));
        assert!(body.contains("Email: ada@example.com"));
        assert!(body.contains("Message:\nHello there"));
    }
}
