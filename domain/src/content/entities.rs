//! Content records shown on the portfolio page.
//!
//! Every record is plain read-only data: loaded once at startup and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// An outbound link. A link without a URL is rendered as a plain label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.url.is_some()
    }
}

/// Eyebrow label, title and optional intro line above a section body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeading {
    #[serde(default)]
    pub eyebrow: String,
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
}

/// Owner of the portfolio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: String,
    /// Call-to-action shown in the navigation bar
    #[serde(default)]
    pub cta: Option<Link>,
    /// Path of the profile photograph, relative to the working directory
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
}

impl Testimonial {
    /// Attribution line, e.g. `Mary Hunt, Project Director`
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.name, self.title)
    }
}

/// A delivered project in the "Selected Work" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub number: String,
    pub category: String,
    pub title: String,
    pub summary: String,
    pub executive: String,
    pub technical: String,
    /// Strategic decision behind the project
    pub rationale: String,
    #[serde(default)]
    pub impact: Vec<String>,
    #[serde(default)]
    pub link: Option<Link>,
}

/// A titled paragraph used for "also built" entries and the speaking bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSection {
    pub heading: SectionHeading,
    #[serde(default)]
    pub items: Vec<WorkItem>,
    #[serde(default)]
    pub also_built: Vec<Highlight>,
}

/// One stage of the delivery framework in the "Approach" section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachModule {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub executive: String,
    pub technical: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproachSection {
    pub heading: SectionHeading,
    #[serde(default)]
    pub modules: Vec<ApproachModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhilosophySection {
    pub heading: SectionHeading,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub heading: SectionHeading,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// Emphasised closing line
    #[serde(default)]
    pub closing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Publication status, e.g. "Read on Medium" or "Coming Soon"
    pub status: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.link.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingSection {
    pub heading: SectionHeading,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    pub heading: SectionHeading,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}
