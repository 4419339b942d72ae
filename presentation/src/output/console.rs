//! Console output formatter for the portfolio page

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use folio_application::LoadedPage;
use folio_domain::{Link, Portrait, SectionHeading};
use serde_json::json;

/// Formats the page for console display, every card collapsed
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the whole page in page order
    pub fn format(page: &LoadedPage) -> String {
        let content = &page.content;
        let mut output = String::new();

        // Header
        output.push_str(&Self::header(&content.profile.name));
        output.push('\n');
        if !content.profile.role.is_empty() {
            output.push_str(&format!("{}\n", content.profile.role.dimmed()));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Photo:".cyan().bold(),
            Self::portrait(&page.portrait)
        ));

        // Hero
        output.push_str(&format!("\n{}\n", content.hero.headline.bold()));
        for paragraph in &content.hero.paragraphs {
            output.push_str(&format!("\n{}\n", paragraph));
        }
        if !content.hero.actions.is_empty() {
            let actions: Vec<String> = content.hero.actions.iter().map(Self::link).collect();
            output.push_str(&format!("\n{}\n", actions.join("  ")));
        }

        // Stats
        if !content.stats.is_empty() {
            output.push('\n');
            for stat in &content.stats {
                output.push_str(&format!("  {} {}\n", stat.value.bold(), stat.label.dimmed()));
            }
        }

        // Testimonials
        if !content.testimonials.is_empty() {
            output.push_str(&Self::section_header("Testimonials"));
            for testimonial in &content.testimonials {
                output.push_str(&format!(
                    "\n  \"{}\"\n  {} {}\n",
                    testimonial.quote,
                    "—".dimmed(),
                    testimonial.attribution().dimmed()
                ));
            }
        }

        // Work
        output.push_str(&Self::heading(&content.work.heading));
        for item in &content.work.items {
            output.push_str(&format!(
                "\n{} {} {}\n  {}\n",
                item.number.dimmed(),
                item.title.yellow().bold(),
                format!("[{}]", item.category).dimmed(),
                item.summary
            ));
            if let Some(link) = &item.link {
                output.push_str(&format!("  {}\n", Self::link(link)));
            }
        }
        if !content.work.also_built.is_empty() {
            output.push_str(&format!("\n{}\n", "Also built".cyan().bold()));
            for highlight in &content.work.also_built {
                output.push_str(&format!(
                    "  * {}: {}\n",
                    highlight.title.bold(),
                    highlight.description
                ));
            }
        }

        // Highlights
        if !content.highlights.is_empty() {
            output.push('\n');
            for highlight in &content.highlights {
                output.push_str(&format!(
                    "  * {}: {}\n",
                    highlight.title.bold(),
                    highlight.description
                ));
            }
        }

        // Approach
        output.push_str(&Self::heading(&content.approach.heading));
        for (i, module) in content.approach.modules.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n  {}\n  {}\n",
                format!("{:02}", i + 1).dimmed(),
                module.title.yellow().bold(),
                module.subtitle.italic(),
                module.description
            ));
        }

        // Philosophy
        output.push_str(&Self::heading(&content.philosophy.heading));
        for statement in &content.philosophy.statements {
            output.push_str(&format!("\n{}\n  {}\n", statement.title.bold(), statement.body));
        }

        // About
        output.push_str(&Self::heading(&content.about.heading));
        for paragraph in &content.about.paragraphs {
            output.push_str(&format!("\n{}\n", paragraph));
        }
        if let Some(closing) = &content.about.closing {
            output.push_str(&format!("\n{}\n", closing.italic()));
        }

        // Writing
        output.push_str(&Self::heading(&content.writing.heading));
        for post in &content.writing.posts {
            output.push_str(&format!(
                "\n{} {}\n  {}\n",
                post.title.bold(),
                format!("[{} · {}]", post.category, post.status).dimmed(),
                post.description
            ));
            if let Some(url) = &post.link {
                output.push_str(&format!("  {}\n", url.underline()));
            }
        }

        // Contact
        output.push_str(&Self::heading(&content.contact.heading));
        for paragraph in &content.contact.paragraphs {
            output.push_str(&format!("\n{}\n", paragraph));
        }
        if !content.contact.links.is_empty() {
            output.push('\n');
            for link in &content.contact.links {
                output.push_str(&format!("  {}\n", Self::link(link)));
            }
        }

        output.push_str(&Self::footer(&content.profile.copyright));

        output
    }

    /// Format as JSON: the content plus a summary of the photo region
    pub fn format_json(page: &LoadedPage) -> String {
        let portrait = match &page.portrait {
            Portrait::Image(photo) => json!({
                "kind": "image",
                "source": photo.source,
                "format": photo.format,
                "dimensions": photo.dimensions,
                "bytes": photo.byte_len,
            }),
            Portrait::Placeholder { text } => json!({
                "kind": "placeholder",
                "text": text,
            }),
        };
        let value = json!({
            "content": page.content,
            "portrait": portrait,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn portrait(portrait: &Portrait) -> String {
        match portrait {
            Portrait::Image(photo) => match photo.dimensions {
                Some((w, h)) => format!("{} ({} {}×{})", photo.source, photo.format, w, h),
                None => format!("{} ({})", photo.source, photo.format),
            },
            Portrait::Placeholder { text } => format!("[{}]", text),
        }
    }

    fn link(link: &Link) -> String {
        match &link.url {
            Some(url) => format!("{} <{}>", link.label.bold(), url.underline()),
            None => link.label.dimmed().to_string(),
        }
    }

    fn heading(heading: &SectionHeading) -> String {
        if heading.title.is_empty() {
            return String::new();
        }
        let mut output = String::from("\n");
        if !heading.eyebrow.is_empty() {
            output.push_str(&format!("{}\n", heading.eyebrow.to_uppercase().dimmed()));
        }
        output.push_str(&format!("{}\n{}\n", heading.title.cyan().bold(), "-".repeat(40)));
        if let Some(intro) = &heading.intro {
            output.push_str(&format!("{}\n", intro));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer(copyright: &str) -> String {
        format!("\n{}\n{}\n", "=".repeat(60).cyan(), copyright.dimmed())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, page: &LoadedPage) -> String {
        Self::format(page)
    }

    fn format_json(&self, page: &LoadedPage) -> String {
        Self::format_json(page)
    }
}
