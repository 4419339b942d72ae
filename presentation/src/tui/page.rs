//! Page layout: the portfolio as a vertical stack of revealable blocks
//!
//! The layout is rebuilt whenever anything that changes block heights
//! changes (width, expanded cards, active testimonial, focus). Block ids are
//! assigned per section in render order, so a rebuild yields the same ids
//! for the same content and the reveal latches survive it.
//!
//! ```text
//! row 0   ┌ Hero#0  portrait ───────┐
//!         │ Hero#1  role            │
//!         │ Hero#2  headline   +100 │   stagger delay per block
//!         ...
//! row N   └ Footer#0 (not animated) ┘
//! ```

use crate::tui::theme;
use crate::tui::widgets::portrait::PORTRAIT_HEIGHT;
use folio_application::LoadedPage;
use folio_domain::{
    BlockId, ExpandableList, Link, PortfolioContent, SectionHeading, SectionId, ViewState,
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};
use std::time::Duration;

/// Widest the content column gets, padding included
pub const MAX_COLUMN_WIDTH: u16 = 96;
/// Horizontal padding on each side of the content column
pub const COLUMN_PADDING: u16 = 2;

/// Rows between blocks of one section
const BLOCK_GAP: usize = 1;
/// Rows between sections
const SECTION_GAP: usize = 3;

/// A selectable card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub list: ExpandableList,
    pub index: usize,
}

impl Focus {
    pub fn new(list: ExpandableList, index: usize) -> Self {
        Self { list, index }
    }
}

/// What a block draws
#[derive(Debug, Clone)]
pub enum BlockBody {
    Text(Text<'static>),
    Portrait,
}

/// Interaction target under a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTarget {
    /// Expandable card; a click toggles it
    Card(Focus),
    /// Testimonial with selector dots on its last rows, `per_row` to a row
    Testimonials { count: usize, per_row: usize },
}

/// One positioned block
#[derive(Debug, Clone)]
pub struct PageBlock {
    pub id: BlockId,
    /// Stagger before the reveal transition starts
    pub delay: Duration,
    /// Non-animated blocks are always drawn revealed
    pub animated: bool,
    pub body: BlockBody,
    pub target: Option<BlockTarget>,
    /// First page row
    pub top: usize,
    pub height: usize,
}

impl PageBlock {
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// Positioned blocks for one content width
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    blocks: Vec<PageBlock>,
    height: usize,
    width: u16,
}

impl PageLayout {
    /// Lay the page out for a content column `width` cells wide
    pub fn build(page: &LoadedPage, view: &ViewState, focus: Option<Focus>, width: u16) -> Self {
        let mut builder = PageBuilder::new(width.max(1));
        builder.hero(&page.content);
        builder.stats(&page.content);
        builder.testimonials(&page.content, view);
        builder.work(&page.content, view, focus);
        builder.highlights(&page.content);
        builder.approach(&page.content, view, focus);
        builder.philosophy(&page.content);
        builder.about(&page.content);
        builder.writing(&page.content);
        builder.contact(&page.content);
        builder.footer(&page.content);
        builder.finish()
    }

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    pub fn get(&self, id: BlockId) -> Option<&PageBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Total page height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// First row of a section, if it has any blocks
    pub fn section_top(&self, section: SectionId) -> Option<usize> {
        self.blocks
            .iter()
            .find(|block| block.id.section == section)
            .map(|block| block.top)
    }

    /// Section at the top edge of a viewport scrolled to `scroll`
    pub fn section_at(&self, scroll: usize) -> Option<SectionId> {
        self.blocks
            .iter()
            .take_while(|block| block.top <= scroll)
            .last()
            .or_else(|| self.blocks.first())
            .map(|block| block.id.section)
    }

    /// Block covering a page row
    pub fn block_at(&self, row: usize) -> Option<&PageBlock> {
        self.blocks.iter().find(|block| block.contains_row(row))
    }

    /// Block of a card
    pub fn card(&self, focus: Focus) -> Option<&PageBlock> {
        self.blocks
            .iter()
            .find(|block| block.target == Some(BlockTarget::Card(focus)))
    }

    pub fn max_scroll(&self, view_height: usize) -> usize {
        self.height.saturating_sub(view_height)
    }
}

/// Content column inside a page area: centred, capped, padded
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_COLUMN_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let padding = COLUMN_PADDING.min(width / 4);
    Rect::new(
        x + padding,
        area.y,
        width.saturating_sub(padding * 2),
        area.height,
    )
}

/// Delay of the `n`th step of a 100 ms stagger
fn stagger(n: usize) -> Duration {
    Duration::from_millis(100 * n as u64)
}

struct PageBuilder {
    width: u16,
    blocks: Vec<PageBlock>,
    row: usize,
    section: Option<SectionId>,
    slot: u16,
}

impl PageBuilder {
    fn new(width: u16) -> Self {
        Self {
            width,
            blocks: Vec::new(),
            row: 0,
            section: None,
            slot: 0,
        }
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            height: self.row,
            blocks: self.blocks,
            width: self.width,
        }
    }

    fn begin(&mut self, section: SectionId) {
        if self.section.is_some() {
            self.row += SECTION_GAP - BLOCK_GAP;
        }
        self.section = Some(section);
        self.slot = 0;
    }

    fn push(
        &mut self,
        body: BlockBody,
        delay: Duration,
        target: Option<BlockTarget>,
        animated: bool,
    ) {
        let Some(section) = self.section else {
            return;
        };
        let height = match &body {
            BlockBody::Portrait => PORTRAIT_HEIGHT as usize,
            BlockBody::Text(text) => Paragraph::new(text.clone())
                .wrap(Wrap { trim: false })
                .line_count(self.width),
        };

        self.blocks.push(PageBlock {
            id: BlockId::new(section, self.slot),
            delay,
            animated,
            body,
            target,
            top: self.row,
            height,
        });
        self.slot += 1;
        self.row += height + BLOCK_GAP;
    }

    fn text(&mut self, lines: Vec<Line<'static>>, delay: Duration) {
        self.push(BlockBody::Text(Text::from(lines)), delay, None, true);
    }

    fn heading(&mut self, heading: &SectionHeading) {
        let mut lines = Vec::new();
        if !heading.eyebrow.is_empty() {
            lines.push(eyebrow(&heading.eyebrow));
        }
        lines.push(Line::from(Span::styled(
            heading.title.clone(),
            theme::title(),
        )));
        if let Some(intro) = &heading.intro {
            lines.push(Line::from(Span::styled(intro.clone(), theme::muted())));
        }
        self.text(lines, Duration::ZERO);
    }

    // ==================== Sections ====================

    fn hero(&mut self, content: &PortfolioContent) {
        self.begin(SectionId::Hero);
        self.push(BlockBody::Portrait, Duration::ZERO, None, true);

        if !content.profile.role.is_empty() {
            self.text(vec![eyebrow(&content.profile.role)], Duration::ZERO);
        }
        let headline = Line::from(Span::styled(
            content.hero.headline.clone(),
            theme::title(),
        ));
        self.text(vec![headline], stagger(1));

        for (i, paragraph) in content.hero.paragraphs.iter().enumerate() {
            self.text(vec![body(paragraph)], stagger(i + 2));
        }
        if !content.hero.actions.is_empty() {
            let step = content.hero.paragraphs.len() + 2;
            self.text(vec![links(&content.hero.actions)], stagger(step));
        }
    }

    fn stats(&mut self, content: &PortfolioContent) {
        if content.stats.is_empty() {
            return;
        }
        self.begin(SectionId::Stats);
        let mut spans = Vec::new();
        for (i, stat) in content.stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("   ·   ", theme::muted()));
            }
            spans.push(Span::styled(
                stat.value.clone(),
                Style::default().fg(theme::TEAL).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(stat.label.clone(), theme::muted()));
        }
        self.text(vec![Line::from(spans)], Duration::ZERO);
    }

    fn testimonials(&mut self, content: &PortfolioContent, view: &ViewState) {
        let Some(active) = content.testimonials.get(view.active_testimonial()) else {
            return;
        };
        self.begin(SectionId::Testimonials);

        let count = content.testimonials.len();
        // Dots sit two cells apart and are packed into rows so none wrap
        let per_row = (self.width as usize).div_ceil(2).max(1);
        let dots = (0..count).map(|i| {
            if i == view.active_testimonial() {
                Span::styled("●", theme::accent())
            } else {
                Span::styled("○", Style::default().fg(theme::BORDER))
            }
        });
        let mut dot_lines: Vec<Line<'static>> = Vec::new();
        for (i, dot) in dots.enumerate() {
            if i % per_row == 0 {
                dot_lines.push(Line::default());
            }
            if let Some(line) = dot_lines.last_mut() {
                if i % per_row != 0 {
                    line.push_span(Span::raw(" "));
                }
                line.push_span(dot);
            }
        }

        let mut lines = vec![
            Line::from(Span::styled(
                format!("\u{201C}{}\u{201D}", active.quote),
                Style::default()
                    .fg(theme::CHARCOAL)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("— {}", active.attribution()),
                theme::muted(),
            )),
        ];
        lines.extend(dot_lines);
        self.push(
            BlockBody::Text(Text::from(lines)),
            Duration::ZERO,
            Some(BlockTarget::Testimonials { count, per_row }),
            true,
        );
    }

    fn work(&mut self, content: &PortfolioContent, view: &ViewState, focus: Option<Focus>) {
        self.begin(SectionId::Work);
        self.heading(&content.work.heading);

        for (index, item) in content.work.items.iter().enumerate() {
            let card = Focus::new(ExpandableList::Work, index);
            let expanded = view.expansion(ExpandableList::Work).is_expanded(index);

            let mut lines = vec![
                rule(self.width),
                Line::from(vec![
                    Span::styled(
                        item.number.clone(),
                        Style::default().fg(theme::TEAL).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(item.category.to_uppercase(), theme::muted()),
                ]),
                card_title(&item.title, expanded, focus == Some(card)),
            ];
            if !item.impact.is_empty() {
                let tags = item
                    .impact
                    .iter()
                    .flat_map(|tag| {
                        [
                            Span::styled(format!("[{}]", tag), theme::accent()),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>();
                lines.push(Line::from(tags));
            }
            lines.push(body(&item.summary));
            if let Some(link) = &item.link {
                lines.push(link_line(link));
            }
            if expanded {
                lines.push(Line::default());
                detail(&mut lines, "Executive Impact", &item.executive);
                detail(&mut lines, "Technical Approach", &item.technical);
                detail(&mut lines, "Strategic Decision", &item.rationale);
            }

            self.push(
                BlockBody::Text(Text::from(lines)),
                stagger(index),
                Some(BlockTarget::Card(card)),
                true,
            );
        }

        if !content.work.also_built.is_empty() {
            let mut lines = vec![eyebrow("Also Built")];
            for highlight in &content.work.also_built {
                lines.push(Line::from(Span::styled(
                    highlight.title.clone(),
                    theme::title(),
                )));
                lines.push(body(&highlight.description));
            }
            self.text(lines, stagger(4));
        }
    }

    fn highlights(&mut self, content: &PortfolioContent) {
        if content.highlights.is_empty() {
            return;
        }
        self.begin(SectionId::Highlights);
        let mut lines = Vec::new();
        for (i, highlight) in content.highlights.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                highlight.title.clone(),
                theme::title(),
            )));
            lines.push(Line::from(Span::styled(
                highlight.description.clone(),
                theme::muted(),
            )));
            if !highlight.links.is_empty() {
                lines.push(links(&highlight.links));
            }
        }
        self.text(lines, Duration::ZERO);
    }

    fn approach(&mut self, content: &PortfolioContent, view: &ViewState, focus: Option<Focus>) {
        self.begin(SectionId::Approach);
        self.heading(&content.approach.heading);

        for (index, module) in content.approach.modules.iter().enumerate() {
            let card = Focus::new(ExpandableList::Modules, index);
            let expanded = view.expansion(ExpandableList::Modules).is_expanded(index);

            let mut lines = vec![
                rule(self.width),
                card_title(&module.title, expanded, focus == Some(card)),
                body(&module.description),
                Line::from(Span::styled(module.subtitle.clone(), theme::accent())),
            ];
            if expanded {
                lines.push(Line::default());
                detail(&mut lines, "Executive", &module.executive);
                detail(&mut lines, "Technical", &module.technical);
                detail(&mut lines, "Why", &module.rationale);
            }

            self.push(
                BlockBody::Text(Text::from(lines)),
                Duration::from_millis(50 * index as u64),
                Some(BlockTarget::Card(card)),
                true,
            );
        }
    }

    fn philosophy(&mut self, content: &PortfolioContent) {
        self.begin(SectionId::Philosophy);
        self.heading(&content.philosophy.heading);
        for (i, statement) in content.philosophy.statements.iter().enumerate() {
            let lines = vec![
                Line::from(Span::styled(statement.title.clone(), theme::title())),
                body(&statement.body),
            ];
            self.text(lines, stagger(i + 1));
        }
    }

    fn about(&mut self, content: &PortfolioContent) {
        self.begin(SectionId::About);
        self.heading(&content.about.heading);

        let mut lines = Vec::new();
        for paragraph in &content.about.paragraphs {
            lines.push(body(paragraph));
            lines.push(Line::default());
        }
        if let Some(closing) = &content.about.closing {
            lines.push(Line::from(Span::styled(
                closing.clone(),
                Style::default().fg(theme::TEAL).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.pop();
        }
        if !lines.is_empty() {
            self.text(lines, stagger(1));
        }
    }

    fn writing(&mut self, content: &PortfolioContent) {
        self.begin(SectionId::Writing);
        self.heading(&content.writing.heading);

        for (i, post) in content.writing.posts.iter().enumerate() {
            let mut title = vec![Span::styled(post.title.clone(), theme::title())];
            if post.is_published() {
                title.push(Span::styled(" ↗", theme::accent()));
            }
            let mut lines = vec![
                eyebrow(&format!("{} · {}", post.category, post.status)),
                Line::from(title),
                body(&post.description),
            ];
            if let Some(url) = &post.link {
                lines.push(Line::from(Span::styled(url.clone(), theme::link())));
            }
            self.text(lines, stagger(i));
        }
    }

    fn contact(&mut self, content: &PortfolioContent) {
        self.begin(SectionId::Contact);
        self.heading(&content.contact.heading);

        let mut step = 1;
        for paragraph in &content.contact.paragraphs {
            self.text(vec![body(paragraph)], stagger(step));
            step += 1;
        }
        if !content.contact.links.is_empty() {
            self.text(vec![links(&content.contact.links)], stagger(step));
            step += 1;
        }
        if !content.profile.location.is_empty() {
            let location = Line::from(Span::styled(
                content.profile.location.clone(),
                theme::muted(),
            ));
            self.text(vec![location], stagger(step));
        }
    }

    fn footer(&mut self, content: &PortfolioContent) {
        if content.profile.copyright.is_empty() {
            return;
        }
        self.begin(SectionId::Footer);
        let line = Line::from(Span::styled(
            content.profile.copyright.clone(),
            theme::muted(),
        ));
        self.push(
            BlockBody::Text(Text::from(vec![line])),
            Duration::ZERO,
            None,
            false,
        );
    }
}

// ==================== Line helpers ====================

fn eyebrow(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_uppercase(), theme::eyebrow()))
}

fn body(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), theme::body()))
}

fn rule(width: u16) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width as usize),
        Style::default().fg(theme::BORDER),
    ))
}

fn card_title(title: &str, expanded: bool, focused: bool) -> Line<'static> {
    let chevron = if expanded { " ▴" } else { " ▾" };
    let (marker, style) = if focused {
        ("▸ ", theme::title().fg(theme::TEAL))
    } else {
        ("", theme::title())
    };
    Line::from(vec![
        Span::styled(marker, theme::accent()),
        Span::styled(title.to_string(), style),
        Span::styled(chevron, theme::muted()),
    ])
}

fn detail(lines: &mut Vec<Line<'static>>, label: &str, text: &str) {
    lines.push(eyebrow(label));
    lines.push(body(text));
}

fn link_line(link: &Link) -> Line<'static> {
    if link.is_navigable() {
        Line::from(vec![
            Span::styled("↗ ", theme::accent()),
            Span::styled(link.label.clone(), theme::link()),
        ])
    } else {
        Line::from(Span::styled(link.label.clone(), theme::muted()))
    }
}

fn links(links: &[Link]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if i == 0 {
            theme::link().add_modifier(Modifier::BOLD)
        } else {
            theme::link()
        };
        spans.push(Span::styled(link.label.clone(), style));
    }
    Line::from(spans)
}
