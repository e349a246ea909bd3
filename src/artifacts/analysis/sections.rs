use crate::artifacts::analysis::{
    BOLD_HEADING_REGEX, HEADING_REGEX, LEADING_SECTION_TITLE, NUMBERED_HEADING_REGEX,
};
use anyhow::Context;
use derive_new::new;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Section {
    title: String,
    content: String,
}

impl Section {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Splits free-form analysis text into titled sections.
///
/// A section starts at a markdown heading (`## Impact`), a line that is only a
/// bold phrase (`**Impact**` or `**Impact:**`), or a numbered item led by a
/// bold phrase (`2. **Impact**: widens the rule`). The rest of a numbered line
/// opens the section's content. Text before the first heading becomes a
/// section titled `Summary`. Sections whose title and content are both blank
/// are dropped.
pub fn segment_sections(text: &str) -> anyhow::Result<Vec<Section>> {
    let heading = Regex::new(HEADING_REGEX)
        .with_context(|| format!("invalid heading regex: {HEADING_REGEX}"))?;
    let bold_heading = Regex::new(BOLD_HEADING_REGEX)
        .with_context(|| format!("invalid bold heading regex: {BOLD_HEADING_REGEX}"))?;
    let numbered_heading = Regex::new(NUMBERED_HEADING_REGEX)
        .with_context(|| format!("invalid numbered heading regex: {NUMBERED_HEADING_REGEX}"))?;

    let mut sections = Vec::new();
    let mut title = LEADING_SECTION_TITLE.to_string();
    let mut content = Vec::<&str>::new();

    for line in text.lines() {
        let opened = if let Some(caps) = heading.captures(line) {
            Some((caps[1].to_string(), None))
        } else if let Some(caps) = bold_heading.captures(line) {
            Some((caps[1].to_string(), None))
        } else {
            numbered_heading.captures(line).map(|caps| {
                let rest = caps.get(2).map(|m| m.as_str()).filter(|s| !s.is_empty());
                (caps[1].to_string(), rest)
            })
        };

        match opened {
            Some((next_title, rest)) => {
                push_section(&mut sections, &title, &content);
                title = next_title.trim().trim_end_matches(':').trim().to_string();
                content.clear();
                content.extend(rest);
            }
            None => content.push(line),
        }
    }
    push_section(&mut sections, &title, &content);

    Ok(sections)
}

fn push_section(sections: &mut Vec<Section>, title: &str, content: &[&str]) {
    let content = content.join("\n").trim().to_string();
    let is_leading = sections.is_empty() && title == LEADING_SECTION_TITLE;

    if content.is_empty() && (is_leading || title.is_empty()) {
        return;
    }

    sections.push(Section::new(title.to_string(), content));
}
