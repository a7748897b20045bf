//! Document exporters. Each one walks a rendered `ResumeDocument`; none of them
//! looks at the `ResumeRecord` again.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::render::document::{Block, DocumentHeader, Entry, Region, ResumeDocument, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Html,
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported export format '{0}' (expected markdown, html, text or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            "txt" | "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

/// `Ada_Lovelace_Resume.md`; `Resume.md` when there is no name.
///
/// Only alphanumerics, `-` and `.` survive from the name, so the result is
/// safe inside a quoted `Content-Disposition` filename.
pub fn export_file_name(full_name: &str, format: ExportFormat) -> String {
    let stem = full_name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '.'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        format!("Resume.{}", format.extension())
    } else {
        format!("{stem}_Resume.{}", format.extension())
    }
}

pub fn export(doc: &ResumeDocument, format: ExportFormat) -> Result<String, serde_json::Error> {
    Ok(match format {
        ExportFormat::Markdown => to_markdown(doc),
        ExportFormat::Html => to_html(doc),
        ExportFormat::Text => to_text(doc),
        ExportFormat::Json => serde_json::to_string_pretty(doc)?,
    })
}

fn contact_line(header: &DocumentHeader) -> String {
    let items: Vec<String> = header
        .contact
        .iter()
        .map(|item| match &header.contact_prefix {
            Some(prefix) => format!("{prefix} {item}"),
            None => item.clone(),
        })
        .collect();
    let separator = match &header.contact_separator {
        Some(sep) => format!(" {sep} "),
        None => " | ".to_string(),
    };
    items.join(&separator)
}

fn entry_meta(entry: &Entry) -> Vec<&str> {
    entry
        .subtitle
        .iter()
        .chain(entry.date.iter())
        .map(String::as_str)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Markdown
// ────────────────────────────────────────────────────────────────────────────

pub fn to_markdown(doc: &ResumeDocument) -> String {
    let header = &doc.header;
    let mut md = String::new();

    if !header.full_name.is_empty() {
        md.push_str(&format!("# {}\n\n", escape_markdown(&header.full_name)));
    }
    if let Some(headline) = &header.headline {
        md.push_str(&format!("**{}**\n\n", escape_markdown(headline)));
    }
    if !header.contact.is_empty() {
        md.push_str(&format!("{}\n\n", escape_markdown(&contact_line(header))));
    }
    if !header.links.is_empty() {
        let links: Vec<String> = header.links.iter().map(|l| escape_markdown(l)).collect();
        md.push_str(&format!("{}\n\n", links.join(" | ")));
    }

    for section in &doc.sections {
        if let Some(heading) = &section.heading {
            md.push_str(&format!("## {}\n\n", escape_markdown(heading)));
        }
        for block in &section.blocks {
            markdown_block(&mut md, block);
        }
    }

    md.truncate(md.trim_end().len());
    md.push('\n');
    md
}

fn markdown_block(md: &mut String, block: &Block) {
    match block {
        Block::Paragraph { text } => md.push_str(&format!("{}\n\n", escape_markdown(text))),
        Block::Lines { lines } => {
            for line in lines {
                md.push_str(&format!("{}  \n", escape_markdown(line)));
            }
            md.push('\n');
        }
        Block::SkillGroup(group) => {
            let category = escape_markdown(&group.category);
            let items: Vec<String> = group.items.iter().map(|i| escape_markdown(i)).collect();
            match &group.separator {
                Some(sep) => md.push_str(&format!("**{category}:** {}\n\n", items.join(sep))),
                None => {
                    md.push_str(&format!("**{category}**\n\n"));
                    for item in &items {
                        md.push_str(&format!("- {item}\n"));
                    }
                    md.push('\n');
                }
            }
        }
        Block::Entry(entry) => {
            md.push_str(&format!("### {}\n", escape_markdown(&entry.title)));
            let meta = entry_meta(entry);
            if !meta.is_empty() {
                md.push_str(&format!("*{}*\n", escape_markdown(&meta.join(" · "))));
            }
            md.push('\n');
            if let Some(summary) = &entry.summary {
                md.push_str(&format!("{}\n\n", escape_markdown(summary)));
            }
            for detail in &entry.details {
                md.push_str(&format!("{}  \n", escape_markdown(detail)));
            }
            if !entry.tags.is_empty() {
                let tags: Vec<String> = entry.tags.iter().map(|t| code_span(t)).collect();
                md.push_str(&format!("{}\n", tags.join(" ")));
            }
            if let Some(link) = &entry.link {
                md.push_str(&format!("<{}>\n", autolink_target(link)));
            }
            for bullet in &entry.bullets {
                md.push_str(&format!("- {}\n", escape_markdown(bullet)));
            }
            md.push('\n');
        }
    }
}

const MARKDOWN_SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '|', '~'];

/// Backslash-escapes inline markup and anything that would start a block
/// (heading, list, quote) at the beginning of a line.
fn escape_markdown(text: &str) -> String {
    text.split('\n')
        .map(escape_markdown_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_markdown_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    for (i, c) in line.chars().enumerate() {
        let starts_block = match c {
            '-' | '+' | '=' => i == 0,
            '.' | ')' => i > 0 && i == digits,
            _ => false,
        };
        if starts_block || MARKDOWN_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wraps `text` in enough backticks that none inside it closes the span.
fn code_span(text: &str) -> String {
    let longest = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    if longest == 0 {
        format!("{fence}{text}{fence}")
    } else {
        format!("{fence} {text} {fence}")
    }
}

/// Percent-encodes the characters that would end or break an `<autolink>`.
fn autolink_target(link: &str) -> String {
    link.chars()
        .map(|c| match c {
            '<' => "%3C".to_string(),
            '>' => "%3E".to_string(),
            ' ' => "%20".to_string(),
            c if c.is_control() => String::new(),
            c => c.to_string(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Plain text
// ────────────────────────────────────────────────────────────────────────────

pub fn to_text(doc: &ResumeDocument) -> String {
    let header = &doc.header;
    let mut lines: Vec<String> = vec![];

    if !header.full_name.is_empty() {
        lines.push(header.full_name.to_uppercase());
    }
    if let Some(headline) = &header.headline {
        lines.push(headline.clone());
    }
    if !header.contact.is_empty() {
        lines.push(contact_line(header));
    }
    lines.extend(header.links.iter().cloned());

    for section in &doc.sections {
        lines.push(String::new());
        if let Some(heading) = &section.heading {
            lines.push(heading.clone());
            lines.push("-".repeat(heading.chars().count()));
        }
        for block in &section.blocks {
            text_block(&mut lines, block);
        }
    }

    let mut text = lines.join("\n");
    text.truncate(text.trim_end().len());
    text.push('\n');
    text
}

fn text_block(lines: &mut Vec<String>, block: &Block) {
    match block {
        Block::Paragraph { text } => lines.push(text.clone()),
        Block::Lines { lines: items } => lines.extend(items.iter().cloned()),
        Block::SkillGroup(group) => match &group.separator {
            Some(sep) => lines.push(format!("{}: {}", group.category, group.items.join(sep))),
            None => {
                lines.push(group.category.clone());
                lines.extend(group.items.iter().map(|item| format!("  {item}")));
            }
        },
        Block::Entry(entry) => {
            lines.push(entry.title.clone());
            let meta = entry_meta(entry);
            if !meta.is_empty() {
                lines.push(meta.join(" | "));
            }
            lines.extend(entry.summary.iter().cloned());
            lines.extend(entry.details.iter().cloned());
            if !entry.tags.is_empty() {
                lines.push(entry.tags.join(", "));
            }
            lines.extend(entry.link.iter().cloned());
            let marker = entry.bullet_marker.as_deref().unwrap_or("");
            for bullet in &entry.bullets {
                if marker.is_empty() {
                    lines.push(format!("  {bullet}"));
                } else {
                    lines.push(format!("  {marker} {bullet}"));
                }
            }
            lines.push(String::new());
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTML
// ────────────────────────────────────────────────────────────────────────────

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_html(doc: &ResumeDocument) -> String {
    let header = &doc.header;
    let mut html = String::new();
    let title = if header.full_name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{} - Resume", escape_html(&header.full_name))
    };

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<article class=\"resume {}\">\n",
        doc.template.as_str()
    );

    html.push_str("<header>\n");
    if !header.full_name.is_empty() {
        let _ = writeln!(html, "<h1>{}</h1>", escape_html(&header.full_name));
    }
    if let Some(headline) = &header.headline {
        let _ = writeln!(html, "<p class=\"headline\">{}</p>", escape_html(headline));
    }
    if !header.contact.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"contact\">{}</p>",
            escape_html(&contact_line(header))
        );
    }
    for link in &header.links {
        let link = escape_html(link);
        let _ = writeln!(html, "<p class=\"link\"><a href=\"{link}\">{link}</a></p>");
    }
    html.push_str("</header>\n");

    let main: Vec<&Section> = doc.sections_in(Region::Main).collect();
    let sidebar: Vec<&Section> = doc.sections_in(Region::Sidebar).collect();
    if !sidebar.is_empty() {
        html.push_str("<aside>\n");
        sidebar.iter().for_each(|s| html_section(&mut html, s));
        html.push_str("</aside>\n");
    }
    html.push_str("<main>\n");
    main.iter().for_each(|s| html_section(&mut html, s));
    html.push_str("</main>\n</article>\n</body>\n</html>\n");
    html
}

fn html_section(html: &mut String, section: &Section) {
    let _ = writeln!(html, "<section class=\"{}\">", section.kind.as_str());
    if let Some(heading) = &section.heading {
        let _ = writeln!(html, "<h2>{}</h2>", escape_html(heading));
    }
    for block in &section.blocks {
        html_block(html, block);
    }
    html.push_str("</section>\n");
}

fn html_block(html: &mut String, block: &Block) {
    match block {
        Block::Paragraph { text } => {
            let _ = writeln!(html, "<p>{}</p>", escape_html(text));
        }
        Block::Lines { lines } => {
            for line in lines {
                let _ = writeln!(html, "<p>{}</p>", escape_html(line));
            }
        }
        Block::SkillGroup(group) => match &group.separator {
            Some(sep) => {
                let _ = writeln!(
                    html,
                    "<p><strong>{}:</strong> {}</p>",
                    escape_html(&group.category),
                    escape_html(&group.items.join(sep))
                );
            }
            None => {
                let _ = writeln!(html, "<h3>{}</h3>\n<ul>", escape_html(&group.category));
                for item in &group.items {
                    let _ = writeln!(html, "<li>{}</li>", escape_html(item));
                }
                html.push_str("</ul>\n");
            }
        },
        Block::Entry(entry) => {
            html.push_str("<div class=\"entry\">\n");
            let _ = writeln!(html, "<h3>{}</h3>", escape_html(&entry.title));
            if let Some(subtitle) = &entry.subtitle {
                let _ = writeln!(html, "<p class=\"subtitle\">{}</p>", escape_html(subtitle));
            }
            if let Some(date) = &entry.date {
                let _ = writeln!(html, "<p class=\"date\">{}</p>", escape_html(date));
            }
            if let Some(summary) = &entry.summary {
                let _ = writeln!(html, "<p>{}</p>", escape_html(summary));
            }
            for detail in &entry.details {
                let _ = writeln!(html, "<p class=\"detail\">{}</p>", escape_html(detail));
            }
            if !entry.tags.is_empty() {
                html.push_str("<p class=\"tags\">");
                for tag in &entry.tags {
                    let _ = write!(html, "<span class=\"tag\">{}</span>", escape_html(tag));
                }
                html.push_str("</p>\n");
            }
            if let Some(link) = &entry.link {
                let link = escape_html(link);
                let _ = writeln!(html, "<p class=\"link\"><a href=\"{link}\">{link}</a></p>");
            }
            if !entry.bullets.is_empty() {
                match &entry.bullet_marker {
                    Some(marker) => {
                        let _ = writeln!(html, "<ul data-marker=\"{}\">", escape_html(marker));
                    }
                    None => html.push_str("<ul>\n"),
                }
                for bullet in &entry.bullets {
                    let _ = writeln!(html, "<li>{}</li>", escape_html(bullet));
                }
                html.push_str("</ul>\n");
            }
            html.push_str("</div>\n");
        }
    }
}
