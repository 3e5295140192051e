use super::theme::{journal_skin, palette};
use super::markup::markup_to_markdown;
use orgjournal_core::{Diagnostic, JournalEntry};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: "%a, %d %b %Y".to_string(),
            use_color: true,
            short_mode: false,
        }
    }
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: journal_skin(),
            opts: config.unwrap_or_default(),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        }
    }

    pub fn print_entry_line(&self, entry: &JournalEntry) {
        println!("{}", self.entry_line(entry));
    }

    pub fn print_entries(&self, entries: &[JournalEntry]) {
        for (i, entry) in entries.iter().enumerate() {
            if self.opts.short_mode {
                self.print_entry_line(entry);
                continue;
            }
            self.print_md(&self.entry_markdown(entry));
            if i + 1 < entries.len() {
                println!();
            }
            self.print_md("---\n");
        }
    }

    /// Lists file-level problems. Months without a file are expected and not shown.
    pub fn print_diagnostics(&self, diagnostics: &[Diagnostic]) {
        let shown: Vec<String> = diagnostics
            .iter()
            .filter(|d| !matches!(d, Diagnostic::MissingFile { .. }))
            .map(|d| format!("* {d}"))
            .collect();
        if shown.is_empty() {
            return;
        }
        self.print_md(&format!("\n# Skipped:\n{}\n", shown.join("\n")));
    }

    fn entry_line(&self, entry: &JournalEntry) -> String {
        let mut date = entry.timestamp.format("%Y-%m-%d").to_string();
        let mut time = entry.timestamp.format("%H:%M").to_string();
        let mut title = entry.title.clone();
        let mut tags = String::new();
        if !entry.tags.is_empty() {
            tags = format!("[{}]", entry.tags.join(", "));
        }
        if self.opts.use_color {
            date = date.with(palette::CYAN).to_string();
            time = time.with(palette::BLUE).to_string();
            title = title.with(palette::YELLOW).to_string();
            tags = tags.with(palette::GREEN).to_string();
        }
        format!("{date} {time} - {title} {tags}").trim_end().to_string()
    }

    fn entry_markdown(&self, entry: &JournalEntry) -> String {
        let date = entry.timestamp.format(&self.opts.date_format).to_string();
        let time = entry.timestamp.format("%H:%M").to_string();
        let mut heading = format!("## {date} {time}: {}", entry.title);
        if !entry.tags.is_empty() {
            let tags: Vec<String> = entry.tags.iter().map(|t| format!("`{t}`")).collect();
            heading.push(' ');
            heading.push_str(&tags.join(" "));
        }

        if entry.body.is_empty() {
            format!("{heading}\n")
        } else {
            format!("{heading}\n{}\n", markup_to_markdown(&entry.body))
        }
    }
}
