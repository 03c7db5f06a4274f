//! Output formatting: table, JSON, YAML, plain.
//!
//! Table output is built from the same column accessor table the viewer
//! renders, followed by a `Page X of Y` footer. Structured formats serialize
//! the whole page; plain emits one user id per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use roster_core::{COLUMNS, Page, PageInfo, columns};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Render one result page in the chosen format.
pub fn render_page(
    format: OutputFormat,
    page: &Page,
    info: &PageInfo,
    color: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(page, info, color)),
        OutputFormat::Json => render_json(page, false),
        OutputFormat::JsonCompact => render_json(page, true),
        OutputFormat::Yaml => render_yaml(page),
        OutputFormat::Plain => Ok(page
            .users
            .iter()
            .map(|u| u.id.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table(page: &Page, info: &PageInfo, color: bool) -> String {
    let footer = format!("{}  ({} users)", info.label(), info.total);
    let footer = if color {
        footer.dimmed().to_string()
    } else {
        footer
    };

    if page.is_empty() {
        return format!("No users found.\n{footer}");
    }

    let mut builder = Builder::default();
    builder.push_record(std::iter::once("ID").chain(COLUMNS.iter().map(|c| c.label)));
    for user in &page.users {
        builder.push_record(std::iter::once(user.id.to_string()).chain(columns::row(user)));
    }

    let table = builder.build().with(Style::rounded()).to_string();
    format!("{table}\n{footer}")
}

pub(crate) fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Output(e.to_string()))
}

pub(crate) fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Output(e.to_string()))
}

#[cfg(test)]
mod tests {
    use roster_core::User;

    use super::*;

    fn page() -> Page {
        Page {
            users: vec![
                User {
                    first_name: Some("Emily".into()),
                    last_name: Some("Johnson".into()),
                    ..User::with_id(1)
                },
                User::with_id(2),
            ],
            total: 57,
            skip: 0,
            limit: 10,
        }
    }

    #[test]
    fn table_has_headers_rows_and_footer() {
        let info = PageInfo::new(0, 10, 57);
        let out = render_page(OutputFormat::Table, &page(), &info, false).expect("render");
        assert!(out.contains("First Name"));
        assert!(out.contains("Emily"));
        assert!(out.contains("Johnson"));
        assert!(out.ends_with("Page 1 of 6  (57 users)"), "{out}");
    }

    #[test]
    fn empty_page_still_reports_position() {
        let info = PageInfo::new(0, 10, 0);
        let empty = Page::default();
        let out = render_page(OutputFormat::Table, &empty, &info, false).expect("render");
        assert_eq!(out, "No users found.\nPage 1 of 1  (0 users)");
    }

    #[test]
    fn plain_prints_ids() {
        let info = PageInfo::new(0, 10, 57);
        let out = render_page(OutputFormat::Plain, &page(), &info, false).expect("render");
        assert_eq!(out, "1\n2");
    }

    #[test]
    fn json_serializes_whole_page() {
        let info = PageInfo::new(0, 10, 57);
        let out = render_page(OutputFormat::JsonCompact, &page(), &info, false).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(value["total"], 57);
        assert_eq!(value["users"][0]["id"], 1);
    }
}
