use colored::Colorize;

use crate::page::Page;

const INDENT: &str = "    ";

/// Render a page to the fixed NAME / DESCRIPTION / EXAMPLES layout.
///
/// Section labels and the title are bold. Whether escape sequences are
/// actually emitted follows `colored`'s global override, which the CLI sets
/// from `--color`.
pub fn render(page: &Page) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{}\n", "NAME".bold()));
    out.push_str(&format!(
        "{INDENT}{} ({})\n\n",
        page.title.as_str().bold(),
        page.source
    ));

    out.push_str(&format!("{}\n", "DESCRIPTION".bold()));
    for line in &page.description {
        out.push_str(&format!("{INDENT}{line}\n"));
    }
    out.push('\n');

    out.push_str(&"EXAMPLES".bold().to_string());
    for example in &page.examples {
        out.push_str(&format!("\n{INDENT}{}\n\n", example.description));
        out.push_str(&format!("{INDENT}{INDENT}{}\n", example.command));
    }

    out
}
