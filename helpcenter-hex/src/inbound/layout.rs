//! Page shell for the help center.
//!
//! Wraps already-rendered markup in a styled container. The children are
//! emitted byte-for-byte: nothing is escaped, re-wrapped or dropped.

/// Presentation attributes of the shell container: light/dark color
/// variants, a smooth color transition, and a full-height vertical flex column.
pub const SHELL_CLASSES: &str = "bg-white text-gray-900 dark:bg-gray-900 dark:text-gray-100 \
transition-colors duration-300 flex flex-col min-h-screen";

/// Stateless layout wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageShell;

impl PageShell {
    /// Renders `children` unchanged inside the shell container.
    pub fn render(&self, children: &str) -> String {
        let mut out = String::with_capacity(children.len() + SHELL_CLASSES.len() + 32);
        out.push_str("<div class=\"");
        out.push_str(SHELL_CLASSES);
        out.push_str("\">");
        out.push_str(children);
        out.push_str("</div>");
        out
    }

    /// Renders the shell as the body of a complete HTML document.
    pub fn render_document(&self, title: &str, children: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape_text(title),
            self.render(children)
        )
    }
}

// Only the title is ours to escape; children are trusted markup.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
