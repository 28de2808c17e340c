use pulldown_cmark::{Options, Parser, html};

use crate::app::domain::{AppState, PreviewMode};

/// Markdown-to-HTML conversion used for the rendered tab.
pub type MarkdownFn = Box<dyn Fn(&str) -> String>;

/// Turns the current document into the HTML shown in the preview pane.
/// Reads state, never writes it.
pub struct PreviewRenderer {
    markdown: MarkdownFn,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new(render_markdown)
    }
}

impl PreviewRenderer {
    pub fn new(markdown: impl Fn(&str) -> String + 'static) -> Self {
        Self {
            markdown: Box::new(markdown),
        }
    }

    /// HTML for the active mode, or None while there is no document yet
    /// (the pane keeps whatever it showed before).
    pub fn render(&self, state: &AppState) -> Option<String> {
        if !state.has_document() {
            return None;
        }
        let doc = state.current_document();
        let html = match state.preview_mode {
            PreviewMode::Rendered => {
                format!("<div class=\"markdown-preview\">\n{}</div>", (self.markdown)(doc))
            }
            PreviewMode::Raw => format!("<pre><code>{}</code></pre>", escape_html(doc)),
        };
        Some(html)
    }
}

/// Render markdown text to HTML.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Neutralize HTML-special characters so markup shows verbatim.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Wrap HTML in HelpView-compatible font tags.
pub fn wrap_html_for_helpview(html: &str) -> String {
    format!("<font face=\"Helvetica\" size=\"4\">{}</font>", html)
}
