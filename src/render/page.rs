//! # Index Page
//!
//! The single input page and its three result states: echoed message,
//! retrieved secret, or error banner.

use std::fmt::Write as _;

/// State of the index page
///
/// `success` and `is_secret` select the result panel; `error` renders a banner
/// above the form and suppresses the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexView<'a> {
    pub success: bool,
    pub is_secret: bool,
    pub message: Option<&'a str>,
    pub secret_name: Option<&'a str>,
    pub secret_value: Option<&'a str>,
    pub error: Option<String>,
    pub max_length: usize,
}

impl<'a> IndexView<'a> {
    /// Empty form
    pub fn new(max_length: usize) -> Self {
        Self {
            success: false,
            is_secret: false,
            message: None,
            secret_name: None,
            secret_value: None,
            error: None,
            max_length,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn with_echo(mut self, message: &'a str) -> Self {
        self.success = true;
        self.is_secret = false;
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn with_secret(mut self, secret_name: &'a str, secret_value: &'a str) -> Self {
        self.success = true;
        self.is_secret = true;
        self.secret_name = Some(secret_name);
        self.secret_value = Some(secret_value);
        self
    }

    /// Render the full HTML document
    pub fn render(&self) -> String {
        let mut body = String::new();

        if let Some(error) = &self.error {
            let _ = write!(
                body,
                r#"<div class="alert alert-error" role="alert">{}</div>"#,
                escape_html(error)
            );
        }

        let _ = write!(
            body,
            r#"<form method="post" action="/Home/GetSecret">
  <label for="secretName">Message</label>
  <textarea id="secretName" name="secretName" rows="4" maxlength="{max}" placeholder="Type a message, or &quot;secret&quot; to read the vault"></textarea>
  <button type="submit">Send</button>
</form>"#,
            max = self.max_length
        );

        if self.success && self.error.is_none() {
            if self.is_secret {
                let _ = write!(
                    body,
                    r#"<div class="result result-secret"><h2>Secret retrieved</h2><p>Secret name: <code>{}</code></p><pre>{}</pre></div>"#,
                    escape_html(self.secret_name.unwrap_or_default()),
                    escape_html(self.secret_value.unwrap_or_default())
                );
            } else {
                let _ = write!(
                    body,
                    r#"<div class="result result-message"><h2>Your message</h2><pre>{}</pre></div>"#,
                    escape_html(self.message.unwrap_or_default())
                );
            }
        }

        layout("Key Vault Secret", &body)
    }
}

/// Generic error page, shown without any request-specific details
pub fn render_error_page(request_id: Option<&str>) -> String {
    let mut body = String::from(
        r#"<h2 class="text-danger">Error.</h2><p>An error occurred while processing your request.</p>"#,
    );
    if let Some(id) = request_id {
        let _ = write!(
            body,
            "<p><strong>Request ID:</strong> <code>{}</code></p>",
            escape_html(id)
        );
    }
    layout("Error", &body)
}

/// Escape text for inclusion in HTML element content or quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }}
textarea {{ width: 100%; }}
.alert-error {{ background: #fde8e8; border: 1px solid #f5a3a3; padding: .75rem; margin-bottom: 1rem; }}
.result {{ margin-top: 1.5rem; }}
pre {{ white-space: pre-wrap; word-break: break-all; background: #f4f4f4; padding: .75rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}
