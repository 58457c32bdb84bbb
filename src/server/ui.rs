//! UI module - generates the Swagger UI page for the served document.
//!
//! The page loads the `swagger-ui-dist` bundle from a CDN. Deployments that
//! need to work offline can serve a local bundle instead (see
//! [`RouterConfig::with_ui_dir`](super::routes::RouterConfig::with_ui_dir)).

/// Version of the `swagger-ui-dist` bundle referenced by the page.
pub const SWAGGER_UI_VERSION: &str = "5";

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Encode a string as a JavaScript string literal that is safe inside `<script>`.
fn js_string(s: &str) -> String {
    serde_json::Value::from(s)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

/// Generate the Swagger UI page.
///
/// # Arguments
///
/// * `document_url` - URL (usually root-relative) of the OpenAPI document
/// * `title` - Page title
pub fn generate_ui_html(document_url: &str, title: &str) -> String {
    let escaped_title = html_escape(title);
    let document_url = js_string(document_url);
    let cdn = format!(
        "https://cdn.jsdelivr.net/npm/swagger-ui-dist@{}",
        SWAGGER_UI_VERSION
    );

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{escaped_title}</title>
    <link rel="stylesheet" href="{cdn}/swagger-ui.css">
    <style>
        html {{
            box-sizing: border-box;
            overflow-y: scroll;
        }}
        *, *:before, *:after {{
            box-sizing: inherit;
        }}
        body {{
            margin: 0;
            background: #fafafa;
        }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="{cdn}/swagger-ui-bundle.js" charset="UTF-8"></script>
    <script src="{cdn}/swagger-ui-standalone-preset.js" charset="UTF-8"></script>
    <script>
        window.onload = function () {{
            window.ui = SwaggerUIBundle({{
                url: {document_url},
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                plugins: [
                    SwaggerUIBundle.plugins.DownloadUrl
                ],
                layout: "StandaloneLayout"
            }});
        }};
    </script>
</body>
</html>
"##
    )
}
