//! Webview markup for a parsed message.

use base64::{Engine as _, engine::general_purpose};

use super::{RenderOptions, inline, syntax};
use crate::core::content::Segment;

/// Render segments as HTML. A message that is only code gets no wrapper element.
pub fn render_html(segments: &[Segment], opts: &RenderOptions) -> String {
    if let [Segment::Code { language, code }] = segments {
        return code_block(0, language, code, &opts.theme);
    }

    let mut html = String::from("<div class=\"message-content\">");
    let mut code_index = 0;
    for segment in segments {
        match segment {
            Segment::Text { content } => html.push_str(&inline::to_html(content)),
            Segment::Code { language, code } => {
                html.push_str(&code_block(code_index, language, code, &opts.theme));
                code_index += 1;
            }
        }
    }
    html.push_str("</div>");
    html
}

/// One code block: header naming the language with copy/open buttons, highlighted body
/// (escaped `<pre>` fallback). `data-code` carries the raw code, base64-encoded UTF-8,
/// for the webview's button handlers.
fn code_block(index: usize, language: &str, code: &str, theme: &str) -> String {
    let body = syntax::highlight_html(language, code, theme).unwrap_or_else(|| {
        format!(
            "<pre><code>{}</code></pre>",
            html_escape::encode_text(code)
        )
    });
    format!(
        "<div class=\"code-block\" data-id=\"code-{index}\" data-lang=\"{lang_attr}\" data-code=\"{encoded}\">\
         <div class=\"code-header\"><span class=\"code-lang\">{lang_text}</span>\
         <div class=\"code-actions\">\
         <button class=\"code-action-btn code-copy-btn\" title=\"Copy code\">Copy</button>\
         <button class=\"code-action-btn code-open-btn\" title=\"Open in editor\">Open</button>\
         </div></div>\
         <div class=\"code-content\">{body}</div>\
         </div>",
        lang_attr = html_escape::encode_double_quoted_attribute(language),
        encoded = general_purpose::STANDARD.encode(code),
        lang_text = html_escape::encode_text(language),
    )
}
