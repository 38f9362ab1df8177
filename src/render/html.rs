//! Standalone HTML page rendering.
//!
//! Produces a complete document with inline styles. All feed strings are
//! escaped. Summaries go into `<pre>` with `white-space: pre-wrap` so their
//! line breaks survive. Article links open in a new browsing context with
//! `rel="noopener noreferrer"`, so the opened page gets no handle back to
//! this one.

use super::{LINK_TEXT, LOADING_MESSAGE, Presentation};
use crate::models::Article;
use crate::utils::{escape_html, outbound_link, slugify_title};
use crate::view::ViewState;
use tracing::warn;

mod styles {
    pub const CONTAINER: &str =
        "max-width: 800px; margin: 40px auto; font-family: Arial, sans-serif; padding: 0 16px;";
    pub const TITLE: &str = "text-align: center;";
    pub const SUBTEXT: &str = "text-align: center; color: #666;";
    pub const CARD: &str =
        "border: 1px solid #ddd; border-radius: 6px; padding: 16px; margin-bottom: 20px;";
    pub const CARD_TITLE: &str = "margin-bottom: 10px;";
    pub const SUMMARY: &str = "white-space: pre-wrap; font-size: 14px; margin-bottom: 10px;";
    pub const LINK: &str = "text-decoration: none; color: #0070f3;";
    pub const ERROR: &str = "color: red; text-align: center;";
}

/// Render a full HTML document for `state`.
pub fn render_page(state: &ViewState, presentation: &Presentation) -> String {
    let title = escape_html(&presentation.title);
    let mut html = String::new();

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!(
        "<div class=\"container\" style=\"{}\">\n",
        styles::CONTAINER
    ));
    html.push_str(&format!(
        "<h1 class=\"title\" style=\"{}\">{title}</h1>\n",
        styles::TITLE
    ));

    match state {
        ViewState::Loading => {
            html.push_str(&format!("<p class=\"loading\">{LOADING_MESSAGE}</p>\n"));
        }
        ViewState::Error { message } => {
            html.push_str(&format!(
                "<p class=\"error\" style=\"{}\">{}</p>\n",
                styles::ERROR,
                escape_html(message)
            ));
        }
        ViewState::Ready(feed) => {
            html.push_str(&format!(
                "<p class=\"subtext\" style=\"{}\">{}</p>\n",
                styles::SUBTEXT,
                escape_html(&presentation.attribution(feed))
            ));
            for (idx, article) in feed.articles.iter().enumerate() {
                html.push_str(&render_card(idx, article));
            }
        }
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_card(idx: usize, article: &Article) -> String {
    let slug = slugify_title(&article.title);
    let id = if slug.is_empty() {
        format!("article-{}", idx + 1)
    } else {
        format!("article-{}-{}", idx + 1, slug)
    };

    let link = match outbound_link(&article.url) {
        Some(_) => format!(
            "<a class=\"link\" href=\"{}\" target=\"_blank\" \
             rel=\"noopener noreferrer\" style=\"{}\">{LINK_TEXT}</a>",
            escape_html(&article.url),
            styles::LINK
        ),
        None => {
            warn!(
                url = %article.url,
                title = %article.title,
                "Article link is not http(s); rendering it inert"
            );
            format!(
                "<span class=\"link\" style=\"{}\">{LINK_TEXT}</span>",
                styles::LINK
            )
        }
    };

    // Parsers drop one newline directly after <pre>; emit it so a summary's
    // own leading newline is kept.
    format!(
        "<div class=\"card\" id=\"{}\" style=\"{}\">\n\
         <h2 class=\"card-title\" style=\"{}\">{}</h2>\n\
         <pre class=\"summary\" style=\"{}\">\n{}</pre>\n\
         {link}\n\
         </div>\n",
        escape_html(&id),
        styles::CARD,
        styles::CARD_TITLE,
        escape_html(&article.title),
        styles::SUMMARY,
        escape_html(&article.summary),
    )
}
