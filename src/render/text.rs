//! Plain-text rendering for the terminal.

use super::{LINK_TEXT, LOADING_MESSAGE, Presentation};
use crate::loader::FeedLoader;
use crate::utils::strip_control;
use crate::view::{FeedView, ViewState};
use std::io::{self, Write};
use std::sync::Arc;

/// Render `state` as terminal text.
///
/// Summaries keep their line breaks. Control characters other than `\n` and
/// `\t` are removed from every feed string.
pub fn render(state: &ViewState, presentation: &Presentation) -> String {
    let mut out = format!("{}\n\n", strip_control(&presentation.title));

    match state {
        ViewState::Loading => {
            out.push_str(LOADING_MESSAGE);
            out.push('\n');
        }
        ViewState::Error { message } => {
            out.push_str(&strip_control(message));
            out.push('\n');
        }
        ViewState::Ready(feed) => {
            out.push_str(&strip_control(&presentation.attribution(feed)));
            out.push('\n');
            for article in &feed.articles {
                let title = strip_control(&article.title);
                let summary = strip_control(&article.summary);

                out.push('\n');
                out.push_str(&title);
                out.push('\n');
                out.push_str(&"-".repeat(title.chars().count()));
                out.push('\n');
                out.push_str(&summary);
                if !summary.ends_with('\n') {
                    out.push('\n');
                }
                let url = strip_control(&article.url);
                out.push_str(&format!("{LINK_TEXT} {url}\n"));
            }
        }
    }

    out
}

/// Activate `view` with `loader` and write each state it passes through to `out`.
///
/// The Loading frame is always written first, followed by a blank line and
/// the terminal state.
///
/// # Returns
///
/// The state the view settled in, or `Loading` if it was stopped early.
pub async fn present_feed<L, W>(
    view: &mut FeedView,
    loader: Arc<L>,
    presentation: &Presentation,
    out: &mut W,
) -> io::Result<ViewState>
where
    L: FeedLoader + 'static,
    W: Write,
{
    view.activate(loader);
    // activate() leaves the view in Loading. Render that frame directly: the
    // load task may already have published its result to the channel.
    write!(out, "{}", render(&ViewState::Loading, presentation))?;
    out.flush()?;

    let state = view.settled().await.unwrap_or_default();
    if !state.is_loading() {
        writeln!(out)?;
        write!(out, "{}", render(&state, presentation))?;
        out.flush()?;
    }
    Ok(state)
}
