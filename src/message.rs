//! Formatting of release data into a Slack message.
//!
//! Everything here is pure: a [`ReleaseRecord`] plus the resolved repository
//! coordinates go in, a [`ReleaseMessage`] with the pretext, the text block and
//! the changelog link comes out.

use crate::forge::types::ReleaseRecord;

/// Maximum number of characters of the release body kept in the message.
pub const BODY_CHARACTER_LIMIT: usize = 500;

/// Appended to a body that was cut at [`BODY_CHARACTER_LIMIT`].
const TRUNCATION_MARKER: &str = "...";

/// Slack renders the single horizontal ellipsis glyph incorrectly.
const HORIZONTAL_ELLIPSIS: char = '\u{2026}';

/// Formatted content of a release notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseMessage {
    pub changelog_url: String,
    pub pretext: String,
    pub text: String,
}

/// Link to the release page on github.com. The tag is used verbatim.
pub fn changelog_url(owner: &str, repo: &str, tag: &str) -> String {
    format!("https://github.com/{owner}/{repo}/releases/tag/{tag}")
}

/// Truncates `body` to `limit` characters, then replaces every horizontal
/// ellipsis with three ASCII periods. An absent body is treated as empty.
pub fn process_body(body: Option<&str>, limit: usize) -> String {
    let body = body.unwrap_or_default();

    let truncated = match body.char_indices().nth(limit) {
        Some((end, _)) => format!("{}{TRUNCATION_MARKER}", &body[..end]),
        None => body.to_string(),
    };

    truncated.replace(HORIZONTAL_ELLIPSIS, TRUNCATION_MARKER)
}

/// A line of the text block paired with the condition under which it is
/// rendered.
struct TemplateLine {
    include: fn(&LineContext) -> bool,
    render: fn(&LineContext) -> String,
}

struct LineContext<'a> {
    release: &'a ReleaseRecord,
    body: &'a str,
    changelog_url: &'a str,
}

impl LineContext<'_> {
    fn release_name(&self) -> &str {
        self.release.name.as_deref().unwrap_or_default()
    }
}

const TEXT_TEMPLATE: &[TemplateLine] = &[
    TemplateLine {
        include: |_| true,
        render: |ctx| format!("*Release name*: {}", ctx.release_name()),
    },
    TemplateLine {
        include: |_| true,
        render: |ctx| format!("*Release body*: {}", ctx.body),
    },
    TemplateLine {
        include: |_| true,
        render: |ctx| format!("*Changelog*: {}", ctx.changelog_url),
    },
    TemplateLine {
        include: |ctx| ctx.release.author_login().is_some(),
        render: |ctx| {
            format!(
                "*Release author*: {}",
                ctx.release.author_login().unwrap_or_default()
            )
        },
    },
];

fn render_text(ctx: &LineContext) -> String {
    TEXT_TEMPLATE
        .iter()
        .filter(|line| (line.include)(ctx))
        .map(|line| (line.render)(ctx))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the pretext and text block announcing `release`.
pub fn format_release(
    project_name: &str,
    owner: &str,
    repo: &str,
    release: &ReleaseRecord,
) -> ReleaseMessage {
    let changelog_url = changelog_url(owner, repo, &release.tag_name);
    let body = process_body(release.body.as_deref(), BODY_CHARACTER_LIMIT);

    let pretext = format!(
        "New version of {project_name}: *{}* has been released!",
        release.tag_name
    );

    let text = render_text(&LineContext {
        release,
        body: &body,
        changelog_url: &changelog_url,
    });

    ReleaseMessage {
        changelog_url,
        pretext,
        text,
    }
}
