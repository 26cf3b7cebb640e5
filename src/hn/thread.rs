//! Plain-text rendering of comment threads.

use crate::models::{HnComment, HnPost};

/// Render a story header followed by its comment tree.
///
/// Example output:
/// ```text
/// Show HN: A thing (example.com) 3 comments
/// ├── alice: First!
/// │   └── bob: Not quite
/// └── [deleted]
/// ```
pub fn render_post(post: &HnPost) -> String {
    let mut output = post.title.clone();
    if let Some(ref domain) = post.domain {
        output.push_str(&format!(" ({})", domain));
    }
    output.push_str(&format!(" {} comments\n", post.comments_count));
    output.push_str(&render_thread(&post.comments));
    output
}

/// Render a comment forest as an ASCII tree, one line per comment.
pub fn render_thread(comments: &[HnComment]) -> String {
    let mut output = String::new();
    for (i, comment) in comments.iter().enumerate() {
        let is_last = i == comments.len() - 1;
        render_node(&mut output, comment, "", is_last);
    }
    output
}

fn render_node(output: &mut String, comment: &HnComment, prefix: &str, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);
    output.push_str(&comment_line(comment));
    output.push('\n');

    let continuation = if is_last { "    " } else { "│   " };
    let child_prefix = format!("{}{}", prefix, continuation);

    for (i, child) in comment.comments.iter().enumerate() {
        let child_is_last = i == comment.comments.len() - 1;
        render_node(output, child, &child_prefix, child_is_last);
    }
}

fn comment_line(comment: &HnComment) -> String {
    if comment.deleted {
        return "[deleted]".to_string();
    }
    let user = comment.user.as_deref().unwrap_or("[unknown]");
    let text = first_line(&strip_tags(&comment.content));
    format!("{}: {}", user, text)
}

/// Drop HTML tags and decode entities.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    html_escape::decode_html_entities(&text).into_owned()
}

fn first_line(text: &str) -> String {
    const MAX: usize = 80;
    let collapsed: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX {
        let cut: String = collapsed.chars().take(MAX).collect();
        format!("{}…", cut)
    } else {
        collapsed
    }
}
