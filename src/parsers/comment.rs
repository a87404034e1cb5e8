use regex::Regex;
use std::sync::LazyLock;

/// One structured documentation block parsed from a `/** */` comment span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// Free text before the first tag line.
    pub description: String,
    /// Tags in source order.
    pub tags: Vec<Tag>,
}

/// A single `@tag` entry inside a documentation block.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// Tag identifier without the leading `@`.
    pub tag: String,
    /// First token after the tag, if any (`@lsComponent Button` -> `Button`).
    pub name: Option<String>,
    /// Remaining free text, including continuation lines.
    pub description: Option<String>,
}

// Matches a tag line after marker stripping:
//   @lsComponent
//   @lsComponent Button
//   @lsComponent Button The best button
static TAG_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@([^\s@]+)(?:[ \t]+(\S+))?(?:[ \t]+(.*))?$").unwrap()
});

/// Parse the body of a block comment into structured documentation blocks.
///
/// `text` is the comment content between `/*` and `*/`, as swc reports it.
/// Only documentation comments (`/** */`, body starting with `*`) produce a
/// block; any other input yields an empty vector. This function never fails:
/// malformed comments are expected input, not an error.
///
/// Spacing after the `* ` line marker is preserved, so multi-line tag
/// descriptions keep their original formatting.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let Some(body) = text.strip_prefix('*') else {
        return Vec::new();
    };

    let mut description_lines: Vec<String> = Vec::new();
    let mut tags: Vec<Tag> = Vec::new();
    // (tag, name, description lines) of the tag currently being assembled
    let mut current: Option<(String, Option<String>, Vec<String>)> = None;

    for (index, raw) in body.lines().enumerate() {
        let line = if index == 0 {
            // Content following `/**` on the opening line has no `*` marker.
            raw.strip_prefix(' ').unwrap_or(raw)
        } else {
            strip_marker(raw)
        };

        if let Some(captures) = TAG_LINE_REGEX.captures(line.trim_start()) {
            if let Some(tag) = current.take() {
                tags.push(finish_tag(tag));
            }
            current = Some((
                captures[1].to_string(),
                captures.get(2).map(|m| m.as_str().to_string()),
                captures
                    .get(3)
                    .map(|m| vec![m.as_str().to_string()])
                    .unwrap_or_default(),
            ));
        } else if let Some((_, _, lines)) = current.as_mut() {
            lines.push(line.to_string());
        } else {
            description_lines.push(line.to_string());
        }
    }

    if let Some(tag) = current.take() {
        tags.push(finish_tag(tag));
    }

    vec![Block {
        description: description_lines.join("\n").trim().to_string(),
        tags,
    }]
}

/// Strip the leading `* ` marker from a comment line, keeping everything
/// after it verbatim.
fn strip_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

fn finish_tag((tag, name, lines): (String, Option<String>, Vec<String>)) -> Tag {
    let description = lines.join("\n").trim().to_string();
    Tag {
        tag,
        name,
        description: (!description.is_empty()).then_some(description),
    }
}
