//! Header comment stamped at the top of generated files.

use chrono::{Datelike, NaiveDate};

use crate::artifact::{ArtifactKind, CommentStyle};
use crate::metadata::ProjectMetadata;
use crate::paths::new_file_name;

/// Renders the header comment block for `kind`.
///
/// Code files get a C block comment, scripts and build files a line comment.
/// Kinds without a comment syntax get an empty string.
pub fn stamp_header(kind: ArtifactKind, metadata: &ProjectMetadata, date: NaiveDate) -> String {
    let lines = header_lines(kind, metadata, date);
    match kind.comment_style() {
        CommentStyle::Block => {
            let mut out = String::from("/**\n");
            for line in lines {
                push_prefixed(&mut out, " *", &line);
            }
            out.push_str(" */\n");
            out
        }
        CommentStyle::Line(prefix) => {
            let mut out = String::new();
            push_prefixed(&mut out, prefix, "");
            for line in lines {
                push_prefixed(&mut out, prefix, &line);
            }
            push_prefixed(&mut out, prefix, "");
            out
        }
        CommentStyle::None => String::new(),
    }
}

fn header_lines(kind: ArtifactKind, metadata: &ProjectMetadata, date: NaiveDate) -> Vec<String> {
    let license = if metadata.license.trim().is_empty() {
        // Keep the section even without a license so the block stays aligned.
        String::new()
    } else {
        metadata.license.clone()
    };
    let fields = [
        new_file_name(kind, &metadata.project_name),
        String::new(),
        format!("Written by {} <{}>", metadata.developer_name, metadata.developer_email),
        String::new(),
        format!("Description: {}", metadata.description),
        String::new(),
        format!("Copyright (C) {} {}", date.year(), metadata.developer_name),
        license,
        String::new(),
        format!("Date: {}", date.format("%d/%m/%Y")),
    ];

    // Every physical line gets its own prefix, whatever a field embeds.
    let mut lines = Vec::new();
    for field in fields {
        if field.is_empty() {
            lines.push(field);
        } else {
            lines.extend(field.lines().map(|line| line.trim_end_matches('\r').to_string()));
        }
    }
    lines
}

fn push_prefixed(out: &mut String, prefix: &str, line: &str) {
    out.push_str(prefix);
    if !line.is_empty() {
        out.push(' ');
        out.push_str(line);
    }
    out.push('\n');
}

/// Places the header in front of the template body.
///
/// The template's own leading comment header, if any, is dropped so the
/// stamp replaces it. A shebang line stays first.
pub fn apply_header(kind: ArtifactKind, header: &str, template: &str) -> String {
    if header.is_empty() {
        return template.to_string();
    }

    let (shebang, body) = match template.strip_prefix("#!") {
        Some(_) => match template.split_once('\n') {
            Some((first, rest)) => (Some(first), rest),
            None => (Some(template), ""),
        },
        None => (None, template),
    };
    let body = skip_template_header(kind.comment_style(), body);

    let mut out = String::with_capacity(header.len() + template.len() + 1);
    if let Some(line) = shebang {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(header);
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
    }
    out
}

/// Returns `body` without the leading comment block written in `style`.
pub fn skip_template_header(style: CommentStyle, body: &str) -> &str {
    match style {
        CommentStyle::Block => {
            let trimmed = body.trim_start();
            if !trimmed.starts_with("/*") {
                return body;
            }
            match trimmed.find("*/") {
                Some(end) => trimmed[end + 2..]
                    .trim_start_matches([' ', '\t'])
                    .trim_start_matches(['\r', '\n']),
                None => body,
            }
        }
        CommentStyle::Line(prefix) => {
            let mut rest = body.trim_start_matches(['\r', '\n']);
            if !rest.starts_with(prefix) {
                return body;
            }
            while rest.starts_with(prefix) {
                rest = match rest.split_once('\n') {
                    Some((_, tail)) => tail,
                    None => "",
                };
            }
            rest.trim_start_matches(['\r', '\n'])
        }
        CommentStyle::None => body,
    }
}
