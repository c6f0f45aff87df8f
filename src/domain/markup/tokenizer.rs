//! Markup tokenization
//!
//! Converts free-form portal text (posts, replies, notes) into an ordered
//! token stream. Two passes: a line-oriented block pass (code fences,
//! bullets, blockquotes) and an inline pass (bold, italic, inline code,
//! links, hashtags) with explicit overlap resolution.
//!
//! Tokenization never fails: malformed markup degrades to plain `Text`
//! tokens and the same input always yields the same token sequence.

use super::token::Token;
use regex::Regex;
use std::sync::OnceLock;

/// Inputs longer than this are not scanned past the ceiling; the remainder
/// comes back as one literal `Text` token.
pub const MAX_SOURCE_LEN: usize = 1 << 20;

fn bold_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

fn italic_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\*([^*]+)\*").unwrap())
}

fn code_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"`([^`]+)`").unwrap())
}

fn link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap())
}

/// Hashtags: #word, #word-with-dashes, #namespace/value
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#[A-Za-z0-9_/-]+").unwrap())
}

/// Tokenize source text into a renderable token stream.
///
/// A `Newline` token is emitted after every consumed line (or multi-line
/// block) except the last line of the input, so the renderer can restore
/// line-break positions.
pub fn tokenize(source: &str) -> Vec<Token> {
    let (source, overflow) = split_at_ceiling(source);
    let lines: Vec<&str> = source.split('\n').collect();
    let last = lines.len() - 1;

    let mut tokens = Vec::new();
    let mut i = 0;
    while i <= last {
        let line = lines[i];
        let trimmed = line.trim_start();

        if let Some(fence_rest) = trimmed.strip_prefix("```") {
            // Code fence: accumulate verbatim until a closing fence or end
            // of input. No inline parsing inside.
            let lang = fence_rest.trim();
            let lang = (!lang.is_empty()).then(|| lang.to_string());

            let mut j = i + 1;
            let mut body: Vec<&str> = Vec::new();
            while j <= last && !lines[j].trim_start().starts_with("```") {
                body.push(lines[j]);
                j += 1;
            }
            tokens.push(Token::CodeBlock {
                content: body.join("\n"),
                lang,
            });

            let consumed_through = j.min(last);
            if consumed_through < last {
                tokens.push(Token::Newline);
            }
            i = j + 1;
            continue;
        }

        if let Some(item) = bullet_content(trimmed) {
            // Bullet content stays raw: no nested inline parsing.
            tokens.push(Token::Bullet(item.to_string()));
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            tokens.push(Token::Blockquote(rest.trim_start().to_string()));
        } else {
            tokenize_inline(line, &mut tokens);
        }

        if i < last {
            tokens.push(Token::Newline);
        }
        i += 1;
    }

    if let Some(rest) = overflow {
        tokens.push(Token::Text(rest.to_string()));
    }

    tokens
}

/// Cut the source at the scan ceiling, backing up to a char boundary.
fn split_at_ceiling(source: &str) -> (&str, Option<&str>) {
    if source.len() <= MAX_SOURCE_LEN {
        return (source, None);
    }
    let mut cut = MAX_SOURCE_LEN;
    while !source.is_char_boundary(cut) {
        cut -= 1;
    }
    (&source[..cut], Some(&source[cut..]))
}

/// Bullet marker: `-` or `*` followed by at least one whitespace character.
fn bullet_content(trimmed: &str) -> Option<&str> {
    let rest = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// A candidate inline match before overlap resolution.
///
/// Priority ranks the pattern types for overlap resolution:
/// code > link > bold > italic > hashtag.
struct Candidate {
    start: usize,
    end: usize,
    priority: u8,
    token: Token,
}

const PRIORITY_CODE: u8 = 0;
const PRIORITY_LINK: u8 = 1;
const PRIORITY_BOLD: u8 = 2;
const PRIORITY_ITALIC: u8 = 3;
const PRIORITY_HASHTAG: u8 = 4;

/// Inline pass over one line: collect candidates for all five patterns,
/// resolve overlaps, and emit tokens with `Text` fillers for the gaps.
fn tokenize_inline(line: &str, tokens: &mut Vec<Token>) {
    if line.is_empty() {
        return;
    }

    let matches = resolve_overlaps(collect_candidates(line));

    let mut cursor = 0;
    for candidate in matches {
        if candidate.start > cursor {
            tokens.push(Token::Text(line[cursor..candidate.start].to_string()));
        }
        tokens.push(candidate.token);
        cursor = candidate.end;
    }
    if cursor < line.len() {
        tokens.push(Token::Text(line[cursor..].to_string()));
    }
}

fn collect_candidates(line: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for caps in code_regex().captures_iter(line) {
        let m = caps.get(0).unwrap();
        found.push(Candidate {
            start: m.start(),
            end: m.end(),
            priority: PRIORITY_CODE,
            token: Token::Code(caps[1].to_string()),
        });
    }

    for caps in link_regex().captures_iter(line) {
        let m = caps.get(0).unwrap();
        found.push(Candidate {
            start: m.start(),
            end: m.end(),
            priority: PRIORITY_LINK,
            token: Token::Link {
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            },
        });
    }

    for caps in bold_regex().captures_iter(line) {
        let m = caps.get(0).unwrap();
        found.push(Candidate {
            start: m.start(),
            end: m.end(),
            priority: PRIORITY_BOLD,
            token: Token::Bold(caps[1].to_string()),
        });
    }

    // Italic must not touch another asterisk on either side (that would be
    // the inside of a bold run). A rejected candidate resumes one past its
    // start so later asterisks are still considered.
    let mut pos = 0;
    while let Some(caps) = italic_regex().captures_at(line, pos) {
        let m = caps.get(0).unwrap();
        if asterisk_adjacent(line, m.start(), m.end()) {
            pos = m.start() + 1;
            continue;
        }
        found.push(Candidate {
            start: m.start(),
            end: m.end(),
            priority: PRIORITY_ITALIC,
            token: Token::Italic(caps[1].to_string()),
        });
        pos = m.end();
    }

    // Hashtags require a non-word character (or line start) before the `#`,
    // so `email#1` is not a tag.
    let mut pos = 0;
    while let Some(m) = hashtag_regex().find_at(line, pos) {
        if preceded_by_word_char(line, m.start()) {
            pos = m.start() + 1;
            continue;
        }
        found.push(Candidate {
            start: m.start(),
            end: m.end(),
            priority: PRIORITY_HASHTAG,
            token: Token::Hashtag(m.as_str().to_string()),
        });
        pos = m.end();
    }

    found
}

fn asterisk_adjacent(line: &str, start: usize, end: usize) -> bool {
    line[..start].ends_with('*') || line[end..].starts_with('*')
}

fn preceded_by_word_char(line: &str, start: usize) -> bool {
    line[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Interval scheduling over the candidate spans: sort by (start, priority)
/// and greedily accept spans that do not overlap an already-accepted span.
/// The result stays sorted by start.
fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| (c.start, c.priority));

    let mut accepted: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        let overlaps = accepted
            .iter()
            .any(|a| candidate.start < a.end && a.start < candidate.end);
        if !overlaps {
            accepted.push(candidate);
        }
    }
    accepted
}
