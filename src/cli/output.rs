//! Output formatting utilities

use crate::domain::markup::Token;
use crate::domain::tags::TagEntry;

/// Format a token stream for display, one token per line
pub fn format_token_stream(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "No tokens".to_string();
    }

    let lines: Vec<String> = tokens.iter().map(format_token).collect();
    lines.join("\n")
}

fn format_token(token: &Token) -> String {
    match token {
        Token::Text(content) => format!("text        {:?}", content),
        Token::Bold(content) => format!("bold        {:?}", content),
        Token::Italic(content) => format!("italic      {:?}", content),
        Token::Code(content) => format!("code        {:?}", content),
        Token::CodeBlock { content, lang } => match lang {
            Some(lang) => format!("codeblock   [{}] {:?}", lang, content),
            None => format!("codeblock   {:?}", content),
        },
        Token::Link { text, url } => format!("link        {:?} -> {}", text, url),
        Token::Bullet(content) => format!("bullet      {:?}", content),
        Token::Blockquote(content) => format!("blockquote  {:?}", content),
        Token::Hashtag(raw) => format!("hashtag     {}", raw),
        Token::Newline => "newline".to_string(),
    }
}

/// Format a ranked tag listing for display.
pub fn format_tag_table(tags: &[TagEntry]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let width = tags
        .iter()
        .map(|tag| tag.display_name().len())
        .max()
        .unwrap_or(0);

    let lines: Vec<String> = tags
        .iter()
        .map(|tag| {
            format!(
                "#{:<width$}  {:>5}  {}",
                tag.display_name(),
                tag.count,
                tag.last_used.format("%d-%m-%Y"),
                width = width
            )
        })
        .collect();
    lines.join("\n")
}

/// Format autocomplete suggestions; with zero matches for a non-empty term,
/// offer the create-new-tag affordance.
pub fn format_suggestions(term: &str, suggestions: &[TagEntry]) -> String {
    if suggestions.is_empty() {
        let term = term.strip_prefix('#').unwrap_or(term).to_lowercase();
        if term.is_empty() {
            return "No tags found".to_string();
        }
        return format!("No matching tags\nCreate new tag: #{}", term);
    }

    let lines: Vec<String> = suggestions
        .iter()
        .map(|tag| format!("#{} ({})", tag.display_name(), tag.count))
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, namespace: &str, value: &str, count: u64) -> TagEntry {
        TagEntry {
            id: id.to_string(),
            namespace: namespace.to_string(),
            value: value.to_string(),
            count,
            last_used: Utc.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_empty_token_stream() {
        assert_eq!(format_token_stream(&[]), "No tokens");
    }

    #[test]
    fn test_format_token_stream_lines() {
        let tokens = vec![
            Token::Text("say ".to_string()),
            Token::Bold("hi".to_string()),
            Token::Newline,
            Token::Hashtag("#work".to_string()),
        ];
        let output = format_token_stream(&tokens);
        assert!(output.contains("text        \"say \""));
        assert!(output.contains("bold        \"hi\""));
        assert!(output.contains("newline"));
        assert!(output.contains("hashtag     #work"));
    }

    #[test]
    fn test_format_codeblock_with_language() {
        let token = Token::CodeBlock {
            content: "fn main() {}".to_string(),
            lang: Some("rust".to_string()),
        };
        let output = format_token_stream(&[token]);
        assert!(output.contains("codeblock   [rust]"));
    }

    #[test]
    fn test_format_empty_tag_table() {
        assert_eq!(format_tag_table(&[]), "No tags found");
    }

    #[test]
    fn test_format_tag_table_shows_count_and_date() {
        let tags = vec![
            entry("priority/high", "priority", "high", 5),
            entry("work", "default", "work", 2),
        ];
        let output = format_tag_table(&tags);
        assert!(output.contains("#priority/high"));
        assert!(output.contains("5"));
        assert!(output.contains("17-01-2025"));
        // Default-namespace tags display bare
        assert!(output.contains("#work"));
        assert!(!output.contains("#default/work"));
    }

    #[test]
    fn test_format_suggestions_lists_matches() {
        let tags = vec![entry("work", "default", "work", 3)];
        assert_eq!(format_suggestions("wor", &tags), "#work (3)");
    }

    #[test]
    fn test_format_suggestions_create_affordance() {
        let output = format_suggestions("#NewIdea", &[]);
        assert_eq!(output, "No matching tags\nCreate new tag: #newidea");
    }

    #[test]
    fn test_format_suggestions_empty_term_no_affordance() {
        assert_eq!(format_suggestions("", &[]), "No tags found");
    }
}
