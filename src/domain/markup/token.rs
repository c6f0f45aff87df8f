//! Token model for the markup tokenizer

/// One classified unit of parsed markup.
///
/// A token sequence is ordered left-to-right, top-to-bottom with respect to
/// the source text. Concatenating the visible content of all tokens in order
/// reproduces the source with block/inline markers stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text with no recognized markup
    Text(String),

    /// Bold run: `**content**`
    Bold(String),

    /// Italic run: `*content*`
    Italic(String),

    /// Inline code: `` `content` ``
    Code(String),

    /// Fenced code block; `lang` is the tag after the opening fence, if any
    CodeBlock {
        content: String,
        lang: Option<String>,
    },

    /// Inline link: `[text](url)`
    Link { text: String, url: String },

    /// Bullet line: `- content` or `* content`
    Bullet(String),

    /// Blockquote line: `> content`
    Blockquote(String),

    /// Hashtag; `raw` keeps the leading `#`
    Hashtag(String),

    /// Line break between two source lines
    Newline,
}

impl Token {
    /// The text a renderer would display for this token, markers stripped.
    ///
    /// For links this is the link text (the URL is presentation metadata);
    /// for newlines it is the line break itself.
    pub fn visible_content(&self) -> &str {
        match self {
            Token::Text(content)
            | Token::Bold(content)
            | Token::Italic(content)
            | Token::Code(content)
            | Token::Bullet(content)
            | Token::Blockquote(content) => content,
            Token::CodeBlock { content, .. } => content,
            Token::Link { text, .. } => text,
            Token::Hashtag(raw) => raw,
            Token::Newline => "\n",
        }
    }

    /// True for tokens produced by the block pass (Pass 1).
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Token::CodeBlock { .. } | Token::Bullet(_) | Token::Blockquote(_)
        )
    }
}
