use thiserror::Error;

/// Style character used for untagged text in the FLTK style buffer.
pub const PLAIN_STYLE: char = 'A';

/// Category of a dictionary token. Decides which boundary rule the
/// highlighter applies to a literal match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Must start and end on a word boundary (`graph` must not match
    /// inside `subgraph`).
    Keyword,
    /// Contains no word characters; must be separated from its
    /// neighbours by whitespace or the text edges (`->`, `--`).
    Symbol,
}

/// One recognized token: a literal pattern plus its display style.
#[derive(Debug, Clone)]
pub struct TokenDef {
    pub pattern: String,
    pub category: TokenCategory,
    /// Style-buffer character for matches of this token.
    pub style: char,
}

impl TokenDef {
    pub fn new(pattern: &str, category: TokenCategory, style: char) -> Self {
        Self {
            pattern: pattern.to_string(),
            category,
            style,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("token pattern must not be empty")]
    EmptyPattern,

    #[error("duplicate token pattern: {0}")]
    DuplicatePattern(String),

    #[error("invalid style char {0:?}: must be ASCII and not the plain style")]
    InvalidStyle(char),
}

/// Ordered set of token definitions. Order is priority: when two
/// definitions tag overlapping spans, the later definition's style wins
/// on the overlap.
pub struct TokenDictionary {
    defs: Vec<TokenDef>,
}

impl TokenDictionary {
    /// Build a dictionary, rejecting empty patterns, duplicate patterns
    /// and bad style chars up front so scanning never has to deal with
    /// them. Style chars go into a byte-per-byte style buffer, so they
    /// must be ASCII, and `PLAIN_STYLE` is reserved for untagged text.
    pub fn new(defs: Vec<TokenDef>) -> Result<Self, DictionaryError> {
        for (i, def) in defs.iter().enumerate() {
            if def.pattern.is_empty() {
                return Err(DictionaryError::EmptyPattern);
            }
            if defs[..i].iter().any(|d| d.pattern == def.pattern) {
                return Err(DictionaryError::DuplicatePattern(def.pattern.clone()));
            }
            if !def.style.is_ascii() || def.style == PLAIN_STYLE {
                return Err(DictionaryError::InvalidStyle(def.style));
            }
        }
        Ok(Self { defs })
    }

    /// The stock DOT dictionary: structural keywords plus the two edge
    /// operators. `graph` is deliberately listed even though it is a
    /// substring of `digraph` and `subgraph`; the word-boundary rule
    /// keeps it from over-matching.
    pub fn dot() -> Self {
        let defs = vec![
            TokenDef::new("graph", TokenCategory::Keyword, KEYWORD_STYLE),
            TokenDef::new("digraph", TokenCategory::Keyword, KEYWORD_STYLE),
            TokenDef::new("strict", TokenCategory::Keyword, KEYWORD_STYLE),
            TokenDef::new("node", TokenCategory::Keyword, KEYWORD_STYLE),
            TokenDef::new("edge", TokenCategory::Keyword, KEYWORD_STYLE),
            TokenDef::new("subgraph", TokenCategory::Keyword, KEYWORD_STYLE),
            TokenDef::new("->", TokenCategory::Symbol, SYMBOL_STYLE),
            TokenDef::new("--", TokenCategory::Symbol, SYMBOL_STYLE),
        ];
        Self::new(defs).expect("stock dictionary is valid")
    }

    pub fn defs(&self) -> &[TokenDef] {
        &self.defs
    }
}

/// Style char for DOT keywords (bold dark green in the style table).
pub const KEYWORD_STYLE: char = 'B';
/// Style char for edge operators.
pub const SYMBOL_STYLE: char = 'C';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_dictionary_contents() {
        let dict = TokenDictionary::dot();
        let patterns: Vec<&str> = dict.defs().iter().map(|d| d.pattern.as_str()).collect();
        assert_eq!(
            patterns,
            vec!["graph", "digraph", "strict", "node", "edge", "subgraph", "->", "--"]
        );
    }

    #[test]
    fn test_rejects_empty_pattern() {
        let defs = vec![TokenDef::new("", TokenCategory::Keyword, 'B')];
        assert_eq!(
            TokenDictionary::new(defs).err(),
            Some(DictionaryError::EmptyPattern)
        );
    }

    #[test]
    fn test_rejects_duplicate_pattern() {
        let defs = vec![
            TokenDef::new("node", TokenCategory::Keyword, 'B'),
            TokenDef::new("node", TokenCategory::Keyword, 'C'),
        ];
        assert_eq!(
            TokenDictionary::new(defs).err(),
            Some(DictionaryError::DuplicatePattern("node".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_ascii_style() {
        let defs = vec![TokenDef::new("node", TokenCategory::Keyword, 'é')];
        assert_eq!(
            TokenDictionary::new(defs).err(),
            Some(DictionaryError::InvalidStyle('é'))
        );
    }

    #[test]
    fn test_rejects_plain_style_for_token() {
        let defs = vec![TokenDef::new("node", TokenCategory::Keyword, PLAIN_STYLE)];
        assert_eq!(
            TokenDictionary::new(defs).err(),
            Some(DictionaryError::InvalidStyle(PLAIN_STYLE))
        );
    }

    #[test]
    fn test_preserves_insertion_order() {
        let defs = vec![
            TokenDef::new("b", TokenCategory::Keyword, 'B'),
            TokenDef::new("a", TokenCategory::Keyword, 'B'),
        ];
        let dict = TokenDictionary::new(defs).unwrap();
        assert_eq!(dict.defs()[0].pattern, "b");
        assert_eq!(dict.defs()[1].pattern, "a");
    }
}
