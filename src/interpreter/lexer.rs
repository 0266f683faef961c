use logos::Logos;

/// Represents a lexical token in one line of input.
///
/// Only two shapes exist: a word (any run of non-whitespace characters) and
/// the whitespace between words, which is skipped. Deciding whether a word is
/// a number or an operator is left to the parser so that it can report which
/// position was wrong.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    /// A whitespace-delimited word, such as `3.5`, `+` or `abc`.
    #[regex(r"[^\s]+", |lex| lex.slice())]
    Word(&'a str),
    /// Spaces, tabs and other whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Splits a line into its whitespace-delimited words.
///
/// Leading and trailing whitespace produce no tokens, and runs of whitespace
/// collapse into a single separator. The returned slices borrow from `line`.
///
/// # Parameters
/// - `line`: The text to split.
///
/// # Returns
/// The words of `line`, in order. An empty or all-whitespace line yields an
/// empty vector.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::tokenize;
///
/// assert_eq!(tokenize("  5   +\t3  "), vec!["5", "+", "3"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut lexer = Token::lexer(line);
    let mut words = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Word(word)) => words.push(word),
            Ok(Token::Ignored) => {},
            // Every character matches one of the two patterns, but an
            // unmatched slice is still a word to the parser.
            Err(()) => words.push(lexer.slice()),
        }
    }

    words
}
