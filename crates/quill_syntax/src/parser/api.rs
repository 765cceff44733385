/// Recognize a token stream.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `quill_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`SyntaxError`] if the stream is not a valid program.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<(), SyntaxError> {
    Parser::new(tokens).parse()
}
