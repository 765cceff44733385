#![no_main]

use libfuzzer_sys::fuzz_target;
use quill::lexer::{self, Category};
use quill::parser;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let lines = source.matches('\n').count() as u32 + 1;

    match lexer::lex(source) {
        Ok(tokens) => {
            assert_eq!(tokens.last().map(|t| t.category()), Some(Category::Finish));
            if let Err(err) = parser::parse(&tokens) {
                assert!(err.line >= 1 && err.line <= lines);
            }
        }
        Err(err) => assert!(err.line >= 1 && err.line <= lines),
    }
});
