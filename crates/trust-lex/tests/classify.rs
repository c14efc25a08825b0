use trust_lex::{significant, tokenize, TokKind};

fn kinds(src: &str) -> Vec<TokKind> {
    tokenize(src).iter().map(|t| t.kind).collect()
}

fn one(src: &str) -> (TokKind, String) {
    let toks = tokenize(src);
    assert_eq!(toks.len(), 1, "expected a single token for {src:?}: {toks:?}");
    (toks[0].kind, toks[0].text.to_string())
}

#[test]
fn keywords_win_only_on_whole_words() {
    assert_eq!(kinds("let"), vec![TokKind::Let]);
    assert_eq!(kinds("letx"), vec![TokKind::Id]);
    assert_eq!(kinds("loop_"), vec![TokKind::Id]);
    let all = "bool break continue else false fn i32 if let loop mut println! return true";
    let got: Vec<_> = significant(&tokenize(all)).map(|t| t.kind).collect();
    assert_eq!(
        got,
        vec![
            TokKind::Bool,
            TokKind::Break,
            TokKind::Continue,
            TokKind::Else,
            TokKind::False,
            TokKind::Fn,
            TokKind::Int,
            TokKind::If,
            TokKind::Let,
            TokKind::Loop,
            TokKind::Mut,
            TokKind::Print,
            TokKind::Return,
            TokKind::True,
        ]
    );
}

#[test]
fn two_char_operators_are_single_tokens() {
    assert_eq!(kinds("<="), vec![TokKind::LessEq]);
    assert_eq!(
        kinds("< ="),
        vec![TokKind::Less, TokKind::Whitespace, TokKind::Assign]
    );
    assert_eq!(kinds("->"), vec![TokKind::Arrow]);
    assert_eq!(kinds("!="), vec![TokKind::NotEq]);
    assert_eq!(kinds("=="), vec![TokKind::Eq]);
    assert_eq!(kinds(">="), vec![TokKind::GreaterEq]);
    assert_eq!(kinds("&&"), vec![TokKind::And]);
    assert_eq!(kinds("||"), vec![TokKind::Or]);
    assert_eq!(kinds("==="), vec![TokKind::Eq, TokKind::Assign]);
    assert_eq!(kinds("-->"), vec![TokKind::Sub, TokKind::Arrow]);
}

#[test]
fn single_char_symbols() {
    let got = kinds("-+*/%=<>{}()[];,:!");
    assert_eq!(
        got,
        vec![
            TokKind::Sub,
            TokKind::Add,
            TokKind::Mul,
            TokKind::Div,
            TokKind::Mod,
            TokKind::Assign,
            TokKind::Less,
            TokKind::Greater,
            TokKind::LBrace,
            TokKind::RBrace,
            TokKind::LParen,
            TokKind::RParen,
            TokKind::LBracket,
            TokKind::RBracket,
            TokKind::Semicolon,
            TokKind::Comma,
            TokKind::Colon,
            TokKind::Not,
        ]
    );
}

#[test]
fn literals() {
    assert_eq!(one("0x1A"), (TokKind::Hexadecimal, "0x1A".into()));
    assert_eq!(one("0xdeadBEEF"), (TokKind::Hexadecimal, "0xdeadBEEF".into()));
    assert_eq!(one("42"), (TokKind::Decimal, "42".into()));
    assert_eq!(one("007"), (TokKind::Decimal, "007".into()));
    assert_eq!(one(r#""a\"b""#), (TokKind::String, r#""a\"b""#.into()));
}

#[test]
fn comment_consumes_its_newline() {
    let toks = tokenize("// foo\nlet");
    assert_eq!(toks.len(), 2);
    assert_eq!((toks[0].kind, toks[0].text), (TokKind::Comment, "// foo\n"));
    assert_eq!(toks[1].kind, TokKind::Let);
}

#[test]
fn comment_markers_inside_strings_are_not_comments() {
    assert_eq!(one(r#""// not a comment""#).0, TokKind::String);
}

#[test]
fn whitespace_is_one_token_per_character() {
    assert_eq!(
        kinds(" \t\n"),
        vec![TokKind::Whitespace, TokKind::Whitespace, TokKind::Whitespace]
    );
}
