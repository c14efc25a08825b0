use trust_lex::{render_tokens, significant, tokenize, TokKind};

#[test]
fn typed_mutable_hex_binding() {
    let toks = tokenize("let mut n: i32 = 0x10;");
    let got: Vec<(TokKind, &str)> = significant(&toks).map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        got,
        vec![
            (TokKind::Let, "let"),
            (TokKind::Mut, "mut"),
            (TokKind::Id, "n"),
            (TokKind::Colon, ":"),
            (TokKind::Int, "i32"),
            (TokKind::Assign, "="),
            (TokKind::Hexadecimal, "0x10"),
            (TokKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn function_dump() {
    let src = r#"
// entry point
fn main() -> i32 {
    let x: bool = 1 <= 2;
    println!("{}", x);
    return 0;
}
"#;
    let expected = "\
Fn: fn
Id: main
LParen: (
RParen: )
Arrow: ->
Int: i32
LBrace: {
Let: let
Id: x
Colon: :
Bool: bool
Assign: =
Decimal: 1
LessEq: <=
Decimal: 2
Semicolon: ;
Print: println!
LParen: (
String: \"{}\"
Comma: ,
Id: x
RParen: )
Semicolon: ;
Return: return
Decimal: 0
Semicolon: ;
RBrace: }
";
    assert_eq!(render_tokens(&tokenize(src)), expected);
}

#[test]
fn unknown_tokens_show_in_dump() {
    assert_eq!(render_tokens(&tokenize("a @ b")), "Id: a\nUnknown: @\nId: b\n");
}

#[test]
fn tokenizing_from_several_threads() {
    let sources = ["let a = 1;", "fn f() {}", "x != 0x2", "@"];
    let handles: Vec<_> = sources
        .iter()
        .map(|s| {
            let s = s.to_string();
            std::thread::spawn(move || tokenize(&s).len())
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![8, 8, 5, 1]);
}
