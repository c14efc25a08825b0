use trust_ast::span::Span;

/// Closed set of token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokKind {
    // keywords
    Bool,
    Break,
    Continue,
    Else,
    False,
    Fn,
    Int, // i32
    If,
    Let,
    Loop,
    Mut,
    Print, // println!
    Return,
    True,
    // arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // relational
    Less,
    Greater,
    LessEq,
    GreaterEq,
    NotEq,
    Eq,
    // logical
    And,
    Or,
    Not,
    // assignment
    Assign,
    // punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,
    Arrow,
    // identifiers / literals
    Id,
    Decimal,
    Hexadecimal,
    String,
    // trivia
    Comment,
    Whitespace,
    /// Input no lexical rule accepts.
    Unknown,
}

/// Reserved spellings. `println!` is one indivisible spelling.
pub const KEYWORDS: &[(&str, TokKind)] = &[
    ("bool", TokKind::Bool),
    ("break", TokKind::Break),
    ("continue", TokKind::Continue),
    ("else", TokKind::Else),
    ("false", TokKind::False),
    ("fn", TokKind::Fn),
    ("i32", TokKind::Int),
    ("if", TokKind::If),
    ("let", TokKind::Let),
    ("loop", TokKind::Loop),
    ("mut", TokKind::Mut),
    ("println!", TokKind::Print),
    ("return", TokKind::Return),
    ("true", TokKind::True),
];

pub fn keyword(word: &str) -> Option<TokKind> {
    KEYWORDS
        .binary_search_by(|(spelling, _)| spelling.cmp(&word))
        .ok()
        .map(|i| KEYWORDS[i].1)
}

/// Operator / punctuation lexeme to kind, one- and two-character forms.
pub fn symbol(lexeme: &str) -> Option<TokKind> {
    let kind = match lexeme {
        "=" => TokKind::Assign,
        "+" => TokKind::Add,
        "-" => TokKind::Sub,
        "*" => TokKind::Mul,
        "/" => TokKind::Div,
        "%" => TokKind::Mod,
        "<" => TokKind::Less,
        ">" => TokKind::Greater,
        "<=" => TokKind::LessEq,
        ">=" => TokKind::GreaterEq,
        "!=" => TokKind::NotEq,
        "==" => TokKind::Eq,
        "&&" => TokKind::And,
        "||" => TokKind::Or,
        "!" => TokKind::Not,
        "(" => TokKind::LParen,
        ")" => TokKind::RParen,
        "{" => TokKind::LBrace,
        "}" => TokKind::RBrace,
        "[" => TokKind::LBracket,
        "]" => TokKind::RBracket,
        ";" => TokKind::Semicolon,
        "," => TokKind::Comma,
        ":" => TokKind::Colon,
        "->" => TokKind::Arrow,
        _ => return None,
    };
    Some(kind)
}

impl TokKind {
    pub fn name(self) -> &'static str {
        use TokKind::*;
        match self {
            Bool => "Bool",
            Break => "Break",
            Continue => "Continue",
            Else => "Else",
            False => "False",
            Fn => "Fn",
            Int => "Int",
            If => "If",
            Let => "Let",
            Loop => "Loop",
            Mut => "Mut",
            Print => "Print",
            Return => "Return",
            True => "True",
            Add => "Add",
            Sub => "Sub",
            Mul => "Mul",
            Div => "Div",
            Mod => "Mod",
            Less => "Less",
            Greater => "Greater",
            LessEq => "LessEq",
            GreaterEq => "GreaterEq",
            NotEq => "NotEq",
            Eq => "Eq",
            And => "And",
            Or => "Or",
            Not => "Not",
            Assign => "Assign",
            LParen => "LParen",
            RParen => "RParen",
            LBrace => "LBrace",
            RBrace => "RBrace",
            LBracket => "LBracket",
            RBracket => "RBracket",
            Semicolon => "Semicolon",
            Comma => "Comma",
            Colon => "Colon",
            Arrow => "Arrow",
            Id => "Id",
            Decimal => "Decimal",
            Hexadecimal => "Hexadecimal",
            String => "String",
            Comment => "Comment",
            Whitespace => "Whitespace",
            Unknown => "Unknown",
        }
    }

    /// Whitespace and comments: kept for losslessness, carry no grammar.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokKind::Whitespace | TokKind::Comment)
    }

    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, k)| *k == self)
    }
}

impl std::fmt::Display for TokKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tok<'a> {
    pub kind: TokKind,
    /// Exact source text of the token.
    pub text: &'a str,
    pub span: Span,
}
