use crate::token::{keyword, symbol, Tok, TokKind};
use trust_ast::span::Span;

/// Lossless scanner: every byte of the input ends up in exactly one token.
///
/// At each position the rules are tried in a fixed order (comment, string,
/// hex, decimal, two-char operator, word, one-char symbol, whitespace) and
/// the first that matches wins. Multi-character forms come before their
/// one-character prefixes, which gives maximal munch for this grammar.
pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn at(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    fn span(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    pub fn next_tok(&mut self) -> Option<Tok<'a>> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        let kind = match self.match_at(start) {
            Some((kind, end)) => {
                self.pos = end;
                kind
            }
            None => {
                self.skip_unknown();
                TokKind::Unknown
            }
        };
        Some(Tok {
            kind,
            text: &self.src[start..self.pos],
            span: self.span(start),
        })
    }

    /// Consume the maximal run of characters at which no rule matches.
    fn skip_unknown(&mut self) {
        loop {
            let width = self.src[self.pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.pos += width;
            if self.pos >= self.bytes.len() || self.match_at(self.pos).is_some() {
                break;
            }
        }
    }

    /// Kind and end offset of the token starting at `pos`, if any rule matches.
    fn match_at(&self, pos: usize) -> Option<(TokKind, usize)> {
        let b = self.at(pos)?;
        let next = self.at(pos + 1);

        // line comment, through the newline
        if b == b'/' && next == Some(b'/') {
            let end = self.bytes[pos..]
                .iter()
                .position(|&c| c == b'\n')
                .map_or(self.bytes.len(), |i| pos + i + 1);
            return Some((TokKind::Comment, end));
        }

        if b == b'"' {
            if let Some(end) = self.string_end(pos) {
                return Some((TokKind::String, end));
            }
        }

        if b == b'0' && next == Some(b'x') {
            let digits = self.run_len(pos + 2, |c| c.is_ascii_hexdigit());
            if digits > 0 {
                return Some((TokKind::Hexadecimal, pos + 2 + digits));
            }
        }

        if b.is_ascii_digit() {
            let end = pos + self.run_len(pos, |c| c.is_ascii_digit());
            return Some((TokKind::Decimal, end));
        }

        // 2-char operators before their 1-char prefixes
        if b.is_ascii() && next.is_some_and(|n| n.is_ascii()) {
            if let Some(k) = symbol(&self.src[pos..pos + 2]) {
                return Some((k, pos + 2));
            }
        }

        // ident / keywords
        if b.is_ascii_alphabetic() || b == b'_' {
            let end = pos + self.run_len(pos, |c| c.is_ascii_alphanumeric() || c == b'_');
            // `println!` is reserved as a whole; any other `word!` is word then `!`
            if self.at(end) == Some(b'!') {
                if let Some(k) = keyword(&self.src[pos..end + 1]) {
                    return Some((k, end + 1));
                }
            }
            let kind = keyword(&self.src[pos..end]).unwrap_or(TokKind::Id);
            return Some((kind, end));
        }

        if b.is_ascii() {
            if let Some(k) = symbol(&self.src[pos..pos + 1]) {
                return Some((k, pos + 1));
            }
        }

        if matches!(b, b' ' | b'\t' | b'\n') {
            return Some((TokKind::Whitespace, pos + 1));
        }

        None
    }

    /// End offset of a string literal opening at `pos`.
    ///
    /// A backslash escapes the next character. When the literal runs off the
    /// end of input, it is cut after the last escaped quote instead (the
    /// backslash then counts as an ordinary character); with no escaped quote
    /// there is no string here at all.
    fn string_end(&self, pos: usize) -> Option<usize> {
        let mut i = pos + 1;
        let mut last_escaped_quote = None;
        while let Some(c) = self.at(i) {
            match c {
                b'"' => return Some(i + 1),
                b'\\' => match self.at(i + 1) {
                    Some(b'"') => {
                        last_escaped_quote = Some(i + 2);
                        i += 2;
                    }
                    Some(_) => i += 2,
                    None => i += 1,
                },
                _ => i += 1,
            }
        }
        last_escaped_quote
    }

    fn run_len(&self, from: usize, pred: impl Fn(u8) -> bool) -> usize {
        self.bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|&&c| pred(c)).count())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Tok<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_tok()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
