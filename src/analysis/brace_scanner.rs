//! Forward scanning for method body boundaries.
//!
//! A small lexical state machine skips string literals, character literals
//! and comments so that braces and semicolons inside them are not counted.
//! Body ends are found with an explicit depth counter, never with a regex.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Code,
    LineComment,
    BlockComment,
    Str { verbatim: bool },
    Char,
}

/// Iterator over `(offset, byte)` pairs that lie in code, outside literals and comments.
struct CodeBytes<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: LexState,
}

impl<'a> CodeBytes<'a> {
    fn new(text: &'a str, start: usize) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: start,
            state: LexState::Code,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn opens_verbatim(&self, quote: usize) -> bool {
        quote > 0 && self.bytes[quote - 1] == b'@'
            || quote > 1 && self.bytes[quote - 1] == b'$' && self.bytes[quote - 2] == b'@'
    }
}

impl Iterator for CodeBytes<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let offset = self.pos;
            let byte = *self.bytes.get(offset)?;
            self.pos += 1;

            match self.state {
                LexState::Code => match byte {
                    b'/' if self.peek() == Some(b'/') => {
                        self.pos += 1;
                        self.state = LexState::LineComment;
                    }
                    b'/' if self.peek() == Some(b'*') => {
                        self.pos += 1;
                        self.state = LexState::BlockComment;
                    }
                    b'"' => {
                        self.state = LexState::Str {
                            verbatim: self.opens_verbatim(offset),
                        }
                    }
                    b'\'' => self.state = LexState::Char,
                    _ => return Some((offset, byte)),
                },
                LexState::LineComment => {
                    if byte == b'\n' {
                        self.state = LexState::Code;
                    }
                }
                LexState::BlockComment => {
                    if byte == b'*' && self.peek() == Some(b'/') {
                        self.pos += 1;
                        self.state = LexState::Code;
                    }
                }
                LexState::Str { verbatim: false } => match byte {
                    b'\\' => self.pos += 1,
                    b'"' | b'\n' => self.state = LexState::Code,
                    _ => {}
                },
                LexState::Str { verbatim: true } => {
                    if byte == b'"' {
                        if self.peek() == Some(b'"') {
                            self.pos += 1;
                        } else {
                            self.state = LexState::Code;
                        }
                    }
                }
                LexState::Char => match byte {
                    b'\\' => self.pos += 1,
                    b'\'' | b'\n' => self.state = LexState::Code,
                    _ => {}
                },
            }
        }
    }
}

/// Which byte offsets of a text lie in code rather than in a literal or comment.
pub struct CodeMap {
    code: Vec<bool>,
}

impl CodeMap {
    pub fn new(text: &str) -> Self {
        let mut code = vec![false; text.len()];
        for (offset, _) in CodeBytes::new(text, 0) {
            code[offset] = true;
        }
        Self { code }
    }

    pub fn is_code(&self, offset: usize) -> bool {
        self.code.get(offset).copied().unwrap_or(false)
    }
}

/// Offset just past the `}` matching the first `{` at or after `from`.
///
/// Unbalanced bodies run to the end of the text.
pub fn block_end(text: &str, from: usize) -> usize {
    let mut depth = 0usize;
    let mut in_method = false;

    for (offset, byte) in CodeBytes::new(text, from) {
        match byte {
            b'{' => {
                depth += 1;
                in_method = true;
            }
            b'}' if in_method => {
                depth -= 1;
                if depth == 0 {
                    return offset + 1;
                }
            }
            _ => {}
        }
    }
    text.len()
}

/// Offset just past the first statement-terminating `;` after the `=>` at or after `from`.
pub fn expression_end(text: &str, from: usize) -> usize {
    let mut code = CodeBytes::new(text, from);
    let mut previous = None;
    let arrow_found = code.any(|(_, byte)| {
        let is_arrow = previous == Some(b'=') && byte == b'>';
        previous = Some(byte);
        is_arrow
    });
    if !arrow_found {
        return text.len();
    }

    code.find(|&(_, byte)| byte == b';')
        .map_or(text.len(), |(offset, _)| offset + 1)
}
