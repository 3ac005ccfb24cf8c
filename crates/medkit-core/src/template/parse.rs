use std::fmt;

/// What a tag points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Ref {
    /// A top-level input field.
    Field(String),
    /// The current element of the innermost each-block.
    This,
    /// A field of the current (object) element.
    ThisField(String),
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ref::Field(name) => f.write_str(name),
            Ref::This => f.write_str("this"),
            Ref::ThisField(name) => write!(f, "this.{name}"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Text(String),
    Scalar { reference: Ref, at: usize },
    If { reference: Ref, at: usize, body: Vec<Node> },
    Each { reference: Ref, at: usize, body: Vec<Node> },
    Media { reference: Ref, at: usize },
}

/// Byte offset into the source plus a message.
pub(crate) type ParseError = (usize, String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    If,
    Each,
}

impl Block {
    fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "if" => Ok(Block::If),
            "each" => Ok(Block::Each),
            other => Err(format!("unknown block helper '{other}'")),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Block::If => "if",
            Block::Each => "each",
        }
    }
}

enum Tag {
    Scalar(Ref),
    Open(Block, Ref),
    Close(Block),
    Media(Ref),
}

enum Token {
    Text(String),
    Tag { at: usize, tag: Tag },
}

impl Token {
    fn is_block(&self) -> bool {
        matches!(
            self,
            Token::Tag {
                tag: Tag::Open(..) | Tag::Close(_),
                ..
            }
        )
    }
}

pub(crate) fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    let mut tokens = tokenize(source)?;
    strip_standalone_lines(&mut tokens);
    build(tokens)
}

fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = source;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            tokens.push(Token::Text(rest[..start].to_string()));
        }
        let at = offset + start;
        let after = &rest[start..];
        let (triple, open_len, close) = if after.starts_with("{{{") {
            (true, 3, "}}}")
        } else {
            (false, 2, "}}")
        };

        let inner = &after[open_len..];
        let end = inner
            .find(close)
            .ok_or_else(|| (at, "unterminated tag".to_string()))?;
        let tag = classify(inner[..end].trim(), triple).map_err(|message| (at, message))?;
        tokens.push(Token::Tag { at, tag });

        let consumed = start + open_len + end + close.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest.to_string()));
    }
    Ok(tokens)
}

fn classify(content: &str, triple: bool) -> Result<Tag, String> {
    if triple {
        return parse_ref(content).map(Tag::Scalar);
    }

    if let Some(rest) = content.strip_prefix('#') {
        let (helper, arg) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("block helper '{rest}' needs a field"))?;
        return Ok(Tag::Open(Block::from_name(helper)?, parse_ref(arg.trim())?));
    }

    if let Some(rest) = content.strip_prefix('/') {
        return Ok(Tag::Close(Block::from_name(rest.trim())?));
    }

    if let Some(arg) = content.strip_prefix("media")
        && arg.starts_with(char::is_whitespace)
    {
        let arg = arg.trim();
        let arg = arg.strip_prefix("url=").unwrap_or(arg);
        return Ok(Tag::Media(parse_ref(arg.trim())?));
    }

    parse_ref(content).map(Tag::Scalar)
}

fn parse_ref(s: &str) -> Result<Ref, String> {
    if s == "this" {
        return Ok(Ref::This);
    }
    let (name, in_element) = match s.strip_prefix("this.") {
        Some(name) => (name, true),
        None => (s, false),
    };

    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(format!("invalid field reference '{s}'"));
    }

    Ok(if in_element {
        Ref::ThisField(name.to_string())
    } else {
        Ref::Field(name.to_string())
    })
}

/// Drop the line of every block tag that has nothing but whitespace around
/// it on its line. Standalone positions are decided on the untouched token
/// stream first, then trimmed, so adjacent standalone tags behave the same
/// regardless of order.
fn strip_standalone_lines(tokens: &mut [Token]) {
    let standalone: Vec<usize> = (0..tokens.len())
        .filter(|&i| tokens[i].is_block() && blank_before(tokens, i) && blank_after(tokens, i))
        .collect();

    for i in standalone {
        if i > 0
            && let Token::Text(text) = &mut tokens[i - 1]
        {
            match text.rfind('\n') {
                Some(pos) => text.truncate(pos + 1),
                None => text.clear(),
            }
        }
        if let Some(Token::Text(text)) = tokens.get_mut(i + 1) {
            match text.find('\n') {
                Some(pos) => {
                    text.drain(..=pos);
                }
                None => text.clear(),
            }
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.chars().all(|c| matches!(c, ' ' | '\t' | '\r'))
}

fn blank_before(tokens: &[Token], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    match &tokens[i - 1] {
        Token::Text(text) => {
            let tail = text.rsplit('\n').next().unwrap_or_default();
            is_blank(tail) && (text.contains('\n') || i == 1)
        }
        Token::Tag { .. } => false,
    }
}

fn blank_after(tokens: &[Token], i: usize) -> bool {
    if i + 1 == tokens.len() {
        return true;
    }
    match &tokens[i + 1] {
        Token::Text(text) => {
            let head = text.split('\n').next().unwrap_or_default();
            is_blank(head) && (text.contains('\n') || i + 2 == tokens.len())
        }
        Token::Tag { .. } => false,
    }
}

fn build(tokens: Vec<Token>) -> Result<Vec<Node>, ParseError> {
    let mut open: Vec<(Block, Ref, usize, Vec<Node>)> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => {
                if !text.is_empty() {
                    current.push(Node::Text(text));
                }
            }
            Token::Tag { at, tag } => match tag {
                Tag::Scalar(reference) => current.push(Node::Scalar { reference, at }),
                Tag::Media(reference) => current.push(Node::Media { reference, at }),
                Tag::Open(block, reference) => {
                    open.push((block, reference, at, std::mem::take(&mut current)));
                }
                Tag::Close(block) => {
                    let (opened, reference, opened_at, parent) = open
                        .pop()
                        .ok_or_else(|| (at, format!("closing '{}' without an opening tag", block.name())))?;
                    if opened != block {
                        return Err((
                            at,
                            format!("closing '{}' while '{}' is open", block.name(), opened.name()),
                        ));
                    }
                    let body = std::mem::replace(&mut current, parent);
                    current.push(match block {
                        Block::If => Node::If {
                            reference,
                            at: opened_at,
                            body,
                        },
                        Block::Each => Node::Each {
                            reference,
                            at: opened_at,
                            body,
                        },
                    });
                }
            },
        }
    }

    if let Some((block, _, at, _)) = open.pop() {
        return Err((at, format!("'{}' block is never closed", block.name())));
    }
    Ok(current)
}
