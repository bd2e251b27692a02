//! Markup question parsing.
//!
//! A minimal element reader sufficient for the question schema: nested
//! elements, text content with the five predefined entities, comments,
//! declarations, and self-closing tags. Attributes are scanned past and
//! dropped. Namespaces, CDATA, and numeric character references are not
//! recognized.

use lectern_core::{Error, Question, Result};

use crate::format::QuestionParser;

/// Parser for the markup format.
///
/// Each `QuestionItem` element becomes one question. Missing text fields
/// read as empty strings, but a missing or unparsable `Value` fails the
/// whole parse.
pub struct XmlQuestionParser;

impl QuestionParser for XmlQuestionParser {
    fn parse(&self, source: &str) -> Result<Vec<Question>> {
        let root = Reader::new(source).parse_document()?;
        let mut items = Vec::new();
        collect_named(&root, "QuestionItem", &mut items);

        items.into_iter().map(question_from_item).collect()
    }
}

/// One parsed element: name, direct text, and child elements in order.
#[derive(Debug)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Concatenated text of this element and its descendants.
    fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// First descendant with the given name, in document order.
    fn find(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }
}

/// Collects every element named `name`, in document order.
fn collect_named<'a>(element: &'a Element, name: &str, out: &mut Vec<&'a Element>) {
    if element.name == name {
        out.push(element);
    }
    for child in &element.children {
        collect_named(child, name, out);
    }
}

/// Text of the first descendant with the given name, empty when absent.
fn text_of(item: &Element, name: &str) -> String {
    item.find(name).map(Element::text_content).unwrap_or_default()
}

/// Builds a question from one `QuestionItem` element.
fn question_from_item(item: &Element) -> Result<Question> {
    let value_text = text_of(item, "Value");
    let value = value_text.trim().parse::<u32>().map_err(|_| {
        Error::format(
            "xml",
            format!("unparsable Value '{}' in QuestionItem", value_text.trim()),
        )
    })?;

    let mut question = Question::new(
        text_of(item, "Category"),
        value,
        text_of(item, "QuestionText"),
        text_of(item, "CorrectAnswer"),
    );

    // Immediate children of the Options container: tag name is the key,
    // text content is the option text.
    if let Some(options) = item.find("Options") {
        for child in &options.children {
            question = question.with_option(child.name.clone(), child.text_content());
        }
    }
    Ok(question)
}

/// Character-level reader over the source text.
struct Reader<'src> {
    rest: &'src str,
    line: usize,
}

impl<'src> Reader<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            line: 1,
        }
    }

    /// Parses the document: misc, one root element, trailing misc.
    fn parse_document(mut self) -> Result<Element> {
        self.skip_misc()?;
        if self.rest.is_empty() {
            return Err(self.error("no root element"));
        }
        let root = self.parse_element()?;
        self.skip_misc()?;
        if !self.rest.is_empty() {
            return Err(self.error("content after the root element"));
        }
        Ok(root)
    }

    fn parse_element(&mut self) -> Result<Element> {
        self.expect('<')?;
        let name = self.parse_name()?;
        let self_closing = self.finish_open_tag()?;

        let mut element = Element::new(name);
        if self_closing {
            return Ok(element);
        }

        loop {
            if self.rest.is_empty() {
                return Err(self.error(&format!("unterminated element '{}'", element.name)));
            }
            if self.starts_with("</") {
                self.consume_str("</");
                let close = self.parse_name()?;
                if close != element.name {
                    return Err(self.error(&format!(
                        "mismatched close tag '</{close}>' for element '{}'",
                        element.name
                    )));
                }
                self.skip_whitespace();
                self.expect('>')?;
                return Ok(element);
            } else if self.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.starts_with("<") {
                let child = self.parse_element()?;
                element.children.push(child);
            } else {
                let text = self.read_text()?;
                element.text.push_str(&text);
            }
        }
    }

    /// Consumes the rest of an open tag, returning true for `/>`.
    ///
    /// Attribute values are honored far enough that a quoted `>` does not
    /// end the tag early; the attributes themselves are dropped.
    fn finish_open_tag(&mut self) -> Result<bool> {
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated tag")),
                Some('>') => {
                    self.advance();
                    return Ok(false);
                }
                Some('/') => {
                    self.advance();
                    self.expect('>')?;
                    return Ok(true);
                }
                Some(q @ ('"' | '\'')) => {
                    self.advance();
                    self.skip_until(q)?;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Skips whitespace, comments, declarations, and doctype lines.
    fn skip_misc(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.starts_with("<?") || self.starts_with("<!") {
                self.skip_until('>')?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        self.consume_str("<!--");
        loop {
            if self.starts_with("-->") {
                self.consume_str("-->");
                return Ok(());
            }
            if self.advance().is_none() {
                return Err(self.error("unterminated comment"));
            }
        }
    }

    /// Reads text up to the next markup, decoding predefined entities.
    fn read_text(&mut self) -> Result<String> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '<' {
                break;
            }
            if c == '&' {
                out.push(self.read_entity()?);
            } else {
                out.push(c);
                self.advance();
            }
        }
        Ok(out)
    }

    fn read_entity(&mut self) -> Result<char> {
        self.advance();
        let mut name = String::new();
        loop {
            match self.advance() {
                Some(';') => break,
                Some(c) if name.len() < 8 => name.push(c),
                _ => return Err(self.error("unterminated entity reference")),
            }
        }
        match name.as_str() {
            "amp" => Ok('&'),
            "lt" => Ok('<'),
            "gt" => Ok('>'),
            "quot" => Ok('"'),
            "apos" => Ok('\''),
            other => Err(self.error(&format!("unknown entity '&{other};'"))),
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':') {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if name.is_empty() {
            return Err(self.error("expected a name"));
        }
        Ok(name)
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.rest.starts_with(prefix)
    }

    /// Consumes a prefix the caller has already matched with `starts_with`.
    fn consume_str(&mut self, prefix: &str) {
        for _ in prefix.chars() {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn skip_until(&mut self, target: char) -> Result<()> {
        loop {
            match self.advance() {
                Some(c) if c == target => return Ok(()),
                Some(_) => {}
                None => {
                    return Err(self.error(&format!("expected '{target}' before end of input")));
                }
            }
        }
    }

    fn expect(&mut self, want: char) -> Result<()> {
        match self.advance() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(self.error(&format!("expected '{want}', found '{c}'"))),
            None => Err(self.error(&format!("expected '{want}', found end of input"))),
        }
    }

    fn error(&self, detail: &str) -> Error {
        Error::format("xml", format!("{detail} (line {})", self.line))
    }
}
