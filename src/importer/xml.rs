//! Streaming reader for MediaWiki-export-style XML dumps
//!
//! Only the elements the pipeline needs are interpreted: each `<page>`
//! yields one article from its `<title>` and `<text>` content. Everything
//! else (`<siteinfo>`, `<revision>` wrappers, ids, timestamps) is skipped
//! on the way through. Content is scanned line by line; `<text>` bodies
//! routinely span many lines, `<title>` content may too.

use super::{ArticleSource, SourceError};
use crate::pipeline::Article;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Longest entity reference worth decoding (`&#x10FFFF;`)
const MAX_ENTITY_LEN: usize = 10;

/// Which element's character content is being accumulated
#[derive(Debug, Clone, Copy, PartialEq)]
enum Capturing {
    Title,
    Text,
}

/// Pull-style article reader over a wiki XML dump
#[derive(Debug)]
pub struct XmlDumpReader<R> {
    reader: R,
    /// Current input line, 1-based, for error reporting
    line: u64,
    /// Line buffer, reused across reads
    buf: String,
    /// Unconsumed tail of a line that contained the end of a page
    carry: String,
}

impl XmlDumpReader<BufReader<File>> {
    /// Open a dump file for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> XmlDumpReader<R> {
    /// Wrap an already-buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
            carry: String::new(),
        }
    }

    fn parse_error(&self, msg: impl Into<String>) -> SourceError {
        SourceError::Parse {
            line: self.line,
            msg: msg.into(),
        }
    }
}

impl<R: BufRead> ArticleSource for XmlDumpReader<R> {
    fn next_article(&mut self) -> Result<Option<Article>, SourceError> {
        let mut in_page = false;
        let mut capturing: Option<Capturing> = None;
        let mut captured = String::new();
        let mut title: Option<String> = None;
        let mut text = String::new();

        loop {
            if self.carry.is_empty() {
                self.buf.clear();
                if self.reader.read_line(&mut self.buf)? == 0 {
                    if in_page {
                        return Err(self.parse_error("unterminated <page> element"));
                    }
                    return Ok(None);
                }
                self.line += 1;
            } else {
                self.buf = std::mem::take(&mut self.carry);
            }

            let mut rest = self.buf.as_str();
            loop {
                match capturing {
                    Some(Capturing::Title) => {
                        if let Some(end) = rest.find("</title>") {
                            captured.push_str(&rest[..end]);
                            title = Some(unescape(&captured));
                            captured.clear();
                            capturing = None;
                            rest = &rest[end + "</title>".len()..];
                        } else {
                            captured.push_str(rest);
                            break;
                        }
                    }
                    Some(Capturing::Text) => {
                        if let Some(end) = rest.find("</text>") {
                            captured.push_str(&rest[..end]);
                            text = unescape(&captured);
                            captured.clear();
                            capturing = None;
                            rest = &rest[end + "</text>".len()..];
                        } else {
                            captured.push_str(rest);
                            break;
                        }
                    }
                    None if !in_page => match rest.find("<page>") {
                        Some(pos) => {
                            in_page = true;
                            rest = &rest[pos + "<page>".len()..];
                        }
                        None => break,
                    },
                    None => {
                        // inside <page>: the next interesting tag wins
                        let title_at = rest.find("<title>");
                        let text_at = rest.find("<text");
                        let close_at = rest.find("</page>");
                        let first = [title_at, text_at, close_at]
                            .into_iter()
                            .flatten()
                            .min();

                        match first {
                            Some(pos) if Some(pos) == title_at => {
                                capturing = Some(Capturing::Title);
                                rest = &rest[pos + "<title>".len()..];
                            }
                            Some(pos) if Some(pos) == text_at => {
                                let after_name = &rest[pos + "<text".len()..];
                                let gt = after_name
                                    .find('>')
                                    .ok_or_else(|| self.parse_error("malformed <text> tag"))?;
                                if after_name[..gt].ends_with('/') {
                                    // self-closing: empty body
                                    text.clear();
                                } else {
                                    capturing = Some(Capturing::Text);
                                }
                                rest = &after_name[gt + 1..];
                            }
                            Some(pos) => {
                                // </page>
                                let title = title
                                    .take()
                                    .ok_or_else(|| self.parse_error("<page> without <title>"))?;
                                self.carry = rest[pos + "</page>".len()..].to_string();
                                return Ok(Some(Article::new(title, text)));
                            }
                            None => break,
                        }
                    }
                }
            }
        }
    }
}

/// Decode the predefined XML entities plus numeric character references
///
/// Unrecognized references pass through literally.
fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let semi = rest.find(';').filter(|&i| i <= MAX_ENTITY_LEN + 1);
        let decoded = semi.and_then(|semi| {
            let entity = &rest[1..semi];
            let c = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix('#')
                    .and_then(|num| match num.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse::<u32>().ok(),
                    })
                    .and_then(char::from_u32),
            };
            c.map(|c| (c, semi))
        });

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DUMP: &str = r#"<mediawiki xmlns="http://www.mediawiki.org/xml/export-0.10/">
  <siteinfo>
    <sitename>Testwiki</sitename>
  </siteinfo>
  <page>
    <title>Niels Bohr</title>
    <revision>
      <text xml:space="preserve">Danish physicist. [[Copenhagen]]
[[Category:Danish physicists]]</text>
    </revision>
  </page>
  <page>
    <title>Copenhagen</title>
    <revision>
      <text xml:space="preserve">Capital of [[Denmark]].</text>
    </revision>
  </page>
</mediawiki>
"#;

    fn read_all(input: &str) -> Result<Vec<Article>, SourceError> {
        let mut reader = XmlDumpReader::new(Cursor::new(input.to_string()));
        let mut articles = Vec::new();
        while let Some(article) = reader.next_article()? {
            articles.push(article);
        }
        Ok(articles)
    }

    #[test]
    fn test_reads_pages_in_order() {
        let articles = read_all(DUMP).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Niels Bohr");
        assert!(articles[0].text.contains("[[Category:Danish physicists]]"));
        assert_eq!(articles[1].title, "Copenhagen");
    }

    #[test]
    fn test_multiline_text_preserved() {
        let articles = read_all(DUMP).unwrap();
        assert!(articles[0].text.contains("[[Copenhagen]]\n[[Category:"));
    }

    #[test]
    fn test_entities_decoded() {
        let dump = "<page><title>AT&amp;T</title><text>a &lt;b&gt; &#65; &#x42;</text></page>";
        let articles = read_all(dump).unwrap();
        assert_eq!(articles[0].title, "AT&T");
        assert_eq!(articles[0].text, "a <b> A B");
    }

    #[test]
    fn test_self_closing_text() {
        let dump = "<page><title>Empty</title><text bytes=\"0\" /></page>";
        let articles = read_all(dump).unwrap();
        assert_eq!(articles[0].text, "");
    }

    #[test]
    fn test_pages_on_one_line() {
        let dump = "<page><title>A</title><text>x</text></page><page><title>B</title><text>y</text></page>";
        let articles = read_all(dump).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].title, "B");
    }

    #[test]
    fn test_unterminated_page_is_fatal() {
        let dump = "<page><title>A</title><text>never closed";
        let err = read_all(dump).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_page_without_title_is_fatal() {
        let dump = "<page><text>body</text></page>";
        let err = read_all(dump).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_unknown_entity_passes_through() {
        let dump = "<page><title>T</title><text>&nbsp; stays</text></page>";
        let articles = read_all(dump).unwrap();
        assert_eq!(articles[0].text, "&nbsp; stays");
    }
}
