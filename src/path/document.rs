use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::errors::ParseError;

/// Return the `d` attribute of the single `<path>` element in an SVG document.
///
/// Multi-path documents aren't supported: a second `<path d=...>` is
/// [`ParseError::MultiplePaths`], none at all is [`ParseError::MissingPath`].
/// `<path>` elements without a `d` attribute are ignored.
pub fn extract_path_data(document: &str) -> Result<String, ParseError> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut found: Option<String> = None;
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() != b"path" {
                    continue;
                }
                if let Some(data) = path_data(e)? {
                    if found.is_some() {
                        return Err(ParseError::MultiplePaths);
                    }
                    found = Some(data);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ParseError::MalformedDocument(format!(
                    "XML parse error at position {}: {}",
                    reader.error_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    found.ok_or(ParseError::MissingPath)
}

fn path_data(element: &BytesStart) -> Result<Option<String>, ParseError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| ParseError::MalformedDocument(e.to_string()))?;
        if attr.key.as_ref() == b"d" {
            let value = attr
                .unescape_value()
                .map_err(|e| ParseError::MalformedDocument(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="100" height="100" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">"#;

    #[test]
    fn test_single_path() {
        let doc = format!(
            "{HEADER}<g><path fill=\"none\" d=\"M 0 0 l 10 0 l 0 10 z\"/></g></svg>"
        );
        assert_eq!(extract_path_data(&doc).unwrap(), "M 0 0 l 10 0 l 0 10 z");
    }

    #[test]
    fn test_missing_path() {
        let doc = format!("{HEADER}<rect x=\"0\" y=\"0\" width=\"5\" height=\"5\"/><path id=\"empty\"/></svg>");
        assert_eq!(extract_path_data(&doc), Err(ParseError::MissingPath));
    }

    #[test]
    fn test_multiple_paths() {
        let doc = format!("{HEADER}<path d=\"M 0 0 h 1\"/><path d=\"M 5 5 h 1\"></path></svg>");
        assert_eq!(extract_path_data(&doc), Err(ParseError::MultiplePaths));
    }

    #[test]
    fn test_escaped_path_data() {
        let doc = format!("{HEADER}<path d=\"M 0 0&#10;h 10&#x20;v 5\"/></svg>");
        assert_eq!(extract_path_data(&doc).unwrap(), "M 0 0\nh 10 v 5");
    }

    #[test]
    fn test_bad_attributes() {
        for doc in [
            format!("{HEADER}<path d=\"M 0 0 &bogus; h 1\"/></svg>"),
            format!("{HEADER}<path fill=\"none\" fill=\"red\" d=\"M 0 0 h 1\"/></svg>"),
        ] {
            assert!(matches!(
                extract_path_data(&doc),
                Err(ParseError::MalformedDocument(_))
            ));
        }
    }

    #[test]
    fn test_malformed() {
        let doc = format!("{HEADER}<path d=\"M 0 0 h 1\"></g></svg>");
        assert!(matches!(
            extract_path_data(&doc),
            Err(ParseError::MalformedDocument(_))
        ));
    }
}
