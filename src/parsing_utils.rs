use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// One `[name]` block of a record file with its keys in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Section {
        Section {
            name: name.to_string(),
            entries: vec![],
        }
    }

    /// Keys are case-insensitive.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub reason: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

fn extract_section_name(line: &str) -> Option<&str> {
    lazy_static! {
        static ref SECTION_REGEX: Regex = Regex::new(r"^\[(?P<name>.+)\]").unwrap();
    }

    SECTION_REGEX
        .captures(line)
        .and_then(|cap| cap.name("name"))
        .map(|name| name.as_str().trim())
}

fn extract_option(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref OPTION_REGEX: Regex =
            Regex::new(r"^(?P<key>.*?)\s*[=:]\s*(?P<value>.*)$").unwrap();
    }

    OPTION_REGEX.captures(line).and_then(|cap| {
        match (cap.name("key"), cap.name("value")) {
            (Some(key), Some(value)) => Some((key.as_str(), value.as_str().trim())),
            _ => None,
        }
    })
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Parses a section-keyed key-value document.
///
/// ```text
/// [Section name]
/// key = value
/// other: value
///     continued on an indented line
///
///     blank lines stay inside a value when an indented line follows them
/// ; comment
/// ```
pub fn parse_sections(text: &str) -> Result<Vec<Section>, SyntaxError> {
    let mut sections: Vec<Section> = vec![];
    // (key, indentation of the key line) of the value still open for continuation
    let mut open_value: Option<(String, usize)> = None;
    // blank lines seen since the last line of the open value
    let mut blank_lines = 0;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        let error = |reason: String| SyntaxError { line: line_no, reason };

        if line.is_empty() {
            blank_lines += 1;
            continue;
        }
        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let indent = indent_of(raw_line);
        if let Some((ref key, key_indent)) = open_value {
            if indent > key_indent {
                if let Some(section) = sections.last_mut() {
                    if let Some((_, value)) = section.entries.iter_mut().find(|(k, _)| k == key) {
                        for _ in 0..blank_lines {
                            value.push('\n');
                        }
                        value.push('\n');
                        value.push_str(line);
                    }
                }
                blank_lines = 0;
                continue;
            }
        }
        blank_lines = 0;

        if let Some(name) = extract_section_name(line) {
            if sections.iter().any(|s| s.name == name) {
                return Err(error(format!("duplicate section [{}]", name)));
            }
            sections.push(Section::new(name));
            open_value = None;
            continue;
        }

        let Some(section) = sections.last_mut() else {
            return Err(error("key-value line before any [section] header".to_string()));
        };

        let (key, value) = match extract_option(line) {
            Some(option) => option,
            None => return Err(error(format!("expected `key = value`, found `{}`", line))),
        };
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(error("empty key".to_string()));
        }
        if section.entries.iter().any(|(k, _)| *k == key) {
            return Err(error(format!("duplicate key `{}` in [{}]", key, section.name)));
        }

        section.entries.push((key.clone(), value.to_string()));
        open_value = Some((key, indent));
    }

    Ok(sections)
}
