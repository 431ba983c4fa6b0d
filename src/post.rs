use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::parsing_utils::{parse_sections, Section};

pub const RECORD_EXTENSION: &str = ".ini";
pub const PAGE_EXTENSION: &str = ".html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub description: String,
    pub link: String,
    pub tags: Vec<String>,
    pub comment: Option<String>,
    /// Output file name, e.g. `2024-01-10-foo.html`
    pub name: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "name={}, title={}, link={}, tags=[{}]",
               self.name,
               self.title,
               self.link,
               self.tags.join(", ")
        )
    }
}

/// Swaps the record extension for the page extension:
/// `2024-01-10-foo.ini` becomes `2024-01-10-foo.html`.
pub fn output_name(record_name: &str) -> String {
    let stem = record_name.strip_suffix(RECORD_EXTENSION).unwrap_or(record_name);
    format!("{}{}", stem, PAGE_EXTENSION)
}

/// Inverse of [`output_name`].
pub fn record_name(output_name: &str) -> String {
    let stem = output_name.strip_suffix(PAGE_EXTENSION).unwrap_or(output_name);
    format!("{}{}", stem, RECORD_EXTENSION)
}

/// `YYYY-MM` prefix of a record or page file name.
pub fn month_of(file_name: &str) -> Option<&str> {
    file_name.get(0..7)
}

/// Example of record
/// ```text
/// [What I learned after 20+ years of software development]
/// description = How to be a great software engineer?
/// link = https://thiagocafe.com/view/20220402_what_i_learned/
/// tags = career, programming
/// comment = Worth a read
/// ```
impl Post {
    pub fn from(file_path: &Path) -> Result<Post> {
        let content = fs::read_to_string(file_path).map_err(|e| Error::io(file_path, e))?;
        Self::from_string(file_path, &content)
    }

    pub fn from_string(file_path: &Path, content: &str) -> Result<Post> {
        let malformed = |reason: String| Error::MalformedRecord {
            path: file_path.to_path_buf(),
            reason,
        };

        let sections = parse_sections(content).map_err(|e| malformed(e.to_string()))?;
        let section = match sections.into_iter().next() {
            Some(section) => section,
            None => return Err(malformed("no [section] found".to_string())),
        };

        let required = |field: &'static str| -> Result<String> {
            match section.get(field) {
                Some(value) => Ok(value.to_string()),
                None => Err(Error::MissingField {
                    path: file_path.to_path_buf(),
                    field,
                }),
            }
        };

        let description = required("description")?;
        let link = required("link")?;
        let tags = Self::extract_tags(&required("tags")?);
        let comment = Self::extract_comment(&section);

        let file_name = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| malformed("record file name is not valid UTF-8".to_string()))?;

        Ok(Post {
            title: section.name.clone(),
            description,
            link,
            tags,
            comment,
            name: output_name(file_name),
        })
    }

    fn extract_tags(tags_str: &str) -> Vec<String> {
        tags_str.split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }

    fn extract_comment(section: &Section) -> Option<String> {
        section.get("comment")
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
    }
}
