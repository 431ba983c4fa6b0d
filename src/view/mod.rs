use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use ramhorns::Template;
use spdlog::debug;

use crate::content_cache::ContentCache;
use crate::error::{Error, Result};

pub mod month_renderer;
pub mod post_renderer;
pub mod tag_renderer;

pub const POST_TEMPLATE_FILE: &str = "post_template.html";
pub const MONTH_TEMPLATE_FILE: &str = "month_template.html";
pub const TAG_TEMPLATE_FILE: &str = "tag_template.html";

/// Renders `<p class="hug comment"> ...</p>` or nothing.
pub(crate) fn comment_block(comment: Option<&str>) -> String {
    match comment {
        Some(comment) if !comment.is_empty() => format!(r#"<p class="hug comment"> {}</p>"#, comment),
        _ => String::new(),
    }
}

/// Loads and parses templates from the template directory, once per run.
pub struct TemplateStore {
    template_dir: PathBuf,
    templates: ContentCache<Template<'static>>,
}

impl TemplateStore {
    pub fn new(template_dir: PathBuf, capacity: usize) -> TemplateStore {
        TemplateStore {
            template_dir,
            templates: ContentCache::new(capacity),
        }
    }

    pub fn get(&mut self, file_name: &str) -> Result<Arc<Template<'static>>> {
        let full_path = self.template_dir.join(file_name);
        self.templates.get_or(file_name, || -> Result<Template<'static>> {
            debug!("Loading template {}", full_path.display());
            let source = fs::read_to_string(&full_path).map_err(|e| Error::io(&full_path, e))?;
            Template::new(source).map_err(|e| Error::Template {
                path: full_path.clone(),
                reason: e.to_string(),
            })
        })
    }
}
