use std::sync::Arc;

use ramhorns::Template;

use crate::error::Result;
use crate::post::{Post, PAGE_EXTENSION};
use crate::text_utils::{format_month_label, parse_month, previous_month};
use crate::view::comment_block;

#[derive(ramhorns::Content)]
struct MonthPage<'a> {
    month: &'a str,
    posts: &'a str,
    previous: &'a str,
}

/// Month overview: every post of the month with its description, comment and
/// raw link, plus a link to the previous month's overview.
pub struct MonthRenderer {
    pub template: Arc<Template<'static>>,
}

impl MonthRenderer {
    pub fn new(template: Arc<Template<'static>>) -> MonthRenderer {
        MonthRenderer { template }
    }

    /// `posts` are expected newest first. The previous month link is computed,
    /// whether or not that page exists.
    pub fn render(&self, month: &str, posts: &[Arc<Post>]) -> Result<String> {
        let first_day = parse_month(month)?;
        let label = format_month_label(&first_day);
        let previous = format!("{}{}", previous_month(&first_day), PAGE_EXTENSION);

        let posts_html: String = posts.iter()
            .map(|post| Self::render_summary(post))
            .collect();

        Ok(self.template.render(&MonthPage {
            month: label.as_str(),
            posts: posts_html.as_str(),
            previous: previous.as_str(),
        }))
    }

    fn render_summary(post: &Post) -> String {
        format!(
            "\n<h3>{title} <a href=\"posts/{name}\">→</a></h3>\n<p class=\"hug\">{description}</p>\n{comment}\n<a href=\"{link}\">{link}</a>\n\n",
            title = post.title,
            name = post.name,
            description = post.description,
            comment = comment_block(post.comment.as_deref()),
            link = post.link,
        )
    }
}
