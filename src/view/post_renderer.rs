use std::sync::Arc;

use lazy_static::lazy_static;
use ramhorns::Template;
use regex::Regex;

use crate::post::Post;
use crate::view::comment_block;

#[derive(ramhorns::Content)]
struct PostPage<'a> {
    title: &'a str,
    description: &'a str,
    link: &'a str,
    tags: String,
    comment: String,
    meta_tags: String,
    meta_video: String,
    meta_image: String,
}

pub struct PostRenderer {
    pub template: Arc<Template<'static>>,
}

impl PostRenderer {
    pub fn new(template: Arc<Template<'static>>) -> PostRenderer {
        PostRenderer { template }
    }

    pub fn render(&self, post: &Post) -> String {
        let tags: Vec<String> = post.tags.iter()
            .map(|tag| format!(r#"<li><a href="../tags/{tag}.html">{tag}</a></li>"#))
            .collect();
        let meta_tags: Vec<String> = post.tags.iter()
            .map(|tag| format!(r#"<meta property="article:tag" content="{tag}"/>"#))
            .collect();

        self.template.render(&PostPage {
            title: post.title.as_str(),
            description: post.description.as_str(),
            link: post.link.as_str(),
            tags: tags.join("\n"),
            comment: comment_block(post.comment.as_deref()),
            meta_tags: meta_tags.join("\n"),
            meta_video: video_meta_for_link(&post.link),
            meta_image: image_meta_for_link(&post.link),
        })
    }
}

/// Video id of a `https://www.youtube.com/watch?v=<id>` link. The id runs up
/// to the next `=`, so extra query parameters stay attached to it.
fn youtube_id(link: &str) -> Option<&str> {
    lazy_static! {
        static ref YOUTUBE_REGEX: Regex = Regex::new(
            r"^https://www\.youtube\.com/watch\?v=(?P<id>[^=]*)"
        ).unwrap();
    }

    YOUTUBE_REGEX.captures(link)
        .and_then(|cap| cap.name("id"))
        .map(|id| id.as_str())
}

pub fn video_meta_for_link(link: &str) -> String {
    match youtube_id(link) {
        Some(id) => format!(r#"<meta property="og:video" content="https://www.youtube.com/v/{id}" />"#),
        None => String::new(),
    }
}

pub fn image_meta_for_link(link: &str) -> String {
    match youtube_id(link) {
        Some(id) => format!(r#"<meta property="og:image" content="https://img.youtube.com/vi/{id}/hqdefault.jpg" />"#),
        None => String::new(),
    }
}
