use std::sync::Arc;

use ramhorns::Template;

use crate::post::Post;

#[derive(ramhorns::Content)]
struct TagPage<'a> {
    tag: &'a str,
    posts: String,
}

pub struct TagRenderer {
    pub template: Arc<Template<'static>>,
}

impl TagRenderer {
    pub fn new(template: Arc<Template<'static>>) -> TagRenderer {
        TagRenderer { template }
    }

    /// Tag pages live in `tags/`, next to `posts/`.
    pub fn render(&self, tag: &str, posts: &[Arc<Post>]) -> String {
        let links: Vec<String> = posts.iter()
            .map(|post| format!(r#"<a href="../posts/{}">{}</a>"#, post.name, post.title))
            .collect();

        self.template.render(&TagPage {
            tag,
            posts: links.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tag() {
        let template = Template::new("TAG=[{{tag}}] POSTS=[{{{posts}}}]".to_string()).unwrap();
        let renderer = TagRenderer::new(Arc::new(template));
        let posts: Vec<Arc<Post>> = ["foo", "bar"].iter()
            .map(|title| Arc::new(Post {
                title: title.to_string(),
                description: String::new(),
                link: String::new(),
                tags: vec!["rust".to_string()],
                comment: None,
                name: format!("2024-01-10-{}.html", title),
            }))
            .collect();

        let res = renderer.render("rust", &posts);
        assert_eq!(res, r##"TAG=[rust] POSTS=[<a href="../posts/2024-01-10-foo.html">foo</a>
<a href="../posts/2024-01-10-bar.html">bar</a>]"##);
    }
}
