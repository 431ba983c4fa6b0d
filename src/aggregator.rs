use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::Result;
use crate::post::Post;
use crate::post_cache::PostCache;

/// Tag -> output file names of the posts carrying it, in scan order.
pub type TagMap = BTreeMap<String, Vec<String>>;

/// Every post whose record name starts with `month`, newest first. Rescans
/// the posts directory on every call.
pub fn posts_in_month(posts: &mut PostCache, month: &str) -> Result<Vec<Arc<Post>>> {
    let names = posts.post_list.retrieve_month(month)?;
    names.iter()
        .map(|name| posts.read_post(name))
        .collect()
}

/// Groups the posts of `record_names` by tag. A tag listed twice on one post
/// lists that post twice.
pub fn tag_post_mapping(posts: &mut PostCache, record_names: &[String]) -> Result<TagMap> {
    let mut tags = TagMap::new();
    for name in record_names {
        let post = posts.read_post(name)?;
        for tag in &post.tags {
            tags.entry(tag.clone())
                .or_default()
                .push(post.name.clone());
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::post_list::PostList;

    fn record(title: &str, tags: &str) -> String {
        format!("[{}]\ndescription = D\nlink = http://x\ntags = {}\n", title, tags)
    }

    fn corpus(records: &[(&str, String)]) -> (TempDir, PostCache) {
        let dir = TempDir::new().unwrap();
        for (name, content) in records {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let cache = PostCache::new(PostList::new(dir.path().to_path_buf()), 100);
        (dir, cache)
    }

    #[test]
    fn test_posts_in_month_matches_prefix_only() {
        let (_dir, mut cache) = corpus(&[
            ("2024-02-05-feb.ini", record("Feb", "a")),
            ("2024-03-01-first.ini", record("First", "a")),
            ("2024-03-15-second.ini", record("Second", "a")),
        ]);

        let march: Vec<String> = posts_in_month(&mut cache, "2024-03").unwrap()
            .iter().map(|p| p.title.clone()).collect();
        assert_eq!(march, ["Second", "First"]);

        let feb: Vec<String> = posts_in_month(&mut cache, "2024-02").unwrap()
            .iter().map(|p| p.title.clone()).collect();
        assert_eq!(feb, ["Feb"]);
    }

    #[test]
    fn test_tag_post_mapping() {
        let (_dir, mut cache) = corpus(&[
            ("2024-01-01-one.ini", record("One", "rust, web")),
            ("2024-01-02-two.ini", record("Two", "web")),
            ("2024-01-03-three.ini", record("Three", "rust, rust")),
        ]);

        let names = cache.post_list.retrieve_names().unwrap();
        let tags = tag_post_mapping(&mut cache, &names).unwrap();

        assert_eq!(tags.keys().collect::<Vec<_>>(), ["rust", "web"]);
        assert_eq!(tags["rust"], ["2024-01-01-one.html", "2024-01-03-three.html", "2024-01-03-three.html"]);
        assert_eq!(tags["web"], ["2024-01-01-one.html", "2024-01-02-two.html"]);
    }

    #[test]
    fn test_broken_record_fails_mapping() {
        let (_dir, mut cache) = corpus(&[
            ("2024-01-01-one.ini", record("One", "rust")),
            ("2024-01-02-broken.ini", "not a record".to_string()),
        ]);

        let names = cache.post_list.retrieve_names().unwrap();
        assert!(tag_post_mapping(&mut cache, &names).is_err());
    }
}
