use std::sync::Arc;
use std::time::SystemTime;

use spdlog::debug;

use crate::content_cache::ContentCache;
use crate::error::Result;
use crate::post::Post;
use crate::post_list::PostList;

/// Record store: parses posts from the posts directory and keeps them for the
/// rest of the run, keyed by record file name.
pub struct PostCache {
    pub post_list: PostList,
    posts: ContentCache<Post>,
}

impl PostCache {
    pub fn new(post_list: PostList, capacity: usize) -> PostCache {
        PostCache {
            post_list,
            posts: ContentCache::new(capacity),
        }
    }

    pub fn read_post(&mut self, name: &str) -> Result<Arc<Post>> {
        let path = self.post_list.root_dir.join(name);
        self.posts.get_or(name, || {
            debug!("Parsing record {}", path.display());
            Post::from(&path)
        })
    }

    pub fn list_with_timestamps(&self) -> Result<Vec<(String, SystemTime)>> {
        self.post_list.retrieve_files()
    }
}
