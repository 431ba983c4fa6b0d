use std::collections::BTreeSet;
use std::sync::Arc;

use spdlog::info;

use crate::aggregator::{posts_in_month, tag_post_mapping};
use crate::config::{Config, Paths};
use crate::error::{Error, Result};
use crate::freshness::is_new_post;
use crate::post::{month_of, output_name, record_name, Post};
use crate::post_cache::PostCache;
use crate::post_list::PostList;
use crate::site_writer::{copy_assets, copy_month_to_index, create_output_dirs, write_page};
use crate::view::month_renderer::MonthRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::tag_renderer::TagRenderer;
use crate::view::{TemplateStore, MONTH_TEMPLATE_FILE, POST_TEMPLATE_FILE, TAG_TEMPLATE_FILE};

/// What one run produced.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildSummary {
    /// Record names whose post page was (re)generated.
    pub new_posts: Vec<String>,
    /// Months whose overview page was written, sorted.
    pub months: Vec<String>,
    /// Month copied to `index.html`, if any.
    pub index_month: Option<String>,
    /// Tags whose page was written.
    pub tags: Vec<String>,
}

/// One build of the site. Owns the record and template caches, so they live
/// exactly as long as the run.
pub struct Generator {
    paths: Paths,
    posts: PostCache,
    templates: TemplateStore,
}

impl Generator {
    pub fn new(config: &Config) -> Generator {
        let paths = config.paths.clone();
        let posts = PostCache::new(PostList::new(paths.posts_dir.clone()), config.cache.post_capacity);
        let templates = TemplateStore::new(paths.template_dir.clone(), config.cache.template_capacity);
        Generator {
            paths,
            posts,
            templates,
        }
    }

    pub fn run(&mut self) -> Result<BuildSummary> {
        create_output_dirs(&self.paths)?;
        copy_assets(&self.paths.assets_dir, &self.paths.assets_output_dir())?;

        let mut new_posts = vec![];
        for (name, modified) in self.posts.list_with_timestamps()? {
            if is_new_post(&self.paths.post_output_dir(), &name, modified)? {
                new_posts.push(name);
            }
        }
        self.write_posts_files(&new_posts)?;

        let mut months = BTreeSet::new();
        for name in &new_posts {
            let month = month_of(name).ok_or_else(|| Error::InvalidMonth(name.clone()))?;
            months.insert(month.to_string());
        }
        let months: Vec<String> = months.into_iter().collect();
        self.write_monthly_overview_files(&months)?;

        // The earliest touched month becomes the landing page, not the latest.
        let index_month = months.first().cloned();
        if let Some(ref month) = index_month {
            info!("Copying {} overview to the index page", month);
            copy_month_to_index(&self.paths.output_dir, month)?;
        }

        let tags = self.write_tag_pages()?;

        Ok(BuildSummary {
            new_posts,
            months,
            index_month,
            tags,
        })
    }

    fn write_posts_files(&mut self, new_posts: &[String]) -> Result<()> {
        for name in new_posts {
            info!("Generating new post HTML: {}", output_name(name));
            self.write_post_file(name)?;
        }
        Ok(())
    }

    fn write_post_file(&mut self, name: &str) -> Result<()> {
        let post = self.posts.read_post(name)?;
        let renderer = PostRenderer::new(self.templates.get(POST_TEMPLATE_FILE)?);
        let html = renderer.render(&post);
        write_page(&self.paths.post_output_dir().join(&post.name), &html)
    }

    fn write_monthly_overview_files(&mut self, months: &[String]) -> Result<()> {
        for month in months {
            self.write_monthly_overview_file(month)?;
        }
        Ok(())
    }

    fn write_monthly_overview_file(&mut self, month: &str) -> Result<()> {
        let posts = posts_in_month(&mut self.posts, month)?;
        let renderer = MonthRenderer::new(self.templates.get(MONTH_TEMPLATE_FILE)?);
        let html = renderer.render(month, &posts)?;
        info!("Writing {} overview with {} posts", month, posts.len());
        write_page(&self.paths.output_dir.join(format!("{}.html", month)), &html)
    }

    /// Tag pages are always rebuilt from the whole corpus.
    fn write_tag_pages(&mut self) -> Result<Vec<String>> {
        let names = self.posts.post_list.retrieve_names()?;
        let mapping = tag_post_mapping(&mut self.posts, &names)?;

        let mut tags = Vec::with_capacity(mapping.len());
        for (tag, pages) in mapping {
            self.write_tag_page(&tag, &pages)?;
            tags.push(tag);
        }
        info!("Rebuilt {} tag pages", tags.len());
        Ok(tags)
    }

    fn write_tag_page(&mut self, tag: &str, pages: &[String]) -> Result<()> {
        let posts: Vec<Arc<Post>> = pages.iter()
            .map(|page| self.posts.read_post(&record_name(page)))
            .collect::<Result<_>>()?;
        let renderer = TagRenderer::new(self.templates.get(TAG_TEMPLATE_FILE)?);
        let html = renderer.render(tag, &posts);
        write_page(&self.paths.tags_output_dir().join(format!("{}.html", tag)), &html)
    }
}

/// Builds the site described by `config` with fresh caches.
pub fn build_site(config: &Config) -> Result<BuildSummary> {
    Generator::new(config).run()
}
