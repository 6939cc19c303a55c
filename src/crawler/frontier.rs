//! Frontier of pending crawl tasks
//!
//! The frontier replaces call-stack recursion with an explicit work list:
//! - Depth-first: a LIFO stack; a page's links are pushed in reverse so the
//!   first link's whole subtree is explored before its next sibling, the
//!   same order a recursive crawl would produce
//! - Breadth-first: a FIFO queue, level by level from the seed

use crate::config::Traversal;
use std::collections::VecDeque;
use url::Url;

/// A URL waiting to be crawled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    /// The absolute URL to fetch
    pub url: Url,

    /// The crawl's seed URL, used for scope checks and link resolution
    pub base: Url,

    /// Link hops from the seed
    pub depth: u32,
}

impl CrawlTask {
    /// Creates the task for a crawl's seed; the seed is its own base
    pub fn seed(url: Url) -> Self {
        Self {
            base: url.clone(),
            url,
            depth: 0,
        }
    }

    /// Creates a task for a link found on this task's page
    pub fn child(&self, url: Url) -> Self {
        Self {
            url,
            base: self.base.clone(),
            depth: self.depth + 1,
        }
    }
}

/// Work list of crawl tasks with a configurable discipline
#[derive(Debug)]
pub struct Frontier {
    tasks: VecDeque<CrawlTask>,
    traversal: Traversal,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new(traversal: Traversal) -> Self {
        Self {
            tasks: VecDeque::new(),
            traversal,
        }
    }

    /// Adds a single task
    pub fn push(&mut self, task: CrawlTask) {
        self.tasks.push_back(task);
    }

    /// Adds the tasks for one page's links, given in document order
    pub fn push_links(&mut self, tasks: Vec<CrawlTask>) {
        match self.traversal {
            Traversal::DepthFirst => self.tasks.extend(tasks.into_iter().rev()),
            Traversal::BreadthFirst => self.tasks.extend(tasks),
        }
    }

    /// Takes the next task to process
    pub fn next_task(&mut self) -> Option<CrawlTask> {
        match self.traversal {
            Traversal::DepthFirst => self.tasks.pop_back(),
            Traversal::BreadthFirst => self.tasks.pop_front(),
        }
    }

    /// Removes and yields every pending task, in queue order
    pub fn drain(&mut self) -> impl Iterator<Item = CrawlTask> + '_ {
        self.tasks.drain(..)
    }

    /// Number of pending tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}
