//! Discovery of addressable paths for template autocompletion.

use std::collections::HashSet;

use feruca::{Collator, Locale, Tailoring};
use indexmap::IndexSet;
use serde_json::Value;

use crate::config::EnumerateConfig;

/// Every path reachable from `source`, at most `limit` of them.
///
/// Container paths are listed as well as leaves. Only the first five
/// elements of each array are explored. The result is deduplicated and
/// sorted for display.
///
/// ```
/// use payload_template::collect_template_paths;
/// use serde_json::json;
///
/// let paths = collect_template_paths(&json!({ "chunk": { "text": "hi" }, "tags": ["a"] }), 50);
/// assert_eq!(paths, vec!["chunk", "chunk.text", "tags", "tags[0]"]);
/// ```
pub fn collect_template_paths(source: &Value, limit: usize) -> Vec<String> {
    collect_template_paths_with_config(source, &EnumerateConfig::with_limit(limit))
}

/// [`collect_template_paths`] with explicit bounds.
pub fn collect_template_paths_with_config(source: &Value, config: &EnumerateConfig) -> Vec<String> {
    let mut walker = PathWalker {
        config,
        paths: IndexSet::new(),
        visited: HashSet::new(),
    };
    walker.visit(source, String::new(), 0);

    let mut paths: Vec<String> = walker.paths.into_iter().collect();
    let mut collator = display_collator();
    paths.sort_by(|a, b| collator.collate(a, b));
    paths
}

struct PathWalker<'c> {
    config: &'c EnumerateConfig,
    paths: IndexSet<String>,
    /// Containers already entered, by address.
    visited: HashSet<*const Value>,
}

impl PathWalker<'_> {
    fn is_full(&self) -> bool {
        self.paths.len() >= self.config.limit
    }

    fn visit(&mut self, node: &Value, path: String, depth: usize) {
        if self.is_full() {
            return;
        }
        if !path.is_empty() {
            self.paths.insert(path.clone());
        }

        match node {
            Value::Array(items) => {
                if !self.enter(node, depth) {
                    return;
                }
                for (index, item) in items.iter().take(self.config.array_sample).enumerate() {
                    if self.is_full() {
                        break;
                    }
                    self.visit(item, format!("{path}[{index}]"), depth + 1);
                }
            }
            Value::Object(map) => {
                if !self.enter(node, depth) {
                    return;
                }
                for (key, child) in map {
                    if self.is_full() {
                        break;
                    }
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    self.visit(child, child_path, depth + 1);
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    /// Whether the children of `node` should be walked.
    fn enter(&mut self, node: &Value, depth: usize) -> bool {
        depth < self.config.max_depth && self.visited.insert(node as *const Value)
    }
}

/// Root-locale collation with punctuation weighted rather than ignored, so
/// `a-b`, `a_b` and `a.b` keep distinct, stable positions.
fn display_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}
