use serde_json::{Map, Value};

/// Assembles the evaluation context for one chunk of one document.
///
/// Sections are emitted as `page`, `site`, `chunk`, `provider`, `embedding`,
/// followed by extra keys in insertion order. Sections that were never set
/// are left out, so templates referencing them resolve to nothing.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    page: Option<Value>,
    site: Option<Value>,
    chunk: Option<Value>,
    provider: Option<Value>,
    embedding: Option<Value>,
    extra: Map<String, Value>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: Value) -> Self {
        self.page = Some(page);
        self
    }

    pub fn site(mut self, site: Value) -> Self {
        self.site = Some(site);
        self
    }

    pub fn chunk(mut self, chunk: Value) -> Self {
        self.chunk = Some(chunk);
        self
    }

    pub fn provider(mut self, provider: Value) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn embedding(mut self, embedding: Value) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Add a top-level key. Keys named like a section are overridden by it.
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Value {
        let mut context = Map::new();
        let sections = [
            ("page", self.page),
            ("site", self.site),
            ("chunk", self.chunk),
            ("provider", self.provider),
            ("embedding", self.embedding),
        ];
        for (key, value) in sections {
            if let Some(value) = value {
                context.insert(key.to_string(), value);
            }
        }
        for (key, value) in self.extra {
            if !context.contains_key(&key) {
                context.insert(key, value);
            }
        }
        Value::Object(context)
    }
}
