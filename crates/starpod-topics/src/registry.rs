//! Keyword registry for topic scoring.
//!
//! Topics are kept in an explicit ordered list so that discovery output is
//! reproducible. The "building-with-llms" topic has its own, larger phrase
//! list spanning agents, retrieval and vendor names.

use std::sync::OnceLock;

use starpod_types::KeywordSet;

use crate::error::TopicsError;

/// Identifier of the distinguished LLM topic.
pub const LLM_TOPIC: &str = "building-with-llms";

/// Phrases for the "building-with-llms" topic.
pub const LLM_KEYWORDS: &[&str] = &[
    "llm",
    "large language model",
    "language model",
    "gpt",
    "openai",
    "claude",
    "anthropic",
    "agent",
    "agentic",
    "workflow",
    "ai agent",
    "langchain",
    "langgraph",
    "llamaindex",
    "autogen",
    "crewai",
    "framework",
    "tool",
    "prompt engineering",
    "fine-tuning",
    "rag",
    "retrieval augmented",
    "vector database",
    "embeddings",
    "semantic search",
    "ai application",
    "ai tool",
    "ai framework",
    "ai library",
    "ai sdk",
    "ai platform",
    "ai service",
    "ai api",
    "ai model",
    "transformer",
    "neural network",
    "machine learning",
    "deep learning",
    "natural language processing",
    "nlp",
    "chatbot",
    "assistant",
    "copilot",
    "ai coding",
    "code generation",
    "ai development",
    "ai engineering",
];

/// General topic table, in discovery order.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "react",
        &["react", "jsx", "component", "hooks", "next.js", "remix", "gatsby"],
    ),
    ("vue", &["vue", "nuxt", "vuex", "pinia", "composition api"]),
    ("angular", &["angular", "typescript", "rxjs", "ngrx"]),
    ("svelte", &["svelte", "sveltekit", "svelte store"]),
    (
        "typescript",
        &["typescript", "ts", "type system", "generics", "interface"],
    ),
    (
        "testing",
        &[
            "test",
            "testing",
            "jest",
            "vitest",
            "cypress",
            "playwright",
            "tdd",
            "bdd",
            "unit test",
            "e2e",
        ],
    ),
    (
        "css",
        &[
            "css",
            "tailwind",
            "styled-components",
            "sass",
            "scss",
            "css-in-js",
            "styling",
        ],
    ),
    (
        "performance",
        &[
            "performance",
            "optimization",
            "lighthouse",
            "core web vitals",
            "bundle size",
            "lazy loading",
        ],
    ),
    (
        "security",
        &[
            "security",
            "authentication",
            "authorization",
            "oauth",
            "jwt",
            "encryption",
            "xss",
            "csrf",
            "sql injection",
        ],
    ),
    (
        "devops",
        &[
            "devops",
            "ci/cd",
            "docker",
            "kubernetes",
            "github actions",
            "deployment",
            "infrastructure",
        ],
    ),
    (
        "database",
        &[
            "database",
            "sql",
            "postgresql",
            "mysql",
            "mongodb",
            "redis",
            "prisma",
            "drizzle",
            "orm",
        ],
    ),
    (
        "api",
        &["api", "rest", "graphql", "rpc", "endpoint", "fetch", "axios"],
    ),
    (
        "webassembly",
        &["webassembly", "wasm", "rust", "go", "assemblyscript"],
    ),
    (
        "ai-ml",
        &[
            "ai",
            "artificial intelligence",
            "machine learning",
            "ml",
            "neural network",
            "deep learning",
            "tensorflow",
            "pytorch",
            "model",
        ],
    ),
    (
        "accessibility",
        &[
            "accessibility",
            "a11y",
            "aria",
            "screen reader",
            "wcag",
            "semantic html",
        ],
    ),
    (
        "mobile",
        &[
            "mobile",
            "responsive",
            "pwa",
            "progressive web app",
            "ios",
            "android",
            "react native",
        ],
    ),
    (
        "architecture",
        &[
            "architecture",
            "design pattern",
            "microservices",
            "monolith",
            "scalability",
            "system design",
        ],
    ),
];

/// Extra phrases used by the accessibility preview list.
pub const ACCESSIBILITY_EXTRA_KEYWORDS: &[&str] = &[
    "inclusive design",
    "accessible",
    "keyboard navigation",
    "focus management",
];

/// Extra phrases used by the AI/ML preview list.
pub const AI_ML_EXTRA_KEYWORDS: &[&str] = &["training", "inference", "data science", "mlops"];

/// A topic identifier and its keyword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Topic identifier, e.g. `"ai-ml"`
    pub id: String,
    /// Keyword phrases
    pub keywords: KeywordSet,
}

/// Ordered lookup from topic identifier to keyword set.
#[derive(Debug, Clone)]
pub struct KeywordRegistry {
    topics: Vec<Topic>,
    llm: KeywordSet,
}

impl KeywordRegistry {
    /// Build a registry from an ordered topic table and the LLM phrase list.
    pub fn new(topics: Vec<Topic>, llm: KeywordSet) -> Self {
        Self { topics, llm }
    }

    /// The built-in registry, built once per process.
    pub fn builtin() -> &'static KeywordRegistry {
        static REGISTRY: OnceLock<KeywordRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let topics = TOPIC_KEYWORDS
                .iter()
                .map(|(id, keywords)| Topic {
                    id: (*id).to_string(),
                    keywords: KeywordSet::new(keywords.iter()),
                })
                .collect();
            KeywordRegistry::new(topics, KeywordSet::new(LLM_KEYWORDS.iter()))
        })
    }

    /// General topics in declaration order (excludes the LLM topic).
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// The "building-with-llms" phrase list.
    pub fn llm_keywords(&self) -> &KeywordSet {
        &self.llm
    }

    /// Look up a topic's keywords.
    ///
    /// Returns `None` for an unknown identifier; callers treat that as
    /// "no rule".
    pub fn get(&self, topic_id: &str) -> Option<&KeywordSet> {
        if topic_id == LLM_TOPIC {
            return Some(&self.llm);
        }
        self.topics
            .iter()
            .find(|t| t.id == topic_id)
            .map(|t| &t.keywords)
    }

    /// Like [`get`](Self::get), but an unknown identifier is an error.
    pub fn require(&self, topic_id: &str) -> Result<&KeywordSet, TopicsError> {
        self.get(topic_id)
            .ok_or_else(|| TopicsError::UnknownTopic(topic_id.to_string()))
    }

    /// Keywords for a registry topic, or ad-hoc `phrases` when no topic is
    /// given.
    ///
    /// Fails when the topic is unknown or no usable phrase remains.
    pub fn select<S: AsRef<str>>(
        &self,
        topic_id: Option<&str>,
        phrases: &[S],
    ) -> Result<KeywordSet, TopicsError> {
        let keywords = match topic_id {
            Some(id) => self.require(id)?.clone(),
            None => KeywordSet::new(phrases.iter().map(AsRef::as_ref)),
        };
        if keywords.is_empty() {
            return Err(TopicsError::InvalidInput(
                "no topic or keyword phrases given".to_string(),
            ));
        }
        Ok(keywords)
    }

    /// All identifiers: general topics in order, then the LLM topic.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.topics
            .iter()
            .map(|t| t.id.as_str())
            .chain(std::iter::once(LLM_TOPIC))
    }
}

/// Keywords for the accessibility preview (registry list plus extras).
pub fn accessibility_preview_keywords(registry: &KeywordRegistry) -> KeywordSet {
    registry
        .get("accessibility")
        .cloned()
        .unwrap_or_default()
        .extended(ACCESSIBILITY_EXTRA_KEYWORDS.iter())
}

/// Keywords for the AI/ML preview (registry list plus extras).
pub fn ai_ml_preview_keywords(registry: &KeywordRegistry) -> KeywordSet {
    registry
        .get("ai-ml")
        .cloned()
        .unwrap_or_default()
        .extended(AI_ML_EXTRA_KEYWORDS.iter())
}
