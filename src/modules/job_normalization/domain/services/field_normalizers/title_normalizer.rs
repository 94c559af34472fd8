use regex::{NoExpand, Regex};

/// Transformation that can be applied to a title
///
/// Each transformation is composable and testable in isolation.
pub trait TitleTransformation: Send + Sync {
    fn transform(&self, title: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Normalizes whitespace (collapses multiple spaces, trims)
#[derive(Debug, Clone)]
pub struct NormalizeWhitespaceTransform;

impl TitleTransformation for NormalizeWhitespaceTransform {
    fn transform(&self, title: &str) -> String {
        title.split_whitespace().collect::<Vec<&str>>().join(" ")
    }

    fn name(&self) -> &'static str {
        "NormalizeWhitespace"
    }
}

/// Removes filler phrases such as "urgent" or "apply now"
#[derive(Debug, Clone)]
pub struct RemovePhrasesTransform {
    patterns: Vec<Regex>,
}

impl RemovePhrasesTransform {
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }
}

impl TitleTransformation for RemovePhrasesTransform {
    fn transform(&self, title: &str) -> String {
        let mut result = title.to_string();
        for pattern in &self.patterns {
            result = pattern.replace_all(&result, "").into_owned();
        }
        result
    }

    fn name(&self) -> &'static str {
        "RemovePhrases"
    }
}

/// Expands abbreviations ("sr." -> "senior"), applied in declaration order
#[derive(Debug, Clone)]
pub struct ReplaceTokensTransform {
    replacements: Vec<(Regex, String)>,
}

impl ReplaceTokensTransform {
    pub fn new(replacements: Vec<(Regex, String)>) -> Self {
        Self { replacements }
    }
}

impl TitleTransformation for ReplaceTokensTransform {
    fn transform(&self, title: &str) -> String {
        let mut result = title.to_string();
        for (pattern, replacement) in &self.replacements {
            result = pattern
                .replace_all(&result, NoExpand(replacement))
                .into_owned();
        }
        result
    }

    fn name(&self) -> &'static str {
        "ReplaceTokens"
    }
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A letter starts a word unless it follows another letter (or an apostrophe
/// inside a word), so "front-end dev" becomes "Front-End Dev".
#[derive(Debug, Clone)]
pub struct TitleCaseTransform;

impl TitleTransformation for TitleCaseTransform {
    fn transform(&self, title: &str) -> String {
        let mut result = String::with_capacity(title.len());
        let mut in_word = false;
        let mut prev: Option<char> = None;

        for c in title.chars() {
            if c.is_alphabetic() {
                if in_word {
                    result.extend(c.to_lowercase());
                } else {
                    result.extend(c.to_uppercase());
                }
                in_word = true;
            } else {
                in_word = c == '\'' && prev.is_some_and(char::is_alphabetic);
                result.push(c);
            }
            prev = Some(c);
        }

        result
    }

    fn name(&self) -> &'static str {
        "TitleCase"
    }
}

/// Title normalizer that applies a pipeline of transformations
///
/// Uses the builder pattern for composability and testability.
pub struct TitleNormalizer {
    transformations: Vec<Box<dyn TitleTransformation>>,
}

impl TitleNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// The job title pipeline: collapse whitespace, drop filler phrases,
    /// expand abbreviations, collapse again, title-case
    pub fn job_title_pipeline(
        stopwords: Vec<Regex>,
        replacements: Vec<(Regex, String)>,
    ) -> Self {
        Self::new()
            .with_normalize_whitespace()
            .with_remove_phrases(stopwords)
            .with_replace_tokens(replacements)
            .with_normalize_whitespace()
            .with_title_case()
    }

    /// Add whitespace normalization transformation
    pub fn with_normalize_whitespace(mut self) -> Self {
        self.transformations
            .push(Box::new(NormalizeWhitespaceTransform));
        self
    }

    /// Add phrase removal transformation
    pub fn with_remove_phrases(mut self, patterns: Vec<Regex>) -> Self {
        self.transformations
            .push(Box::new(RemovePhrasesTransform::new(patterns)));
        self
    }

    /// Add token replacement transformation
    pub fn with_replace_tokens(mut self, replacements: Vec<(Regex, String)>) -> Self {
        self.transformations
            .push(Box::new(ReplaceTokensTransform::new(replacements)));
        self
    }

    /// Add title case transformation
    pub fn with_title_case(mut self) -> Self {
        self.transformations.push(Box::new(TitleCaseTransform));
        self
    }

    /// Apply all transformations to the title
    pub fn normalize(&self, title: &str) -> String {
        let mut result = title.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    /// Get the number of transformations in the pipeline
    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
