use crate::shared::errors::{AppError, AppResult};

/// Field names the required-field completeness check knows how to read
pub const KNOWN_FIELDS: [&str; 7] = [
    "title",
    "company",
    "location",
    "description",
    "source",
    "source_url",
    "external_id",
];

const ENV_PREFIX: &str = "NORMALIZER_";

/// A labelled keyword group used for category tagging
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub label: String,
    pub keywords: Vec<String>,
}

impl CategoryGroup {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: to_strings(keywords),
        }
    }
}

/// Configuration for job normalization.
///
/// Externalizes vocabularies and thresholds so the pipeline is configurable
/// and testable. Changing it means building a new `PatternRegistry`.
#[derive(Debug, Clone)]
pub struct NormalizationConfig {
    // Title normalization
    /// Phrases removed from titles (case-insensitive, whole word)
    pub title_stopwords: Vec<String>,

    /// Token replacements applied in order (case-insensitive, whole word)
    pub title_replacements: Vec<(String, String)>,

    // Location normalization
    pub remote_keywords: Vec<String>,
    pub hybrid_keywords: Vec<String>,

    // Enrichment
    /// Skill lexicon. Must not be empty.
    pub skill_keywords: Vec<String>,

    /// Category groups in detection order
    pub category_groups: Vec<CategoryGroup>,

    /// Title keywords that earn the seniority bonus in the quality score
    pub seniority_keywords: Vec<String>,

    // Quality thresholds
    pub min_title_length: usize,
    pub min_description_length: usize,
    /// Description length that earns the richness bonus
    pub rich_description_length: usize,
    pub required_fields: Vec<String>,

    // Limits
    /// Longest accepted value for any single raw field, in characters
    pub max_field_length: usize,

    /// Days between posting and expiry
    pub expiry_days: i64,
}

impl NormalizationConfig {
    /// Creates a new configuration with sensible production defaults
    pub fn new() -> Self {
        Self {
            title_stopwords: to_strings(&["urgent", "immediate", "asap", "hiring now", "apply now"]),
            title_replacements: vec![
                ("sr.".to_string(), "senior".to_string()),
                ("jr.".to_string(), "junior".to_string()),
                ("dev".to_string(), "developer".to_string()),
                ("eng".to_string(), "engineer".to_string()),
            ],

            remote_keywords: to_strings(&[
                "remote",
                "work from home",
                "wfh",
                "telecommute",
                "distributed",
            ]),
            hybrid_keywords: to_strings(&["hybrid", "flexible", "remote-friendly"]),

            skill_keywords: to_strings(&[
                "python", "javascript", "java", "react", "node.js", "angular", "vue.js",
                "typescript", "go", "rust", "kotlin", "swift", "c++", "c#", "php", "ruby",
                "scala", "r", "matlab", "sql", "nosql", "mongodb", "postgresql", "mysql",
                "redis", "elasticsearch", "docker", "kubernetes", "aws", "azure", "gcp",
                "terraform", "jenkins", "git", "github", "gitlab", "jira", "agile", "scrum",
                "machine learning", "ai", "data science", "blockchain", "devops",
            ]),

            category_groups: default_category_groups(),

            seniority_keywords: to_strings(&["senior", "lead", "principal"]),

            min_title_length: 5,
            min_description_length: 50,
            rich_description_length: 500,
            required_fields: to_strings(&["title", "company", "source_url"]),

            max_field_length: 100_000,
            expiry_days: 30,
        }
    }

    /// Creates a minimal configuration for testing
    #[cfg(test)]
    pub fn minimal() -> Self {
        Self {
            title_stopwords: vec![],
            title_replacements: vec![],
            remote_keywords: to_strings(&["remote"]),
            hybrid_keywords: to_strings(&["hybrid"]),
            skill_keywords: to_strings(&["rust"]),
            category_groups: vec![],
            seniority_keywords: vec![],
            min_title_length: 1,
            min_description_length: 1,
            rich_description_length: 10,
            required_fields: to_strings(&["title"]),
            max_field_length: 1_000,
            expiry_days: 30,
        }
    }

    /// Default configuration with `NORMALIZER_*` overrides from the process
    /// environment
    pub fn from_env() -> AppResult<Self> {
        Self::new().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, then validate
    pub fn with_overrides<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(value) = var("MIN_TITLE_LENGTH") {
            self.min_title_length = parse_count("MIN_TITLE_LENGTH", &value)?;
        }
        if let Some(value) = var("MIN_DESCRIPTION_LENGTH") {
            self.min_description_length = parse_count("MIN_DESCRIPTION_LENGTH", &value)?;
        }
        if let Some(value) = var("MAX_FIELD_LENGTH") {
            self.max_field_length = parse_count("MAX_FIELD_LENGTH", &value)?;
        }
        if let Some(value) = var("SKILL_KEYWORDS") {
            self.skill_keywords = split_list(&value);
        }
        if let Some(value) = var("REQUIRED_FIELDS") {
            self.required_fields = split_list(&value);
        }

        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.skill_keywords.is_empty() {
            return Err(AppError::ConfigurationError(
                "Skill lexicon must not be empty".to_string(),
            ));
        }

        let lists: [(&str, &Vec<String>); 5] = [
            ("title_stopwords", &self.title_stopwords),
            ("remote_keywords", &self.remote_keywords),
            ("hybrid_keywords", &self.hybrid_keywords),
            ("skill_keywords", &self.skill_keywords),
            ("seniority_keywords", &self.seniority_keywords),
        ];
        for (name, list) in lists {
            if list.iter().any(|k| k.trim().is_empty()) {
                return Err(AppError::ConfigurationError(format!(
                    "{} contains an empty keyword",
                    name
                )));
            }
        }

        if self.remote_keywords.is_empty() {
            return Err(AppError::ConfigurationError(
                "remote_keywords must not be empty".to_string(),
            ));
        }

        if self
            .title_replacements
            .iter()
            .any(|(from, _)| from.trim().is_empty())
        {
            return Err(AppError::ConfigurationError(
                "title_replacements contains an empty token".to_string(),
            ));
        }

        for group in &self.category_groups {
            if group.label.trim().is_empty() || group.keywords.is_empty() {
                return Err(AppError::ConfigurationError(format!(
                    "Category group '{}' needs a label and at least one keyword",
                    group.label
                )));
            }
            if group.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(AppError::ConfigurationError(format!(
                    "Category group '{}' contains an empty keyword",
                    group.label
                )));
            }
        }

        if self.required_fields.is_empty() {
            return Err(AppError::ConfigurationError(
                "required_fields must not be empty".to_string(),
            ));
        }
        if let Some(unknown) = self
            .required_fields
            .iter()
            .find(|f| !KNOWN_FIELDS.contains(&f.as_str()))
        {
            return Err(AppError::ConfigurationError(format!(
                "Unknown required field '{}'",
                unknown
            )));
        }

        if self.max_field_length == 0 {
            return Err(AppError::ConfigurationError(
                "max_field_length must be > 0".to_string(),
            ));
        }

        if self.expiry_days < 0 {
            return Err(AppError::ConfigurationError(format!(
                "expiry_days cannot be negative, got {}",
                self.expiry_days
            )));
        }

        Ok(())
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for NormalizationConfig to make test setup easier
#[derive(Default)]
pub struct NormalizationConfigBuilder {
    config: NormalizationConfig,
}

impl NormalizationConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: NormalizationConfig::new(),
        }
    }

    pub fn title_stopwords(mut self, words: Vec<String>) -> Self {
        self.config.title_stopwords = words;
        self
    }

    pub fn title_replacements(mut self, replacements: Vec<(String, String)>) -> Self {
        self.config.title_replacements = replacements;
        self
    }

    pub fn remote_keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.remote_keywords = keywords;
        self
    }

    pub fn hybrid_keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.hybrid_keywords = keywords;
        self
    }

    pub fn skill_keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.skill_keywords = keywords;
        self
    }

    pub fn category_groups(mut self, groups: Vec<CategoryGroup>) -> Self {
        self.config.category_groups = groups;
        self
    }

    pub fn min_title_length(mut self, length: usize) -> Self {
        self.config.min_title_length = length;
        self
    }

    pub fn min_description_length(mut self, length: usize) -> Self {
        self.config.min_description_length = length;
        self
    }

    pub fn required_fields(mut self, fields: Vec<String>) -> Self {
        self.config.required_fields = fields;
        self
    }

    pub fn max_field_length(mut self, length: usize) -> Self {
        self.config.max_field_length = length;
        self
    }

    pub fn expiry_days(mut self, days: i64) -> Self {
        self.config.expiry_days = days;
        self
    }

    pub fn build(self) -> AppResult<NormalizationConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn default_category_groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::new(
            "Software Development",
            &["python", "javascript", "java", "react", "node"],
        ),
        CategoryGroup::new(
            "Data Science",
            &["data", "analytics", "machine learning", "ai"],
        ),
        CategoryGroup::new(
            "DevOps",
            &["devops", "infrastructure", "cloud", "aws", "azure"],
        ),
        CategoryGroup::new(
            "Mobile Development",
            &["mobile", "ios", "android", "flutter", "react native"],
        ),
        CategoryGroup::new("Frontend", &["frontend", "front-end", "ui", "ux", "design"]),
        CategoryGroup::new(
            "Backend",
            &["backend", "back-end", "api", "server", "database"],
        ),
        CategoryGroup::new(
            "Management",
            &["manager", "lead", "director", "management"],
        ),
        CategoryGroup::new("Security", &["security", "cybersecurity", "infosec"]),
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_count(name: &str, value: &str) -> AppResult<usize> {
    value.trim().parse::<usize>().map_err(|e| {
        AppError::ConfigurationError(format!("{}{} must be a count: {}", ENV_PREFIX, name, e))
    })
}
