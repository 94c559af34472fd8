use regex::{Regex, RegexBuilder};

use super::config::NormalizationConfig;
use crate::log_debug;
use crate::modules::job_normalization::domain::services::classifier::{
    employment_pattern, experience_pattern,
};
use crate::modules::job_normalization::domain::services::field_normalizers::text_cleaner::{
    DISALLOWED_CHARS_PATTERN, MARKUP_PATTERN,
};
use crate::modules::job_normalization::domain::services::field_normalizers::title_normalizer::TitleNormalizer;
use crate::modules::job_normalization::domain::services::salary_extractor::SalaryPatternKind;
use crate::modules::job_normalization::domain::services::section_extractor::{
    BENEFIT_SECTION_PATTERNS, REQUIREMENT_SECTION_PATTERNS,
};
use crate::modules::job_normalization::domain::value_objects::{EmploymentType, ExperienceLevel};
use crate::shared::errors::AppResult;

/// A compiled salary pattern tagged with how its captures are read
#[derive(Debug, Clone)]
pub struct SalaryPattern {
    pub kind: SalaryPatternKind,
    pub regex: Regex,
}

/// Immutable set of compiled matchers shared by every normalization call.
///
/// Built once at startup from a `NormalizationConfig`; there is no mutation
/// API, so it can be shared behind an `Arc` without locking.
pub struct PatternRegistry {
    config: NormalizationConfig,
    title_normalizer: TitleNormalizer,
    remote: Regex,
    hybrid: Option<Regex>,
    salary_patterns: Vec<SalaryPattern>,
    experience_table: Vec<(ExperienceLevel, Regex)>,
    employment_table: Vec<(EmploymentType, Regex)>,
    skills: Regex,
    categories: Vec<(String, Regex)>,
    requirement_sections: Vec<Regex>,
    benefit_sections: Vec<Regex>,
    markup: Regex,
    disallowed_chars: Regex,
}

impl PatternRegistry {
    /// Compile every pattern group. Fails on invalid config or a pattern that
    /// does not compile; nothing partially built is returned.
    pub fn build(config: &NormalizationConfig) -> AppResult<Self> {
        config.validate()?;

        let title_stopwords = config
            .title_stopwords
            .iter()
            .map(|word| compile(&keyword_pattern(word, r"\s+")))
            .collect::<AppResult<Vec<_>>>()?;

        let title_replacements = config
            .title_replacements
            .iter()
            .map(|(from, to)| Ok((compile(&keyword_pattern(from, r"\s+"))?, to.clone())))
            .collect::<AppResult<Vec<_>>>()?;

        let title_normalizer =
            TitleNormalizer::job_title_pipeline(title_stopwords, title_replacements);

        let remote = compile(&keyword_alternation(&config.remote_keywords, r"\s*"))?;
        let hybrid = if config.hybrid_keywords.is_empty() {
            None
        } else {
            Some(compile(&keyword_alternation(&config.hybrid_keywords, r"\s*"))?)
        };

        let salary_patterns = SalaryPatternKind::ALL
            .iter()
            .map(|kind| {
                Ok(SalaryPattern {
                    kind: *kind,
                    regex: compile(kind.pattern())?,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let experience_table = ExperienceLevel::ALL
            .iter()
            .map(|level| Ok((*level, compile(experience_pattern(*level))?)))
            .collect::<AppResult<Vec<_>>>()?;

        let employment_table = EmploymentType::ALL
            .iter()
            .map(|kind| Ok((*kind, compile(employment_pattern(*kind))?)))
            .collect::<AppResult<Vec<_>>>()?;

        let skills = compile(&keyword_alternation(&config.skill_keywords, r"\s+"))?;

        let categories = config
            .category_groups
            .iter()
            .map(|group| {
                Ok((
                    group.label.clone(),
                    compile(&keyword_alternation(&group.keywords, r"\s+"))?,
                ))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let requirement_sections = REQUIREMENT_SECTION_PATTERNS
            .iter()
            .map(|p| compile(p))
            .collect::<AppResult<Vec<_>>>()?;
        let benefit_sections = BENEFIT_SECTION_PATTERNS
            .iter()
            .map(|p| compile(p))
            .collect::<AppResult<Vec<_>>>()?;

        let registry = Self {
            config: config.clone(),
            title_normalizer,
            remote,
            hybrid,
            salary_patterns,
            experience_table,
            employment_table,
            skills,
            categories,
            requirement_sections,
            benefit_sections,
            markup: Regex::new(MARKUP_PATTERN)?,
            disallowed_chars: Regex::new(DISALLOWED_CHARS_PATTERN)?,
        };

        log_debug!(
            "Pattern registry built: {} skills, {} categories, {} salary patterns",
            config.skill_keywords.len(),
            registry.categories.len(),
            registry.salary_patterns.len()
        );

        Ok(registry)
    }

    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    pub fn title_normalizer(&self) -> &TitleNormalizer {
        &self.title_normalizer
    }

    pub fn remote(&self) -> &Regex {
        &self.remote
    }

    pub fn hybrid(&self) -> Option<&Regex> {
        self.hybrid.as_ref()
    }

    pub fn salary_patterns(&self) -> &[SalaryPattern] {
        &self.salary_patterns
    }

    pub fn experience_table(&self) -> &[(ExperienceLevel, Regex)] {
        &self.experience_table
    }

    pub fn employment_table(&self) -> &[(EmploymentType, Regex)] {
        &self.employment_table
    }

    pub fn skills(&self) -> &Regex {
        &self.skills
    }

    pub fn categories(&self) -> &[(String, Regex)] {
        &self.categories
    }

    pub fn requirement_sections(&self) -> &[Regex] {
        &self.requirement_sections
    }

    pub fn benefit_sections(&self) -> &[Regex] {
        &self.benefit_sections
    }

    pub fn markup(&self) -> &Regex {
        &self.markup
    }

    pub fn disallowed_chars(&self) -> &Regex {
        &self.disallowed_chars
    }
}

impl std::fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRegistry")
            .field("skills", &self.config.skill_keywords.len())
            .field("categories", &self.categories.len())
            .field("salary_patterns", &self.salary_patterns.len())
            .finish()
    }
}

fn compile(pattern: &str) -> AppResult<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Regex source for one literal keyword.
///
/// Inner whitespace becomes `whitespace`; `\b` is only added on a side that
/// starts or ends with a word character, so `sr.` and `c++` still match.
pub(crate) fn keyword_pattern(keyword: &str, whitespace: &str) -> String {
    let keyword = keyword.trim().to_lowercase();
    let body = keyword
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(whitespace);

    let lead = keyword.chars().next().is_some_and(is_word_char);
    let trail = keyword.chars().last().is_some_and(is_word_char);

    format!(
        "{}{}{}",
        if lead { r"\b" } else { "" },
        body,
        if trail { r"\b" } else { "" }
    )
}

/// Alternation over keywords, longest first so overlapping keywords prefer
/// the most specific match
pub(crate) fn keyword_alternation(keywords: &[String], whitespace: &str) -> String {
    let mut sorted: Vec<&String> = keywords.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternatives = sorted
        .iter()
        .map(|k| keyword_pattern(k, whitespace))
        .collect::<Vec<_>>()
        .join("|");

    format!("(?:{})", alternatives)
}
