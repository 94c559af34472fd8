use crate::modules::job_normalization::domain::services::pattern_registry::NormalizationConfig;
use crate::modules::job_normalization::domain::traits::QualitySubject;

/// Location placeholder some sources emit instead of leaving the field empty
const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone)]
struct ScoreWeights {
    title: f64,
    seniority: f64,
    company: f64,
    description: f64,
    rich_description: f64,
    location: f64,
    salary: f64,
    any_skill: f64,
    many_skills: f64,
    completeness: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title: 0.15,
            seniority: 0.05,
            company: 0.10,
            description: 0.20,
            rich_description: 0.10,
            location: 0.10,
            salary: 0.15,
            any_skill: 0.05,
            many_skills: 0.05,
            completeness: 0.05,
        }
    }
}

#[derive(Debug, Clone)]
struct Thresholds {
    min_title_length: usize,
    min_company_length: usize,
    min_description_length: usize,
    rich_description_length: usize,
    many_skills: usize,
}

/// Heuristic completeness score in [0.0, 1.0].
///
/// Works on anything implementing `QualitySubject`, so the raw input and the
/// normalized record are scored by the same rules.
#[derive(Debug, Clone)]
pub struct QualityScorer {
    weights: ScoreWeights,
    thresholds: Thresholds,
    seniority_keywords: Vec<String>,
    required_fields: Vec<String>,
}

impl QualityScorer {
    pub fn new(config: &NormalizationConfig) -> Self {
        Self {
            weights: ScoreWeights::default(),
            thresholds: Thresholds {
                min_title_length: config.min_title_length,
                min_company_length: 3,
                min_description_length: config.min_description_length,
                rich_description_length: config.rich_description_length,
                many_skills: 5,
            },
            seniority_keywords: config
                .seniority_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            required_fields: config.required_fields.clone(),
        }
    }

    pub fn score(&self, job: &dyn QualitySubject) -> f64 {
        let parts = [
            self.title_score(job.title_text()),
            self.company_score(job.company_text()),
            self.description_score(job.description_text()),
            self.location_score(job.location_text()),
            self.salary_score(job.has_salary()),
            self.skills_score(job.skill_count()),
            self.completeness_score(job),
        ];

        let total: f64 = parts.iter().sum();
        (self.clamp(total, 0.0, 1.0) * 10_000.0).round() / 10_000.0
    }

    fn title_score(&self, title: &str) -> f64 {
        let mut score = 0.0;
        if title.chars().count() >= self.thresholds.min_title_length {
            score += self.weights.title;
        }

        let lower = title.to_lowercase();
        if self
            .seniority_keywords
            .iter()
            .any(|keyword| lower.contains(keyword.as_str()))
        {
            score += self.weights.seniority;
        }
        score
    }

    fn company_score(&self, company: &str) -> f64 {
        if company.chars().count() >= self.thresholds.min_company_length {
            self.weights.company
        } else {
            0.0
        }
    }

    fn description_score(&self, description: &str) -> f64 {
        let length = description.chars().count();
        let mut score = 0.0;
        if length >= self.thresholds.min_description_length {
            score += self.weights.description;
        }
        if length >= self.thresholds.rich_description_length {
            score += self.weights.rich_description;
        }
        score
    }

    fn location_score(&self, location: &str) -> f64 {
        if !location.is_empty() && location != UNKNOWN_LOCATION {
            self.weights.location
        } else {
            0.0
        }
    }

    fn salary_score(&self, has_salary: bool) -> f64 {
        if has_salary {
            self.weights.salary
        } else {
            0.0
        }
    }

    fn skills_score(&self, skill_count: usize) -> f64 {
        let mut score = 0.0;
        if skill_count >= 1 {
            score += self.weights.any_skill;
        }
        if skill_count >= self.thresholds.many_skills {
            score += self.weights.many_skills;
        }
        score
    }

    fn completeness_score(&self, job: &dyn QualitySubject) -> f64 {
        if self.required_fields.is_empty() {
            return 0.0;
        }

        let present = self
            .required_fields
            .iter()
            .filter(|field| !job.required_field(field).is_empty())
            .count();

        self.weights.completeness * present as f64 / self.required_fields.len() as f64
    }

    fn clamp(&self, value: f64, min: f64, max: f64) -> f64 {
        value.max(min).min(max)
    }
}
