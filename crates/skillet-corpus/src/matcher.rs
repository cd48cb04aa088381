use serde::Serialize;
use std::collections::HashSet;

use crate::corpus::Corpus;

// Scoring weights. Trigger keywords are the selection contract skill
// authors write, so they outrank name hits; taxonomy fields outrank
// free-text description hits.
const TRIGGER_WEIGHT: u32 = 4;
const NAME_WEIGHT: u32 = 3;
const LANGUAGE_WEIGHT: u32 = 2;
const CATEGORY_WEIGHT: u32 = 2;
const DESCRIPTION_WEIGHT: u32 = 1;
const PHRASE_BONUS: u32 = 2;

/// A ranked match for a free-text query against the corpus.
#[derive(Debug, Clone, Serialize)]
pub struct SkillMatch {
    /// Name of the matched skill.
    pub name: String,
    /// Relevance score (higher is better).
    pub score: u32,
    /// Query terms that hit at least one field.
    pub matched: Vec<String>,
}

/// Lowercase alphanumeric terms of a text.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Rank corpus skills against a free-text query.
///
/// Each query term scores once per field it hits; multi-word trigger
/// phrases fully contained in the query score a bonus on top. Only skills
/// with a nonzero score are returned, ranked by score then name, capped
/// at `limit`.
pub fn match_skills(corpus: &Corpus, query: &str, limit: usize) -> Vec<SkillMatch> {
    let mut terms = tokenize(query);
    let mut seen = HashSet::new();
    terms.retain(|t| seen.insert(t.clone()));
    if terms.is_empty() {
        return Vec::new();
    }

    let query_lc = query.to_lowercase();
    let mut matches = Vec::new();

    for skill in corpus.list() {
        let trigger_terms: Vec<Vec<String>> =
            skill.triggers.iter().map(|t| tokenize(t)).collect();
        let name_terms = tokenize(&skill.name);
        let description_terms = tokenize(&skill.description);
        let category_terms = skill
            .category
            .as_deref()
            .map(tokenize)
            .unwrap_or_default();

        let mut score = 0u32;
        let mut matched = Vec::new();

        for term in &terms {
            let mut hit = false;

            if trigger_terms.iter().any(|tt| tt.iter().any(|t| t == term)) {
                score += TRIGGER_WEIGHT;
                hit = true;
            }
            if name_terms.iter().any(|t| t == term) {
                score += NAME_WEIGHT;
                hit = true;
            }
            if skill.languages.iter().any(|l| l.eq_ignore_ascii_case(term)) {
                score += LANGUAGE_WEIGHT;
                hit = true;
            }
            if category_terms.iter().any(|t| t == term) {
                score += CATEGORY_WEIGHT;
                hit = true;
            }
            if description_terms.iter().any(|t| t == term) {
                score += DESCRIPTION_WEIGHT;
                hit = true;
            }

            if hit {
                matched.push(term.clone());
            }
        }

        for trigger in &skill.triggers {
            let phrase = trigger.to_lowercase();
            if phrase.contains(' ') && query_lc.contains(&phrase) {
                score += PHRASE_BONUS;
            }
        }

        if score > 0 {
            matches.push(SkillMatch {
                name: skill.name.clone(),
                score,
                matched,
            });
        }
    }

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::Skill;
    use std::path::{Path, PathBuf};

    fn skill(
        name: &str,
        description: &str,
        triggers: &[&str],
        languages: &[&str],
        category: Option<&str>,
    ) -> Skill {
        Skill {
            name: name.into(),
            description: description.into(),
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
            languages: languages.iter().map(|s| s.to_string()).collect(),
            category: category.map(String::from),
            body: String::new(),
            file_path: PathBuf::new(),
            base_dir: PathBuf::new(),
        }
    }

    fn sample_corpus() -> Corpus {
        let mut corpus = Corpus::empty(Path::new("/corpus"));
        corpus.register(skill(
            "playwright-automation",
            "Browser automation and E2E testing with Playwright",
            &["playwright", "browser automation", "e2e"],
            &["TypeScript", "JavaScript"],
            Some("e2e-testing"),
        ));
        corpus.register(skill(
            "jest-unit",
            "Unit testing JavaScript with Jest",
            &["jest", "unit test", "mocking"],
            &["JavaScript"],
            Some("unit-testing"),
        ));
        corpus.register(skill(
            "k6-performance",
            "Load and performance testing with k6",
            &["k6", "load testing", "performance"],
            &["JavaScript"],
            Some("performance-testing"),
        ));
        corpus
    }

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Run Playwright E2E-tests!"),
            vec!["run", "playwright", "e2e", "tests"]
        );
        assert!(tokenize("  ...  ").is_empty());
    }

    #[test]
    fn trigger_hit_ranks_first() {
        let corpus = sample_corpus();
        let matches = match_skills(&corpus, "set up playwright tests", 5);
        assert_eq!(matches[0].name, "playwright-automation");
        assert!(matches[0].matched.contains(&"playwright".to_string()));
    }

    #[test]
    fn phrase_bonus_applies() {
        let corpus = sample_corpus();
        let with_phrase = match_skills(&corpus, "browser automation", 5);
        let without_phrase = match_skills(&corpus, "automation browser", 5);
        assert_eq!(with_phrase[0].name, "playwright-automation");
        assert!(with_phrase[0].score > without_phrase[0].score);
    }

    #[test]
    fn no_hits_is_empty() {
        let corpus = sample_corpus();
        assert!(match_skills(&corpus, "quantum chromodynamics", 5).is_empty());
        assert!(match_skills(&corpus, "", 5).is_empty());
    }

    #[test]
    fn limit_caps_results() {
        let corpus = sample_corpus();
        // "javascript" hits the languages of all three skills.
        let matches = match_skills(&corpus, "javascript", 2);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn duplicate_query_terms_score_once() {
        let corpus = sample_corpus();
        let once = match_skills(&corpus, "jest", 5);
        let twice = match_skills(&corpus, "jest jest", 5);
        assert_eq!(once[0].score, twice[0].score);
    }

    #[test]
    fn ties_break_by_name() {
        let mut corpus = Corpus::empty(Path::new("/corpus"));
        corpus.register(skill("bbb", "d", &["shared"], &[], None));
        corpus.register(skill("aaa", "d", &["shared"], &[], None));
        let matches = match_skills(&corpus, "shared", 5);
        assert_eq!(matches[0].name, "aaa");
        assert_eq!(matches[1].name, "bbb");
    }

    #[test]
    fn language_and_category_hits_score() {
        let corpus = sample_corpus();
        let matches = match_skills(&corpus, "performance", 5);
        assert_eq!(matches[0].name, "k6-performance");
        // trigger + name + category + description all hit "performance"
        assert!(matches[0].score >= TRIGGER_WEIGHT + NAME_WEIGHT + CATEGORY_WEIGHT);
    }
}
