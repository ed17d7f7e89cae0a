//! Filter on original language.

use crate::traits::{CandidateQuery, Filter};
use anyhow::Result;
use data_loader::Movie;

/// Keeps candidates in one of the requested languages.
///
/// With no languages requested every candidate passes, including ones
/// whose language is unknown.
pub struct LanguageFilter;

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, query: &CandidateQuery) -> Result<Vec<Movie>> {
        let languages = query.preferences.languages();
        if languages.is_empty() {
            return Ok(candidates);
        }

        Ok(candidates
            .into_iter()
            .filter(|movie| {
                movie
                    .language
                    .as_deref()
                    .is_some_and(|language| languages.contains(language))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, movie};
    use crate::preferences::Preferences;

    fn candidates() -> Vec<Movie> {
        let english = movie(1);
        let mut japanese = movie(2);
        japanese.language = Some("ja".to_string());
        let mut unknown = movie(3);
        unknown.language = None;
        vec![english, japanese, unknown]
    }

    #[test]
    fn test_language_filter() {
        let query = CandidateQuery::new(Preferences::builder().languages(["JA", "ko"]).build());
        let filtered = LanguageFilter.apply(candidates(), &query).unwrap();
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn test_no_language_constraint_keeps_everything() {
        let query = CandidateQuery::new(Preferences::default());
        let filtered = LanguageFilter.apply(candidates(), &query).unwrap();
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
    }
}
