//! One language record per glottocode

use crate::concepts::{coverage, ConceptList};
use crate::models::Language;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Keep the best-covered record of every glottocode.
///
/// Candidates are ranked by coverage of the master concept list, highest
/// first, with ties broken by language id. Records without a glottocode are
/// keyed by their id. The result is in ranked order.
pub fn select_languages(languages: Vec<Language>, concepts: &ConceptList) -> Vec<Language> {
    let glosses = concepts.glosses();
    let mut ranked: Vec<(f64, Language)> = languages
        .into_iter()
        .map(|lang| (coverage(&lang, &glosses), lang))
        .collect();
    ranked.sort_by(|(cov_a, a), (cov_b, b)| {
        cov_b
            .partial_cmp(cov_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut seen: HashSet<String> = HashSet::new();
    ranked
        .into_iter()
        .filter_map(|(cov, lang)| {
            let key = lang.glottocode.clone().unwrap_or_else(|| lang.id.clone());
            if seen.insert(key) {
                Some(lang)
            } else {
                debug!(
                    "Dropping duplicate {} ({}) with coverage {:.2}",
                    lang.id, lang.dataset, cov
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::ConceptInfo;
    use crate::models::Concept;

    fn concepts() -> ConceptList {
        ConceptList::from(
            (1..=10)
                .map(|n| ConceptInfo::new(format!("C{}", n), n, "1"))
                .collect::<Vec<_>>(),
        )
    }

    fn lang(id: &str, glottocode: Option<&str>, realized: usize) -> Language {
        Language {
            id: id.into(),
            glottocode: glottocode.map(String::from),
            concepts: (1..=realized)
                .map(|n| Concept::new(format!("C{}", n), &["x"]))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keeps_best_coverage_per_glottocode() {
        let selected = select_languages(
            vec![
                lang("a-sparse", Some("abcd1234"), 6),
                lang("a-full", Some("abcd1234"), 9),
                lang("other", Some("efgh5678"), 3),
            ],
            &concepts(),
        );
        let ids: Vec<&str> = selected.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a-full", "other"]);
    }

    #[test]
    fn test_equal_coverage_breaks_by_id() {
        let selected = select_languages(
            vec![
                lang("zeta", Some("abcd1234"), 5),
                lang("alpha", Some("abcd1234"), 5),
            ],
            &concepts(),
        );
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "alpha");
    }

    #[test]
    fn test_missing_glottocode_keyed_by_id() {
        let selected = select_languages(
            vec![lang("x", None, 2), lang("y", None, 2), lang("x", None, 1)],
            &concepts(),
        );
        let ids: Vec<&str> = selected.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
    }
}
