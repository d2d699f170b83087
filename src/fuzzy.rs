//! Closest-match suggestions for website lookups.
//!
//! The store only does exact matching; when that fails, the shell suggests
//! the most similar stored website instead. There is deliberately no
//! similarity cutoff — with at least one candidate the user always gets a
//! suggestion, however distant.

use strsim::normalized_levenshtein;

/// Returns the candidate most similar to `query`, or `None` when there are
/// no candidates at all. Ties resolve to the earlier candidate.
pub fn closest<'a>(query: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let score = normalized_levenshtein(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_picks_best_candidate() {
        let candidates = ["github.com", "gitlab.com", "bitbucket.org"];
        assert_eq!(closest("githib.com", &candidates), Some("github.com"));
        assert_eq!(closest("bitbucket", &candidates), Some("bitbucket.org"));
    }

    #[test]
    fn test_closest_no_candidates() {
        assert_eq!(closest("anything", &[]), None);
    }

    #[test]
    fn test_closest_has_no_cutoff() {
        // Even a hopeless query yields the best available suggestion.
        let candidates = ["github.com"];
        assert_eq!(closest("zzzzzz", &candidates), Some("github.com"));
    }

    #[test]
    fn test_closest_ties_resolve_to_earlier_candidate() {
        let candidates = ["aa.com", "ab.com"];
        assert_eq!(closest("ac.com", &candidates), Some("aa.com"));
    }
}
