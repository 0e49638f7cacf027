use std::collections::{HashSet, VecDeque};

use tracing::warn;

use crate::traits::SuggestionFetcher;

/// Bounded breadth-first traversal over the suggestion graph.
///
/// The graph is externally controlled and may contain cycles or unbounded
/// branching (a service can suggest the base query back). Two bounds keep
/// the walk finite: `depth_limit` caps how far from the base a query may
/// be expanded, `max_iterations` caps total work regardless of branching
/// factor. The seen-check happens on pop, not on push — an entry may be
/// enqueued several times but is expanded at most once.
pub struct KeywordExplorer {
    depth_limit: usize,
    max_iterations: usize,
}

impl KeywordExplorer {
    pub fn new(depth_limit: usize, max_iterations: usize) -> Self {
        Self {
            depth_limit,
            max_iterations,
        }
    }

    /// Defaults matching the production configuration.
    pub fn with_defaults() -> Self {
        Self::new(2, 1000)
    }

    /// Explore suggestions reachable from `base`. Returns the deduplicated
    /// set of every suggestion seen, including ones that were never
    /// themselves expanded. Fetch failures count as zero suggestions.
    pub async fn explore(
        &self,
        fetcher: &dyn SuggestionFetcher,
        base: &str,
    ) -> HashSet<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<(String, usize)> = VecDeque::new();
        frontier.push_back((base.to_string(), 0));

        let mut results: Vec<String> = Vec::new();
        let mut iterations = 0usize;

        while !frontier.is_empty() && iterations < self.max_iterations {
            iterations += 1;

            let (query, depth) = frontier.pop_front().expect("frontier checked non-empty");

            if seen.contains(&query) || depth > self.depth_limit {
                continue;
            }
            seen.insert(query.clone());

            let suggestions = match fetcher.suggestions(&query).await {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    warn!(query = %query, error = %e, "suggestion fetch failed");
                    Vec::new()
                }
            };

            // Only traversal nodes are deduplicated here; the accumulator
            // is deduplicated once at the end.
            results.extend(suggestions.iter().cloned());

            if depth < self.depth_limit {
                for suggestion in suggestions {
                    if !seen.contains(&suggestion) {
                        frontier.push_back((suggestion, depth + 1));
                    }
                }
            }
        }

        if iterations >= self.max_iterations && !frontier.is_empty() {
            warn!(
                base = %base,
                max_iterations = self.max_iterations,
                "hit iteration limit, returning partial results"
            );
        }

        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSuggestions;

    #[tokio::test]
    async fn depth_zero_expands_only_the_base() {
        let fetcher = MockSuggestions::new()
            .on("base", &["a", "b"])
            .on("a", &["deep"]);

        let explorer = KeywordExplorer::new(0, 100);
        let result = explorer.explore(&fetcher, "base").await;

        assert_eq!(fetcher.calls(), vec!["base"]);
        let expected: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn no_query_is_expanded_twice_despite_cycles() {
        // base suggests itself and "a"; "a" suggests base back.
        let fetcher = MockSuggestions::new()
            .on("base", &["base", "a"])
            .on("a", &["base"]);

        let explorer = KeywordExplorer::new(5, 100);
        let result = explorer.explore(&fetcher, "base").await;

        let mut calls = fetcher.calls();
        calls.sort();
        assert_eq!(calls, vec!["a", "base"]);

        let expected: HashSet<String> = ["base", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn seen_count_never_exceeds_max_iterations() {
        // Each query fans out to three fresh children, unbounded depth.
        let fetcher = MockSuggestions::fanout(3);

        let explorer = KeywordExplorer::new(100, 7);
        explorer.explore(&fetcher, "root").await;

        assert!(fetcher.calls().len() <= 7);
    }

    #[tokio::test]
    async fn iteration_cap_is_soft_and_returns_accumulated_results() {
        let fetcher = MockSuggestions::fanout(3);

        let explorer = KeywordExplorer::new(100, 2);
        let result = explorer.explore(&fetcher, "root").await;

        // Two expansions, three suggestions each, all distinct.
        assert_eq!(result.len(), 6);
    }

    #[tokio::test]
    async fn suggestions_beyond_depth_are_collected_but_not_expanded() {
        let fetcher = MockSuggestions::new()
            .on("base", &["mid"])
            .on("mid", &["leaf"])
            .on("leaf", &["too deep"]);

        let explorer = KeywordExplorer::new(1, 100);
        let result = explorer.explore(&fetcher, "base").await;

        // "leaf" came back from "mid" (depth 1) and is included, but was
        // never expanded itself.
        assert!(result.contains("leaf"));
        assert!(!result.contains("too deep"));
        let mut calls = fetcher.calls();
        calls.sort();
        assert_eq!(calls, vec!["base", "mid"]);
    }

    #[tokio::test]
    async fn fetch_failures_are_swallowed_as_zero_suggestions() {
        let fetcher = MockSuggestions::new()
            .on("base", &["ok", "broken"])
            .on("ok", &["fine"])
            .failing("broken");

        let explorer = KeywordExplorer::new(2, 100);
        let result = explorer.explore(&fetcher, "base").await;

        assert!(result.contains("fine"));
        assert!(result.contains("broken"));
    }
}
