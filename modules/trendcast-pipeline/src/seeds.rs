use trendcast_common::TopicsFile;

/// Wildcard marker replaced by each topic inside a prefix template.
const WILDCARD: &str = "*";

/// Cross-product of prefixes and topics into seed queries, prefix-major:
/// all topics under prefix[0], then all topics under prefix[1], and so on.
/// No dedup at this stage.
pub fn seed_queries(topics: &TopicsFile) -> Vec<String> {
    let mut seeds = Vec::with_capacity(topics.search_prefixes.len() * topics.trending_topics.len());
    for prefix in &topics.search_prefixes {
        for topic in &topics.trending_topics {
            seeds.push(prefix.replace(WILDCARD, topic));
        }
    }
    seeds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(trending: &[&str], prefixes: &[&str]) -> TopicsFile {
        TopicsFile {
            trending_topics: trending.iter().map(|s| s.to_string()).collect(),
            search_prefixes: prefixes.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn two_topics_three_prefixes_yield_six_seeds_prefix_major() {
        let seeds = seed_queries(&topics(
            &["TikTok", "Notion"],
            &["how to *", "what is *", "why *"],
        ));
        assert_eq!(
            seeds,
            vec![
                "how to TikTok",
                "how to Notion",
                "what is TikTok",
                "what is Notion",
                "why TikTok",
                "why Notion",
            ]
        );
    }

    #[test]
    fn duplicate_products_are_kept() {
        let seeds = seed_queries(&topics(&["x", "x"], &["* now"]));
        assert_eq!(seeds, vec!["x now", "x now"]);
    }

    #[test]
    fn empty_config_yields_no_seeds() {
        assert!(seed_queries(&TopicsFile::default()).is_empty());
        assert!(seed_queries(&topics(&["TikTok"], &[])).is_empty());
    }
}
