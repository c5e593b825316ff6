use crate::graph_store::GraphStore;

/// Autocomplete index over a store's city names. Prefix matches rank before
/// interior matches, ties fall back to ascending city id. Rebuilt together
/// with the store, never updated in place.
pub struct CityIndex {
    entries: Vec<IndexEntry>,
}

struct IndexEntry {
    name_lower: String,
    city_id: u64,
    node: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    Prefix,
    Substring,
}

impl IndexEntry {
    fn rank(&self, query: &str) -> Option<MatchRank> {
        if self.name_lower.starts_with(query) {
            Some(MatchRank::Prefix)
        } else if self.name_lower.contains(query) {
            Some(MatchRank::Substring)
        } else {
            None
        }
    }
}

impl CityIndex {
    pub fn build(store: &GraphStore) -> CityIndex {
        let entries = store
            .cities()
            .iter()
            .enumerate()
            .map(|(node, city)| IndexEntry {
                name_lower: city.name.to_lowercase(),
                city_id: city.id,
                node,
            })
            .collect();

        CityIndex { entries }
    }

    /// Ranked node indexes of the cities matching the query. An empty or
    /// whitespace query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<usize> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut matches: Vec<(MatchRank, u64, usize)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .rank(&query)
                    .map(|rank| (rank, entry.city_id, entry.node))
            })
            .collect();

        matches.sort_by_key(|&(rank, city_id, _)| (rank, city_id));
        matches.truncate(limit);

        matches.into_iter().map(|(_, _, node)| node).collect()
    }
}
