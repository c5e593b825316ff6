use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::graph_store::GraphStore;

type LocatorObject = GeomWithData<[f64; 2], usize>;

/// Spatial index over city positions for closest-city lookups.
pub struct CityLocator {
    tree: RTree<LocatorObject>,
}

impl CityLocator {
    pub fn build_from_store(store: &GraphStore) -> CityLocator {
        let tree = RTree::bulk_load(
            store
                .cities()
                .iter()
                .enumerate()
                .map(|(node, city)| {
                    LocatorObject::new([city.position.x, city.position.y], node)
                })
                .collect(),
        );

        CityLocator { tree }
    }

    pub fn nearest(&self, x: f64, y: f64) -> Option<usize> {
        self.tree
            .nearest_neighbor(&[x, y])
            .map(|object| object.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_store::GraphStore;
    use crate::test_map_utils::test_map::{TestMapCity, test_map_info, test_store};

    #[test]
    fn nearest_returns_the_closest_city() {
        let store = test_store();
        let locator = CityLocator::build_from_store(&store);

        assert_eq!(locator.nearest(0.5, 0.5), Some(TestMapCity::Whiterun.node()));
        assert_eq!(locator.nearest(39.0, 29.0), Some(TestMapCity::Winterhold.node()));
    }

    #[test]
    fn nearest_on_an_empty_map_returns_none() {
        let store = GraphStore::build(test_map_info(), Vec::new(), &[]);
        let locator = CityLocator::build_from_store(&store);

        assert_eq!(locator.nearest(0.0, 0.0), None);
    }
}
