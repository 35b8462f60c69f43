//! Built-in fixture maps.
//!
//! `map-10` has ten intersections in two components (0..=7 and the pair
//! 8/9). `map-40` is a single forty-intersection component. Both are used by
//! the pinned route tests, the benches and the CLI `--fixture` option.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

use crate::geometry::Point;
use crate::graph::{NodeId, RoadMap};

/// Names accepted by [`by_name`].
pub const FIXTURE_NAMES: [&str; 2] = ["map-10", "map-40"];

const MAP_10_POSITIONS: [(f64, f64); 10] = [
    (0.7798606835438107, 0.6922727646627362),
    (0.7647837074641568, 0.3252670836724646),
    (0.7155217893995438, 0.20026498027300055),
    (0.7076566826610747, 0.3278339270610988),
    (0.8325506249953353, 0.02310946309985762),
    (0.49016747075266875, 0.5464878695400415),
    (0.8820353070895344, 0.6791919587749445),
    (0.46247219371675075, 0.6258061621642713),
    (0.11622158839385677, 0.11236327488812581),
    (0.1285377678230034, 0.3285840695698353),
];

const MAP_10_ROADS: [&[NodeId]; 10] = [
    &[5, 6, 7],
    &[2, 3, 4],
    &[1, 3, 4],
    &[1, 2, 4, 5],
    &[1, 2, 3],
    &[0, 3, 7],
    &[0],
    &[0, 5],
    &[9],
    &[8],
];

const MAP_40_POSITIONS: [(f64, f64); 40] = [
    (0.7801603911549438, 0.49474860768712914),
    (0.5249831588690298, 0.14953665513987202),
    (0.8085335344099086, 0.7696330846542071),
    (0.2599134798656856, 0.14485659826020547),
    (0.7353838928272886, 0.8089961609345658),
    (0.09088671576431506, 0.7222846879290787),
    (0.313999018186756, 0.01876171413125327),
    (0.6824813442515916, 0.8016111783687677),
    (0.20128789391122526, 0.43196344222361227),
    (0.8551947714242674, 0.9011339078096633),
    (0.7581736589784409, 0.24026772497187532),
    (0.25311953895059136, 0.10321622277398101),
    (0.4813859169876731, 0.5006237737207431),
    (0.9112422509614865, 0.1839028760606296),
    (0.04580558670435442, 0.5886703168399895),
    (0.4582523173083307, 0.1735506267461867),
    (0.12939557977525573, 0.690016328140396),
    (0.607698913404794, 0.362322730884702),
    (0.719569201584275, 0.13985272363426526),
    (0.8860336256842246, 0.891868301175821),
    (0.4238357358399233, 0.026771817842421997),
    (0.8252497121120052, 0.9532681441921305),
    (0.47415009287034726, 0.7353428557575755),
    (0.26253385360950576, 0.9768234503830939),
    (0.9363713903322148, 0.13022993020357043),
    (0.6243437191127235, 0.21665962535031133),
    (0.5572917679006295, 0.2083567880838434),
    (0.7482655725962591, 0.12631654071213483),
    (0.6435799740880603, 0.5488515965193208),
    (0.34509802713919313, 0.8800306496459869),
    (0.021423673670808885, 0.4666482714834408),
    (0.640952694324525, 0.3232711412508066),
    (0.17440205342790494, 0.9528527425842739),
    (0.1332965908314021, 0.3996510641743197),
    (0.583993110207876, 0.42704536740474663),
    (0.3073865727705063, 0.09186645974288632),
    (0.740625863119245, 0.68128520136847),
    (0.3345284735051981, 0.6569436279895382),
    (0.17972981733780147, 0.999395685828547),
    (0.6315322816286787, 0.7311657634689946),
];

const MAP_40_ROADS: [&[NodeId]; 40] = [
    &[17, 28, 31, 34, 36],
    &[6, 15, 17, 18, 20, 25, 26, 27, 31, 35],
    &[4, 7, 9, 19, 21, 36, 39],
    &[6, 11, 15, 20, 35],
    &[2, 7, 9, 19, 21, 36, 39],
    &[14, 16, 32],
    &[1, 3, 11, 15, 20, 35],
    &[2, 4, 9, 19, 21, 22, 36, 39],
    &[14, 30, 33],
    &[2, 4, 7, 19, 21, 36],
    &[13, 17, 18, 24, 25, 26, 27, 31],
    &[3, 6, 15, 20, 35],
    &[17, 22, 28, 31, 34, 37],
    &[10, 18, 24, 27],
    &[5, 8, 16, 30, 33],
    &[1, 3, 6, 11, 17, 20, 25, 26, 31, 35],
    &[5, 14, 30, 37],
    &[0, 1, 10, 12, 15, 18, 25, 26, 28, 31, 34],
    &[1, 10, 13, 17, 24, 25, 26, 27, 31],
    &[2, 4, 7, 9, 21],
    &[1, 3, 6, 11, 15, 26, 35],
    &[2, 4, 7, 9, 19],
    &[7, 12, 29, 37, 39],
    &[29, 32, 38],
    &[10, 13, 18, 27],
    &[1, 10, 15, 17, 18, 26, 27, 31, 34],
    &[1, 10, 15, 17, 18, 20, 25, 27, 31, 34],
    &[1, 10, 13, 18, 24, 25, 26, 31],
    &[0, 12, 17, 31, 34, 36, 39],
    &[22, 23, 32, 37, 38],
    &[8, 14, 16, 33],
    &[0, 1, 10, 12, 15, 17, 18, 25, 26, 27, 28, 34],
    &[5, 23, 29, 38],
    &[8, 14, 30],
    &[0, 12, 17, 25, 26, 28, 31],
    &[1, 3, 6, 11, 15, 20],
    &[0, 2, 4, 7, 9, 28],
    &[12, 16, 22, 29],
    &[23, 29, 32],
    &[2, 4, 7, 22, 28],
];

static MAP_10: Lazy<RoadMap> = Lazy::new(|| assemble(&MAP_10_POSITIONS, &MAP_10_ROADS));
static MAP_40: Lazy<RoadMap> = Lazy::new(|| assemble(&MAP_40_POSITIONS, &MAP_40_ROADS));

/// Ten-intersection fixture map.
pub fn map_10() -> &'static RoadMap {
    &MAP_10
}

/// Forty-intersection fixture map.
pub fn map_40() -> &'static RoadMap {
    &MAP_40
}

/// Look up a fixture by name (`map-10` or `map-40`).
pub fn by_name(name: &str) -> Option<&'static RoadMap> {
    match name {
        "map-10" => Some(map_10()),
        "map-40" => Some(map_40()),
        _ => None,
    }
}

fn assemble(positions: &[(f64, f64)], roads: &[&[NodeId]]) -> RoadMap {
    let positions: BTreeMap<NodeId, Point> = (0..)
        .zip(positions.iter().copied().map(Point::from))
        .collect();
    let adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> = (0..)
        .zip(
            roads
                .iter()
                .map(|neighbours| neighbours.iter().copied().collect::<BTreeSet<_>>()),
        )
        .collect();

    RoadMap::new(positions, adjacency).expect("built-in fixture maps are symmetric")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_expected_sizes() {
        assert_eq!(map_10().node_count(), 10);
        assert_eq!(map_10().road_count(), 12);
        assert_eq!(map_40().node_count(), 40);
        assert!(map_40().isolated_nodes().is_empty());
    }

    #[test]
    fn lookup_by_name() {
        for name in FIXTURE_NAMES {
            assert!(by_name(name).is_some(), "{name} should resolve");
        }
        assert!(by_name("map-99").is_none());
    }
}
