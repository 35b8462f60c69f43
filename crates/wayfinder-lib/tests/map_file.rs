use std::fs;

use serde_json::json;
use tempfile::tempdir;
use wayfinder_lib::{fixtures, load_road_map, save_road_map, shortest_path, Error, RoadMap};

#[test]
fn non_map_values_are_invalid_graphs() {
    for value in [json!(3.5), json!(2), json!([]), json!(null), json!({})] {
        let error = RoadMap::from_json_value(value.clone()).expect_err("not a map");
        assert!(
            matches!(error, Error::InvalidGraph { .. }),
            "{value} should be an invalid graph, got {error}"
        );
    }
}

#[test]
fn asymmetric_roads_are_invalid_graphs() {
    let value = json!({
        "intersections": { "0": [0.0, 0.0], "1": [1.0, 0.0] },
        "roads": [[1], []]
    });
    let error = RoadMap::from_json_value(value).expect_err("asymmetric");
    assert!(error.to_string().contains("no matching road 1 -> 0"));
}

#[test]
fn road_lists_must_match_intersections() {
    let value = json!({
        "intersections": { "0": [0.0, 0.0], "1": [1.0, 0.0] },
        "roads": [[1]]
    });
    let error = RoadMap::from_json_value(value).expect_err("missing road list");
    assert!(error.to_string().contains("expected 2 road lists"));
}

#[test]
fn intersection_keys_must_be_contiguous_integers() {
    let value = json!({
        "intersections": { "zero": [0.0, 0.0] },
        "roads": [[]]
    });
    assert!(matches!(
        RoadMap::from_json_value(value),
        Err(Error::InvalidGraph { .. })
    ));

    let value = json!({
        "intersections": { "0": [0.0, 0.0], "2": [1.0, 0.0] },
        "roads": [[], []]
    });
    let error = RoadMap::from_json_value(value).expect_err("gap in ids");
    assert!(error.to_string().contains("contiguous"));

    for duplicate in ["00", " 0"] {
        let value = json!({
            "intersections": { "0": [0.0, 0.0], duplicate: [5.0, 5.0] },
            "roads": [[], []]
        });
        let error = RoadMap::from_json_value(value).expect_err("duplicate id");
        assert!(matches!(error, Error::InvalidGraph { .. }));
        assert!(error.to_string().contains("duplicates id 0"), "{error}");
    }
}

#[test]
fn malformed_json_is_a_syntax_error() {
    let error = RoadMap::from_json_str("{ \"intersections\": ").expect_err("truncated");
    assert!(matches!(error, Error::Json(_)));
}

#[test]
fn parses_a_small_map() {
    let text = r#"{
        "intersections": { "0": [0.0, 0.0], "1": [3.0, 4.0], "2": [9.0, 9.0] },
        "roads": [[1], [0], []]
    }"#;
    let map = RoadMap::from_json_str(text).expect("valid map");

    assert_eq!(map.node_count(), 3);
    assert_eq!(map.road_count(), 1);
    assert_eq!(map.isolated_nodes(), vec![2]);
    assert_eq!(shortest_path(&map, 0, 1).unwrap(), vec![0, 1]);
    assert!(shortest_path(&map, 0, 2).unwrap().is_empty());
}

#[test]
fn saved_fixture_loads_back_with_the_same_routes() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("map-40.json");

    save_road_map(fixtures::map_40(), &path).expect("save map");
    let loaded = load_road_map(&path).expect("load map");

    assert_eq!(loaded.node_count(), 40);
    assert_eq!(loaded.road_count(), fixtures::map_40().road_count());
    assert_eq!(
        shortest_path(&loaded, 8, 24).unwrap(),
        vec![8, 14, 16, 37, 12, 17, 10, 24]
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("absent.json");

    let error = load_road_map(&path).expect_err("missing file");
    assert!(matches!(error, Error::MapNotFound { .. }));
}

#[test]
fn file_with_wrong_shape_is_an_invalid_graph() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("numbers.json");
    fs::write(&path, "[1, 2, 3]").expect("write file");

    assert!(matches!(
        load_road_map(&path),
        Err(Error::InvalidGraph { .. })
    ));
}
