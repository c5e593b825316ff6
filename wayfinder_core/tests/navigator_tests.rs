mod common;

use common::{city, connection, map_info};
use wayfinder_core::cancel::CancelToken;
use wayfinder_core::error::RoutingError;
use wayfinder_core::navigator::{Navigator, RouteRequest};
use wayfinder_core::routing::shortest_path_algorithm::ShortestPathOptions;

/// Whiterun (0,0) --5-- Riverwood (3,4) --5-- Ivarstead (6,8), with a longer
/// pair of legs through Rorikstead (6,0) and an isolated Winterhold.
fn skyrim_navigator() -> Navigator {
    let cities = vec![
        city("Whiterun", 1, 0.0, 0.0),
        city("Riverwood", 2, 3.0, 4.0),
        city("Ivarstead", 3, 6.0, 8.0),
        city("Rorikstead", 4, 6.0, 0.0),
        city("Winterhold", 5, 40.0, 30.0),
    ];
    let connections = vec![
        connection(1, 2),
        connection(2, 3),
        connection(1, 4),
        connection(4, 3),
    ];

    Navigator::new(map_info("skyrim"), cities, &connections)
}

fn request(start: &str, end: &str) -> RouteRequest {
    RouteRequest {
        startpoint: String::from(start),
        endpoint: String::from(end),
    }
}

#[test]
fn route_returns_the_primary_and_the_edge_disjoint_alternative() {
    let navigator = skyrim_navigator();

    let result = navigator
        .route(&request("Whiterun", "Ivarstead"))
        .unwrap();

    assert_eq!(result.distance(), 10.0);
    assert_eq!(
        result.route().names(),
        &["Whiterun", "Riverwood", "Ivarstead"]
    );
    assert_eq!(result.alternative_distance(), Some(14.0));
    assert_eq!(
        result.alternative_route().unwrap().names(),
        &["Whiterun", "Rorikstead", "Ivarstead"]
    );
}

#[test]
fn route_to_the_same_city_is_a_trivial_single_node_route() {
    let navigator = skyrim_navigator();

    let result = navigator.route(&request("Whiterun", "Whiterun")).unwrap();

    assert_eq!(result.distance(), 0.0);
    assert_eq!(result.route().names(), &["Whiterun"]);
    assert!(result.alternative_route().is_none());
    assert!(result.alternative_distance().is_none());
}

#[test]
fn an_unknown_city_short_circuits_before_any_search() {
    let navigator = skyrim_navigator();

    let error = navigator
        .route(&request("Whiterun", "Solitude"))
        .unwrap_err();

    assert_eq!(error, RoutingError::CityNotFound(String::from("Solitude")));
}

#[test]
fn city_name_matching_is_case_sensitive() {
    let navigator = skyrim_navigator();

    let error = navigator
        .route(&request("whiterun", "Ivarstead"))
        .unwrap_err();

    assert_eq!(error, RoutingError::CityNotFound(String::from("whiterun")));
}

#[test]
fn disconnected_cities_report_no_path_without_panicking() {
    let navigator = skyrim_navigator();

    let error = navigator
        .route(&request("Whiterun", "Winterhold"))
        .unwrap_err();

    assert_eq!(
        error,
        RoutingError::NoPathFound {
            start: String::from("Whiterun"),
            end: String::from("Winterhold"),
        }
    );
}

#[test]
fn routing_twice_yields_identical_results() {
    let navigator = skyrim_navigator();
    let request = request("Rorikstead", "Riverwood");

    let first = navigator.route(&request).unwrap();
    let second = navigator.route(&request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn a_cancelled_token_aborts_the_search() {
    let navigator = skyrim_navigator();
    let token = CancelToken::new();
    token.cancel();

    let error = navigator
        .route_with_options(
            &request("Whiterun", "Ivarstead"),
            Some(ShortestPathOptions {
                cancellation: Some(token),
            }),
        )
        .unwrap_err();

    assert_eq!(error, RoutingError::Cancelled);
}

#[test]
fn dangling_connections_are_excluded_and_never_routed_through() {
    let cities = vec![city("Whiterun", 1, 0.0, 0.0), city("Riverwood", 2, 3.0, 4.0)];
    let connections = vec![connection(1, 2), connection(2, 99), connection(98, 1)];

    let navigator = Navigator::new(map_info("skyrim"), cities, &connections);
    let result = navigator.route(&request("Whiterun", "Riverwood")).unwrap();

    assert_eq!(result.distance(), 5.0);
    assert_eq!(result.route().names(), &["Whiterun", "Riverwood"]);
    assert!(result.alternative_route().is_none());
}

#[test]
fn a_map_without_connections_yields_no_routes_at_all() {
    let cities = vec![
        city("Whiterun", 1, 0.0, 0.0),
        city("Riverwood", 2, 3.0, 4.0),
        city("Ivarstead", 3, 6.0, 8.0),
    ];

    let navigator = Navigator::new(map_info("skyrim"), cities, &[]);

    for (start, end) in [
        ("Whiterun", "Riverwood"),
        ("Riverwood", "Ivarstead"),
        ("Ivarstead", "Whiterun"),
    ] {
        let error = navigator.route(&request(start, end)).unwrap_err();
        assert_eq!(
            error,
            RoutingError::NoPathFound {
                start: String::from(start),
                end: String::from(end),
            }
        );
    }
}

#[test]
fn suggest_ranks_prefix_matches_first() {
    let navigator = skyrim_navigator();

    // "Riverwood" starts with the query, "Rorikstead" merely contains it.
    assert_eq!(
        navigator.suggest("ri", 10),
        vec![String::from("Riverwood"), String::from("Rorikstead")]
    );
    assert_eq!(
        navigator.suggest("wh", 10),
        vec![String::from("Whiterun")]
    );
    assert!(navigator.suggest("", 10).is_empty());
}

#[test]
fn closest_city_resolves_map_coordinates() {
    let navigator = skyrim_navigator();

    assert_eq!(navigator.closest_city(1.0, 1.0).unwrap().name, "Whiterun");
    assert_eq!(navigator.closest_city(41.0, 31.0).unwrap().name, "Winterhold");
}
