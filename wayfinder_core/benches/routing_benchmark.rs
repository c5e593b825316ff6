use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wayfinder_core::city::{City, Connection, MapInfo};
use wayfinder_core::navigator::{Navigator, RouteRequest};
use wayfinder_core::position::Position;

/// Square grid of cities connected to their right and lower neighbors.
fn grid_navigator(side: u64) -> Navigator {
    let mut cities = Vec::new();
    let mut connections = Vec::new();

    for y in 0..side {
        for x in 0..side {
            let id = y * side + x + 1;
            cities.push(City {
                id,
                name: format!("city_{x}_{y}"),
                position: Position::new(x as f64, y as f64),
            });

            if x + 1 < side {
                connections.push(Connection {
                    parent_city_id: id,
                    child_city_id: id + 1,
                });
            }
            if y + 1 < side {
                connections.push(Connection {
                    parent_city_id: id,
                    child_city_id: id + side,
                });
            }
        }
    }

    let info = MapInfo {
        id: 1,
        name: String::from("grid"),
        size_x: side as f64,
        size_y: side as f64,
    };

    Navigator::new(info, cities, &connections)
}

fn routing_benchmark(c: &mut Criterion) {
    let navigator = grid_navigator(20);
    let request = RouteRequest {
        startpoint: String::from("city_0_0"),
        endpoint: String::from("city_19_19"),
    };

    c.bench_function("route across a 20x20 grid", |b| {
        b.iter(|| black_box(navigator.route(&request).unwrap()))
    });

    c.bench_function("suggest on a 20x20 grid", |b| {
        b.iter(|| black_box(navigator.suggest("city_1", 10)))
    });
}

criterion_group!(benches, routing_benchmark);
criterion_main!(benches);
