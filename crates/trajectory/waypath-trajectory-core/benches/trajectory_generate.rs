use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waypath_trajectory_core::{generate_trajectory, TrajectoryConfig, Waypoint};

fn slalom_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::with_heading(0.0, 0.0, 0.0),
        Waypoint::new(1.5, 0.8),
        Waypoint::new(3.0, -0.8),
        Waypoint::new(4.5, 0.8),
        Waypoint::with_heading(6.0, 0.0, 0.0),
    ]
}

fn bench_generate(c: &mut Criterion) {
    let wps = slalom_waypoints();
    let config = TrajectoryConfig::new(2.0, 1.5);
    c.bench_function("generate_slalom", |b| {
        b.iter(|| generate_trajectory(black_box(&wps), black_box(&config)).unwrap())
    });

    let trajectory = generate_trajectory(&wps, &config).unwrap();
    let duration = trajectory.total_duration();
    c.bench_function("sample_mid_trajectory", |b| {
        b.iter(|| trajectory.sample(black_box(duration * 0.5)).unwrap())
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
