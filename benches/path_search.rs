use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_quoridor::{has_path_to_goal, Coord, Orientation, PlayerId, SessionBuilder};

/// Serpentine walls: every other row sealed except at alternating ends,
/// so the only route visits most of the board.
fn serpentine() -> rust_quoridor::GameSession {
    let mut builder = SessionBuilder::new()
        .position(PlayerId::One, Coord::new(0, 0))
        .position(PlayerId::Two, Coord::new(8, 8));
    for y in (1..8u8).step_by(2) {
        let gap = if (y / 2) % 2 == 0 { 8 } else { 0 };
        for x in (0..9u8).filter(|&x| x != gap) {
            builder = builder.barrier(Orientation::Horizontal, Coord::new(x, y));
        }
    }
    builder.build().unwrap()
}

fn bench_path_search(c: &mut Criterion) {
    let open = rust_quoridor::GridState::new();
    c.bench_function("path_open_board", |b| {
        b.iter(|| has_path_to_goal(black_box(&open), PlayerId::One, Coord::new(4, 0)))
    });

    let maze = serpentine();
    c.bench_function("path_serpentine", |b| {
        b.iter(|| has_path_to_goal(black_box(maze.grid()), PlayerId::One, Coord::new(0, 0)))
    });
}

criterion_group!(benches, bench_path_search);
criterion_main!(benches);
