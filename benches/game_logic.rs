use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forge_2048::core::{apply_move, check_loss, seeded, spawn_tile, Board, GameState};
use forge_2048::types::{Direction, Tile, BOARD_SIZE};

fn crowded_board() -> Board {
    let mut rows = [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE];
    rows[0] = [Tile::Normal(1), Tile::Normal(1), Tile::Normal(2), Tile::Normal(3)];
    rows[1] = [Tile::Forge, Tile::Normal(5), Tile::Normal(5), Tile::Empty];
    rows[2] = [Tile::Forged(4), Tile::Forged(4), Tile::Empty, Tile::Normal(8)];
    rows[3] = [Tile::Empty, Tile::Normal(13), Tile::Empty, Tile::Normal(13)];
    Board::from_rows(rows)
}

fn bench_apply_move(c: &mut Criterion) {
    let board = crowded_board();

    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(apply_move(black_box(&board), dir));
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = seeded(12345);

    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut board = crowded_board();
            black_box(spawn_tile(&mut board, &mut rng));
        })
    });
}

fn bench_check_loss(c: &mut Criterion) {
    let mut rows = [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE];
    let values = [1, 2, 3, 5, 8, 13, 21, 34];
    for (r, row) in rows.iter_mut().enumerate() {
        for (col, tile) in row.iter_mut().enumerate() {
            *tile = Tile::Normal(values[(r * 2 + col) % values.len()]);
        }
    }
    let board = Board::from_rows(rows);

    c.bench_function("check_loss_full_board", |b| {
        b.iter(|| black_box(check_loss(black_box(&board))))
    });
}

fn bench_game_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut i = 0usize;

    c.bench_function("game_state_apply_move", |b| {
        b.iter(|| {
            if state.status().is_terminal() {
                state.reset();
            }
            let dir = Direction::ALL[i % 4];
            i += 1;
            black_box(state.apply_move(dir));
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_spawn,
    bench_check_loss,
    bench_game_move
);
criterion_main!(benches);
