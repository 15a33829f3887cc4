//! Session tests - collaborators driven through the facade crate

use std::cell::RefCell;
use std::rc::Rc;

use forge_2048::core::{
    AudioSink, Board, GameSnapshot, GameState, MemoryScoreStore, Renderer, Session,
};
use forge_2048::types::{Direction, GameAction, GameEvent, GameStatus, Tile};
use forge_2048::JsonScoreStore;

#[derive(Clone, Default)]
struct SharedLog(Rc<RefCell<Vec<String>>>);

impl SharedLog {
    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

struct LogRenderer(SharedLog);

impl Renderer for LogRenderer {
    fn render(&mut self, snap: &GameSnapshot) {
        self.0
            .0
            .borrow_mut()
            .push(format!("render score={} {}", snap.score, snap.status.as_str()));
    }
}

struct LogAudio(SharedLog);

impl AudioSink for LogAudio {
    fn merge_occurred(&mut self) {
        self.0 .0.borrow_mut().push("merge".to_string());
    }

    fn game_ended(&mut self, status: GameStatus) {
        self.0 .0.borrow_mut().push(format!("ended {}", status.as_str()));
    }
}

#[test]
fn best_score_survives_sessions() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("best.json");
    let log = SharedLog::default();

    let mut first = Session::start(
        GameState::new(5),
        LogRenderer(log.clone()),
        LogAudio(log.clone()),
        JsonScoreStore::new(&path),
    );
    assert_eq!(first.best_score(), 0);

    for _ in 0..40 {
        for dir in Direction::ALL {
            first.handle(GameAction::Slide(dir));
        }
        if first.game().status().is_terminal() {
            break;
        }
    }
    let best = first.best_score();
    assert_eq!(best, first.game().score());

    let second = Session::start(
        GameState::new(6),
        LogRenderer(log.clone()),
        LogAudio(log.clone()),
        JsonScoreStore::new(&path),
    );
    assert_eq!(second.best_score(), best);
    assert_eq!(second.last_snapshot().best_score, best);
}

#[test]
fn merge_sound_precedes_render() {
    let log = SharedLog::default();
    let mut session = Session::start(
        GameState::new(21),
        LogRenderer(log.clone()),
        LogAudio(log.clone()),
        MemoryScoreStore::default(),
    );

    // Play until some move merges.
    'outer: for _ in 0..50 {
        for dir in Direction::ALL {
            let before = session.game().score();
            session.handle(GameAction::Slide(dir));
            if session.game().score() > before {
                break 'outer;
            }
        }
    }

    let entries = log.entries();
    let merge_at = entries.iter().position(|e| e == "merge").expect("a merge happened");
    assert!(entries[merge_at + 1].starts_with("render"));
    assert_eq!(entries[0], "render score=0 playing");
}

fn f(v: u32) -> Tile {
    Tile::Forged(v)
}

#[test]
fn loss_ends_game_after_final_render() {
    // Sliding left fills the last gap; the spawn is walled in by Forged tiles.
    let board = Board::from_rows([
        [Tile::Empty, f(4), f(8), f(4)],
        [f(8), f(4), f(8), f(16)],
        [f(4), f(8), f(4), f(8)],
        [f(8), f(4), f(8), f(4)],
    ]);
    let log = SharedLog::default();
    let mut session = Session::start(
        GameState::with_board(board, 8),
        LogRenderer(log.clone()),
        LogAudio(log.clone()),
        MemoryScoreStore::default(),
    );

    assert_eq!(session.handle(GameAction::Slide(Direction::Left)), GameEvent::Lost);
    assert_eq!(
        log.entries(),
        vec!["render score=0 playing", "render score=0 lost", "ended lost"]
    );

    // Terminal: further slides do nothing.
    for dir in Direction::ALL {
        assert_eq!(session.handle(GameAction::Slide(dir)), GameEvent::None);
    }
    assert_eq!(log.entries().len(), 3);
    assert_eq!(session.game().status(), GameStatus::Lost);
}
