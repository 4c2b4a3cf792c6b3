use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use klondike_cli::{GameError, PileId, Solitaire};

const LABELS: [&str; 14] = [
    "stock", "waste", "f1", "f2", "f3", "f4", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "zz",
];

#[test]
fn test_cards_are_conserved_under_random_play() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Solitaire::new_game(&mut rng);

        for _ in 0..500 {
            match rng.random_range(0..4) {
                0 => {
                    let _ = game.draw_from_stock();
                }
                1 => {
                    let _ = game.undo();
                }
                _ => {
                    let src = LABELS[rng.random_range(0..LABELS.len())];
                    let dst = LABELS[rng.random_range(0..LABELS.len())];
                    let _ = game.move_cards(src, dst, rng.random_range(0..6));
                }
            }
            assert!(game.board().is_complete(), "seed {seed}");
        }
    }
}

#[test]
fn test_new_game_deal_shape() {
    let game = Solitaire::new_seeded(2024);
    for i in 1..=7 {
        let label = format!("c{i}");
        let cards = game.all_cards_of(&label).unwrap();
        assert_eq!(cards.len(), i);
        assert_eq!(cards.iter().filter(|c| c.face_up).count(), 1);
        assert!(cards[i - 1].face_up);
    }
    assert_eq!(game.size_of("stock").unwrap(), 24);
    for label in ["waste", "f1", "f2", "f3", "f4"] {
        assert_eq!(game.size_of(label).unwrap(), 0);
    }
}

#[test]
fn test_every_successful_move_undoes_exactly() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut game = Solitaire::new_game(&mut rng);

    for _ in 0..300 {
        let src = PileId::all().nth(rng.random_range(0..13)).unwrap().to_string();
        let dst = PileId::all().nth(rng.random_range(0..13)).unwrap().to_string();
        let count = rng.random_range(0..4);

        let before = game.board().clone();
        if game.move_cards(&src, &dst, count).is_err() {
            assert_eq!(game.board(), &before);
            continue;
        }
        let after = game.board().clone();

        game.undo().unwrap();
        assert_eq!(game.board(), &before, "undo of m {src} {dst} {count}");
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
        assert_eq!(game.board(), &before);

        // Replay so the game keeps moving forward.
        game.move_cards(&src, &dst, count).unwrap();
        assert_eq!(game.board(), &after);
    }
}

#[test]
fn test_out_of_range_piles_are_errors_not_panics() {
    let mut game = Solitaire::new_seeded(5);
    let before = game.board().clone();
    for label in ["c8", "c0", "f5", "c01", "f+2"] {
        assert_eq!(
            game.size_of(label),
            Err(GameError::UnresolvedPile(label.to_string()))
        );
        assert!(game.top_of(label).is_err());
        assert!(game.all_cards_of(label).is_err());
        assert!(game.move_cards("c7", label, 1).is_err());
        assert!(game.move_cards(label, "c7", 0).is_err());
    }
    assert_eq!(game.board(), &before);
    assert!(game.history().is_empty());
}
