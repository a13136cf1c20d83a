mod common;

use common::{cards, hole};
use holdem_engine::cards::{full_deck, Rank as R};
use holdem_engine::hand::{compare_hands, evaluate, evaluate_cards, rank_players, Category};
use holdem_engine::player::Player;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn pair_of_kings_loses_to_trip_kings() {
    let board = cards("Kh Kc 4s 2d 3c");
    let pair = evaluate(&hole("Ah 10c"), &board);
    assert_eq!(pair.category, Category::OnePair);
    assert_eq!(pair.kickers, [R::King, R::Ace, R::Ten, R::Four]);

    let trips = evaluate(&hole("Kd Qs"), &board);
    assert_eq!(trips.category, Category::ThreeOfAKind);
    assert_eq!(trips.kickers, [R::King, R::Queen, R::Four]);
    assert!(compare_hands(&trips, &pair).is_gt());
}

#[test]
fn ranker_places_trips_above_pair() {
    let board = cards("Kh Kc 4s 2d 3c");
    let mut alice = Player::new(0, "Alice", 100);
    let mut bob = Player::new(1, "Bob", 100);
    for c in hole("Ah 10c") {
        alice.give_card(c).unwrap();
    }
    for c in hole("Kd Qs") {
        bob.give_card(c).unwrap();
    }
    let tiers = rank_players([&alice, &bob], &board);
    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].players, [1]);
    assert_eq!(tiers[1].players, [0]);
}

#[test]
fn identical_hands_share_a_tier() {
    let board = cards("5c 6d 7h 8s 9c");
    let mut ps: Vec<Player> = (0..3).map(|i| Player::new(i, format!("P{i}"), 10)).collect();
    for (p, h) in ps.iter_mut().zip(["2d 2h", "3d 3h", "Td Jd"]) {
        for c in hole(h) {
            p.give_card(c).unwrap();
        }
    }
    let tiers = rank_players(&ps, &board);
    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].players, [2], "jack-high straight wins");
    assert_eq!(tiers[1].players, [0, 1]);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let h = evaluate_cards(&cards("Ah 2c 3d 4s 5h Kd Qc"));
    assert_eq!(h.category, Category::Straight);
    assert_eq!(h.kickers, [R::Five]);

    let six_high = evaluate_cards(&cards("6h 2c 3d 4s 5h Kd Qc"));
    assert!(compare_hands(&six_high, &h).is_gt());
}

#[test]
fn straight_flush_needs_the_straight_inside_the_suit() {
    let sf = evaluate_cards(&cards("9h 10h Jh Qh Kh 2c 3d"));
    assert_eq!(sf.category, Category::StraightFlush);
    assert_eq!(sf.kickers, [R::King]);

    // straight and flush, but not in the same cards
    let split = evaluate_cards(&cards("9h 10h Jh Qh Kc 2h 3d"));
    assert_eq!(split.category, Category::Flush);
}

#[test]
fn full_house_compares_trips_then_pair() {
    let board = cards("Qs Qd 5c 5d 2h");
    let queens_full = evaluate(&hole("Qh Ac"), &board);
    let also_queens_full = evaluate(&hole("Qc 3c"), &board);
    assert_eq!(queens_full.category, Category::FullHouse);
    assert_eq!(queens_full.kickers, [R::Queen, R::Five]);
    assert!(compare_hands(&queens_full, &also_queens_full).is_eq());

    let fives_full = evaluate(&hole("5h 2c"), &board);
    assert_eq!(fives_full.kickers, [R::Five, R::Queen]);
    assert!(compare_hands(&queens_full, &fives_full).is_gt());
}

#[test]
fn two_trips_make_a_full_house() {
    let h = evaluate_cards(&cards("8s 8d 8c 4h 4d 4s Ac"));
    assert_eq!(h.category, Category::FullHouse);
    assert_eq!(h.kickers, [R::Eight, R::Four]);
}

#[test]
fn quads_keep_the_best_kicker() {
    let h = evaluate_cards(&cards("7s 7d 7c 7h Kd Qs 2c"));
    assert_eq!(h.category, Category::FourOfAKind);
    assert_eq!(h.kickers, [R::Seven, R::King]);
}

#[test]
fn category_always_dominates_kickers() {
    let two_pair = evaluate_cards(&cards("As Ad Kc Kh Qd 2s 3c"));
    let weak_flush = evaluate_cards(&cards("2h 4h 6h 8h 9h Kc Qd"));
    assert_eq!(two_pair.category, Category::TwoPair);
    assert!(compare_hands(&weak_flush, &two_pair).is_gt());
}

#[test]
fn comparison_is_a_total_preorder_on_random_hands() {
    let mut rng = ChaCha20Rng::seed_from_u64(31);
    let hands: Vec<_> = (0..60)
        .map(|_| {
            let mut deck = full_deck();
            deck.shuffle(&mut rng);
            evaluate_cards(&deck[..7])
        })
        .collect();
    for a in &hands {
        assert!(compare_hands(a, a).is_eq());
        for b in &hands {
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
            if a.category != b.category {
                assert_eq!(compare_hands(a, b), a.category.cmp(&b.category));
            }
            for c in &hands {
                if compare_hands(a, b).is_ge() && compare_hands(b, c).is_ge() {
                    assert!(compare_hands(a, c).is_ge());
                }
            }
        }
    }
}

#[test]
fn descriptions_name_the_made_ranks() {
    let board = cards("Kh Kc 4s 2d 3c");
    assert_eq!(
        evaluate(&hole("Ah 10c"), &board).describe(),
        "One Pair (K; kickers A, 10, 4)"
    );
    assert_eq!(
        evaluate_cards(&cards("8s 8d 8c 4h 4d 4s Ac")).describe(),
        "Full House (8, 4)"
    );
}
