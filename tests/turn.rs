//! Integration tests for a single turn: move choice, finisher gating, damage.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wrestling_tournament::{
    resolve_turn, Contestant, Move, TournamentError, FINISHER_GUARANTEED_AT,
};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn signature_move_always_lands_for_exact_damage() {
    let mut rng = rng();
    let attacker = Contestant::new("A", 100, vec![Move::signature("Big Boot", 15)]);
    let mut defender = Contestant::new("B", 100, vec![Move::signature("Jab", 1)]);

    for i in 1..=6 {
        let before = defender.health;
        let outcome = resolve_turn(&attacker, &mut defender, &mut rng).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.move_name, "Big Boot");
        assert_eq!(defender.health, before - 15);
        assert_eq!(defender.health, 100 - 15 * i);
        assert_eq!(outcome.defender_health, defender.health);
    }
}

#[test]
fn finisher_against_weakened_defender_never_misses() {
    let mut rng = rng();
    let attacker = Contestant::new("A", 100, vec![Move::finisher("Leg Drop", 20)]);
    let mut defender = Contestant::new("B", 100, vec![Move::signature("Jab", 1)]);

    for _ in 0..1_000 {
        defender.health = FINISHER_GUARANTEED_AT;
        let outcome = resolve_turn(&attacker, &mut defender, &mut rng).unwrap();
        assert!(outcome.success);
        assert_eq!(defender.health, FINISHER_GUARANTEED_AT - 20);
    }
}

#[test]
fn finisher_against_healthy_defender_lands_about_half_the_time() {
    let mut rng = rng();
    let attacker = Contestant::new("A", 100, vec![Move::finisher("Leg Drop", 20)]);
    let mut defender = Contestant::new("B", 100, vec![Move::signature("Jab", 1)]);
    let trials = 10_000;
    let mut landed = 0;

    for _ in 0..trials {
        defender.health = FINISHER_GUARANTEED_AT + 1;
        let outcome = resolve_turn(&attacker, &mut defender, &mut rng).unwrap();
        if outcome.success {
            landed += 1;
            assert_eq!(defender.health, FINISHER_GUARANTEED_AT + 1 - 20);
        } else {
            // A miss changes nothing.
            assert_eq!(defender.health, FINISHER_GUARANTEED_AT + 1);
            assert_eq!(outcome.defender_health, FINISHER_GUARANTEED_AT + 1);
        }
    }

    let rate = landed as f64 / trials as f64;
    assert!((0.45..=0.55).contains(&rate), "finisher success rate {rate}");
}

#[test]
fn moves_are_picked_from_the_whole_list() {
    let mut rng = rng();
    let attacker = Contestant::new(
        "A",
        100,
        vec![Move::signature("Move A", 1), Move::signature("Move B", 1)],
    );
    let mut defender = Contestant::new("B", 10_000, vec![Move::signature("Jab", 1)]);
    let mut used_a = 0;
    let mut used_b = 0;

    for _ in 0..1_000 {
        match resolve_turn(&attacker, &mut defender, &mut rng).unwrap().move_name.as_str() {
            "Move A" => used_a += 1,
            "Move B" => used_b += 1,
            other => panic!("unexpected move {other}"),
        }
    }
    assert!(used_a > 400 && used_b > 400, "A: {used_a}, B: {used_b}");
}

#[test]
fn reported_health_is_clamped_but_internal_health_goes_negative() {
    let mut rng = rng();
    let attacker = Contestant::new("A", 100, vec![Move::signature("Powerbomb", 30)]);
    let mut defender = Contestant::new("B", 10, vec![Move::signature("Jab", 1)]);

    let outcome = resolve_turn(&attacker, &mut defender, &mut rng).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.defender_health, 0);
    assert_eq!(defender.health, -20);
    assert_eq!(defender.displayed_health(), 0);
    assert!(defender.is_eliminated());
}

#[test]
fn defender_health_never_increases() {
    let mut rng = rng();
    let attacker = Contestant::new(
        "A",
        100,
        vec![Move::signature("Chop", 7), Move::finisher("Piledriver", 40)],
    );
    let mut defender = Contestant::new("B", 500, vec![Move::signature("Jab", 1)]);

    let mut last = defender.health;
    while !defender.is_eliminated() {
        resolve_turn(&attacker, &mut defender, &mut rng).unwrap();
        assert!(defender.health <= last);
        last = defender.health;
    }
}

#[test]
fn attacker_without_moves_is_rejected() {
    let mut rng = rng();
    let attacker = Contestant::new("Empty", 100, Vec::new());
    let mut defender = Contestant::new("B", 100, vec![Move::signature("Jab", 1)]);

    assert!(matches!(
        resolve_turn(&attacker, &mut defender, &mut rng),
        Err(TournamentError::InvalidContestant { .. })
    ));
    assert_eq!(defender.health, 100);
}
