use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deck_battle::cards::CardName;
use deck_battle::session::Session;

/// Play the first roster battle to the end, playing every card each turn.
fn play_out(seed: u64) -> usize {
    let mut session = Session::standard(seed);
    let Ok(_) = session.select_enemy("Battle 1") else {
        return 0;
    };

    let mut commands = 0;
    'turns: for _ in 0..100 {
        let hand: Vec<CardName> = session
            .battle()
            .map(|b| b.hand().iter().cloned().collect())
            .unwrap_or_default();
        for card in hand {
            commands += 1;
            match session.play_card(&card) {
                Ok(outcome) if outcome.is_terminal() => break 'turns,
                Ok(_) => {}
                Err(_) => break 'turns,
            }
        }
        commands += 1;
        match session.end_turn() {
            Ok(outcome) if outcome.is_terminal() => break,
            Ok(_) => {}
            Err(_) => break,
        }
    }
    commands
}

fn bench_battle(c: &mut Criterion) {
    c.bench_function("battle_1_play_out", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_out(seed))
        })
    });

    c.bench_function("snapshot", |b| {
        let mut session = Session::standard(7);
        let _ = session.select_enemy("Battle 3");
        b.iter(|| black_box(session.snapshot()))
    });
}

criterion_group!(benches, bench_battle);
criterion_main!(benches);
