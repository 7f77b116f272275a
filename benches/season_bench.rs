use criterion::{black_box, criterion_group, criterion_main, Criterion};

use card_league::{
    ContestConfig, ContestResolver, GenerationConfig, League, LeagueConfig, LeagueRng,
    RatingModel, Roster, SeasonSimulator, DEFAULT_CARD_NAMES,
};

fn bench_rating(c: &mut Criterion) {
    let model = RatingModel::default();
    let roster = Roster::generate(&DEFAULT_CARD_NAMES, &GenerationConfig::default(), &mut LeagueRng::new(1)).unwrap();
    c.bench_function("rate_full_roster", |b| {
        b.iter(|| roster.iter().map(|card| card.rating(black_box(&model))).sum::<f64>())
    });
}

fn bench_season(c: &mut Criterion) {
    let model = RatingModel::default();
    let config = ContestConfig::default();
    let simulator = SeasonSimulator::new(ContestResolver::new(&model, &config));
    let roster = Roster::generate(&DEFAULT_CARD_NAMES, &GenerationConfig::default(), &mut LeagueRng::new(1)).unwrap();

    c.bench_function("season_79_cards_82_games", |b| {
        b.iter(|| {
            let mut roster = roster.clone();
            simulator.simulate(&mut roster, black_box(82), &mut LeagueRng::new(7)).unwrap()
        })
    });
}

fn bench_league_season_with_playoffs(c: &mut Criterion) {
    let league = League::initialize(&DEFAULT_CARD_NAMES, LeagueConfig::default(), 1).unwrap();

    c.bench_function("league_season_and_playoffs", |b| {
        b.iter(|| {
            let mut league = league.clone();
            league.simulate_season(black_box(3)).unwrap();
            league.run_bracket(black_box(4)).unwrap()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut league = League::initialize(&DEFAULT_CARD_NAMES, LeagueConfig::default(), 1).unwrap();
    for seed in 0..5u64 {
        league.simulate_season(seed).unwrap();
        league.run_bracket(seed).unwrap();
        league.rollover_season();
    }

    c.bench_function("snapshot_to_json", |b| b.iter(|| black_box(&league).snapshot().to_json().unwrap()));
    c.bench_function("snapshot_to_bytes", |b| b.iter(|| black_box(&league).snapshot().to_bytes().unwrap()));
}

criterion_group!(
    benches,
    bench_rating,
    bench_season,
    bench_league_season_with_playoffs,
    bench_snapshot
);
criterion_main!(benches);
