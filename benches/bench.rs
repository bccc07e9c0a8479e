// Criterion benchmarks for homeAImatch Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use homematch_algo::core::{catalog_for, score, Ranker};
use homematch_algo::models::{AnswerValue, Market, Profile, ProfileField, Property, ScoringWeights};

fn bench_profile() -> Profile {
    let mut profile = Profile::new();
    profile.set(ProfileField::Location, AnswerValue::Single("Cork".into()));
    profile.set(ProfileField::Budget, AnswerValue::Single("€200K – €400K".into()));
    profile.set(ProfileField::Family, AnswerValue::Single("Small family (1-2 kids)".into()));
    profile.set(ProfileField::WorkFromHome, AnswerValue::Single("Hybrid (2-3 days office)".into()));
    profile.set(ProfileField::WorkDestination, AnswerValue::Single("City centre".into()));
    profile.set(ProfileField::MaxCommute, AnswerValue::Single("Under 30 min".into()));
    profile.set(ProfileField::Condition, AnswerValue::Single("Light cosmetic work ok".into()));
    profile.set(ProfileField::Lifestyle, AnswerValue::Single("Suburban — space with access".into()));
    profile.set(
        ProfileField::NeighborhoodVibe,
        AnswerValue::Multi(vec!["Family-friendly".into(), "Quiet & peaceful".into()]),
    );
    profile.set(ProfileField::Pets, AnswerValue::Single("Dog(s) — need garden!".into()));
    profile.set(
        ProfileField::Parking,
        AnswerValue::Multi(vec!["Driveway fine".into(), "EV charging".into()]),
    );
    profile.set(
        ProfileField::Priorities,
        AnswerValue::Multi(vec!["Great schools".into(), "Outdoor space".into(), "Home office".into()]),
    );
    profile.set(ProfileField::Vibe, AnswerValue::Single("Cosy & warm".into()));
    profile
}

fn synthetic_catalog(size: usize) -> Vec<Property> {
    let base = catalog_for(Market::Ie);
    (0..size)
        .map(|i| {
            let mut property = base[i % base.len()].clone();
            property.id = format!("syn{}", i);
            property.price = 150_000 + (i as u64 * 7_919) % 700_000;
            property.beds = 1 + (i % 5) as u8;
            property
        })
        .collect()
}

fn bench_score_single_property(c: &mut Criterion) {
    let catalog = catalog_for(Market::Ie);
    let profile = bench_profile();
    let weights = ScoringWeights::default();

    c.bench_function("score_single_property", |b| {
        b.iter(|| score(black_box(&catalog[0]), black_box(&profile), black_box(&weights)));
    });
}

fn bench_rank_catalog(c: &mut Criterion) {
    let profile = bench_profile();
    let ranker = Ranker::with_default_weights();

    let mut group = c.benchmark_group("rank_catalog");
    for size in [10, 100, 1000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| ranker.rank(black_box(catalog), black_box(&profile), 5));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_score_single_property, bench_rank_catalog);
criterion_main!(benches);
