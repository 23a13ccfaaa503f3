use criterion::{Criterion, black_box, criterion_group, criterion_main};
use yun_base::{
    Animal, calculate_palaces, check_compatibility, element_balance, four_pillars,
    lucky_elements, zodiac_compatibility,
};
use yun_time::BirthData;

fn pillars_bench(c: &mut Criterion) {
    let birth = BirthData::new(1990, 8, 15, 14);
    let other = BirthData::new(1988, 2, 29, 7);

    let mut group = c.benchmark_group("pillars");
    group.bench_function("four_pillars", |b| b.iter(|| four_pillars(black_box(&birth))));
    group.bench_function("element_balance", |b| {
        let chart = four_pillars(&birth);
        b.iter(|| element_balance(black_box(&chart)))
    });
    group.bench_function("check_compatibility", |b| {
        let x = four_pillars(&birth);
        let y = four_pillars(&other);
        b.iter(|| check_compatibility(black_box(&x), black_box(&y)))
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let birth = BirthData::new(1990, 8, 15, 14);

    let mut group = c.benchmark_group("lookup");
    group.bench_function("lucky_elements", |b| {
        b.iter(|| lucky_elements(black_box(yun_base::Element::Water)))
    });
    group.bench_function("zodiac_compatibility", |b| {
        b.iter(|| zodiac_compatibility(black_box(Animal::Rat), black_box(Animal::Horse)))
    });
    group.bench_function("calculate_palaces", |b| {
        b.iter(|| calculate_palaces(black_box(&birth)))
    });
    group.finish();
}

criterion_group!(benches, pillars_bench, lookup_bench);
criterion_main!(benches);
