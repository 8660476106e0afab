use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harmonia::aspects::{exact_match, AspectMode};
use harmonia::chart::{AttachmentStyle, Branch, ChartProfile, FiveElement, HouseCusp, Point, Sign, Tier};
use harmonia::compute_match;

fn exact_profile(offset: f64, element: FiveElement) -> ChartProfile {
    let points = [
        Point::Sun,
        Point::Moon,
        Point::Mercury,
        Point::Venus,
        Point::Mars,
        Point::Jupiter,
        Point::Saturn,
        Point::Uranus,
        Point::Neptune,
        Point::Pluto,
        Point::Chiron,
        Point::Juno,
        Point::Ascendant,
    ];
    let mut profile = ChartProfile::new(Tier::Exact, element);
    for (i, point) in points.iter().enumerate() {
        profile = profile.with_degree(*point, offset + (i as f64) * 27.5);
    }
    profile
        .with_cusp(HouseCusp::House4, offset + 90.0)
        .with_cusp(HouseCusp::House12, offset + 330.0)
        .with_day_branch(Branch::Yin)
        .with_month_branch(Branch::Mao)
        .with_attachment(AttachmentStyle::Secure)
}

fn sign_profile(sign: Sign) -> ChartProfile {
    ChartProfile::new(Tier::DateOnly, FiveElement::Metal)
        .with_sign(Point::Sun, sign)
        .with_sign(Point::Moon, sign)
        .with_sign(Point::Venus, sign)
        .with_sign(Point::Mars, sign)
}

fn bench_exact_match(c: &mut Criterion) {
    c.bench_function("exact_match", |b| {
        b.iter(|| exact_match(black_box(100.0), black_box(221.5), black_box(AspectMode::Harmony)))
    });
}

fn bench_compute_match_exact(c: &mut Criterion) {
    let a = exact_profile(12.0, FiveElement::Wood);
    let b = exact_profile(131.0, FiveElement::Fire);

    c.bench_function("compute_match_exact", |bench| {
        bench.iter(|| compute_match(black_box(&a), black_box(&b)))
    });
}

fn bench_compute_match_sign_only(c: &mut Criterion) {
    let a = sign_profile(Sign::Leo);
    let b = sign_profile(Sign::Aquarius);

    c.bench_function("compute_match_sign_only", |bench| {
        bench.iter(|| compute_match(black_box(&a), black_box(&b)))
    });
}

criterion_group!(
    benches,
    bench_exact_match,
    bench_compute_match_exact,
    bench_compute_match_sign_only
);
criterion_main!(benches);
