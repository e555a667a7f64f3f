use criterion::{black_box, criterion_group, criterion_main, Criterion};
use org_abbrev::{abbreviate, abbreviate_title, abbreviate_with_custom_config, AbbreviatorConfig};

fn benchmark_abbreviate(c: &mut Criterion) {
    let names = [
        "International Business Machines Corporation",
        "Hewlett-Packard Company, Inc.",
        "The Bank of New York Mellon Corporation",
        "World Health Organization (WHO)",
    ];

    c.bench_function("abbreviate", |b| {
        b.iter(|| {
            for name in names {
                abbreviate(black_box(name));
            }
        })
    });

    let config = AbbreviatorConfig::for_language("fr");
    c.bench_function("abbreviate_fr_accented", |b| {
        b.iter(|| abbreviate_with_custom_config(black_box("Société Générale S.A."), &config))
    });

    c.bench_function("abbreviate_title", |b| {
        b.iter(|| abbreviate_title(black_box("Senior Vice President of Operations"), "en"))
    });
}

criterion_group!(benches, benchmark_abbreviate);
criterion_main!(benches);
