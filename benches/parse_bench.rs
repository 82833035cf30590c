use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expenses::parse_expenses;

const CURRENCIES: [&str; 4] = ["USD", "DKK", "EUR", "JPY"];

fn generate_input(lines: usize) -> String {
    let mut text = String::from("# generated expenses\n");
    for i in 0..lines {
        let day = i % 28 + 1;
        let month = i / 28 % 12 + 1;
        let sign = if i % 3 == 0 { "-" } else { "" };
        text.push_str(&format!(
            "2023-{:02}-{:02} {}{}.{:02} {}\n",
            month,
            day,
            sign,
            i % 1000,
            i % 100,
            CURRENCIES[i % CURRENCIES.len()]
        ));
    }
    text
}

fn criterion_benchmark(c: &mut Criterion) {
    let _ = pretty_env_logger::try_init();
    let input = generate_input(10_000);
    c.bench_function("Parse expenses", |b| {
        b.iter(|| parse_expenses(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
