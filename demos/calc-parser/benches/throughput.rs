use calc_parser::{Calculator, scanner};
use divan::{Bencher, black_box};

fn main() {
    divan::main();
}

const STATEMENTS: &[&str] = &[
    "rate = 0.25",
    "total = 1200 * (1 + rate) # gross",
    "share = total / 3",
    "-share + 2e2 - .5",
];

fn generate_program(count: usize) -> String {
    let mut result = String::with_capacity(count * 32);
    for i in 0..count {
        result.push_str(STATEMENTS[i % STATEMENTS.len()]);
        result.push_str(";\n");
    }
    result
}

#[divan::bench(args = [10, 100, 1000, 10_000])]
fn tokenize(bencher: Bencher, n: usize) {
    let input = generate_program(n);
    let scanner = scanner();

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(scanner.tokenize(black_box(&input))));
}

#[divan::bench(args = [10, 100, 1000, 10_000])]
fn eval(bencher: Bencher, n: usize) {
    let input = generate_program(n);

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(Calculator::new().eval(black_box(&input))));
}

#[divan::bench]
fn compile_cold(bencher: Bencher) {
    bencher.bench(|| black_box(scanner().compile().is_ok()));
}
