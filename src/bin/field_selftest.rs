//! Smoke test for the prime_field primitives.
//!
//! Builds a handful of fixed elements, exercises addition, exponentiation
//! and division, and prints one `PASS`/`FAIL` line per check.  An optional
//! first argument, or `FIELD_SELFTEST_MODULUS`, selects the prime used for
//! the Fermat and self-division checks.

use std::env;

use prime_field::{FieldArithmetic, FieldElement, FieldError, PrimeField};

const MODULUS_ENV: &str = "FIELD_SELFTEST_MODULUS";
const DEFAULT_MODULUS: u64 = 7;

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_help() {
    println!("Usage: field_selftest [prime]");
    println!("  prime  modulus for the generic checks (default {DEFAULT_MODULUS},");
    println!("         or ${MODULUS_ENV} when set)");
}

fn parse_modulus(raw: &str) -> PrimeField {
    let p: u64 = raw
        .trim()
        .parse()
        .unwrap_or_else(|_| fatal(&format!("invalid modulus: {raw}")));
    PrimeField::try_new(p).unwrap_or_else(|err| fatal(&err.to_string()))
}

struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    fn check(
        &mut self,
        label: &str,
        got: Result<FieldElement, FieldError>,
        expected: FieldElement,
    ) {
        match got {
            Ok(value) if value == expected => {
                self.passed += 1;
                println!("PASS {label}");
            }
            Ok(value) => {
                self.failed += 1;
                println!("FAIL {label}: expected {expected}, got {value}");
            }
            Err(err) => {
                self.failed += 1;
                println!("FAIL {label}: expected {expected}, got error: {err}");
            }
        }
    }
}

fn main() {
    let arg = env::args().nth(1);
    if matches!(arg.as_deref(), Some("-h" | "--help")) {
        print_help();
        return;
    }
    let field = match arg.or_else(|| env::var(MODULUS_ENV).ok()) {
        Some(raw) => parse_modulus(&raw),
        None => PrimeField::new(DEFAULT_MODULUS),
    };

    let mut report = Report {
        passed: 0,
        failed: 0,
    };

    let f7 = |x: i64| FieldElement::new(x, 7);
    let additions = [(2, 3, 5), (-2, 3, 1), (2, -3, 6), (-2, -3, 2)];
    for (a, b, sum) in additions {
        report.check(
            &format!("{} + {} == {}", f7(a), f7(b), f7(sum)),
            f7(a).add(&f7(b)),
            f7(sum),
        );
    }

    let p = field.modulus();
    let one = field.element(1);
    let base = field.element(3);
    report.check(
        &format!("{base} ** {} == {one}", p - 1),
        Ok(base.pow(p - 1)),
        one,
    );
    let divisor = field.element(if p > 4 { 4 } else { p - 1 });
    report.check(
        &format!("{divisor} / {divisor} == {one}"),
        divisor.div(&divisor),
        one,
    );

    println!("{} passed, {} failed", report.passed, report.failed);
    if report.failed > 0 {
        std::process::exit(1);
    }
}
