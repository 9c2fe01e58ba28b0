use aegiskit_validate::PatternValidator;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_validator(c: &mut Criterion) {
    let validator = PatternValidator::new();
    let email = "first.last+tag@sub.example.com";
    let payload = "  <script>alert(1)</script> javascript:steal() onerror=x  ";
    let query = "SELECT * FROM users UNION SELECT password FROM admins";

    c.bench_function("validate_email_shape", |b| {
        b.iter(|| validator.validate_email_shape(black_box(email)));
    });

    c.bench_function("sanitize", |b| {
        b.iter(|| validator.sanitize(black_box(payload)));
    });

    c.bench_function("detect_suspicious_content", |b| {
        b.iter(|| validator.detect_suspicious_content(black_box(query)));
    });
}

criterion_group!(benches, bench_validator);
criterion_main!(benches);
