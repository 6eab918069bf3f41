//! Performance benchmarks for Roicanvas.
//!
//! This module contains benchmarks for:
//! - ROI enrichment over growing candidate pools
//! - Portfolio selection under a tight budget
//! - Full canvas aggregation
//!
//! Run with: `cargo bench`

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use roicanvas::{build_canvas, compute_roi, select_portfolio, OrgMetadata, UseCase};

// ============================================================================
// Mock Data Fixtures
// ============================================================================

mod fixtures {
    use roicanvas::{SoftBenefit, UseCase};

    /// Generate a pool of candidate use cases with varied financials so the
    /// selector sees a realistic spread of impact and effort.
    pub fn generate_use_cases(count: usize) -> Vec<UseCase> {
        (0..count)
            .map(|i| {
                let scale = 0.5 + (i % 7) as f64 * 0.35;
                let effort = (i % 10 + 1) as u8;
                UseCase::new(format!("UC{i:04}"), format!("Initiative {i}"))
                    .with_problem("Generated benchmark initiative")
                    .with_effort(effort)
                    .with_benefits(400_000.0 * scale, 700_000.0 * scale)
                    .with_costs(150_000.0 * scale, 40_000.0 * scale, 30_000.0 * scale)
                    .with_risk(0.1 + (i % 5) as f64 * 0.15, 0.2 + (i % 3) as f64 * 0.2)
                    .with_kpis(vec![format!("KPI {}", i % 12), "Cycle time".to_string()])
                    .with_risk_item(format!("Risk {}", i % 9))
                    .with_soft_benefit(SoftBenefit::Plain("Improved operations".to_string()))
            })
            .collect()
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_compute_roi(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_roi");

    for size in [10, 100, 1000] {
        let use_cases = fixtures::generate_use_cases(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &use_cases, |b, use_cases| {
            b.iter(|| compute_roi(black_box(use_cases)).unwrap());
        });
    }

    group.finish();
}

fn bench_select_portfolio(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_portfolio");

    for size in [10, 100, 1000] {
        let use_cases = fixtures::generate_use_cases(size);
        let evaluated = compute_roi(&use_cases).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &evaluated, |b, evaluated| {
            // Budget fits roughly a quarter of the pool.
            let budget = (size as u32) * 5 / 4;
            b.iter(|| select_portfolio(black_box(evaluated), budget));
        });
    }

    group.finish();
}

fn bench_build_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_canvas");

    for size in [10, 100] {
        let use_cases = fixtures::generate_use_cases(size);
        let evaluated = compute_roi(&use_cases).unwrap();
        let portfolio = select_portfolio(&evaluated, u32::MAX);
        let org = OrgMetadata::default();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &portfolio, |b, portfolio| {
            b.iter(|| build_canvas(black_box(&use_cases), black_box(portfolio), &org, today));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_roi, bench_select_portfolio, bench_build_canvas);
criterion_main!(benches);
