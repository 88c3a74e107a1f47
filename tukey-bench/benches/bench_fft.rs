use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use std::{env, fs};

use criterion::measurement::WallTime;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use rustfft::num_complex::Complex as RustComplex;
use rustfft::FftPlanner as RustFftPlanner;
use tukey::fft::{RecursiveFft, Transform};
use tukey::{Complex64, DirectDft};

// ---------------- Allocation tracking ----------------
struct CountingAllocator;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);
static CURRENT_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
            let new = CURRENT_BYTES.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            update_peak(new);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        CURRENT_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn update_peak(new: usize) {
    let mut peak = PEAK_BYTES.load(Ordering::Relaxed);
    while new > peak {
        match PEAK_BYTES.compare_exchange(peak, new, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(old) => peak = old,
        }
    }
}

fn reset_alloc() {
    ALLOCATIONS.store(0, Ordering::Relaxed);
    CURRENT_BYTES.store(0, Ordering::Relaxed);
    PEAK_BYTES.store(0, Ordering::Relaxed);
}

fn alloc_stats() -> (usize, usize) {
    (
        ALLOCATIONS.load(Ordering::Relaxed),
        PEAK_BYTES.load(Ordering::Relaxed),
    )
}

// ---------------- Result tracking ----------------
#[derive(Serialize, Deserialize, Clone)]
struct BenchRecord {
    library: String,
    size: usize,
    time_per_op_ns: f64,
    ops_per_sec: f64,
    allocations: usize,
    peak_bytes: usize,
}

static RESULTS: Lazy<Mutex<Vec<BenchRecord>>> = Lazy::new(|| Mutex::new(Vec::new()));

// Largest size the O(N²) oracle is timed at.
const DIRECT_MAX: usize = 1 << 10;

// ---------------- Benchmark helpers ----------------
fn bench_with<F: FnMut()>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    library: &str,
    size: usize,
    mut op: F,
) {
    let mut first = true;
    group.bench_function(BenchmarkId::new(library, size), |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            let mut alloc_total = 0;
            let mut peak = 0;
            for _ in 0..iters {
                reset_alloc();
                let start = Instant::now();
                op();
                total += start.elapsed();
                let (a, p) = alloc_stats();
                alloc_total += a;
                peak = peak.max(p);
            }
            if first {
                let t = total.as_secs_f64() / iters as f64;
                RESULTS.lock().unwrap().push(BenchRecord {
                    library: library.into(),
                    size,
                    time_per_op_ns: t * 1e9,
                    ops_per_sec: 1.0 / t,
                    allocations: alloc_total / iters as usize,
                    peak_bytes: peak,
                });
                first = false;
            }
            total
        });
    });
}

fn bench_complex(c: &mut Criterion, size: usize) {
    let mut group = c.benchmark_group(format!("complex_{}", size));

    let input: Vec<Complex64> = (0..size)
        .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
        .collect();

    bench_with(&mut group, "tukey/recursive", size, || {
        black_box(RecursiveFft.transform(black_box(&input)).unwrap());
    });

    if size <= DIRECT_MAX {
        bench_with(&mut group, "tukey/direct", size, || {
            black_box(DirectDft.transform(black_box(&input)).unwrap());
        });
    }

    let rust_fft = RustFftPlanner::<f64>::new().plan_fft_forward(size);
    let rust_input: Vec<RustComplex<f64>> = input
        .iter()
        .map(|c| RustComplex::new(c.re, c.im))
        .collect();
    let mut rust_data = rust_input.clone();
    bench_with(&mut group, "rustfft", size, || {
        rust_data.copy_from_slice(&rust_input);
        rust_fft.process(black_box(&mut rust_data));
    });

    group.finish();
}

fn save_results() {
    let mut results = RESULTS.lock().unwrap().clone();
    results.sort_by(|a, b| a.size.cmp(&b.size).then_with(|| a.library.cmp(&b.library)));
    let json = serde_json::to_string_pretty(&results).unwrap();
    fs::create_dir_all("../benchmarks").unwrap();
    fs::write("../benchmarks/latest.json", json).unwrap();
}

fn main_bench(c: &mut Criterion) {
    let sizes: Vec<usize> = env::var("TUKEY_BENCH_POWERS")
        .ok()
        .map(|s| {
            s.split(',')
                .filter_map(|p| p.trim().parse::<u32>().ok())
                .filter(|&p| p < usize::BITS)
                .map(|p| 1usize << p)
                .collect()
        })
        .unwrap_or_else(|| (4..=14).map(|p| 1usize << p).collect());
    for size in sizes {
        bench_complex(c, size);
    }
    save_results();
}

criterion_group!(benches, main_bench);
criterion_main!(benches);
