use criterion::{BenchmarkGroup, Criterion, Throughput, measurement::WallTime};
use zenraw::convert::*;
use zenraw::{Image, PixelFormat, flip_y};

// === Naive baselines ===

fn naive_rgb24_to_grayscale(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(3).zip(dst.iter_mut()) {
        let (r, g, b) = (u32::from(s[0]), u32::from(s[1]), u32::from(s[2]));
        *d = (((66 * r + 129 * g + 25 * b + 128) >> 8) + 16) as u8;
    }
}

fn naive_flip_rgb24(buf: &mut [u8], width: usize) {
    for row in buf.chunks_exact_mut(width * 3) {
        for x in 0..width / 2 {
            for c in 0..3 {
                row.swap(x * 3 + c, (width - 1 - x) * 3 + c);
            }
        }
    }
}

// === Benchmark helpers ===

const W: u16 = 640;
const H: u16 = 480;

fn source(format: PixelFormat) -> Image {
    let mut img = Image::new(W, H, format).unwrap();
    for (i, b) in img.data_mut().iter_mut().enumerate() {
        *b = (i % 251) as u8;
    }
    img
}

/// Benchmark one pair routine into a reused destination.
fn bench_pair(
    group: &mut BenchmarkGroup<WallTime>,
    routine: fn(&Image, &mut Image) -> Result<(), zenraw::ImageError>,
    from: PixelFormat,
    to: PixelFormat,
) {
    let src = source(from);
    let name = format!("{}_to_{}", from.name(), to.name());
    group.bench_function(name, |b| {
        let mut dst = Image::new(W, H, to).unwrap();
        b.iter(|| routine(&src, &mut dst).unwrap());
    });
}

// === Benchmark groups ===

fn bench_yuv_to_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("yuv_to_rgb");
    group.throughput(Throughput::Elements(u64::from(W) * u64::from(H)));
    bench_pair(&mut group, yuv444_to_rgb24, PixelFormat::Yuv444, PixelFormat::Rgb24);
    bench_pair(&mut group, yuv420p_to_rgb24, PixelFormat::Yuv420p, PixelFormat::Rgb24);
    bench_pair(&mut group, yuv420p_to_rgb565, PixelFormat::Yuv420p, PixelFormat::Rgb565);
    group.finish();
}

fn bench_rgb_to_yuv(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_yuv");
    group.throughput(Throughput::Elements(u64::from(W) * u64::from(H)));
    bench_pair(&mut group, rgb24_to_yuv444, PixelFormat::Rgb24, PixelFormat::Yuv444);
    bench_pair(&mut group, rgb24_to_yuv420p, PixelFormat::Rgb24, PixelFormat::Yuv420p);
    bench_pair(&mut group, rgb565_to_yuv420p, PixelFormat::Rgb565, PixelFormat::Yuv420p);
    group.finish();
}

fn bench_reshuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshuffle");
    group.throughput(Throughput::Elements(u64::from(W) * u64::from(H)));
    bench_pair(&mut group, yuv444_to_yuv444p, PixelFormat::Yuv444, PixelFormat::Yuv444p);
    bench_pair(&mut group, yuv444p_to_yuv420p, PixelFormat::Yuv444p, PixelFormat::Yuv420p);
    group.finish();
}

fn bench_grayscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb24_to_grayscale");
    group.throughput(Throughput::Elements(u64::from(W) * u64::from(H)));
    bench_pair(&mut group, rgb24_to_grayscale, PixelFormat::Rgb24, PixelFormat::Grayscale);
    let src = source(PixelFormat::Rgb24);
    group.bench_function("naive", |b| {
        let mut dst = vec![0u8; usize::from(W) * usize::from(H)];
        b.iter(|| naive_rgb24_to_grayscale(src.data(), &mut dst));
    });
    group.finish();
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_y");
    group.throughput(Throughput::Elements(u64::from(W) * u64::from(H)));
    for format in [PixelFormat::Rgb24, PixelFormat::Yuv420p, PixelFormat::Rgb565] {
        let mut img = source(format);
        group.bench_function(format.name(), |b| b.iter(|| flip_y(&mut img)));
    }
    let mut buf = source(PixelFormat::Rgb24).into_data();
    group.bench_function("naive_rgb24", |b| {
        b.iter(|| naive_flip_rgb24(&mut buf, usize::from(W)))
    });
    group.finish();
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_yuv_to_rgb(&mut criterion);
    bench_rgb_to_yuv(&mut criterion);
    bench_reshuffle(&mut criterion);
    bench_grayscale(&mut criterion);
    bench_flip(&mut criterion);
    criterion.final_summary();
}
