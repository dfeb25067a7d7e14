use sunpath_core::{RecordingSurface, RenderOptions, Sample, SunPathChart};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> SunPathChart {
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let hour = i as f64 * 24.0 / n as f64;
        let alt = 60.0 * (std::f64::consts::PI * (hour - 6.0) / 12.0).sin();
        samples.push(Sample::new(hour, Some(alt), None, ""));
    }
    SunPathChart::new(samples).with_selected_time("15:20")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sun_path");
    for &n in &[96usize, 1440usize] {
        let chart = build_chart(n);
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        group.bench_function(format!("png_{n}"), |b| {
            b.iter(|| {
                let bytes = chart.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
        group.bench_function(format!("recording_{n}"), |b| {
            b.iter(|| {
                let mut surface = RecordingSurface::new(opts.width, opts.height);
                chart.draw(&mut surface, &opts);
                black_box(surface.ops().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
