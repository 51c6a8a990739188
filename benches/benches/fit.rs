// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use stagefit_scaler::{
    ContentScaler, HorizontalAlign, ScaleBounds, ScaleMode, ScalerConfig, VerticalAlign, layout,
};

const CONTENT: Size = Size::new(1280.0, 720.0);

fn configs() -> [(&'static str, ScalerConfig); 3] {
    [
        ("show_all", ScalerConfig::default()),
        (
            "no_border_masked",
            ScalerConfig::default()
                .with_scale_mode(ScaleMode::NoBorder)
                .with_mask_enabled(true),
        ),
        (
            "bounded_masked",
            ScalerConfig::default()
                .with_align(VerticalAlign::Bottom, HorizontalAlign::Left)
                .with_bounds(ScaleBounds::UNBOUNDED.with_max(Some(1.0)).unwrap())
                .with_mask_enabled(true),
        ),
    ]
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit/layout");
    let screen = Size::new(1920.0, 1200.0);

    for (name, config) in configs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| black_box(layout(black_box(CONTENT), black_box(screen), config)));
        });
    }

    group.finish();
}

fn bench_resize_sweep(c: &mut Criterion) {
    // Models a window being dragged through many sizes.
    let screens: Vec<Size> = (0..256)
        .map(|i| Size::new(640.0 + f64::from(i) * 5.0, 360.0 + f64::from(i) * 3.0))
        .collect();
    let config = ScalerConfig::default().with_mask_enabled(true);

    c.bench_function("fit/scaler_resize_sweep", |b| {
        let mut scaler = ContentScaler::with_config(CONTENT, screens[0], config).unwrap();
        b.iter(|| {
            for &screen in &screens {
                scaler.set_screen_size(screen).unwrap();
                black_box(scaler.scale());
            }
        });
    });
}

criterion_group!(benches, bench_layout, bench_resize_sweep);
criterion_main!(benches);
