// Copyright 2025 the Stagefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-style tests for the `stagefit_scaler` crate.
//!
//! These sweep a small grid of content and screen sizes and check the
//! relationships that must hold between scale modes, bounds, placement,
//! visible rectangles and mask bands.

use kurbo::{Point, Rect, Size};
use stagefit_scaler::{
    HorizontalAlign, ScaleBounds, ScaleMode, ScalerConfig, VerticalAlign, clamp_scale,
    compute_scale, layout, mask_rects, place, visible_logical_rect,
};

const DIMS: [f64; 6] = [1.0, 3.5, 64.0, 100.0, 333.0, 1920.0];

const V_ALIGNS: [VerticalAlign; 3] = [
    VerticalAlign::Top,
    VerticalAlign::Middle,
    VerticalAlign::Bottom,
];

const H_ALIGNS: [HorizontalAlign; 3] = [
    HorizontalAlign::Left,
    HorizontalAlign::Center,
    HorizontalAlign::Right,
];

fn sizes() -> impl Iterator<Item = Size> {
    DIMS.into_iter()
        .flat_map(|w| DIMS.into_iter().map(move |h| Size::new(w, h)))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn show_all_never_exceeds_no_border() {
    for content in sizes() {
        for screen in sizes() {
            let contain = compute_scale(content, screen, ScaleMode::ShowAll);
            let cover = compute_scale(content, screen, ScaleMode::NoBorder);
            assert!(contain > 0.0, "scale must be positive");
            assert!(
                contain <= cover,
                "ShowAll {contain} > NoBorder {cover} for {content:?} on {screen:?}"
            );
            assert_eq!(compute_scale(content, screen, ScaleMode::NoScale), 1.0);
        }
    }
}

#[test]
fn show_all_content_stays_on_screen() {
    for content in sizes() {
        for screen in sizes() {
            let scale = compute_scale(content, screen, ScaleMode::ShowAll);
            for v in V_ALIGNS {
                for h in H_ALIGNS {
                    let rect = place(content, screen, scale, v, h);
                    let slack = 1e-9 * screen.width.max(screen.height);
                    assert!(rect.min_x() >= -slack, "{rect:?} left of {screen:?}");
                    assert!(rect.min_y() >= -slack, "{rect:?} above {screen:?}");
                    assert!(rect.max_x() <= screen.width + slack, "{rect:?} right of {screen:?}");
                    assert!(rect.max_y() <= screen.height + slack, "{rect:?} below {screen:?}");
                }
            }
        }
    }
}

#[test]
fn no_border_content_covers_screen() {
    for content in sizes() {
        for screen in sizes() {
            let scale = compute_scale(content, screen, ScaleMode::NoBorder);
            let rect = place(
                content,
                screen,
                scale,
                VerticalAlign::Middle,
                HorizontalAlign::Center,
            );
            assert!(rect.width() + 1e-9 * rect.width() >= screen.width, "{rect:?}");
            assert!(rect.height() + 1e-9 * rect.height() >= screen.height, "{rect:?}");
        }
    }
}

#[test]
fn visible_rect_size_is_screen_over_scale() {
    for content in sizes() {
        for screen in sizes() {
            for mode in [ScaleMode::ShowAll, ScaleMode::NoBorder, ScaleMode::NoScale] {
                let scale = compute_scale(content, screen, mode);
                let rect = place(
                    content,
                    screen,
                    scale,
                    VerticalAlign::Bottom,
                    HorizontalAlign::Left,
                );
                let visible = visible_logical_rect(screen, rect, scale);
                assert!(approx(visible.width(), screen.width / scale), "{visible:?}");
                assert!(approx(visible.height(), screen.height / scale), "{visible:?}");
            }
        }
    }
}

#[test]
fn clamping_is_idempotent() {
    let bounds = [
        ScaleBounds::UNBOUNDED,
        ScaleBounds::new(Some(0.5), None).unwrap(),
        ScaleBounds::new(None, Some(2.0)).unwrap(),
        ScaleBounds::new(Some(0.75), Some(1.25)).unwrap(),
        ScaleBounds::new(Some(1.0), Some(1.0)).unwrap(),
    ];
    for b in bounds {
        for s in [0.01, 0.5, 0.75, 1.0, 1.1, 1.25, 2.0, 40.0] {
            let once = clamp_scale(s, b);
            assert_eq!(clamp_scale(once, b), once, "bounds {b:?}, scale {s}");
            if let Some(min) = b.min() {
                assert!(once >= min);
            }
            if let Some(max) = b.max() {
                assert!(once <= max);
            }
        }
    }
}

/// Samples pixel centers and checks every one is covered by content or a band.
fn assert_covers(screen: Size, content_rect: Rect, bands: &[Rect]) {
    let step = 0.5;
    let mut y = step / 2.0;
    while y < screen.height {
        let mut x = step / 2.0;
        while x < screen.width {
            let pt = Point::new(x, y);
            let in_content = content_rect.contains(pt);
            let in_band = bands.iter().any(|b| b.contains(pt));
            assert!(
                in_content || in_band,
                "gap at {pt:?}: content {content_rect:?}, bands {bands:?}"
            );
            assert!(
                !(in_content && in_band),
                "band over content at {pt:?}: content {content_rect:?}, bands {bands:?}"
            );
            x += step;
        }
        y += step;
    }
}

#[test]
fn mask_and_content_cover_the_screen() {
    let screen = Size::new(40.0, 30.0);
    let contents = [
        Size::new(20.0, 10.0),
        Size::new(10.0, 20.0),
        Size::new(40.0, 30.0),
        Size::new(7.0, 7.0),
    ];
    for content in contents {
        for v in V_ALIGNS {
            for h in H_ALIGNS {
                let rect = place(content, screen, 1.0, v, h);
                let bands = mask_rects(screen, rect);
                assert!(bands.len() <= 4);
                for band in &bands {
                    assert!(band.area() > 0.0, "empty band {band:?}");
                }
                assert_covers(screen, rect, &bands);
            }
        }
    }
}

#[test]
fn worked_examples() {
    let content = Size::new(200.0, 100.0);
    let screen = Size::new(400.0, 100.0);

    let contain = layout(content, screen, &ScalerConfig::default());
    assert_eq!(contain.scale, 1.0);
    assert_eq!(contain.content_rect, Rect::from_origin_size((100.0, 0.0), (200.0, 100.0)));

    let cover = layout(
        content,
        screen,
        &ScalerConfig::default().with_scale_mode(ScaleMode::NoBorder),
    );
    assert_eq!(cover.scale, 2.0);
    assert_eq!(cover.content_rect.size(), Size::new(400.0, 200.0));

    let bounded = layout(
        content,
        screen,
        &ScalerConfig::default().with_bounds(ScaleBounds::new(Some(1.5), None).unwrap()),
    );
    assert_eq!(bounded.scale, 1.5);
}

#[test]
fn layout_is_idempotent() {
    let config = ScalerConfig::default()
        .with_scale_mode(ScaleMode::NoBorder)
        .with_align(VerticalAlign::Top, HorizontalAlign::Right)
        .with_mask_enabled(true);
    let content = Size::new(640.0, 480.0);
    let screen = Size::new(1024.0, 600.0);
    assert_eq!(
        layout(content, screen, &config),
        layout(content, screen, &config)
    );
}

#[cfg(feature = "serde")]
#[test]
fn config_deserializes_with_defaults() {
    let config: ScalerConfig = serde_json::from_str(
        r#"{ "scale_mode": "NoBorder", "bounds": { "max": 2.0 } }"#,
    )
    .unwrap();
    assert_eq!(config.scale_mode, ScaleMode::NoBorder);
    assert_eq!(config.vertical_align, VerticalAlign::Middle);
    assert_eq!(config.bounds.max(), Some(2.0));
    assert!(!config.mask.enabled);

    let err = serde_json::from_str::<ScalerConfig>(r#"{ "bounds": { "min": 3.0, "max": 2.0 } }"#);
    assert!(err.is_err());
}
