// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size, Vector};
use iced_picker::application::{resolve_in_order, Resolution};
use iced_picker::application::port::{ImageSource, SourceError};
use iced_picker::domain::{ImageData, ImageId, LibraryEntry};
use iced_picker::ui::picker::{Effect, Message, PickerConfig, State};
use iced_picker::ui::state::{ViewportState, ZoomMultiple};
use std::hint::black_box;

fn viewport_gestures_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");

    let mut viewport = ViewportState::new(ZoomMultiple::default());
    viewport.set_bounds(Size::new(1280.0, 800.0));
    viewport.reset(Some(Size::new(4000.0, 3000.0)));

    group.bench_function("pinch_and_pan_sequence", |b| {
        b.iter(|| {
            let mut vp = viewport.clone();
            for step in 0..100 {
                let factor = if step % 2 == 0 { 1.1 } else { 0.95 };
                vp.zoom_at(black_box(factor), Point::new(640.0, 400.0));
                vp.pan_by(black_box(Vector::new(13.0, -7.0)));
            }
            black_box(vp.offset())
        });
    });

    group.bench_function("resize_refit", |b| {
        b.iter(|| {
            let mut vp = viewport.clone();
            for width in (400..1600).step_by(40) {
                vp.set_bounds(black_box(Size::new(width as f32, 700.0)));
            }
            black_box(vp.scale())
        });
    });

    group.finish();
}

/// Library of `n` one-pixel images named by their index.
struct Numbered;

impl ImageSource for Numbered {
    fn capture(&self) -> Result<ImageData, SourceError> {
        Err(SourceError::Unavailable("no camera".into()))
    }

    fn enumerate_library(&self) -> Result<Vec<LibraryEntry>, SourceError> {
        Ok((0..500)
            .map(|i| LibraryEntry::new(ImageId::new(format!("{i:04}")), pixel()))
            .collect())
    }

    fn resolve(&self, _id: &ImageId) -> Result<ImageData, SourceError> {
        Ok(pixel())
    }
}

fn pixel() -> ImageData {
    ImageData::from_rgba(1, 1, vec![0; 4])
}

fn picker_finalize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker");
    let source = Numbered;

    group.bench_function("finalize_500_reversed", |b| {
        b.iter(|| {
            let mut picker = State::new(PickerConfig::default());
            let Effect::Enumerate { request } = picker.initialize() else {
                return;
            };
            picker.handle_message(Message::Enumerated {
                request,
                result: source.enumerate_library(),
            });
            for index in (0..500).rev() {
                let _ = picker.toggle_selection(index);
            }
            let Effect::Resolve { request, ids } = picker.finalize() else {
                return;
            };
            let mut results: Vec<Resolution> = resolve_in_order(&source, &ids);
            results.reverse();
            black_box(picker.handle_message(Message::Resolved { request, results }));
        });
    });

    group.finish();
}

criterion_group!(benches, viewport_gestures_benchmark, picker_finalize_benchmark);
criterion_main!(benches);
