// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A practice round driven by a scripted "child" who traces the glyph outline.
//!
//! The tracer follows the letter's own contour with the default 12 px brush,
//! so the result shows how far an outline-only trace gets on coverage.
//!
//! Run:
//! - `cargo run -p qalam_demos --example trace_letter -- path/to/font.ttf ب`

use anyhow::{Context, Result, bail};
use kurbo::{BezPath, PathEl};
use qalam_glyph::{FontFace, GlyphRenderer};
use qalam_lesson::{Category, PracticeRound, RecordingSpeaker};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut args = std::env::args().skip(1);
    let Some(font_path) = args.next() else {
        bail!("usage: trace_letter <font.ttf> [character]");
    };
    let glyph = args.next().unwrap_or_else(|| "ب".to_owned());

    let data = std::fs::read(&font_path).with_context(|| format!("reading {font_path}"))?;
    let renderer = GlyphRenderer::new(FontFace::from_bytes(&data)?);

    let (category, index) = Category::ALL
        .into_iter()
        .find_map(|c| {
            let index = c.entries().iter().position(|e| e.glyph == glyph)?;
            Some((c, index))
        })
        .with_context(|| format!("{glyph:?} is not in any practice category"))?;

    let mut round = PracticeRound::new(RecordingSpeaker::new());
    round.select(category);
    round.go_to(index);
    if let Some(entry) = round.current() {
        let spoken = entry.spoken_text();
        println!("{} {}: {spoken}", category.emoji(), category.name());
        println!("illustration search: {:?}", entry.media_query());
    }

    let config = *round.config();
    let outline = renderer.outline_text(&glyph, config.canvas_width, config.canvas_height)?;
    trace_outline(&mut round, &outline);

    let result = round.check(&renderer);
    let said = round.speaker().last().map_or("", |u| u.text.as_str());
    let (points, score) = (result.points(), round.score());
    println!("result: {result:?} (+{points}), score {score}");
    println!("feedback: {said}");
    Ok(())
}

/// Feeds every contour of `outline` to the round as one stroke.
fn trace_outline(round: &mut PracticeRound<RecordingSpeaker>, outline: &BezPath) {
    let canvas = round.capture_mut();
    let mut start = None;
    kurbo::flatten(outline, 1.0, |el| match el {
        PathEl::MoveTo(p) => {
            canvas.end_stroke();
            canvas.start_stroke(p);
            start = Some(p);
        }
        PathEl::LineTo(p) => {
            canvas.append_to_stroke(p);
        }
        PathEl::ClosePath => {
            if let Some(p) = start {
                canvas.append_to_stroke(p);
            }
        }
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    canvas.end_stroke();
    log::info!("traced {} contours", canvas.drawing().strokes().len());
}
