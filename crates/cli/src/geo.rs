//! `.geo` scene format.
//!
//! One shape per line: `c id x y r stroke fill`, `r id x y w h stroke fill`,
//! `l id x1 y1 x2 y2 color`, `t id x y stroke fill anchor content…`. The
//! `ts family weight size` directive updates the text style applied to
//! subsequent `t` lines; the style is a local of the parse loop, never a
//! process-wide default. Blank lines and `#` comments are skipped; malformed
//! lines warn and are skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sightline::geom::Rect;
use sightline::scene::{Anchor, Shape, ShapeKind, TextStyle};

pub fn read_geo(path: &Path) -> Result<Vec<Shape>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scene file {}", path.display()))?;
    Ok(parse_geo(&text))
}

pub fn parse_geo(text: &str) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let mut style = TextStyle::default();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let parsed = match tokens[0] {
            "c" => parse_circle(&tokens),
            "r" => parse_rect(&tokens),
            "l" => parse_line(&tokens),
            "t" => parse_text(&tokens, &style),
            "ts" => {
                update_style(&mut style, &tokens);
                continue;
            }
            other => {
                tracing::warn!(line = lineno + 1, command = other, "unknown scene command");
                continue;
            }
        };
        match parsed {
            Some(shape) => shapes.push(shape),
            None => tracing::warn!(line = lineno + 1, content = line, "malformed scene line"),
        }
    }
    shapes
}

fn parse_circle(t: &[&str]) -> Option<Shape> {
    if t.len() != 7 {
        return None;
    }
    Some(Shape::new(
        t[1].parse().ok()?,
        ShapeKind::Circle {
            cx: t[2].parse().ok()?,
            cy: t[3].parse().ok()?,
            r: t[4].parse().ok()?,
            stroke: t[5].to_string(),
            fill: t[6].to_string(),
        },
    ))
}

fn parse_rect(t: &[&str]) -> Option<Shape> {
    if t.len() != 8 {
        return None;
    }
    Some(Shape::new(
        t[1].parse().ok()?,
        ShapeKind::Rect {
            x: t[2].parse().ok()?,
            y: t[3].parse().ok()?,
            w: t[4].parse().ok()?,
            h: t[5].parse().ok()?,
            stroke: t[6].to_string(),
            fill: t[7].to_string(),
        },
    ))
}

fn parse_line(t: &[&str]) -> Option<Shape> {
    if t.len() != 7 {
        return None;
    }
    Some(Shape::new(
        t[1].parse().ok()?,
        ShapeKind::Line {
            x1: t[2].parse().ok()?,
            y1: t[3].parse().ok()?,
            x2: t[4].parse().ok()?,
            y2: t[5].parse().ok()?,
            color: t[6].to_string(),
        },
    ))
}

fn parse_text(t: &[&str], style: &TextStyle) -> Option<Shape> {
    if t.len() < 7 {
        return None;
    }
    let anchor = Anchor::from_code(t[6].chars().next()?)?;
    Some(Shape::new(
        t[1].parse().ok()?,
        ShapeKind::Text {
            x: t[2].parse().ok()?,
            y: t[3].parse().ok()?,
            stroke: t[4].to_string(),
            fill: t[5].to_string(),
            anchor,
            content: t[7..].join(" "),
            style: style.clone(),
        },
    ))
}

/// Partial updates allowed: `ts family`, `ts family weight`, or all three.
fn update_style(style: &mut TextStyle, t: &[&str]) {
    if t.len() >= 2 {
        style.family = t[1].to_string();
    }
    if t.len() >= 3 {
        style.weight = t[2].to_string();
    }
    if t.len() >= 4 {
        if let Ok(size) = t[3].trim_end_matches(|c: char| c.is_alphabetic()).parse::<f64>() {
            if size > 0.0 {
                style.size = size;
            }
        }
    }
}

/// Scene bounds from shape extents; an empty scene gets a unit-100 box.
pub fn scene_bounds(shapes: &[Shape]) -> Rect {
    let mut it = shapes.iter();
    let Some(first) = it.next() else {
        return Rect::new(0.0, 0.0, 100.0, 100.0);
    };
    let mut bounds = first.bounds();
    for shape in it {
        bounds = bounds.union(&shape.bounds());
    }
    bounds
}
