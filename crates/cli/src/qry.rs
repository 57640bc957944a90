//! `.qry` command format.
//!
//! One query per line: `a i j [h|v]` (shield conversion by id range),
//! `d x y tag` (destroy), `P x y color tag` (paint, lowercase accepted),
//! `cln x y dx dy tag` (clone). The tag `-` folds the query's region into the
//! composite render; any other tag gives the query its own SVG.

use sightline::query::Query;
use sightline::scene::ChordAxis;
use sightline::Vec2;

pub fn parse_qry(text: &str) -> Vec<Query> {
    let mut queries = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let parsed = match tokens[0] {
            "a" => parse_shield(&tokens),
            "d" => parse_destroy(&tokens),
            "P" | "p" => parse_paint(&tokens),
            "cln" => parse_clone(&tokens),
            other => {
                tracing::warn!(line = lineno + 1, command = other, "unknown query command");
                continue;
            }
        };
        match parsed {
            Some(q) => queries.push(q),
            None => tracing::warn!(line = lineno + 1, content = line, "malformed query line"),
        }
    }
    queries
}

fn parse_shield(t: &[&str]) -> Option<Query> {
    if t.len() < 3 || t.len() > 4 {
        return None;
    }
    let axis = match t.get(3) {
        Some(s) => ChordAxis::from_code(s.chars().next()?),
        None => ChordAxis::default(),
    };
    Some(Query::Shield {
        first: t[1].parse().ok()?,
        last: t[2].parse().ok()?,
        axis,
    })
}

fn parse_destroy(t: &[&str]) -> Option<Query> {
    if t.len() != 4 {
        return None;
    }
    Some(Query::Destroy {
        at: Vec2::new(t[1].parse().ok()?, t[2].parse().ok()?),
        tag: t[3].to_string(),
    })
}

fn parse_paint(t: &[&str]) -> Option<Query> {
    if t.len() != 5 {
        return None;
    }
    Some(Query::Paint {
        at: Vec2::new(t[1].parse().ok()?, t[2].parse().ok()?),
        color: t[3].to_string(),
        tag: t[4].to_string(),
    })
}

fn parse_clone(t: &[&str]) -> Option<Query> {
    if t.len() != 6 {
        return None;
    }
    Some(Query::Clone {
        at: Vec2::new(t[1].parse().ok()?, t[2].parse().ok()?),
        offset: Vec2::new(t[3].parse().ok()?, t[4].parse().ok()?),
        tag: t[5].to_string(),
    })
}
