//! Geometry helpers shared by hit-testing, freehand capture and the renderers.
//!
//! All functions are pure: the same input always produces the same output,
//! which keeps freehand smoothing deterministic across runs.

use smallvec::SmallVec;

use crate::model::{Point, RinkElement};

/// Spacing between zigzag corners on lateral arrows.
const ZIGZAG_SPACING: f64 = 14.0;
/// Perpendicular offset of zigzag corners.
const ZIGZAG_AMPLITUDE: f64 = 6.0;
const MIN_ZIGZAG_SEGMENTS: usize = 4;

/// Distance from `(px, py)` to the segment `(x1, y1)-(x2, y2)`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to that endpoint. Zero-length segments degrade to a point.
pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }
    let t = (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = x1 + t * dx;
    let cy = y1 + t * dy;
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

/// Distance used for picking an element.
///
/// Point-like elements measure to their centre, arrows to their segment and
/// freehand strokes to the closest of their segments. A stroke without any
/// segment reports `f64::INFINITY` so it can never be picked.
pub fn distance_point_to_element(px: f64, py: f64, element: &RinkElement) -> f64 {
    match element {
        RinkElement::Marker(_)
        | RinkElement::Puck(_)
        | RinkElement::Pylon(_)
        | RinkElement::Net(_) => element
            .position()
            .map(|c| c.distance_to(&Point::new(px, py)))
            .unwrap_or(f64::INFINITY),
        RinkElement::Arrow(a) => distance_to_segment(px, py, a.x1, a.y1, a.x2, a.y2),
        RinkElement::Freehand(f) => f
            .points
            .windows(2)
            .map(|w| distance_to_segment(px, py, w[0].x, w[0].y, w[1].x, w[1].y))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Whether `(px, py)` is within `threshold` of the element.
pub fn hit_test(px: f64, py: f64, element: &RinkElement, threshold: f64) -> bool {
    distance_point_to_element(px, py, element) < threshold
}

/// Closest element strictly within `threshold`.
///
/// Linear scan in draw order. On equal distances the first element
/// encountered wins; this is a plain tie-break, not tuned for dense diagrams.
pub fn nearest_element_within<'a>(
    px: f64,
    py: f64,
    elements: &'a [RinkElement],
    threshold: f64,
) -> Option<&'a RinkElement> {
    let mut best: Option<(&RinkElement, f64)> = None;
    for element in elements {
        let d = distance_point_to_element(px, py, element);
        if d >= threshold {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((element, d)),
        }
    }
    best.map(|(element, _)| element)
}

/// Thins a raw pointer trail.
///
/// Keeps the first point and every later point farther than `min_distance`
/// from the last kept one. The final point is always kept.
pub fn decimate_points(points: &[Point], min_distance: f64) -> Vec<Point> {
    let Some((first, _)) = points.split_first() else {
        return Vec::new();
    };
    let min_sq = min_distance * min_distance;
    let mut kept = vec![*first];
    let mut last_index = 0;

    for (i, p) in points.iter().enumerate().skip(1) {
        let last = &points[last_index];
        let dx = p.x - last.x;
        let dy = p.y - last.y;
        if dx * dx + dy * dy > min_sq {
            kept.push(*p);
            last_index = i;
        }
    }

    let final_index = points.len() - 1;
    if last_index != final_index {
        kept.push(points[final_index]);
    }
    kept
}

/// Chaikin corner cutting.
///
/// Every pass replaces each segment with its 1/4 and 3/4 points while the
/// endpoints stay fixed. Inputs with fewer than three points are returned
/// unchanged.
pub fn chaikin_smooth(points: &[Point], iterations: usize) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut current = points.to_vec();
    for _ in 0..iterations {
        let mut next = Vec::with_capacity(current.len() * 2);
        next.push(current[0]);
        for w in current.windows(2) {
            next.push(w[0].lerp(&w[1], 0.25));
            next.push(w[0].lerp(&w[1], 0.75));
        }
        next.push(current[current.len() - 1]);
        current = next;
    }
    current
}

/// Triangle of an arrowhead whose tip sits at `tip`, pointing away from `tail`.
pub fn arrowhead(tip: Point, tail: Point, size: f64) -> [Point; 3] {
    let (ux, uy) = unit(tail, tip).unwrap_or((1.0, 0.0));
    let base = Point::new(tip.x - ux * size, tip.y - uy * size);
    let half = size * 0.5;
    [
        tip,
        Point::new(base.x - uy * half, base.y + ux * half),
        Point::new(base.x + uy * half, base.y - ux * half),
    ]
}

/// Corners of the zigzag drawn for lateral arrows, endpoints included.
///
/// Always at least four segments; longer arrows get one per ~14 units.
pub fn zigzag_points(start: Point, end: Point) -> SmallVec<[Point; 32]> {
    let mut points = SmallVec::new();
    let Some((ux, uy)) = unit(start, end) else {
        points.push(start);
        points.push(end);
        return points;
    };

    let length = start.distance_to(&end);
    let segments = ((length / ZIGZAG_SPACING).round() as usize).max(MIN_ZIGZAG_SEGMENTS);
    // Perpendicular to the travel direction.
    let (nx, ny) = (-uy, ux);

    points.push(start);
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        let along = start.lerp(&end, t);
        let offset = if i % 2 == 1 {
            ZIGZAG_AMPLITUDE
        } else {
            -ZIGZAG_AMPLITUDE
        };
        points.push(Point::new(along.x + nx * offset, along.y + ny * offset));
    }
    points.push(end);
    points
}

fn unit(from: Point, to: Point) -> Option<(f64, f64)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f64::EPSILON {
        None
    } else {
        Some((dx / len, dy / len))
    }
}
