use std::collections::VecDeque;

use super::rectangle::Rectangle;
use super::types::{Direction, Point};

/// A corner of the head's path: where the turn happened and the heading the head had
/// while approaching it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pivot {
    pub point: Point,
    pub incoming: Direction,
}

/// One trailing body unit. `has_pivoted` is true once the segment has rounded the most
/// recent corner and travels on the head's current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub body: Rectangle,
    pub has_pivoted: bool,
}

impl Segment {
    pub fn new(body: Rectangle) -> Self {
        Self {
            body,
            has_pivoted: false,
        }
    }
}

/// Corners of the head's path, newest first.
///
/// Every leg is axis-aligned, so the path length between consecutive corners is their
/// manhattan distance. Positions behind the head are found by walking that polyline, which
/// keeps segments on the head's path regardless of step size or how many turns are taken
/// before a segment reaches a corner.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    pivots: VecDeque<Pivot>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pivot: Pivot) {
        self.pivots.push_front(pivot);
    }

    pub fn latest(&self) -> Option<&Pivot> {
        self.pivots.front()
    }

    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pivot> {
        self.pivots.iter()
    }

    /// The point `distance` units of path length behind `head`, where the head is
    /// currently travelling along `heading`. Past the oldest corner the path is extended
    /// straight back along that corner's incoming heading.
    pub fn point_behind(&self, head: Point, heading: Direction, distance: i32) -> Point {
        let mut from = head;
        let mut leg_heading = heading;
        let mut remaining = distance;

        for pivot in &self.pivots {
            let leg = from.manhattan_distance(&pivot.point);
            if remaining <= leg {
                return from.moved(leg_heading.opposite(), remaining);
            }
            remaining -= leg;
            from = pivot.point;
            leg_heading = pivot.incoming;
        }

        from.moved(leg_heading.opposite(), remaining)
    }

    /// Path length from the head back to the newest corner, if there is one.
    pub fn current_leg_length(&self, head: Point) -> Option<i32> {
        self.latest().map(|pivot| head.manhattan_distance(&pivot.point))
    }

    /// Drops corners that nothing within `reach` of the head can still need. The first
    /// corner at or beyond `reach` is kept because it bounds the last leg in use.
    pub fn prune(&mut self, head: Point, reach: i32) {
        let mut from = head;
        let mut travelled = 0;

        for (index, pivot) in self.pivots.iter().enumerate() {
            travelled += from.manhattan_distance(&pivot.point);
            if travelled >= reach {
                self.pivots.truncate(index + 1);
                return;
            }
            from = pivot.point;
        }
    }
}

/// Places every segment `size * (index + 1)` units of path behind the head.
pub fn follow_segments(
    head: &Rectangle,
    heading: Direction,
    trail: &mut Trail,
    segments: &mut [Segment],
) {
    let size = head.size();
    let head_position = head.position();
    let current_leg = trail.current_leg_length(head_position);

    for (index, segment) in segments.iter_mut().enumerate() {
        let offset = size * (index as i32 + 1);
        let position = trail.point_behind(head_position, heading, offset);
        segment.body.set_position(position);

        if !segment.has_pivoted {
            segment.has_pivoted = current_leg.is_none_or(|leg| offset <= leg);
        }
    }

    // One spare box so that a segment grown on the next tick still finds its corner.
    let reach = size * (segments.len() as i32 + 2);
    trail.prune(head_position, reach);
}
