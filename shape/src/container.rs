//! Output containers for decoded shapes.

use std::collections::{LinkedList, VecDeque};

use crate::point::FromLonLat;

/// A growable sequence that decoded points are appended to.
///
/// Containers that can reserve capacity up front override
/// [`reserve_points`](Self::reserve_points); the rest keep the no-op default.
/// Reservation only affects allocation, never the decoded result.
pub trait PointContainer: Default {
    /// The point type stored in the container.
    type Point: FromLonLat;

    /// Appends a point to the end of the sequence.
    fn push_point(&mut self, point: Self::Point);

    /// Hints that roughly `additional` more points are coming.
    fn reserve_points(&mut self, additional: usize) {
        let _ = additional;
    }
}

impl<P: FromLonLat> PointContainer for Vec<P> {
    type Point = P;

    fn push_point(&mut self, point: P) {
        self.push(point);
    }

    fn reserve_points(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<P: FromLonLat> PointContainer for VecDeque<P> {
    type Point = P;

    fn push_point(&mut self, point: P) {
        self.push_back(point);
    }

    fn reserve_points(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<P: FromLonLat> PointContainer for LinkedList<P> {
    type Point = P;

    fn push_point(&mut self, point: P) {
        self.push_back(point);
    }
}
