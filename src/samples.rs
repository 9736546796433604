//! Sample wall footprints for demos and tests.
//!
//! All outlines wind counter-clockwise so the coursing offset lands inside
//! the wall. Rings are open: append the first vertex to course the closing
//! edge.

use crate::math::Point2;

fn ring(coords: &[[f64; 2]]) -> Vec<Point2> {
    coords.iter().map(|c| Point2::new(c[0], c[1])).collect()
}

/// Right isoceles triangle with one 45° corner.
#[must_use]
pub fn triangle() -> Vec<Point2> {
    ring(&[[0.0, 0.0], [10.0, 10.0], [0.0, 10.0]])
}

/// Nearly-square box sized so edge spans end in a fractional brick.
#[must_use]
pub fn sample_box() -> Vec<Point2> {
    ring(&[[0.0, 0.0], [9.8, 0.0], [9.8, 9.8], [0.0, 9.8]])
}

/// Irregular pentagon with obtuse corners only.
#[must_use]
pub fn pentagon() -> Vec<Point2> {
    ring(&[[12.0, 6.0], [6.0, 10.0], [0.0, 6.0], [0.0, 0.0], [12.0, 0.0]])
}

/// M-shaped outline with two reflex notch corners.
#[must_use]
pub fn mshape() -> Vec<Point2> {
    ring(&[
        [12.0, 0.0],
        [12.0, 10.0],
        [8.0, 6.0],
        [4.0, 6.0],
        [0.0, 10.0],
        [0.0, 0.0],
    ])
}

/// Larger outline mixing slanted and axis-aligned edges.
#[must_use]
pub fn complex() -> Vec<Point2> {
    ring(&[
        [0.0, 0.0],
        [7.2, 0.0],
        [14.2, 8.8],
        [18.0, 8.8],
        [19.8, 0.0],
        [29.4, 0.0],
        [29.6, 12.0],
        [0.0, 12.0],
    ])
}

/// Variant of [`complex`] with the slanted bay folded below the baseline.
#[must_use]
pub fn complex2() -> Vec<Point2> {
    ring(&[
        [0.0, 0.0],
        [7.2, 0.0],
        [10.2, -8.8],
        [18.0, -8.8],
        [19.8, 0.0],
        [29.6, 0.0],
        [29.6, 12.0],
        [0.0, 12.0],
    ])
}

/// Variant of [`complex2`] with an acute spike and an inner recess.
#[must_use]
pub fn complex3() -> Vec<Point2> {
    ring(&[
        [0.0, 0.0],
        [7.2, 0.0],
        [10.2, -8.8],
        [18.0, -8.8],
        [19.8, 0.0],
        [29.6, 0.0],
        [29.6, 12.0],
        [25.0, 39.0],
        [20.0, 15.0],
        [10.0, 12.0],
        [10.0, 6.2],
        [5.0, 6.2],
        [5.0, 12.0],
        [0.0, 12.0],
    ])
}

/// Every sample footprint, paired with its name.
#[must_use]
pub fn all() -> Vec<(&'static str, Vec<Point2>)> {
    vec![
        ("triangle", triangle()),
        ("box", sample_box()),
        ("pentagon", pentagon()),
        ("mshape", mshape()),
        ("complex", complex()),
        ("complex2", complex2()),
        ("complex3", complex3()),
    ]
}
