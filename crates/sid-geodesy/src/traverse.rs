//! Segment traversal over an axis-aligned cell lattice.
//!
//! 3-D DDA (Amanatides & Woo) in continuous cell coordinates: each axis is
//! measured in units of its own cell size, so horizontal and vertical
//! resolution may differ. The traversal visits every cell the segment
//! passes through, in order, both endpoint cells included.

/// Walks the lattice cells crossed by the segment `a -> b`, where each
/// coordinate is expressed in cells (cell boundaries at the integers).
#[allow(clippy::cast_precision_loss)]
pub(crate) fn cells_crossed(a: [f64; 3], b: [f64; 3]) -> Vec<[i64; 3]> {
    let current = floor_cell(a);
    let goal = floor_cell(b);

    let mut cells = Vec::new();
    cells.push(current);
    if current == goal {
        return cells;
    }

    let delta = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let mut step = [0_i64; 3];
    let mut t_max = [f64::INFINITY; 3];
    let mut t_delta = [f64::INFINITY; 3];

    for axis in 0..3 {
        if delta[axis].abs() > f64::EPSILON {
            step[axis] = if delta[axis] > 0.0 { 1 } else { -1 };
            t_delta[axis] = 1.0 / delta[axis].abs();

            let boundary = if delta[axis] > 0.0 {
                (current[axis] + 1) as f64
            } else {
                current[axis] as f64
            };
            t_max[axis] = (boundary - a[axis]) / delta[axis];
        }
    }

    // Upper bound on the number of boundary crossings; the parametric guard
    // below normally terminates well before this.
    let limit = (0..3)
        .map(|axis| goal[axis].abs_diff(current[axis]) as usize)
        .sum::<usize>()
        + 3;

    let mut current = current;
    for _ in 0..limit {
        if current == goal {
            break;
        }

        let axis = smallest_axis(&t_max);
        if t_max[axis] > 1.0 {
            // Accumulated rounding pushed the next crossing past the end of
            // the segment; stop and let the goal cell be appended below.
            break;
        }

        current[axis] += step[axis];
        t_max[axis] += t_delta[axis];
        cells.push(current);
    }

    if cells.last() != Some(&goal) {
        cells.push(goal);
    }
    cells
}

#[allow(clippy::cast_possible_truncation)]
fn floor_cell(position: [f64; 3]) -> [i64; 3] {
    position.map(|v| v.floor() as i64)
}

fn smallest_axis(t_max: &[f64; 3]) -> usize {
    if t_max[0] < t_max[1] {
        if t_max[0] < t_max[2] { 0 } else { 2 }
    } else if t_max[1] < t_max[2] {
        1
    } else {
        2
    }
}
