//! Hysteresis: promote weak candidates 8-connected to strong ones.
//!
//! Only interior pixels are rewritten. The 1-pixel frame keeps its candidate
//! label; strong frame pixels still seed propagation into the interior.
//! After propagation every interior weak pixel left over has no path to a
//! strong pixel and is demoted to [`REJECT`].
//!
//! Two strategies produce the same plane:
//!
//! - [`HysteresisMode::Worklist`] pushes every strong pixel on a stack and
//!   floods weak neighbors, O(W·H).
//! - [`HysteresisMode::BoundedPasses`] repeats raster passes until nothing
//!   changes. A weak pixel touching a strong one is promoted together with a
//!   depth-bounded flood of its weak neighbors; a weak pixel whose
//!   neighborhood is all zero is demoted immediately.
use super::nms::{REJECT, STRONG, WEAK};
use crate::image::Plane;
use log::trace;
use serde::{Deserialize, Serialize};

/// Default depth bound of one eager flood in the pass-based mode.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Moore neighborhood in raster order.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum HysteresisMode {
    #[default]
    Worklist,
    BoundedPasses { max_depth: usize },
}

impl HysteresisMode {
    pub fn bounded() -> Self {
        HysteresisMode::BoundedPasses {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HysteresisStats {
    /// Full-grid passes (1 for the worklist)
    pub passes: usize,
    /// Weak pixels promoted to strong
    pub promoted: usize,
    /// Weak pixels demoted to reject
    pub demoted: usize,
}

#[inline]
fn interior_neighbor(
    x: usize,
    y: usize,
    off: (isize, isize),
    w: usize,
    h: usize,
) -> Option<(usize, usize)> {
    let nx = x as isize + off.0;
    let ny = y as isize + off.1;
    if nx >= 1 && ny >= 1 && (nx as usize) < w - 1 && (ny as usize) < h - 1 {
        Some((nx as usize, ny as usize))
    } else {
        None
    }
}

/// Copy `map` into `hyst` and resolve every weak interior pixel.
pub fn propagate_hysteresis(
    map: &Plane<u8>,
    hyst: &mut Plane<u8>,
    mode: HysteresisMode,
) -> HysteresisStats {
    hyst.copy_from(map);
    let (w, h) = hyst.dims();
    if w < 3 || h < 3 {
        return HysteresisStats::default();
    }

    let mut stats = match mode {
        HysteresisMode::Worklist => flood_worklist(hyst),
        HysteresisMode::BoundedPasses { max_depth } => flood_bounded_passes(hyst, max_depth),
    };
    stats.demoted += demote_unconnected(hyst);
    stats
}

fn flood_worklist(hyst: &mut Plane<u8>) -> HysteresisStats {
    let (w, h) = hyst.dims();
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if hyst.get(x, y) == STRONG {
                stack.push((x, y));
            }
        }
    }

    let mut promoted = 0;
    while let Some((x, y)) = stack.pop() {
        for off in NEIGHBORS {
            if let Some((nx, ny)) = interior_neighbor(x, y, off, w, h) {
                if hyst.get(nx, ny) == WEAK {
                    hyst.set(nx, ny, STRONG);
                    promoted += 1;
                    stack.push((nx, ny));
                }
            }
        }
    }

    HysteresisStats {
        passes: 1,
        promoted,
        demoted: 0,
    }
}

/// `(has strong neighbor, has non-zero neighbor)` of an interior pixel.
#[inline]
fn neighborhood(hyst: &Plane<u8>, x: usize, y: usize) -> (bool, bool) {
    let mut strong = false;
    let mut nonzero = false;
    for (ox, oy) in NEIGHBORS {
        let v = hyst.get((x as isize + ox) as usize, (y as isize + oy) as usize);
        strong |= v == STRONG;
        nonzero |= v != REJECT;
    }
    (strong, nonzero)
}

fn flood_bounded_passes(hyst: &mut Plane<u8>, max_depth: usize) -> HysteresisStats {
    let (w, h) = hyst.dims();
    let mut stats = HysteresisStats::default();
    let mut stack = Vec::new();

    loop {
        stats.passes += 1;
        let mut changed = false;
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                if hyst.get(x, y) != WEAK {
                    continue;
                }
                match neighborhood(hyst, x, y) {
                    (true, _) => {
                        stats.promoted += promote_bounded(hyst, x, y, max_depth, &mut stack);
                        changed = true;
                    }
                    (false, false) => {
                        hyst.set(x, y, REJECT);
                        stats.demoted += 1;
                        changed = true;
                    }
                    (false, true) => {}
                }
            }
        }
        trace!(
            "hysteresis pass {} promoted={} demoted={}",
            stats.passes,
            stats.promoted,
            stats.demoted
        );
        if !changed {
            break;
        }
    }
    stats
}

/// Promote `(x, y)` and flood weak interior neighbors up to `max_depth` hops.
fn promote_bounded(
    hyst: &mut Plane<u8>,
    x: usize,
    y: usize,
    max_depth: usize,
    stack: &mut Vec<(usize, usize, usize)>,
) -> usize {
    let (w, h) = hyst.dims();
    let mut promoted = 0;
    stack.clear();
    stack.push((x, y, 1));
    while let Some((cx, cy, depth)) = stack.pop() {
        if hyst.get(cx, cy) == STRONG {
            continue;
        }
        hyst.set(cx, cy, STRONG);
        promoted += 1;
        if depth > max_depth {
            continue;
        }
        for off in NEIGHBORS {
            if let Some((nx, ny)) = interior_neighbor(cx, cy, off, w, h) {
                if hyst.get(nx, ny) == WEAK {
                    stack.push((nx, ny, depth + 1));
                }
            }
        }
    }
    promoted
}

fn demote_unconnected(hyst: &mut Plane<u8>) -> usize {
    let (w, h) = hyst.dims();
    let mut demoted = 0;
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if hyst.get(x, y) == WEAK {
                hyst.set(x, y, REJECT);
                demoted += 1;
            }
        }
    }
    demoted
}
