//! Connected-component labeling with a reusable cache
//!
//! Labels live in a region-sized array owned by the analyzer and every
//! labeling call overwrites them. Traversal runs on an explicit stack, so large
//! open areas cannot exhaust the call stack. Neighbor relations are assumed to
//! be symmetric: obstacles must report no neighbors, because a cell reached
//! from one side is never checked for a way back.

use crate::algorithm::neighbors::Pather;
use crate::geometry::{Point, Rect};
use ndarray::Array2;

/// Reachability analyzer caching the component of every cell in a region
///
/// Label `0` means unassigned; components are numbered from `1` in the order
/// their first cell appears in a row-major scan. `label_of` reports them
/// zero-based.
#[derive(Debug, Clone, Default)]
pub struct ConnectedComponents {
    region: Rect,
    labels: Option<Array2<usize>>,
    stack: Vec<Point>,
    reached: Vec<Point>,
    neighbors: Vec<Point>,
    components: usize,
}

impl ConnectedComponents {
    /// Create an analyzer with no cached labeling
    pub fn new() -> Self {
        Self::default()
    }

    /// Label every cell of `region` with its component
    ///
    /// After the call every in-region cell carries a component. Cells whose
    /// generator returns no neighbors end up in a component of their own.
    pub fn label_all<P: Pather>(&mut self, region: Rect, mut pather: P) {
        self.reset(region);
        let Some(labels) = self.labels.as_mut() else {
            return;
        };

        let mut id = 0;
        for seed in region.points() {
            let assigned = cell(&region, seed)
                .and_then(|index| labels.get(index))
                .is_some_and(|&label| label > 0);
            if assigned {
                continue;
            }

            id += 1;
            label_component(
                region,
                labels,
                &mut self.stack,
                &mut self.neighbors,
                &mut pather,
                seed,
                id,
                None,
            );
        }

        self.components = id;
    }

    /// Label only the component containing `p`
    ///
    /// Returns the reached cells in discovery order, or `None` when `p` lies
    /// outside `region`. Either way the previous labeling is discarded, so
    /// `label_of` afterwards only knows about this component.
    pub fn label_from<P: Pather>(
        &mut self,
        region: Rect,
        mut pather: P,
        p: Point,
    ) -> Option<&[Point]> {
        self.reset(region);
        if !region.contains(p) {
            return None;
        }
        let labels = self.labels.as_mut()?;

        label_component(
            region,
            labels,
            &mut self.stack,
            &mut self.neighbors,
            &mut pather,
            p,
            1,
            Some(&mut self.reached),
        );
        self.components = 1;

        Some(self.reached.as_slice())
    }

    /// Zero-based component of `p` from the most recent labeling
    ///
    /// `None` for positions outside the last region, for cells the last
    /// single-component query did not reach, and before any labeling ran.
    pub fn label_of(&self, p: Point) -> Option<usize> {
        let labels = self.labels.as_ref()?;
        let label = cell(&self.region, p)
            .and_then(|index| labels.get(index))
            .copied()?;
        label.checked_sub(1)
    }

    /// Number of components assigned by the most recent labeling
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Region of the most recent labeling
    pub const fn region(&self) -> Rect {
        self.region
    }

    fn reset(&mut self, region: Rect) {
        let shape = (region.height() as usize, region.width() as usize);
        let reusable = self
            .labels
            .as_ref()
            .is_some_and(|labels| labels.dim() == shape);

        if reusable {
            if let Some(labels) = self.labels.as_mut() {
                labels.fill(0);
            }
        } else {
            self.labels = Some(Array2::zeros(shape));
        }

        self.region = region;
        self.stack.clear();
        self.reached.clear();
        self.components = 0;
    }
}

/// Array index of a point inside `region`
fn cell(region: &Rect, p: Point) -> Option<[usize; 2]> {
    region
        .contains(p)
        .then(|| [(p.y - region.min.y) as usize, (p.x - region.min.x) as usize])
}

/// Depth-first labeling of everything reachable from `seed` with `id`
fn label_component<P: Pather>(
    region: Rect,
    labels: &mut Array2<usize>,
    stack: &mut Vec<Point>,
    neighbors: &mut Vec<Point>,
    pather: &mut P,
    seed: Point,
    id: usize,
    mut reached: Option<&mut Vec<Point>>,
) {
    if let Some(label) = cell(&region, seed).and_then(|index| labels.get_mut(index)) {
        *label = id;
    }
    stack.push(seed);

    while let Some(p) = stack.pop() {
        if let Some(reached) = reached.as_mut() {
            reached.push(p);
        }

        neighbors.clear();
        pather.neighbors(p, neighbors);
        for &q in neighbors.iter() {
            let Some(label) = cell(&region, q).and_then(|index| labels.get_mut(index)) else {
                continue;
            };
            if *label > 0 {
                continue;
            }
            *label = id;
            stack.push(q);
        }
    }
}
