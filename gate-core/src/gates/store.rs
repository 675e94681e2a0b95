//! Owning collection of committed regions.
//!
//! The collection enforces the "at most one selected" rule and is the home
//! of the post-commit operations: hit-testing, gating queries, translation,
//! handle resize, and axis rescaling.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{GateError, Result};
use crate::gates::drag::DragData;
use crate::gates::region::{Region, RegionGeometry, RegionId};
use crate::scale::transform::{Axis, Transform};

#[derive(Default)]
pub struct RegionCollection {
    regions: FxHashMap<RegionId, Region>,
    // Insertion order, for deterministic iteration and hit-test priority.
    order: Vec<RegionId>,
    selected: Option<RegionId>,
}

impl RegionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn insert(&mut self, region: Region) {
        let id = region.id();
        if self.regions.insert(id.clone(), region).is_none() {
            self.order.push(id);
        }
    }

    pub fn remove(&mut self, id: &RegionId) -> Option<Region> {
        let region = self.regions.remove(id)?;
        self.order.retain(|existing| existing != id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        debug!("removed region {id}");
        Some(region)
    }

    pub fn get(&self, id: &RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.order.iter().filter_map(|id| self.regions.get(id))
    }

    pub fn ids(&self) -> &[RegionId] {
        &self.order
    }

    pub fn selected_id(&self) -> Option<&RegionId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Region> {
        self.selected.as_ref().and_then(|id| self.regions.get(id))
    }

    /// Select `id` (or clear the selection with `None`), deselecting any
    /// previously selected region first. Returns whether the selection
    /// actually changed.
    pub fn select(&mut self, id: Option<&RegionId>) -> Result<bool> {
        if let Some(id) = id {
            if !self.regions.contains_key(id) {
                return Err(GateError::UnknownRegion(id.clone()));
            }
        }
        if self.selected.as_ref() == id {
            return Ok(false);
        }
        if let Some(previous) = self.selected.take() {
            if let Some(region) = self.regions.get_mut(&previous) {
                region.set_selected(false);
            }
        }
        if let Some(id) = id {
            if let Some(region) = self.regions.get_mut(id) {
                region.set_selected(true);
            }
            self.selected = Some(id.clone());
        }
        debug!("selection changed to {:?}", self.selected);
        Ok(true)
    }

    /// Region whose outline lies within `tolerance` of `point`; the nearest
    /// hit wins.
    pub fn hit_test(&self, point: (f32, f32), tolerance: (f32, f32)) -> Option<RegionId> {
        let mut best: Option<(f32, RegionId)> = None;
        for region in self.iter() {
            if let Some(dist) = region.hit_perimeter(point, tolerance) {
                if best.as_ref().is_none_or(|(d, _)| dist < *d) {
                    best = Some((dist, region.id()));
                }
            }
        }
        best.map(|(_, id)| id)
    }

    /// Handle index of the *selected* region within `tolerance` of `point`.
    /// Unselected regions' handles never intercept pointer input.
    pub fn hit_test_handle(&self, point: (f32, f32), tolerance: (f32, f32)) -> Option<usize> {
        let region = self.selected()?;
        region
            .handle_points()
            .iter()
            .position(|(hx, hy)| {
                (point.0 - hx).abs() <= tolerance.0 && (point.1 - hy).abs() <= tolerance.1
            })
    }

    pub fn contains_point(&self, id: &RegionId, point: (f32, f32)) -> Result<bool> {
        self.regions
            .get(id)
            .ok_or_else(|| GateError::UnknownRegion(id.clone()))?
            .contains(point)
    }

    /// Per-point membership mask against the region `id`.
    pub fn gate_mask(&self, id: &RegionId, points: &[(f32, f32)]) -> Result<Vec<bool>> {
        let region = self
            .regions
            .get(id)
            .ok_or_else(|| GateError::UnknownRegion(id.clone()))?;
        points.iter().map(|p| region.contains(*p)).collect()
    }

    pub fn count_inside(&self, id: &RegionId, points: &[(f32, f32)]) -> Result<usize> {
        Ok(self
            .gate_mask(id, points)?
            .into_iter()
            .filter(|inside| *inside)
            .count())
    }

    /// Translate a region by the net offset of a drag gesture.
    pub fn move_region(&mut self, id: &RegionId, drag: DragData) -> Result<()> {
        let region = self
            .regions
            .get_mut(id)
            .ok_or_else(|| GateError::UnknownRegion(id.clone()))?;
        let (dx, dy) = drag.offset();
        region.translate(dx, dy);
        Ok(())
    }

    /// Move a single handle of a region to a new position.
    pub fn move_region_point(
        &mut self,
        id: &RegionId,
        point_index: usize,
        new_point: (f32, f32),
    ) -> Result<()> {
        let region = self
            .regions
            .get_mut(id)
            .ok_or_else(|| GateError::UnknownRegion(id.clone()))?;
        region.move_vertex(point_index, new_point)
    }

    /// Re-express every region after one axis changes transform: each
    /// coordinate on that axis is mapped back to raw space under `old` and
    /// forward under `new`. Failures are collected per region.
    pub fn rescale(
        &mut self,
        axis: Axis,
        old: &Transform,
        new: &Transform,
    ) -> std::result::Result<(), Vec<GateError>> {
        let mut errors = vec![];
        for region in self.regions.values_mut() {
            if let Err(err) = rescale_region(region, axis, old, new) {
                errors.push(err);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn rescale_region(
    region: &mut Region,
    axis: Axis,
    old: &Transform,
    new: &Transform,
) -> Result<()> {
    let remap = |v: f32| -> Result<f32> { new.apply(old.invert(v)?) };
    let remap_point = |p: &mut (f32, f32)| -> Result<()> {
        match axis {
            Axis::X => p.0 = remap(p.0)?,
            Axis::Y => p.1 = remap(p.1)?,
        }
        Ok(())
    };

    match &mut region.geometry {
        RegionGeometry::Rectangle { origin, size } | RegionGeometry::Ellipse { origin, size } => {
            // Transform both corners; the transforms are monotonic but the
            // box still gets rebuilt from min/extent to be safe.
            let mut near = *origin;
            let mut far = (origin.0 + size.0, origin.1 + size.1);
            remap_point(&mut near)?;
            remap_point(&mut far)?;
            *origin = (near.0.min(far.0), near.1.min(far.1));
            *size = ((far.0 - near.0).abs(), (far.1 - near.1).abs());
        }
        RegionGeometry::Polygon { vertices, .. } => {
            for v in vertices.iter_mut() {
                remap_point(v)?;
            }
        }
        RegionGeometry::LineSegment { points } => {
            for p in points.iter_mut() {
                remap_point(p)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::region::RegionGeometry;
    use crate::gates::styles::RegionStyle;
    use std::sync::Arc;

    fn collection_of_three() -> (RegionCollection, [RegionId; 3]) {
        let mut collection = RegionCollection::new();
        let ids: [RegionId; 3] = [Arc::from("a"), Arc::from("b"), Arc::from("c")];
        for (i, id) in ids.iter().enumerate() {
            collection.insert(Region::new(
                id.clone(),
                RegionGeometry::Rectangle {
                    origin: (i as f32 * 100.0, 0.0),
                    size: (50.0, 50.0),
                },
                RegionStyle::default(),
            ));
        }
        (collection, ids)
    }

    #[test]
    fn at_most_one_region_selected() {
        let (mut collection, ids) = collection_of_three();

        assert!(collection.select(Some(&ids[0])).unwrap());
        assert!(collection.select(Some(&ids[1])).unwrap());

        let selected: Vec<_> = collection.iter().filter(|r| r.is_selected()).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id(), ids[1]);

        // Re-selecting the same region is not a change.
        assert!(!collection.select(Some(&ids[1])).unwrap());

        assert!(collection.select(None).unwrap());
        assert!(collection.iter().all(|r| !r.is_selected()));
    }

    #[test]
    fn selecting_unknown_region_fails() {
        let (mut collection, _) = collection_of_three();
        let ghost: RegionId = Arc::from("ghost");
        assert!(matches!(
            collection.select(Some(&ghost)),
            Err(GateError::UnknownRegion(_))
        ));
    }

    #[test]
    fn removal_clears_selection() {
        let (mut collection, ids) = collection_of_three();
        collection.select(Some(&ids[2])).unwrap();
        let removed = collection.remove(&ids[2]).unwrap();
        assert_eq!(removed.id(), ids[2]);
        assert!(collection.selected_id().is_none());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn hit_test_picks_nearest_outline() {
        let (collection, ids) = collection_of_three();
        // Just right of region "a"'s right edge at x=50, far from "b" at 100.
        let hit = collection.hit_test((52.0, 25.0), (5.0, 5.0)).unwrap();
        assert_eq!(hit, ids[0]);
        assert!(collection.hit_test((75.0, 25.0), (5.0, 5.0)).is_none());
    }

    #[test]
    fn handle_hits_require_selection() {
        let (mut collection, ids) = collection_of_three();
        // Corner handle of "a" at (0, 0).
        assert!(collection.hit_test_handle((1.0, 1.0), (3.0, 3.0)).is_none());
        collection.select(Some(&ids[0])).unwrap();
        assert_eq!(collection.hit_test_handle((1.0, 1.0), (3.0, 3.0)), Some(0));
    }

    #[test]
    fn gating_mask_and_count() {
        let (collection, ids) = collection_of_three();
        let points = [(10.0, 10.0), (120.0, 10.0), (300.0, 300.0)];
        let mask = collection.gate_mask(&ids[0], &points).unwrap();
        assert_eq!(mask, vec![true, false, false]);
        assert_eq!(collection.count_inside(&ids[1], &points).unwrap(), 1);
    }

    #[test]
    fn drag_translates_by_net_offset() {
        let (mut collection, ids) = collection_of_three();
        let drag = DragData::new((10.0, 10.0), (35.0, 20.0));
        collection.move_region(&ids[0], drag).unwrap();
        let region = collection.get(&ids[0]).unwrap();
        assert!(region.contains((74.9, 59.9)).unwrap());
        assert!(!region.contains((10.0, 5.0)).unwrap());
    }

    #[test]
    fn rescale_round_trips_through_raw_space() {
        let (mut collection, ids) = collection_of_three();
        let old = Transform::Linear;
        let new = Transform::Arcsinh { cofactor: 5.0 };
        collection.rescale(Axis::X, &old, &new).unwrap();
        collection.rescale(Axis::X, &new, &old).unwrap();
        let region = collection.get(&ids[0]).unwrap();
        if let RegionGeometry::Rectangle { origin, size } = region.geometry {
            assert!((origin.0 - 0.0).abs() < 1e-3);
            assert!((size.0 - 50.0).abs() < 1e-3);
        } else {
            panic!("expected rectangle");
        }
    }
}
