//! Galaxy-map contract used while presenting notifications.
//!
//! Delivery of a notification may recenter the map on the object it concerns;
//! nothing else about the map influences notification ordering.

mod location;
mod policy;
mod selection;

pub use location::{Location, MappedObject, StarSystemView, SystemId};
pub use policy::{
    FleetDisplay, HoverTargets, LabelOverride, MapPolicy, ShipRangesDisplay, SystemLabel,
    SystemOverlays, SystemPolicy,
};
pub use selection::{MapFocus, MapSelection};

/// Focus, selection and presentation policy of one galaxy map view.
#[derive(Clone, Debug)]
pub struct GalaxyMap<S = SystemId> {
    pub focus: MapFocus,
    pub selection: MapSelection<S>,
    pub policy: MapPolicy,
}

impl<S> Default for GalaxyMap<S> {
    fn default() -> Self {
        Self::new(MapPolicy::default())
    }
}

impl<S> GalaxyMap<S> {
    pub fn new(policy: MapPolicy) -> Self {
        Self {
            focus: MapFocus::default(),
            selection: MapSelection::default(),
            policy,
        }
    }

    pub fn focus_on(&mut self, object: &impl MappedObject) {
        self.focus.focus_on(object);
    }

    /// Nearest system within the policy's click radius of `point`.
    pub fn hit_test<'a, I>(&self, point: Location, systems: I) -> Option<&'a StarSystemView>
    where
        I: IntoIterator<Item = &'a StarSystemView>,
    {
        let radius = self.policy.system_click_radius;
        systems
            .into_iter()
            .map(|system| (point.distance_to(system), system))
            .filter(|(distance, _)| *distance <= radius)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, system)| system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn hit_test_picks_nearest_within_radius() {
        let systems = [
            StarSystemView::new(SystemId(1), "Vega", Location::new(1.0, 1.0), Rgb::WHITE),
            StarSystemView::new(SystemId(2), "Rigel", Location::new(1.3, 1.0), Rgb::WHITE),
        ];
        let map: GalaxyMap = GalaxyMap::default();

        let hit = map.hit_test(Location::new(1.2, 1.0), &systems);
        assert_eq!(hit.map(|s| s.id), Some(SystemId(2)));
        assert!(map.hit_test(Location::new(5.0, 5.0), &systems).is_none());
    }

    #[test]
    fn focus_on_system() {
        let mut map: GalaxyMap = GalaxyMap::new(MapPolicy::default());
        let vega = StarSystemView::new(SystemId(1), "Vega", Location::new(4.0, 2.0), Rgb::WHITE);
        map.focus_on(&vega);
        assert_eq!(map.focus.location(), Location::new(4.0, 2.0));
    }
}
