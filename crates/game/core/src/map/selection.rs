//! Focus point and pointer selection state of the galaxy map.

use super::{Location, MappedObject};

/// The coordinate the map view is centered on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapFocus {
    location: Location,
}

impl MapFocus {
    pub const fn new(location: Location) -> Self {
        Self { location }
    }

    pub const fn location(&self) -> Location {
        self.location
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.location.set_xy(x, y);
    }

    /// Centers the view on `object`.
    pub fn focus_on(&mut self, object: &impl MappedObject) {
        self.set_xy(object.x(), object.y());
    }
}

/// Clicked and hovered map objects.
#[derive(Clone, Debug)]
pub struct MapSelection<S> {
    clicked: Option<S>,
    hovering: Option<S>,
}

impl<S> Default for MapSelection<S> {
    fn default() -> Self {
        Self {
            clicked: None,
            hovering: None,
        }
    }
}

impl<S> MapSelection<S> {
    pub fn clicked(&self) -> Option<&S> {
        self.clicked.as_ref()
    }

    pub fn hovering(&self) -> Option<&S> {
        self.hovering.as_ref()
    }

    /// Sets the clicked object, returning the previous one.
    pub fn click(&mut self, target: S) -> Option<S> {
        self.clicked.replace(target)
    }

    pub fn hover(&mut self, target: Option<S>) {
        self.hovering = target;
    }

    pub fn clear(&mut self) {
        self.clicked = None;
        self.hovering = None;
    }
}

impl<S: PartialEq> MapSelection<S> {
    pub fn is_clicked(&self, target: &S) -> bool {
        self.clicked.as_ref() == Some(target)
    }

    pub fn is_hovering(&self, target: &S) -> bool {
        self.hovering.as_ref() == Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SystemId;

    #[test]
    fn focus_follows_object() {
        let mut focus = MapFocus::default();
        focus.focus_on(&Location::new(12.5, -3.0));
        assert_eq!(focus.location(), Location::new(12.5, -3.0));
    }

    #[test]
    fn click_and_hover_are_independent() {
        let mut selection = MapSelection::default();
        assert_eq!(selection.click(SystemId(1)), None);
        selection.hover(Some(SystemId(2)));

        assert!(selection.is_clicked(&SystemId(1)));
        assert!(!selection.is_clicked(&SystemId(2)));
        assert!(selection.is_hovering(&SystemId(2)));

        assert_eq!(selection.click(SystemId(3)), Some(SystemId(1)));
        selection.clear();
        assert_eq!(selection.clicked(), None);
        assert_eq!(selection.hovering(), None);
    }
}
