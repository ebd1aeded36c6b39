//! The view: derives markers and camera from the store and replays them
//! into the injected maps provider.

pub mod list;
pub mod provider;

use crate::core::camera::{marker_bounds, plan_camera, CameraAction};
use crate::core::config::WidgetOptions;
use crate::core::geo::LatLng;
use crate::marker::presenter::present;
use crate::store::actions::Action;
use crate::store::state::{LocatorState, SearchFilter};
use crate::store::Store;
use list::{list_entries, ListEntry};
use provider::MapSurface;
use url::Url;

/// Renders the map side of the widget through a [`MapSurface`].
///
/// `sync` is the whole rendering model: every call re-derives descriptors
/// and camera from scratch and replays them, so the surface always reflects
/// the current state and nothing is cached across updates.
pub struct LocatorView<S: MapSurface> {
    surface: S,
    options: WidgetOptions,
}

impl<S: MapSurface> LocatorView<S> {
    pub fn new(surface: S, options: WidgetOptions) -> Self {
        Self { surface, options }
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Re-derives markers and camera from `state` and replays them into the
    /// surface: markers first, then the camera move.
    pub fn sync(&mut self, state: &LocatorState) {
        let descriptors = present(
            &state.locations,
            state.map.open.as_deref(),
            state.map.search_origin,
            self.options.marker_icon.as_deref(),
            self.options.search_marker_icon.as_deref(),
        );

        let positions: Vec<LatLng> = state.locations.iter().map(|l| l.position).collect();
        let bounds = marker_bounds(
            &positions,
            state.map.search_origin,
            state.search_active(),
            self.options.default_center,
        );
        let box_center = self.surface.bounds_center(&bounds);
        let camera = plan_camera(&bounds, state.map.center, box_center);

        log::debug!(
            "sync: {} markers, camera {:?}",
            descriptors.len(),
            camera
        );

        self.surface.set_markers(descriptors);
        match camera {
            CameraAction::PanTo(center) => self.surface.pan_to(center),
            CameraAction::FitThenPanTo { bounds, center } => {
                self.surface.fit_bounds(&bounds);
                self.surface.pan_to(center);
            }
        }
    }

    /// Rows for the list panel.
    pub fn list_entries(&self, state: &LocatorState) -> Vec<ListEntry> {
        list_entries(state)
    }
}

/// The assembled widget: store plus view, with every mutation funneled
/// through [`Locator::dispatch`] so the surface is re-synced after each
/// state change. Single-threaded and synchronous throughout.
pub struct Locator<S: MapSurface> {
    store: Store,
    view: LocatorView<S>,
}

impl<S: MapSurface> Locator<S> {
    /// Builds the widget and renders the initial (empty) state.
    pub fn new(surface: S, options: WidgetOptions) -> Self {
        Self::with_state(surface, options, LocatorState::default())
    }

    /// Builds the widget around a seeded state and renders it.
    pub fn with_state(surface: S, options: WidgetOptions, state: LocatorState) -> Self {
        let mut locator = Self {
            store: Store::with_state(state),
            view: LocatorView::new(surface, options),
        };
        locator.view.sync(locator.store.state());
        locator
    }

    /// Builds the widget with the search filter seeded from the page URL.
    pub fn from_url(surface: S, options: WidgetOptions, url: &Url) -> Self {
        let state = LocatorState {
            search: SearchFilter::from_url(url),
            ..LocatorState::default()
        };
        Self::with_state(surface, options, state)
    }

    pub fn state(&self) -> &LocatorState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn view(&self) -> &LocatorView<S> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut LocatorView<S> {
        &mut self.view
    }

    /// Applies an action and re-syncs the view when the state changed.
    pub fn dispatch(&mut self, action: Action) {
        if self.store.dispatch(action) {
            self.view.sync(self.store.state());
        }
    }

    /// A click on a marker or its list row: opens the marker and pins the
    /// camera to its position.
    pub fn handle_marker_click(&mut self, key: &str) {
        let position = self.store.state().location(key).map(|l| l.position);
        self.dispatch(Action::OpenMarker(key.to_string()));
        if let Some(position) = position {
            self.dispatch(Action::SetCenter(Some(position)));
        }
    }

    /// The open info panel was dismissed.
    pub fn handle_marker_close(&mut self) {
        self.dispatch(Action::CloseMarker);
    }

    /// A search was submitted: replace the filter and origin and release
    /// the explicit center so the next location list is fitted, not panned.
    pub fn submit_search(&mut self, filter: SearchFilter, origin: Option<LatLng>) {
        self.dispatch(Action::SetCenter(None));
        self.dispatch(Action::SetSearchOrigin(origin));
        self.dispatch(Action::SetSearchFilter(filter));
    }

    /// A new result set arrived from the data source.
    pub fn load_locations(&mut self, locations: Vec<crate::data::location::Location>) {
        self.dispatch(Action::LoadLocations(locations));
    }

    /// Rows for the list panel, derived from the current state.
    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.view.list_entries(self.store.state())
    }
}
