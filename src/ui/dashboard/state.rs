//! Dashboard state management
//!
//! Holds the dashboard state machine: the installed resource snapshot, the
//! four list widgets, the focus cursor, and the `update` transition
//! function the UI loop drives with [`Event`]s.

use crate::inventory::error::InventoryError;
use crate::snapshot::ResourceSnapshot;
use crate::ui::dashboard::layout::{compute_columns, widget_width};
use crate::ui::dashboard::table::{
    ResourceTable, container_rows, image_rows, network_rows, volume_rows,
};
use crate::ui::events::{Event, KeyCommand};

/// The four resource categories, in focus-cycle order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum ResourceKind {
    Container,
    Image,
    Volume,
    Network,
}

pub const RESOURCE_KINDS: [ResourceKind; 4] = [
    ResourceKind::Container,
    ResourceKind::Image,
    ResourceKind::Volume,
    ResourceKind::Network,
];

impl ResourceKind {
    pub fn index(self) -> usize {
        match self {
            ResourceKind::Container => 0,
            ResourceKind::Image => 1,
            ResourceKind::Volume => 2,
            ResourceKind::Network => 3,
        }
    }

    /// Title of the category's list box.
    pub fn list_title(self) -> &'static str {
        match self {
            ResourceKind::Container => "Docker Containers",
            ResourceKind::Image => "Docker Images",
            ResourceKind::Volume => "Docker Volumes",
            ResourceKind::Network => "Docker Networks",
        }
    }

    /// Title of the detail panel while this category is focused.
    pub fn info_title(self) -> &'static str {
        match self {
            ResourceKind::Container => "Container Info",
            ResourceKind::Image => "Image Info",
            ResourceKind::Volume => "Volume Info",
            ResourceKind::Network => "Network Info",
        }
    }

    /// Placeholder shown when the category has nothing to detail.
    pub fn no_selection(self) -> &'static str {
        match self {
            ResourceKind::Container => "No container selected.",
            ResourceKind::Image => "No image selected.",
            ResourceKind::Volume => "No volume selected.",
            ResourceKind::Network => "No network selected.",
        }
    }
}

/// Single cursor over the four list widgets. Both cycle keys advance
/// forward; there is no backward step.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusCycle {
    active: usize,
}

impl FocusCycle {
    /// Moves the cursor forward by one, wrapping after the last widget.
    pub fn advance(&mut self) -> usize {
        self.active = (self.active + 1) % RESOURCE_KINDS.len();
        self.active
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_kind(&self) -> ResourceKind {
        RESOURCE_KINDS[self.active]
    }
}

/// What the UI loop should do after an update.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    None,
    /// Start a fetch; the result arrives later as `Event::DataLoaded`.
    Refresh,
    Quit,
}

/// Top-level dashboard state.
#[derive(Debug)]
pub struct DashboardState {
    snapshot: ResourceSnapshot,
    tables: [ResourceTable; 4],
    focus: FocusCycle,
    loading: bool,
    has_data: bool,
    width: u16,
    height: u16,
}

impl DashboardState {
    /// Creates the initial state: loading, empty widgets, unknown size.
    pub fn new() -> Self {
        Self {
            snapshot: ResourceSnapshot::default(),
            tables: Default::default(),
            focus: FocusCycle::default(),
            loading: true,
            has_data: false,
            width: 0,
            height: 0,
        }
    }

    /// Applies one event and reports what the UI loop should do next.
    pub fn update(&mut self, event: Event) -> Action {
        match event {
            Event::Resize(width, height) => {
                self.width = width;
                self.height = height;
                self.apply_widths();
                Action::None
            }
            Event::DataLoaded(snapshot) => {
                self.install_snapshot(snapshot);
                Action::None
            }
            Event::Key(command) => self.handle_key(command),
        }
    }

    fn handle_key(&mut self, command: KeyCommand) -> Action {
        match command {
            KeyCommand::Quit => Action::Quit,
            KeyCommand::Refresh => {
                self.loading = true;
                Action::Refresh
            }
            KeyCommand::FocusNext | KeyCommand::FocusAlternate => {
                if self.is_ready() {
                    self.focus.advance();
                    self.apply_focus();
                }
                Action::None
            }
            KeyCommand::Up => {
                if self.is_ready() {
                    self.tables[self.focus.active()].move_selection(-1);
                }
                Action::None
            }
            KeyCommand::Down => {
                if self.is_ready() {
                    self.tables[self.focus.active()].move_selection(1);
                }
                Action::None
            }
        }
    }

    /// Installs a fetch result wholesale. A failed fetch replaces whatever
    /// was on screen with the error-only view; a successful one rebuilds
    /// every list and hands focus back to the container list.
    fn install_snapshot(&mut self, snapshot: ResourceSnapshot) {
        self.loading = false;
        if snapshot.load_error.is_some() {
            self.snapshot = snapshot;
            self.has_data = false;
            for table in &mut self.tables {
                table.set_rows(Vec::new());
                table.blur();
            }
            return;
        }

        self.tables[0].set_rows(container_rows(&snapshot.containers));
        self.tables[1].set_rows(image_rows(&snapshot.images));
        self.tables[2].set_rows(volume_rows(&snapshot.volumes));
        self.tables[3].set_rows(network_rows(&snapshot.networks));
        self.snapshot = snapshot;
        self.has_data = true;
        self.focus.reset();
        self.apply_focus();
    }

    /// Focuses the active widget and blurs the other three.
    fn apply_focus(&mut self) {
        let active = self.focus.active();
        for (index, table) in self.tables.iter_mut().enumerate() {
            if index == active {
                table.focus();
            } else {
                table.blur();
            }
        }
    }

    fn apply_widths(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (left, _) = compute_columns(self.width);
        let width = widget_width(left);
        for table in &mut self.tables {
            table.set_width(width);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.has_data && self.snapshot.load_error.is_none()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&InventoryError> {
        self.snapshot.load_error.as_ref()
    }

    pub fn snapshot(&self) -> &ResourceSnapshot {
        &self.snapshot
    }

    pub fn table(&self, kind: ResourceKind) -> &ResourceTable {
        &self.tables[kind.index()]
    }

    pub fn active_kind(&self) -> ResourceKind {
        self.focus.active_kind()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
