use crate::config::{Config, SourceConfig};
use crate::data::{DataSource, ListingKind, LoadPromise, PendingLoad};
use crate::export;
use crate::models::{FilterState, TableState};
use crate::ui::components::*;
use crate::ui::setup_styles;
use eframe::egui;
use poll_promise::Promise;
use std::sync::Arc;

pub struct GigViewApp {
    // Data source
    pub config: Config,
    pub source: DataSource,
    pub source_status: String,

    // Tokio runtime for the CSV loads
    pub runtime: Arc<tokio::runtime::Runtime>,

    // One table per listing; exactly one is visible at a time
    pub tours: TableState,
    pub festivals: TableState,
    pub active: ListingKind,

    // Shared across listings, applied to whichever is active
    pub filter: FilterState,

    // In-flight loads
    pub pending_loads: Vec<PendingLoad>,

    // Status
    pub status_message: String,

    // Settings dialog draft; Some while the dialog is open
    pub edit_source: Option<SourceConfig>,

    grid_width: f32,

    // UI Components
    menu_bar: MenuBar,
    status_bar: StatusBar,
    settings_dialog: SettingsDialog,
    tab_bar: TabBar,
    filter_bar: FilterBar,
    pagination: PaginationControls,
    data_grid: DataGrid,
}

impl GigViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        setup_styles(&cc.egui_ctx);

        let mut config = Config::load().unwrap_or_else(|_| Config::new());

        // GIGVIEW_DATA overrides the saved source for this run; it is only
        // written back if the user applies it in the settings dialog.
        if let Ok(value) = std::env::var("GIGVIEW_DATA") {
            if !value.trim().is_empty() {
                config.source = SourceConfig::from_env_value(&value);
            }
        }

        let source = config.source.to_source();
        let source_status = source.describe();

        // One persistent runtime shared by every load
        let runtime = Arc::new(
            tokio::runtime::Runtime::new()
                .expect("Failed to create tokio runtime")
        );

        let mut app = Self {
            config,
            source,
            source_status,
            runtime,
            tours: TableState::new(),
            festivals: TableState::new(),
            active: ListingKind::Tours,
            filter: FilterState::default(),
            pending_loads: Vec::new(),
            status_message: "Ready".to_string(),
            edit_source: None,
            grid_width: 0.0,
            menu_bar: MenuBar::new(),
            status_bar: StatusBar::new(),
            settings_dialog: SettingsDialog::new(),
            tab_bar: TabBar::new(),
            filter_bar: FilterBar::new(),
            pagination: PaginationControls::new(),
            data_grid: DataGrid::new(),
        };

        // Fetch both listings on startup
        app.reload_all();

        app
    }

    pub fn listing(&self, kind: ListingKind) -> &TableState {
        match kind {
            ListingKind::Tours => &self.tours,
            ListingKind::Festivals => &self.festivals,
        }
    }

    pub fn listing_mut(&mut self, kind: ListingKind) -> &mut TableState {
        match kind {
            ListingKind::Tours => &mut self.tours,
            ListingKind::Festivals => &mut self.festivals,
        }
    }

    pub fn start_load(&mut self, kind: ListingKind) {
        // A newer load supersedes any still-running one for the same listing.
        self.pending_loads.retain(|pending| pending.kind != kind);
        self.listing_mut(kind).begin_load();
        self.status_message = format!("Loading {}...", kind.file_name());

        let source = self.source.clone();
        let runtime = Arc::clone(&self.runtime);

        let promise: LoadPromise = Promise::spawn_thread("load_listing", move || {
            runtime.block_on(async move { crate::data::load_listing(&source, kind).await })
        });
        self.pending_loads.push(PendingLoad { kind, promise });
    }

    pub fn reload_all(&mut self) {
        for kind in ListingKind::ALL {
            self.start_load(kind);
        }
    }

    pub fn select_tab(&mut self, kind: ListingKind) {
        self.active = kind;
        // The newly visible grid kept column widths from when it was last
        // shown; force it to relayout.
        self.listing_mut(kind).bump_epoch();
    }

    pub fn export_active(&mut self) {
        let kind = self.active;
        let state = self.listing(kind);
        let Some(data) = &state.data else {
            self.status_message = "Nothing to export yet".to_string();
            return;
        };

        let visible = self.filter.visible_rows(data, &state.row_order);
        let html = export::render_document(data, &visible);
        let exported = visible.len();

        match export::write_html(&self.source.export_dir(), kind, &html) {
            Ok(path) => {
                tracing::info!(path = %path.display(), rows = exported, "exported listing");
                self.status_message =
                    format!("Exported {} rows to {}", exported, path.display());
            }
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                self.status_message = format!("Export failed: {}", err);
            }
        }
    }

    fn apply_source(&mut self, draft: SourceConfig) {
        self.config.source = draft;
        if let Err(err) = self.config.save() {
            tracing::warn!(error = %err, "could not save config");
        }
        self.source = self.config.source.to_source();
        self.source_status = self.source.describe();
        self.reload_all();
    }

    fn poll_loads(&mut self) {
        let mut finished = Vec::new();
        let mut still_pending = Vec::new();

        for pending in self.pending_loads.drain(..) {
            match pending.promise.try_take() {
                Ok(result) => finished.push((pending.kind, result)),
                Err(promise) => still_pending.push(PendingLoad {
                    kind: pending.kind,
                    promise,
                }),
            }
        }
        self.pending_loads = still_pending;

        for (kind, result) in finished {
            match result {
                Ok(data) => {
                    let rows = data.rows.len();
                    tracing::info!(file = kind.file_name(), rows, "listing loaded");
                    self.status_message =
                        format!("Loaded {} rows from {}", rows, kind.file_name());
                    self.listing_mut(kind).install(data);
                }
                Err(err) => {
                    tracing::error!(file = kind.file_name(), error = %err, "load failed");
                    self.status_message =
                        format!("Error loading {}: {}", kind.file_name(), err);
                    self.listing_mut(kind).fail(err.to_string());
                }
            }
        }
    }
}

impl eframe::App for GigViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        // A resize invalidates the active grid's cached column widths.
        let width = ctx.available_rect().width();
        if (width - self.grid_width).abs() > 0.5 {
            if self.grid_width > 0.0 {
                self.listing_mut(self.active).bump_epoch();
            }
            self.grid_width = width;
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            if let Some(event) = self.menu_bar.show(ui, &self.source_status) {
                match event {
                    MenuBarEvent::ShowSettings => {
                        self.edit_source = Some(self.config.source.clone());
                    }
                    MenuBarEvent::ExportHtml => self.export_active(),
                    MenuBarEvent::ReloadAll => self.reload_all(),
                    MenuBarEvent::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                }
            }
        });

        let row_counts = {
            let state = match self.active {
                ListingKind::Tours => &self.tours,
                ListingKind::Festivals => &self.festivals,
            };
            state.data.as_ref().map(|data| {
                let visible = self.filter.visible_rows(data, &state.row_order).len();
                (visible, data.rows.len())
            })
        };

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar.show(ui, &self.status_message, row_counts);
        });

        let mut settings_event = None;
        if let Some(draft) = self.edit_source.as_mut() {
            settings_event = self.settings_dialog.show(ctx, draft);
        }
        match settings_event {
            Some(SettingsDialogEvent::Apply) => {
                if let Some(draft) = self.edit_source.take() {
                    self.apply_source(draft);
                }
            }
            Some(SettingsDialogEvent::Cancel) => self.edit_source = None,
            None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(TabBarEvent::TabSelected(kind)) = self.tab_bar.show(ui, self.active) {
                self.select_tab(kind);
            }

            if self.filter_bar.show(ui, &mut self.filter).is_some() {
                // Any filter edit restarts paging from the first page.
                self.listing_mut(self.active).current_page = 0;
            }

            let kind = self.active;
            let state = match kind {
                ListingKind::Tours => &self.tours,
                ListingKind::Festivals => &self.festivals,
            };

            if state.is_loading && state.data.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }
            if let Some(error) = &state.load_error {
                let message = format!("Could not load {}: {}", kind.file_name(), error);
                ui.centered_and_justified(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_RED, message);
                });
                return;
            }
            let Some(data) = &state.data else {
                ui.centered_and_justified(|ui| {
                    ui.label("No data loaded");
                });
                return;
            };

            let visible = self.filter.visible_rows(data, &state.row_order);
            let total = visible.len();

            let (current_page, page_size) = {
                let state = self.listing_mut(kind);
                state.clamp_page(total);
                (state.current_page, state.page_size)
            };

            if let Some(event) = self.pagination.show(ui, current_page, page_size, total) {
                match event {
                    PaginationEvent::Reload => self.start_load(kind),
                    PaginationEvent::PageSizeChanged(size) => {
                        let state = self.listing_mut(kind);
                        state.page_size = size;
                        state.current_page = 0;
                    }
                    PaginationEvent::PageChanged(page) => {
                        self.listing_mut(kind).current_page = page;
                    }
                }
            }

            let state = match kind {
                ListingKind::Tours => &self.tours,
                ListingKind::Festivals => &self.festivals,
            };
            if let Some(DataGridEvent::ColumnSorted(column)) =
                self.data_grid.show(ui, kind, state, &visible)
            {
                self.listing_mut(kind).sort_by(column);
            }
        });

        if !self.pending_loads.is_empty() {
            ctx.request_repaint();
        }
    }
}
