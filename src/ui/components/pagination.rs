use eframe::egui;

#[derive(Debug)]
pub enum PaginationEvent {
    Reload,
    PageSizeChanged(usize),
    PageChanged(usize),
}

pub struct PaginationControls;

impl PaginationControls {
    pub fn new() -> Self {
        Self
    }

    /// `total_rows` is the count after filtering, so the readout always
    /// describes what the grid actually shows.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        current_page: usize,
        page_size: usize,
        total_rows: usize,
    ) -> Option<PaginationEvent> {
        let mut event = None;

        let total_pages = total_rows.div_ceil(page_size).max(1);
        let last_page = total_pages - 1;
        let at_first = current_page == 0;
        let at_last = current_page >= last_page;

        ui.horizontal(|ui| {
            if ui.add_enabled(!at_first, egui::Button::new("⏮")).clicked() {
                event = Some(PaginationEvent::PageChanged(0));
            }
            if ui.add_enabled(!at_first, egui::Button::new("◀ Previous")).clicked() {
                event = Some(PaginationEvent::PageChanged(current_page - 1));
            }

            if total_rows == 0 {
                ui.label("No rows to show");
            } else {
                let start_row = current_page * page_size + 1;
                let end_row = ((current_page + 1) * page_size).min(total_rows);
                ui.label(format!(
                    "Page {} of {} ({}-{} of {} rows)",
                    current_page + 1,
                    total_pages,
                    start_row,
                    end_row,
                    total_rows
                ));
            }

            if ui.add_enabled(!at_last, egui::Button::new("Next ▶")).clicked() {
                event = Some(PaginationEvent::PageChanged(current_page + 1));
            }
            if ui.add_enabled(!at_last, egui::Button::new("⏭")).clicked() {
                event = Some(PaginationEvent::PageChanged(last_page));
            }

            ui.separator();

            ui.label("Rows per page:");
            for size in [25, 50, 100, 250] {
                let selected = page_size == size;
                if ui.selectable_label(selected, size.to_string()).clicked() && !selected {
                    event = Some(PaginationEvent::PageSizeChanged(size));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let reload = ui.button("🔄 Reload").on_hover_text("Refetch this listing");
                if reload.clicked() {
                    event = Some(PaginationEvent::Reload);
                }
            });
        });

        ui.separator();

        event
    }
}
