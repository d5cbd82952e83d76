use crate::models::{parse_bound, FilterState};
use eframe::egui;

#[derive(Debug)]
pub enum FilterBarEvent {
    FiltersChanged,
    FiltersCleared,
}

pub struct FilterBar;

impl FilterBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, filter: &mut FilterState) -> Option<FilterBarEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.label("Search:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut filter.search)
                    .hint_text("any column...")
                    .desired_width(220.0),
            );
            if response.changed() {
                event = Some(FilterBarEvent::FiltersChanged);
            }

            ui.separator();

            ui.label("From:");
            if Self::date_field(ui, &mut filter.date_from) {
                event = Some(FilterBarEvent::FiltersChanged);
            }

            ui.label("To:");
            if Self::date_field(ui, &mut filter.date_to) {
                event = Some(FilterBarEvent::FiltersChanged);
            }

            ui.separator();

            let clear = egui::Button::new("✖ Clear");
            if ui
                .add_enabled(!filter.is_empty(), clear)
                .on_hover_text("Reset search and date window")
                .clicked()
            {
                filter.clear();
                event = Some(FilterBarEvent::FiltersCleared);
            }
        });

        event
    }

    /// One date-bound input. Text that does not parse as a date is shown in
    /// red and the bound is simply not applied.
    fn date_field(ui: &mut egui::Ui, value: &mut String) -> bool {
        let invalid = !value.trim().is_empty() && parse_bound(value).is_none();

        let mut edit = egui::TextEdit::singleline(value)
            .hint_text("YYYY-MM-DD")
            .desired_width(100.0);
        if invalid {
            edit = edit.text_color(egui::Color32::LIGHT_RED);
        }

        let mut response = ui.add(edit);
        if invalid {
            response = response.on_hover_text("Not a date, so this bound is ignored");
        }
        response.changed()
    }
}
