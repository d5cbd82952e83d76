use eframe::egui;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// `row_counts` is (visible, total) for the active listing; the short
    /// form is used when no filter is hiding anything.
    pub fn show(&mut self, ui: &mut egui::Ui, status_message: &str, row_counts: Option<(usize, usize)>) {
        ui.horizontal(|ui| {
            ui.label(status_message);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match row_counts {
                    Some((visible, total)) if visible == total => {
                        ui.label(format!("{} rows", total));
                    }
                    Some((visible, total)) => {
                        ui.label(format!("{} of {} rows", visible, total));
                    }
                    None => {}
                }
            });
        });
    }
}
