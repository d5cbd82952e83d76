use crate::config::SourceConfig;
use eframe::egui;

#[derive(Debug)]
pub enum SettingsDialogEvent {
    Apply,
    Cancel,
}

pub struct SettingsDialog;

impl SettingsDialog {
    pub fn new() -> Self {
        Self
    }

    /// Edits a draft in place; the caller decides on `Apply` whether to save
    /// it and reload.
    pub fn show(&mut self, ctx: &egui::Context, draft: &mut SourceConfig) -> Option<SettingsDialogEvent> {
        let mut event = None;

        egui::Window::new("Data Source")
            .default_width(420.0)
            .collapsible(false)
            .show(ctx, |ui| {
                let was_remote = matches!(draft, SourceConfig::Remote { .. });
                let mut is_remote = was_remote;

                ui.horizontal(|ui| {
                    ui.radio_value(&mut is_remote, false, "Local directory");
                    ui.radio_value(&mut is_remote, true, "Remote URL");
                });

                // Switching kind keeps whatever was typed.
                if is_remote != was_remote {
                    let text = match draft {
                        SourceConfig::Dir { path } => std::mem::take(path),
                        SourceConfig::Remote { url } => std::mem::take(url),
                    };
                    *draft = if is_remote {
                        SourceConfig::Remote { url: text }
                    } else {
                        SourceConfig::Dir { path: text }
                    };
                }

                ui.horizontal(|ui| match draft {
                    SourceConfig::Dir { path } => {
                        ui.label("Directory:");
                        ui.text_edit_singleline(path);
                    }
                    SourceConfig::Remote { url } => {
                        ui.label("Base URL:");
                        ui.text_edit_singleline(url);
                    }
                });

                ui.label("tours.csv and festivals.csv are read from this location.");

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        event = Some(SettingsDialogEvent::Apply);
                    }
                    if ui.button("Cancel").clicked() {
                        event = Some(SettingsDialogEvent::Cancel);
                    }
                });
            });

        event
    }
}
