use eframe::egui;

#[derive(Debug)]
pub enum MenuBarEvent {
    ShowSettings,
    ExportHtml,
    ReloadAll,
    Quit,
}

pub struct MenuBar;

impl MenuBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, source_status: &str) -> Option<MenuBarEvent> {
        let mut event = None;

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Settings...").clicked() {
                    event = Some(MenuBarEvent::ShowSettings);
                    ui.close_menu();
                }
                if ui.button("Export HTML").clicked() {
                    event = Some(MenuBarEvent::ExportHtml);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    event = Some(MenuBarEvent::Quit);
                }
            });

            ui.separator();

            if ui.button("🔄 Reload").clicked() {
                event = Some(MenuBarEvent::ReloadAll);
            }

            ui.separator();
            ui.label(source_status);
        });

        event
    }
}
