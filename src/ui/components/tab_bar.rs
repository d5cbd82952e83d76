use crate::data::ListingKind;
use eframe::egui;

#[derive(Debug)]
pub enum TabBarEvent {
    TabSelected(ListingKind),
}

pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, active: ListingKind) -> Option<TabBarEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            for kind in ListingKind::ALL {
                let is_active = kind == active;
                let label = egui::RichText::new(kind.title()).strong();

                // Re-clicking the active tab is a no-op, not a relayout.
                if ui.selectable_label(is_active, label).clicked() && !is_active {
                    event = Some(TabBarEvent::TabSelected(kind));
                }
            }
        });
        ui.separator();

        event
    }
}
