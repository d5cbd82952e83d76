use crate::data::ListingKind;
use crate::models::{TableData, TableState};
use eframe::egui;
use std::cell::Cell;

#[derive(Debug)]
pub enum DataGridEvent {
    ColumnSorted(usize),
}

pub struct DataGrid;

impl DataGrid {
    pub fn new() -> Self {
        Self
    }

    /// Render one page of `visible` (already filtered and sorted) rows.
    ///
    /// The widget id folds in the listing kind and the grid epoch, so bumping
    /// the epoch discards remembered column widths and scroll position.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        kind: ListingKind,
        state: &TableState,
        visible: &[usize],
    ) -> Option<DataGridEvent> {
        let data = state.data.as_ref()?;
        let column_to_sort = Cell::new(None);

        let display_cols = data.display_columns();
        let start_row = state.current_page * state.page_size;
        let end_row = (start_row + state.page_size).min(visible.len());
        let page = &visible[start_row.min(visible.len())..end_row];

        let available_height = ui.available_height();
        ui.push_id((kind, state.grid_epoch), |ui| {
            egui::ScrollArea::both()
                .id_source("listing_grid")
                .max_height(available_height)
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    use egui_extras::{Column, TableBuilder};

                    let table = TableBuilder::new(ui)
                        .striped(true)
                        .resizable(true)
                        .vscroll(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::initial(44.0).at_least(36.0).resizable(false))
                        .columns(
                            Column::initial(140.0).at_least(80.0).resizable(true).clip(true),
                            display_cols.len(),
                        )
                        .min_scrolled_height(available_height);

                    table
                        .header(22.0, |mut header| {
                            header.col(|ui| {
                                ui.strong("#");
                            });

                            for &col in &display_cols {
                                header.col(|ui| {
                                    let indicator = if state.sort_column == Some(col) {
                                        if state.sort_ascending {
                                            " ▲"
                                        } else {
                                            " ▼"
                                        }
                                    } else {
                                        ""
                                    };

                                    let text = format!("{}{}", data.columns[col], indicator);
                                    if ui.button(egui::RichText::new(text).strong()).clicked() {
                                        column_to_sort.set(Some(col));
                                    }
                                });
                            }
                        })
                        .body(|mut body| {
                            for (page_index, &row) in page.iter().enumerate() {
                                // Numbered by position in the filtered view,
                                // not by position in the file.
                                let line = start_row + page_index + 1;

                                body.row(20.0, |mut row_ui| {
                                    row_ui.col(|ui| {
                                        ui.label(
                                            egui::RichText::new(format!("{}", line))
                                                .color(egui::Color32::from_rgb(150, 150, 150)),
                                        );
                                    });

                                    for &col in &display_cols {
                                        row_ui.col(|ui| {
                                            Self::cell(ui, data, row, col);
                                        });
                                    }
                                });
                            }
                        });
                });
        });

        column_to_sort.get().map(DataGridEvent::ColumnSorted)
    }

    fn cell(ui: &mut egui::Ui, data: &TableData, row: usize, col: usize) {
        ui.style_mut().wrap = Some(false);
        let cell = data.cell(row, col);

        if Some(col) == data.name_col {
            if let Some(url) = data.link_for(row) {
                ui.hyperlink_to(cell, url).on_hover_text(url);
                return;
            }
        }

        let text = if Some(col) == data.date_col {
            egui::RichText::new(cell).monospace()
        } else {
            egui::RichText::new(cell)
        };

        let response = ui.add(egui::Label::new(text).truncate(true).selectable(true));
        if !cell.is_empty() {
            response.on_hover_text(cell);
        }
    }
}
