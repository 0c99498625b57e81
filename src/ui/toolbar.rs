use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::UpdateToolDefaultsRequest;
use crate::constants::{MAX_BRUSH_SIZE, MAX_PLAYER, MAX_UNIT_TYPE, TERRAIN_PALETTE};
use crate::editor::layers::{ShapeToolLayer, SHAPE_TOOL_LAYER};
use crate::editor::{
    BrushSettings, CommandHistory, CurrentTool, EditorTool, LayerStack, UnitSettings,
};
use crate::map::MapData;
use crate::theme::{self, ui as colors};

/// Main toolbar showing tools, grid toggle and undo/redo
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut current_tool: ResMut<CurrentTool>,
    mut map_data: ResMut<MapData>,
    mut history: ResMut<CommandHistory>,
) -> Result {
    let mut selected_tool = current_tool.tool;
    let mut grid_visible = map_data.grid_visible;
    let mut undo_clicked = false;
    let mut redo_clicked = false;

    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // Tool buttons with keyboard shortcuts
                for tool in EditorTool::all() {
                    let button = egui::Button::new(
                        egui::RichText::new(tool_button_label(tool)).size(14.0).strong(),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected_tool == *tool);

                    let response = ui.add(button);
                    if response.clicked() {
                        selected_tool = *tool;
                    }
                    response.on_hover_text(tool.display_name());
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.checkbox(&mut grid_visible, "Grid");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let redo = ui.add_enabled(history.can_redo(), egui::Button::new("Redo"));
                    redo_clicked = redo.clicked();
                    redo.on_hover_text("Ctrl+Y");

                    let undo = ui.add_enabled(history.can_undo(), egui::Button::new("Undo"));
                    undo_clicked = undo.clicked();
                    match history.next_undo_label() {
                        Some(label) => undo.on_hover_text(format!("Undo {} (Ctrl+Z)", label)),
                        None => undo.on_hover_text("Ctrl+Z"),
                    };
                });
            });
        });

    // Write back only on change so change detection stays meaningful
    if current_tool.tool != selected_tool {
        current_tool.tool = selected_tool;
    }
    if map_data.grid_visible != grid_visible {
        map_data.grid_visible = grid_visible;
    }
    if undo_clicked {
        history.undo(&mut map_data);
    }
    if redo_clicked {
        history.redo(&mut map_data);
    }
    Ok(())
}

/// Secondary toolbar showing settings for the active tool
pub fn tool_settings_ui(
    mut contexts: EguiContexts,
    current_tool: Res<CurrentTool>,
    mut brush: ResMut<BrushSettings>,
    mut units: ResMut<UnitSettings>,
    stack: Res<LayerStack>,
    mut defaults_events: MessageWriter<UpdateToolDefaultsRequest>,
) -> Result {
    let tool = current_tool.tool;
    if tool == EditorTool::Select {
        return Ok(());
    }

    let mut settings = brush.clone();
    let mut unit_settings = units.clone();
    let status = stack
        .get::<ShapeToolLayer>(SHAPE_TOOL_LAYER)
        .and_then(ShapeToolLayer::status_text);

    egui::TopBottomPanel::top("tool_settings")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(colors::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                ui.label(
                    egui::RichText::new(format!("{} Settings:", tool_title(tool)))
                        .color(colors::LABEL_TEXT),
                );
                ui.add_space(8.0);

                if tool == EditorTool::Unit {
                    ui.label("Unit Type:");
                    ui.add(
                        egui::DragValue::new(&mut unit_settings.unit_type)
                            .range(1..=MAX_UNIT_TYPE)
                            .speed(0.1),
                    );
                    ui.label("Player:");
                    ui.add(
                        egui::DragValue::new(&mut unit_settings.player)
                            .range(1..=MAX_PLAYER)
                            .speed(0.1),
                    );
                    ui.label(
                        egui::RichText::new("Click a unit to remove it")
                            .color(colors::HINT_TEXT)
                            .size(11.0),
                    );
                } else if tool != EditorTool::Erase {
                    terrain_palette(ui, &mut settings.terrain);
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(12.0);
                }

                if tool.uses_brush() {
                    ui.label("Brush Size:");
                    ui.add(
                        egui::DragValue::new(&mut settings.size)
                            .range(0..=MAX_BRUSH_SIZE)
                            .speed(0.1),
                    );
                    ui.label(
                        egui::RichText::new("[ / ]: Resize")
                            .color(colors::HINT_TEXT)
                            .size(11.0),
                    );
                }

                if matches!(tool, EditorTool::Circle | EditorTool::Oval) {
                    ui.checkbox(&mut settings.fill, "Filled");
                }

                if let Some(status) = &status {
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(status.as_str())
                            .color(colors::HINT_TEXT)
                            .size(11.0),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Save as defaults")
                        .on_hover_text("Use these settings on startup")
                        .clicked()
                    {
                        defaults_events.write(UpdateToolDefaultsRequest {
                            terrain: settings.terrain,
                            brush_size: settings.size,
                            fill: settings.fill,
                        });
                    }
                });
            });
        });

    if *brush != settings {
        *brush = settings;
    }
    if *units != unit_settings {
        *units = unit_settings;
    }
    Ok(())
}

/// One swatch per terrain type, the selected one outlined
fn terrain_palette(ui: &mut egui::Ui, terrain: &mut u32) {
    ui.label("Terrain:");
    for (id, name, _) in TERRAIN_PALETTE {
        let selected = *terrain == *id;
        let button = egui::Button::new("")
            .fill(theme::bevy_to_egui_opaque(theme::terrain_color(*id)))
            .min_size(egui::vec2(18.0, 18.0))
            .stroke(if selected {
                egui::Stroke::new(2.0, colors::SELECTED_BORDER)
            } else {
                egui::Stroke::new(1.0, colors::UNSELECTED_BORDER)
            });

        let response = ui.add(button);
        if response.clicked() {
            *terrain = *id;
        }
        response.on_hover_text(*name);
    }
}

fn tool_title(tool: EditorTool) -> &'static str {
    match tool {
        EditorTool::Select => "Select",
        EditorTool::Paint => "Paint",
        EditorTool::Erase => "Erase",
        EditorTool::Fill => "Fill",
        EditorTool::Unit => "Unit",
        EditorTool::Circle => "Circle",
        EditorTool::Oval => "Oval",
        EditorTool::Line => "Line",
    }
}

/// Get the button label for a tool (with keyboard shortcut)
fn tool_button_label(tool: &EditorTool) -> &'static str {
    match tool {
        EditorTool::Select => "Select [V]",
        EditorTool::Paint => "Paint [B]",
        EditorTool::Erase => "Erase [E]",
        EditorTool::Fill => "Fill [G]",
        EditorTool::Unit => "Unit [U]",
        EditorTool::Circle => "Circle [C]",
        EditorTool::Oval => "Oval [O]",
        EditorTool::Line => "Line [L]",
    }
}
