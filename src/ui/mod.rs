mod dialogs;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::editor::LayerStack;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (
                // Top panels first, dialogs over them
                toolbar::toolbar_ui,
                toolbar::tool_settings_ui.run_if(resource_exists::<LayerStack>),
                dialogs::config_reset_notification_ui,
            )
                .chain(),
        );
    }
}
