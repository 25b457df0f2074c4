//! Camera setup and page background.

use bayes_model::Theme;
use bevy::prelude::*;

use crate::plugin::{ActiveWidget, VizSettings};

/// Plugin for the fixed 2D camera and the page background.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(OnEnter(ActiveWidget::Sampler), apply_page_background)
            .add_systems(OnEnter(ActiveWidget::Explorer), apply_page_background);
    }
}

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Page background for a theme.
pub fn page_background(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::srgb(1.0, 1.0, 1.0),
        // gray-900
        Theme::Dark => Color::srgb(0.067, 0.094, 0.153),
    }
}

/// Primary text color for a theme.
pub fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::srgb(0.216, 0.255, 0.318),
        Theme::Dark => Color::srgb(0.82, 0.835, 0.859),
    }
}

/// Secondary text color for a theme.
pub fn muted_text_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::srgb(0.42, 0.447, 0.502),
        Theme::Dark => Color::srgb(0.612, 0.639, 0.686),
    }
}

/// System to spawn the camera on startup.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2dBundle::default(), MainCamera));
}

/// System to repaint the page in the theme of the widget being mounted.
fn apply_page_background(
    mut commands: Commands,
    settings: Res<VizSettings>,
    active: Res<State<ActiveWidget>>,
) {
    let theme = settings.theme_for(*active.get());
    commands.insert_resource(ClearColor(page_background(theme)));
}
