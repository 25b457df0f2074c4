//! Main visualization plugin that ties all systems together.

use bayes_model::Theme;
use bevy::prelude::*;
use region_explorer::ExplorerConfig;
use world_sampler::SamplerConfig;

use crate::camera::CameraPlugin;
use crate::debug::DebugPlugin;
use crate::explorer::ExplorerPlugin;
use crate::sampler::SamplerPlugin;

/// Which widget is mounted.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveWidget {
    #[default]
    Sampler,
    Explorer,
}

impl ActiveWidget {
    /// The other widget.
    pub fn toggled(self) -> Self {
        match self {
            ActiveWidget::Sampler => ActiveWidget::Explorer,
            ActiveWidget::Explorer => ActiveWidget::Sampler,
        }
    }
}

/// Settings both widgets are mounted with.
#[derive(Resource, Debug, Clone, Default)]
pub struct VizSettings {
    /// Widget shown at launch
    pub start: ActiveWidget,
    pub sampler: SamplerConfig,
    pub explorer: ExplorerConfig,
}

impl VizSettings {
    /// Theme of the page while `widget` is mounted, from that widget's config.
    pub fn theme_for(&self, widget: ActiveWidget) -> Theme {
        match widget {
            ActiveWidget::Sampler => self.sampler.theme,
            ActiveWidget::Explorer => self.explorer.theme,
        }
    }

    /// Forces both widgets into `theme`.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.sampler.theme = theme;
        self.explorer.theme = theme;
        self
    }
}

/// Main plugin for the Bayes widgets viewer.
///
/// Sets up the window, the widget state machine and all sub-plugins.
pub struct BayesVizPlugin {
    pub settings: VizSettings,
}

impl Plugin for BayesVizPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bayes Widgets".into(),
                resolution: (1000., 760.).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(self.settings.clone())
        .insert_state(self.settings.start)
        .add_systems(Update, switch_widget)
        .add_plugins((CameraPlugin, SamplerPlugin, ExplorerPlugin, DebugPlugin));
    }
}

/// System to switch widgets with Tab.
///
/// Leaving a state unmounts its widget, entering mounts a fresh one.
fn switch_widget(
    keyboard: Res<ButtonInput<KeyCode>>,
    current: Res<State<ActiveWidget>>,
    mut next: ResMut<NextState<ActiveWidget>>,
) {
    if keyboard.just_pressed(KeyCode::Tab) {
        let target = current.get().toggled();
        tracing::info!("Switching to {:?}", target);
        next.set(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_widget() {
        assert_eq!(ActiveWidget::Sampler.toggled(), ActiveWidget::Explorer);
        assert_eq!(ActiveWidget::Explorer.toggled().toggled(), ActiveWidget::Explorer);
    }

    #[test]
    fn test_with_theme_applies_to_both() {
        let settings = VizSettings::default().with_theme(Theme::Dark);
        assert_eq!(settings.theme_for(ActiveWidget::Sampler), Theme::Dark);
        assert_eq!(settings.theme_for(ActiveWidget::Explorer), Theme::Dark);
    }

    #[test]
    fn test_each_widget_keeps_its_own_theme() {
        let mut settings = VizSettings::default();
        settings.explorer.theme = Theme::Dark;
        assert_eq!(settings.theme_for(ActiveWidget::Sampler), Theme::Light);
        assert_eq!(settings.theme_for(ActiveWidget::Explorer), Theme::Dark);
    }
}
