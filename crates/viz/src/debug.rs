//! Widget inspector for development.
//!
//! F3 spawns a panel listing the internal state of the mounted widget
//! (generation, step, tooltip lifecycle for the sampler; layout and region
//! state for the explorer). Pressing F3 again despawns it.

use bevy::prelude::*;

use crate::camera::muted_text_color;
use crate::explorer::ExplorerView;
use crate::plugin::{ActiveWidget, VizSettings};
use crate::sampler::SamplerView;

/// Plugin for the widget inspector.
pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>()
            .add_systems(Update, (toggle_debug_overlay, update_debug_text).chain());
    }
}

/// Whether the inspector panel is open.
#[derive(Resource, Default)]
pub struct DebugOverlay {
    pub enabled: bool,
}

/// Root node of the inspector; exists only while it is open.
#[derive(Component)]
pub struct DebugPanel;

#[derive(Component)]
pub struct DebugText;

/// System to open and close the inspector with F3.
fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<VizSettings>,
    active: Res<State<ActiveWidget>>,
    mut overlay: ResMut<DebugOverlay>,
    panels: Query<Entity, With<DebugPanel>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }
    overlay.enabled = !overlay.enabled;

    if overlay.enabled {
        let theme = settings.theme_for(*active.get());
        spawn_panel(&mut commands, muted_text_color(theme));
        tracing::info!("Inspector opened on {:?}", active.get());
    } else {
        for entity in &panels {
            commands.entity(entity).despawn_recursive();
        }
        tracing::info!("Inspector closed");
    }
}

fn spawn_panel(commands: &mut Commands, accent: Color) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    top: Val::Px(10.0),
                    right: Val::Px(10.0),
                    padding: UiRect::all(Val::Px(8.0)),
                    border: UiRect::left(Val::Px(3.0)),
                    ..default()
                },
                background_color: Color::srgba(0.0, 0.0, 0.0, 0.75).into(),
                border_color: accent.into(),
                z_index: ZIndex::Global(20),
                ..default()
            },
            DebugPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                TextBundle::from_section(
                    "",
                    TextStyle {
                        font_size: 12.0,
                        color: Color::srgb(0.85, 0.85, 0.85),
                        ..default()
                    },
                ),
                DebugText,
            ));
        });
}

/// Tooltip lifecycle as seen by the host.
fn tooltip_line(view: &SamplerView) -> String {
    match view.widget.tooltip() {
        None => "Tooltip: released".to_string(),
        Some(tooltip) if tooltip.is_shown() => format!(
            "Tooltip: shown at ({:.0}, {:.0}) opacity {:.2}",
            tooltip.left,
            tooltip.top,
            tooltip.opacity()
        ),
        Some(tooltip) => format!("Tooltip: fading out ({:.2})", tooltip.opacity()),
    }
}

/// Inspector lines for the mounted sampler.
fn sampler_lines(view: &SamplerView) -> Vec<String> {
    let widget = &view.widget;
    let stats = widget.stats();
    let mut lines = vec![
        "World Sampler".to_string(),
        format!("Canvas: {:.0}x{:.0}", view.canvas.width, view.canvas.height),
        format!(
            "Worlds: {} / {} (generation {})",
            stats.total,
            widget.config().generation.population,
            widget.generation()
        ),
        format!("|H| {}  |E| {}  |H∩E| {}", stats.h_count, stats.e_count, stats.h_and_e_count),
        format!("{}{}", widget.step().label(), if widget.is_animating() { " (animating)" } else { "" }),
    ];
    if let Some(point) = widget.hovered_point() {
        lines.push(format!("Hover: world {} at ({:.0}, {:.0})", point.id, point.x, point.y));
    }
    lines.push(tooltip_line(view));
    lines
}

/// Inspector lines for the mounted explorer.
fn explorer_lines(view: &ExplorerView) -> Vec<String> {
    let layout = view.widget.layout();
    let state = view.widget.state();
    vec![
        "Region Explorer".to_string(),
        format!("Diagram: {:.0}x{:.0} r={:.1}", layout.width, layout.height, layout.radius),
        format!("Hovered: {}  Locked: {}", state.hovered(), state.locked()),
        format!("Effective: {}", state.effective()),
        format!("Tracked buttons: {}", view.tracked_buttons()),
    ]
}

/// System to refresh the inspector when the mounted widget changes.
fn update_debug_text(
    sampler: Option<Res<SamplerView>>,
    explorer: Option<Res<ExplorerView>>,
    added: Query<(), Added<DebugText>>,
    mut texts: Query<&mut Text, With<DebugText>>,
) {
    let fresh_panel = !added.is_empty();
    let lines = match (sampler.as_ref(), explorer.as_ref()) {
        (Some(view), _) if fresh_panel || view.is_changed() => sampler_lines(view),
        (_, Some(view)) if fresh_panel || view.is_changed() => explorer_lines(view),
        _ => return,
    };

    for mut text in &mut texts {
        if let Some(section) = text.sections.first_mut() {
            section.value = lines.join("\n");
        }
    }
}
