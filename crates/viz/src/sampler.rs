//! World Sampler host: circles, hover ring, tooltip, step controls and stats.
//!
//! The widget itself lives in a resource for as long as the sampler state is
//! active. Systems feed it window size, input and frame time, then mirror
//! its state onto entities.

use bayes_model::{PointStyle, SamplePoint, Step, WorldStats};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResized};
use world_sampler::{PointerPosition, SamplerWidget};

use crate::camera::{muted_text_color, text_color};
use crate::canvas::{color, CanvasRect};
use crate::plugin::{ActiveWidget, VizSettings};

/// Plugin hosting the World Sampler.
pub struct SamplerPlugin;

impl Plugin for SamplerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ActiveWidget::Sampler), mount_sampler)
            .add_systems(OnExit(ActiveWidget::Sampler), unmount_sampler)
            .add_systems(
                Update,
                (
                    handle_resize,
                    handle_step_input,
                    advance_animation,
                    track_pointer,
                    sync_world_circles,
                    sync_hover_ring,
                    measure_tooltip,
                    sync_tooltip,
                    sync_step_controls,
                )
                    .chain()
                    .run_if(in_state(ActiveWidget::Sampler)),
            );
    }
}

/// Depth step between consecutive worlds so later ones paint on top.
const WORLD_Z_STEP: f32 = 1e-4;

/// The mounted sampler.
#[derive(Resource)]
pub struct SamplerView {
    pub widget: SamplerWidget,
    pub canvas: CanvasRect,
    pub window: Vec2,
    /// Generation the spawned circles belong to
    spawned_generation: Option<u64>,
    unit_circle: Handle<Mesh>,
}

/// Marker for every top-level entity owned by the sampler.
#[derive(Component)]
pub struct SamplerEntity;

/// A rendered world.
#[derive(Component)]
pub struct WorldCircle {
    pub index: usize,
}

/// Outline drawn behind the hovered world.
#[derive(Component)]
pub struct HoverRing;

/// Tooltip container; exists only while the widget holds a tooltip.
#[derive(Component)]
pub struct TooltipBox;

#[derive(Component)]
pub struct TooltipText;

#[derive(Component)]
pub struct StepCaption;

#[derive(Component)]
pub struct StepLabel;

/// Previous / next step buttons.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepButton {
    Prev,
    Next,
}

/// Value cell of the statistics row, by row index.
#[derive(Component)]
pub struct StatValue(pub usize);

/// Button fill for an enabled or disabled control.
pub fn step_button_color(enabled: bool) -> Color {
    if enabled {
        // blue-500
        Color::srgb(0.231, 0.51, 0.965)
    } else {
        // gray-300
        Color::srgb(0.82, 0.835, 0.859)
    }
}

/// Transform of world `index` at `style`.
fn circle_transform(
    view: &SamplerView,
    index: usize,
    point: &SamplePoint,
    style: &PointStyle,
) -> Transform {
    let position = view.canvas.to_world(point.x, point.y, view.window);
    Transform::from_translation(position.extend(index as f32 * WORLD_Z_STEP))
        .with_scale(Vec3::splat(style.radius.max(0.0) as f32))
}

fn window_size(windows: &Query<&Window, With<PrimaryWindow>>) -> Vec2 {
    windows
        .get_single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(Vec2::new(1000.0, 760.0))
}

/// System to mount the sampler when its state is entered.
fn mount_sampler(
    mut commands: Commands,
    settings: Res<VizSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let window = window_size(&windows);
    let canvas = CanvasRect::sampler(window);
    let theme = settings.sampler.theme;

    let mut widget = SamplerWidget::from_config(settings.sampler.clone());
    widget.set_viewport(window.x as f64, window.y as f64);
    widget.resize(canvas.width as f64, canvas.height as f64);

    let unit_circle = meshes.add(Circle::new(1.0));

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(unit_circle.clone()),
            material: materials.add(ColorMaterial::from(color(theme.hover_outline(), 1.0))),
            visibility: Visibility::Hidden,
            ..default()
        },
        HoverRing,
        SamplerEntity,
    ));

    spawn_step_controls(&mut commands, &settings);
    spawn_stats_row(&mut commands, &settings);

    tracing::info!("Mounted World Sampler on {}x{} canvas", canvas.width, canvas.height);
    commands.insert_resource(SamplerView {
        widget,
        canvas,
        window,
        spawned_generation: None,
        unit_circle,
    });
}

fn spawn_step_controls(commands: &mut Commands, settings: &VizSettings) {
    let theme = settings.sampler.theme;
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    top: Val::Px(0.0),
                    left: Val::Px(0.0),
                    width: Val::Percent(100.0),
                    height: Val::Px(130.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                ..default()
            },
            SamplerEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                TextBundle::from_section(
                    Step::default().description(),
                    TextStyle {
                        font_size: 18.0,
                        color: text_color(theme),
                        ..default()
                    },
                ),
                StepCaption,
            ));

            parent
                .spawn(NodeBundle {
                    style: Style {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    ..default()
                })
                .with_children(|row| {
                    spawn_step_button(row, StepButton::Prev, "Previous");
                    row.spawn((
                        TextBundle::from_section(
                            Step::default().label(),
                            TextStyle {
                                font_size: 14.0,
                                color: muted_text_color(theme),
                                ..default()
                            },
                        ),
                        StepLabel,
                    ));
                    spawn_step_button(row, StepButton::Next, "Next");
                });
        });
}

fn spawn_step_button(parent: &mut ChildBuilder, kind: StepButton, text: &str) {
    parent
        .spawn((
            ButtonBundle {
                style: Style {
                    padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                    margin: UiRect::horizontal(Val::Px(12.0)),
                    ..default()
                },
                background_color: step_button_color(true).into(),
                ..default()
            },
            kind,
        ))
        .with_children(|button| {
            button.spawn(TextBundle::from_section(
                text,
                TextStyle {
                    font_size: 16.0,
                    color: Color::WHITE,
                    ..default()
                },
            ));
        });
}

fn spawn_stats_row(commands: &mut Commands, settings: &VizSettings) {
    let theme = settings.sampler.theme;
    let rows = WorldStats::default().display_rows();

    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(0.0),
                    left: Val::Px(0.0),
                    width: Val::Percent(100.0),
                    height: Val::Px(80.0),
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceEvenly,
                    align_items: AlignItems::Center,
                    ..default()
                },
                ..default()
            },
            SamplerEntity,
        ))
        .with_children(|parent| {
            for (index, (label, _)) in rows.into_iter().enumerate() {
                parent
                    .spawn(NodeBundle {
                        style: Style {
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        ..default()
                    })
                    .with_children(|cell| {
                        cell.spawn(TextBundle::from_section(
                            label,
                            TextStyle {
                                font_size: 14.0,
                                color: muted_text_color(theme),
                                ..default()
                            },
                        ));
                        cell.spawn((
                            TextBundle::from_section(
                                "",
                                TextStyle {
                                    font_size: 22.0,
                                    color: text_color(theme),
                                    ..default()
                                },
                            ),
                            StatValue(index),
                        ));
                    });
            }
        });
}

/// System to unmount the sampler when its state is left.
///
/// Releases the tooltip and despawns everything the sampler created.
fn unmount_sampler(
    mut commands: Commands,
    view: Option<ResMut<SamplerView>>,
    entities: Query<Entity, With<SamplerEntity>>,
) {
    if let Some(mut view) = view {
        view.widget.teardown();
    }
    for entity in &entities {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<SamplerView>();
    tracing::info!("Unmounted World Sampler");
}

/// System to regenerate worlds when the window size changes.
fn handle_resize(mut resized: EventReader<WindowResized>, mut view: ResMut<SamplerView>) {
    let Some(event) = resized.read().last() else {
        return;
    };

    let view = &mut *view;
    view.window = Vec2::new(event.width, event.height);
    view.canvas = CanvasRect::sampler(view.window);
    view.widget
        .set_viewport(view.window.x as f64, view.window.y as f64);
    view.widget
        .resize(view.canvas.width as f64, view.canvas.height as f64);
}

/// System to move between steps with the buttons or the arrow keys.
fn handle_step_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<(&Interaction, &StepButton), Changed<Interaction>>,
    mut view: ResMut<SamplerView>,
) {
    let mut prev = keyboard.just_pressed(KeyCode::ArrowLeft);
    let mut next = keyboard.just_pressed(KeyCode::ArrowRight);

    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            match button {
                StepButton::Prev => prev = true,
                StepButton::Next => next = true,
            }
        }
    }

    let moved = (prev && view.widget.prev_step()) || (next && view.widget.next_step());
    if moved {
        tracing::info!("{}: {}", view.widget.step().label(), view.widget.step());
    }
}

/// System to advance step transitions and the tooltip fade.
fn advance_animation(time: Res<Time>, mut view: ResMut<SamplerView>) {
    view.widget.advance(time.delta_seconds() as f64);
}

/// System to update hover from the cursor.
fn track_pointer(windows: Query<&Window, With<PrimaryWindow>>, mut view: ResMut<SamplerView>) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let over_canvas = window
        .cursor_position()
        .and_then(|cursor| view.canvas.local(cursor).map(|local| (cursor, local)));

    match over_canvas {
        Some((cursor, local)) => view.widget.pointer_moved(PointerPosition {
            canvas_x: local.x as f64,
            canvas_y: local.y as f64,
            page_x: cursor.x as f64,
            page_y: cursor.y as f64,
        }),
        None => {
            if view.widget.hovered_index().is_some() {
                view.widget.pointer_left();
            }
        }
    }
}

/// System to mirror worlds onto circle entities.
///
/// Respawns every circle when a new generation exists, otherwise restyles
/// them while a transition runs or the layout changed.
fn sync_world_circles(
    mut commands: Commands,
    mut view: ResMut<SamplerView>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    spawned: Query<Entity, With<WorldCircle>>,
    mut circles: Query<(&WorldCircle, &Handle<ColorMaterial>, &mut Transform)>,
    mut last: Local<Option<(Step, CanvasRect, Vec2, bool)>>,
) {
    let styles = view.widget.current_styles();
    let generation = view.widget.generation();

    if view.spawned_generation != Some(generation) {
        for entity in &spawned {
            commands.entity(entity).despawn_recursive();
        }
        for (index, (point, style)) in view.widget.points().iter().zip(&styles).enumerate() {
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(view.unit_circle.clone()),
                    material: materials.add(ColorMaterial::from(color(style.fill, style.opacity))),
                    transform: circle_transform(&view, index, point, style),
                    ..default()
                },
                WorldCircle { index },
                SamplerEntity,
            ));
        }
        view.spawned_generation = Some(generation);
        *last = None;
        return;
    }

    let animating = view.widget.is_animating();
    let key = (view.widget.step(), view.canvas, view.window, animating);
    // One more pass after a transition ends so the settled styles land
    let was_animating = last.map_or(false, |(.., a)| a);
    if !animating && !was_animating && *last == Some(key) {
        return;
    }
    *last = Some(key);

    let points = view.widget.points();
    for (circle, material, mut transform) in &mut circles {
        let (Some(point), Some(style)) = (points.get(circle.index), styles.get(circle.index))
        else {
            continue;
        };
        *transform = circle_transform(&view, circle.index, point, style);
        if let Some(material) = materials.get_mut(material) {
            material.color = color(style.fill, style.opacity);
        }
    }
}

/// System to place the outline ring behind the hovered world.
fn sync_hover_ring(
    view: Res<SamplerView>,
    mut ring: Query<(&mut Transform, &mut Visibility), With<HoverRing>>,
) {
    let Ok((mut transform, mut visibility)) = ring.get_single_mut() else {
        return;
    };

    let hovered = view.widget.hover_outline().and_then(|(index, _)| {
        let point = view.widget.points().get(index)?;
        let style = view.widget.current_styles().get(index).copied()?;
        Some((index, *point, style))
    });

    match hovered {
        Some((index, point, style)) => {
            let mut ring_transform = circle_transform(&view, index, &point, &style);
            ring_transform.translation.z -= WORLD_Z_STEP / 2.0;
            // 1px outline
            ring_transform.scale = Vec3::splat(style.radius as f32 + 1.0);
            *transform = ring_transform;
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

/// System to feed the laid-out tooltip size back into placement.
fn measure_tooltip(
    boxes: Query<&Node, (With<TooltipBox>, Changed<Node>)>,
    mut view: ResMut<SamplerView>,
) {
    let Ok(node) = boxes.get_single() else {
        return;
    };
    let size = node.size();
    if view.widget.set_tooltip_size(size.x as f64, size.y as f64) {
        tracing::trace!("Tooltip measured at {}x{}", size.x, size.y);
    }
}

/// System to mirror the widget's tooltip onto a UI node.
///
/// The node is spawned the first time the widget holds a tooltip and
/// despawned once the widget releases it.
fn sync_tooltip(
    mut commands: Commands,
    view: Res<SamplerView>,
    mut boxes: Query<(Entity, &mut Style, &mut BackgroundColor, &mut BorderColor), With<TooltipBox>>,
    mut texts: Query<&mut Text, With<TooltipText>>,
) {
    let theme = view.widget.theme();
    let Some(tooltip) = view.widget.tooltip() else {
        for (entity, ..) in &boxes {
            commands.entity(entity).despawn_recursive();
        }
        return;
    };

    let opacity = tooltip.opacity();
    let (background, background_alpha) = theme.tooltip_background();
    let border = theme
        .tooltip_border()
        .map(|(rgb, alpha)| color(rgb, alpha * opacity))
        .unwrap_or(Color::NONE);

    let Ok((_, mut style, mut fill, mut border_color)) = boxes.get_single_mut() else {
        commands
            .spawn((
                NodeBundle {
                    style: Style {
                        position_type: PositionType::Absolute,
                        left: Val::Px(tooltip.left as f32),
                        top: Val::Px(tooltip.top as f32),
                        padding: UiRect::all(Val::Px(8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    background_color: color(background, background_alpha * opacity).into(),
                    border_color: border.into(),
                    z_index: ZIndex::Global(10),
                    ..default()
                },
                TooltipBox,
                SamplerEntity,
            ))
            .with_children(|parent| {
                parent.spawn((
                    TextBundle::from_section(
                        tooltip.text(),
                        TextStyle {
                            font_size: 12.0,
                            color: Color::srgba(1.0, 1.0, 1.0, opacity as f32),
                            ..default()
                        },
                    ),
                    TooltipText,
                ));
            });
        return;
    };

    style.left = Val::Px(tooltip.left as f32);
    style.top = Val::Px(tooltip.top as f32);
    fill.0 = color(background, background_alpha * opacity);
    border_color.0 = border;

    for mut text in &mut texts {
        if let Some(section) = text.sections.first_mut() {
            section.value = tooltip.text();
            section.style.color = Color::srgba(1.0, 1.0, 1.0, opacity as f32);
        }
    }
}

/// System to refresh the caption, step label, button states and statistics.
fn sync_step_controls(
    view: Res<SamplerView>,
    mut captions: Query<&mut Text, (With<StepCaption>, Without<StepLabel>, Without<StatValue>)>,
    mut labels: Query<&mut Text, (With<StepLabel>, Without<StepCaption>, Without<StatValue>)>,
    mut values: Query<(&mut Text, &StatValue), (Without<StepCaption>, Without<StepLabel>)>,
    mut buttons: Query<(&StepButton, &mut BackgroundColor)>,
    mut last: Local<Option<(Step, u64)>>,
) {
    let key = (view.widget.step(), view.widget.generation());
    if *last == Some(key) {
        return;
    }
    *last = Some(key);

    let step = view.widget.step();
    for mut text in &mut captions {
        text.sections[0].value = step.description().to_string();
    }
    for mut text in &mut labels {
        text.sections[0].value = step.label();
    }
    for (button, mut background) in &mut buttons {
        let enabled = match button {
            StepButton::Prev => view.widget.can_prev(),
            StepButton::Next => view.widget.can_next(),
        };
        background.0 = step_button_color(enabled);
    }

    let rows = view.widget.stats().display_rows();
    for (mut text, StatValue(index)) in &mut values {
        if let Some((_, value)) = rows.get(*index) {
            text.sections[0].value = value.clone();
        }
    }
}
