//! Region Explorer host: Venn diagram meshes and the interactive formula.

use bayes_model::{Region, Rgb, Theme};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::utils::HashMap;
use bevy::window::{PrimaryWindow, WindowResized};
use region_explorer::{CircleStyle, ExplorerWidget, FormulaControl, VennLayout};

use crate::camera::{muted_text_color, text_color};
use crate::canvas::{color, CanvasRect};
use crate::plugin::{ActiveWidget, VizSettings};

/// Plugin hosting the Region Explorer.
pub struct ExplorerPlugin;

impl Plugin for ExplorerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ActiveWidget::Explorer), mount_explorer)
            .add_systems(OnExit(ActiveWidget::Explorer), unmount_explorer)
            .add_systems(
                Update,
                (
                    handle_resize,
                    handle_formula_interaction,
                    handle_background_click,
                    sync_diagram,
                    sync_formula_buttons,
                )
                    .chain()
                    .run_if(in_state(ActiveWidget::Explorer)),
            );
    }
}

/// The mounted explorer.
#[derive(Resource)]
pub struct ExplorerView {
    pub widget: ExplorerWidget,
    /// Outer canvas, margins included
    pub canvas: CanvasRect,
    pub window: Vec2,
    /// Last interaction seen on each formula button of this mount
    interactions: HashMap<Entity, Interaction>,
}

impl ExplorerView {
    /// A freshly mounted view fitted to `window`.
    pub fn new(widget: ExplorerWidget, window: Vec2) -> Self {
        let mut view = Self {
            widget,
            canvas: CanvasRect::new(0.0, 0.0, 0.0, 0.0),
            window,
            interactions: HashMap::new(),
        };
        view.fit_window(window);
        view
    }

    /// Re-centers the canvas for a window size and re-lays out the diagram.
    fn fit_window(&mut self, window: Vec2) {
        let config = &self.widget.config().canvas;
        self.window = window;
        self.canvas =
            CanvasRect::explorer(window).centered(config.width as f32, config.height as f32);
        self.widget
            .resize(self.canvas.width as f64, self.canvas.height as f64);
    }

    /// Records a button's interaction and returns the previous one.
    fn record_interaction(&mut self, entity: Entity, interaction: Interaction) -> Interaction {
        self.interactions
            .insert(entity, interaction)
            .unwrap_or(Interaction::None)
    }

    /// Number of formula buttons with a recorded interaction.
    pub fn tracked_buttons(&self) -> usize {
        self.interactions.len()
    }

    /// Drawing area inside the margins.
    pub fn diagram_rect(&self) -> CanvasRect {
        self.canvas
            .inset(self.widget.config().canvas.margin as f32)
    }

    /// World position of a diagram-local point.
    pub fn diagram_to_world(&self, x: f64, y: f64) -> Vec2 {
        self.diagram_rect().to_world(x, y, self.window)
    }
}

/// Marker for every top-level entity owned by the explorer.
#[derive(Component)]
pub struct ExplorerEntity;

/// Pieces of the rendered diagram.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramPart {
    Background,
    HFill,
    EFill,
    HStroke,
    EStroke,
    Overlay,
    HLabel,
    ELabel,
}

impl DiagramPart {
    fn z(self) -> f32 {
        match self {
            DiagramPart::Background => 0.0,
            DiagramPart::HFill => 1.0,
            DiagramPart::EFill => 2.0,
            DiagramPart::Overlay => 3.0,
            DiagramPart::HStroke => 4.0,
            DiagramPart::EStroke => 5.0,
            DiagramPart::HLabel | DiagramPart::ELabel => 6.0,
        }
    }
}

/// A formula control rendered as a UI node.
#[derive(Component, Debug, Clone, Copy)]
pub struct FormulaButton(pub FormulaControl);

/// Pointer change on a formula control, in the order they must be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointerChange {
    Leave,
    Enter,
    Click,
}

/// Pointer changes implied by an interaction transition.
///
/// Leaves sort first so moving straight from one control to the next does
/// not clear the new hover.
pub fn pointer_changes(before: Interaction, after: Interaction) -> Vec<PointerChange> {
    match (before, after) {
        (Interaction::None, Interaction::Hovered) => vec![PointerChange::Enter],
        (Interaction::None, Interaction::Pressed) => {
            vec![PointerChange::Enter, PointerChange::Click]
        }
        (Interaction::Hovered, Interaction::Pressed) => vec![PointerChange::Click],
        (Interaction::Hovered | Interaction::Pressed, Interaction::None) => {
            vec![PointerChange::Leave]
        }
        _ => Vec::new(),
    }
}

/// Triangle-fan mesh filling a convex outline.
pub fn fan_mesh(outline: &[Vec2]) -> Mesh {
    let count = outline.len().max(1) as f32;
    let centroid = outline.iter().copied().sum::<Vec2>() / count;

    let mut positions = vec![[centroid.x, centroid.y, 0.0]];
    positions.extend(outline.iter().map(|p| [p.x, p.y, 0.0]));

    let n = outline.len() as u32;
    let mut indices = Vec::with_capacity(outline.len() * 3);
    for i in 0..n {
        indices.extend([0, 1 + i, 1 + (i + 1) % n]);
    }

    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let uvs = vec![[0.0, 0.0]; positions.len()];

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// Stroke ring of `style` around a circle of `radius`.
fn stroke_mesh(radius: f64, style: &CircleStyle) -> Annulus {
    let half = (style.stroke_width / 2.0) as f32;
    let radius = radius as f32;
    Annulus::new((radius - half).max(0.0), radius + half)
}

/// Background fill of an active formula control.
pub fn active_background(accent: Rgb, theme: Theme) -> Color {
    match theme {
        Theme::Light => color(accent, 0.15),
        Theme::Dark => color(accent, 0.4),
    }
}

fn window_size(windows: &Query<&Window, With<PrimaryWindow>>) -> Vec2 {
    windows
        .get_single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(Vec2::new(1000.0, 760.0))
}

/// System to mount the explorer when its state is entered.
fn mount_explorer(
    mut commands: Commands,
    settings: Res<VizSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let config = settings.explorer.clone();
    let view = ExplorerView::new(ExplorerWidget::new(config.clone()), window_size(&windows));
    let unit_circle = meshes.add(Circle::new(1.0));

    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: color(config.canvas.background, 1.0),
                ..default()
            },
            ..default()
        },
        DiagramPart::Background,
        ExplorerEntity,
    ));

    // Geometry and colors are filled in by `sync_diagram`
    for part in [DiagramPart::HFill, DiagramPart::EFill] {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(unit_circle.clone()),
                material: materials.add(ColorMaterial::default()),
                ..default()
            },
            part,
            ExplorerEntity,
        ));
    }
    for part in [DiagramPart::HStroke, DiagramPart::EStroke, DiagramPart::Overlay] {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Mesh::from(Circle::new(1.0)))),
                material: materials.add(ColorMaterial::default()),
                ..default()
            },
            part,
            ExplorerEntity,
        ));
    }
    for (part, text) in [(DiagramPart::HLabel, "H"), (DiagramPart::ELabel, "E")] {
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    text,
                    TextStyle {
                        font_size: config.labels.font_size as f32,
                        ..default()
                    },
                ),
                ..default()
            },
            part,
            ExplorerEntity,
        ));
    }

    spawn_formula(&mut commands, settings.explorer.theme);

    tracing::info!(
        "Mounted Region Explorer on {}x{} canvas",
        view.canvas.width,
        view.canvas.height
    );
    commands.insert_resource(view);
}

fn spawn_formula(commands: &mut Commands, theme: Theme) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    top: Val::Px(0.0),
                    left: Val::Px(0.0),
                    width: Val::Percent(100.0),
                    height: Val::Px(160.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                ..default()
            },
            ExplorerEntity,
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                "Hover or click formula parts to explore:",
                TextStyle {
                    font_size: 14.0,
                    color: muted_text_color(theme),
                    ..default()
                },
            ));

            parent
                .spawn(NodeBundle {
                    style: Style {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(8.0),
                        ..default()
                    },
                    ..default()
                })
                .with_children(|row| {
                    spawn_formula_button(row, FormulaControl::Conditional, theme);
                    row.spawn(TextBundle::from_section(
                        "=",
                        TextStyle {
                            font_size: 24.0,
                            color: text_color(theme),
                            ..default()
                        },
                    ));
                    row.spawn(NodeBundle {
                        style: Style {
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Stretch,
                            ..default()
                        },
                        ..default()
                    })
                    .with_children(|fraction| {
                        spawn_formula_button(fraction, FormulaControl::Numerator, theme);
                        spawn_bridge(fraction, FormulaControl::NumeratorBridge);
                        fraction.spawn(NodeBundle {
                            style: Style {
                                height: Val::Px(1.0),
                                ..default()
                            },
                            background_color: muted_text_color(theme).into(),
                            ..default()
                        });
                        spawn_bridge(fraction, FormulaControl::DenominatorBridge);
                        spawn_formula_button(fraction, FormulaControl::Denominator, theme);
                    });
                });
        });
}

fn spawn_formula_button(parent: &mut ChildBuilder, control: FormulaControl, theme: Theme) {
    parent
        .spawn((
            ButtonBundle {
                style: Style {
                    padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                background_color: Color::NONE.into(),
                ..default()
            },
            FormulaButton(control),
        ))
        .with_children(|button| {
            button.spawn(TextBundle::from_section(
                control.label(),
                TextStyle {
                    font_size: 24.0,
                    color: text_color(theme),
                    ..default()
                },
            ));
        });
}

/// Hover-only strip in the gap around the fraction bar.
fn spawn_bridge(parent: &mut ChildBuilder, control: FormulaControl) {
    parent.spawn((
        NodeBundle {
            style: Style {
                height: Val::Px(8.0),
                ..default()
            },
            ..default()
        },
        Interaction::default(),
        FormulaButton(control),
    ));
}

/// System to unmount the explorer when its state is left.
fn unmount_explorer(mut commands: Commands, entities: Query<Entity, With<ExplorerEntity>>) {
    for entity in &entities {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<ExplorerView>();
    tracing::info!("Unmounted Region Explorer");
}

/// System to re-layout the diagram when the window size changes.
fn handle_resize(mut resized: EventReader<WindowResized>, mut view: ResMut<ExplorerView>) {
    if let Some(event) = resized.read().last() {
        view.fit_window(Vec2::new(event.width, event.height));
    }
}

/// System to forward formula hover and clicks to the widget.
fn handle_formula_interaction(
    controls: Query<(Entity, &Interaction, &FormulaButton), Changed<Interaction>>,
    mut view: ResMut<ExplorerView>,
) {
    let mut changes = Vec::new();
    for (entity, interaction, button) in &controls {
        let before = view.record_interaction(entity, *interaction);
        changes.extend(
            pointer_changes(before, *interaction)
                .into_iter()
                .map(|change| (change, button.0)),
        );
    }
    if changes.is_empty() {
        return;
    }

    changes.sort_by_key(|(change, _)| *change);
    for (change, control) in changes {
        match change {
            PointerChange::Leave => view.widget.control_left(),
            PointerChange::Enter => view.widget.control_entered(control),
            PointerChange::Click => {
                view.widget.control_clicked(control);
            }
        }
    }
    tracing::debug!("Highlighted region: {}", view.widget.effective());
}

/// System to reset the highlight on a click inside the diagram.
fn handle_background_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    controls: Query<&Interaction, With<FormulaButton>>,
    mut view: ResMut<ExplorerView>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    // Clicks on the formula are handled as control clicks
    if controls.iter().any(|i| *i != Interaction::None) {
        return;
    }
    let Some(cursor) = windows.get_single().ok().and_then(|w| w.cursor_position()) else {
        return;
    };
    if view.diagram_rect().local(cursor).is_some() {
        view.widget.background_clicked();
    }
}

/// System to mirror layout and region styles onto the diagram entities.
fn sync_diagram(
    view: Res<ExplorerView>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut shapes: Query<
        (
            &DiagramPart,
            &mut Transform,
            &mut Visibility,
            Option<&mut Mesh2dHandle>,
            Option<&Handle<ColorMaterial>>,
            Option<&mut Sprite>,
            Option<&mut Text>,
        ),
    >,
    mut last: Local<Option<(VennLayout, Region, CanvasRect, Vec2)>>,
) {
    let layout = *view.widget.layout();
    let region = view.widget.effective();
    let key = (layout, region, view.canvas, view.window);
    if *last == Some(key) {
        return;
    }
    *last = Some(key);

    let styles = view.widget.styles();
    let radius = layout.radius;
    let h_center = view.diagram_to_world(layout.h_center.x, layout.h_center.y);
    let e_center = view.diagram_to_world(layout.e_center.x, layout.e_center.y);
    let visible = if layout.is_degenerate() {
        Visibility::Hidden
    } else {
        Visibility::Visible
    };

    for (part, mut transform, mut visibility, mesh, material, sprite, text) in &mut shapes {
        *visibility = visible;
        match part {
            DiagramPart::Background => {
                let rect = view.diagram_rect();
                let center = rect.center_world(view.window);
                *transform = Transform::from_translation(center.extend(part.z()));
                if let Some(mut sprite) = sprite {
                    sprite.custom_size = Some(Vec2::new(rect.width, rect.height));
                }
            }
            DiagramPart::HFill | DiagramPart::EFill => {
                let (center, style) = if *part == DiagramPart::HFill {
                    (h_center, &styles.h)
                } else {
                    (e_center, &styles.e)
                };
                *transform = Transform::from_translation(center.extend(part.z()))
                    .with_scale(Vec3::splat(radius as f32));
                set_color(&mut materials, material, color(style.fill, style.fill_opacity));
            }
            DiagramPart::HStroke | DiagramPart::EStroke => {
                let (center, style) = if *part == DiagramPart::HStroke {
                    (h_center, &styles.h)
                } else {
                    (e_center, &styles.e)
                };
                *transform = Transform::from_translation(center.extend(part.z()));
                if let Some(mut mesh) = mesh {
                    mesh.0 = meshes.add(stroke_mesh(radius, style));
                }
                set_color(&mut materials, material, color(style.stroke, style.stroke_opacity));
            }
            DiagramPart::Overlay => {
                let outline: Vec<Vec2> = view
                    .widget
                    .lens_outline()
                    .iter()
                    .map(|p| view.diagram_to_world(p.x, p.y))
                    .collect();
                *transform = Transform::from_xyz(0.0, 0.0, part.z());
                if let Some(mut mesh) = mesh {
                    mesh.0 = meshes.add(fan_mesh(&outline));
                }
                set_color(
                    &mut materials,
                    material,
                    color(styles.overlay.fill, styles.overlay.opacity),
                );
            }
            DiagramPart::HLabel | DiagramPart::ELabel => {
                let (anchor, stroke) = if *part == DiagramPart::HLabel {
                    (layout.h_label(), styles.h.stroke)
                } else {
                    (layout.e_label(), styles.e.stroke)
                };
                let position = view.diagram_to_world(anchor.x, anchor.y);
                *transform = Transform::from_translation(position.extend(part.z()));
                if let Some(mut text) = text {
                    for section in &mut text.sections {
                        section.style.color = color(stroke, 1.0);
                    }
                }
            }
        }
    }
}

fn set_color(
    materials: &mut Assets<ColorMaterial>,
    handle: Option<&Handle<ColorMaterial>>,
    value: Color,
) {
    if let Some(material) = handle.and_then(|h| materials.get_mut(h)) {
        material.color = value;
    }
}

/// System to tint formula controls that match the highlighted region.
fn sync_formula_buttons(
    view: Res<ExplorerView>,
    settings: Res<VizSettings>,
    mut buttons: Query<(&FormulaButton, &mut BackgroundColor), With<Button>>,
) {
    if !view.is_changed() {
        return;
    }
    for (FormulaButton(control), mut background) in &mut buttons {
        background.0 = if view.widget.is_active(*control) {
            active_background(control.accent(), settings.explorer.theme)
        } else {
            Color::NONE
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_changes() {
        assert_eq!(
            pointer_changes(Interaction::None, Interaction::Hovered),
            vec![PointerChange::Enter]
        );
        assert_eq!(
            pointer_changes(Interaction::Hovered, Interaction::Pressed),
            vec![PointerChange::Click]
        );
        assert_eq!(
            pointer_changes(Interaction::None, Interaction::Pressed),
            vec![PointerChange::Enter, PointerChange::Click]
        );
        // Releasing the button is not a new hover
        assert!(pointer_changes(Interaction::Pressed, Interaction::Hovered).is_empty());
        assert_eq!(
            pointer_changes(Interaction::Pressed, Interaction::None),
            vec![PointerChange::Leave]
        );
    }

    #[test]
    fn test_leave_sorts_before_enter() {
        let mut changes = vec![PointerChange::Enter, PointerChange::Click, PointerChange::Leave];
        changes.sort();
        assert_eq!(
            changes,
            vec![PointerChange::Leave, PointerChange::Enter, PointerChange::Click]
        );
    }

    #[test]
    fn test_fan_mesh_counts() {
        let outline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let mesh = fan_mesh(&outline);
        assert_eq!(mesh.count_vertices(), 5);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(12));
    }

    #[test]
    fn test_stroke_mesh_width() {
        let style = CircleStyle::resting(bayes_model::palette::H_FILL, bayes_model::palette::H_STROKE);
        let ring = stroke_mesh(100.0, &style);
        assert_eq!(ring.inner_circle.radius, 99.0);
        assert_eq!(ring.outer_circle.radius, 101.0);
    }

    #[test]
    fn test_interactions_live_with_the_mount() {
        let window = Vec2::new(1000.0, 760.0);
        let mut view = ExplorerView::new(ExplorerWidget::with_defaults(), window);
        let button = Entity::from_raw(7);

        assert_eq!(view.record_interaction(button, Interaction::Hovered), Interaction::None);
        assert_eq!(view.record_interaction(button, Interaction::Pressed), Interaction::Hovered);
        assert_eq!(view.tracked_buttons(), 1);

        // Unmounting drops the view; the next mount starts clean
        let remounted = ExplorerView::new(ExplorerWidget::with_defaults(), window);
        assert_eq!(remounted.tracked_buttons(), 0);
    }
}
