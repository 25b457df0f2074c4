//! Integration tests for the visualization layer.

use bayes_model::{Region, Theme};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use region_explorer::{ExplorerWidget, FormulaControl};
use viz::camera::{page_background, CameraPlugin};
use viz::canvas::CanvasRect;
use viz::explorer::{pointer_changes, PointerChange};
use viz::{ActiveWidget, VizSettings};
use world_sampler::{PointerPosition, SamplerConfig, SamplerWidget};

/// Replays interaction transitions the way the explorer host does.
fn replay(widget: &mut ExplorerWidget, transitions: &[(FormulaControl, Interaction, Interaction)]) {
    let mut changes: Vec<(PointerChange, FormulaControl)> = transitions
        .iter()
        .flat_map(|(control, before, after)| {
            pointer_changes(*before, *after)
                .into_iter()
                .map(move |change| (change, *control))
        })
        .collect();
    changes.sort_by_key(|(change, _)| *change);
    for (change, control) in changes {
        match change {
            PointerChange::Leave => widget.control_left(),
            PointerChange::Enter => widget.control_entered(control),
            PointerChange::Click => {
                widget.control_clicked(control);
            }
        }
    }
}

/// Moving from the numerator to its bridge in one frame keeps the highlight.
#[test]
fn test_same_frame_leave_and_enter() {
    let mut widget = ExplorerWidget::with_defaults();
    replay(
        &mut widget,
        &[(FormulaControl::Numerator, Interaction::None, Interaction::Hovered)],
    );
    // The enter is listed first, the leave is still applied first
    replay(
        &mut widget,
        &[
            (FormulaControl::NumeratorBridge, Interaction::None, Interaction::Hovered),
            (FormulaControl::Numerator, Interaction::Hovered, Interaction::None),
        ],
    );
    assert_eq!(widget.effective(), Region::Intersection);
}

/// Press then release on a control locks once and does not re-hover.
#[test]
fn test_click_release_cycle() {
    let mut widget = ExplorerWidget::with_defaults();
    let control = FormulaControl::Denominator;

    replay(&mut widget, &[(control, Interaction::None, Interaction::Hovered)]);
    replay(&mut widget, &[(control, Interaction::Hovered, Interaction::Pressed)]);
    replay(&mut widget, &[(control, Interaction::Pressed, Interaction::Hovered)]);
    assert_eq!(widget.state().locked(), Region::Evidence);

    // Second click unlocks; the release does not bring the hover back
    replay(&mut widget, &[(control, Interaction::Hovered, Interaction::Pressed)]);
    replay(&mut widget, &[(control, Interaction::Pressed, Interaction::Hovered)]);
    assert_eq!(widget.effective(), Region::None);
}

/// Cursor positions map onto the sampler canvas for hit testing.
#[test]
fn test_sampler_hover_through_canvas() {
    let window = Vec2::new(1000.0, 760.0);
    let canvas = CanvasRect::sampler(window);

    let config = SamplerConfig {
        seed: Some(8),
        ..SamplerConfig::default()
    };
    let mut widget = SamplerWidget::from_config(config);
    widget.set_viewport(window.x as f64, window.y as f64);
    widget.resize(canvas.width as f64, canvas.height as f64);

    let target = widget.points()[0];
    let cursor = Vec2::new(canvas.left + target.x as f32, canvas.top + target.y as f32);
    let local = canvas.local(cursor).unwrap();
    widget.pointer_moved(PointerPosition {
        canvas_x: local.x as f64,
        canvas_y: local.y as f64,
        page_x: cursor.x as f64,
        page_y: cursor.y as f64,
    });

    assert_eq!(widget.hovered_point().map(|p| p.id), Some(target.id));
    let tooltip = widget.tooltip().unwrap();
    assert!(tooltip.left >= 0.0 && tooltip.left <= window.x as f64);
    assert!(tooltip.top >= 0.0 && tooltip.top <= window.y as f64);

    // Unmount releases the tooltip
    assert!(widget.teardown());
    assert!(widget.tooltip().is_none());
}

/// Settings default to the sampler in light mode.
#[test]
fn test_default_settings() {
    let settings = VizSettings::default();
    assert_eq!(settings.start, ActiveWidget::Sampler);
    assert_eq!(settings.theme_for(settings.start), Theme::Light);
}

/// A dark explorer config paints the page dark without the global flag.
#[test]
fn test_explorer_theme_sets_page_background() {
    let mut settings = VizSettings {
        start: ActiveWidget::Explorer,
        ..VizSettings::default()
    };
    settings.explorer.theme = Theme::Dark;

    let mut app = App::new();
    app.add_plugins(StatesPlugin)
        .insert_resource(settings)
        .insert_state(ActiveWidget::Explorer)
        .add_plugins(CameraPlugin);
    app.update();

    let clear = app.world().resource::<ClearColor>();
    assert_eq!(clear.0, page_background(Theme::Dark));
}
