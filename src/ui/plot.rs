use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::data::compare::Comparison;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparison plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current comparison dataset. This is the plotting surface: it
/// only draws what the assembler handed over and owns no comparison policy.
pub fn comparison_plot(ui: &mut Ui, state: &AppState) {
    let Some(comparison) = &state.comparison else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open compound files and pick a property to compare");
        });
        return;
    };

    match comparison {
        Comparison::Scatter(series) => {
            ui.label(&series.title);
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for label in &series.labels {
                    ui.label(label);
                }
            });
            Plot::new("comparison_plot")
                .x_axis_label(&series.x_label)
                .y_axis_label(&series.y_label)
                .show(ui, |plot_ui| {
                    let points: PlotPoints = series
                        .xs
                        .iter()
                        .zip(series.ys.iter())
                        .map(|(&x, &y)| [x, y])
                        .collect();
                    plot_ui.points(Points::new(points).radius(4.0));
                });
        }
        Comparison::Curves(set) => {
            ui.label(&set.title);
            let palette = generate_palette(set.curves.len());
            Plot::new("comparison_plot")
                .legend(Legend::default())
                .x_axis_label(&set.x_label)
                .y_axis_label(&set.y_label)
                .show(ui, |plot_ui| {
                    for (curve, color) in set.curves.iter().zip(palette) {
                        let points: PlotPoints = curve.points.iter().copied().collect();
                        let line = Line::new(points)
                            .name(&curve.name)
                            .color(color)
                            .width(1.5);
                        plot_ui.line(line);
                    }
                });
        }
    }
}
