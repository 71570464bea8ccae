//! Log-scale residual chart.

use egui_plot::{Legend, Line, Plot, PlotPoints};
use fc_log::ResidualProfile;

/// One line per tracked variable against time. egui_plot has no native log
/// axis, so points carry log10(residual) and the axis labels show decades.
pub fn show(ui: &mut egui::Ui, profile: &ResidualProfile) {
    let series: [(&str, &Vec<f64>); 3] = [
        ("p_rgh", &profile.p_rgh),
        ("omega", &profile.omega),
        ("k", &profile.k),
    ];

    let mut lines = Vec::new();
    for (name, values) in series {
        let points: Vec<[f64; 2]> = profile
            .time
            .iter()
            .zip(values)
            .filter(|(_, r)| **r > 0.0)
            .map(|(t, r)| [*t, r.log10()])
            .collect();
        if !points.is_empty() {
            let plot_points: PlotPoints = points.into();
            lines.push(Line::new(plot_points).name(name));
        }
    }

    ui.heading("Residue profile");
    Plot::new("residual_plot")
        .legend(Legend::default())
        .x_axis_label("Time")
        .y_axis_label("Final residual")
        .y_axis_formatter(|mark, _range| format!("1e{:.0}", mark.value))
        .show(ui, |plot_ui| {
            for line in lines {
                plot_ui.line(line);
            }
        });
}
