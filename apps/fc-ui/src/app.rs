use crate::chart;
use fc_app::{load_profile, DEFAULT_LOG_NAME};
use fc_log::ResidualProfile;
use std::path::Path;

pub struct FoamcheckApp {
    log_path: String,
    profile: Option<ResidualProfile>,
    error: Option<String>,
}

impl FoamcheckApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            log_path: DEFAULT_LOG_NAME.to_string(),
            profile: None,
            error: None,
        };
        app.reload();
        app
    }

    fn reload(&mut self) {
        match load_profile(Path::new(&self.log_path)) {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(e) => {
                self.profile = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for FoamcheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Log file:");
                ui.text_edit_singleline(&mut self.log_path);
                if ui.button("Reload").clicked() {
                    self.reload();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
                return;
            }
            match &self.profile {
                Some(profile) if !profile.is_empty() => chart::show(ui, profile),
                Some(_) => {
                    ui.label("No residual reports found in this log");
                }
                None => {
                    ui.label("Load a solver log to plot residuals");
                }
            }
        });
    }
}
