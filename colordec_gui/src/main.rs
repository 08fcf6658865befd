use colordec_core::{PresetStore, ViewState};
use eframe::egui;

/// Fixed relative path, created next to wherever the app is launched.
const PRESETS_FILE: &str = "presets.json";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([340.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "RGB + HEX to Decimal",
        options,
        Box::new(|_cc| Ok(Box::new(ConverterApp::new(PRESETS_FILE)))),
    )
}

struct ConverterApp {
    store: PresetStore,
    view: ViewState,

    // UI state
    hex_input: String,
    new_preset_name: String,
    selected_preset: Option<String>,
    last_error: Option<String>,
}

impl ConverterApp {
    fn new(path: &str) -> Self {
        let mut last_error = None;
        let store = match PresetStore::open(path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("could not load presets, starting empty: {e:#}");
                last_error = Some(format!("Presets could not be loaded: {e:#}"));
                PresetStore::empty(path)
            }
        };

        Self {
            store,
            view: ViewState::new(),
            hex_input: String::new(),
            new_preset_name: String::new(),
            selected_preset: None,
            last_error,
        }
    }

    fn error_dialog(title: &str, text: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(text)
            .show();
    }

    fn confirm_delete(name: &str) -> bool {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Confirm deletion")
            .set_description(&format!("Are you sure you want to delete preset '{name}'?"))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
    }

    fn import_hex(&mut self) {
        if let Err(e) = self.view.apply_hex(&self.hex_input) {
            Self::error_dialog(
                "Invalid HEX code",
                &format!("{e}.\nPlease enter a valid HEX code (e.g. #ff9900)."),
            );
        }
    }

    fn apply_preset(&mut self, name: &str) {
        // unknown names (stale selection) are a silent no-op
        if let Some(rgb) = self.store.get(name) {
            self.view.set_rgb(rgb);
        }
    }

    fn save_preset(&mut self) {
        let name = self.new_preset_name.trim();
        if name.is_empty() {
            return;
        }

        match self.store.set(name, self.view.rgb()) {
            Ok(()) => self.new_preset_name.clear(),
            Err(e) => {
                log::error!("save preset '{name}': {e:#}");
                Self::error_dialog("Save failed", &format!("Could not save presets: {e:#}"));
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(name) = self.selected_preset.clone() else {
            return;
        };
        if self.store.get(&name).is_none() {
            return;
        }
        if !Self::confirm_delete(&name) {
            return;
        }

        if let Err(e) = self.store.remove(&name) {
            log::error!("delete preset '{name}': {e:#}");
            Self::error_dialog("Delete failed", &format!("Could not save presets: {e:#}"));
            return;
        }

        self.selected_preset = None;
        self.view = ViewState::new(); // swatch and readout back to black
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("RGB + HEX to Decimal");
                ui.separator();
                ui.label(format!("File: {}", self.store.path().display()));
            });

            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, err);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // preset picker
            ui.horizontal(|ui| {
                ui.label("Preset:");
                let mut selected = self.selected_preset.clone();
                egui::ComboBox::from_id_source("preset_select")
                    .selected_text(selected.as_deref().unwrap_or("(none)"))
                    .show_ui(ui, |ui| {
                        for name in self.store.names() {
                            ui.selectable_value(&mut selected, Some(name.clone()), name);
                        }
                    });
                if selected != self.selected_preset {
                    self.selected_preset = selected;
                    if let Some(name) = self.selected_preset.clone() {
                        self.apply_preset(&name);
                    }
                }

                if ui.button("Delete").clicked() {
                    self.delete_selected();
                }
            });

            ui.separator();

            // channel sliders
            ui.add(egui::Slider::new(&mut self.view.red, 0..=255).text("red"));
            ui.add(egui::Slider::new(&mut self.view.green, 0..=255).text("green"));
            ui.add(egui::Slider::new(&mut self.view.blue, 0..=255).text("blue"));

            ui.separator();

            // preview swatch
            let [r, g, b] = self.view.rgb();
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 48.0),
                egui::Sense::hover(),
            );
            ui.painter()
                .rect_filled(rect, 4.0, egui::Color32::from_rgb(r, g, b));
            ui.label(self.view.hex_string());

            // decimal readout
            ui.monospace(self.view.output_text());

            if ui.button("Copy values").clicked() {
                ui.ctx().copy_text(self.view.output_text().trim().to_string());
            }

            ui.separator();

            // hex import
            ui.horizontal(|ui| {
                ui.label("HEX (#rrggbb):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.hex_input)
                        .hint_text("#ff9900")
                        .desired_width(90.0),
                );
                if ui.button("Import").clicked() {
                    self.import_hex();
                }
            });

            // save as preset
            ui.horizontal(|ui| {
                ui.label("Preset name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.new_preset_name).desired_width(90.0),
                );
                if ui.button("Save").clicked() {
                    self.save_preset();
                }
            });
        });
    }
}
