use eframe::egui::{self, Align2, RichText, Window};

pub(crate) struct DoneDialog {
    open: bool,
}

impl DoneDialog {
    pub(crate) fn new() -> DoneDialog {
        DoneDialog { open: false }
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Returns true once the user dismisses the dialog, either with the button or the close box.
    pub(crate) fn show(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }

        let mut acknowledged = false;

        let mut next_open = self.open;

        Window::new("Done")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut next_open)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Time's up!").heading());
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if !next_open {
            acknowledged = true;
        }

        if acknowledged {
            self.open = false;
        }

        acknowledged
    }
}
