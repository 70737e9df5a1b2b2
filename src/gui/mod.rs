mod done_dialog;

use done_dialog::DoneDialog;

use crate::{
    alarm::Alarm,
    app::{App, AppEvent},
};

use anyhow::Result;
use eframe::egui::{self, RichText, TextEdit};
use log::error;

use std::time::Instant;

enum ControlAction {
    Toggle,
    Reset,
    None,
}

pub struct Gui {
    app: App,
    alarm: Box<dyn Alarm>,
    done_dialog: DoneDialog,
}

impl Gui {
    const FIELD_WIDTH: f32 = 40.0;
    const REMAINING_FONT_SIZE: f32 = 28.0;

    pub fn new(app: App, alarm: Box<dyn Alarm>) -> Gui {
        Gui {
            app,
            alarm,
            done_dialog: DoneDialog::new(),
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Finished => self.done_dialog.set_open(true),
            AppEvent::RingAlarm => self.alarm.ring(),
        }
    }

    fn render(&mut self, ctx: &egui::Context) -> Result<()> {
        for event in self.app.poll(Instant::now()) {
            self.handle_event(event);
        }

        if self.done_dialog.show(ctx) {
            self.app.acknowledge();
            self.alarm.silence();
        }

        // Everything behind the done dialog is frozen until it is dismissed
        let controls_enabled = !self.app.done_dialog_open();

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(controls_enabled, |ui| render_controls(ui, &mut self.app))
                    .inner
            })
            .inner;

        match action {
            ControlAction::Toggle => self.app.toggle(Instant::now())?,
            ControlAction::Reset => self.app.reset(),
            ControlAction::None => (),
        }

        if let Some(wakeup) = self.app.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wakeup);
        }

        Ok(())
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(e) = self.render(ctx) {
            error!("{:?}", e);
        }
    }
}

fn render_controls(ui: &mut egui::Ui, app: &mut App) -> ControlAction {
    let mut action = ControlAction::None;
    let inputs_enabled = app.inputs_enabled();

    ui.horizontal(|ui| {
        let fields = app.fields_mut();
        render_time_field(ui, inputs_enabled, &mut fields.hours, "HH");
        ui.label(":");
        render_time_field(ui, inputs_enabled, &mut fields.minutes, "MM");
        ui.label(":");
        render_time_field(ui, inputs_enabled, &mut fields.seconds, "SS");
    });

    ui.horizontal(|ui| {
        if ui.button(app.start_button_label()).clicked() {
            action = ControlAction::Toggle;
        }

        if ui.button("Reset").clicked() {
            action = ControlAction::Reset;
        }
    });

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(app.remaining_label())
                .monospace()
                .size(Gui::REMAINING_FONT_SIZE),
        );
    });

    action
}

// Clippy wants this to be a reference but egui needs to be able to change the length of the
// string
#[allow(clippy::ptr_arg)]
fn render_time_field(ui: &mut egui::Ui, enabled: bool, text: &mut String, hint: &str) {
    ui.add_enabled(
        enabled,
        TextEdit::singleline(text)
            .desired_width(Gui::FIELD_WIDTH)
            .hint_text(hint),
    );
}
