// src/gui/notices.rs
//
// Non-blocking, dismissible messages. Every error caught at the shell
// boundary lands here instead of propagating out of the event loop.

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

pub fn draw(ctx: &egui::Context, notices: &mut Vec<Notice>) {
    if notices.is_empty() {
        return;
    }

    egui::Window::new("notices")
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let mut dismiss: Option<usize> = None;
            for (i, notice) in notices.iter().enumerate() {
                ui.horizontal(|ui| {
                    let color = match notice.kind {
                        NoticeKind::Error => egui::Color32::from_rgb(220, 60, 60),
                        NoticeKind::Info => ui.visuals().text_color(),
                    };
                    ui.colored_label(color, &notice.text);
                    if ui.small_button("✕").clicked() {
                        dismiss = Some(i);
                    }
                });
            }
            if let Some(i) = dismiss {
                notices.remove(i);
            }
        });
}
