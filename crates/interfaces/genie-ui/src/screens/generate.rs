use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use genie_app_core::viewmodel::generate_vm;
use genie_app_core::{AppCommand, GenieConsole};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut GenieConsole) {
    let vm = app.store.with_state(generate_vm);
    let mut brief = vm.brief.clone();
    let mut avoid = vm.avoid_topics.clone();
    let mut submit = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new("DEPLOY A NEURAL FUNNEL")
                .size(18.0)
                .strong()
                .color(COL_TEXT),
        );
        tui.label(
            egui::RichText::new("Describe the audience. The agents handle strategy and copy.")
                .size(11.0)
                .color(COL_TEXT_DIM),
        );

        tui.ui(|ui| section_label(ui, "TARGET BRIEF"));
        tui.ui_add(
            egui::TextEdit::multiline(&mut brief)
                .hint_text("e.g. Guide for fitness coaches")
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .interactive(!vm.generating)
                .font(egui::FontId::monospace(12.0)),
        );

        tui.ui(|ui| section_label(ui, "EXISTING CONTENT TO AVOID"));
        tui.ui_add(
            egui::TextEdit::singleline(&mut avoid)
                .hint_text("Topics already covered")
                .desired_width(f32::INFINITY)
                .interactive(!vm.generating)
                .font(egui::FontId::monospace(12.0)),
        );

        submit = tui
            .ui(|ui| cmd_button(ui, vm.submit_label, ButtonKind::Primary, vm.can_submit))
            .clicked();

        if vm.progress.is_some() || vm.log_line.is_some() {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(4.0),
                padding: length(8.0),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .bg_add(
                TuiBackground::new()
                    .with_background_color(COL_BG_DARK)
                    .with_border_color(COL_BORDER)
                    .with_border_width(1.0),
                |tui| {
                    if let Some((ratio, label)) = &vm.progress {
                        tui.ui_add(
                            egui::ProgressBar::new(*ratio)
                                .text(label.as_str())
                                .fill(COL_ACCENT),
                        );
                    }
                    if let Some(line) = &vm.log_line {
                        tui.label(
                            egui::RichText::new(line)
                                .size(11.0)
                                .monospace()
                                .color(if vm.failed { COL_WARN } else { COL_ACCENT }),
                        );
                    }
                },
            );
        }
    });

    if brief != vm.brief {
        app.dispatch(AppCommand::EditBrief(brief));
    }
    if avoid != vm.avoid_topics {
        app.dispatch(AppCommand::EditAvoidTopics(avoid));
    }
    if submit {
        app.dispatch(AppCommand::StartGeneration);
    }
}
