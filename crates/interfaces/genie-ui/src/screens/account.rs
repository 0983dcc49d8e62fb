use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(6.0),
        size: percent(1.),
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "ACCESS"));
        tui.label(
            egui::RichText::new("Single-operator console. No sign-in required.")
                .size(12.0)
                .color(COL_TEXT),
        );
        tui.label(
            egui::RichText::new("Session is bound to this workstation.")
                .size(10.0)
                .color(COL_TEXT_DIM),
        );
    });
}
