use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

const FEATURES: [&str; 4] = [
    "Unlimited neural funnels",
    "Strategist + Engineer agent pipeline",
    "Hosted previews for every asset",
    "Full vault history",
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        size: percent(1.),
        align_items: Some(taffy::AlignItems::Center),
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "OFFER"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(6.0),
            padding: length(16.0),
            size: taffy::Size {
                width: length(360.0),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG_DARK)
                .with_border_color(COL_ACCENT)
                .with_border_width(1.0),
            |tui| {
                tui.label(
                    egui::RichText::new("OPERATOR LICENSE")
                        .size(14.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new("$97 / month")
                        .size(20.0)
                        .strong()
                        .color(COL_ACCENT),
                );
                for feature in FEATURES {
                    tui.label(
                        egui::RichText::new(format!("+ {feature}"))
                            .size(11.0)
                            .color(COL_TEXT_DIM),
                    );
                }
            },
        );
    });
}
