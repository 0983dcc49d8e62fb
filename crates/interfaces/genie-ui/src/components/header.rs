use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use genie_app_core::viewmodel::HeaderVm;
use genie_app_core::Screen;

pub struct HeaderResponse {
    pub navigate: Option<Screen>,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &HeaderVm, is_busy: bool) -> HeaderResponse {
    let mut navigate = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new("GENIE//OPS")
                    .family(egui::FontFamily::Monospace)
                    .size(12.0)
                    .extra_letter_spacing(2.0)
                    .strong()
                    .color(COL_ACCENT),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                for item in &vm.items {
                    let clicked = tui
                        .ui(|ui| {
                            cmd_button(ui, item.label, ButtonKind::Nav { active: item.active }, true)
                        })
                        .clicked();
                    if clicked && !item.active {
                        navigate = Some(item.screen);
                    }
                }
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if is_busy {
                    tui.ui_add(egui::Spinner::new());
                    tui.label(
                        egui::RichText::new("STATUS: BUSY")
                            .color(COL_WARN)
                            .size(10.0),
                    );
                } else {
                    tui.label(
                        egui::RichText::new("STATUS: IDLE")
                            .color(COL_ACCENT)
                            .size(10.0),
                    );
                }
            });
        },
    );

    HeaderResponse { navigate }
}
