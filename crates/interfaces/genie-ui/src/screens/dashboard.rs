use crate::components::asset_card;
use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use genie_app_core::viewmodel::dashboard_vm;
use genie_app_core::{AppCommand, GenieConsole};
use genie_core::AssetId;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut GenieConsole) {
    let vm = app.store.with_state(dashboard_vm);
    let mut refresh = false;
    let mut open: Option<AssetId> = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(8.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::SpaceBetween),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("VAULT")
                    .size(14.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(
                egui::RichText::new(&vm.count_label)
                    .size(10.0)
                    .color(COL_ACCENT),
            );
            if vm.refreshing {
                tui.ui_add(egui::Spinner::new());
            } else if tui
                .ui(|ui| cmd_button(ui, "REFRESH", ButtonKind::Outline, true))
                .clicked()
            {
                refresh = true;
            }
        });

        if let Some(at) = &vm.last_refreshed {
            tui.label(
                egui::RichText::new(format!("SYNCED: {at}"))
                    .size(9.0)
                    .color(COL_TEXT_DIM),
            );
        }
        tui.separator();

        if vm.empty {
            tui.ui(|ui| section_label(ui, "NO ASSETS YET"));
        }

        for card in &vm.cards {
            if asset_card::draw(&mut *tui, card) {
                open = Some(card.id.clone());
            }
        }
    });

    if refresh {
        app.dispatch(AppCommand::RefreshHistory);
    }
    if let Some(id) = open {
        app.dispatch(AppCommand::OpenPreview(id));
    }
}
