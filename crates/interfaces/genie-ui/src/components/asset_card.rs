use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use genie_app_core::viewmodel::AssetCardVm;

/// One vault entry. Returns `true` when its preview was requested.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, card: &AssetCardVm) -> bool {
    let mut open_clicked = false;

    tui.id(egui_taffy::tid(("asset", card.id.as_str())))
        .style(taffy::Style {
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
                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    justify_content: Some(taffy::JustifyContent::SpaceBetween),
                    align_items: Some(taffy::AlignItems::Center),
                    size: taffy::Size {
                        width: percent(1.),
                        height: auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    tui.label(
                        egui::RichText::new(&card.category)
                            .size(9.0)
                            .color(COL_ACCENT)
                            .strong(),
                    );
                    tui.label(
                        egui::RichText::new(&card.created)
                            .size(9.0)
                            .color(COL_TEXT_DIM),
                    );
                });

                tui.ui_add(
                    egui::ProgressBar::new(card.confidence)
                        .desired_height(4.0)
                        .fill(COL_ACCENT),
                );
                tui.label(
                    egui::RichText::new(&card.confidence_label)
                        .size(9.0)
                        .color(COL_TEXT_DIM),
                );

                tui.label(
                    egui::RichText::new(&card.title)
                        .size(13.0)
                        .strong()
                        .color(COL_TEXT),
                );
                if !card.value_promise.is_empty() {
                    tui.label(
                        egui::RichText::new(&card.value_promise)
                            .size(11.0)
                            .color(COL_TEXT_DIM),
                    );
                }
                if let Some(post) = &card.promo_post {
                    tui.separator();
                    tui.label(
                        egui::RichText::new(post)
                            .size(10.0)
                            .italics()
                            .color(COL_TEXT_DIM),
                    );
                }
                if let Some(url) = &card.promo_image {
                    tui.ui_add(egui::Hyperlink::from_label_and_url(
                        egui::RichText::new("PROMO IMAGE").size(9.0).color(COL_ACCENT),
                        url,
                    ));
                }

                open_clicked = tui
                    .ui(|ui| cmd_button(ui, "OPEN PREVIEW", ButtonKind::Outline, true))
                    .clicked();
            },
        );

    open_clicked
}
