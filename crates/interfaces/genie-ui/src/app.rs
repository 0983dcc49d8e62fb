use crate::components::header;
use crate::screens::{account, dashboard, generate, pricing};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use genie_app_core::{viewmodel, AppCommand, GenieConsole, Screen};

pub struct GenieUiApp {
    core: GenieConsole,
}

impl GenieUiApp {
    pub fn new(core: GenieConsole) -> Self {
        Self { core }
    }
}

impl eframe::App for GenieUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.tick();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            // Width-independent text measurement for the taffy layout passes.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let (header_vm, screen) = self
            .core
            .store
            .with_state(|s| (viewmodel::header_vm(s), s.screen));
        let busy = self.core.is_generating();

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(32.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = header::draw(tui, &header_vm, busy);
                        if let Some(screen) = resp.navigate {
                            self.core.dispatch(AppCommand::Navigate(screen));
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(16.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| match screen {
                        Screen::Generate => generate::draw(tui, &mut self.core),
                        Screen::Dashboard => dashboard::draw(tui, &mut self.core),
                        Screen::Pricing => pricing::draw(tui),
                        Screen::Account => account::draw(tui),
                    });
                });
        });

        // Remote work reports through the kernel channel; keep polling while
        // anything is in flight.
        let refreshing = self.core.store.with_state(|s| s.history.is_refreshing());
        if busy || refreshing {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
