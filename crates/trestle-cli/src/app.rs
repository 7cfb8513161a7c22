//! Desktop window hosting a [`CanvasView`].
//!
//! [`AppContext`] owns everything the window needs. It is created from the
//! loaded configuration and a diagram, consumed by [`AppContext::run`], and
//! disposed when the window closes.

use eframe::egui::{self, CursorIcon, Sense};
use log::{debug, info, trace};

use trestle::{
    CanvasBuilder, CanvasView, InteractionMode, TrestleError, config::AppConfig,
    diagram::Diagram,
};

use crate::painter::{EguiSurface, to_canvas};

/// Smallest window that still shows the whole demo diagram.
const MIN_INNER_SIZE: [f32; 2] = [800.0, 600.0];

/// Application state for one window session.
#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    view: CanvasView,
}

impl AppContext {
    /// Creates the context, resolving the style from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TrestleError::Config`] if the window size or the style
    /// configuration is invalid.
    pub fn new(
        config: AppConfig,
        diagram: Diagram,
        mode: InteractionMode,
    ) -> Result<Self, TrestleError> {
        let builder = CanvasBuilder::new(config);
        let view = builder.build_view(diagram, mode)?;
        Ok(Self {
            config: builder.config().clone(),
            view,
        })
    }

    pub fn view(&self) -> &CanvasView {
        &self.view
    }

    /// Opens the window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns [`TrestleError::Window`] if the native window or its graphics
    /// context cannot be created.
    pub fn run(self) -> Result<(), TrestleError> {
        let window = self.config.window();
        let title = window.title().to_string();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([window.width(), window.height()])
                .with_min_inner_size(MIN_INNER_SIZE)
                .with_title(title.clone()),
            ..Default::default()
        };

        info!(
            title = title.as_str(),
            mode:? = self.view.mode();
            "Opening canvas window"
        );

        let app = CanvasApp { view: self.view };
        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|err| TrestleError::Window(err.to_string()))?;

        info!("Canvas window closed");
        Ok(())
    }
}

struct CanvasApp {
    view: CanvasView,
}

impl CanvasApp {
    fn handle_pointer(&mut self, ui: &egui::Ui, canvas: egui::Rect) {
        let (pressed, released, moving, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.latest_pos(),
            )
        });

        if let Some(pos) = pos {
            let point = to_canvas(canvas, pos);
            if pressed && canvas.contains(pos) {
                if self.view.pointer_pressed(point) {
                    debug!(node:? = self.view.drag_state().node(); "Drag started");
                }
            } else if moving && self.view.pointer_moved(point) {
                trace!(x = point.x(), y = point.y(); "Node dragged");
            }
        }

        if released {
            self.view.pointer_released();
        }
    }

    fn cursor_icon(&self, ui: &egui::Ui, canvas: egui::Rect) -> Option<CursorIcon> {
        if self.view.mode() == InteractionMode::Static {
            return None;
        }
        if self.view.drag_state().node().is_some() {
            return Some(CursorIcon::Grabbing);
        }
        let pos = ui.input(|i| i.pointer.hover_pos())?;
        self.view
            .diagram()
            .node_at(to_canvas(canvas, pos))
            .map(|_| CursorIcon::Grab)
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let canvas = response.rect;

                self.handle_pointer(ui, canvas);
                if let Some(icon) = self.cursor_icon(ui, canvas) {
                    ctx.set_cursor_icon(icon);
                }

                // egui keeps no shapes between frames, so the canvas is
                // redrawn every update; the flag only schedules the next one.
                let dirty = self.view.needs_repaint();
                let mut surface = EguiSurface::new(&painter, canvas);
                self.view.paint(&mut surface);
                if dirty {
                    ctx.request_repaint();
                }
            });
    }
}
