mod config;
mod error;
mod geometry;
mod graphics;
mod input;
mod surface;
mod table;
mod widget;

use winit::{
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::{AppConfig, COLOR_RAYWHITE};
use crate::error::AppError;
use crate::geometry::Rect;
use crate::graphics::GraphicsContext;
use crate::input::InputHandler;
use crate::table::Table;
use crate::widget::Widget;

fn main() -> Result<(), AppError> {
    env_logger::init();

    let app_config = AppConfig::load()?;
    log::info!(
        "Starting {}x{} table ({} rows, {} cols)",
        app_config.width,
        app_config.height,
        app_config.rows,
        app_config.cols
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&app_config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(
            app_config.width,
            app_config.height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut graphics = GraphicsContext::new(&window, app_config.width, app_config.height)?;

    let bounds = Rect::new(0.0, 0.0, app_config.width as f32, app_config.height as f32);
    let mut table = Table::new(bounds, app_config.rows, app_config.cols, app_config.theme);
    let mut input_handler = InputHandler::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize_surface(size.width, size.height);
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed
                        && input.virtual_keycode == Some(VirtualKeyCode::Escape)
                    {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    input_handler.handle_keyboard_input(&input);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let pressed = input_handler.take();
                table.update(&pressed);
                if pressed.any() {
                    log::debug!("Selection moved to {:?}", table.selection());
                }

                graphics.clear(COLOR_RAYWHITE);
                table.render(&mut graphics.frame_surface());

                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
