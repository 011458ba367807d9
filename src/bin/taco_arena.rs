//! Taco Arena - First-Person Taco Toss
//!
//! Run with: `cargo run --bin taco_arena`
//!
//! Controls:
//! - Mouse: Look around (pointer is captured while playing)
//! - WASD: Move
//! - Space: Start game / Jump / Restart after completion
//! - Left click: Throw a taco (or re-capture the pointer when released)
//! - ESC: Exit
//!
//! The binary is the application shell: it owns the window and event
//! loop, feeds raw input into the simulation, ticks the session once per
//! redraw, and hands the resulting frame snapshot to a render driver.

use std::sync::Arc;
use std::time::Instant;

use taco_toss_engine::game::{
    CaptureRequest, ConsoleDriver, GameSession, PhaseChange, RenderDriver, TickInput,
};
use taco_toss_engine::input::{CursorManager, InputState, KeyCode, MouseButton};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

/// Map a winit key code to the engine's generic key code.
fn translate_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::Space => KeyCode::Space,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

/// Map a winit mouse button to the engine's generic button.
fn translate_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(4),
        winit::event::MouseButton::Forward => MouseButton::Other(5),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

struct TacoArenaApp {
    window: Option<Arc<Window>>,
    input: InputState,
    cursor: CursorManager,
    session: GameSession,
    driver: Box<dyn RenderDriver>,
    last_title: String,
}

impl TacoArenaApp {
    fn new() -> Self {
        Self {
            window: None,
            input: InputState::new(),
            cursor: CursorManager::new(),
            session: GameSession::default(),
            driver: Box::new(ConsoleDriver::new()),
            last_title: String::new(),
        }
    }

    /// Push the cursor-manager state onto the window and mirror it into
    /// the input state.
    fn apply_cursor_state(&mut self) {
        if !self.cursor.is_dirty() {
            return;
        }
        if let Some(window) = &self.window {
            if self.cursor.is_captured() {
                if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                    let _ = window.set_cursor_grab(CursorGrabMode::Confined);
                }
                window.set_cursor_visible(false);
            } else {
                let _ = window.set_cursor_grab(CursorGrabMode::None);
                window.set_cursor_visible(true);
            }
        }
        self.input.mouse.set_captured(self.cursor.is_captured());
        self.cursor.clear_dirty();
    }

    /// One simulation tick plus presentation, driven by RedrawRequested.
    fn tick(&mut self) {
        let now = Instant::now();

        let tick_input = TickInput {
            movement: self.input.movement,
            start_pressed: self.input.start_just_pressed(),
            throw_pressed: self.input.throw_just_pressed(),
            look_delta: self.input.mouse.consume_delta(),
            pointer_captured: self.cursor.is_captured(),
        };
        let report = self.session.tick(&tick_input, now);
        self.input.end_frame();

        match report.phase_change {
            Some(PhaseChange::Started) => println!("[TacoArena] Game on, clock running"),
            Some(PhaseChange::Completed) => {
                let total = self.session.elapsed_seconds(now).unwrap_or(0.0);
                println!("[TacoArena] All plates filled in {total:.1}s");
            }
            Some(PhaseChange::Reset) => println!("[TacoArena] Reset, back to the start prompt"),
            None => {}
        }

        match report.capture_request {
            Some(CaptureRequest::Capture) => self.cursor.capture(),
            Some(CaptureRequest::Release) => self.cursor.release(),
            None => {}
        }
        self.apply_cursor_state();

        let frame = self.session.render_frame(now);
        self.driver.present(&frame);

        if frame.status != self.last_title {
            if let Some(window) = &self.window {
                window.set_title(&format!("Taco Arena - {}", frame.status));
            }
            self.last_title = frame.status;
        }
    }
}

impl ApplicationHandler for TacoArenaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Taco Arena - Press SPACE to Start")
                .with_inner_size(PhysicalSize::new(1280, 720));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            self.window = Some(window);
            self.apply_cursor_state();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let key = translate_key(key);
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.input.handle_key(key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;

                // A click while the pointer is free re-captures it and is
                // not a throw
                if pressed
                    && button == winit::event::MouseButton::Left
                    && self.cursor.handle_click_when_released()
                {
                    self.apply_cursor_state();
                    return;
                }
                self.input.handle_mouse_button(translate_button(button), pressed);
            }
            WindowEvent::Resized(new_size) => {
                self.driver.resize(new_size.width, new_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.tick();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.cursor.is_captured() {
                self.input
                    .mouse
                    .accumulate_delta(delta.0 as f32, delta.1 as f32);
            }
        }
    }
}

fn main() {
    println!("===========================================");
    println!("   Taco Arena - First-Person Taco Toss");
    println!("===========================================");
    println!();
    println!("Fill 100 plates as fast as you can!");
    println!();
    println!("Controls: WASD Move, Mouse Look, Space Start/Jump");
    println!("Left Click: Throw Taco, ESC: Exit");
    println!();

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = TacoArenaApp::new();
    event_loop.run_app(&mut app).unwrap();
}
