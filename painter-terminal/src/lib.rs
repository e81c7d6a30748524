/// Terminal host for the painter pipeline
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use painter_core::{Canvas, FrameDriver, HostEvent, RenderHost, Result, Rgb};
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::HalfBlockRenderer;

/// Terminal host settings
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalConfig {
    /// Logical resolution reported to the pipeline, scaled onto the cells
    pub logical_width: u32,
    pub logical_height: u32,
    /// Overlay an FPS line on the first row
    pub show_status: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            logical_width: 640,
            logical_height: 480,
            show_status: true,
        }
    }
}

/// Maps a logical coordinate onto a grid of `cells` pixels
fn scale(value: i32, cells: usize, logical: u32) -> i32 {
    if logical == 0 {
        return 0;
    }
    let scaled = (value as i64 * cells as i64).div_euclid(logical as i64);
    scaled.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Map a key or resize event to a host event
fn translate_event(event: Event, config: &TerminalConfig) -> Option<HostEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(HostEvent::Quit),
            // Raw mode swallows SIGINT.
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(HostEvent::Quit)
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(HostEvent::Resized {
            width: config.logical_width,
            height: config.logical_height,
        }),
        _ => None,
    }
}

/// `RenderHost` backed by crossterm
pub struct TerminalHost {
    config: TerminalConfig,
    renderer: HalfBlockRenderer,
    stdout: Stdout,
    started: Instant,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalHost {
    pub fn new(config: TerminalConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let now = Instant::now();

        Ok(Self {
            config,
            renderer: HalfBlockRenderer::new(columns as usize, rows as usize),
            stdout: stdout(),
            started: now,
            last_fps_sample: now,
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// Take over the terminal, run `driver` until quit, then restore it.
    ///
    /// Returns the number of frames rendered.
    pub fn run(&mut self, driver: &mut FrameDriver) -> Result<u64> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        log::debug!(
            "terminal host started at {}x{} cells",
            self.renderer.columns(),
            self.renderer.rows()
        );

        let result = driver.run(self);

        // Cleanup
        let restored = terminal::disable_raw_mode()
            .and_then(|_| execute!(self.stdout, terminal::LeaveAlternateScreen, cursor::Show));

        let frames = result?;
        restored?;
        Ok(frames)
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_fps_sample).as_secs() >= 1 {
            self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
            self.frame_count = 0;
            self.last_fps_sample = now;
        }
    }
}

impl Canvas for TerminalHost {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        let columns = self.renderer.columns();
        let pixel_rows = self.renderer.rows() * 2;
        let (lw, lh) = (self.config.logical_width, self.config.logical_height);

        self.renderer.framebuffer_mut().draw_line(
            scale(x1, columns, lw),
            scale(y1, pixel_rows, lh),
            scale(x2, columns, lw),
            scale(y2, pixel_rows, lh),
            color,
        );
    }

    fn clear(&mut self, color: Rgb) {
        self.renderer.framebuffer_mut().clear(color);
    }
}

impl RenderHost for TerminalHost {
    fn present(&mut self) -> Result<()> {
        self.update_fps();

        queue!(self.stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut self.stdout)?;

        if self.config.show_status {
            queue!(
                self.stdout,
                cursor::MoveTo(0, 0),
                SetForegroundColor(Color::Yellow),
                SetBackgroundColor(Color::Reset),
                Print(format!("painter3d | FPS: {:.1} | Q=Quit", self.fps)),
                ResetColor
            )?;
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn window_size(&self) -> (u32, u32) {
        (self.config.logical_width, self.config.logical_height)
    }

    fn poll_event(&mut self) -> Result<Option<HostEvent>> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Event::Resize(columns, rows) = event {
                self.renderer.resize(columns as usize, rows as usize);
            }
            if let Some(host_event) = translate_event(event, &self.config) {
                return Ok(Some(host_event));
            }
        }
        Ok(None)
    }

    fn elapsed_millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
