use std::cell::RefCell;
use std::fs::{self, File};
use std::rc::Rc;

use log::{debug, info};
use scrollbox::{AxisMode, Child, ChildHandle, ScrollBox, ScrollBoxOptions};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuiwin::text::{display_width, expand_tabs};
use tuiwin::{Color, Event, EventTranslator, Key, Pen, Rect, Terminal, WindowId, WindowTree};

/// A block of text, drawn once into a window as large as the text.
struct TextPane {
    lines: Vec<String>,
    window: Option<WindowId>,
    dirty: bool,
}

impl TextPane {
    fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| expand_tabs(line, 8)).collect(),
            window: None,
            dirty: true,
        }
    }

    fn paint(&mut self, tree: &mut WindowTree) {
        let Some(window) = self.window else {
            return;
        };
        if !self.dirty {
            return;
        }
        tree.clear(window);
        for (line, text) in self.lines.iter().enumerate() {
            tree.draw_text(window, line as i32, 0, text, &Pen::new());
        }
        self.dirty = false;
    }
}

impl Child for TextPane {
    fn declared_lines(&self) -> i32 {
        self.lines.len() as i32
    }

    fn declared_cols(&self) -> i32 {
        self.lines
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0) as i32
    }

    fn assign_window(&mut self, window: Option<WindowId>) {
        self.window = window;
        self.dirty = true;
    }
}

fn sample_text() -> String {
    (1..=500)
        .map(|n| format!("{n:>4}  {}", "the quick brown fox jumps over the lazy dog ".repeat(n % 7 + 1)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn status(tree: &mut WindowTree, window: WindowId, scroll_box: &ScrollBox<WindowTree>) {
    let Some(rect) = tree.geometry(window) else {
        return;
    };
    let top = scroll_box.vertical_extent().map_or(0, |e| e.start());
    let left = scroll_box.horizontal_extent().map_or(0, |e| e.start());
    let text = format!(" line {top}, column {left}   q: quit");
    let pen = Pen::new().fg(Color::BLACK.to_rgb()).bg(Color::CYAN.to_rgb());
    tree.fill_cells(window, 0, 0, rect.cols, &pen);
    tree.draw_text(window, 0, 0, &text, &pen);
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("pager.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let text = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => sample_text(),
    };

    let mut term = Terminal::new()?;
    let (lines, cols) = term.size()?;

    let tree = Rc::new(RefCell::new(WindowTree::new(lines, cols)));
    let root = tree.borrow().root();
    let body = tree
        .borrow_mut()
        .make_sub(root, Rect::new(0, 0, lines - 1, cols))
        .expect("root window is open");
    let footer = tree
        .borrow_mut()
        .make_sub(root, Rect::new(lines - 1, 0, 1, cols))
        .expect("root window is open");

    let options = ScrollBoxOptions::new()
        .vertical(AxisMode::OnDemand)
        .horizontal(AxisMode::OnDemand);
    let scroll_box = ScrollBox::new(Rc::clone(&tree), options);
    let pane = Rc::new(RefCell::new(TextPane::new(&text)));
    scroll_box.set_window(Some(body));
    scroll_box.set_child(Some(ChildHandle::framed(Rc::clone(&pane))));
    info!(
        "pager started with {} lines in a {}x{} screen",
        pane.borrow().lines.len(),
        lines,
        cols
    );

    let mut translator = EventTranslator::new();
    loop {
        {
            let mut tree = tree.borrow_mut();
            if !tree.take_exposed().is_empty() {
                pane.borrow_mut().paint(&mut tree);
                status(&mut tree, footer, &scroll_box);
            }
        }
        scroll_box.render();
        term.present(&tree.borrow())?;

        for raw in term.poll(None)? {
            for event in translator.translate(&raw) {
                match event {
                    Event::Key {
                        key: Key::Char('q') | Key::Escape,
                        ..
                    } => return Ok(()),
                    Event::Resize { lines, cols } => {
                        debug!("terminal resized to {}x{}", lines, cols);
                        {
                            let mut tree = tree.borrow_mut();
                            tree.resize_root(lines, cols);
                            tree.change_geometry(body, Rect::new(0, 0, lines - 1, cols));
                            tree.change_geometry(footer, Rect::new(lines - 1, 0, 1, cols));
                        }
                        scroll_box.reshape();
                    }
                    event => {
                        let origin = tree.borrow().absolute_geometry(body);
                        if let Some(origin) = origin {
                            scroll_box.handle_event(&event.relative_to(origin.top, origin.left));
                        }
                    }
                }
            }
        }
    }
}
