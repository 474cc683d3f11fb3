// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! On-screen character-picker string editor.
//!
//! The user cycles the character under the cursor with Up/Down, moves the
//! cursor with Left/Right and confirms with A or B. [`EditSession`] holds the
//! pure state machine; [`StringEditor`] drives it from the input reader and
//! renders each step.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::button::{Button, ButtonPort};
use crate::config::{CharRange, BUTTON_POLL_MS, EDIT_SETTLE_MS, MAX_EDIT_LEN};
use crate::input::InputReader;

/// Fixed-capacity character buffer with an explicit length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBuffer {
    chars: Vec<u8, MAX_EDIT_LEN>,
}

impl EditBuffer {
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Copy `bytes`, truncated to [`MAX_EDIT_LEN`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut chars = Vec::new();
        let n = bytes.len().min(MAX_EDIT_LEN);
        // Cannot fail: n is within capacity.
        let _ = chars.extend_from_slice(&bytes[..n]);
        Self { chars }
    }

    /// `len` spaces, truncated to [`MAX_EDIT_LEN`].
    pub fn blank(len: usize) -> Self {
        let mut chars = Vec::new();
        let _ = chars.resize(len.min(MAX_EDIT_LEN), b' ');
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// The contents as text, or `None` if they are not UTF-8 (never true once
    /// a session has normalized them).
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.chars).ok()
    }

    /// Write the contents into the front of `out`; returns the bytes written.
    pub fn copy_to(&self, out: &mut [u8]) -> usize {
        let n = self.chars.len().min(out.len());
        out[..n].copy_from_slice(&self.chars[..n]);
        n
    }
}

/// What the editor loop does after a button was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditAction {
    /// Character changed; wait [`EDIT_SETTLE_MS`] before polling again.
    Settle,
    /// Cursor handled; wait for the button to be released.
    AwaitRelease(Button),
    /// Session over; wait for release, then hand the buffer back.
    Finish(Button),
}

/// Cursor plus buffer contents of one edit session.
#[derive(Debug, Clone)]
pub struct EditSession {
    text: EditBuffer,
    cursor: usize,
    charset: CharRange,
}

impl EditSession {
    /// Start at cursor 0 with every out-of-range byte replaced by a blank.
    pub fn new(text: &EditBuffer, charset: CharRange) -> Self {
        let mut text = text.clone();
        for c in text.chars.iter_mut() {
            *c = charset.normalize(*c);
        }
        Self {
            text,
            cursor: 0,
            charset,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> &EditBuffer {
        &self.text
    }

    pub fn charset(&self) -> CharRange {
        self.charset
    }

    /// Character under the cursor (blank for an empty buffer).
    pub fn current(&self) -> u8 {
        self.text
            .chars
            .get(self.cursor)
            .copied()
            .unwrap_or_else(|| self.charset.blank())
    }

    pub fn into_text(self) -> EditBuffer {
        self.text
    }

    /// Apply one button press.
    pub fn press(&mut self, button: Button) -> EditAction {
        match button {
            Button::A | Button::B => EditAction::Finish(button),
            Button::Up => {
                self.replace_current(self.charset.next(self.current()));
                EditAction::Settle
            }
            Button::Down => {
                self.replace_current(self.charset.prev(self.current()));
                EditAction::Settle
            }
            Button::Right => {
                // Refuse to walk past a space.
                if self.current() != b' ' && self.cursor + 1 < self.text.len() {
                    self.cursor += 1;
                }
                EditAction::AwaitRelease(button)
            }
            Button::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EditAction::AwaitRelease(button)
            }
        }
    }

    fn replace_current(&mut self, c: u8) {
        if let Some(slot) = self.text.chars.get_mut(self.cursor) {
            *slot = c;
        }
    }
}

/// Blocking modal editor drawn at a fixed origin.
pub struct StringEditor<'a> {
    origin: Point,
    font: &'a MonoFont<'a>,
    charset: CharRange,
}

impl<'a> StringEditor<'a> {
    /// Editor with the top-left of the edit line at `origin`.
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            font: &FONT_6X10,
            charset: CharRange::default(),
        }
    }

    pub fn with_font(mut self, font: &'a MonoFont<'a>) -> Self {
        self.font = font;
        self
    }

    pub fn with_charset(mut self, charset: CharRange) -> Self {
        self.charset = charset;
        self
    }

    /// Run a session over `text` until A or B is pressed.
    ///
    /// Returns the button that ended the session. An empty buffer returns
    /// [`Button::A`] at once.
    pub fn edit<P, D, T>(
        &self,
        input: &mut InputReader<P, D>,
        display: &mut T,
        text: &mut EditBuffer,
        show_preview: bool,
    ) -> Button
    where
        P: ButtonPort,
        D: DelayNs,
        T: DrawTarget<Color = Rgb565>,
    {
        if text.is_empty() {
            return Button::A;
        }

        let mut session = EditSession::new(text, self.charset);
        let finished_by = loop {
            self.render(display, &session, show_preview);
            if let Some(button) = Self::await_press(input, &mut session) {
                break button;
            }
        };

        *text = session.into_text();
        finished_by
    }

    /// Edit the first `min(bytes.len(), MAX_EDIT_LEN)` bytes in place.
    pub fn edit_bytes<P, D, T>(
        &self,
        input: &mut InputReader<P, D>,
        display: &mut T,
        bytes: &mut [u8],
        show_preview: bool,
    ) -> Button
    where
        P: ButtonPort,
        D: DelayNs,
        T: DrawTarget<Color = Rgb565>,
    {
        let mut text = EditBuffer::from_bytes(bytes);
        let finished_by = self.edit(input, display, &mut text, show_preview);
        text.copy_to(bytes);
        finished_by
    }

    /// Poll until a button changes the session; `Some` once it is finished.
    fn await_press<P, D>(input: &mut InputReader<P, D>, session: &mut EditSession) -> Option<Button>
    where
        P: ButtonPort,
        D: DelayNs,
    {
        loop {
            let action = input.read_button(false).button().map(|b| session.press(b));
            match action {
                Some(EditAction::Settle) => input.pause_ms(EDIT_SETTLE_MS),
                Some(EditAction::AwaitRelease(button) | EditAction::Finish(button)) => {
                    input.wait_release(button)
                }
                None => {}
            }
            input.pause_ms(BUTTON_POLL_MS);

            match action {
                Some(EditAction::Finish(button)) => return Some(button),
                Some(_) => return None,
                None => {}
            }
        }
    }

    fn cell_size(&self) -> (i32, i32) {
        let size = self.font.character_size;
        (
            (size.width + self.font.character_spacing) as i32,
            size.height as i32,
        )
    }

    fn render<T>(&self, display: &mut T, session: &EditSession, show_preview: bool)
    where
        T: DrawTarget<Color = Rgb565>,
    {
        let (w, h) = self.cell_size();
        let len = session.text().len() as i32;
        let Point { x, y } = self.origin;
        let cursor_x = x + w * session.cursor() as i32;
        let text = session.text().as_str().unwrap_or("");
        let style = MonoTextStyle::new(self.font, Rgb565::WHITE);

        if show_preview {
            clear(display, Point::new(x, y - 3), w * len + w, h * 3 + 3);
            let current = session.current();
            draw_char(display, session.charset().prev(current), Point::new(cursor_x, y), style);
            draw_text(display, text, Point::new(x, y + h), style);
            underline(display, Point::new(cursor_x, y + h * 2 - 4), w);
            draw_char(display, session.charset().next(current), Point::new(cursor_x, y + h * 2), style);
        } else {
            clear(display, Point::new(x, y - 3), w * len, h + 4);
            draw_text(display, text, Point::new(x, y), style);
            underline(display, Point::new(cursor_x, y + h), w);
        }
    }
}

/// Run a session with the default font and charset at `origin`.
pub fn edit_string<P, D, T>(
    input: &mut InputReader<P, D>,
    display: &mut T,
    origin: Point,
    text: &mut EditBuffer,
    show_preview: bool,
) -> Button
where
    P: ButtonPort,
    D: DelayNs,
    T: DrawTarget<Color = Rgb565>,
{
    StringEditor::new(origin).edit(input, display, text, show_preview)
}

// Draw errors are dropped: the editor has no failure path.

fn clear<T: DrawTarget<Color = Rgb565>>(display: &mut T, top_left: Point, width: i32, height: i32) {
    let size = Size::new(width.max(0) as u32, height.max(0) as u32);
    let _ = Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(Rgb565::BLACK))
        .draw(display);
}

fn draw_text<T: DrawTarget<Color = Rgb565>>(
    display: &mut T,
    text: &str,
    position: Point,
    style: MonoTextStyle<'_, Rgb565>,
) {
    let _ = Text::with_baseline(text, position, style, Baseline::Top).draw(display);
}

fn draw_char<T: DrawTarget<Color = Rgb565>>(
    display: &mut T,
    c: u8,
    position: Point,
    style: MonoTextStyle<'_, Rgb565>,
) {
    let buf = [c];
    if let Ok(s) = core::str::from_utf8(&buf) {
        draw_text(display, s, position, style);
    }
}

fn underline<T: DrawTarget<Color = Rgb565>>(display: &mut T, start: Point, width: i32) {
    let _ = Line::new(start, Point::new(start.x + width, start.y))
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::RED, 1))
        .draw(display);
}
