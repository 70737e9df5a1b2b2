use log::{debug, error};

use std::io::{self, Write};

/// Something that gets the user's attention when the countdown is done.
pub trait Alarm {
    fn ring(&mut self);
    fn silence(&mut self);
}

/// Rings the terminal bell the program was started from.
pub struct Bell<W> {
    out: W,
}

impl Bell<io::Stdout> {
    pub fn new() -> Bell<io::Stdout> {
        Bell { out: io::stdout() }
    }
}

impl Default for Bell<io::Stdout> {
    fn default() -> Self {
        Bell::new()
    }
}

impl<W: Write> Bell<W> {
    pub fn with_output(out: W) -> Bell<W> {
        Bell { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Alarm for Bell<W> {
    fn ring(&mut self) {
        debug!("Ringing bell");
        let res = self
            .out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush());

        if let Err(e) = res {
            error!("Failed to ring bell: {}", e);
        }
    }

    fn silence(&mut self) {
        // A bell stops on its own
    }
}
