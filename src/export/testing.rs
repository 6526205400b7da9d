//! Stand-in converters for exercising the fallback chain without real tools.

use super::{ConversionFailure, Converter};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// What a stub converter does when asked to convert.
#[derive(Clone, Copy)]
pub enum Behaviour {
    Unavailable,
    WritesPdf,
    WritesNothing,
    WritesEmptyFile,
    Errors,
}

pub struct Stub {
    name: &'static str,
    behaviour: Behaviour,
    attempts: Rc<Cell<usize>>,
}

impl Stub {
    pub fn boxed(
        name: &'static str,
        behaviour: Behaviour,
    ) -> (Box<dyn Converter>, Rc<Cell<usize>>) {
        let attempts = Rc::new(Cell::new(0));
        let stub: Box<dyn Converter> = Box::new(Stub {
            name,
            behaviour,
            attempts: Rc::clone(&attempts),
        });
        (stub, attempts)
    }
}

impl Converter for Stub {
    fn name(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        !matches!(self.behaviour, Behaviour::Unavailable)
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionFailure> {
        self.attempts.set(self.attempts.get() + 1);
        match self.behaviour {
            Behaviour::Unavailable => Err(ConversionFailure::Unavailable),
            Behaviour::WritesPdf => {
                let html = std::fs::read_to_string(input)?;
                std::fs::write(output, format!("%PDF-1.4 {html}"))?;
                Ok(())
            }
            Behaviour::WritesNothing => Ok(()),
            Behaviour::WritesEmptyFile => {
                std::fs::write(output, "")?;
                Ok(())
            }
            Behaviour::Errors => Err(ConversionFailure::Io(std::io::Error::other("boom"))),
        }
    }
}

pub fn html_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "<html><body>card</body></html>").expect("can write html");
    path
}
