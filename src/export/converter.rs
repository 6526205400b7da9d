use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Why a single conversion attempt didn't produce a usable PDF.
#[derive(Debug, Error)]
pub enum ConversionFailure {
    #[error("converter is not installed")]
    Unavailable,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("tool exited with {status}: {stderr}")]
    ToolFailed { status: ExitStatus, stderr: String },
    #[error("tool reported success but wrote no file")]
    MissingOutput,
    #[error("tool reported success but wrote an empty file")]
    EmptyOutput,
}

/// Something that can turn an HTML document into a PDF.
pub trait Converter {
    fn name(&self) -> &str;
    fn is_available(&self) -> bool;
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionFailure>;
}

/// A converter that runs the first executable it finds on the search path.
pub struct CommandConverter {
    name: &'static str,
    programs: &'static [&'static str],
    args: fn(&Path, &Path) -> Result<Vec<OsString>, ConversionFailure>,
}

impl CommandConverter {
    pub fn chrome() -> CommandConverter {
        CommandConverter {
            name: "Chrome",
            programs: &["google-chrome", "chrome", "chromium", "chromium-browser"],
            args: |input, output| {
                let input = input.canonicalize()?;
                let mut print_to = OsString::from("--print-to-pdf=");
                print_to.push(output);
                Ok(vec![
                    "--headless".into(),
                    "--disable-gpu".into(),
                    print_to,
                    "--no-margins".into(),
                    input.into(),
                ])
            },
        }
    }

    pub fn weasyprint() -> CommandConverter {
        CommandConverter {
            name: "WeasyPrint",
            programs: &["weasyprint"],
            args: |input, output| Ok(vec![input.into(), output.into()]),
        }
    }

    pub fn wkhtmltopdf() -> CommandConverter {
        CommandConverter {
            name: "wkhtmltopdf",
            programs: &["wkhtmltopdf"],
            args: |input, output| {
                Ok(vec![
                    "--enable-local-file-access".into(),
                    input.into(),
                    output.into(),
                ])
            },
        }
    }

    fn locate(&self) -> Option<PathBuf> {
        self.programs
            .iter()
            .find_map(|program| which::which(program).ok())
    }
}

impl Converter for CommandConverter {
    fn name(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.locate().is_some()
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionFailure> {
        let program = self.locate().ok_or(ConversionFailure::Unavailable)?;
        let args = (self.args)(input, output)?;
        log::debug!("Running {} {:?}", program.display(), args);

        // blocks until the tool exits; there is no timeout
        let result = Command::new(&program).args(&args).output()?;
        if !result.status.success() {
            return Err(ConversionFailure::ToolFailed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
