//! Showing the saved chart: hand the image to a viewer program and
//! block until it exits.

use std::{path::Path, process::Command};

use itertools::Itertools;

use crate::{error::ChartError, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// Only save the image
    Disabled,
    /// `open -W` on macOS, `start /WAIT` on Windows, `xdg-open`
    /// elsewhere; whether `xdg-open` waits for the window to be closed
    /// depends on the desktop's handler for the file type
    SystemDefault,
    /// Run this program with the image path as its only argument
    Program(String),
}

impl Viewer {
    /// Program and arguments preceding the image path; None for
    /// `Disabled`.
    pub fn command_line(&self) -> Option<(String, Vec<String>)> {
        match self {
            Viewer::Disabled => None,
            Viewer::SystemDefault => {
                let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
                    ("open", &["-W"])
                } else if cfg!(windows) {
                    ("cmd", &["/C", "start", "/WAIT", ""])
                } else {
                    ("xdg-open", &[])
                };
                Some((
                    program.into(),
                    args.iter().map(|s| s.to_string()).collect(),
                ))
            }
            Viewer::Program(program) => Some((program.clone(), Vec::new())),
        }
    }

    /// Blocks until the viewer exits. A viewer that exits with an
    /// error status is only warned about, the image is saved anyway.
    pub fn show(&self, image: &Path) -> Result<(), ChartError> {
        let Some((program, args)) = self.command_line() else {
            info!("not showing {image:?}, viewer disabled");
            return Ok(());
        };
        info!(
            "showing {image:?} with: {program} {}",
            args.iter().map(|a| format!("{a:?}")).join(" ")
        );
        let status = Command::new(&program)
            .args(&args)
            .arg(image)
            .status()
            .map_err(|source| ChartError::Viewer {
                program: program.clone(),
                source,
            })?;
        if !status.success() {
            warn!("viewer {program:?} for {image:?} exited with {status}");
        }
        Ok(())
    }
}
