use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::{Builder, TempPath};
use thiserror::Error;

/// Fixed output format handed to the renderer.
const FORMAT_FLAG: &str = "-Tpng";
const TEMP_PREFIX: &str = "graphview-";

#[derive(Debug, Error)]
pub enum CompileError {
    /// The input artifact could not be created or fully written, or the
    /// output artifact came back unusable. Nothing was rendered.
    #[error("failed to stage graph source: {0}")]
    Staging(#[source] io::Error),

    /// The renderer process could not be started at all.
    #[error("failed to launch renderer `{renderer}`: {source}")]
    Launch {
        renderer: String,
        #[source]
        source: io::Error,
    },

    /// The renderer ran and reported failure through its exit status.
    #[error("renderer exited with code {code}: {stderr}")]
    Render { code: i32, stderr: String },
}

/// A rendered image on disk. Owns its temporary file: dropping the value
/// deletes the file, so the last successful render stays on disk exactly
/// as long as someone (the display sink) holds this.
#[derive(Debug)]
pub struct RenderedImage {
    path: TempPath,
}

impl RenderedImage {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Compiles DOT source into a PNG by staging the text to a temporary
/// file and invoking the external renderer.
///
/// Each call stages to freshly named artifacts, so concurrent calls
/// cannot collide; cleanup of both artifacts on every exit path is
/// carried by their drop handlers, not by explicit error handling.
pub struct DotCompiler {
    renderer: PathBuf,
}

impl DotCompiler {
    pub fn new(renderer: impl Into<PathBuf>) -> Self {
        Self {
            renderer: renderer.into(),
        }
    }

    pub fn renderer(&self) -> &Path {
        &self.renderer
    }

    /// Render `source` to a PNG.
    ///
    /// Blocks until the renderer exits. A non-`Staging` result means the
    /// source text reached disk in full; callers use that as the point
    /// where the buffer's modified flag may be cleared.
    pub fn compile(&self, source: &str) -> Result<RenderedImage, CompileError> {
        let mut input = Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(".dot")
            .tempfile()
            .map_err(CompileError::Staging)?;
        input
            .write_all(source.as_bytes())
            .and_then(|_| input.flush())
            .map_err(CompileError::Staging)?;

        let output_path = Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(".png")
            .tempfile()
            .map_err(CompileError::Staging)?
            .into_temp_path();

        // dot accepts the output path glued to -o, as the original
        // invocation did: dot -Tpng -o<out> <in>
        let mut out_flag = OsString::from("-o");
        out_flag.push(output_path.as_os_str());

        let result = Command::new(&self.renderer)
            .arg(FORMAT_FLAG)
            .arg(out_flag)
            .arg(input.path())
            .output()
            .map_err(|source| CompileError::Launch {
                renderer: self.renderer.display().to_string(),
                source,
            })?;

        if !result.status.success() {
            return Err(CompileError::Render {
                code: result.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        // Exit 0 with nothing written still counts as a failed artifact.
        let size = std::fs::metadata(&output_path)
            .map_err(CompileError::Staging)?
            .len();
        if size == 0 {
            return Err(CompileError::Staging(io::Error::new(
                io::ErrorKind::InvalidData,
                "renderer reported success but produced an empty image",
            )));
        }

        Ok(RenderedImage { path: output_path })
    }
}
