//! Streaming emission of the registration function.

use std::{io::Write, path::Path};

use assetgen_core::{Asset, Config, Error, Result};
use tracing::{debug, info, warn};

use crate::{builder::CodeBuilder, registration::RegistrationFunction};

/// What a successful [`Generator::emit`] produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Registration statements written, duplicates included.
    pub assets: usize,
    /// Raw content bytes embedded across all assets.
    pub content_bytes: usize,
}

/// Turns asset files into a C++ function registering them with a registry.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load each of `paths` in order and stream the generated function to `out`.
    ///
    /// Each asset's statement is written only after the asset has been loaded
    /// in full, so a path outside the root or an unreadable file stops
    /// emission before any of that file's output. Statements already written
    /// for earlier files stay in `out`; callers must discard the output of a
    /// failed run.
    pub fn emit<P, W>(&self, function: &str, paths: &[P], mut out: W) -> Result<EmitSummary>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let function = RegistrationFunction::new(function, &self.config);
        info!(function = %function.name, files = paths.len(), "generating registration function");

        let mut code = CodeBuilder::new();
        code.push_line(function.header()).push_indent();
        out.write_all(&code.take()).map_err(Error::write)?;

        let mut summary = EmitSummary::default();
        for path in paths {
            let path = path.as_ref();
            let asset = Asset::load(&self.config.root, path)?;
            if !asset.is_utf8() {
                warn!(
                    path = %path.display(),
                    "content is not valid UTF-8; bytes are embedded unchanged"
                );
            }

            let registration = function.registration(&asset);
            debug!(
                key = %asset.key,
                size = asset.content.len(),
                escaped = registration.literal_len(),
                content_type = %asset.content_type,
                modified = asset.modified,
                "embedding asset"
            );

            code.emit(&registration);
            out.write_all(&code.take()).map_err(Error::write)?;

            summary.assets += 1;
            summary.content_bytes += asset.content.len();
        }

        code.push_dedent().push_line(function.footer());
        out.write_all(&code.take()).map_err(Error::write)?;
        out.flush().map_err(Error::write)?;

        Ok(summary)
    }

    /// Render already loaded assets into a complete function.
    pub fn render(&self, function: &str, assets: &[Asset]) -> Vec<u8> {
        let function = RegistrationFunction::new(function, &self.config);

        let mut code = CodeBuilder::new();
        code.push_line(function.header()).push_indent();
        for asset in assets {
            code.emit(&function.registration(asset));
        }
        code.push_dedent().push_line(function.footer());
        code.build()
    }
}
