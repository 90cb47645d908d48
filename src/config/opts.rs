use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::MaskCanvas;
use crate::foundation::error::{BlurError, BlurResult};

/// Which capability provider an engine is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Cpu,
    None,
}

/// Engine-level options, fixed for the lifetime of a host view.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOpts {
    pub mask_width: u32,
    pub mask_height: u32,
    pub provider: ProviderKind,
    pub normalize_edges: bool,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            mask_width: MaskCanvas::NOMINAL.width,
            mask_height: MaskCanvas::NOMINAL.height,
            provider: ProviderKind::default(),
            normalize_edges: true,
        }
    }
}

impl EngineOpts {
    pub fn from_reader<R: std::io::Read>(r: R) -> BlurResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| BlurError::serde(format!("parse engine options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_json_str(s: &str) -> BlurResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> BlurResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlurError::validation(format!("open engine options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> BlurResult<()> {
        if self.mask_width == 0 || self.mask_height == 0 {
            return Err(BlurError::validation("mask canvas must be non-empty"));
        }
        Ok(())
    }

    pub fn mask_canvas(&self) -> MaskCanvas {
        MaskCanvas {
            width: self.mask_width,
            height: self.mask_height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/opts.rs"]
mod tests;
