use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::IconTarget;

pub const MANIFEST_FILENAME: &str = "icons.manifest.json";

/// One entry of a web app manifest `icons` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<&IconTarget> for ManifestIcon {
    fn from(target: &IconTarget) -> Self {
        Self {
            src: target.filename.clone(),
            sizes: target.sizes(),
            mime_type: target.format.mime_type().to_string(),
        }
    }
}

/// Write the manifest icon list for `targets` into `output_dir`
pub fn write_icon_manifest(output_dir: &Path, targets: &[IconTarget]) -> Result<PathBuf> {
    let entries: Vec<ManifestIcon> = targets.iter().map(ManifestIcon::from).collect();
    let sidecar_path = output_dir.join(MANIFEST_FILENAME);

    let json_string = serde_json::to_string_pretty(&entries)?;
    std::fs::write(&sidecar_path, json_string)?;

    info!("Created icon manifest sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IconFormat;

    #[test]
    fn entry_uses_manifest_field_names() {
        let target = IconTarget::new("favicon.ico", 64, 64, IconFormat::Ico);
        let value = serde_json::to_value(ManifestIcon::from(&target)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "src": "favicon.ico", "sizes": "64x64", "type": "image/x-icon" })
        );
    }
}
