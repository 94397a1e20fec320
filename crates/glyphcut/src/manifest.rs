//! Frame manifests stored as property lists (cocos2d / TexturePacker style).
//!
//! Frames are read from the top level `frames` dictionary. Each entry needs a
//! source rect under `textureRect` (format 3) or `frame` (formats 1 and 2);
//! the rotation flag is `textureRotated` or `rotated` and defaults to false.
use std::{io::Cursor, path::Path};

use plist::{Dictionary, Value};

use crate::{
    error::{CutError, Result},
    rect::Rect,
    sprite::{Frame, FrameManifest},
};

const RECT_KEYS: [&str; 2] = ["textureRect", "frame"];
const ROTATED_KEYS: [&str; 2] = ["textureRotated", "rotated"];

impl FrameManifest {
    pub fn from_plist_bytes(bytes: &[u8]) -> Result<Self> {
        let value = Value::from_reader(Cursor::new(bytes))
            .map_err(|e| CutError::Manifest(format!("plist parse error: {e}")))?;
        Self::from_plist_value(&value)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_plist_bytes(&bytes)
    }

    pub fn from_plist_value(value: &Value) -> Result<Self> {
        let root = value
            .as_dictionary()
            .ok_or_else(|| CutError::Manifest("root is not a dictionary".into()))?;
        let frames = root
            .get("frames")
            .and_then(Value::as_dictionary)
            .ok_or_else(|| CutError::Manifest("missing frames dictionary".into()))?;

        let mut manifest = FrameManifest::new();
        for (name, entry) in frames {
            let entry = entry
                .as_dictionary()
                .ok_or_else(|| CutError::Manifest(format!("frame {name} is not a dictionary")))?;
            manifest.push(name.as_str(), parse_frame(name, entry)?)?;
        }
        Ok(manifest)
    }
}

fn parse_frame(name: &str, entry: &Dictionary) -> Result<Frame> {
    let rect = RECT_KEYS
        .iter()
        .find_map(|k| entry.get(k))
        .ok_or_else(|| CutError::Manifest(format!("frame {name} has no textureRect")))?
        .as_string()
        .ok_or_else(|| CutError::Manifest(format!("frame {name}: rect is not a string")))?
        .parse::<Rect>()?;
    let rotated = match ROTATED_KEYS.iter().find_map(|k| entry.get(k)) {
        None => false,
        Some(v) => v
            .as_boolean()
            .ok_or_else(|| CutError::Manifest(format!("frame {name}: rotated is not a bool")))?,
    };
    Ok(Frame { rect, rotated })
}
